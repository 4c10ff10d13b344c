// Training plan: up to three sessions built from the stat analysis and the
// player's age band.

use serde::{Deserialize, Serialize};

use crate::analysis::Analysis;
use crate::player::Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intensity {
    Light,
    Medium,
    Intensive,
}

impl Intensity {
    pub fn label(&self) -> &'static str {
        match self {
            Intensity::Light => "light",
            Intensity::Medium => "medium",
            Intensity::Intensive => "intensive",
        }
    }
}

/// One line of the plan. Frequency and duration are fixed per category.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingEntry {
    pub focus: String,
    pub intensity: Intensity,
    pub frequency: String,
    pub duration: String,
    pub reason: String,
}

/// Players younger than this get a decision-making block.
const YOUTH_AGE_LIMIT: u32 = 25;
/// Players older than this get a stamina maintenance block.
const VETERAN_AGE_FLOOR: u32 = 30;

/// Build the plan in fixed order: first weakness, first strength, age band.
pub fn generate_training_plan(player: &Player, analysis: &Analysis) -> Vec<TrainingEntry> {
    let mut plan = Vec::new();
    let stats = &analysis.stat_analysis;

    if let Some(weakness) = stats.weaknesses.first() {
        plan.push(TrainingEntry {
            focus: weakness.clone(),
            intensity: Intensity::Intensive,
            frequency: "4 sessions per week".into(),
            duration: "6 weeks".into(),
            reason: format!("{weakness} is well below your average and limits your overall game"),
        });
    }

    if let Some(strength) = stats.strengths.first() {
        plan.push(TrainingEntry {
            focus: strength.clone(),
            intensity: Intensity::Light,
            frequency: "2 sessions per week".into(),
            duration: "ongoing".into(),
            reason: format!("keep {strength} sharp: it is what sets you apart"),
        });
    }

    if player.age < YOUTH_AGE_LIMIT {
        plan.push(TrainingEntry {
            focus: "intelligence".into(),
            intensity: Intensity::Medium,
            frequency: "3 sessions per week".into(),
            duration: "8 weeks".into(),
            reason: "young players gain the most from tactical understanding and decision making"
                .into(),
        });
    } else if player.age > VETERAN_AGE_FLOOR {
        plan.push(TrainingEntry {
            focus: "stamina".into(),
            intensity: Intensity::Light,
            frequency: "2 sessions per week".into(),
            duration: "ongoing".into(),
            reason: "maintaining fitness protects against injury later in a career".into(),
        });
    }

    plan
}
