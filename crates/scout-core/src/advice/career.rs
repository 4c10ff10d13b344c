// Career guidance: age-derived stage with fixed goals, pathway and
// timeframe per stage.

use serde::{Deserialize, Serialize};

use crate::analysis::Analysis;
use crate::player::Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CareerStage {
    Prospect,
    Developing,
    Peak,
    Veteran,
}

impl CareerStage {
    pub fn from_age(age: u32) -> Self {
        match age {
            0..=22 => CareerStage::Prospect,
            23..=27 => CareerStage::Developing,
            28..=32 => CareerStage::Peak,
            _ => CareerStage::Veteran,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CareerStage::Prospect => "prospect",
            CareerStage::Developing => "developing",
            CareerStage::Peak => "peak",
            CareerStage::Veteran => "veteran",
        }
    }

    pub fn goals(&self) -> [&'static str; 3] {
        match self {
            CareerStage::Prospect => [
                "Earn regular first-team minutes",
                "Develop a complete technical foundation",
                "Learn from experienced teammates",
            ],
            CareerStage::Developing => [
                "Establish yourself as a consistent starter",
                "Turn your strengths into a signature playing style",
                "Attract attention from bigger clubs",
            ],
            CareerStage::Peak => [
                "Compete for major trophies",
                "Take on a leadership role in the squad",
                "Maximise your market value and contract terms",
            ],
            CareerStage::Veteran => [
                "Manage your workload to extend your career",
                "Mentor the younger players around you",
                "Plan your transition after playing",
            ],
        }
    }

    pub fn timeframe(&self) -> &'static str {
        match self {
            CareerStage::Prospect => "Next 3-5 years are crucial for development",
            CareerStage::Developing => "Next 2-3 years will define your career level",
            CareerStage::Peak => "Make the most of the next 3-4 years at your best",
            CareerStage::Veteran => "Focus on the remaining 2-3 seasons at the top level",
        }
    }
}

/// Short, medium and long-term steps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerPathway {
    pub short_term: String,
    pub medium_term: String,
    pub long_term: String,
}

impl CareerPathway {
    /// The same three steps for every stage.
    // TODO: vary the pathway by career stage once product confirms the copy.
    pub fn standard() -> Self {
        CareerPathway {
            short_term: "Focus on improving current weaknesses".into(),
            medium_term: "Build consistency and reputation".into(),
            long_term: "Achieve career goals and leave a legacy".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerGuidance {
    pub stage: CareerStage,
    pub goals: Vec<String>,
    pub pathway: CareerPathway,
    pub timeframe: String,
}

/// Stage from age. `_rating` is part of the signature so a rating-aware
/// classification can slot in without touching callers; it is unused today.
pub fn classify_career_stage(age: u32, _rating: i32) -> CareerStage {
    CareerStage::from_age(age)
}

pub fn generate_career_guidance(player: &Player, analysis: &Analysis) -> CareerGuidance {
    let stage = classify_career_stage(player.age, analysis.overall_rating);

    CareerGuidance {
        stage,
        goals: stage.goals().iter().map(|g| g.to_string()).collect(),
        pathway: CareerPathway::standard(),
        timeframe: stage.timeframe().to_string(),
    }
}
