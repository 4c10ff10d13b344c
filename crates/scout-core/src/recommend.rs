// Recommendation engine: analysis, then the four advisors, merged into one
// ordered list.
//
// The engine holds configuration and the team-fit evaluator only. Every
// call builds its lists locally, so one engine can serve many callers.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::advice::career::{generate_career_guidance, CareerGuidance};
use crate::advice::tactical::{generate_tactical_advice, top_advice, TACTICAL_ADVICE_LIMIT};
use crate::advice::training::{generate_training_plan, TrainingEntry};
use crate::advice::transfer::{generate_transfer_advice, TransferAdvice};
use crate::analysis::form::Form;
use crate::analysis::{analyze_situation, Analysis};
use crate::config::EngineConfig;
use crate::player::{GameState, MatchRecord, Player};
use crate::team_fit::{PlaceholderTeamFit, TeamFitEvaluator};

// ---------------------------------------------------------------------------
// Recommendation types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "HIGH",
            Priority::Medium => "MEDIUM",
            Priority::Low => "LOW",
        }
    }
}

/// Closed set of recommendation kinds. Consumers switch on this to route
/// recommendations into sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationType {
    Tactical,
    Training,
    Career,
    Transfer,
}

impl RecommendationType {
    pub fn label(&self) -> &'static str {
        match self {
            RecommendationType::Tactical => "tactical",
            RecommendationType::Training => "training",
            RecommendationType::Career => "career",
            RecommendationType::Transfer => "transfer",
        }
    }
}

/// Type-specific content. The variant is the recommendation's type, so the
/// two can never disagree; it serializes as a `"type"` tag.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum RecommendationPayload {
    Tactical { advice: Vec<String> },
    Training { plan: Vec<TrainingEntry> },
    Career { guidance: CareerGuidance },
    Transfer { advice: TransferAdvice },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub priority: Priority,
    pub title: String,
    pub description: String,
    #[serde(flatten)]
    pub payload: RecommendationPayload,
}

impl Recommendation {
    pub fn kind(&self) -> RecommendationType {
        match self.payload {
            RecommendationPayload::Tactical { .. } => RecommendationType::Tactical,
            RecommendationPayload::Training { .. } => RecommendationType::Training,
            RecommendationPayload::Career { .. } => RecommendationType::Career,
            RecommendationPayload::Transfer { .. } => RecommendationType::Transfer,
        }
    }
}

/// Result of one engine call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationBundle {
    /// Always tactical, training, career, then transfer when present.
    pub recommendations: Vec<Recommendation>,
    pub analysis: Analysis,
    /// Full tactical advice list, before the display limit.
    pub tactical_advice: Vec<String>,
    pub career_guidance: Vec<CareerGuidance>,
}

impl RecommendationBundle {
    pub fn by_type(&self, kind: RecommendationType) -> Option<&Recommendation> {
        self.recommendations.iter().find(|r| r.kind() == kind)
    }
}

// ---------------------------------------------------------------------------
// Individual recommendations
// ---------------------------------------------------------------------------

fn tactical_recommendation(advice: &[String], form: Form) -> Recommendation {
    let priority = match form {
        Form::Poor | Form::Terrible => Priority::High,
        _ => Priority::Medium,
    };
    Recommendation {
        priority,
        title: "Tactical Advice".into(),
        description: "Adjustments to make in your next matches".into(),
        payload: RecommendationPayload::Tactical {
            advice: top_advice(advice, TACTICAL_ADVICE_LIMIT),
        },
    }
}

fn training_recommendation(plan: Vec<TrainingEntry>) -> Recommendation {
    let description = match plan.len() {
        0 => "No specific focus needed: keep following the team programme".to_string(),
        1 => "1 focused training block for the coming weeks".to_string(),
        n => format!("{n} focused training blocks for the coming weeks"),
    };
    Recommendation {
        priority: Priority::Medium,
        title: "Training Plan".into(),
        description,
        payload: RecommendationPayload::Training { plan },
    }
}

fn career_recommendation(guidance: CareerGuidance) -> Recommendation {
    Recommendation {
        priority: Priority::Low,
        title: "Career Guidance".into(),
        description: format!(
            "Career stage: {}. {}",
            guidance.stage.label(),
            guidance.timeframe
        ),
        payload: RecommendationPayload::Career { guidance },
    }
}

/// `None` unless the advice is actionable.
fn transfer_recommendation(advice: TransferAdvice) -> Option<Recommendation> {
    if !advice.is_actionable() {
        return None;
    }
    let (priority, description) = if advice.should_consider_transfer {
        (Priority::High, "A transfer could help your career right now")
    } else {
        (Priority::Low, "Your value is high: a good moment to hear offers")
    };
    Some(Recommendation {
        priority,
        title: "Transfer Advice".into(),
        description: description.into(),
        payload: RecommendationPayload::Transfer { advice },
    })
}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

pub struct RecommendationEngine<E = PlaceholderTeamFit> {
    config: EngineConfig,
    team_fit: E,
}

impl RecommendationEngine<PlaceholderTeamFit> {
    /// Engine with no team-fit evaluator: every analysis uses the
    /// configured placeholder.
    pub fn new(config: EngineConfig) -> Self {
        RecommendationEngine {
            config,
            team_fit: PlaceholderTeamFit,
        }
    }
}

impl Default for RecommendationEngine<PlaceholderTeamFit> {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl<E: TeamFitEvaluator> RecommendationEngine<E> {
    pub fn with_team_fit(config: EngineConfig, team_fit: E) -> Self {
        RecommendationEngine { config, team_fit }
    }

    pub fn analyze(
        &self,
        player: &Player,
        game_state: &GameState,
        history: &[MatchRecord],
    ) -> Analysis {
        analyze_situation(player, game_state, history, &self.team_fit, &self.config)
    }

    /// Analyse the player and run every advisor.
    ///
    /// `history` is the full chronological match log; only its tail is read.
    pub fn generate_recommendations(
        &self,
        player: &Player,
        game_state: &GameState,
        history: &[MatchRecord],
    ) -> RecommendationBundle {
        let analysis = self.analyze(player, game_state, history);

        let tactical_advice = generate_tactical_advice(player, &analysis);
        let training_plan = generate_training_plan(player, &analysis);
        let career_guidance = generate_career_guidance(player, &analysis);
        let transfer_advice = generate_transfer_advice(player, &analysis);

        let mut recommendations = vec![
            tactical_recommendation(&tactical_advice, analysis.recent_form),
            training_recommendation(training_plan),
            career_recommendation(career_guidance.clone()),
        ];
        recommendations.extend(transfer_recommendation(transfer_advice));

        info!(
            "Generated {} recommendations for {} (rating {}, form {})",
            recommendations.len(),
            player.display_name(),
            analysis.overall_rating,
            analysis.recent_form.label()
        );

        RecommendationBundle {
            recommendations,
            analysis,
            tactical_advice,
            career_guidance: vec![career_guidance],
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
