// Transfer advice: whether a move makes sense now, and which kind of club
// to target.

use serde::{Deserialize, Serialize};

use crate::analysis::form::Form;
use crate::analysis::market::MarketPosition;
use crate::analysis::Analysis;
use crate::player::Player;

/// Team fit below this suggests the player would be better off elsewhere.
pub const POOR_TEAM_FIT: f64 = 0.6;
/// Market value above which a hot streak makes this a good time to sell.
pub const HOT_STREAK_MIN_VALUE: f64 = 1_000_000.0;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransferTiming {
    NotRecommended,
    GoodTime,
}

impl TransferTiming {
    pub fn label(&self) -> &'static str {
        match self {
            TransferTiming::NotRecommended => "not recommended",
            TransferTiming::GoodTime => "good time",
        }
    }
}

/// Kind of club a player of a given rating could target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TeamTier {
    Elite,
    TopFlight,
    Competitive,
    Development,
}

impl TeamTier {
    pub fn label(&self) -> &'static str {
        match self {
            TeamTier::Elite => "Elite clubs competing in Europe",
            TeamTier::TopFlight => "Established top-flight clubs",
            TeamTier::Competitive => "Ambitious mid-table sides",
            TeamTier::Development => "Clubs offering guaranteed first-team football",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferAdvice {
    pub should_consider_transfer: bool,
    pub reasons: Vec<String>,
    pub suggested_team_types: Vec<TeamTier>,
    pub timing: TransferTiming,
}

impl TransferAdvice {
    /// Worth surfacing as a recommendation at all.
    pub fn is_actionable(&self) -> bool {
        self.should_consider_transfer || self.timing == TransferTiming::GoodTime
    }
}

// ---------------------------------------------------------------------------
// Rules
// ---------------------------------------------------------------------------

/// Tiers are cumulative: a rating of 90 qualifies for elite, top-flight and
/// competitive clubs at once.
pub fn suggest_team_tiers(rating: i32) -> Vec<TeamTier> {
    let mut tiers = Vec::new();
    if rating >= 85 {
        tiers.push(TeamTier::Elite);
    }
    if rating >= 75 {
        tiers.push(TeamTier::TopFlight);
    }
    if rating >= 65 {
        tiers.push(TeamTier::Competitive);
    }
    if rating < 65 {
        tiers.push(TeamTier::Development);
    }
    tiers
}

/// Rules are independent and their reasons accumulate. A hot streak only
/// changes timing; it never flags a transfer on its own.
pub fn generate_transfer_advice(player: &Player, analysis: &Analysis) -> TransferAdvice {
    let mut should_consider_transfer = false;
    let mut reasons = Vec::new();
    let mut timing = TransferTiming::NotRecommended;

    if analysis.team_fit < POOR_TEAM_FIT {
        should_consider_transfer = true;
        reasons.push("Poor fit with the current team's tactics".to_string());
    }

    if analysis.market_position == MarketPosition::Undervalued {
        should_consider_transfer = true;
        reasons.push("Your market value is below your ability: a move could reflect your level".to_string());
    }

    if analysis.recent_form == Form::Excellent && player.market_value > HOT_STREAK_MIN_VALUE {
        timing = TransferTiming::GoodTime;
        reasons.push("Excellent recent form has pushed your value up".to_string());
    }

    TransferAdvice {
        should_consider_transfer,
        reasons,
        suggested_team_types: suggest_team_tiers(analysis.overall_rating),
        timing,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
