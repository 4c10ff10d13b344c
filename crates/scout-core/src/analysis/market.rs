// Market position and injury risk.

use serde::{Deserialize, Serialize};

use crate::player::Player;

// ---------------------------------------------------------------------------
// Market position
// ---------------------------------------------------------------------------

const UNDERVALUED_MIN_RATING: i32 = 85;
const UNDERVALUED_MAX_VALUE: f64 = 2_000_000.0;
const OVERVALUED_MAX_RATING: i32 = 70;
const OVERVALUED_MIN_VALUE: f64 = 1_000_000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarketPosition {
    Undervalued,
    FairValue,
    Overvalued,
}

impl MarketPosition {
    pub fn label(&self) -> &'static str {
        match self {
            MarketPosition::Undervalued => "undervalued",
            MarketPosition::FairValue => "fair value",
            MarketPosition::Overvalued => "overvalued",
        }
    }
}

/// Compare a rating against the player's market value.
pub fn assess_market_position(rating: i32, market_value: f64) -> MarketPosition {
    if rating > UNDERVALUED_MIN_RATING && market_value < UNDERVALUED_MAX_VALUE {
        MarketPosition::Undervalued
    } else if rating < OVERVALUED_MAX_RATING && market_value > OVERVALUED_MIN_VALUE {
        MarketPosition::Overvalued
    } else {
        MarketPosition::FairValue
    }
}

// ---------------------------------------------------------------------------
// Injury risk
// ---------------------------------------------------------------------------

pub const BASE_INJURY_RISK: f64 = 0.1;
pub const MAX_INJURY_RISK: f64 = 0.8;

const PER_PREVIOUS_INJURY: f64 = 0.05;

/// Estimated injury risk in [0.1, 0.8].
///
/// Age and stamina penalties stack: a 36-year-old picks up both the
/// over-30 and over-35 increments. A sheet without stamina adds nothing
/// for it.
pub fn assess_injury_risk(player: &Player) -> f64 {
    let mut risk = BASE_INJURY_RISK;

    if player.age > 30 {
        risk += 0.1;
    }
    if player.age > 35 {
        risk += 0.2;
    }

    if let Some(stamina) = player.stats.get("stamina") {
        if stamina < 60.0 {
            risk += 0.15;
        }
        if stamina < 40.0 {
            risk += 0.2;
        }
    }

    risk += PER_PREVIOUS_INJURY * player.injuries.len() as f64;

    risk.min(MAX_INJURY_RISK)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::Position;

    fn player(age: u32, stamina: f64, injuries: usize) -> Player {
        Player::new(Position::Midfielder, age)
            .with_stats([("stamina", stamina)])
            .with_injuries(injuries)
    }

    #[test]
    fn market_position_rules() {
        assert_eq!(assess_market_position(88, 1_500_000.0), MarketPosition::Undervalued);
        assert_eq!(assess_market_position(85, 1_500_000.0), MarketPosition::FairValue);
        assert_eq!(assess_market_position(88, 2_000_000.0), MarketPosition::FairValue);
        assert_eq!(assess_market_position(65, 1_200_000.0), MarketPosition::Overvalued);
        assert_eq!(assess_market_position(70, 1_200_000.0), MarketPosition::FairValue);
        assert_eq!(assess_market_position(65, 1_000_000.0), MarketPosition::FairValue);
    }

    #[test]
    fn healthy_young_player_has_base_risk() {
        assert!((assess_injury_risk(&player(24, 80.0, 0)) - 0.1).abs() < 1e-9);
    }

    #[test]
    fn age_and_stamina_penalties_stack() {
        // 0.1 + 0.1 + 0.2 (age 36) + 0.15 + 0.2 (stamina 30) = 0.75
        assert!((assess_injury_risk(&player(36, 30.0, 0)) - 0.75).abs() < 1e-9);
        // 0.1 + 0.1 (age 31) + 0.15 (stamina 50) + 0.05 * 2 = 0.45
        assert!((assess_injury_risk(&player(31, 50.0, 2)) - 0.45).abs() < 1e-9);
    }

    #[test]
    fn risk_is_capped() {
        assert!((assess_injury_risk(&player(38, 20.0, 10)) - MAX_INJURY_RISK).abs() < 1e-9);
    }

    #[test]
    fn missing_stamina_adds_nothing() {
        let p = Player::new(Position::Forward, 25);
        assert!((assess_injury_risk(&p) - BASE_INJURY_RISK).abs() < 1e-9);
    }

    #[test]
    fn risk_is_monotone_and_bounded() {
        let ages = [18, 25, 30, 31, 35, 36, 40];
        let staminas = [100.0, 60.0, 59.0, 40.0, 39.0, 0.0];
        let injury_counts = [0, 1, 3, 8, 20];

        for &age in &ages {
            for &stamina in &staminas {
                for &injuries in &injury_counts {
                    let r = assess_injury_risk(&player(age, stamina, injuries));
                    assert!((BASE_INJURY_RISK..=MAX_INJURY_RISK).contains(&r));

                    let older = assess_injury_risk(&player(age + 1, stamina, injuries));
                    assert!(older >= r, "risk fell with age at {age}");

                    let more_injured = assess_injury_risk(&player(age, stamina, injuries + 1));
                    assert!(more_injured >= r, "risk fell with injuries at {injuries}");

                    let fitter = assess_injury_risk(&player(age, stamina + 1.0, injuries));
                    assert!(fitter <= r, "risk rose with stamina at {stamina}");
                }
            }
        }
    }
}
