// Overall rating: position-weighted average of the six core attributes.

use crate::player::{Player, Position, StatSheet};

/// Attribute weights for one position. Each set sums to 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionWeights {
    pub speed: f64,
    pub shooting: f64,
    pub passing: f64,
    pub defense: f64,
    pub stamina: f64,
    pub intelligence: f64,
}

impl PositionWeights {
    /// Weights for a position. Unrecognized positions use midfielder weights.
    pub fn for_position(position: &Position) -> Self {
        match position {
            Position::Forward => PositionWeights {
                speed: 0.25,
                shooting: 0.30,
                passing: 0.15,
                defense: 0.05,
                stamina: 0.10,
                intelligence: 0.15,
            },
            Position::Defender => PositionWeights {
                speed: 0.15,
                shooting: 0.05,
                passing: 0.15,
                defense: 0.35,
                stamina: 0.15,
                intelligence: 0.15,
            },
            Position::Goalkeeper => PositionWeights {
                speed: 0.10,
                shooting: 0.05,
                passing: 0.15,
                defense: 0.40,
                stamina: 0.10,
                intelligence: 0.20,
            },
            Position::Midfielder | Position::Unrecognized(_) => PositionWeights {
                speed: 0.15,
                shooting: 0.15,
                passing: 0.30,
                defense: 0.10,
                stamina: 0.15,
                intelligence: 0.15,
            },
        }
    }

    /// (attribute name, weight) pairs in a fixed order.
    pub fn pairs(&self) -> [(&'static str, f64); 6] {
        [
            ("speed", self.speed),
            ("shooting", self.shooting),
            ("passing", self.passing),
            ("defense", self.defense),
            ("stamina", self.stamina),
            ("intelligence", self.intelligence),
        ]
    }

    pub fn total(&self) -> f64 {
        self.pairs().iter().map(|(_, w)| w).sum()
    }
}

/// Weighted rating over the attributes the sheet actually has.
///
/// Missing attributes drop out of both the weighted sum and the weight
/// total, so they neither help nor hurt. No overlap at all rates 0.
pub fn calculate_overall_rating(position: &Position, stats: &StatSheet) -> i32 {
    let weights = PositionWeights::for_position(position);

    let (weighted_sum, applied_weight) = weights
        .pairs()
        .iter()
        .filter_map(|(name, w)| stats.get(name).map(|v| (v * w, *w)))
        .fold((0.0, 0.0), |(sum, total), (wv, w)| (sum + wv, total + w));

    if applied_weight <= 0.0 {
        return 0;
    }
    (weighted_sum / applied_weight).round() as i32
}

/// Convenience wrapper over [`calculate_overall_rating`] for a whole player.
pub fn rate_player(player: &Player) -> i32 {
    calculate_overall_rating(&player.position, &player.stats)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
