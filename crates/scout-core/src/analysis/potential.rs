// Development headroom: how far a player can still grow and how likely
// they are to get there, judged by age alone.

use serde::Serialize;

use crate::player::Player;

/// Ceiling assumed when the player record carries no potential.
pub const DEFAULT_POTENTIAL: u32 = 85;

/// Age at which growth likelihood bottoms out.
const PEAK_GROWTH_CUTOFF_AGE: f64 = 30.0;
/// Years over which likelihood falls from its maximum to the floor.
const GROWTH_SPAN_YEARS: f64 = 12.0;
const MIN_LIKELIHOOD: f64 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DevelopmentPotential {
    pub ceiling: u32,
    pub current: i32,
    pub remaining: u32,
    /// Always within [0.2, 1.0].
    pub likelihood: f64,
}

pub fn assess_development_potential(
    player: &Player,
    current_rating: i32,
    default_ceiling: u32,
) -> DevelopmentPotential {
    let ceiling = player.potential.unwrap_or(default_ceiling);
    let gap = (i64::from(ceiling) - i64::from(current_rating)).max(0);
    let remaining = u32::try_from(gap).unwrap_or(u32::MAX);

    DevelopmentPotential {
        ceiling,
        current: current_rating,
        remaining,
        likelihood: growth_likelihood(player.age),
    }
}

/// `age_factor * 0.8 + 0.2`, where the factor falls linearly to zero at 30.
pub fn growth_likelihood(age: u32) -> f64 {
    let age_factor = ((PEAK_GROWTH_CUTOFF_AGE - f64::from(age)) / GROWTH_SPAN_YEARS).max(0.0);
    (age_factor * (1.0 - MIN_LIKELIHOOD) + MIN_LIKELIHOOD).min(1.0)
}
