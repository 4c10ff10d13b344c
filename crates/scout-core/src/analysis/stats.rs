// Attribute distribution: which attributes stand out above or below the
// player's own average, and how spread out the profile is overall.

use serde::{Deserialize, Serialize};

use crate::player::StatSheet;

/// Distance from the mean an attribute must reach to count as a strength
/// or weakness.
pub const STRENGTH_MARGIN: f64 = 10.0;

/// Largest max-min spread still classed as balanced.
const BALANCED_SPREAD: f64 = 15.0;
/// Largest max-min spread still classed as specialized.
const SPECIALIZED_SPREAD: f64 = 25.0;

// ---------------------------------------------------------------------------
// Distribution shape
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Distribution {
    Balanced,
    Specialized,
    HighlySpecialized,
}

impl Distribution {
    /// Classify from the spread between the highest and lowest attribute.
    pub fn from_spread(spread: f64) -> Self {
        if spread <= BALANCED_SPREAD {
            Distribution::Balanced
        } else if spread <= SPECIALIZED_SPREAD {
            Distribution::Specialized
        } else {
            Distribution::HighlySpecialized
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Distribution::Balanced => "balanced",
            Distribution::Specialized => "specialized",
            Distribution::HighlySpecialized => "highly specialized",
        }
    }
}

// ---------------------------------------------------------------------------
// Stat analysis
// ---------------------------------------------------------------------------

/// Every attribute lands in exactly one of the three lists, in sheet order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatAnalysis {
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub balanced: Vec<String>,
    pub average: f64,
    pub distribution: Distribution,
}

/// Split a stat sheet into strengths, weaknesses and balanced attributes.
///
/// An empty sheet yields empty lists, an average of 0 and a balanced shape.
pub fn analyze_stat_distribution(stats: &StatSheet) -> StatAnalysis {
    let average = mean(stats);

    let mut strengths = Vec::new();
    let mut weaknesses = Vec::new();
    let mut balanced = Vec::new();

    for (name, value) in stats.iter() {
        if value >= average + STRENGTH_MARGIN {
            strengths.push(name.to_string());
        } else if value <= average - STRENGTH_MARGIN {
            weaknesses.push(name.to_string());
        } else {
            balanced.push(name.to_string());
        }
    }

    StatAnalysis {
        strengths,
        weaknesses,
        balanced,
        average,
        distribution: Distribution::from_spread(spread(stats)),
    }
}

fn mean(stats: &StatSheet) -> f64 {
    if stats.is_empty() {
        return 0.0;
    }
    stats.values().sum::<f64>() / stats.len() as f64
}

fn spread(stats: &StatSheet) -> f64 {
    let mut values = stats.values();
    let Some(first) = values.next() else {
        return 0.0;
    };
    let (min, max) = values.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v)));
    max - min
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
