// Recent form: reduces the trailing window of match history to a label.

use serde::{Deserialize, Serialize};

use crate::player::MatchRecord;

/// Number of most recent matches considered.
pub const DEFAULT_FORM_WINDOW: usize = 5;

/// Score assumed for a match with no recorded performance score.
pub const DEFAULT_PERFORMANCE_SCORE: f64 = 6.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Form {
    Excellent,
    Good,
    Average,
    Poor,
    Terrible,
    /// No matches in the window.
    Unknown,
}

impl Form {
    pub fn label(&self) -> &'static str {
        match self {
            Form::Excellent => "excellent",
            Form::Good => "good",
            Form::Average => "average",
            Form::Poor => "poor",
            Form::Terrible => "terrible",
            Form::Unknown => "unknown",
        }
    }

    /// Classify from mean score and win rate. First matching rule wins.
    pub fn classify(avg_score: f64, win_rate: f64) -> Self {
        if avg_score >= 8.0 && win_rate >= 0.6 {
            Form::Excellent
        } else if avg_score >= 7.0 && win_rate >= 0.4 {
            Form::Good
        } else if avg_score >= 6.0 {
            Form::Average
        } else if avg_score >= 5.0 {
            Form::Poor
        } else {
            Form::Terrible
        }
    }
}

/// The trailing `window` records of a chronological history.
pub fn recent_window(history: &[MatchRecord], window: usize) -> &[MatchRecord] {
    &history[history.len().saturating_sub(window)..]
}

/// Form over the last five matches with the standard default score.
pub fn calculate_recent_form(history: &[MatchRecord]) -> Form {
    evaluate_form(history, DEFAULT_FORM_WINDOW, DEFAULT_PERFORMANCE_SCORE)
}

/// Form over the last `window` matches; records without a score count as
/// `default_score`.
pub fn evaluate_form(history: &[MatchRecord], window: usize, default_score: f64) -> Form {
    let recent = recent_window(history, window);
    if recent.is_empty() {
        return Form::Unknown;
    }

    let n = recent.len() as f64;
    let avg_score = recent.iter().map(|m| m.score_or(default_score)).sum::<f64>() / n;
    let win_rate = recent.iter().filter(|m| m.is_win()).count() as f64 / n;

    Form::classify(avg_score, win_rate)
}

// ---------------------------------------------------------------------------
// Recent output
// ---------------------------------------------------------------------------

/// Goal contributions over the same window the form label uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentOutput {
    pub matches: usize,
    pub goals: u32,
    pub assists: u32,
}

pub fn summarize_recent_output(history: &[MatchRecord], window: usize) -> RecentOutput {
    let recent = recent_window(history, window);
    RecentOutput {
        matches: recent.len(),
        goals: recent.iter().map(|m| m.player_performance.goals).sum(),
        assists: recent.iter().map(|m| m.player_performance.assists).sum(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
