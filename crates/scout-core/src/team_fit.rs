// Team fit: how well a player suits their current team's tactics.
//
// The real score belongs to the match engine / tactics evaluator, which
// lives outside this crate. The analysis asks an injected evaluator and
// records where the number came from, so stubbed values are never
// mistaken for real signal.

use std::sync::Mutex;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::{TeamFitConfig, TeamFitMode};
use crate::player::{GameState, Player};

/// Range the random stub draws from.
pub const STUB_FIT_MIN: f64 = 0.7;
pub const STUB_FIT_MAX: f64 = 1.0;

// ---------------------------------------------------------------------------
// Evaluator seam
// ---------------------------------------------------------------------------

pub trait TeamFitEvaluator {
    /// Fit score, or `None` when no evaluation is available.
    fn evaluate(&self, player: &Player, game_state: &GameState) -> Option<f64>;

    /// Whether scores from this evaluator are stand-ins rather than signal.
    fn is_stub(&self) -> bool {
        false
    }
}

impl<T: TeamFitEvaluator + ?Sized> TeamFitEvaluator for Box<T> {
    fn evaluate(&self, player: &Player, game_state: &GameState) -> Option<f64> {
        (**self).evaluate(player, game_state)
    }

    fn is_stub(&self) -> bool {
        (**self).is_stub()
    }
}

impl<T: TeamFitEvaluator + ?Sized> TeamFitEvaluator for &T {
    fn evaluate(&self, player: &Player, game_state: &GameState) -> Option<f64> {
        (**self).evaluate(player, game_state)
    }

    fn is_stub(&self) -> bool {
        (**self).is_stub()
    }
}

/// No evaluator wired in. The analysis falls back to the configured
/// neutral placeholder.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderTeamFit;

impl TeamFitEvaluator for PlaceholderTeamFit {
    fn evaluate(&self, _player: &Player, _game_state: &GameState) -> Option<f64> {
        None
    }
}

/// Always returns the same score. Use it to pin team fit in tests or when
/// the caller already knows the value.
#[derive(Debug, Clone, Copy)]
pub struct FixedTeamFit(pub f64);

impl TeamFitEvaluator for FixedTeamFit {
    fn evaluate(&self, _player: &Player, _game_state: &GameState) -> Option<f64> {
        Some(self.0)
    }
}

/// Random stub drawing uniformly from [0.7, 1.0]. Seeded, so a run can be
/// replayed exactly.
#[derive(Debug)]
pub struct SeededTeamFit {
    rng: Mutex<ChaCha8Rng>,
}

impl SeededTeamFit {
    pub fn new(seed: u64) -> Self {
        SeededTeamFit {
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }
}

impl TeamFitEvaluator for SeededTeamFit {
    fn evaluate(&self, _player: &Player, _game_state: &GameState) -> Option<f64> {
        let mut rng = self.rng.lock().ok()?;
        Some(rng.gen_range(STUB_FIT_MIN..=STUB_FIT_MAX))
    }

    fn is_stub(&self) -> bool {
        true
    }
}

/// Build the evaluator selected in config.
pub fn from_config(config: &TeamFitConfig) -> Box<dyn TeamFitEvaluator + Send + Sync> {
    match config.mode {
        TeamFitMode::Placeholder => Box::new(PlaceholderTeamFit),
        TeamFitMode::Seeded => Box::new(SeededTeamFit::new(config.seed)),
    }
}

// ---------------------------------------------------------------------------
// Resolution
// ---------------------------------------------------------------------------

/// Where the team-fit number in an analysis came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TeamFitSource {
    /// Supplied by a real evaluator.
    Evaluated,
    /// Drawn by a random stub.
    RandomStub,
    /// No evaluator available; neutral placeholder substituted.
    Placeholder,
}

impl TeamFitSource {
    pub fn is_stub(&self) -> bool {
        !matches!(self, TeamFitSource::Evaluated)
    }
}

/// Ask the evaluator for a score, substituting `placeholder` when it has
/// none or returns something that is not a finite number.
pub fn resolve_team_fit<E: TeamFitEvaluator + ?Sized>(
    evaluator: &E,
    player: &Player,
    game_state: &GameState,
    placeholder: f64,
) -> (f64, TeamFitSource) {
    match evaluator.evaluate(player, game_state) {
        Some(score) if score.is_finite() => {
            let source = if evaluator.is_stub() {
                TeamFitSource::RandomStub
            } else {
                TeamFitSource::Evaluated
            };
            (score, source)
        }
        Some(score) => {
            warn!(
                "team fit evaluator returned {} for {}; using placeholder {}",
                score,
                player.display_name(),
                placeholder
            );
            (placeholder, TeamFitSource::Placeholder)
        }
        None => (placeholder, TeamFitSource::Placeholder),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
