// Situation analysis: runs every assessor over one player and bundles the
// results into a single immutable snapshot for the advisors.

pub mod form;
pub mod market;
pub mod potential;
pub mod rating;
pub mod stats;

use serde::Serialize;
use tracing::debug;

use crate::config::EngineConfig;
use crate::player::{GameState, MatchRecord, Player};
use crate::team_fit::{resolve_team_fit, TeamFitEvaluator, TeamFitSource};

use self::form::{Form, RecentOutput};
use self::market::MarketPosition;
use self::potential::DevelopmentPotential;
use self::stats::StatAnalysis;

/// Everything the advisors know about a player for one call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    pub recent_form: Form,
    pub stat_analysis: StatAnalysis,
    pub development_potential: DevelopmentPotential,
    pub team_fit: f64,
    /// Whether `team_fit` is real signal or a stand-in.
    pub team_fit_source: TeamFitSource,
    pub injury_risk: f64,
    pub overall_rating: i32,
    pub market_position: MarketPosition,
    pub recent_output: RecentOutput,
    /// Length of the full history, not just the form window.
    pub total_matches: usize,
    pub week_in_season: u32,
    pub season: u32,
}

/// Build the analysis snapshot for a player.
///
/// `history` is chronological; only its trailing window feeds the form
/// label and recent output.
pub fn analyze_situation<E: TeamFitEvaluator + ?Sized>(
    player: &Player,
    game_state: &GameState,
    history: &[MatchRecord],
    team_fit: &E,
    config: &EngineConfig,
) -> Analysis {
    let window = config.analysis.form_window;

    let recent_form =
        form::evaluate_form(history, window, config.analysis.default_performance_score);
    let recent_output = form::summarize_recent_output(history, window);
    let stat_analysis = stats::analyze_stat_distribution(&player.stats);
    let overall_rating = rating::rate_player(player);
    let development_potential = potential::assess_development_potential(
        player,
        overall_rating,
        config.analysis.default_potential,
    );
    let (team_fit, team_fit_source) =
        resolve_team_fit(team_fit, player, game_state, config.team_fit.placeholder);
    let injury_risk = market::assess_injury_risk(player);
    let market_position = market::assess_market_position(overall_rating, player.market_value);

    debug!(
        player = player.display_name(),
        rating = overall_rating,
        form = recent_form.label(),
        market = market_position.label(),
        injury_risk,
        team_fit,
        ?team_fit_source,
        "situation analysed"
    );

    Analysis {
        recent_form,
        stat_analysis,
        development_potential,
        team_fit,
        team_fit_source,
        injury_risk,
        overall_rating,
        market_position,
        recent_output,
        total_matches: history.len(),
        week_in_season: game_state.current_week,
        season: game_state.current_season,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
