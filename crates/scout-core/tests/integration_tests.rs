// Integration tests for the scout engine.
//
// These drive the library through its public API the way the CLI does:
// load a request and a match log from disk, build an engine from config,
// and check the composed recommendations end to end.

use std::fs;
use std::path::{Path, PathBuf};

use scout_core::advice::career::CareerStage;
use scout_core::advice::training::Intensity;
use scout_core::advice::transfer::TransferTiming;
use scout_core::analysis::form::Form;
use scout_core::analysis::market::MarketPosition;
use scout_core::config::{self, ConfigError, TeamFitMode};
use scout_core::match_log::{load_match_log, MatchLogError};
use scout_core::recommend::{Priority, RecommendationPayload, RecommendationType};
use scout_core::request::{load_request, RequestError};
use scout_core::team_fit::{self, FixedTeamFit, TeamFitSource};
use scout_core::{EngineConfig, RecommendationEngine};

/// Fixture directory path (relative to the crate root, which is the cwd for
/// `cargo test`).
const FIXTURES: &str = "tests/fixtures";

fn fixture(name: &str) -> PathBuf {
    Path::new(FIXTURES).join(name)
}

// ===========================================================================
// Forward with no match history
// ===========================================================================

#[test]
fn forward_request_end_to_end() {
    let request = load_request(&fixture("forward_request.json")).unwrap();
    let engine = RecommendationEngine::default();
    let bundle =
        engine.generate_recommendations(&request.player, &request.game_state, &request.match_history);

    let analysis = &bundle.analysis;
    assert_eq!(analysis.recent_form, Form::Unknown);
    assert_eq!(analysis.overall_rating, 68);
    assert_eq!(analysis.market_position, MarketPosition::FairValue);
    assert_eq!(analysis.team_fit_source, TeamFitSource::Placeholder);
    assert_eq!(analysis.week_in_season, 14);
    assert_eq!(analysis.season, 2);
    assert_eq!(analysis.stat_analysis.weaknesses, vec!["defense".to_string()]);

    assert!(bundle
        .tactical_advice
        .iter()
        .any(|line| line.contains("shooting drills")));

    match &bundle.by_type(RecommendationType::Training).unwrap().payload {
        RecommendationPayload::Training { plan } => {
            assert_eq!(plan[0].focus, "defense");
            assert_eq!(plan[0].intensity, Intensity::Intensive);
            assert_eq!(plan.last().unwrap().focus, "intelligence");
        }
        other => panic!("expected training payload, got {other:?}"),
    }

    assert_eq!(bundle.career_guidance.len(), 1);
    assert_eq!(bundle.career_guidance[0].stage, CareerStage::Developing);
    assert!(bundle.by_type(RecommendationType::Transfer).is_none());
}

// ===========================================================================
// Veteran on a hot streak, history from CSV
// ===========================================================================

#[test]
fn veteran_with_csv_history() {
    let request = load_request(&fixture("veteran_request.json")).unwrap();
    let history = load_match_log(&fixture("veteran_matches.csv")).unwrap();
    assert_eq!(history.len(), 7);

    let engine = RecommendationEngine::default();
    let bundle = engine.generate_recommendations(&request.player, &request.game_state, &history);

    let analysis = &bundle.analysis;
    assert_eq!(analysis.recent_form, Form::Excellent);
    assert_eq!(analysis.overall_rating, 86);
    assert_eq!(analysis.market_position, MarketPosition::FairValue);
    assert_eq!(analysis.total_matches, 7);
    assert_eq!(analysis.recent_output.matches, 5);
    assert_eq!(analysis.recent_output.goals, 2);
    assert_eq!(analysis.recent_output.assists, 1);
    assert!((analysis.injury_risk - 0.2).abs() < 1e-9);

    assert_eq!(bundle.career_guidance[0].stage, CareerStage::Veteran);

    let transfer = bundle.by_type(RecommendationType::Transfer).unwrap();
    assert_eq!(transfer.priority, Priority::Low);
    match &transfer.payload {
        RecommendationPayload::Transfer { advice } => {
            assert!(!advice.should_consider_transfer);
            assert_eq!(advice.timing, TransferTiming::GoodTime);
        }
        other => panic!("expected transfer payload, got {other:?}"),
    }

    match &bundle.by_type(RecommendationType::Training).unwrap().payload {
        RecommendationPayload::Training { plan } => {
            assert_eq!(plan.len(), 1);
            assert_eq!(plan[0].focus, "stamina");
        }
        other => panic!("expected training payload, got {other:?}"),
    }
}

// ===========================================================================
// Determinism
// ===========================================================================

#[test]
fn repeated_calls_are_identical() {
    let request = load_request(&fixture("forward_request.json")).unwrap();
    let engine = RecommendationEngine::with_team_fit(EngineConfig::default(), FixedTeamFit(0.9));

    let first =
        engine.generate_recommendations(&request.player, &request.game_state, &request.match_history);
    let second =
        engine.generate_recommendations(&request.player, &request.game_state, &request.match_history);

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn seeded_stub_is_reproducible_and_flagged() {
    let request = load_request(&fixture("forward_request.json")).unwrap();
    let mut config = EngineConfig::default();
    config.team_fit.mode = TeamFitMode::Seeded;
    config.team_fit.seed = 7;

    let a = RecommendationEngine::with_team_fit(config.clone(), team_fit::from_config(&config.team_fit));
    let b = RecommendationEngine::with_team_fit(config.clone(), team_fit::from_config(&config.team_fit));

    let fit_a = a.analyze(&request.player, &request.game_state, &[]);
    let fit_b = b.analyze(&request.player, &request.game_state, &[]);

    assert_eq!(fit_a.team_fit, fit_b.team_fit);
    assert!((0.7..=1.0).contains(&fit_a.team_fit));
    assert_eq!(fit_a.team_fit_source, TeamFitSource::RandomStub);
}

// ===========================================================================
// JSON output shape
// ===========================================================================

#[test]
fn bundle_json_shape() {
    let request = load_request(&fixture("veteran_request.json")).unwrap();
    let history = load_match_log(&fixture("veteran_matches.csv")).unwrap();
    let bundle = RecommendationEngine::default().generate_recommendations(
        &request.player,
        &request.game_state,
        &history,
    );

    let json = serde_json::to_value(&bundle).unwrap();
    assert!(json["tacticalAdvice"].is_array());
    assert_eq!(json["careerGuidance"][0]["stage"], "veteran");
    assert_eq!(json["analysis"]["recentForm"], "excellent");
    assert_eq!(json["analysis"]["marketPosition"], "fair_value");

    let transfer = &json["recommendations"][3];
    assert_eq!(transfer["type"], "transfer");
    assert_eq!(transfer["priority"], "low");
    assert_eq!(transfer["advice"]["timing"], "good_time");
    assert_eq!(transfer["advice"]["shouldConsiderTransfer"], false);
}

// ===========================================================================
// Loading errors and config
// ===========================================================================

#[test]
fn missing_inputs_report_paths() {
    match load_request(&fixture("no_such_request.json")).unwrap_err() {
        RequestError::Io { path, .. } => assert!(path.ends_with("no_such_request.json")),
        other => panic!("expected Io error, got: {other}"),
    }
    match load_match_log(&fixture("no_such_log.csv")).unwrap_err() {
        MatchLogError::Io { path, .. } => assert!(path.ends_with("no_such_log.csv")),
        other => panic!("expected Io error, got: {other}"),
    }
}

#[test]
fn malformed_request_is_json_error() {
    let dir = std::env::temp_dir().join("scout_it_bad_request");
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("request.json");
    fs::write(&path, r#"{"player": {"position": "Forward"}}"#).unwrap();

    assert!(matches!(load_request(&path), Err(RequestError::Json { .. })));
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn shipped_defaults_load_and_match_builtin() {
    let base = std::env::temp_dir().join("scout_it_config");
    let _ = fs::remove_dir_all(&base);
    fs::create_dir_all(base.join("defaults")).unwrap();
    fs::copy(
        Path::new("defaults").join(config::ENGINE_FILE),
        base.join("defaults").join(config::ENGINE_FILE),
    )
    .unwrap();

    let written = config::seed_engine_config(&base).unwrap();
    assert_eq!(written, Some(base.join("config").join(config::ENGINE_FILE)));

    let loaded = config::load_config_from(&base).unwrap();
    assert_eq!(loaded, EngineConfig::default());

    // Second run keeps the existing file.
    assert_eq!(config::seed_engine_config(&base).unwrap(), None);
    let _ = fs::remove_dir_all(&base);
}

#[test]
fn missing_config_dir_is_reported() {
    let base = std::env::temp_dir().join("scout_it_no_config");
    let _ = fs::remove_dir_all(&base);
    fs::create_dir_all(&base).unwrap();

    assert!(matches!(
        config::seed_engine_config(&base),
        Err(ConfigError::DefaultsCopyError { .. })
    ));
    assert!(matches!(
        config::load_config_from(&base),
        Err(ConfigError::FileNotFound { .. })
    ));
    let _ = fs::remove_dir_all(&base);
}
