// Scout CLI entry point.
//
// Startup sequence:
// 1. Parse arguments
// 2. Load config (defaults/engine.toml copied to config/ on first run,
//    built-in defaults when neither file exists)
// 3. Initialize tracing to stderr so stdout stays machine-readable
// 4. Load the request and optional match log
// 5. Run the engine and print JSON or a text report

mod report;

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{info, warn};

use scout_core::config::{self, EngineConfig};
use scout_core::match_log;
use scout_core::request::{self, AnalysisRequest};
use scout_core::team_fit;
use scout_core::RecommendationEngine;

#[derive(Parser)]
#[command(name = "scout")]
#[command(about = "Analyse a football player and recommend next steps", long_about = None)]
struct Cli {
    /// Directory holding defaults/ and config/ (defaults to the current directory)
    #[arg(long, global = true)]
    config_dir: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Full analysis with tactical, training, career and transfer advice
    Analyze {
        /// Request JSON file (player, gameState, matchHistory)
        request: PathBuf,

        /// CSV match log, appended after the request's matchHistory
        #[arg(long)]
        matches: Option<PathBuf>,
    },

    /// Overall rating, potential, market position and injury risk only
    Rate {
        /// Request JSON file
        request: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Text,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let base_dir = match &cli.config_dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir().context("failed to resolve current directory")?,
    };
    let (config, from_file) = load_engine_config(&base_dir)?;

    init_tracing(&config)?;
    if from_file {
        info!("Config loaded from {}", base_dir.join("config").display());
    } else {
        warn!(
            "No engine.toml under {}, using built-in settings",
            base_dir.display()
        );
    }

    let engine = RecommendationEngine::with_team_fit(
        config.clone(),
        team_fit::from_config(&config.team_fit),
    );

    match cli.command {
        Commands::Analyze { request, matches } => {
            let request = load_analysis_request(&request, matches.as_deref())?;
            let bundle = engine.generate_recommendations(
                &request.player,
                &request.game_state,
                &request.match_history,
            );
            match cli.format {
                OutputFormat::Json => {
                    let json = serde_json::to_string_pretty(&bundle)
                        .context("failed to serialize recommendations")?;
                    println!("{json}");
                }
                OutputFormat::Text => print!("{}", report::render_bundle(&request.player, &bundle)),
            }
        }
        Commands::Rate { request } => {
            let request = load_analysis_request(&request, None)?;
            let analysis =
                engine.analyze(&request.player, &request.game_state, &request.match_history);
            match cli.format {
                OutputFormat::Json => {
                    let summary = serde_json::json!({
                        "overallRating": analysis.overall_rating,
                        "developmentPotential": analysis.development_potential,
                        "marketPosition": analysis.market_position,
                        "injuryRisk": analysis.injury_risk,
                    });
                    let json = serde_json::to_string_pretty(&summary)
                        .context("failed to serialize rating")?;
                    println!("{json}");
                }
                OutputFormat::Text => print!("{}", report::render_rating(&request.player, &analysis)),
            }
        }
    }

    Ok(())
}

/// Load `config/engine.toml` under `base_dir`, seeding it from `defaults/`.
/// Returns built-in defaults when neither file exists. The flag says
/// whether a file was read.
fn load_engine_config(base_dir: &Path) -> anyhow::Result<(EngineConfig, bool)> {
    let shipped = base_dir.join("defaults").join(config::ENGINE_FILE);
    let user = base_dir.join("config").join(config::ENGINE_FILE);
    if !shipped.exists() && !user.exists() {
        return Ok((EngineConfig::default(), false));
    }
    config::seed_engine_config(base_dir).context("failed to prepare config")?;
    let config = config::load_config_from(base_dir).context("failed to load configuration")?;
    Ok((config, true))
}

fn load_analysis_request(path: &Path, matches: Option<&Path>) -> anyhow::Result<AnalysisRequest> {
    let mut request = request::load_request(path).context("failed to load analysis request")?;
    if let Some(log_path) = matches {
        let logged = match_log::load_match_log(log_path).context("failed to load match log")?;
        info!("Loaded {} matches from {}", logged.len(), log_path.display());
        request.match_history.extend(logged);
    }
    Ok(request)
}

/// Initialize tracing to stderr. `RUST_LOG` wins over the configured filter.
fn init_tracing(config: &EngineConfig) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}
