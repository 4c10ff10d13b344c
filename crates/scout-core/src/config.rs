// Engine configuration loading and parsing (engine.toml).

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::analysis::form::{DEFAULT_FORM_WINDOW, DEFAULT_PERFORMANCE_SCORE};
use crate::analysis::potential::DEFAULT_POTENTIAL;
use crate::team_fit::{STUB_FIT_MAX, STUB_FIT_MIN};

pub const ENGINE_FILE: &str = "engine.toml";

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to parse config file {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("validation error for field `{field}`: {message}")]
    ValidationError { field: String, message: String },

    #[error("failed to initialize config from defaults: {message}")]
    DefaultsCopyError { message: String },
}

// ---------------------------------------------------------------------------
// Assembled config
// ---------------------------------------------------------------------------

/// Everything the engine reads from `config/engine.toml`.
///
/// `EngineConfig::default()` matches the shipped `defaults/engine.toml`, so
/// library callers can skip file loading entirely.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct EngineConfig {
    pub analysis: AnalysisConfig,
    pub team_fit: TeamFitConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AnalysisConfig {
    /// How many trailing matches feed the form label.
    pub form_window: usize,
    /// Ceiling used when a player has no potential on record.
    pub default_potential: u32,
    /// Score assumed for matches without one.
    pub default_performance_score: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        AnalysisConfig {
            form_window: DEFAULT_FORM_WINDOW,
            default_potential: DEFAULT_POTENTIAL,
            default_performance_score: DEFAULT_PERFORMANCE_SCORE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeamFitMode {
    /// No evaluator: every analysis uses the placeholder.
    Placeholder,
    /// Seeded random stub in [0.7, 1.0].
    Seeded,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TeamFitConfig {
    pub mode: TeamFitMode,
    /// Neutral score substituted when no evaluation is available.
    pub placeholder: f64,
    #[serde(default)]
    pub seed: u64,
}

impl Default for TeamFitConfig {
    fn default() -> Self {
        TeamFitConfig {
            mode: TeamFitMode::Placeholder,
            placeholder: 0.85,
            seed: 42,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive used when `RUST_LOG` is unset.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            filter: "scout=info,scout_core=info,warn".into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Loading logic
// ---------------------------------------------------------------------------

/// Load and validate `config/engine.toml` relative to `base_dir`.
///
/// Does not seed from `defaults/`; call `seed_engine_config` first.
pub fn load_config_from(base_dir: &Path) -> Result<EngineConfig, ConfigError> {
    let engine_path = base_dir.join("config").join(ENGINE_FILE);
    let text = read_file(&engine_path)?;
    let config: EngineConfig = toml::from_str(&text).map_err(|e| ConfigError::ParseError {
        path: engine_path.clone(),
        source: e,
    })?;

    validate(&config)?;

    Ok(config)
}

/// Copy `defaults/engine.toml` to `config/engine.toml` unless the user
/// already has a copy. Returns the path written, or `None` when an existing
/// copy was kept.
pub fn seed_engine_config(base_dir: &Path) -> Result<Option<PathBuf>, ConfigError> {
    let target = base_dir.join("config").join(ENGINE_FILE);
    if target.exists() {
        return Ok(None);
    }

    let source = base_dir.join("defaults").join(ENGINE_FILE);
    let content = std::fs::read(&source).map_err(|e| ConfigError::DefaultsCopyError {
        message: format!(
            "no {} and no shipped {} to seed it from: {e}",
            target.display(),
            source.display()
        ),
    })?;

    std::fs::create_dir_all(base_dir.join("config")).map_err(|e| {
        ConfigError::DefaultsCopyError {
            message: format!("failed to create config directory: {e}"),
        }
    })?;

    // create_new: a copy written concurrently by another process wins.
    let mut dest = match std::fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&target)
    {
        Ok(file) => file,
        Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => return Ok(None),
        Err(e) => {
            return Err(ConfigError::DefaultsCopyError {
                message: format!("failed to create {}: {e}", target.display()),
            })
        }
    };
    std::io::Write::write_all(&mut dest, &content).map_err(|e| ConfigError::DefaultsCopyError {
        message: format!("failed to write {}: {e}", target.display()),
    })?;

    Ok(Some(target))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn read_file(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
        path: path.to_path_buf(),
    })
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

pub fn validate(config: &EngineConfig) -> Result<(), ConfigError> {
    if config.analysis.form_window == 0 {
        return Err(ConfigError::ValidationError {
            field: "analysis.form_window".into(),
            message: "must be greater than 0".into(),
        });
    }

    if config.analysis.default_potential > 100 {
        return Err(ConfigError::ValidationError {
            field: "analysis.default_potential".into(),
            message: format!("must be at most 100, got {}", config.analysis.default_potential),
        });
    }

    let score = config.analysis.default_performance_score;
    if !score.is_finite() || score < 0.0 {
        return Err(ConfigError::ValidationError {
            field: "analysis.default_performance_score".into(),
            message: format!("must be a non-negative number, got {score}"),
        });
    }

    let placeholder = config.team_fit.placeholder;
    if !(STUB_FIT_MIN..=STUB_FIT_MAX).contains(&placeholder) {
        return Err(ConfigError::ValidationError {
            field: "team_fit.placeholder".into(),
            message: format!(
                "must be between {STUB_FIT_MIN} and {STUB_FIT_MAX} inclusive, got {placeholder}"
            ),
        });
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    /// Path to the scout-core crate root, which holds `defaults/`.
    fn project_root() -> PathBuf {
        let cwd = std::env::current_dir().unwrap();
        if cwd.join("defaults").exists() {
            cwd
        } else if cwd.join("crates/scout-core/defaults").exists() {
            cwd.join("crates/scout-core")
        } else {
            panic!("Cannot locate defaults/ directory from CWD {:?}", cwd);
        }
    }

    /// Fresh temp base dir with `config/engine.toml` holding `engine_toml`.
    fn temp_base(name: &str, engine_toml: &str) -> PathBuf {
        let tmp = std::env::temp_dir().join(name);
        let _ = fs::remove_dir_all(&tmp);
        fs::create_dir_all(tmp.join("config")).unwrap();
        fs::write(tmp.join("config").join(ENGINE_FILE), engine_toml).unwrap();
        tmp
    }

    fn default_engine_toml() -> String {
        fs::read_to_string(project_root().join("defaults").join(ENGINE_FILE)).unwrap()
    }

    fn expect_validation_field(base: &Path, expected: &str) {
        match load_config_from(base).unwrap_err() {
            ConfigError::ValidationError { field, .. } => assert_eq!(field, expected),
            other => panic!("expected ValidationError, got: {other}"),
        }
    }

    #[test]
    fn shipped_defaults_match_default_impl() {
        let tmp = temp_base("scout_config_defaults", &default_engine_toml());
        let config = load_config_from(&tmp).expect("should load shipped defaults");
        assert_eq!(config, EngineConfig::default());

        assert_eq!(config.analysis.form_window, 5);
        assert_eq!(config.analysis.default_potential, 85);
        assert!((config.analysis.default_performance_score - 6.0).abs() < f64::EPSILON);
        assert_eq!(config.team_fit.mode, TeamFitMode::Placeholder);
        assert!((config.team_fit.placeholder - 0.85).abs() < f64::EPSILON);

        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn logging_section_is_optional() {
        let text = r#"
[analysis]
form_window = 5
default_potential = 85
default_performance_score = 6.0

[team_fit]
mode = "seeded"
placeholder = 0.9
seed = 7
"#;
        let tmp = temp_base("scout_config_no_logging", text);
        let config = load_config_from(&tmp).expect("should load without [logging]");
        assert_eq!(config.logging, LoggingConfig::default());
        assert_eq!(config.team_fit.mode, TeamFitMode::Seeded);
        assert_eq!(config.team_fit.seed, 7);

        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn rejects_zero_form_window() {
        let modified = default_engine_toml().replace("form_window = 5", "form_window = 0");
        let tmp = temp_base("scout_config_zero_window", &modified);
        expect_validation_field(&tmp, "analysis.form_window");
        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn rejects_placeholder_out_of_range() {
        let modified = default_engine_toml().replace("placeholder = 0.85", "placeholder = 0.5");
        let tmp = temp_base("scout_config_low_placeholder", &modified);
        expect_validation_field(&tmp, "team_fit.placeholder");
        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn rejects_potential_above_100() {
        let modified =
            default_engine_toml().replace("default_potential = 85", "default_potential = 120");
        let tmp = temp_base("scout_config_high_potential", &modified);
        expect_validation_field(&tmp, "analysis.default_potential");
        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn file_not_found_for_missing_engine_toml() {
        let tmp = std::env::temp_dir().join("scout_config_missing");
        let _ = fs::remove_dir_all(&tmp);
        fs::create_dir_all(tmp.join("config")).unwrap();

        match load_config_from(&tmp).unwrap_err() {
            ConfigError::FileNotFound { path } => assert!(path.ends_with(ENGINE_FILE)),
            other => panic!("expected FileNotFound, got: {other}"),
        }

        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn parse_error_for_invalid_toml() {
        let tmp = temp_base("scout_config_invalid", "this is not valid [[[ toml");
        match load_config_from(&tmp).unwrap_err() {
            ConfigError::ParseError { path, .. } => assert!(path.ends_with(ENGINE_FILE)),
            other => panic!("expected ParseError, got: {other}"),
        }
        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn parse_error_for_unknown_team_fit_mode() {
        let modified = default_engine_toml().replace("mode = \"placeholder\"", "mode = \"oracle\"");
        let tmp = temp_base("scout_config_bad_mode", &modified);
        assert!(matches!(
            load_config_from(&tmp).unwrap_err(),
            ConfigError::ParseError { .. }
        ));
        let _ = fs::remove_dir_all(&tmp);
    }

    fn seed_base(name: &str) -> PathBuf {
        let tmp = std::env::temp_dir().join(name);
        let _ = fs::remove_dir_all(&tmp);
        fs::create_dir_all(&tmp).unwrap();
        tmp
    }

    #[test]
    fn seed_copies_shipped_engine_toml() {
        let tmp = seed_base("scout_config_seed_copies");
        fs::create_dir_all(tmp.join("defaults")).unwrap();
        fs::write(tmp.join("defaults").join(ENGINE_FILE), default_engine_toml()).unwrap();
        assert!(!tmp.join("config").exists());

        let written = seed_engine_config(&tmp).unwrap();
        assert_eq!(written, Some(tmp.join("config").join(ENGINE_FILE)));
        assert_eq!(load_config_from(&tmp).unwrap(), EngineConfig::default());

        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn seed_keeps_user_copy() {
        let tmp = seed_base("scout_config_seed_keeps");
        fs::create_dir_all(tmp.join("defaults")).unwrap();
        fs::create_dir_all(tmp.join("config")).unwrap();
        fs::write(tmp.join("defaults").join(ENGINE_FILE), default_engine_toml()).unwrap();
        fs::write(tmp.join("config").join(ENGINE_FILE), "# custom\n").unwrap();

        assert_eq!(seed_engine_config(&tmp).unwrap(), None);
        let content = fs::read_to_string(tmp.join("config").join(ENGINE_FILE)).unwrap();
        assert_eq!(content, "# custom\n");

        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn seed_without_defaults_keeps_user_copy() {
        let tmp = temp_base("scout_config_seed_no_defaults", &default_engine_toml());
        assert_eq!(seed_engine_config(&tmp).unwrap(), None);
        let _ = fs::remove_dir_all(&tmp);
    }

    #[test]
    fn seed_errors_when_nothing_to_copy() {
        let tmp = seed_base("scout_config_seed_nothing");
        // An empty config/ directory does not count as a user copy.
        fs::create_dir_all(tmp.join("config")).unwrap();

        match seed_engine_config(&tmp).unwrap_err() {
            ConfigError::DefaultsCopyError { message } => {
                assert!(message.contains(ENGINE_FILE));
            }
            other => panic!("expected DefaultsCopyError, got: {other}"),
        }
        assert!(!tmp.join("config").join(ENGINE_FILE).exists());

        let _ = fs::remove_dir_all(&tmp);
    }
}
