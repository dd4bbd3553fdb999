//! # Configuration
//!
//! Centralizes presentation and logging settings with a clear override
//! hierarchy: defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.quiz-tui/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//! The question bank is deliberately not configurable.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use simplelog::LevelFilter;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct QuizConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub log_level: Option<String>,
    pub log_file: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DisplayConfig {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub accent_color: Option<String>,
    pub show_progress_bar: Option<bool>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;
pub const DEFAULT_LOG_FILE: &str = "quiz.log";
pub const DEFAULT_TITLE: &str = "Islam Quiz";
pub const DEFAULT_SUBTITLE: &str = "Test your knowledge with friendly, bite-sized questions.";
pub const DEFAULT_ACCENT: Color = Color::Blue;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub log_level: LevelFilter,
    pub log_file: PathBuf,
    pub display: DisplaySettings,
    /// Values that were rejected and replaced by defaults.
    pub warnings: Vec<String>,
}

/// Purely visual settings handed to the TUI.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplaySettings {
    pub title: String,
    pub subtitle: String,
    pub accent: Color,
    pub show_progress_bar: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            subtitle: DEFAULT_SUBTITLE.to_string(),
            accent: DEFAULT_ACCENT,
            show_progress_bar: true,
        }
    }
}

/// Overrides supplied on the command line. `None` means "not given".
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub log_level: Option<String>,
    pub log_file: Option<PathBuf>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    InvalidValue { key: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
            ConfigError::InvalidValue { key, value } => {
                write!(f, "invalid value for {key}: {value:?}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.quiz-tui/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".quiz-tui").join("config.toml"))
}

/// Where the loaded config came from. Loading happens before the logger
/// exists, so the caller logs this once logging is up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// No home directory: nothing read, nothing written.
    Defaults,
    /// The default file was missing and a commented-out one was written.
    Generated(PathBuf),
    /// The default file was missing and could not be written.
    GenerateFailed { path: PathBuf, reason: String },
    File(PathBuf),
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::Defaults => write!(f, "no home directory, using default config"),
            ConfigSource::Generated(path) => {
                write!(f, "no config file found, generated default at {}", path.display())
            }
            ConfigSource::GenerateFailed { path, reason } => {
                write!(f, "failed to write default config to {}: {reason}", path.display())
            }
            ConfigSource::File(path) => write!(f, "loaded config from {}", path.display()),
        }
    }
}

/// Load config from `~/.quiz-tui/config.toml`, or from `explicit` if given.
///
/// A missing default file is generated (commented out) and treated as empty.
/// A missing explicit file is an error.
pub fn load_config(explicit: Option<&Path>) -> Result<(QuizConfig, ConfigSource), ConfigError> {
    match explicit {
        Some(path) => load_config_from(path, false),
        None => match config_path() {
            Some(path) => load_config_from(&path, true),
            None => Ok((QuizConfig::default(), ConfigSource::Defaults)),
        },
    }
}

/// Load config from `path`. With `generate_if_missing`, a missing file is
/// replaced by the commented-out template and an empty config is returned.
pub fn load_config_from(
    path: &Path,
    generate_if_missing: bool,
) -> Result<(QuizConfig, ConfigSource), ConfigError> {
    if generate_if_missing && !path.exists() {
        let source = match generate_default_config(path) {
            Ok(()) => ConfigSource::Generated(path.to_path_buf()),
            Err(e) => ConfigSource::GenerateFailed {
                path: path.to_path_buf(),
                reason: e.to_string(),
            },
        };
        return Ok((QuizConfig::default(), source));
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config = parse_config(&contents)?;
    Ok((config, ConfigSource::File(path.to_path_buf())))
}

pub fn parse_config(contents: &str) -> Result<QuizConfig, ConfigError> {
    toml::from_str(contents).map_err(ConfigError::Parse)
}

/// Written on first run. Every setting is commented out.
pub const DEFAULT_CONFIG_TEMPLATE: &str = r##"# Quiz Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# log_level = "info"                 # off, error, warn, info, debug, trace (or QUIZ_LOG_LEVEL)
# log_file = "quiz.log"              # relative to the working directory (or QUIZ_LOG_FILE)

# [display]
# title = "Islam Quiz"
# subtitle = "Test your knowledge with friendly, bite-sized questions."
# accent_color = "blue"              # ratatui colour name or "#rrggbb"
# show_progress_bar = true
"##;

/// Writes the commented-out default config to `path`, creating parent dirs.
fn generate_default_config(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, DEFAULT_CONFIG_TEMPLATE)
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// Bad values never abort startup: they are replaced by defaults and
/// described in `ResolvedConfig::warnings` for the caller to log.
pub fn resolve(config: &QuizConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// [`resolve`] with an explicit environment lookup.
pub fn resolve_with_env<F>(config: &QuizConfig, cli: &CliOverrides, env: F) -> ResolvedConfig
where
    F: Fn(&str) -> Option<String>,
{
    let mut warnings = Vec::new();

    // Log level: CLI → env → config → default
    let log_level = cli
        .log_level
        .clone()
        .or_else(|| env("QUIZ_LOG_LEVEL"))
        .or_else(|| config.general.log_level.clone())
        .map(|raw| {
            parse_level(&raw).unwrap_or_else(|e| {
                warnings.push(format!("{e}, using {DEFAULT_LOG_LEVEL}"));
                DEFAULT_LOG_LEVEL
            })
        })
        .unwrap_or(DEFAULT_LOG_LEVEL);

    // Log file: CLI → env → config → default
    let log_file = cli
        .log_file
        .clone()
        .or_else(|| env("QUIZ_LOG_FILE").map(PathBuf::from))
        .or_else(|| config.general.log_file.as_ref().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));

    let display = &config.display;
    let accent = display
        .accent_color
        .as_deref()
        .map(|raw| {
            parse_color(raw).unwrap_or_else(|e| {
                warnings.push(format!("{e}, using default accent"));
                DEFAULT_ACCENT
            })
        })
        .unwrap_or(DEFAULT_ACCENT);

    ResolvedConfig {
        log_level,
        log_file,
        display: DisplaySettings {
            title: display
                .title
                .clone()
                .unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            subtitle: display
                .subtitle
                .clone()
                .unwrap_or_else(|| DEFAULT_SUBTITLE.to_string()),
            accent,
            show_progress_bar: display.show_progress_bar.unwrap_or(true),
        },
        warnings,
    }
}

pub fn parse_level(raw: &str) -> Result<LevelFilter, ConfigError> {
    LevelFilter::from_str(raw.trim()).map_err(|_| ConfigError::InvalidValue {
        key: "log_level",
        value: raw.to_string(),
    })
}

pub fn parse_color(raw: &str) -> Result<Color, ConfigError> {
    Color::from_str(raw.trim()).map_err(|_| ConfigError::InvalidValue {
        key: "accent_color",
        value: raw.to_string(),
    })
}
