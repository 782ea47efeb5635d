//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.questlog/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::state::Stats;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct QuestlogConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub stats: StatsConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub quests: Vec<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub max_experience: Option<u32>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct StatsConfig {
    pub strength: Option<u32>,
    pub dexterity: Option<u32>,
    pub intelligence: Option<u32>,
    pub health: Option<u32>,
}

/// Color overrides for the dashboard, as ratatui color strings
/// (named colors, `#rrggbb`, or ANSI indexes like `"211"`).
/// Parsing happens in the TUI layer; core only carries the strings.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ThemeConfig {
    pub border: Option<String>,
    pub header: Option<String>,
    pub selected: Option<String>,
    pub completed: Option<String>,
    pub bar_fg: Option<String>,
    pub bar_bg: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_MAX_EXPERIENCE: u32 = 100;

pub const DEFAULT_STATS: Stats = Stats {
    strength: 10,
    dexterity: 8,
    intelligence: 7,
    health: 50,
};

/// The starter quest list used when the config file doesn't provide one.
pub fn default_quests() -> Vec<String> {
    [
        "Defeat the dragon",
        "Save the villagers",
        "Retrieve the lost artifact",
        "Explore the ancient ruins",
    ]
    .map(String::from)
    .to_vec()
}

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub stats: Stats,
    pub quests: Vec<String>,
    pub max_experience: u32,
    pub theme: ThemeConfig,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.questlog/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".questlog").join("config.toml"))
}

/// Load config from `override_path`, or `~/.questlog/config.toml` when none
/// is given.
///
/// If the default file doesn't exist, generates a commented-out default and
/// returns `QuestlogConfig::default()`. If a file exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config(override_path: Option<&Path>) -> Result<QuestlogConfig, ConfigError> {
    let path = match override_path.map(Path::to_path_buf).or_else(config_path) {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(QuestlogConfig::default());
        }
    };

    if !path.exists() {
        if override_path.is_some() {
            // An explicitly requested file that isn't there is a user error.
            return Err(ConfigError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("config file not found: {}", path.display()),
            )));
        }
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(QuestlogConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: QuestlogConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r##"# Questlog Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.
# Note: the quest list must stay above the [section] headers.

# quests = [
#     "Defeat the dragon",
#     "Save the villagers",
#     "Retrieve the lost artifact",
#     "Explore the ancient ruins",
# ]

# [general]
# max_experience = 100               # Or set QUESTLOG_MAX_EXPERIENCE env var

# [stats]
# strength = 10
# dexterity = 8
# intelligence = 7
# health = 50

# [theme]
# Colors accept names ("cyan"), hex ("#ff87af"), or ANSI indexes ("211").
# border = "white"
# header = "211"
# selected = "36"
# completed = "241"
# bar_fg = "228"
# bar_bg = "34"
"##;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars
/// → CLI.
///
/// `cli_max_experience` is from the `--max-experience` flag (None = not
/// specified).
pub fn resolve(config: &QuestlogConfig, cli_max_experience: Option<u32>) -> ResolvedConfig {
    // Max experience: CLI → env → config → default
    let max_experience = cli_max_experience
        .or_else(|| {
            std::env::var("QUESTLOG_MAX_EXPERIENCE")
                .ok()
                .and_then(|v| v.parse().ok())
        })
        .or(config.general.max_experience)
        .unwrap_or(DEFAULT_MAX_EXPERIENCE);

    // The level bar divides by this, so zero falls back to the default.
    let max_experience = if max_experience == 0 {
        warn!(
            "max_experience must be positive, falling back to {}",
            DEFAULT_MAX_EXPERIENCE
        );
        DEFAULT_MAX_EXPERIENCE
    } else {
        max_experience
    };

    let stats = Stats {
        strength: config.stats.strength.unwrap_or(DEFAULT_STATS.strength),
        dexterity: config.stats.dexterity.unwrap_or(DEFAULT_STATS.dexterity),
        intelligence: config
            .stats
            .intelligence
            .unwrap_or(DEFAULT_STATS.intelligence),
        health: config.stats.health.unwrap_or(DEFAULT_STATS.health),
    };

    // The quest cursor needs at least one quest to point at.
    let quests = if config.quests.is_empty() {
        default_quests()
    } else {
        config.quests.clone()
    };

    ResolvedConfig {
        stats,
        quests,
        max_experience,
        theme: config.theme.clone(),
    }
}
