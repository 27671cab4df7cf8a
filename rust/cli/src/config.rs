//! Layered configuration: defaults, then a TOML file named by
//! `HUNDREDANDTEN_CONFIG`, then `HUNDREDANDTEN_*` environment overrides.

use serde::{Deserialize, Serialize};
use std::fs;

use hundredandten_ai::AI_TYPES;
use hundredandten_engine::{MAX_PLAYERS, MIN_PLAYERS};

use crate::validation::validate_player_count;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Seats at the table, including the person in `play`
    pub players: usize,
    pub seed: Option<String>,
    /// Automated player type used for empty seats
    pub ai_version: String,
    /// Let the automated player take the person's seat too
    pub automate: bool,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub players: ValueSource,
    pub seed: ValueSource,
    pub ai_version: ValueSource,
    pub automate: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            players: ValueSource::Default,
            seed: ValueSource::Default,
            ai_version: ValueSource::Default,
            automate: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            players: MAX_PLAYERS,
            seed: None,
            ai_version: "baseline".into(),
            automate: false,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => write!(f, "{}", msg),
        }
    }
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("HUNDREDANDTEN_CONFIG")
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.players {
            cfg.players = v;
            sources.players = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.ai_version {
            cfg.ai_version = v;
            sources.ai_version = ValueSource::File;
        }
        if let Some(v) = f.automate {
            cfg.automate = v;
            sources.automate = ValueSource::File;
        }
    }

    if let Ok(seed) = std::env::var("HUNDREDANDTEN_SEED")
        && !seed.is_empty()
    {
        cfg.seed = Some(seed);
        sources.seed = ValueSource::Env;
    }
    if let Ok(players) = std::env::var("HUNDREDANDTEN_PLAYERS")
        && !players.is_empty()
    {
        cfg.players = players
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid players".into()))?;
        sources.players = ValueSource::Env;
    }
    if let Ok(ai) = std::env::var("HUNDREDANDTEN_AI")
        && !ai.is_empty()
    {
        cfg.ai_version = ai;
        sources.ai_version = ValueSource::Env;
    }
    if let Ok(automate) = std::env::var("HUNDREDANDTEN_AUTOMATE")
        && !automate.is_empty()
    {
        cfg.automate =
            parse_bool(&automate).ok_or_else(|| ConfigError::Invalid("Invalid automate".into()))?;
        sources.automate = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    players: Option<usize>,
    #[serde(default)]
    seed: Option<String>,
    #[serde(default)]
    ai_version: Option<String>,
    #[serde(default)]
    automate: Option<bool>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    validate_player_count(cfg.players).map_err(|_| {
        ConfigError::Invalid(format!(
            "Invalid configuration: players must be between {} and {}",
            MIN_PLAYERS, MAX_PLAYERS
        ))
    })?;
    if !AI_TYPES.contains(&cfg.ai_version.as_str()) {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: unknown ai_version '{}' (available: {})",
            cfg.ai_version,
            AI_TYPES.join(", ")
        )));
    }
    Ok(())
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}
