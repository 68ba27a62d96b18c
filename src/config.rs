use clap::{Parser, Subcommand};
use config::{
    Config as ConfigCrate, // Need this for builder
    ConfigError as ConfigCrateError,
    Environment,
    File,
    Map,
    Source,
    Value,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

use crate::balloon::Mode;
use crate::{catalog, render};

const DEFAULT_COLUMNS: i64 = render::DEFAULT_COLUMNS as i64;
const DEFAULT_THINK: bool = false;
const DEFAULT_LOG_LEVEL: &str = "warn";
const ENV_PREFIX: &str = "COWSAY";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file error: {0}")]
    ConfigFile(#[from] ConfigCrateError),
    #[error("Validation error: {0}")]
    ValidationError(String),
}

// Optional fields allow for layered config (defaults -> file -> env -> args).
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default)]
struct FileConfig {
    cow: Option<String>,
    mood: Option<String>,
    columns: Option<i64>,
    think: Option<bool>,
    log_level: Option<String>,
}

// Final settings after every layer has been applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    pub cow: String,
    pub mood: Option<String>,
    pub columns: isize,
    pub think: bool,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            cow: catalog::DEFAULT.to_string(),
            mood: None,
            columns: DEFAULT_COLUMNS as isize,
            think: DEFAULT_THINK,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl AppConfig {
    pub fn mode(&self) -> Mode {
        if self.think {
            Mode::Think
        } else {
            Mode::Say
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Renders a cow saying (or thinking) your message",
    long_about = None,
    disable_version_flag = true,
    args_conflicts_with_subcommands = true
)]
pub struct CliArgs {
    /// Message to say; read from stdin when omitted
    pub message: Vec<String>,

    /// Cow to draw (`random` picks one)
    #[arg(short, long)]
    pub cow: Option<String>,

    /// Mood of the cow
    #[arg(short, long)]
    pub mood: Option<String>,

    /// Think instead of say
    #[arg(short, long)]
    pub think: bool,

    /// Random cow and mood
    #[arg(short, long)]
    pub random: bool,

    /// Column width for text wrapping
    #[arg(short = 'w', long, allow_negative_numbers = true)]
    pub columns: Option<i64>,

    /// List available cows and moods
    #[arg(short, long)]
    pub list: bool,

    /// Path to a custom configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print the resolved configuration and exit
    #[arg(long)]
    pub debug_config: bool,

    /// Print version
    #[arg(short = 'v', short_alias = 'V', long, action = clap::ArgAction::Version)]
    pub version: Option<bool>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Interpret `moo` command text: [action] [cow] [mood] message
    Moo {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        words: Vec<String>,
    },
}

// Function to load configuration from all sources.
pub fn load_config(args: &CliArgs) -> Result<AppConfig, ConfigError> {
    let env_source = Environment::with_prefix(ENV_PREFIX).separator("__");
    // Missing env vars are fine; fall back to no overrides if collection fails.
    let env_map: Map<String, Value> = env_source.collect().unwrap_or_else(|_| Map::new());

    build_config_from_args(args, default_config_path(), Some(env_map))
}

fn default_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "cowsay-rs")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

// Separate function to allow testing with specific args and override sources
fn build_config_from_args(
    args: &CliArgs,
    default_path: Option<PathBuf>,
    override_source: Option<Map<String, Value>>,
) -> Result<AppConfig, ConfigError> {
    let mut config_builder = ConfigCrate::builder();

    // An explicit --config must exist; the default location is optional.
    if let Some(path) = &args.config {
        config_builder = config_builder.add_source(File::from(path.clone()).required(true));
    } else if let Some(path) = default_path {
        config_builder = config_builder.add_source(File::from(path).required(false));
    }

    // Overrides (env or test map) win over the file.
    if let Some(overrides) = override_source {
        for (key, value) in overrides {
            config_builder = config_builder.set_override(&key, value)?;
        }
    }

    let loaded: FileConfig = config_builder.build()?.try_deserialize()?;

    // args > overrides > file > defaults
    let config = AppConfig {
        cow: args
            .cow
            .clone()
            .or(loaded.cow)
            .unwrap_or_else(|| catalog::DEFAULT.to_string()),
        mood: args
            .mood
            .clone()
            .or(loaded.mood)
            .filter(|mood| !mood.is_empty()),
        columns: args
            .columns
            .or(loaded.columns)
            .unwrap_or(DEFAULT_COLUMNS) as isize,
        think: args.think || loaded.think.unwrap_or(DEFAULT_THINK),
        log_level: loaded
            .log_level
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
    };

    validate_config(&config)?;
    Ok(config)
}

fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.columns < 1 {
        return Err(ConfigError::ValidationError(format!(
            "columns must be at least 1, got {}",
            config.columns
        )));
    }
    if config.cow.is_empty() {
        return Err(ConfigError::ValidationError(
            "cow must not be empty".to_string(),
        ));
    }
    Ok(())
}
