//! quizforge configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::session::SamplePlan;

/// Top-level quizforge configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizConfig {
    /// Path to the JSON question bank.
    #[serde(default = "default_bank_path")]
    pub bank_path: PathBuf,
    /// Directory where session reports are written.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Questions drawn per category in a session.
    #[serde(default)]
    pub samples: SamplePlan,
    /// Fixed RNG seed for reproducible sessions.
    #[serde(default)]
    pub seed: Option<u64>,
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
}

/// Where `quizforge serve` listens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_bank_path() -> PathBuf {
    PathBuf::from("questions.json")
}
fn default_output_dir() -> PathBuf {
    PathBuf::from("./quizforge-results")
}
fn default_host() -> String {
    "127.0.0.1".to_string()
}
fn default_port() -> u16 {
    5000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            bank_path: default_bank_path(),
            output_dir: default_output_dir(),
            samples: SamplePlan::default(),
            seed: None,
            server: ServerConfig::default(),
        }
    }
}

impl QuizConfig {
    /// Parse a config from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("failed to parse config")
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
fn resolve_env_vars(s: &str) -> String {
    let mut result = s.to_string();
    while let Some(start) = result.find("${") {
        if let Some(end) = result[start..].find('}') {
            let var_name = &result[start + 2..start + end];
            let value = std::env::var(var_name).unwrap_or_default();
            result = format!(
                "{}{}{}",
                &result[..start],
                value,
                &result[start + end + 1..]
            );
        } else {
            break;
        }
    }
    result
}

fn resolve_path(path: &Path) -> PathBuf {
    PathBuf::from(resolve_env_vars(&path.to_string_lossy()))
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order when no path is given:
/// 1. `quizforge.toml` in the current directory
/// 2. `~/.config/quizforge/config.toml`
///
/// Environment variable overrides: `QUIZFORGE_BANK`, `QUIZFORGE_OUTPUT_DIR`.
pub fn load_config_from(path: Option<&Path>) -> Result<QuizConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("quizforge.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            tracing::debug!("using config {}", path.display());
            QuizConfig::from_toml_str(&content)
                .with_context(|| format!("invalid config: {}", path.display()))?
        }
        None => QuizConfig::default(),
    };

    if let Ok(bank) = std::env::var("QUIZFORGE_BANK") {
        config.bank_path = PathBuf::from(bank);
    }
    if let Ok(dir) = std::env::var("QUIZFORGE_OUTPUT_DIR") {
        config.output_dir = PathBuf::from(dir);
    }

    config.bank_path = resolve_path(&config.bank_path);
    config.output_dir = resolve_path(&config.output_dir);

    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("quizforge"))
}
