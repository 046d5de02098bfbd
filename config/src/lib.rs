//! Configuration for tools built on Sundry.
//!
//! The file lives at `$SUNDRY_CONFIG` when set, otherwise at
//! `~/.sundry/config.toml`. Every section is optional:
//!
//! ```toml
//! [logging]
//! filter = "sundry=debug"
//!
//! [sequence]
//! shuffle_seed = 42
//! cycle_limit = 10000
//! ```

use std::path::{Path, PathBuf};
use std::{env, fs, io};

use serde::Deserialize;
use thiserror::Error;

/// Environment variable overriding the config file location.
pub const CONFIG_ENV_VAR: &str = "SUNDRY_CONFIG";

/// Visit cap applied to `cycle` when the config does not set one.
pub const DEFAULT_CYCLE_LIMIT: usize = 10_000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse config at {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SundryConfig {
    pub logging: Option<LoggingConfig>,
    pub sequence: Option<SequenceConfig>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive, e.g. `"sundry=debug"`.
    pub filter: Option<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SequenceConfig {
    /// Seed for reproducible shuffles. Unset means a fresh random order each run.
    pub shuffle_seed: Option<u64>,
    /// Visit cap for `cycle`.
    pub cycle_limit: Option<usize>,
}

impl SundryConfig {
    /// Load from the default location. A missing file is `Ok(None)`.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        let Some(path) = config_path() else {
            return Ok(None);
        };
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file");
            return Ok(None);
        }
        Self::load_from(&path).map(Some)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match Self::parse(&content) {
            Ok(config) => Ok(config),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    #[must_use]
    pub fn log_filter(&self) -> Option<&str> {
        self.logging
            .as_ref()
            .and_then(|logging| logging.filter.as_deref())
            .map(str::trim)
            .filter(|filter| !filter.is_empty())
    }

    #[must_use]
    pub fn shuffle_seed(&self) -> Option<u64> {
        self.sequence.as_ref().and_then(|seq| seq.shuffle_seed)
    }

    #[must_use]
    pub fn cycle_limit(&self) -> usize {
        self.sequence
            .as_ref()
            .and_then(|seq| seq.cycle_limit)
            .unwrap_or(DEFAULT_CYCLE_LIMIT)
    }
}

fn config_path() -> Option<PathBuf> {
    if let Some(explicit) = env::var_os(CONFIG_ENV_VAR).filter(|value| !value.is_empty()) {
        return Some(PathBuf::from(explicit));
    }
    dirs::home_dir().map(|home| home.join(".sundry").join("config.toml"))
}
