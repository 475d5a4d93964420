//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/bintree-render/bintree-render.toml`
//! 3. Environment variables: `BINTREE_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::application::ApplicationError;

const APP_NAME: &str = "bintree-render";

/// Upper bound for `max_depth`: the bottom level of a depth-`n` table holds `2^(n-1)` slots.
pub const MAX_DEPTH_LIMIT: usize = 32;

/// Unified configuration for bintree-render.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Token marking an absent child in level-order input (default: "null")
    pub null_token: String,
    /// Deepest tree the CLI agrees to render (default: 16)
    pub max_depth: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            null_token: "null".into(),
            max_depth: 16,
        }
    }
}

/// Raw settings for intermediate parsing (`None` → not specified, keep base).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub null_token: Option<String>,
    pub max_depth: Option<usize>,
}

/// Get the XDG config directory for bintree-render.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", APP_NAME).map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join(format!("{APP_NAME}.toml")))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Overlay wins where it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            null_token: overlay
                .null_token
                .clone()
                .unwrap_or_else(|| self.null_token.clone()),
            max_depth: overlay.max_depth.unwrap_or(self.max_depth),
        }
    }

    /// Load settings from the global config file and environment.
    pub fn load() -> Result<Self, ApplicationError> {
        Self::load_from(global_config_path().as_deref())
    }

    /// Load settings with layered precedence from an explicit config file.
    ///
    /// A missing file is not an error, the layer is skipped.
    #[instrument(level = "debug")]
    pub fn load_from(config_file: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(path) = config_file {
            if path.exists() {
                debug!("loading config file {}", path.display());
                let raw = load_raw_settings(path)?;
                current = current.merge_with(&raw);
            }
        }

        current = Self::apply_env_overrides(current)?;
        current.validate()?;
        Ok(current)
    }

    /// Apply BINTREE_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("BINTREE")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("null_token") {
            settings.null_token = val;
        }
        match config.get::<usize>("max_depth") {
            Ok(val) => settings.max_depth = val,
            Err(ConfigError::NotFound(_)) => {}
            Err(e) => return Err(config_err(e)),
        }

        Ok(settings)
    }

    fn validate(&self) -> Result<(), ApplicationError> {
        let token = self.null_token.trim();
        if token.is_empty() || token.contains(',') || token != self.null_token {
            return Err(ApplicationError::Config {
                message: format!(
                    "null_token must be non-empty without commas or surrounding spaces: {:?}",
                    self.null_token
                ),
            });
        }
        if self.max_depth == 0 || self.max_depth > MAX_DEPTH_LIMIT {
            return Err(ApplicationError::Config {
                message: format!(
                    "max_depth must be between 1 and {}, got {}",
                    MAX_DEPTH_LIMIT, self.max_depth
                ),
            });
        }
        Ok(())
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# bintree-render configuration
#
# Location: ~/.config/bintree-render/bintree-render.toml
# Env:      BINTREE_* environment variables override the file

# Token marking an absent child in level-order input
# null_token = "null"

# Deepest tree the CLI renders (the diagram width doubles per level, at most 32)
# max_depth = 16
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
