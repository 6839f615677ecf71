use perspective_types::ui::UiOptions;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Contents of `~/.perspective/config.toml`.
///
/// ```toml
/// [app]
/// ascii_only = false
/// high_contrast = false
/// reduced_motion = false
/// skip_onboarding = false
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct PerspectiveConfig {
    pub app: Option<AppConfig>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl ConfigError {
    pub fn path(&self) -> &PathBuf {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    /// Use ASCII-only glyphs for icons and indicators.
    #[serde(default)]
    pub ascii_only: bool,
    /// Enable a high-contrast color palette.
    #[serde(default)]
    pub high_contrast: bool,
    /// Disable screen transitions and oscillating effects.
    #[serde(default)]
    pub reduced_motion: bool,
    /// Start at the hub instead of the welcome screen.
    #[serde(default)]
    pub skip_onboarding: bool,
}

fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".perspective").join("config.toml"))
}

impl PerspectiveConfig {
    /// Load the user config. A missing file is `Ok(None)`.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        let Some(path) = config_path() else {
            return Ok(None);
        };
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

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

        match toml::from_str(&content) {
            Ok(config) => Ok(Some(config)),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }
}

/// Settings the application starts with, after config resolution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AppSettings {
    pub ui: UiOptions,
    pub skip_onboarding: bool,
}

impl AppSettings {
    #[must_use]
    pub fn from_config(config: Option<&PerspectiveConfig>) -> Self {
        let Some(app) = config.and_then(|config| config.app.as_ref()) else {
            return Self::default();
        };
        Self {
            ui: UiOptions {
                ascii_only: app.ascii_only,
                high_contrast: app.high_contrast,
                reduced_motion: app.reduced_motion,
            },
            skip_onboarding: app.skip_onboarding,
        }
    }

    /// Resolve settings from the user config, falling back to defaults on any error.
    #[must_use]
    pub fn load() -> Self {
        match PerspectiveConfig::load() {
            Ok(config) => Self::from_config(config.as_ref()),
            Err(err) => {
                tracing::warn!(path = %err.path().display(), "Using default settings: {err}");
                Self::default()
            }
        }
    }
}
