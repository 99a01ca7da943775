//! Configuration loading
//!
//! Layers, lowest priority first: built-in defaults, the TOML file, then
//! `GHIN_*` environment variables. The result is validated before it is
//! returned.

use crate::{Error, Result, config::Settings};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default location of the configuration file (`<config dir>/ghin/config.toml`)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("ghin").join("config.toml"))
}

/// Builds [`Settings`] from defaults, a config file and the environment
#[derive(Debug)]
pub struct ConfigLoader {
    base: Settings,
    fallback_path: Option<PathBuf>,
}

impl ConfigLoader {
    /// Loader that falls back to [`default_config_path`] when no file is named
    pub fn new() -> Self {
        Self {
            base: Settings::default(),
            fallback_path: default_config_path(),
        }
    }

    /// Settings used when no file is read; the environment still applies
    pub fn with_base(mut self, base: Settings) -> Self {
        self.base = base;
        self
    }

    /// Replace the file consulted when none is named; `None` disables it
    pub fn with_fallback_path(mut self, path: Option<PathBuf>) -> Self {
        self.fallback_path = path;
        self
    }

    /// Load settings.
    ///
    /// A file named by the caller must exist. The fallback file is optional
    /// and silently skipped when absent.
    pub fn load(&self, config_file: Option<&Path>) -> Result<Settings> {
        let file = match config_file {
            Some(path) if !path.exists() => {
                return Err(Error::config(format!(
                    "configuration file not found: {}",
                    path.display()
                )));
            }
            Some(path) => Some(path),
            None => self.fallback_path.as_deref().filter(|path| path.exists()),
        };

        let settings = match file {
            Some(path) => {
                debug!("Reading configuration from {}", path.display());
                Settings::from_file(path)?
            }
            None => self.base.clone(),
        };

        let settings = settings.merge_with_env()?;
        settings.validate()?;
        debug!("Effective configuration: {:?}", settings);
        Ok(settings)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
