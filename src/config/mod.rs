// Configuration module
// Author: kelexine (https://github.com/kelexine)

mod models;
mod secret;

pub use models::*;
pub use secret::SecretString;

use crate::error::{AppError, Result};
use config::{Config, Environment, File};
use std::path::{Path, PathBuf};

impl AppConfig {
    /// Load configuration from multiple sources with precedence:
    /// 1. Environment variables (highest)
    /// 2. Config file
    /// 3. Defaults (lowest)
    ///
    /// CLI overrides are applied by the caller afterwards.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::default_config_path);

        let config = Config::builder()
            // Start with defaults
            .add_source(Config::try_from(&Self::default())?)
            // Load from config file if it exists
            .add_source(File::from(config_path).required(false))
            // Override with environment variables (e.g. SHOT2TEST_GROQ__API_KEY)
            .add_source(
                Environment::with_prefix("SHOT2TEST")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(|e| AppError::Config(e.to_string()))?;

        let loaded: Self = config
            .try_deserialize()
            .map_err(|e| AppError::Config(e.to_string()))?;

        loaded.validate()?;
        Ok(loaded)
    }

    /// Reject values that can never work. Missing credentials are allowed so
    /// the form can still be served; `/health` reports them.
    pub fn validate(&self) -> Result<()> {
        if self.prompt.max_chars == 0 {
            return Err(AppError::Config("prompt.max_chars must be positive".to_string()));
        }
        if self.groq.max_attempts == 0 {
            return Err(AppError::Config("groq.max_attempts must be at least 1".to_string()));
        }
        if !(1..=100).contains(&self.imaging.jpeg_quality) {
            return Err(AppError::Config(format!(
                "imaging.jpeg_quality must be between 1 and 100, got {}",
                self.imaging.jpeg_quality
            )));
        }
        Ok(())
    }

    fn default_config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".shot2test")
            .join("config.toml")
    }
}
