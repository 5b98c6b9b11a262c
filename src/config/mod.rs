// src/config/mod.rs
mod schema;

use std::path::{Path, PathBuf};
use config::{Config as ConfigLoader, Environment, FileFormat};
use tracing::{debug, info};

pub use schema::{Config, OutputConfig, ScanConfig, ScanSettings};

use crate::error::{ScanError, ScanResult};

const DEFAULT_CONFIG: &str = include_str!("../../config/default.toml");
const ENV_PREFIX: &str = "LINESCAN";

impl Config {
    /// Load configuration: built-in defaults, then a config file, then
    /// `LINESCAN_*` environment variables.
    pub fn load(config_path: Option<&Path>) -> ScanResult<Self> {
        Self::load_with_env(
            config_path,
            Environment::with_prefix(ENV_PREFIX).separator("_").try_parsing(true),
        )
    }

    /// Same as [`Config::load`] with an explicit environment source
    pub fn load_with_env(config_path: Option<&Path>, env: Environment) -> ScanResult<Self> {
        debug!("Loading configuration");

        let mut config_builder = ConfigLoader::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        // User-provided configuration must exist; the default location is optional
        if let Some(path) = config_path {
            info!("Loading user configuration from: {}", path.display());
            config_builder = config_builder.add_source(config::File::from(path));
        } else {
            let default_path = Self::get_default_config_path();
            if default_path.exists() {
                info!("Loading default configuration from: {}", default_path.display());
                config_builder = config_builder.add_source(config::File::from(default_path.as_path()));
            } else {
                debug!("No configuration file found, using built-in defaults");
            }
        }

        config_builder = config_builder.add_source(env);

        let config: Config = config_builder
            .build()
            .map_err(|e| ScanError::ConfigError(format!("Failed to build configuration: {}", e)))?
            .try_deserialize()
            .map_err(|e| ScanError::ConfigError(format!("Failed to parse configuration: {}", e)))?;

        Ok(config)
    }

    /// Get the default configuration path
    pub fn get_default_config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".linescan/config.toml")
    }

    /// Write the default configuration to the default location
    pub fn init(force: bool) -> ScanResult<PathBuf> {
        let config_path = Self::get_default_config_path();
        Self::init_at(&config_path, force)?;
        Ok(config_path)
    }

    /// Write the default configuration to `config_path`
    pub fn init_at(config_path: &Path, force: bool) -> ScanResult<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| ScanError::FileError {
                    path: parent.to_path_buf(),
                    message: format!("Failed to create directory: {}", e),
                })?;
        }

        if config_path.exists() && !force {
            return Err(ScanError::ConfigError(
                format!("Configuration already exists at {}. Use --force to overwrite.", config_path.display())
            ));
        }

        Config::default().save(config_path)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> ScanResult<()> {
        let config_str = toml::to_string_pretty(self)
            .map_err(|e| ScanError::SerializationError(format!("Failed to serialize configuration: {}", e)))?;

        std::fs::write(path, config_str)
            .map_err(|e| ScanError::FileError {
                path: path.to_path_buf(),
                message: format!("Failed to write configuration: {}", e),
            })?;

        info!("Configuration saved to {}", path.display());

        Ok(())
    }

    /// Resolved scan inputs before command-line overrides
    pub fn settings(&self) -> ScanSettings {
        ScanSettings::from(self)
    }
}
