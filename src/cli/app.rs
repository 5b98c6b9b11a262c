use anyhow::Result;
use std::path::Path;
use tracing::info;

use crate::config::Config;
use crate::error::ScanResult;

use super::commands::{self, Commands, ScanArgs};

/// The main application struct
pub struct App {
    config: Config,
}

impl App {
    /// Load configuration and create the application
    pub fn initialize(config_path: Option<&Path>) -> ScanResult<Self> {
        let config = Config::load(config_path)?;
        Ok(Self::with_config(config))
    }

    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// Run a command; without one, scan using the configured defaults
    pub fn run(&self, command: Option<Commands>) -> Result<()> {
        info!("Starting linescan v{}", env!("CARGO_PKG_VERSION"));

        let command = command.unwrap_or_else(|| Commands::Scan(ScanArgs::default()));
        commands::execute_command(&command, &self.config)
    }
}
