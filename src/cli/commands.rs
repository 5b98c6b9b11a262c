use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, info};

use crate::config::{Config, ScanSettings};
use crate::core::{ScanOutcome, Scanner};
use crate::error::{ScanError, ScanResult};
use crate::reporting::{formatter_for, OutputFormat, ScanReport};

#[derive(Parser, Debug)]
#[command(name = "linescan", version)]
#[command(about = "Find the first line of a text file that contains a marker")]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[arg(long, global = true, help = "Enable debug logging")]
    pub verbose: bool,

    #[arg(long, short, global = true, help = "Path to a configuration file")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan a file for the first line containing a marker
    Scan(ScanArgs),

    /// Initialize the configuration
    Init {
        #[arg(short, long, help = "Force overwrite existing configuration")]
        force: bool,
    },
}

#[derive(clap::Args, Debug, Default, Clone)]
pub struct ScanArgs {
    #[arg(help = "File to scan")]
    pub path: Option<PathBuf>,

    #[arg(short, long, conflicts_with = "id", help = "Substring to search for")]
    pub target: Option<String>,

    #[arg(long, help = "Search for the attribute id=\"ID\"")]
    pub id: Option<String>,

    #[arg(short = 'C', long, help = "Lines of context around the match")]
    pub context: Option<usize>,

    #[arg(short, long, value_enum, help = "Output format")]
    pub format: Option<OutputFormat>,
}

impl ScanArgs {
    /// Apply command-line overrides on top of configured settings
    pub fn apply(&self, mut settings: ScanSettings) -> ScanSettings {
        if let Some(path) = &self.path {
            settings.path = path.clone();
        }
        if let Some(target) = &self.target {
            settings.target = target.clone();
        } else if let Some(id) = &self.id {
            settings.target = format!("id=\"{}\"", id);
        }
        if let Some(context) = self.context {
            settings.context = context;
        }
        if let Some(format) = self.format {
            settings.format = format;
        }
        settings
    }
}

/// Run one scan and write the rendered outcome to `out`
pub fn run_scan<W: Write>(settings: &ScanSettings, out: &mut W) -> ScanResult<ScanOutcome> {
    debug!("Scanning {} for {}", settings.path.display(), settings.target);

    let scanner = Scanner::new(settings.target.as_str()).with_context(settings.context);
    let outcome = scanner.scan_path(&settings.path)?;

    let report = ScanReport::new(outcome.clone(), scanner.target(), &settings.path);
    let rendered = formatter_for(settings.format).render(&report)?;
    writeln!(out, "{}", rendered).map_err(ScanError::Output)?;

    Ok(outcome)
}

pub fn execute_command(command: &Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Scan(args) => {
            let settings = args.apply(config.settings());
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            run_scan(&settings, &mut out)
                .with_context(|| format!("Failed to scan {}", settings.path.display()))?;
        }
        Commands::Init { force } => {
            let config_path = Config::init(*force)?;
            info!("Configuration initialized");
            println!("Configuration initialized at {}", config_path.display());
        }
    }

    Ok(())
}
