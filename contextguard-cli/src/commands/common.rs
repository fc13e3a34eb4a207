//! Flags shared by the content commands

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::Input;
use crate::output::{create_formatter, open_sink, OutputFormat, OutputFormatter, Report};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

/// Input, output and logging flags
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Input file, `-` for standard input
    #[arg(short, long, value_name = "FILE", required = true)]
    pub input: String,

    /// Treat the input as HTML regardless of its extension
    #[arg(long)]
    pub html: bool,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from the config file, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE", env = "CONTEXTGUARD_CONFIG")]
    pub config: Option<PathBuf>,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl CommonArgs {
    /// Initialize logging based on verbosity level
    pub fn init_logging(&self) -> Result<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
                .init();
        }

        Ok(())
    }

    /// Load the configuration file, or the defaults without one
    pub fn load_config(&self) -> Result<CliConfig> {
        match &self.config {
            Some(path) => {
                log::info!("Loading configuration from {}", path.display());
                CliConfig::load(path)
            }
            None => Ok(CliConfig::default()),
        }
    }

    /// Read the input
    pub fn read_input(&self) -> Result<Input> {
        Input::read(&self.input, self.html)
    }

    /// Flag, then config file, then text
    pub fn resolve_format(&self, config: &CliConfig) -> Result<OutputFormat> {
        if let Some(format) = self.format {
            return Ok(format);
        }
        OutputFormat::from_name(&config.output.default_format).ok_or_else(|| {
            CliError::ConfigError(format!(
                "unknown output format: {}",
                config.output.default_format
            ))
            .into()
        })
    }

    /// Print one report in the resolved format
    pub fn emit(&self, config: &CliConfig, report: &Report) -> Result<()> {
        let mut formatter = self.formatter(config)?;
        formatter.format_report(report)?;
        formatter.finish()
    }

    fn formatter(&self, config: &CliConfig) -> Result<Box<dyn OutputFormatter>> {
        let format = self.resolve_format(config)?;
        let sink = open_sink(self.output.as_deref())?;
        Ok(create_formatter(format, sink, config.output.pretty_json))
    }
}
