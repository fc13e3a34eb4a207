//! CLI command implementations

use crate::config::CliConfig;
use crate::error::CliError;
use anyhow::Result;
use clap::Subcommand;
use contextguard_core::{Document, Selection};
use contextguard_engine::{
    AdaptationEngine, MemoryPreferenceStore, PreferenceStore, TomlPreferenceStore,
};
use std::path::Path;
use std::sync::Arc;

pub mod adapt;
pub mod alt_text;
pub mod common;
pub mod extract;
pub mod generate_config;
pub mod list;
pub mod report;

pub use list::ListCommands;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Locate the main content or a selection and print it
    Extract(extract::ExtractArgs),

    /// Summarize, rewrite, proofread or translate located content
    Adapt(adapt::AdaptArgs),

    /// Report every proofreading correction
    CheckGrammar(report::ReportArgs),

    /// Proofread and count the corrections
    Improve(report::ReportArgs),

    /// Text statistics, formality and style notes
    Analyze(report::ReportArgs),

    /// Describe every image in an HTML page
    AltText(alt_text::AltTextArgs),

    /// Write a configuration file with every default
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

impl Commands {
    /// Run the command
    pub async fn execute(&self) -> Result<()> {
        match self {
            Commands::Extract(args) => args.execute(),
            Commands::Adapt(args) => args.execute().await,
            Commands::CheckGrammar(args) => args.execute(report::ReportKind::Grammar),
            Commands::Improve(args) => args.execute(report::ReportKind::Improve),
            Commands::Analyze(args) => args.execute(report::ReportKind::Analyze),
            Commands::AltText(args) => args.execute().await,
            Commands::GenerateConfig(args) => args.execute(),
            Commands::List { subcommand } => subcommand.execute(),
        }
    }
}

/// Capture the first occurrence of a phrase as the selection
pub fn find_selection(doc: &Document, phrase: Option<&str>) -> Result<Option<Selection>> {
    let Some(phrase) = phrase else {
        return Ok(None);
    };
    match doc.find_text(phrase) {
        Some(selection) => Ok(Some(selection)),
        None => Err(CliError::SelectionNotFound(phrase.to_string()).into()),
    }
}

/// Build an offline engine with the configured preference store
pub async fn open_engine(
    config: &CliConfig,
    preferences: Option<&Path>,
) -> Result<AdaptationEngine> {
    let store: Arc<dyn PreferenceStore> = match preferences {
        Some(path) => {
            log::info!("Using preference file {}", path.display());
            Arc::new(TomlPreferenceStore::open(path).await?)
        }
        None => Arc::new(MemoryPreferenceStore::with_preferences(&config.preferences)),
    };

    let engine = AdaptationEngine::builder()
        .config(config.engine.clone())
        .preference_store(store)
        .build()?;
    Ok(engine)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_selection() {
        let doc = Document::parse_html("<body><p>Alpha beta gamma</p></body>");

        assert!(find_selection(&doc, None).unwrap().is_none());

        let selection = find_selection(&doc, Some("beta")).unwrap().unwrap();
        assert_eq!(selection.text, "beta");
        assert!(selection.anchor.is_some());

        let err = find_selection(&doc, Some("delta")).unwrap_err();
        assert!(err.to_string().contains("Selection not found"));
    }

    #[tokio::test]
    async fn test_open_engine_seeds_preferences_from_config() {
        let mut config = CliConfig::default();
        config.preferences.tone = contextguard_core::Tone::Formal;

        let engine = open_engine(&config, None).await.unwrap();
        assert_eq!(
            engine.preferences().await.tone,
            contextguard_core::Tone::Formal
        );
    }
}
