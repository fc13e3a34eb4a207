//! Adapt command implementation

use super::common::CommonArgs;
use super::{find_selection, open_engine};
use crate::error::CliError;
use crate::output::Report;
use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use contextguard_core::{LanguageCode, ReadingLevel, Tone};
use contextguard_engine::{Operation, PreferenceOverrides};
use std::fs;
use std::path::PathBuf;

/// Arguments for the adapt command
#[derive(Debug, Args)]
pub struct AdaptArgs {
    /// Operation to run on the located content
    #[arg(value_enum)]
    pub operation: TextOperation,

    #[command(flatten)]
    pub common: CommonArgs,

    /// Phrase to treat as the user's selection
    #[arg(short, long, value_name = "PHRASE")]
    pub select: Option<String>,

    /// Tone for rewrites
    #[arg(long, value_name = "TONE")]
    pub tone: Option<Tone>,

    /// Reading level for rewrites
    #[arg(long, value_name = "LEVEL")]
    pub reading_level: Option<ReadingLevel>,

    /// Two-letter target language for translation
    #[arg(long, value_name = "CODE")]
    pub target_language: Option<LanguageCode>,

    /// Preference file (TOML); defaults to the config file's [preferences]
    #[arg(short, long, value_name = "FILE")]
    pub preferences: Option<PathBuf>,

    /// Write the HTML input here with the selection replaced by the result
    #[arg(long, value_name = "FILE", requires = "select")]
    pub replace_output: Option<PathBuf>,
}

/// Operations that work on text
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TextOperation {
    /// Extractive summary
    Summarize,
    /// Rewrite toward a tone
    Rewrite,
    /// Fix spacing, capitalisation and the pronoun "I"
    Proofread,
    /// Translate to the target language
    Translate,
}

impl From<TextOperation> for Operation {
    fn from(op: TextOperation) -> Self {
        match op {
            TextOperation::Summarize => Operation::Summarize,
            TextOperation::Rewrite => Operation::Rewrite,
            TextOperation::Proofread => Operation::Proofread,
            TextOperation::Translate => Operation::Translate,
        }
    }
}

impl AdaptArgs {
    /// Execute the adapt command
    pub async fn execute(&self) -> Result<()> {
        self.common.init_logging()?;
        let config = self.common.load_config()?;
        let input = self.common.read_input()?;

        let mut doc = input.to_document();
        let selection = find_selection(&doc, self.select.as_deref())?;
        let engine = open_engine(&config, self.preferences.as_deref()).await?;
        let operation = Operation::from(self.operation);

        let (extraction, result) = engine
            .run_on_document(&doc, selection.as_ref(), operation, self.overrides())
            .await;
        log::info!(
            "{operation} on {} via {} ({})",
            extraction.source_kind,
            result.method(),
            if result.success() { "ok" } else { "failed" }
        );

        self.common.emit(
            &config,
            &Report::Adaptation {
                operation,
                extraction: extraction.clone(),
                result: result.clone(),
            },
        )?;

        let Some(value) = result.value() else {
            let message = result
                .error()
                .map(|kind| kind.message())
                .unwrap_or("no result");
            return Err(CliError::AdaptationFailed(message.to_string()).into());
        };

        if let Some(path) = &self.replace_output {
            if !input.is_html() {
                return Err(CliError::ReplaceFailed("input is not an HTML document".into()).into());
            }
            let anchor = extraction
                .anchor()
                .ok_or_else(|| CliError::ReplaceFailed("no selection was captured".into()))?;
            if !engine.locator().replace_selection(&mut doc, anchor, value) {
                return Err(CliError::ReplaceFailed(
                    "the selection no longer matches the document".into(),
                )
                .into());
            }
            fs::write(path, doc.to_html())
                .with_context(|| format!("Failed to write to {}", path.display()))?;
            log::info!("Wrote replaced document to {}", path.display());
        }

        Ok(())
    }

    fn overrides(&self) -> PreferenceOverrides {
        PreferenceOverrides {
            tone: self.tone,
            reading_level: self.reading_level,
            target_language: self.target_language.clone(),
        }
    }
}
