//! Extract command implementation

use super::common::CommonArgs;
use super::find_selection;
use crate::output::Report;
use anyhow::Result;
use clap::Args;
use contextguard_core::{ContentLocator, SourceKind};

/// Arguments for the extract command
#[derive(Debug, Args)]
pub struct ExtractArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Phrase to treat as the user's selection
    #[arg(short, long, value_name = "PHRASE")]
    pub select: Option<String>,
}

impl ExtractArgs {
    /// Execute the extract command
    pub fn execute(&self) -> Result<()> {
        self.common.init_logging()?;
        let config = self.common.load_config()?;
        let input = self.common.read_input()?;

        let doc = input.to_document();
        let selection = find_selection(&doc, self.select.as_deref())?;
        let locator = ContentLocator::with_config(config.engine.locator.clone())?;

        let extraction = locator.locate(selection.as_ref(), &doc);
        if extraction.source_kind == SourceKind::None {
            log::warn!("No content found in {}", input.source);
        } else {
            log::info!(
                "Extracted {} characters via {}",
                extraction.text.chars().count(),
                extraction.source_kind
            );
        }

        self.common.emit(&config, &Report::Extraction(extraction))
    }
}
