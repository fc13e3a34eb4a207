//! Alt-text command implementation

use super::common::CommonArgs;
use super::open_engine;
use crate::output::{AltTextEntry, Report};
use anyhow::Result;
use clap::Args;
use contextguard_core::adapt::alt_text::IMAGE_CONTEXT_CHARS;
use contextguard_engine::AdaptationRequest;
use std::path::PathBuf;

/// Arguments for the alt-text command
#[derive(Debug, Args)]
pub struct AltTextArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Preference file (TOML); defaults to the config file's [preferences]
    #[arg(short, long, value_name = "FILE")]
    pub preferences: Option<PathBuf>,
}

impl AltTextArgs {
    /// Execute the alt-text command
    pub async fn execute(&self) -> Result<()> {
        self.common.init_logging()?;
        let config = self.common.load_config()?;
        let input = self.common.read_input()?;
        if !input.is_html() {
            log::warn!("{} is not HTML; no images to describe", input.source);
        }

        let doc = input.to_document();
        let engine = open_engine(&config, self.preferences.as_deref()).await?;

        let mut images = Vec::new();
        for node in doc.images() {
            let context = doc.image_context(node, IMAGE_CONTEXT_CHARS);
            let src = context.src.clone();
            let result = engine.run(&AdaptationRequest::generate_alt(context)).await;
            match result.value() {
                Some(alt) => images.push(AltTextEntry {
                    src,
                    alt: alt.to_string(),
                    method: result.method(),
                }),
                None => log::warn!("Could not describe image {src}: {:?}", result.error()),
            }
        }
        log::info!("Described {} image(s)", images.len());

        self.common.emit(&config, &Report::AltText { images })
    }
}
