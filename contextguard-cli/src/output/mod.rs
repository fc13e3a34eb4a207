//! Output formatting module

use anyhow::{Context, Result};
use clap::ValueEnum;
use contextguard_core::adapt::{GrammarReport, Improvement};
use contextguard_core::analysis::TextAnalysis;
use contextguard_core::ExtractionResult;
use contextguard_engine::{AdaptationResult, Operation};
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Something a command prints
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Report {
    /// Located content
    Extraction(ExtractionResult),
    /// An operation run on located content
    Adaptation {
        /// What was run
        operation: Operation,
        /// The text it ran on
        extraction: ExtractionResult,
        /// What came back
        result: AdaptationResult,
    },
    /// Grammar suggestions
    Grammar(GrammarReport),
    /// Proofread text with a fix count
    Improvement(Improvement),
    /// Statistics and style notes
    Analysis(TextAnalysis),
    /// Alternative text per image
    AltText {
        /// One entry per image, in document order
        images: Vec<AltTextEntry>,
    },
    /// Named items with descriptions
    Listing {
        /// What is listed
        title: String,
        /// The items
        items: Vec<ListItem>,
    },
}

/// Alternative text generated for one image
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AltTextEntry {
    /// Image source
    pub src: String,
    /// Generated or existing alternative text
    pub alt: String,
    /// Which implementation produced it
    pub method: contextguard_engine::Method,
}

/// One row of a listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListItem {
    /// Name as accepted on the command line
    pub name: String,
    /// Short description
    pub description: String,
}

impl ListItem {
    /// Create a listing row
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output a single report
    fn format_report(&mut self, report: &Report) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain text, just the produced text where possible
    Text,
    /// JSON document with full metadata
    Json,
    /// Markdown formatted output
    Markdown,
}

impl OutputFormat {
    /// Parse a format name from a configuration file
    pub fn from_name(name: &str) -> Option<Self> {
        <Self as ValueEnum>::from_str(name, true).ok()
    }
}

/// Boxed writer shared by every formatter
pub type Sink = Box<dyn Write + Send + Sync>;

/// Open stdout or a file for writing
pub fn open_sink(path: Option<&Path>) -> Result<Sink> {
    Ok(match path {
        Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
            format!("Failed to create output file: {}", path.display())
        })?)),
        None => Box::new(io::stdout()),
    })
}

/// Build the formatter for a format
pub fn create_formatter(
    format: OutputFormat,
    sink: Sink,
    pretty_json: bool,
) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(sink)),
        OutputFormat::Json => Box::new(JsonFormatter::new(sink, pretty_json)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(sink)),
    }
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;
