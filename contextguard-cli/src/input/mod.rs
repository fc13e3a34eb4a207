//! Input handling module
//!
//! Inputs are either HTML pages, parsed into a [`Document`], or plain text,
//! wrapped as a single paragraph so the content locator treats both alike.

use crate::error::CliError;
use anyhow::{Context, Result};
use contextguard_core::Document;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Path that reads from standard input
pub const STDIN: &str = "-";

/// How an input is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// An HTML page
    Html,
    /// Plain text
    Text,
}

/// One loaded input
#[derive(Debug, Clone)]
pub struct Input {
    /// Where the input came from
    pub source: String,
    /// How to interpret the content
    pub kind: InputKind,
    /// Raw content
    pub content: String,
}

impl Input {
    /// Load an input, choosing HTML by extension unless forced
    pub fn read(source: &str, force_html: bool) -> Result<Self> {
        let content = if source == STDIN {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read standard input")?;
            buffer
        } else {
            let path = Path::new(source);
            if !path.exists() {
                return Err(CliError::FileNotFound(source.to_string()).into());
            }
            fs::read_to_string(path)
                .with_context(|| format!("Failed to read file: {}", path.display()))?
        };

        let kind = if force_html || is_html_path(source) {
            InputKind::Html
        } else {
            InputKind::Text
        };
        log::debug!("Read {} bytes from {source} as {kind:?}", content.len());

        Ok(Self {
            source: source.to_string(),
            kind,
            content,
        })
    }

    /// Build the document the content locator runs on
    pub fn to_document(&self) -> Document {
        match self.kind {
            InputKind::Html => Document::parse_html(&self.content),
            InputKind::Text => Document::builder().element("p", &self.content).build(),
        }
    }

    /// Whether the input is an HTML page
    pub fn is_html(&self) -> bool {
        self.kind == InputKind::Html
    }
}

fn is_html_path(source: &str) -> bool {
    Path::new(source)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("html") || ext.eq_ignore_ascii_case("htm"))
}
