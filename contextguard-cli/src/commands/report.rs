//! Check-grammar, improve and analyze commands

use super::common::CommonArgs;
use crate::input::Input;
use crate::output::Report;
use anyhow::Result;
use clap::Args;
use contextguard_core::adapt::{check, improve};
use contextguard_core::analysis::analyze;
use contextguard_core::ContentLocator;

/// Which report to produce
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    /// Grammar suggestions
    Grammar,
    /// Proofread text and fix count
    Improve,
    /// Statistics and style notes
    Analyze,
}

/// Arguments for the text report commands
#[derive(Debug, Args)]
pub struct ReportArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

impl ReportArgs {
    /// Execute a report command
    pub fn execute(&self, kind: ReportKind) -> Result<()> {
        self.common.init_logging()?;
        let config = self.common.load_config()?;
        let input = self.common.read_input()?;
        let locator = ContentLocator::with_config(config.engine.locator.clone())?;

        let text = report_text(&input, &locator)?;
        log::debug!("Running {kind:?} on {} characters", text.chars().count());

        let report = match kind {
            ReportKind::Grammar => Report::Grammar(check(&text)),
            ReportKind::Improve => Report::Improvement(improve(&text)),
            ReportKind::Analyze => Report::Analysis(analyze(&text)),
        };
        self.common.emit(&config, &report)
    }
}

/// Plain text is used as is; pages go through the content locator first
fn report_text(input: &Input, locator: &ContentLocator) -> Result<String> {
    if input.is_html() {
        let extraction = locator.locate(None, &input.to_document()).into_content()?;
        Ok(extraction.text)
    } else {
        Ok(input.content.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::InputKind;

    fn input(kind: InputKind, content: &str) -> Input {
        Input {
            source: "test".into(),
            kind,
            content: content.into(),
        }
    }

    #[test]
    fn test_plain_text_keeps_paragraphs() {
        let text = report_text(
            &input(InputKind::Text, "First.\n\nSecond."),
            &ContentLocator::new(),
        )
        .unwrap();
        assert_eq!(text, "First.\n\nSecond.");
    }

    #[test]
    fn test_empty_page_has_no_content() {
        let err = report_text(
            &input(InputKind::Html, "<html><body></body></html>"),
            &ContentLocator::new(),
        )
        .unwrap_err();
        assert!(err.to_string().to_lowercase().contains("no content"));
    }
}
