//! Markdown output formatter

use super::{OutputFormatter, Report};
use anyhow::Result;
use std::io::Write;

/// Markdown formatter - headings, metadata lines and quoted text
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    report_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            report_count: 0,
        }
    }

    /// Recover the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn quote(&mut self, text: &str) -> Result<()> {
        for line in text.lines() {
            writeln!(self.writer, "> {line}")?;
        }
        Ok(())
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_report(&mut self, report: &Report) -> Result<()> {
        if self.report_count > 0 {
            writeln!(self.writer)?;
        }
        self.report_count += 1;

        match report {
            Report::Extraction(extraction) => {
                writeln!(self.writer, "## Extracted content")?;
                writeln!(self.writer)?;
                writeln!(self.writer, "- **Source:** `{}`", extraction.source_kind)?;
                writeln!(self.writer, "- **Selection:** {}", extraction.has_selection)?;
                writeln!(self.writer)?;
                self.quote(&extraction.text)?;
            }
            Report::Adaptation {
                operation,
                extraction,
                result,
            } => {
                writeln!(self.writer, "## {operation}")?;
                writeln!(self.writer)?;
                writeln!(self.writer, "- **Source:** `{}`", extraction.source_kind)?;
                writeln!(self.writer, "- **Method:** `{}`", result.method())?;
                writeln!(self.writer)?;
                match (result.value(), result.error()) {
                    (Some(value), _) => self.quote(value)?,
                    (None, Some(kind)) => writeln!(self.writer, "*{kind}*")?,
                    (None, None) => {}
                }
            }
            Report::Grammar(grammar) => {
                writeln!(self.writer, "## Grammar check")?;
                writeln!(self.writer)?;
                for s in &grammar.suggestions {
                    writeln!(
                        self.writer,
                        "- `{}` → `{}`: {}",
                        s.original, s.suggestion, s.message
                    )?;
                }
                if grammar.has_issues {
                    writeln!(self.writer)?;
                }
                self.quote(&grammar.corrected)?;
            }
            Report::Improvement(improvement) => {
                writeln!(self.writer, "## Improved text")?;
                writeln!(self.writer)?;
                self.quote(&improvement.improved)?;
                writeln!(self.writer)?;
                writeln!(self.writer, "*Fixes applied: {}*", improvement.grammar_fixes)?;
            }
            Report::Analysis(analysis) => {
                let stats = &analysis.statistics;
                writeln!(self.writer, "## Text analysis")?;
                writeln!(self.writer)?;
                writeln!(self.writer, "| Measure | Value |")?;
                writeln!(self.writer, "|---|---|")?;
                writeln!(self.writer, "| Words | {} |", stats.word_count)?;
                writeln!(self.writer, "| Sentences | {} |", stats.sentence_count)?;
                writeln!(self.writer, "| Characters | {} |", stats.character_count)?;
                writeln!(self.writer, "| Paragraphs | {} |", stats.paragraph_count)?;
                writeln!(
                    self.writer,
                    "| Avg words per sentence | {:.1} |",
                    stats.average_sentence_words
                )?;
                writeln!(self.writer, "| Formality | {} |", analysis.formality)?;
                if !analysis.suggestions.is_empty() {
                    writeln!(self.writer)?;
                    for note in &analysis.suggestions {
                        writeln!(self.writer, "- {note}")?;
                    }
                }
            }
            Report::AltText { images } => {
                writeln!(self.writer, "## Image descriptions")?;
                writeln!(self.writer)?;
                for (i, image) in images.iter().enumerate() {
                    writeln!(self.writer, "{}. `{}`: {}", i + 1, image.src, image.alt)?;
                }
            }
            Report::Listing { title, items } => {
                writeln!(self.writer, "## {title}")?;
                writeln!(self.writer)?;
                for item in items {
                    writeln!(self.writer, "- `{}`: {}", item.name, item.description)?;
                }
            }
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
