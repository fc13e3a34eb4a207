//! Plain text output formatter

use super::{OutputFormatter, Report};
use anyhow::Result;
use std::io::Write;

/// Plain text formatter - outputs the produced text, suitable for piping
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Recover the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_report(&mut self, report: &Report) -> Result<()> {
        let w = &mut self.writer;
        match report {
            Report::Extraction(extraction) => writeln!(w, "{}", extraction.text)?,
            Report::Adaptation { result, .. } => {
                if let Some(value) = result.value() {
                    writeln!(w, "{value}")?;
                }
            }
            Report::Grammar(grammar) => {
                for s in &grammar.suggestions {
                    writeln!(w, "{:?} -> {:?}: {}", s.original, s.suggestion, s.message)?;
                }
                if grammar.has_issues {
                    writeln!(w)?;
                }
                writeln!(w, "{}", grammar.corrected)?;
            }
            Report::Improvement(improvement) => writeln!(w, "{}", improvement.improved)?,
            Report::Analysis(analysis) => {
                let stats = &analysis.statistics;
                writeln!(w, "Words:      {}", stats.word_count)?;
                writeln!(w, "Sentences:  {}", stats.sentence_count)?;
                writeln!(w, "Characters: {}", stats.character_count)?;
                writeln!(w, "Paragraphs: {}", stats.paragraph_count)?;
                writeln!(w, "Avg words:  {:.1}", stats.average_sentence_words)?;
                writeln!(w, "Formality:  {}", analysis.formality)?;
                for note in &analysis.suggestions {
                    writeln!(w, "- {note}")?;
                }
            }
            Report::AltText { images } => {
                for image in images {
                    writeln!(w, "{}\t{}", image.src, image.alt)?;
                }
            }
            Report::Listing { title, items } => {
                writeln!(w, "{title}:")?;
                for item in items {
                    writeln!(w, "  {:<14} {}", item.name, item.description)?;
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

#[cfg(test)]
mod tests {
    use super::*;
    use contextguard_core::adapt::check;

    fn render(report: &Report) -> String {
        let mut formatter = TextFormatter::new(Vec::new());
        formatter.format_report(report).unwrap();
        formatter.finish().unwrap();
        String::from_utf8(formatter.into_inner()).unwrap()
    }

    #[test]
    fn test_grammar_report_ends_with_corrected_text() {
        let out = render(&Report::Grammar(check("hello  world")));
        assert!(out.contains("Collapse repeated whitespace"));
        assert!(out.ends_with("Hello world\n"));
    }

    #[test]
    fn test_clean_text_has_no_suggestion_lines() {
        let out = render(&Report::Grammar(check("All good.")));
        assert_eq!(out, "All good.\n");
    }
}
