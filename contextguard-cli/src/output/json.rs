//! JSON output formatter

use super::{OutputFormatter, Report};
use anyhow::Result;
use serde_json::Value;
use std::io::Write;

/// JSON formatter - one object per report, an array when there are several
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    reports: Vec<Value>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            reports: Vec::new(),
        }
    }

    /// Recover the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_report(&mut self, report: &Report) -> Result<()> {
        self.reports.push(serde_json::to_value(report)?);
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        let document = match self.reports.len() {
            1 => self.reports.remove(0),
            _ => Value::Array(std::mem::take(&mut self.reports)),
        };
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &document)?;
        } else {
            serde_json::to_writer(&mut self.writer, &document)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contextguard_core::adapt::improve;

    #[test]
    fn test_single_report_is_an_object() {
        let mut formatter = JsonFormatter::new(Vec::new(), false);
        formatter
            .format_report(&Report::Improvement(improve("hi  there")))
            .unwrap();
        formatter.finish().unwrap();

        let out = String::from_utf8(formatter.into_inner()).unwrap();
        let json: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["improved"], "Hi there");
        assert_eq!(json["grammar_fixes"], 2);
    }

    #[test]
    fn test_several_reports_form_an_array() {
        let mut formatter = JsonFormatter::new(Vec::new(), true);
        formatter
            .format_report(&Report::Improvement(improve("a")))
            .unwrap();
        formatter
            .format_report(&Report::Improvement(improve("b")))
            .unwrap();
        formatter.finish().unwrap();

        let out = String::from_utf8(formatter.into_inner()).unwrap();
        let json: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json.as_array().map(Vec::len), Some(2));
    }
}
