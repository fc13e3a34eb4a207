//! List command implementation

use crate::output::{ListItem, OutputFormat, OutputFormatter, Report, TextFormatter};
use anyhow::Result;
use clap::{Subcommand, ValueEnum};
use contextguard_core::types::KNOWN_LANGUAGES;
use contextguard_core::Tone;
use std::io;

/// List subcommands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum ListCommands {
    /// List available tones
    Tones,

    /// List languages with a known name
    Languages,

    /// List available output formats
    Formats,
}

impl ListCommands {
    /// Print the listing to stdout
    pub fn execute(&self) -> Result<()> {
        let mut formatter = TextFormatter::new(io::stdout());
        formatter.format_report(&self.report())?;
        formatter.finish()
    }

    /// The listing as a report
    pub fn report(&self) -> Report {
        let (title, items) = match self {
            ListCommands::Tones => (
                "Tones",
                Tone::ALL
                    .into_iter()
                    .map(|tone| ListItem::new(tone.as_str(), tone_description(tone)))
                    .collect(),
            ),
            ListCommands::Languages => (
                "Languages",
                KNOWN_LANGUAGES
                    .iter()
                    .map(|(code, name)| ListItem::new(*code, *name))
                    .collect(),
            ),
            ListCommands::Formats => (
                "Formats",
                OutputFormat::value_variants()
                    .iter()
                    .filter_map(|format| {
                        let value = format.to_possible_value()?;
                        Some(ListItem::new(
                            value.get_name(),
                            value.get_help().map(|h| h.to_string()).unwrap_or_default(),
                        ))
                    })
                    .collect(),
            ),
        };
        Report::Listing {
            title: title.to_string(),
            items,
        }
    }
}

fn tone_description(tone: Tone) -> &'static str {
    match tone {
        Tone::Neutral => "Leave the wording unchanged",
        Tone::Formal => "Expand contractions",
        Tone::Friendly => "Contract common phrases",
        Tone::Casual => "Contract common phrases",
        Tone::Concise => "Shorter phrasing (native adapters only)",
    }
}
