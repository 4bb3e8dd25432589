//! Command-line interface definition.

use std::fmt;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Output format for the rendered report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain-text panels for the terminal
    Text,
    /// One JSON object per author
    #[cfg(feature = "json-report")]
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            #[cfg(feature = "json-report")]
            Self::Json => write!(f, "json"),
        }
    }
}

/// Analyze an exported WhatsApp chat transcript.
#[derive(Debug, Parser)]
#[command(name = "charla", version, about, long_about = None)]
pub struct Cli {
    /// Path to the exported .txt transcript
    pub file: PathBuf,

    /// How many top words to show per author
    #[arg(short = 'w', long = "words", default_value_t = 30)]
    pub words: usize,

    /// How many top emojis to show per author
    #[arg(short = 'e', long = "emojis", default_value_t = 15)]
    pub emojis: usize,

    /// Report format
    #[arg(short = 'f', long = "format", default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Extra stop words to filter out, comma-separated
    #[arg(long = "ignore", value_delimiter = ',')]
    pub ignore: Vec<String>,
}
