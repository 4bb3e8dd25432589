//! # Charla
//!
//! A Rust library for analyzing exported WhatsApp chat transcripts: who
//! talks the most, which words and emojis each participant favors, and how
//! rich their vocabulary is.
//!
//! ## Overview
//!
//! Charla works on the plain-text `.txt` files WhatsApp produces when you
//! export a conversation. It reconstructs multi-line messages, groups them
//! per author and per calendar day, and derives per-author statistics:
//!
//! - **Word frequencies** — after stop-word, laughter, and non-Latin
//!   filtering via a [`Lexicon`]
//! - **Emoji frequencies** — every occurrence counted, grapheme-aware
//! - **Lexical richness** — distinct words over total words
//! - **Activity** — message counts and active calendar days
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use charla::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let parser = TranscriptParser::new();
//!     let chat = parser.parse("chat.txt".as_ref())?;
//!
//!     let lexicon = Lexicon::spanish();
//!     for author in chat.authors() {
//!         println!(
//!             "{}: {} messages, richness {:.3}",
//!             author.name(),
//!             author.message_count(),
//!             author.lexical_richness(&lexicon),
//!         );
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Rendering Reports
//!
//! ```rust,no_run
//! use charla::prelude::*;
//! use charla::report::{ConsoleReport, ReportBuilder};
//!
//! # fn main() -> Result<()> {
//! let chat = TranscriptParser::new().parse("chat.txt".as_ref())?;
//! let report = ConsoleReport::new().build(&chat, &Lexicon::spanish(), &ReportParams::new())?;
//! println!("{}", report);
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] — [`TranscriptParser`], the line-oriented transcript reader
//! - [`chat`] — [`Chat`] registry and per-author [`AuthorStats`] aggregates
//! - [`message`] — [`Message`] and the [`FreqTable`] frequency map
//! - [`lexicon`] — [`Lexicon`], tokenization and stop-word filtering
//! - [`emoji`] — grapheme-aware emoji extraction
//! - [`config`] — [`ReportParams`] display parameters
//! - [`report`] — [`ReportBuilder`](report::ReportBuilder) back-ends
//! - [`cli`] — CLI argument types (`cli` feature)
//! - [`error`] — [`CharlaError`] and [`Result`]
//! - [`prelude`] — convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod chat;
pub mod config;
pub mod emoji;
pub mod error;
pub mod lexicon;
pub mod message;
pub mod parser;
pub mod report;
mod stopwords;

// Re-export the main types at the crate root for convenience
pub use chat::{AuthorStats, Chat};
pub use config::ReportParams;
pub use error::{CharlaError, Result};
pub use lexicon::Lexicon;
pub use message::{FreqTable, Message};
pub use parser::TranscriptParser;

/// Convenient re-exports for common usage.
///
/// Import everything you need with a single line:
///
/// ```rust
/// use charla::prelude::*;
/// ```
pub mod prelude {
    pub use crate::chat::{AuthorStats, Chat};
    pub use crate::config::ReportParams;
    pub use crate::error::{CharlaError, Result};
    pub use crate::lexicon::Lexicon;
    pub use crate::message::{FreqTable, Message};
    pub use crate::parser::TranscriptParser;
    pub use crate::report::{ConsoleReport, ReportBuilder};
}
