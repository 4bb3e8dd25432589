//! The logical message type.
//!
//! This module provides [`Message`], one logical transcript message: a
//! timestamp, an author, and the raw text reconstructed from one header line
//! plus any continuation lines.
//!
//! A message is assembled by the parser (which appends continuation lines
//! via `push_line`) and is immutable once registered in a [`Chat`]. Word and
//! emoji counts are derived views computed on demand, never stored.
//!
//! [`Chat`]: crate::chat::Chat
//!
//! # Example
//!
//! ```
//! use charla::{Lexicon, Message};
//! use chrono::NaiveDate;
//!
//! let ts = NaiveDate::from_ymd_opt(2023, 2, 1).unwrap().and_hms_opt(10, 0, 0).unwrap();
//! let msg = Message::new(ts, "Alice", "Hola mundo 😂");
//!
//! let lexicon = Lexicon::spanish();
//! assert_eq!(msg.words(&lexicon).get("mundo"), Some(&1));
//! assert_eq!(msg.emojis().get("😂"), Some(&1));
//! ```

use std::fmt;
use std::sync::OnceLock;

use chrono::{NaiveDate, NaiveDateTime};
use indexmap::IndexMap;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::emoji;
use crate::lexicon::Lexicon;

/// A frequency table: token to occurrence count, insertion-ordered.
///
/// Insertion order is first appearance, which gives `top_n` queries a
/// deterministic tie-break.
pub type FreqTable = IndexMap<String, usize>;

/// Placeholder text WhatsApp substitutes for attachments. Both the Spanish
/// and the English export markers are recognized, case-sensitively.
const MULTIMEDIA_PATTERN: &str = r"<Multimedia omitido>|<Media omitted>";

fn multimedia_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(MULTIMEDIA_PATTERN).unwrap())
}

/// One logical transcript message.
///
/// Constructed from a header line; continuation lines are appended during
/// parsing. All derived views (`words`, `emojis`, `raw_word_count`) are
/// recomputed on demand — the per-author caches live in
/// [`AuthorStats`](crate::chat::AuthorStats).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    timestamp: NaiveDateTime,
    author: String,
    text: String,
}

impl Message {
    /// Creates a message from header-line fields.
    pub fn new(
        timestamp: NaiveDateTime,
        author: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            author: author.into(),
            text: text.into(),
        }
    }

    /// Appends a continuation line, separated by a newline.
    ///
    /// Only the parser calls this, while the message is still being
    /// assembled. Blank lines are preserved as empty lines in the text.
    pub(crate) fn push_line(&mut self, line: &str) {
        self.text.push('\n');
        self.text.push_str(line);
    }

    /// When the message was sent.
    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    /// The calendar day the message was sent on.
    pub fn day(&self) -> NaiveDate {
        self.timestamp.date()
    }

    /// The author name from the header line.
    pub fn author(&self) -> &str {
        &self.author
    }

    /// The raw message text, with continuation lines joined by newlines.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns `true` if the text contains the media-omitted placeholder.
    pub fn is_multimedia(&self) -> bool {
        multimedia_re().is_match(&self.text)
    }

    /// Counts the filtered word tokens in this message.
    ///
    /// Empty for multimedia messages. Tokens are lowercased and run through
    /// the lexicon's stop-word, laughter, and Latin-letters filters.
    pub fn words(&self, lexicon: &Lexicon) -> FreqTable {
        let mut counts = FreqTable::new();
        if self.is_multimedia() {
            return counts;
        }
        for word in lexicon.filter_words(&self.text) {
            *counts.entry(word).or_insert(0) += 1;
        }
        counts
    }

    /// Counts the emoji occurrences in this message.
    ///
    /// Every occurrence of every emoji grapheme cluster is counted, so
    /// `"😂😂"` yields a count of 2.
    pub fn emojis(&self) -> FreqTable {
        let mut counts = FreqTable::new();
        for e in emoji::emojis_in(&self.text) {
            *counts.entry(e.to_string()).or_insert(0) += 1;
        }
        counts
    }

    /// Unfiltered word count: whitespace-separated chunks of the raw text.
    pub fn raw_word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }

    /// Number of characters in the raw text.
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
