//! Per-author aggregation and the chat registry.
//!
//! [`AuthorStats`] owns every message one author sent, grouped by calendar
//! day, and lazily computes the author's word and emoji frequency tables.
//! [`Chat`] maps author names to their aggregates in order of first
//! appearance and is the parser's output sink.
//!
//! Frequency tables are computed once per aggregate and cached for its
//! lifetime. Nothing ever invalidates a cache: messages cannot be removed
//! after registration, so the caches only exist to avoid recomputation
//! across repeated report queries.

use std::cell::OnceCell;

use chrono::NaiveDate;
use indexmap::IndexMap;

use crate::lexicon::Lexicon;
use crate::message::{FreqTable, Message};

/// All messages from one author, grouped by day, with cached frequency
/// tables.
///
/// Created by [`Chat::register`] on an author's first message; owned
/// exclusively by the registry.
#[derive(Debug, Clone)]
pub struct AuthorStats {
    name: String,
    by_day: IndexMap<NaiveDate, Vec<Message>>,
    message_count: usize,
    word_freq: OnceCell<FreqTable>,
    emoji_freq: OnceCell<FreqTable>,
}

impl AuthorStats {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            by_day: IndexMap::new(),
            message_count: 0,
            word_freq: OnceCell::new(),
            emoji_freq: OnceCell::new(),
        }
    }

    /// The author's display name as it appears in header lines.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Appends a message to its day's list. O(1) amortized.
    pub(crate) fn record(&mut self, message: Message) {
        self.by_day.entry(message.day()).or_default().push(message);
        self.message_count += 1;
    }

    /// Total number of messages this author sent.
    pub fn message_count(&self) -> usize {
        self.message_count
    }

    /// Number of distinct calendar days with at least one message.
    pub fn active_days(&self) -> usize {
        self.by_day.len()
    }

    /// The days with messages, in order of first appearance.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.by_day.keys().copied()
    }

    /// The messages sent on `day`, in transcript order.
    pub fn messages_on(&self, day: NaiveDate) -> Option<&[Message]> {
        self.by_day.get(&day).map(Vec::as_slice)
    }

    /// Every message this author sent, day by day, in transcript order.
    pub fn all_messages(&self) -> impl Iterator<Item = &Message> {
        self.by_day.values().flatten()
    }

    /// The author's word frequency table.
    ///
    /// Computed on first call by folding every message's filtered word
    /// counts, then cached for the aggregate's lifetime. Callers must pass
    /// the same lexicon on every call; the table is keyed in first-seen
    /// order.
    pub fn word_frequency(&self, lexicon: &Lexicon) -> &FreqTable {
        self.word_freq.get_or_init(|| {
            let mut table = FreqTable::new();
            for message in self.all_messages() {
                for (word, count) in message.words(lexicon) {
                    *table.entry(word).or_insert(0) += count;
                }
            }
            table
        })
    }

    /// The author's emoji frequency table, computed and cached like
    /// [`word_frequency`](Self::word_frequency).
    pub fn emoji_frequency(&self) -> &FreqTable {
        self.emoji_freq.get_or_init(|| {
            let mut table = FreqTable::new();
            for message in self.all_messages() {
                for (e, count) in message.emojis() {
                    *table.entry(e).or_insert(0) += count;
                }
            }
            table
        })
    }

    /// Up to `n` most frequent words, descending by count.
    ///
    /// Ties break by first appearance in the author's corpus, so repeated
    /// calls return the same order.
    pub fn top_words(&self, n: usize, lexicon: &Lexicon) -> Vec<(&str, usize)> {
        top_n(self.word_frequency(lexicon), n)
    }

    /// Up to `n` most frequent emojis, descending by count, ties by first
    /// appearance.
    pub fn top_emojis(&self, n: usize) -> Vec<(&str, usize)> {
        top_n(self.emoji_frequency(), n)
    }

    /// Number of distinct filtered words in the author's corpus.
    pub fn distinct_word_count(&self, lexicon: &Lexicon) -> usize {
        self.word_frequency(lexicon).len()
    }

    /// Total filtered word occurrences in the author's corpus.
    pub fn total_word_count(&self, lexicon: &Lexicon) -> usize {
        self.word_frequency(lexicon).values().sum()
    }

    /// Ratio of distinct to total filtered words, in `[0, 1]`.
    ///
    /// Returns 0.0 by convention when the author has no countable words
    /// (for example, only multimedia or stop-word messages).
    pub fn lexical_richness(&self, lexicon: &Lexicon) -> f64 {
        let table = self.word_frequency(lexicon);
        let total: usize = table.values().sum();
        if total == 0 {
            return 0.0;
        }
        table.len() as f64 / total as f64
    }

    /// Average unfiltered (whitespace-split) words per message.
    ///
    /// Returns 0.0 when the author has no messages; report builders guard
    /// that case with an `EmptyChat` error before dividing.
    pub fn average_words_per_message(&self) -> f64 {
        if self.message_count == 0 {
            return 0.0;
        }
        let total: usize = self.all_messages().map(Message::raw_word_count).sum();
        total as f64 / self.message_count as f64
    }
}

/// Descending-count slice of a frequency table; stable sort keeps insertion
/// order for ties.
fn top_n(table: &FreqTable, n: usize) -> Vec<(&str, usize)> {
    let mut entries: Vec<(&str, usize)> = table.iter().map(|(k, v)| (k.as_str(), *v)).collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1));
    entries.truncate(n);
    entries
}

/// The chat registry: author name to [`AuthorStats`], insertion-ordered by
/// first appearance.
///
/// # Example
///
/// ```
/// use charla::{Chat, Message};
/// use chrono::NaiveDate;
///
/// let ts = NaiveDate::from_ymd_opt(2023, 2, 1).unwrap().and_hms_opt(10, 0, 0).unwrap();
/// let mut chat = Chat::new();
/// chat.register(Message::new(ts, "Alice", "Hola"));
///
/// assert_eq!(chat.author_count(), 1);
/// assert_eq!(chat.get("Alice").unwrap().message_count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Chat {
    authors: IndexMap<String, AuthorStats>,
}

impl Chat {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a message under its author, creating the aggregate on the
    /// author's first message.
    pub fn register(&mut self, message: Message) {
        self.authors
            .entry(message.author().to_string())
            .or_insert_with(|| AuthorStats::new(message.author()))
            .record(message);
    }

    /// The authors in order of first appearance.
    pub fn authors(&self) -> impl Iterator<Item = &AuthorStats> {
        self.authors.values()
    }

    /// Looks up one author's aggregate by name.
    pub fn get(&self, name: &str) -> Option<&AuthorStats> {
        self.authors.get(name)
    }

    /// Number of distinct authors.
    pub fn author_count(&self) -> usize {
        self.authors.len()
    }

    /// Total number of messages across all authors.
    pub fn message_count(&self) -> usize {
        self.authors.values().map(AuthorStats::message_count).sum()
    }

    /// Returns `true` if no messages were registered.
    pub fn is_empty(&self) -> bool {
        self.authors.is_empty()
    }
}
