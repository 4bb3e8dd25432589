//! Tokenization and word filtering.
//!
//! [`Lexicon`] is the filter stage between raw message text and the word
//! frequency tables: it tokenizes, lowercases, and drops stop words,
//! laughter transliterations ("jajaja", "hahaha"), and anything that is not
//! a plain Latin-letter word (numbers, punctuation runs, other scripts).
//!
//! A `Lexicon` is built once at startup and passed by reference into every
//! component that counts words, so tests can inject a custom stop-word set
//! without touching global state.
//!
//! # Example
//!
//! ```
//! use charla::Lexicon;
//!
//! let lexicon = Lexicon::spanish();
//! let words = lexicon.filter_words("Hola, el perro ladra 3 veces jajaja");
//! assert_eq!(words, vec!["perro", "ladra"]);
//! ```

use std::collections::HashSet;

use regex::Regex;

use crate::stopwords;

/// Pattern extracting word tokens from raw text.
const TOKEN_PATTERN: &str = r"[\p{L}\p{N}]+";

/// Tokens kept for frequency analysis: Latin letters only, including the
/// Spanish accented vowels and ñ/ü. Applied after lowercasing.
const WORD_PATTERN: &str = r"^[a-záéíóúüñ]+$";

/// Laughter transliterations: repeated ja/je/ji/jo/ha cores with optional
/// stray consonants around them. Anchored so ordinary words containing a
/// core ("trabajo", "mejor") survive.
const LAUGHTER_PATTERN: &str = r"^[ahjkx]*(?:ja|je|ji|jo|js|ha|ka|xa)+[hjksx]*$";

/// The tokenizer and stop-word filter used to build word frequency tables.
///
/// Immutable after construction. Build one with [`Lexicon::spanish`] for the
/// full embedded stop-word set, or [`Lexicon::with_stop_words`] to inject a
/// custom set in tests.
#[derive(Debug)]
pub struct Lexicon {
    stop_words: HashSet<String>,
    token_re: Regex,
    word_re: Regex,
    laughter_re: Regex,
}

impl Lexicon {
    fn new(stop_words: HashSet<String>) -> Self {
        Self {
            stop_words,
            token_re: Regex::new(TOKEN_PATTERN).unwrap(),
            word_re: Regex::new(WORD_PATTERN).unwrap(),
            laughter_re: Regex::new(LAUGHTER_PATTERN).unwrap(),
        }
    }

    /// Creates a lexicon with the full embedded stop-word set:
    /// Spanish + English lists, alphabet letters, punctuation glyphs, and
    /// chat filler words.
    pub fn spanish() -> Self {
        Self::new(stopwords::full_set())
    }

    /// Creates a lexicon with an injected stop-word set.
    ///
    /// Stop words are matched against lowercased tokens, so the set should
    /// be lowercase.
    pub fn with_stop_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(words.into_iter().map(Into::into).collect())
    }

    /// Adds extra stop words on top of the current set.
    ///
    /// Entries are lowercased before insertion.
    #[must_use]
    pub fn with_extra_stop_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.stop_words
            .extend(words.into_iter().map(|w| w.as_ref().to_lowercase()));
        self
    }

    /// Returns the number of stop words in this lexicon.
    pub fn stop_word_count(&self) -> usize {
        self.stop_words.len()
    }

    /// Returns `true` if `token` is in the stop-word set.
    pub fn is_stop_word(&self, token: &str) -> bool {
        self.stop_words.contains(token)
    }

    /// Returns `true` if `token` is a laughter transliteration.
    pub fn is_laughter(&self, token: &str) -> bool {
        self.laughter_re.is_match(token)
    }

    /// Splits raw text into word tokens, without any filtering.
    pub fn tokenize<'a>(&'a self, text: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.token_re.find_iter(text).map(|m| m.as_str())
    }

    /// Tokenizes `text` and returns the lowercased tokens that survive the
    /// filter pipeline: not a stop word, not laughter, and composed entirely
    /// of Latin letters (numeric and punctuation tokens are dropped).
    pub fn filter_words(&self, text: &str) -> Vec<String> {
        let mut words = Vec::new();
        for token in self.tokenize(text) {
            let token = token.to_lowercase();
            if self.stop_words.contains(&token) || self.laughter_re.is_match(&token) {
                continue;
            }
            if self.word_re.is_match(&token) {
                words.push(token);
            }
        }
        words
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::spanish()
    }
}
