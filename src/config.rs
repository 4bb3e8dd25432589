//! Report configuration types.
//!
//! # Example
//!
//! ```rust
//! use charla::config::ReportParams;
//!
//! let params = ReportParams::new()
//!     .with_top_words(50)
//!     .with_top_emojis(20);
//!
//! assert_eq!(params.top_words, 50);
//! ```

use serde::{Deserialize, Serialize};

/// Display parameters for report building.
///
/// Controls how many entries the word and emoji tables show per author.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ReportParams {
    /// Number of words to show per author (default: 30)
    pub top_words: usize,

    /// Number of emojis to show per author (default: 15)
    pub top_emojis: usize,
}

impl Default for ReportParams {
    fn default() -> Self {
        Self {
            top_words: 30,
            top_emojis: 15,
        }
    }
}

impl ReportParams {
    /// Creates parameters with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the word table length. Zero falls back to 20.
    #[must_use]
    pub fn with_top_words(mut self, n: usize) -> Self {
        self.top_words = if n == 0 { 20 } else { n };
        self
    }

    /// Sets the emoji table length. Zero falls back to 10.
    #[must_use]
    pub fn with_top_emojis(mut self, n: usize) -> Self {
        self.top_emojis = if n == 0 { 10 } else { n };
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = ReportParams::default();
        assert_eq!(params.top_words, 30);
        assert_eq!(params.top_emojis, 15);
    }

    #[test]
    fn test_builder() {
        let params = ReportParams::new().with_top_words(5).with_top_emojis(3);
        assert_eq!(params.top_words, 5);
        assert_eq!(params.top_emojis, 3);
    }

    #[test]
    fn test_zero_falls_back() {
        let params = ReportParams::new().with_top_words(0).with_top_emojis(0);
        assert_eq!(params.top_words, 20);
        assert_eq!(params.top_emojis, 10);
    }
}
