//! Emoji extraction from message text.
//!
//! Works on grapheme clusters so multi-codepoint emoji (skin tones, ZWJ
//! sequences, flags, keycaps) count as single symbols. A cluster counts as
//! emoji when every scalar carries the `Emoji` or `Emoji_Component` Unicode
//! property; pure-ASCII clusters are excluded because digits, `#` and `*`
//! carry the `Emoji` property without being emoji on their own.

use std::sync::OnceLock;

use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

const EMOJI_PATTERN: &str = r"^[\p{Emoji}\p{Emoji_Component}]+$";

fn emoji_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(EMOJI_PATTERN).unwrap())
}

/// Returns `true` if the grapheme cluster is an emoji.
pub fn is_emoji(grapheme: &str) -> bool {
    !grapheme.is_ascii() && emoji_re().is_match(grapheme)
}

/// Returns every emoji occurrence in `text`, in order of appearance.
///
/// Repeated emoji appear once per occurrence; callers that want counts fold
/// the result into a frequency table.
///
/// # Example
///
/// ```
/// use charla::emoji::emojis_in;
///
/// assert_eq!(emojis_in("jaja 😂😂 vale 👍"), vec!["😂", "😂", "👍"]);
/// ```
pub fn emojis_in(text: &str) -> Vec<&str> {
    text.graphemes(true).filter(|g| is_emoji(g)).collect()
}
