//! Transcript parser: header recognition and the continuation state machine.
//!
//! WhatsApp TXT exports are line-oriented. A line either starts a new
//! logical message:
//!
//! ```text
//! 01/02/23, 10:00 - Alice: Hello world
//! ```
//!
//! or continues the previous one (any line that does not match the header
//! pattern). The parser makes one pass over the lines with no lookahead,
//! carrying a single pending message that is finalized when the next header
//! or end of input arrives.
//!
//! Malformed content never fails the parse: unrecognized lines become
//! continuations of the pending message, or are discarded when no message
//! is open yet. Only opening the file can fail.
//!
//! # Example
//!
//! ```
//! use charla::TranscriptParser;
//!
//! let parser = TranscriptParser::new();
//! let chat = parser.parse_str("01/02/23, 10:00 - Alice: Hola\ny adios\n");
//!
//! let alice = chat.get("Alice").unwrap();
//! assert_eq!(alice.all_messages().next().unwrap().text(), "Hola\ny adios");
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use chrono::NaiveDateTime;
use regex::Regex;

use crate::chat::Chat;
use crate::error::{CharlaError, Result};
use crate::message::Message;

/// Header line pattern: `<date> <time> - <author>: <text>`.
///
/// The date is `D{1,2}/D{1,2}/YY`, optionally followed by a comma (both
/// export variants occur in the wild); the time is 24-hour `H:MM`. The
/// author match is non-greedy, so the first colon after the dash splits
/// author from text — an author name that itself contains a colon splits
/// wrongly, a known limitation of the format. Whitespace before the colon
/// is tolerated.
const HEADER_PATTERN: &str = r"^(\d{1,2}/\d{1,2}/\d{2}),? (\d{1,2}:\d{2}) - (.+?)\s*:\s?(.*)$";

/// chrono format matching the header's date and time fields.
const TIMESTAMP_FORMAT: &str = "%d/%m/%y %H:%M";

/// Fields captured from a header line.
struct Header<'a> {
    timestamp: NaiveDateTime,
    author: &'a str,
    text: &'a str,
}

/// Parser for WhatsApp-style TXT transcripts.
///
/// # Example
///
/// ```rust,no_run
/// use charla::TranscriptParser;
///
/// let parser = TranscriptParser::new();
/// let chat = parser.parse("chat.txt".as_ref())?;
/// for author in chat.authors() {
///     println!("{}: {} messages", author.name(), author.message_count());
/// }
/// # Ok::<(), charla::CharlaError>(())
/// ```
#[derive(Debug)]
pub struct TranscriptParser {
    header_re: Regex,
}

impl TranscriptParser {
    /// Creates a new parser.
    pub fn new() -> Self {
        Self {
            header_re: Regex::new(HEADER_PATTERN).unwrap(),
        }
    }

    /// Parses a transcript file into a populated [`Chat`].
    ///
    /// Fails with [`CharlaError::FileNotFound`] when the path does not
    /// exist and [`CharlaError::Io`] when it cannot be read; malformed
    /// content is never an error. The file handle is scoped to this call.
    pub fn parse(&self, path: &Path) -> Result<Chat> {
        if !path.exists() {
            return Err(CharlaError::file_not_found(path));
        }
        let file = File::open(path)?;
        self.parse_reader(BufReader::new(file))
    }

    /// Parses transcript content already in memory.
    ///
    /// Total: any input yields a registry, possibly empty.
    pub fn parse_str(&self, content: &str) -> Chat {
        let mut chat = Chat::new();
        let mut pending = None;
        for line in content.lines() {
            self.process_line(line, &mut pending, &mut chat);
        }
        finalize(pending, &mut chat);
        chat
    }

    /// Parses transcript lines from any buffered reader.
    pub fn parse_reader<R: BufRead>(&self, reader: R) -> Result<Chat> {
        let mut chat = Chat::new();
        let mut pending = None;
        for line in reader.lines() {
            let line = line?;
            self.process_line(&line, &mut pending, &mut chat);
        }
        finalize(pending, &mut chat);
        Ok(chat)
    }

    /// One step of the state machine: header lines open a new message,
    /// everything else continues the pending one or is discarded.
    fn process_line(&self, line: &str, pending: &mut Option<Message>, chat: &mut Chat) {
        match self.match_header(line) {
            Some(header) => {
                finalize(pending.take(), chat);
                *pending = Some(Message::new(header.timestamp, header.author, header.text));
            }
            None => {
                // Continuation, or an orphan line before the first header.
                if let Some(message) = pending.as_mut() {
                    message.push_line(line);
                }
            }
        }
    }

    /// Matches the header pattern and validates the timestamp with chrono.
    ///
    /// A line that looks like a header but carries an impossible date
    /// (month 13, hour 25) is not a header.
    fn match_header<'a>(&self, line: &'a str) -> Option<Header<'a>> {
        let caps = self.header_re.captures(line)?;
        let date = caps.get(1).map_or("", |m| m.as_str());
        let time = caps.get(2).map_or("", |m| m.as_str());
        let timestamp =
            NaiveDateTime::parse_from_str(&format!("{date} {time}"), TIMESTAMP_FORMAT).ok()?;
        Some(Header {
            timestamp,
            author: caps.get(3).map_or("", |m| m.as_str()),
            text: caps.get(4).map_or("", |m| m.as_str()),
        })
    }
}

impl Default for TranscriptParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Registers the pending message, unless its text buffer is still empty.
fn finalize(pending: Option<Message>, chat: &mut Chat) {
    if let Some(message) = pending {
        if !message.text().is_empty() {
            chat.register(message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Timelike};

    fn parse(content: &str) -> Chat {
        TranscriptParser::new().parse_str(content)
    }

    #[test]
    fn test_single_header_line() {
        let chat = parse("01/02/23, 10:00 - Alice: Hello world\n");
        let alice = chat.get("Alice").unwrap();
        assert_eq!(alice.message_count(), 1);

        let msg = alice.all_messages().next().unwrap();
        assert_eq!(msg.text(), "Hello world");
        assert_eq!(msg.day(), NaiveDate::from_ymd_opt(2023, 2, 1).unwrap());
        assert_eq!(msg.timestamp().time().hour(), 10);
    }

    #[test]
    fn test_header_without_comma() {
        let chat = parse("01/02/23 10:00 - Alice: sin coma\n");
        assert_eq!(chat.get("Alice").unwrap().message_count(), 1);
    }

    #[test]
    fn test_single_digit_day_month_hour() {
        let chat = parse("1/2/23, 9:05 - Alice: temprano\n");
        let msg = chat.get("Alice").unwrap().all_messages().next().unwrap();
        assert_eq!(msg.day(), NaiveDate::from_ymd_opt(2023, 2, 1).unwrap());
        assert_eq!(msg.timestamp().time().hour(), 9);
    }

    #[test]
    fn test_continuation_lines_are_appended() {
        let chat = parse("01/02/23, 10:00 - Alice: primera\nsegunda\ntercera\n");
        let msg = chat.get("Alice").unwrap().all_messages().next().unwrap();
        assert_eq!(msg.text(), "primera\nsegunda\ntercera");
    }

    #[test]
    fn test_blank_continuation_is_preserved() {
        let chat = parse("01/02/23, 10:00 - Alice: arriba\n\nabajo\n");
        let msg = chat.get("Alice").unwrap().all_messages().next().unwrap();
        assert_eq!(msg.text(), "arriba\n\nabajo");
    }

    #[test]
    fn test_orphan_lines_are_discarded() {
        let chat = parse("ruido sin cabecera\notra línea\n");
        assert!(chat.is_empty());
    }

    #[test]
    fn test_leading_system_lines_then_messages() {
        let content = "Los mensajes están cifrados de extremo a extremo\n\
                       01/02/23, 10:00 - Alice: Hola\n";
        let chat = parse(content);
        assert_eq!(chat.author_count(), 1);
        assert_eq!(chat.get("Alice").unwrap().message_count(), 1);
    }

    #[test]
    fn test_author_whitespace_before_colon() {
        let chat = parse("01/02/23, 10:00 - Alice : espacio\n");
        let alice = chat.get("Alice").unwrap();
        assert_eq!(alice.name(), "Alice");
        assert_eq!(alice.all_messages().next().unwrap().text(), "espacio");
    }

    #[test]
    fn test_first_colon_splits_author() {
        // Author names with a colon split at the first colon. Known
        // limitation of the export format.
        let chat = parse("01/02/23, 10:00 - Dr: Who: hello\n");
        let author = chat.authors().next().unwrap();
        assert_eq!(author.name(), "Dr");
        assert_eq!(author.all_messages().next().unwrap().text(), "Who: hello");
    }

    #[test]
    fn test_message_text_may_contain_colons() {
        let chat = parse("01/02/23, 10:00 - Alice: hora: 10:30\n");
        let msg = chat.get("Alice").unwrap().all_messages().next().unwrap();
        assert_eq!(msg.text(), "hora: 10:30");
    }

    #[test]
    fn test_invalid_calendar_date_is_continuation() {
        let content = "01/02/23, 10:00 - Alice: hola\n\
                       99/99/23, 10:00 - Bob: fecha imposible\n";
        let chat = parse(content);
        assert_eq!(chat.author_count(), 1);
        let msg = chat.get("Alice").unwrap().all_messages().next().unwrap();
        assert!(msg.text().contains("fecha imposible"));
    }

    #[test]
    fn test_empty_header_text_without_continuation_is_dropped() {
        let content = "01/02/23, 10:00 - Alice:\n\
                       01/02/23, 10:01 - Bob: hola\n";
        let chat = parse(content);
        assert!(chat.get("Alice").is_none());
        assert_eq!(chat.get("Bob").unwrap().message_count(), 1);
    }

    #[test]
    fn test_last_message_finalized_at_eof() {
        let chat = parse("01/02/23, 10:00 - Alice: final\nsin salto");
        let msg = chat.get("Alice").unwrap().all_messages().next().unwrap();
        assert_eq!(msg.text(), "final\nsin salto");
    }

    #[test]
    fn test_empty_input_yields_empty_chat() {
        assert!(parse("").is_empty());
        assert!(parse("\n\n\n").is_empty());
    }

    #[test]
    fn test_messages_keep_transcript_order() {
        let content = "01/02/23, 10:00 - Alice: uno\n\
                       01/02/23, 10:01 - Alice: dos\n\
                       01/02/23, 10:02 - Alice: tres\n";
        let chat = parse(content);
        let texts: Vec<_> = chat
            .get("Alice")
            .unwrap()
            .all_messages()
            .map(Message::text)
            .collect();
        assert_eq!(texts, vec!["uno", "dos", "tres"]);
    }

    #[test]
    fn test_parse_missing_file_is_file_not_found() {
        let parser = TranscriptParser::new();
        let err = parser.parse(Path::new("/definitely/not/here.txt")).unwrap_err();
        assert!(err.is_file_not_found());
    }

    #[test]
    fn test_parse_reader_from_cursor() {
        use std::io::Cursor;
        let content = "01/02/23, 10:00 - Alice: Hola\n";
        let chat = TranscriptParser::new()
            .parse_reader(Cursor::new(content.as_bytes()))
            .unwrap();
        assert_eq!(chat.message_count(), 1);
    }
}
