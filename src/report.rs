//! Report building over a populated [`Chat`].
//!
//! Rendering is decoupled from parsing and aggregation: a [`ReportBuilder`]
//! consumes the registry plus display parameters and produces a rendered
//! artifact as a string. Two back-ends ship with the crate:
//!
//! - [`ConsoleReport`] — plain-text panels and tables for the terminal
//! - [`JsonReport`] — machine-readable output (`json-report` feature)
//!
//! Both are thin views over [`summarize`], which computes one
//! [`AuthorSummary`] per author and is the place where the empty-chat guard
//! lives.

use serde::Serialize;

use crate::chat::{AuthorStats, Chat};
use crate::config::ReportParams;
use crate::error::{CharlaError, Result};
use crate::lexicon::Lexicon;

/// One row of a rendered frequency table.
#[derive(Debug, Clone, Serialize)]
pub struct Entry {
    /// The word or emoji
    pub token: String,
    /// How many times it occurred
    pub count: usize,
}

/// Everything a report shows about one author.
#[derive(Debug, Clone, Serialize)]
pub struct AuthorSummary {
    pub name: String,
    pub messages: usize,
    pub active_days: usize,
    pub average_words_per_message: f64,
    pub unique_words: usize,
    pub total_words: usize,
    pub lexical_richness: f64,
    pub top_words: Vec<Entry>,
    pub top_emojis: Vec<Entry>,
}

/// Computes one summary per author, in first-appearance order.
///
/// Fails with [`CharlaError::EmptyChat`] when the registry has no messages,
/// which also guards the richness and average computations against division
/// by zero.
pub fn summarize(chat: &Chat, lexicon: &Lexicon, params: &ReportParams) -> Result<Vec<AuthorSummary>> {
    if chat.is_empty() {
        return Err(CharlaError::empty_chat());
    }
    chat.authors()
        .map(|author| summarize_author(author, lexicon, params))
        .collect()
}

fn summarize_author(
    author: &AuthorStats,
    lexicon: &Lexicon,
    params: &ReportParams,
) -> Result<AuthorSummary> {
    if author.message_count() == 0 {
        return Err(CharlaError::empty_author(author.name()));
    }
    let entries = |pairs: Vec<(&str, usize)>| {
        pairs
            .into_iter()
            .map(|(token, count)| Entry {
                token: token.to_string(),
                count,
            })
            .collect()
    };
    Ok(AuthorSummary {
        name: author.name().to_string(),
        messages: author.message_count(),
        active_days: author.active_days(),
        average_words_per_message: author.average_words_per_message(),
        unique_words: author.distinct_word_count(lexicon),
        total_words: author.total_word_count(lexicon),
        lexical_richness: author.lexical_richness(lexicon),
        top_words: entries(author.top_words(params.top_words, lexicon)),
        top_emojis: entries(author.top_emojis(params.top_emojis)),
    })
}

/// A report back-end: consumes populated aggregates plus display
/// parameters, produces a rendered artifact.
pub trait ReportBuilder {
    /// Renders the whole chat.
    fn build(&self, chat: &Chat, lexicon: &Lexicon, params: &ReportParams) -> Result<String>;
}

/// Plain-text report for the terminal.
#[derive(Debug, Default)]
pub struct ConsoleReport;

impl ConsoleReport {
    pub fn new() -> Self {
        Self
    }

    fn render_author(out: &mut String, summary: &AuthorSummary) {
        out.push_str(&format!("── {} ──\n", summary.name));
        out.push_str(&format!("   Messages:          {}\n", summary.messages));
        out.push_str(&format!("   Active days:       {}\n", summary.active_days));
        out.push_str(&format!(
            "   Avg words/message: {:.1}\n",
            summary.average_words_per_message
        ));
        out.push_str(&format!("   Unique words:      {}\n", summary.unique_words));
        out.push_str(&format!("   Total words:       {}\n", summary.total_words));
        out.push_str(&format!(
            "   Lexical richness:  {:.3}\n",
            summary.lexical_richness
        ));

        if !summary.top_words.is_empty() {
            out.push_str("\n   Most used words:\n");
            for entry in &summary.top_words {
                out.push_str(&format!("   {:>6}  {}\n", entry.count, entry.token));
            }
        }
        if !summary.top_emojis.is_empty() {
            out.push_str("\n   Most used emojis:\n");
            for entry in &summary.top_emojis {
                out.push_str(&format!("   {:>6}  {}\n", entry.count, entry.token));
            }
        }
    }
}

impl ReportBuilder for ConsoleReport {
    fn build(&self, chat: &Chat, lexicon: &Lexicon, params: &ReportParams) -> Result<String> {
        let summaries = summarize(chat, lexicon, params)?;

        let mut out = String::new();
        out.push_str("Chat summary\n");
        out.push_str("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n");
        for summary in &summaries {
            out.push_str(&format!(
                "{} sent {} messages over {} days\n",
                summary.name, summary.messages, summary.active_days
            ));
        }
        for summary in &summaries {
            out.push('\n');
            Self::render_author(&mut out, summary);
        }
        Ok(out)
    }
}

/// JSON report: one summary object per author.
#[cfg(feature = "json-report")]
#[derive(Debug, Default)]
pub struct JsonReport;

#[cfg(feature = "json-report")]
impl JsonReport {
    pub fn new() -> Self {
        Self
    }
}

#[cfg(feature = "json-report")]
impl ReportBuilder for JsonReport {
    fn build(&self, chat: &Chat, lexicon: &Lexicon, params: &ReportParams) -> Result<String> {
        let summaries = summarize(chat, lexicon, params)?;
        Ok(serde_json::to_string_pretty(&summaries)?)
    }
}
