//! Unified error types for charla.
//!
//! This module provides a single [`CharlaError`] enum that covers all error
//! cases in the library.
//!
//! # Error Handling Philosophy
//!
//! - **Library users** get typed errors they can match on
//! - **Application users** get clear, actionable error messages
//! - Malformed transcript lines are never errors: the parser treats them as
//!   continuations or discards them, and only file access is fatal

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for charla operations.
///
/// # Example
///
/// ```rust
/// use charla::error::Result;
/// use charla::Chat;
///
/// fn my_function() -> Result<Chat> {
///     Ok(Chat::new())
/// }
/// ```
pub type Result<T> = std::result::Result<T, CharlaError>;

/// The error type for all charla operations.
///
/// Each variant carries context about what went wrong and, where applicable,
/// the underlying source error.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CharlaError {
    /// An I/O error occurred.
    ///
    /// This typically happens when the transcript file cannot be opened
    /// or read (permission denied, disk failure).
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The transcript path does not point to an existing file.
    ///
    /// Raised before parsing begins; parsing itself never fails on content.
    #[error("file not found: {}", .path.display())]
    FileNotFound {
        /// The path that was checked
        path: PathBuf,
    },

    /// A report was requested over a chat with no messages.
    ///
    /// Guards the lexical-richness and average-words computations against
    /// division by zero. When `author` is set, only that author's corpus
    /// was empty.
    #[error("empty chat: {}", .author.as_deref().map_or_else(|| "no messages were recognized".to_string(), |a| format!("author '{a}' has no messages")))]
    EmptyChat {
        /// The author whose corpus was empty, if the error is author-scoped
        author: Option<String>,
    },

    /// JSON serialization error while rendering a report.
    #[cfg(feature = "json-report")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl CharlaError {
    /// Creates a file-not-found error.
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        CharlaError::FileNotFound { path: path.into() }
    }

    /// Creates an empty-chat error for the whole registry.
    pub fn empty_chat() -> Self {
        CharlaError::EmptyChat { author: None }
    }

    /// Creates an empty-chat error scoped to one author.
    pub fn empty_author(name: impl Into<String>) -> Self {
        CharlaError::EmptyChat {
            author: Some(name.into()),
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, CharlaError::Io(_))
    }

    /// Returns `true` if this is a file-not-found error.
    pub fn is_file_not_found(&self) -> bool {
        matches!(self, CharlaError::FileNotFound { .. })
    }

    /// Returns `true` if this is an empty-chat error.
    pub fn is_empty_chat(&self) -> bool {
        matches!(self, CharlaError::EmptyChat { .. })
    }
}

// ============================================================================
// Tests
// ============================================================================
