//! Error types for marker expansion and argument binding.
//!
//! All variants carry structured data; `Display` renders the message the
//! console logs. Every error here is recoverable — a failed line produces
//! no result and no further side effects.

use std::fmt;

/// Argument binding failure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BindError {
    /// Fewer tokens than the command's required parameter count.
    TooFewArguments {
        required: usize,
        optional: usize,
        found: usize,
    },
    /// A token failed conversion to its declared parameter type.
    ///
    /// `index` is the 0-based argument position; `token` is the offending
    /// text.
    Conversion { index: usize, token: String },
    /// A quoted string argument never closed its quote.
    UnterminatedQuote { index: usize },
}

impl fmt::Display for BindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BindError::TooFewArguments {
                required,
                optional,
                found,
            } => write!(
                f,
                "expected {required}[+{optional}] arguments, found {found}"
            ),
            BindError::Conversion { index, token } => {
                write!(f, "wrong argument #{index} <{token}>")
            }
            BindError::UnterminatedQuote { index } => {
                write!(f, "unterminated quote in argument #{index}")
            }
        }
    }
}

impl std::error::Error for BindError {}

/// Marker expansion failure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExpandError {
    /// A pop marker (`<`) was reached with an empty result stack.
    StackEmpty,
    /// The expanded line exceeded the line length cap.
    LineTooLong { limit: usize },
}

impl fmt::Display for ExpandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpandError::StackEmpty => {
                write!(f, "pop marker with empty result stack")
            }
            ExpandError::LineTooLong { limit } => {
                write!(f, "expanded line exceeds {limit} characters")
            }
        }
    }
}

impl std::error::Error for ExpandError {}
