//! Codec error types.
//!
//! Every decode failure is detected at the offending field and propagated
//! immediately; the codec never retries and never reports success over
//! truncated data.

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum WireError {
    /// The byte source ran dry before a fixed-width or declared-length field
    /// was fully read.
    #[error("truncated input: needed {needed} more bytes, source exhausted")]
    TruncatedInput { needed: usize },

    /// A length or count prefix is negative but not the `-1` null sentinel.
    #[error("malformed length prefix: {0}")]
    MalformedLength(i32),

    /// A decode step would consume more bytes than the enclosing frame's
    /// budget permits.
    #[error("decode budget exceeded: needed {needed} bytes, {remaining} remaining in frame")]
    BudgetExceeded { needed: usize, remaining: usize },

    /// The wire carries the null sentinel but the destination type cannot
    /// represent null. This is a schema-shape bug in the caller, not a wire
    /// error.
    #[error("type mismatch: wire carries {wire}, destination expects {expected}")]
    TypeMismatch {
        expected: &'static str,
        wire: &'static str,
    },

    /// A string field's payload is not valid UTF-8.
    #[error("invalid UTF-8 in string field: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    /// The underlying byte source failed for a reason other than EOF.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, WireError>;
