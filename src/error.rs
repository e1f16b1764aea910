//! Error types for the codec.
//!
//! All operations return structured errors rather than panicking; nothing is
//! retried or locally recovered — every failure here is a structural mismatch
//! between inputs, not a transient condition.

use thiserror::Error;

/// Top-level error type for all codec operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Zero input symbols: there is no meaningful tree or code table to build.
    #[error("empty input: no symbols to build a tree from")]
    EmptyInput,

    /// An input symbol has no entry in the supplied code table. Only
    /// reachable when the table and the text originate from different runs.
    #[error("symbol {symbol:?} has no entry in the code table")]
    MissingCode { symbol: char },

    /// The bit stream does not cleanly partition into valid codes for the
    /// supplied tree.
    #[error("malformed bit stream: {0}")]
    MalformedStream(#[from] StreamError),
}

/// Detail for decode failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StreamError {
    /// The stream contains a character other than '0' or '1'.
    #[error("character {bit:?} at position {position} is not a bit")]
    InvalidBit { position: usize, bit: char },

    /// A bit arrived while the current tree position has no child to follow.
    #[error("bit at position {position} has no matching branch in the tree")]
    NoBranch { position: usize },

    /// The stream ended in the middle of a code.
    #[error("stream exhausted mid-code with {pending} undecoded bits")]
    DanglingCode { pending: usize },
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;
