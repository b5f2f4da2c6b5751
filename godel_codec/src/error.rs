use thiserror::Error;

use crate::tm_config::Symbol;

/// Precondition violations reported by the codec.
///
/// Every variant carries the offending input so the caller can display it
/// verbatim. Nothing here is transient: the same input always fails the
/// same way.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // Negative tape symbol
    #[error("tape symbol {symbol} at cell {index} is negative")]
    NegativeSymbol { index: usize, symbol: Symbol },

    // Symbol outside the configured alphabet
    #[error("tape symbol {symbol} at cell {index} is outside the alphabet [0, {alphabet_size})")]
    SymbolOutOfAlphabet {
        index: usize,
        symbol: Symbol,
        alphabet_size: u64,
    },

    // Head beyond one-past-end of the tape
    #[error("head position {head} is past the end of a tape of length {tape_len}")]
    HeadOutOfRange { head: usize, tape_len: usize },

    // Exponent does not fit the bignum power routine
    #[error("exponent for {field} does not fit in 32 bits")]
    ExponentOverflow { field: &'static str },

    #[error("encoded value must be at least 1")]
    NonPositiveValue,

    #[error("encoded value is not a decimal natural number: \"{0}\"")]
    Unparseable(String),

    // Zero exponent followed by a nonzero one
    #[error("malformed encoding: tape cell {index} has a zero exponent but later factors remain")]
    NonContiguousTape { index: usize },

    #[error("alphabet size must be at least 1")]
    InvalidAlphabet,
}

/// Result type for codec operations.
pub type Result<T, E = DomainError> = std::result::Result<T, E>;
