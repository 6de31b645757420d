//! Error Types
//!
//! Every fallible operation in the crate returns one of these. Construction
//! is pure, so none of them is transient: the same input fails the same way
//! on every call.

use thiserror::Error;

/// Errors raised while building permutation or incidence matrices
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaneError {
    /// The requested order is neither prime nor a tabulated prime power
    #[error("invalid order {order}: must be a prime number or one of: {}", join_orders(.supported))]
    InvalidOrder { order: i64, supported: Vec<usize> },

    /// A sequence handed to the permutation matrix builder is not a bijection on 1..=n
    #[error("invalid permutation: {0}")]
    InvalidPermutation(#[from] PermutationDefect),

    /// A valid order whose matrix would not fit in the allocation limit
    #[error("order {order} is too large: incidence matrix exceeds {limit} cells")]
    TooLarge { order: i64, limit: usize },

    /// Kernel data is missing a cell for an order it claims to support.
    /// Indicates corrupt tables, never bad user input.
    #[error("kernel table for order {order} has no permutation at ({row}, {col})")]
    MissingKernel { order: usize, row: usize, col: usize },
}

/// Why a sequence failed permutation validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PermutationDefect {
    #[error("permutation is empty")]
    Empty,
    #[error("value {value} is outside 1..={len}")]
    OutOfRange { value: i64, len: usize },
    #[error("value {value} appears more than once")]
    Duplicate { value: i64 },
}

/// Errors raised while laying out a deck
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeckError {
    #[error(transparent)]
    Plane(#[from] PlaneError),

    #[error("not enough symbols: deck needs {needed}, got {provided}")]
    NotEnoughSymbols { needed: usize, provided: usize },

    /// Each symbol identity may be bound to only one point
    #[error("symbol '{symbol}' appears more than once")]
    DuplicateSymbol { symbol: String },
}

/// Errors raised while reading or writing a deck configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("config is not valid TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("config could not be encoded: {0}")]
    Serialize(#[from] toml::ser::Error),
}

fn join_orders(orders: &[usize]) -> String {
    orders
        .iter()
        .map(|o| o.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
