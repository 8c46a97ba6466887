//! Errors reported by the checked ranking path.

use thiserror::Error;

/// Conditions rejected by [`try_compute`](super::try_compute).
///
/// The unchecked [`compute`](super::compute) never returns these; it lets
/// the same conditions surface as non-finite scores instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TopsisError {
    #[error("no criteria to rank by")]
    EmptyCriteria,

    #[error("no items to rank")]
    EmptyItems,

    #[error("criterion {criterion} has invalid weight {weight}: must be finite and positive")]
    InvalidWeight { criterion: usize, weight: f64 },

    #[error("criterion {criterion} produced non-finite value {value} for item {item}")]
    NonFiniteValue {
        criterion: usize,
        item: usize,
        value: f64,
    },

    #[error("criterion {criterion} has zero norm: every extracted value is zero")]
    ZeroNorm { criterion: usize },

    #[error("score for item {item} is undefined: it coincides with both ideal points")]
    UndefinedScore { item: usize },

    #[error("invalid engine configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, TopsisError>;
