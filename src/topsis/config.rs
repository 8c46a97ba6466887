//! Engine configuration.
//!
//! [`TopsisConfig`] controls how a ranking is ordered and executed. It
//! never changes the scores themselves.

/// Ordering policy for items with equal scores.
///
/// Scores are the only sort key. Equal scores are either kept in input
/// order or left in whatever order the sort produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TieBreaker {
    /// Stable sort: equal scores keep their input order.
    #[default]
    PreserveOrder,

    /// Unstable sort: relative order of equal scores is unspecified.
    Unspecified,
}

/// Configuration for [`TopsisEngine`](super::TopsisEngine).
///
/// # Defaults
///
/// ```
/// use u_topsis::topsis::{TieBreaker, TopsisConfig};
///
/// let config = TopsisConfig::default();
/// assert_eq!(config.tie_breaker, TieBreaker::PreserveOrder);
/// assert!(!config.parallel);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_topsis::topsis::{TieBreaker, TopsisConfig};
///
/// let config = TopsisConfig::default()
///     .with_tie_breaker(TieBreaker::Unspecified)
///     .with_parallel(true)
///     .with_parallel_threshold(10_000);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TopsisConfig {
    /// How ties in score are ordered.
    pub tie_breaker: TieBreaker,

    /// Whether to score items in parallel using rayon.
    ///
    /// Only effective when the crate is built with the `parallel`
    /// feature; otherwise scoring is always sequential.
    pub parallel: bool,

    /// Minimum number of items before the parallel path is taken.
    ///
    /// Below this size the rayon overhead outweighs the work.
    pub parallel_threshold: usize,
}

impl Default for TopsisConfig {
    fn default() -> Self {
        Self {
            tie_breaker: TieBreaker::PreserveOrder,
            parallel: false,
            parallel_threshold: 4096,
        }
    }
}

impl TopsisConfig {
    /// Sets the tie-breaking policy.
    pub fn with_tie_breaker(mut self, tb: TieBreaker) -> Self {
        self.tie_breaker = tb;
        self
    }

    /// Enables or disables parallel scoring.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the item count above which parallel scoring kicks in.
    pub fn with_parallel_threshold(mut self, n: usize) -> Self {
        self.parallel_threshold = n;
        self
    }

    /// Preset for large item sets: unstable sort and parallel scoring
    /// from 4096 items up.
    pub fn throughput() -> Self {
        Self {
            tie_breaker: TieBreaker::Unspecified,
            parallel: true,
            ..Self::default()
        }
    }

    /// Returns `true` if a ranking over `item_count` items should take
    /// the parallel path.
    pub(crate) fn use_parallel(&self, item_count: usize) -> bool {
        cfg!(feature = "parallel") && self.parallel && item_count >= self.parallel_threshold
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.parallel_threshold == 0 {
            return Err("parallel_threshold must be at least 1".into());
        }
        Ok(())
    }
}
