//! TOPSIS multi-criteria ranking.
//!
//! Ranks items by their relative closeness to an ideal best point and
//! distance from an ideal worst point. Each criterion contributes one
//! axis: raw values are vector-normalized, scaled by the criterion's
//! share of the total weight, and compared in Euclidean space.
//!
//! # Core Types
//!
//! - [`Criteria`]: Ordered criteria specification, built by chaining
//! - [`Criterion`]: Value extractor, weight and [`Direction`]
//! - [`CriterionValue`]: Conversion of typed fields (integers, floats,
//!   ordinal enums) into `f64`
//! - [`TopsisEngine`]: Runs a ranking under a [`TopsisConfig`]
//! - [`TopsisResult`]: One scored item; a [`Ranking`] is a `Vec` of these
//!
//! # Checked vs Unchecked
//!
//! [`compute`] never fails. Zero total weight, all-zero criteria and
//! single-item inputs yield non-finite scores. [`try_compute`] rejects
//! those inputs with a [`TopsisError`] instead.
//!
//! # References
//!
//! - Hwang & Yoon (1981), *Multiple Attribute Decision Making: Methods
//!   and Applications*
//! - Behzadian et al. (2012), "A state-of-the-art survey of TOPSIS
//!   applications"

mod config;
mod criteria;
mod engine;
mod error;
mod types;

pub use config::{TieBreaker, TopsisConfig};
pub use criteria::Criteria;
pub use engine::{compute, ideal_points, try_compute, TopsisEngine};
pub use error::{Result, TopsisError};
pub use types::{Criterion, CriterionValue, Direction, IdealPoint, Ranking, TopsisResult};
