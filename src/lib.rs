//! Domain-agnostic multi-criteria decision ranking.
//!
//! Provides a generic implementation of TOPSIS (Technique for Order
//! Preference by Similarity to Ideal Solution):
//!
//! - **Criteria**: Ordered list of value extractors over any item type,
//!   each with a relative weight and a preferred direction.
//! - **Engine**: Vector normalization, ideal-point derivation and
//!   closeness scoring, returning items sorted best first.
//! - **Report**: Plain-text aligned tables for printing rankings.
//!
//! # Example
//!
//! ```
//! use u_topsis::topsis::{compute, Criteria, Direction};
//!
//! struct Supplier {
//!     cost: f64,
//!     lead_days: u32,
//!     quality: u8,
//! }
//!
//! let suppliers = vec![
//!     Supplier { cost: 120.0, lead_days: 5, quality: 7 },
//!     Supplier { cost: 95.0, lead_days: 9, quality: 6 },
//!     Supplier { cost: 150.0, lead_days: 2, quality: 9 },
//! ];
//!
//! let criteria = Criteria::new()
//!     .with_criterion(|s: &Supplier| s.cost, 0.5, Direction::Negative)
//!     .with_criterion(|s: &Supplier| s.lead_days, 0.2, Direction::Negative)
//!     .with_criterion(|s: &Supplier| s.quality, 0.3, Direction::Positive);
//!
//! let ranking = compute(&criteria, &suppliers);
//! assert_eq!(ranking.len(), 3);
//! assert!(ranking[0].score >= ranking[1].score);
//! ```
//!
//! # Architecture
//!
//! Like the other U-Engine algorithm crates, this crate holds no domain
//! concepts. Items are opaque; everything the engine knows about them
//! comes through the caller's extractors.

pub mod report;
pub mod topsis;
