//! Pairwise transition costs.
//!
//! Provides a dense distance matrix for routing instances and a sparse
//! colour-change setup table for paint-shop instances. Both are keyed by
//! integer indices or codes, never by coordinate values.

mod matrix;
mod setup;

pub use matrix::DistanceMatrix;
pub use setup::{SetupEntry, SetupTable};
