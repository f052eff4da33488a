//! # Shipped content
//!
//! Compiled-in records and the relationship matrix. A malformed entry here is
//! caught by the catalog and index checks, which the test-suite runs on every
//! build.
mod matrix;
mod patterns;
mod principles;

pub use matrix::{matrix, COLUMNS};
pub use patterns::patterns;
pub use principles::principles;
