//! # prism-types
//!
//! Shared types, identifiers, error types and numeric constants
//! for the prism collision detection engine.
//!
//! This crate has zero domain logic — it defines the vocabulary
//! that all other prism crates share.

pub mod constants;
pub mod error;
pub mod ids;

pub use error::{PrismError, PrismResult};
pub use ids::{ObjectId, TriangleId};
