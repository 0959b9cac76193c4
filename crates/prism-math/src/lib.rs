//! # prism-math
//!
//! Geometric primitives for the prism collision engine.
//!
//! Provides:
//! - Re-exports of `glam` types (`Vec3`, `Quat`, `Affine3A`, etc.)
//! - [`Aabb`] — axis-aligned bounding boxes with inclusive overlap tests
//! - [`Axis`] — the three sweep axes
//! - [`Transform`] — rotation + translation + uniform scale

pub mod aabb;
pub mod axis;
pub mod transform;

pub use aabb::Aabb;
pub use axis::Axis;
pub use transform::Transform;

// Re-export glam types as the canonical math types for prism.
pub use glam::{Affine3A, EulerRot, Mat3, Mat4, Quat, Vec3};
