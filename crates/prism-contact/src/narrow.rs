//! Narrow phase collision detection trait.
//!
//! Decides whether a broad phase candidate pair actually collides.

use crate::collider::Collider;

/// Trait for narrow phase collision detection.
///
/// # Implementations
/// - `AabbNarrowPhase` — Accepts every box-overlapping pair
/// - `BvhNarrowPhase` — Confirms with a BVH descent and exact triangle tests
pub trait NarrowPhase: Send {
    /// Returns true if the two objects collide.
    fn collide(&self, a: &Collider, b: &Collider) -> bool;

    /// Returns the narrow phase strategy name.
    fn name(&self) -> &str;
}

/// Treats AABB overlap as a collision.
#[derive(Debug, Clone, Copy, Default)]
pub struct AabbNarrowPhase;

impl NarrowPhase for AabbNarrowPhase {
    fn collide(&self, a: &Collider, b: &Collider) -> bool {
        a.aabb().overlaps(b.aabb())
    }

    fn name(&self) -> &str {
        "aabb"
    }
}

/// Exact triangle-level confirmation through both objects' BVHs.
#[derive(Debug, Clone, Copy, Default)]
pub struct BvhNarrowPhase;

impl NarrowPhase for BvhNarrowPhase {
    fn collide(&self, a: &Collider, b: &Collider) -> bool {
        a.aabb().overlaps(b.aabb()) && a.bvh().intersects(b.bvh())
    }

    fn name(&self) -> &str {
        "bvh"
    }
}
