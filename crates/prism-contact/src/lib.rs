//! # prism-contact
//!
//! Collision detection between many moving triangle-mesh objects.
//!
//! The collision pipeline is split into two phases:
//! 1. **Broad phase** — Sweep & Prune over per-object AABBs on all three
//!    axes, exploiting temporal coherence through in-place adjacent-swap sorts
//! 2. **Narrow phase** — Either the AABB overlap itself, or a descent of
//!    both objects' BVHs down to an exact triangle-triangle test
//!
//! Each phase is a pluggable trait so the reference brute-force broad
//! phase and the two narrow phases can be swapped at runtime.

pub mod broad;
pub mod bvh;
pub mod collider;
pub mod collision_pipeline;
pub mod contact;
pub mod narrow;
pub mod overlap;
pub mod sweep_prune;
pub mod triangle;

pub use broad::{BroadPhase, BruteForceBroadPhase, CandidatePair};
pub use bvh::{Bvh, BvhNode};
pub use collider::Collider;
pub use collision_pipeline::{CollisionPipeline, CollisionStepResult};
pub use contact::{CollisionMode, CollisionPair};
pub use narrow::{AabbNarrowPhase, BvhNarrowPhase, NarrowPhase};
pub use overlap::OverlapMatrix;
pub use sweep_prune::{SortStats, SweepAndPrune};
pub use triangle::triangles_intersect;
