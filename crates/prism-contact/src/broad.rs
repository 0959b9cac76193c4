//! Broad phase collision detection trait.
//!
//! Quickly identifies *candidate* object pairs whose world-space AABBs
//! overlap. The narrow phase then refines these candidates into
//! confirmed collisions.

use prism_math::Aabb;
use prism_types::ObjectId;
use serde::{Deserialize, Serialize};

/// Candidate pair from the broad phase.
///
/// Canonical form: `a` holds the larger object index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CandidatePair {
    /// Larger object index.
    pub a: ObjectId,
    /// Smaller object index.
    pub b: ObjectId,
}

impl CandidatePair {
    /// Creates a pair in canonical order regardless of argument order.
    pub fn new(i: u32, j: u32) -> Self {
        Self {
            a: ObjectId(i.max(j)),
            b: ObjectId(i.min(j)),
        }
    }
}

/// Trait for broad phase collision detection.
///
/// Implementations receive one AABB per object (indexed by object id)
/// and report every pair whose boxes overlap on all three axes.
///
/// # Implementations
/// - `SweepAndPrune` — Incremental per-axis sorted lists (default)
/// - `BruteForceBroadPhase` — O(n²) reference used for validation
pub trait BroadPhase: Send {
    /// Rebuild or update the acceleration structure from current boxes.
    fn update(&mut self, boxes: &[Aabb]);

    /// Append all candidate pairs to `out`, ordered by `a` then `b`.
    fn query_pairs(&self, out: &mut Vec<CandidatePair>);

    /// Element swaps performed by the most recent `update`.
    fn sort_swaps(&self) -> u32 {
        0
    }

    /// Returns the broad phase strategy name.
    fn name(&self) -> &str;
}

/// All-pairs broad phase.
#[derive(Debug, Clone, Default)]
pub struct BruteForceBroadPhase {
    boxes: Vec<Aabb>,
}

impl BruteForceBroadPhase {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BroadPhase for BruteForceBroadPhase {
    fn update(&mut self, boxes: &[Aabb]) {
        self.boxes.clear();
        self.boxes.extend_from_slice(boxes);
    }

    fn query_pairs(&self, out: &mut Vec<CandidatePair>) {
        for (a, box_a) in self.boxes.iter().enumerate() {
            for (b, box_b) in self.boxes[..a].iter().enumerate() {
                if box_a.overlaps(box_b) {
                    out.push(CandidatePair::new(a as u32, b as u32));
                }
            }
        }
    }

    fn name(&self) -> &str {
        "brute_force"
    }
}
