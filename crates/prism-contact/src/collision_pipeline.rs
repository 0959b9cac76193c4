//! Unified collision pipeline that orchestrates broad → narrow.
//!
//! The scene calls the pipeline once per simulation step, after every
//! object's collider has been moved to its new placement.

use prism_math::Aabb;
use tracing::debug;

use crate::broad::{BroadPhase, CandidatePair};
use crate::collider::Collider;
use crate::contact::{CollisionMode, CollisionPair};
use crate::narrow::NarrowPhase;
use crate::sweep_prune::SweepAndPrune;

/// Unified collision pipeline: broad → narrow.
///
/// Scratch buffers are reused across steps.
pub struct CollisionPipeline {
    /// Broad phase acceleration structure.
    pub broad: Box<dyn BroadPhase + Send + Sync>,
    /// Narrow phase confirmation.
    pub narrow: Box<dyn NarrowPhase + Send + Sync>,
    boxes: Vec<Aabb>,
    candidates: Vec<CandidatePair>,
    pairs: Vec<CollisionPair>,
    flags: Vec<bool>,
}

impl CollisionPipeline {
    /// Create a new collision pipeline.
    pub fn new(
        broad: Box<dyn BroadPhase + Send + Sync>,
        narrow: Box<dyn NarrowPhase + Send + Sync>,
    ) -> Self {
        Self {
            broad,
            narrow,
            boxes: Vec::new(),
            candidates: Vec::new(),
            pairs: Vec::new(),
            flags: Vec::new(),
        }
    }

    /// Sweep & Prune followed by the narrow phase for `mode`.
    pub fn for_mode(mode: CollisionMode) -> Self {
        Self::new(Box::new(SweepAndPrune::new()), mode.narrow_phase())
    }

    /// Run broad and narrow phase over `colliders`, indexed by object id.
    ///
    /// Every collision flag is recomputed from scratch: an object is
    /// flagged iff it belongs to at least one confirmed pair.
    pub fn step<C: AsRef<Collider>>(&mut self, colliders: &[C]) -> CollisionStepResult {
        // 1. Broad phase
        self.boxes.clear();
        self.boxes.extend(colliders.iter().map(|c| *c.as_ref().aabb()));
        self.broad.update(&self.boxes);
        self.candidates.clear();
        self.broad.query_pairs(&mut self.candidates);

        // 2. Narrow phase
        self.pairs.clear();
        self.flags.clear();
        self.flags.resize(colliders.len(), false);
        for pair in &self.candidates {
            let (ia, ib) = (pair.a.index(), pair.b.index());
            if self.narrow.collide(colliders[ia].as_ref(), colliders[ib].as_ref()) {
                self.pairs.push(CollisionPair {
                    a: pair.a,
                    b: pair.b,
                });
                self.flags[ia] = true;
                self.flags[ib] = true;
            }
        }

        let result = CollisionStepResult {
            candidate_pairs: self.candidates.len() as u32,
            narrow_tests: self.candidates.len() as u32,
            confirmed_pairs: self.pairs.len() as u32,
            colliding_objects: self.flags.iter().filter(|&&f| f).count() as u32,
            sort_swaps: self.broad.sort_swaps(),
        };
        debug!(
            broad = self.broad.name(),
            narrow = self.narrow.name(),
            candidates = result.candidate_pairs,
            confirmed = result.confirmed_pairs,
            swaps = result.sort_swaps,
            "Collision step"
        );
        result
    }

    /// Per-object collision flags from the last step.
    pub fn flags(&self) -> &[bool] {
        &self.flags
    }

    /// Confirmed pairs from the last step, ordered by `a` then `b`.
    pub fn pairs(&self) -> &[CollisionPair] {
        &self.pairs
    }

    /// Broad phase candidates from the last step.
    pub fn candidates(&self) -> &[CandidatePair] {
        &self.candidates
    }
}

/// Summary of one collision step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollisionStepResult {
    /// Pairs reported by the broad phase.
    pub candidate_pairs: u32,
    /// Narrow phase invocations.
    pub narrow_tests: u32,
    /// Pairs confirmed by the narrow phase.
    pub confirmed_pairs: u32,
    /// Objects with their collision flag set.
    pub colliding_objects: u32,
    /// Adjacent swaps performed by the broad phase sort.
    pub sort_swaps: u32,
}
