//! Simulation event types.
//!
//! Structured events emitted once per scene step. Events are small value
//! types carrying just the counters useful for monitoring.

use serde::{Deserialize, Serialize};

/// A simulation event emitted by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationEvent {
    /// Step index the event belongs to.
    pub step: u64,
    /// Event payload.
    pub kind: EventKind,
}

/// Event payload variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EventKind {
    /// Step started.
    StepBegin {
        /// Simulated time at the start of the step (seconds).
        sim_time: f64,
    },

    /// Step completed.
    StepEnd {
        /// Wall-clock time for the whole step (seconds).
        wall_time: f64,
    },

    /// Sweep & Prune finished.
    BroadPhase {
        /// Pairs overlapping on all three axes.
        candidate_pairs: u32,
        /// Adjacent swaps performed by the re-sorts.
        sort_swaps: u32,
    },

    /// Narrow phase finished.
    NarrowPhase {
        /// Candidate pairs tested.
        tests: u32,
        /// Pairs confirmed as colliding.
        confirmed_pairs: u32,
    },

    /// Collision flags updated.
    Collisions {
        /// Objects with their flag set.
        colliding_objects: u32,
    },

    /// Custom event for extensibility.
    Custom {
        /// Arbitrary label.
        label: String,
        /// JSON-encoded payload.
        payload: String,
    },
}

impl SimulationEvent {
    /// Creates a new event for the given step.
    pub fn new(step: u64, kind: EventKind) -> Self {
        Self { step, kind }
    }

    /// Short name of the payload variant.
    pub fn label(&self) -> &str {
        match &self.kind {
            EventKind::StepBegin { .. } => "step_begin",
            EventKind::StepEnd { .. } => "step_end",
            EventKind::BroadPhase { .. } => "broad_phase",
            EventKind::NarrowPhase { .. } => "narrow_phase",
            EventKind::Collisions { .. } => "collisions",
            EventKind::Custom { label, .. } => label,
        }
    }
}
