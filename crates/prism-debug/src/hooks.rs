//! Inspection hooks for live debugging.
//!
//! Hooks are called by the driving loop after every scene step and at
//! the end of the run.

use prism_scene::StepReport;
use prism_telemetry::events::{EventKind, SimulationEvent};

/// Trait for simulation inspection hooks.
///
/// # Lifecycle
///
/// ```text
/// for each step:
///   hook.on_step(&report)
/// hook.on_simulation_end()
/// ```
pub trait InspectionHook: Send {
    /// Called after each completed step.
    fn on_step(&mut self, report: &StepReport);

    /// Called when the simulation completes.
    fn on_simulation_end(&mut self) {}

    /// Returns the hook's name for logging.
    fn name(&self) -> &str;
}

/// Hook that bridges to the telemetry event bus.
///
/// Translates each step report into the per-phase event sequence
/// `StepBegin, BroadPhase, NarrowPhase, Collisions, StepEnd`.
#[derive(Debug, Default)]
pub struct TelemetryHook {
    events: Vec<SimulationEvent>,
}

impl TelemetryHook {
    /// Creates a new telemetry hook.
    pub fn new() -> Self {
        Self::default()
    }

    /// Drains collected events for dispatch.
    pub fn drain_events(&mut self) -> Vec<SimulationEvent> {
        std::mem::take(&mut self.events)
    }
}

impl InspectionHook for TelemetryHook {
    fn on_step(&mut self, report: &StepReport) {
        let step = report.step;
        let kinds = [
            EventKind::StepBegin {
                sim_time: report.sim_time - f64::from(report.elapsed),
            },
            EventKind::BroadPhase {
                candidate_pairs: report.candidate_pairs,
                sort_swaps: report.sort_swaps,
            },
            EventKind::NarrowPhase {
                tests: report.narrow_tests,
                confirmed_pairs: report.confirmed_pairs,
            },
            EventKind::Collisions {
                colliding_objects: report.colliding_objects,
            },
            EventKind::StepEnd {
                wall_time: report.wall_time,
            },
        ];
        self.events
            .extend(kinds.into_iter().map(|kind| SimulationEvent::new(step, kind)));
    }

    fn name(&self) -> &str {
        "telemetry_hook"
    }
}
