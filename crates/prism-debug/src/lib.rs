//! # prism-debug
//!
//! Inspection hooks and scene snapshots for debugging collision issues.
//! Snapshots serialize per-object boxes and flags to binary for offline
//! inspection; hooks turn step reports into telemetry events.

pub mod hooks;
pub mod snapshot;

pub use hooks::{InspectionHook, TelemetryHook};
pub use snapshot::SceneSnapshot;
