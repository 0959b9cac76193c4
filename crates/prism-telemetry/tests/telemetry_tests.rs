//! Integration tests for prism-telemetry.

use prism_telemetry::bus::EventBus;
use prism_telemetry::events::{EventKind, SimulationEvent};
use prism_telemetry::sinks::{EventSink, TracingSink, VecSink};

/// Records whether `finalize` ran.
struct FinalizeProbe {
    finalized: VecSink,
}

impl EventSink for FinalizeProbe {
    fn handle(&mut self, _event: &SimulationEvent) {}

    fn finalize(&mut self) {
        self.finalized
            .handle(&SimulationEvent::new(0, EventKind::Custom {
                label: "finalized".into(),
                payload: String::new(),
            }));
    }

    fn name(&self) -> &str {
        "finalize_probe"
    }
}

// ─── Bus Tests ────────────────────────────────────────────────

#[test]
fn emit_and_flush() {
    let mut bus = EventBus::new();
    let sink = VecSink::new();
    bus.add_sink(Box::new(sink.clone()));

    bus.emit(SimulationEvent::new(1, EventKind::StepBegin { sim_time: 0.0 }));
    bus.emit(SimulationEvent::new(1, EventKind::StepEnd { wall_time: 0.001 }));
    assert!(sink.is_empty(), "events wait for flush");

    assert_eq!(bus.flush(), 2);
    let events = sink.events();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].label(), "step_begin");
    assert_eq!(events[1].label(), "step_end");
}

#[test]
fn disabled_bus_drops_events() {
    let mut bus = EventBus::new();
    let sink = VecSink::new();
    bus.add_sink(Box::new(sink.clone()));
    bus.set_enabled(false);
    bus.emit(SimulationEvent::new(0, EventKind::StepBegin { sim_time: 0.0 }));
    assert_eq!(bus.flush(), 0);
    assert!(sink.is_empty());
}

#[test]
fn every_sink_sees_every_event() {
    let mut bus = EventBus::new();
    let a = VecSink::new();
    let b = VecSink::new();
    bus.add_sink(Box::new(a.clone()));
    bus.add_sink(Box::new(b.clone()));
    bus.add_sink(Box::new(TracingSink::default()));
    assert_eq!(bus.sink_count(), 3);
    assert_eq!(bus.sink_names(), vec!["vec_sink", "vec_sink", "tracing_sink"]);

    bus.emit(SimulationEvent::new(
        3,
        EventKind::Collisions {
            colliding_objects: 4,
        },
    ));
    bus.flush();
    assert_eq!(a.events(), b.events());
    assert_eq!(a.len(), 1);
}

#[test]
fn finalize_flushes_then_finalizes() {
    let mut bus = EventBus::new();
    let collected = VecSink::new();
    let probe = VecSink::new();
    bus.add_sink(Box::new(collected.clone()));
    bus.add_sink(Box::new(FinalizeProbe {
        finalized: probe.clone(),
    }));
    bus.emit(SimulationEvent::new(
        7,
        EventKind::BroadPhase {
            candidate_pairs: 2,
            sort_swaps: 5,
        },
    ));
    bus.finalize();
    assert_eq!(collected.len(), 1);
    assert_eq!(probe.events()[0].label(), "finalized");
}

// ─── Event Tests ──────────────────────────────────────────────

#[test]
fn event_serialization() {
    let event = SimulationEvent::new(
        5,
        EventKind::NarrowPhase {
            tests: 12,
            confirmed_pairs: 3,
        },
    );
    let json = serde_json::to_string(&event).unwrap();
    let recovered: SimulationEvent = serde_json::from_str(&json).unwrap();
    assert_eq!(recovered, event);
    assert!(json.contains("confirmed_pairs"));
}

#[test]
fn custom_event_label() {
    let event = SimulationEvent::new(
        0,
        EventKind::Custom {
            label: "snapshot_written".into(),
            payload: "{\"bytes\":128}".into(),
        },
    );
    assert_eq!(event.label(), "snapshot_written");
}
