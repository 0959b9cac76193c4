//! Benchmark scenarios — scene configuration + step schedule per test case.
//!
//! Three canonical scenarios for regression testing:
//! 1. **Sparse** — 10 objects in a wide region, few overlaps
//! 2. **Dense** — 60 objects in the default region, frequent overlaps
//! 3. **Crowd** — 250 objects, stresses the axis re-sorts and the overlap scan

use prism_scene::SceneConfig;
use serde::{Deserialize, Serialize};

/// Which benchmark scenario to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioKind {
    Sparse,
    Dense,
    Crowd,
}

impl ScenarioKind {
    /// Returns all scenario kinds.
    pub fn all() -> &'static [ScenarioKind] {
        &[ScenarioKind::Sparse, ScenarioKind::Dense, ScenarioKind::Crowd]
    }

    /// Returns a human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            ScenarioKind::Sparse => "sparse",
            ScenarioKind::Dense => "dense",
            ScenarioKind::Crowd => "crowd",
        }
    }

    /// Parses a name produced by [`ScenarioKind::name`].
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|k| k.name() == name)
    }
}

/// A fully specified benchmark scenario.
#[derive(Debug, Clone)]
pub struct Scenario {
    /// Scenario type.
    pub kind: ScenarioKind,
    /// Scene to build.
    pub config: SceneConfig,
    /// Number of steps to simulate.
    pub timesteps: u32,
    /// Simulated seconds per step.
    pub dt: f32,
}

impl Scenario {
    /// 10 objects orbiting in a 4×4×4 half-extent region for 300 steps.
    pub fn sparse() -> Self {
        Self {
            kind: ScenarioKind::Sparse,
            config: SceneConfig::sparse(),
            timesteps: 300,
            dt: 0.03,
        }
    }

    /// 60 objects in the default region for 300 steps.
    pub fn dense() -> Self {
        Self {
            kind: ScenarioKind::Dense,
            config: SceneConfig::dense(),
            timesteps: 300,
            dt: 0.03,
        }
    }

    /// 250 objects in a 2×2×2 half-extent region for 100 steps.
    pub fn crowd() -> Self {
        Self {
            kind: ScenarioKind::Crowd,
            config: SceneConfig {
                object_count: 250,
                extent: [2.0, 2.0, 2.0],
                ..SceneConfig::default()
            },
            timesteps: 100,
            dt: 0.03,
        }
    }

    /// Create a scenario from its kind.
    pub fn from_kind(kind: ScenarioKind) -> Self {
        match kind {
            ScenarioKind::Sparse => Self::sparse(),
            ScenarioKind::Dense => Self::dense(),
            ScenarioKind::Crowd => Self::crowd(),
        }
    }
}
