//! Scene configuration.
//!
//! Parameters that control scene construction and stepping: object
//! count, the extent objects orbit within, RNG seed, collision mode.

use std::path::Path;

use prism_contact::CollisionMode;
use prism_types::constants::{
    DEFAULT_EXTENT, DEFAULT_OBJECT_COUNT, DEFAULT_SEED, DEFAULT_STEP_INTERVAL,
};
use prism_types::{PrismError, PrismResult};
use serde::{Deserialize, Serialize};

/// Configuration for a randomly populated scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Number of bodies.
    pub object_count: usize,

    /// Half-size of the region along x, y, z. Orbit radii and object
    /// sizes are drawn relative to it.
    pub extent: [f32; 3],

    /// RNG seed; equal seeds give identical scenes.
    pub seed: u64,

    /// How candidate pairs are confirmed.
    pub collision_mode: CollisionMode,

    /// Minimum accumulated wall time (seconds) before a step runs.
    pub step_interval: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            object_count: DEFAULT_OBJECT_COUNT,
            extent: DEFAULT_EXTENT,
            seed: DEFAULT_SEED,
            collision_mode: CollisionMode::default(),
            step_interval: DEFAULT_STEP_INTERVAL,
        }
    }
}

impl SceneConfig {
    /// Many objects in the default region, so pairs overlap often.
    pub fn dense() -> Self {
        Self {
            object_count: 60,
            ..Default::default()
        }
    }

    /// Few objects spread over a large region.
    pub fn sparse() -> Self {
        Self {
            object_count: 10,
            extent: [4.0, 4.0, 4.0],
            ..Default::default()
        }
    }

    /// Rejects values that cannot produce a scene.
    pub fn validate(&self) -> PrismResult<()> {
        if self.object_count == 0 {
            return Err(PrismError::InvalidConfig(
                "object_count must be at least 1".into(),
            ));
        }
        if let Some(e) = self.extent.iter().find(|e| !e.is_finite() || **e <= 0.0) {
            return Err(PrismError::InvalidConfig(format!(
                "extent components must be positive and finite, got {e}"
            )));
        }
        if !self.step_interval.is_finite() || self.step_interval < 0.0 {
            return Err(PrismError::InvalidConfig(format!(
                "step_interval must be non-negative and finite, got {}",
                self.step_interval
            )));
        }
        Ok(())
    }

    /// Parses a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(s: &str) -> PrismResult<Self> {
        toml::from_str(s).map_err(|e| PrismError::Serialization(e.to_string()))
    }

    /// Reads and parses a TOML file.
    pub fn load(path: impl AsRef<Path>) -> PrismResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn to_toml_string(&self) -> PrismResult<String> {
        toml::to_string(self).map_err(|e| PrismError::Serialization(e.to_string()))
    }
}
