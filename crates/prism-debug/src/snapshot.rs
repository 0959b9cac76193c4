//! Scene snapshot serialization for offline inspection.
//!
//! A snapshot captures what the collision pipeline saw at the end of a
//! step: every object's world AABB, its collision flag, and the confirmed
//! pairs.

use std::path::Path;

use prism_contact::{CollisionMode, CollisionPair};
use prism_math::Aabb;
use prism_scene::Scene;
use prism_types::{PrismError, PrismResult};
use serde::{Deserialize, Serialize};

/// Per-object collision state at one step.
///
/// Serialized with `bincode` for compact binary output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneSnapshot {
    /// Step index when this snapshot was taken.
    pub step: u64,
    /// Simulated time in seconds.
    pub sim_time: f64,
    pub mode: CollisionMode,
    /// Per-object boxes as `[min_x, min_y, min_z, max_x, max_y, max_z]`.
    pub boxes: Vec<[f32; 6]>,
    /// Per-object collision flags.
    pub collisions: Vec<bool>,
    /// Confirmed pairs, larger id first.
    pub pairs: Vec<CollisionPair>,
}

impl SceneSnapshot {
    /// Captures the current state of `scene`.
    pub fn from_scene(scene: &Scene) -> Self {
        Self {
            step: scene.step_count(),
            sim_time: scene.sim_time(),
            mode: scene.mode(),
            boxes: scene.bodies().iter().map(|b| b.aabb().to_array()).collect(),
            collisions: scene.bodies().iter().map(|b| b.collision()).collect(),
            pairs: scene.colliding_pairs().to_vec(),
        }
    }

    /// Serializes to compact binary format.
    pub fn to_bytes(&self) -> PrismResult<Vec<u8>> {
        bincode::serialize(self).map_err(|e| PrismError::Serialization(e.to_string()))
    }

    /// Deserializes from binary format.
    pub fn from_bytes(data: &[u8]) -> PrismResult<Self> {
        let snapshot: Self = bincode::deserialize(data)
            .map_err(|e| PrismError::Serialization(format!("Snapshot decode failed: {e}")))?;
        if snapshot.boxes.len() != snapshot.collisions.len() {
            return Err(PrismError::Serialization(format!(
                "Snapshot has {} boxes but {} flags",
                snapshot.boxes.len(),
                snapshot.collisions.len()
            )));
        }
        Ok(snapshot)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> PrismResult<()> {
        std::fs::write(path, self.to_bytes()?)?;
        Ok(())
    }

    pub fn load(path: impl AsRef<Path>) -> PrismResult<Self> {
        Self::from_bytes(&std::fs::read(path)?)
    }

    pub fn object_count(&self) -> usize {
        self.boxes.len()
    }

    /// Objects with their collision flag set.
    pub fn colliding_count(&self) -> usize {
        self.collisions.iter().filter(|&&c| c).count()
    }

    /// Box of object `i`.
    pub fn aabb(&self, i: usize) -> Option<Aabb> {
        self.boxes.get(i).map(|&b| Aabb::from_array(b))
    }

    /// Union of all object boxes, or `None` for an empty snapshot.
    pub fn bounds(&self) -> Option<Aabb> {
        self.boxes
            .iter()
            .map(|&b| Aabb::from_array(b))
            .reduce(|acc, b| acc.union(&b))
    }
}
