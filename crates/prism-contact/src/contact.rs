//! Confirmed collision data types.

use std::fmt;
use std::str::FromStr;

use prism_types::{ObjectId, PrismError};
use serde::{Deserialize, Serialize};

use crate::narrow::{AabbNarrowPhase, BvhNarrowPhase, NarrowPhase};

/// Two objects confirmed to collide this step.
///
/// Same canonical order as candidate pairs: `a` holds the larger index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CollisionPair {
    pub a: ObjectId,
    pub b: ObjectId,
}

/// How candidate pairs are confirmed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollisionMode {
    /// AABB overlap alone marks both objects as colliding.
    Aabb,
    /// BVH descent down to exact triangle tests.
    #[default]
    Bvh,
}

impl CollisionMode {
    pub fn name(&self) -> &'static str {
        match self {
            CollisionMode::Aabb => "aabb",
            CollisionMode::Bvh => "bvh",
        }
    }

    /// Narrow phase implementing this mode.
    pub fn narrow_phase(&self) -> Box<dyn NarrowPhase + Send + Sync> {
        match self {
            CollisionMode::Aabb => Box::new(AabbNarrowPhase),
            CollisionMode::Bvh => Box::new(BvhNarrowPhase),
        }
    }
}

impl fmt::Display for CollisionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CollisionMode {
    type Err = PrismError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "aabb" => Ok(CollisionMode::Aabb),
            "bvh" => Ok(CollisionMode::Bvh),
            other => Err(PrismError::InvalidConfig(format!(
                "Unknown collision mode '{other}' (expected 'aabb' or 'bvh')"
            ))),
        }
    }
}
