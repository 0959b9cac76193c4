//! Numeric constants and scene defaults.

/// Below this magnitude a segment is considered parallel to a plane.
///
/// Applies to the dot product of a unit plane normal with the segment
/// direction, so coplanar triangles never produce crossing points.
pub const PARALLEL_EPSILON: f32 = 1.0e-7;

/// Minimum wall-clock time (seconds) accumulated before a step runs. 30 ms.
pub const DEFAULT_STEP_INTERVAL: f32 = 0.030;

/// Number of objects in a default scene.
pub const DEFAULT_OBJECT_COUNT: usize = 10;

/// Default half-size of the region objects orbit in.
pub const DEFAULT_EXTENT: [f32; 3] = [1.0, 1.0, 1.0];

/// Default RNG seed for scene generation.
pub const DEFAULT_SEED: u64 = 0x5eed;
