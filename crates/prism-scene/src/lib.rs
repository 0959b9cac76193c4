//! # prism-scene
//!
//! Moving bodies and the per-step collision loop.
//!
//! ## Key Types
//!
//! - [`Scene`] — Owns all bodies and the collision pipeline; `step` / `advance`
//! - [`Body`] — One object: shared shape, kinematics, collider, collision flag
//! - [`Kinematics`] — Pluggable motion trait (`StaticPose`, `EllipticalOrbit`)
//! - [`SceneConfig`] — Scene size, seed and collision mode
//! - [`StepClock`] — Wall-clock throttle deciding when a step runs

pub mod body;
pub mod clock;
pub mod config;
pub mod kinematics;
pub mod scene;

pub use body::Body;
pub use clock::StepClock;
pub use config::SceneConfig;
pub use kinematics::{EllipticalOrbit, Kinematics, StaticPose};
pub use scene::{Scene, StepReport};
