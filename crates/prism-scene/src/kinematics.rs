//! Kinematics trait — the seam between motion and collision detection.
//!
//! A body asks its kinematics for a world placement after every
//! `advance`. Collision detection only ever sees the resulting affine
//! transform, so any motion model can be plugged in.

use std::f32::consts::TAU;

use prism_math::{Affine3A, Transform, Vec3};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Trait for object motion models.
///
/// # Implementations
///
/// - [`StaticPose`] — Fixed placement
/// - [`EllipticalOrbit`] — Spinning object on a tilted elliptical path
pub trait Kinematics: Send + Sync {
    /// Move the kinematic state forward by `elapsed` seconds.
    fn advance(&mut self, elapsed: f32);

    /// Compose this object's placement onto `accum`.
    ///
    /// Must be deterministic given the current state.
    fn apply_transform(&self, accum: Affine3A) -> Affine3A;

    /// Placement relative to the world origin.
    fn world_transform(&self) -> Affine3A {
        self.apply_transform(Affine3A::IDENTITY)
    }

    /// Returns the motion model name.
    fn name(&self) -> &str;
}

/// A body that never moves.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct StaticPose(pub Transform);

impl Kinematics for StaticPose {
    fn advance(&mut self, _elapsed: f32) {}

    fn apply_transform(&self, accum: Affine3A) -> Affine3A {
        accum * self.0.to_affine()
    }

    fn name(&self) -> &str {
        "static"
    }
}

/// Motion along an ellipse in a tilted plane while spinning about the local axes.
///
/// Placement is
/// `Ry(deviation) · Rz(inclination) · T(cos θ · rx, 0, sin θ · rz) · Rx · Ry · Rz · S(size)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EllipticalOrbit {
    /// Spin angles about x, y, z (radians).
    pub spin: Vec3,
    /// Spin rates (radians per second).
    pub spin_velocity: Vec3,
    /// Position along the ellipse (radians).
    pub orbit_angle: f32,
    pub radius_x: f32,
    pub radius_z: f32,
    /// Orbit rate (radians per second).
    pub angular_velocity: f32,
    /// Yaw of the orbit plane.
    pub deviation: f32,
    /// Roll of the orbit plane.
    pub inclination: f32,
    /// Uniform scale applied to the normalised shape.
    pub size: f32,
}

impl EllipticalOrbit {
    /// Draws a trajectory inside a region of half-size `extent`.
    pub fn random<R: Rng>(rng: &mut R, extent: [f32; 3]) -> Self {
        let [ex, _, ez] = extent;
        let size = rng.random::<f32>() * ex / 20.0 + ex / 30.0;
        let orbit_angle = rng.random::<f32>() * TAU;
        let radius_x = rng.random::<f32>() * ex;
        let radius_z = rng.random::<f32>() * ez;
        let angular_velocity = (rng.random::<f32>() - 0.5) * 10.0;
        let deviation = rng.random::<f32>() * TAU;
        let inclination = rng.random::<f32>() * TAU;
        let spin_velocity = Vec3::new(
            (rng.random::<f32>() - 0.5) * 2.0,
            (rng.random::<f32>() - 0.5) * 2.0,
            (rng.random::<f32>() - 0.5) * 2.0,
        );

        Self {
            spin: Vec3::ZERO,
            spin_velocity,
            orbit_angle,
            radius_x,
            radius_z,
            angular_velocity,
            deviation,
            inclination,
            size,
        }
    }

    /// Position on the ellipse before the orbit plane is tilted.
    pub fn orbit_position(&self) -> Vec3 {
        Vec3::new(
            self.orbit_angle.cos() * self.radius_x,
            0.0,
            self.orbit_angle.sin() * self.radius_z,
        )
    }
}

impl Kinematics for EllipticalOrbit {
    fn advance(&mut self, elapsed: f32) {
        self.spin += self.spin_velocity * elapsed;
        self.orbit_angle += self.angular_velocity * elapsed;
    }

    fn apply_transform(&self, accum: Affine3A) -> Affine3A {
        accum
            * Affine3A::from_rotation_y(self.deviation)
            * Affine3A::from_rotation_z(self.inclination)
            * Affine3A::from_translation(self.orbit_position())
            * Affine3A::from_rotation_x(self.spin.x)
            * Affine3A::from_rotation_y(self.spin.y)
            * Affine3A::from_rotation_z(self.spin.z)
            * Affine3A::from_scale(Vec3::splat(self.size))
    }

    fn name(&self) -> &str {
        "elliptical_orbit"
    }
}
