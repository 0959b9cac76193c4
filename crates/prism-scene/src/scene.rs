//! Scene — the per-step collision loop over all bodies.
//!
//! ```text
//! kinematics → AABB + BVH refresh → Sweep & Prune → narrow phase → flags
//! ```
//!
//! A step always runs to completion; there is no partial state between
//! the phases.

use std::time::Instant;

use prism_contact::{CollisionMode, CollisionPair, CollisionPipeline};
use prism_mesh::{ShapeKind, ShapeLibrary};
use prism_types::{ObjectId, PrismError, PrismResult};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::body::Body;
use crate::clock::StepClock;
use crate::config::SceneConfig;
use crate::kinematics::EllipticalOrbit;

/// Summary of one simulation step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StepReport {
    /// Step index, starting at 1.
    pub step: u64,
    /// Simulated time after this step (seconds).
    pub sim_time: f64,
    /// Time advanced by this step (seconds).
    pub elapsed: f32,
    /// Pairs overlapping on all three axes.
    pub candidate_pairs: u32,
    /// Narrow phase invocations.
    pub narrow_tests: u32,
    /// Pairs confirmed as colliding.
    pub confirmed_pairs: u32,
    /// Bodies with their collision flag set.
    pub colliding_objects: u32,
    /// Adjacent swaps performed by the axis re-sorts.
    pub sort_swaps: u32,
    /// Wall-clock time for this step (seconds).
    pub wall_time: f64,
}

/// All bodies plus the collision pipeline that runs over them.
pub struct Scene {
    bodies: Vec<Body>,
    pipeline: CollisionPipeline,
    mode: CollisionMode,
    clock: StepClock,
    step_count: u64,
    sim_time: f64,
}

impl Scene {
    /// Builds a random scene from `config`.
    ///
    /// Each body gets a random solid shape and elliptical trajectory drawn
    /// from a `StdRng` seeded with `config.seed`.
    pub fn new(config: &SceneConfig) -> PrismResult<Self> {
        config.validate()?;

        let mut rng = StdRng::seed_from_u64(config.seed);
        let library = ShapeLibrary::new();
        let solids = ShapeKind::solids();

        let mut bodies = Vec::with_capacity(config.object_count);
        for i in 0..config.object_count {
            let kind = solids[rng.random_range(0..solids.len())];
            let orbit = EllipticalOrbit::random(&mut rng, config.extent);
            bodies.push(Body::from_kind(
                ObjectId(i as u32),
                kind,
                &library,
                Box::new(orbit),
            )?);
        }

        let scene = Self::from_bodies(bodies, config.collision_mode)?
            .with_step_interval(config.step_interval);
        info!(
            objects = scene.len(),
            mode = %config.collision_mode,
            seed = config.seed,
            "Scene constructed"
        );
        Ok(scene)
    }

    /// Builds a scene from explicit bodies.
    ///
    /// Body ids must equal their position in `bodies`. Runs one collision
    /// pass so the axis lists start sorted and flags match the initial poses.
    pub fn from_bodies(bodies: Vec<Body>, mode: CollisionMode) -> PrismResult<Self> {
        if let Some((i, body)) = bodies
            .iter()
            .enumerate()
            .find(|(i, b)| b.id().index() != *i)
        {
            return Err(PrismError::InvariantViolation(format!(
                "body at position {i} has id {}",
                body.id().0
            )));
        }

        let mut scene = Self {
            bodies,
            pipeline: CollisionPipeline::for_mode(mode),
            mode,
            clock: StepClock::new(prism_types::constants::DEFAULT_STEP_INTERVAL),
            step_count: 0,
            sim_time: 0.0,
        };
        scene.detect();
        Ok(scene)
    }

    /// Replaces the throttle interval used by [`Scene::advance`].
    pub fn with_step_interval(mut self, interval: f32) -> Self {
        self.clock = StepClock::new(interval);
        self
    }

    fn detect(&mut self) -> prism_contact::CollisionStepResult {
        let result = self.pipeline.step(&self.bodies);
        for (body, &flag) in self.bodies.iter_mut().zip(self.pipeline.flags()) {
            body.set_collision(flag);
        }
        result
    }

    /// Advances every body by `elapsed` seconds and recomputes all collision flags.
    pub fn step(&mut self, elapsed: f32) -> PrismResult<StepReport> {
        let start = Instant::now();

        for body in &mut self.bodies {
            body.advance(elapsed)?;
        }
        let collision = self.detect();

        self.step_count += 1;
        self.sim_time += f64::from(elapsed);

        let report = StepReport {
            step: self.step_count,
            sim_time: self.sim_time,
            elapsed,
            candidate_pairs: collision.candidate_pairs,
            narrow_tests: collision.narrow_tests,
            confirmed_pairs: collision.confirmed_pairs,
            colliding_objects: collision.colliding_objects,
            sort_swaps: collision.sort_swaps,
            wall_time: start.elapsed().as_secs_f64(),
        };
        debug!(
            step = report.step,
            candidates = report.candidate_pairs,
            confirmed = report.confirmed_pairs,
            swaps = report.sort_swaps,
            "Scene step"
        );
        Ok(report)
    }

    /// Feeds wall time to the step clock and runs a step when it fires,
    /// advancing by the accumulated time.
    pub fn advance(&mut self, wall_elapsed: f32) -> PrismResult<Option<StepReport>> {
        match self.clock.accumulate(wall_elapsed) {
            Some(elapsed) => self.step(elapsed).map(Some),
            None => Ok(None),
        }
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn body(&self, id: ObjectId) -> Option<&Body> {
        self.bodies.get(id.index())
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Confirmed pairs from the last step, larger id first.
    pub fn colliding_pairs(&self) -> &[CollisionPair] {
        self.pipeline.pairs()
    }

    /// Per-body collision flags from the last step.
    pub fn collision_flags(&self) -> &[bool] {
        self.pipeline.flags()
    }

    pub fn mode(&self) -> CollisionMode {
        self.mode
    }

    pub fn clock(&self) -> &StepClock {
        &self.clock
    }

    /// Steps run so far.
    pub fn step_count(&self) -> u64 {
        self.step_count
    }

    /// Simulated seconds so far.
    pub fn sim_time(&self) -> f64 {
        self.sim_time
    }
}

impl std::fmt::Debug for Scene {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scene")
            .field("bodies", &self.bodies.len())
            .field("mode", &self.mode)
            .field("broad", &self.pipeline.broad.name())
            .field("clock", &self.clock)
            .field("step_count", &self.step_count)
            .field("sim_time", &self.sim_time)
            .finish()
    }
}
