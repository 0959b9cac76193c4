//! Benchmark runner — builds a scenario's scene, steps it, collects metrics.

use std::time::Instant;

use prism_scene::Scene;
use prism_types::PrismResult;
use tracing::info;

use crate::metrics::BenchmarkMetrics;
use crate::scenarios::{Scenario, ScenarioKind};

/// Runs benchmark scenarios and collects metrics.
pub struct BenchmarkRunner;

impl BenchmarkRunner {
    /// Run a single scenario.
    ///
    /// Scene construction is excluded from the timings.
    pub fn run(scenario: &Scenario) -> PrismResult<BenchmarkMetrics> {
        let mut scene = Scene::new(&scenario.config)?;

        let mut step_times: Vec<f64> = Vec::with_capacity(scenario.timesteps as usize);
        let mut total_candidates: u64 = 0;
        let mut total_colliding: u64 = 0;
        let mut total_swaps: u64 = 0;

        let total_start = Instant::now();
        for _ in 0..scenario.timesteps {
            let report = scene.step(scenario.dt)?;
            step_times.push(report.wall_time);
            total_candidates += u64::from(report.candidate_pairs);
            total_colliding += u64::from(report.colliding_objects);
            total_swaps += u64::from(report.sort_swaps);
        }
        let total_wall_time = total_start.elapsed().as_secs_f64();

        let avg_step = if step_times.is_empty() {
            0.0
        } else {
            step_times.iter().sum::<f64>() / step_times.len() as f64
        };
        let min_step = step_times.iter().copied().fold(f64::MAX, f64::min);
        let max_step = step_times.iter().copied().fold(0.0, f64::max);
        let per_step = |total: u64| {
            if scenario.timesteps > 0 {
                total as f32 / scenario.timesteps as f32
            } else {
                0.0
            }
        };

        let metrics = BenchmarkMetrics {
            scenario: scenario.kind.name().to_string(),
            mode: scene.mode().name().to_string(),
            object_count: scene.len(),
            timesteps: scenario.timesteps,
            total_wall_time,
            avg_step_time: avg_step,
            min_step_time: if step_times.is_empty() { 0.0 } else { min_step },
            max_step_time: max_step,
            avg_candidate_pairs: per_step(total_candidates),
            avg_colliding_objects: per_step(total_colliding),
            total_swaps,
        };
        info!(
            scenario = %metrics.scenario,
            steps = metrics.timesteps,
            avg_step_ms = metrics.avg_step_time * 1000.0,
            "Benchmark finished"
        );
        Ok(metrics)
    }

    /// Run all scenarios and return metrics for each.
    pub fn run_all() -> PrismResult<Vec<BenchmarkMetrics>> {
        ScenarioKind::all()
            .iter()
            .map(|&kind| Self::run(&Scenario::from_kind(kind)))
            .collect()
    }
}
