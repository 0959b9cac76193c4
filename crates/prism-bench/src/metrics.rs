//! Benchmark metrics — data collected during a benchmark run.

use serde::{Deserialize, Serialize};

/// Metrics collected from a benchmark scenario run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkMetrics {
    /// Scenario name.
    pub scenario: String,
    /// Collision mode name.
    pub mode: String,
    /// Number of objects in the scene.
    pub object_count: usize,
    /// Number of steps executed.
    pub timesteps: u32,
    /// Total wall-clock time (seconds).
    pub total_wall_time: f64,
    /// Average wall-clock time per step (seconds).
    pub avg_step_time: f64,
    /// Minimum step time.
    pub min_step_time: f64,
    /// Maximum step time.
    pub max_step_time: f64,
    /// Average broad phase candidate pairs per step.
    pub avg_candidate_pairs: f32,
    /// Average colliding objects per step.
    pub avg_colliding_objects: f32,
    /// Adjacent swaps over the whole run.
    pub total_swaps: u64,
}

impl BenchmarkMetrics {
    /// CSV header line.
    pub fn to_csv_header() -> String {
        "scenario,mode,object_count,timesteps,total_wall_time_s,avg_step_ms,min_step_ms,max_step_ms,avg_candidates,avg_colliding,total_swaps".to_string()
    }

    /// Format this metrics instance as a CSV data row.
    pub fn to_csv_row(&self) -> String {
        format!(
            "{},{},{},{},{:.6},{:.4},{:.4},{:.4},{:.2},{:.2},{}",
            self.scenario,
            self.mode,
            self.object_count,
            self.timesteps,
            self.total_wall_time,
            self.avg_step_time * 1000.0,
            self.min_step_time * 1000.0,
            self.max_step_time * 1000.0,
            self.avg_candidate_pairs,
            self.avg_colliding_objects,
            self.total_swaps,
        )
    }

    /// Format multiple metrics as a complete CSV string.
    pub fn to_csv(metrics: &[BenchmarkMetrics]) -> String {
        let mut csv = Self::to_csv_header();
        for m in metrics {
            csv.push('\n');
            csv.push_str(&m.to_csv_row());
        }
        csv
    }
}
