//! CLI command implementations.

use prism_bench::metrics::BenchmarkMetrics;
use prism_bench::runner::BenchmarkRunner;
use prism_bench::scenarios::{Scenario, ScenarioKind};
use prism_debug::hooks::{InspectionHook, TelemetryHook};
use prism_debug::snapshot::SceneSnapshot;
use prism_mesh::TriangleMesh;
use prism_scene::{Scene, SceneConfig};
use prism_telemetry::{EventBus, TracingSink};

/// Run a scene through the step clock.
pub fn simulate(
    config_path: Option<&str>,
    steps: u64,
    dt: f32,
    snapshot_path: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("Prism Simulation");
    println!("────────────────");

    if !(dt.is_finite() && dt > 0.0) {
        return Err(format!("--dt must be positive, got {dt}").into());
    }

    let config = match config_path {
        Some(path) => {
            println!("Config: {path}");
            SceneConfig::load(path)?
        }
        None => {
            println!("Config: defaults");
            SceneConfig::default()
        }
    };
    println!(
        "Objects: {}  Mode: {}  Seed: {}",
        config.object_count, config.collision_mode, config.seed
    );
    println!();

    let mut scene = Scene::new(&config)?;
    let mut bus = EventBus::new();
    bus.add_sink(Box::new(TracingSink::default()));
    let mut hook = TelemetryHook::new();

    let mut total_candidates: u64 = 0;
    let mut total_confirmed: u64 = 0;
    let mut max_colliding: u32 = 0;
    let mut ticks: u64 = 0;

    while scene.step_count() < steps {
        ticks += 1;
        if let Some(report) = scene.advance(dt)? {
            total_candidates += u64::from(report.candidate_pairs);
            total_confirmed += u64::from(report.confirmed_pairs);
            max_colliding = max_colliding.max(report.colliding_objects);
            hook.on_step(&report);
            for event in hook.drain_events() {
                bus.emit(event);
            }
            bus.flush();
        }
    }
    hook.on_simulation_end();
    bus.finalize();

    let per_step = |total: u64| {
        if steps > 0 {
            total as f64 / steps as f64
        } else {
            0.0
        }
    };
    println!("Steps:          {} ({} ticks)", scene.step_count(), ticks);
    println!("Sim time:       {:.3}s", scene.sim_time());
    println!("Avg candidates: {:.2}", per_step(total_candidates));
    println!("Avg confirmed:  {:.2}", per_step(total_confirmed));
    println!("Max colliding:  {max_colliding}");
    println!(
        "Colliding now:  {}",
        scene.bodies().iter().filter(|b| b.collision()).count()
    );

    if let Some(path) = snapshot_path {
        SceneSnapshot::from_scene(&scene).save(path)?;
        println!("Snapshot written to: {path}");
    }

    Ok(())
}

/// Run benchmark suite.
pub fn benchmark(
    scenario_name: &str,
    output_path: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("Prism Benchmark Suite");
    println!("═════════════════════");
    println!();

    let scenarios: Vec<ScenarioKind> = if scenario_name == "all" {
        ScenarioKind::all().to_vec()
    } else {
        match ScenarioKind::from_name(scenario_name) {
            Some(kind) => vec![kind],
            None => {
                eprintln!("Unknown scenario: {scenario_name}");
                eprintln!("Available: sparse, dense, crowd, all");
                return Err("Unknown scenario".into());
            }
        }
    };

    let mut all_metrics = Vec::new();

    for &kind in &scenarios {
        let scenario = Scenario::from_kind(kind);

        println!(
            "Running: {} ({} objects, {} steps)",
            kind.name(),
            scenario.config.object_count,
            scenario.timesteps,
        );

        let metrics =
            BenchmarkRunner::run(&scenario).map_err(|e| format!("Benchmark failed: {e}"))?;

        println!("  Wall time:     {:.3}s", metrics.total_wall_time);
        println!("  Avg step:      {:.3}ms", metrics.avg_step_time * 1000.0);
        println!("  Avg pairs:     {:.2}", metrics.avg_candidate_pairs);
        println!("  Avg colliding: {:.2}", metrics.avg_colliding_objects);
        println!("  Swaps:         {}", metrics.total_swaps);
        println!();

        all_metrics.push(metrics);
    }

    let csv = BenchmarkMetrics::to_csv(&all_metrics);
    if let Some(path) = output_path {
        std::fs::write(path, &csv)?;
        println!("Results written to: {path}");
    } else {
        println!("CSV Output:");
        println!("{csv}");
    }

    Ok(())
}

/// Inspect a scene snapshot.
pub fn inspect(path: &str) -> Result<(), Box<dyn std::error::Error>> {
    println!("Prism Snapshot Inspector");
    println!("────────────────────────");
    println!();

    let snapshot = SceneSnapshot::load(path)?;

    println!("Step:         {}", snapshot.step);
    println!("Sim time:     {:.4}s", snapshot.sim_time);
    println!("Mode:         {}", snapshot.mode);
    println!("Objects:      {}", snapshot.object_count());
    println!("Colliding:    {}", snapshot.colliding_count());
    println!("Pairs:        {}", snapshot.pairs.len());

    if let Some(bounds) = snapshot.bounds() {
        println!(
            "Bounds:       [{:.3}, {:.3}, {:.3}] .. [{:.3}, {:.3}, {:.3}]",
            bounds.min.x, bounds.min.y, bounds.min.z, bounds.max.x, bounds.max.y, bounds.max.z
        );
    }
    for pair in &snapshot.pairs {
        println!("  {} ↔ {}", pair.a.0, pair.b.0);
    }

    Ok(())
}

/// Validate a mesh or config.
pub fn validate(path: &str) -> Result<(), Box<dyn std::error::Error>> {
    println!("Prism Validator");
    println!("───────────────");
    println!();

    if path.ends_with(".toml") {
        println!("Validating config: {path}");
        let config = SceneConfig::load(path)?;
        config.validate()?;
        println!(
            "✅ Config is valid ({} objects, mode {}).",
            config.object_count, config.collision_mode
        );
    } else if path.ends_with(".json") {
        println!("Validating mesh: {path}");
        let content = std::fs::read_to_string(path)?;
        let mesh: TriangleMesh = serde_json::from_str(&content)?;
        mesh.validate()?;
        println!(
            "✅ Mesh is valid ({} verts, {} tris).",
            mesh.vertex_count(),
            mesh.triangle_count()
        );
    } else {
        return Err("Unsupported file format. Use .toml (config) or .json (mesh).".into());
    }

    Ok(())
}
