//! Prism CLI — simulation, benchmarking, and debugging.

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "prism")]
#[command(version, about = "Prism — sweep-and-prune + BVH collision detection for moving rigid bodies")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a randomly populated scene.
    Simulate {
        /// Path to scene config (TOML). Defaults are used when absent.
        #[arg(short, long)]
        config: Option<String>,

        /// Number of scene steps to run.
        #[arg(short, long, default_value_t = 100)]
        steps: u64,

        /// Wall time fed to the step clock per tick (seconds).
        #[arg(long, default_value_t = 0.016)]
        dt: f32,

        /// Write a snapshot of the final state to this file.
        #[arg(long)]
        snapshot: Option<String>,
    },

    /// Run benchmark suite.
    Benchmark {
        /// Which scenario to run (sparse, dense, crowd, all).
        #[arg(short, long, default_value = "all")]
        scenario: String,

        /// Output CSV file path.
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Inspect a scene snapshot file.
    Inspect {
        /// Path to snapshot file.
        path: String,
    },

    /// Validate a mesh (.json) or scene config (.toml).
    Validate {
        /// Path to mesh or config file.
        path: String,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Simulate {
            config,
            steps,
            dt,
            snapshot,
        } => commands::simulate(config.as_deref(), steps, dt, snapshot.as_deref()),
        Commands::Benchmark { scenario, output } => {
            commands::benchmark(&scenario, output.as_deref())
        }
        Commands::Inspect { path } => commands::inspect(&path),
        Commands::Validate { path } => commands::validate(&path),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
