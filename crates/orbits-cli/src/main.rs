//! Headless driver: loads a scenario and steps it at a fixed frame rate.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use orbits::config::Scenario;

#[derive(Parser, Debug)]
#[command(name = "orbits", about = "Run a gravity merge scenario without a display")]
struct Args {
    /// Scenario file, as a path or a name inside the bundled scenarios directory
    #[arg(short, long, default_value = "ring.yaml")]
    file: String,

    /// Number of frames to simulate
    #[arg(short, long, default_value_t = 1_000)]
    steps: u64,

    /// Nominal time between frames, in milliseconds (only feeds the fps figure)
    #[arg(long, default_value_t = 16)]
    frame_ms: u64,

    /// Log a telemetry line every this many frames (0 disables)
    #[arg(long, default_value_t = 100)]
    report_every: u64,
}

fn resolve_scenario_path(file: &str) -> Result<PathBuf> {
    let direct = PathBuf::from(file);
    if direct.is_file() {
        return Ok(direct);
    }

    let bundled = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(file);
    if bundled.is_file() {
        return Ok(bundled);
    }

    bail!("scenario {} not found", file)
}

fn load_scenario(file: &str) -> Result<Scenario> {
    let path = resolve_scenario_path(file)?;
    let source = fs::read_to_string(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let scenario = Scenario::from_yaml_str(&source)
        .with_context(|| format!("invalid scenario {}", path.display()))?;
    info!(path = %path.display(), "loaded scenario");
    Ok(scenario)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let scenario = load_scenario(&args.file)?;
    let mut sim = scenario.build()?;

    let frame = Duration::from_millis(args.frame_ms);
    for _ in 0..args.steps {
        let telemetry = sim.step(frame);

        if args.report_every > 0 && telemetry.frame % args.report_every == 0 {
            info!(
                frame = telemetry.frame,
                bodies = telemetry.body_count,
                collisions = telemetry.collision_count,
                fastest = telemetry.fastest_speed,
                farthest = telemetry.farthest.map(|f| f.vector.magnitude),
                "telemetry"
            );
        }
    }

    let momentum = sim.total_momentum();
    info!(
        total_mass = sim.total_mass(),
        momentum_x = momentum.x,
        momentum_y = momentum.y,
        kinetic_energy = sim.kinetic_energy(),
        potential_energy = sim.potential_energy(),
        "final state"
    );

    print!("{}", serde_yaml::to_string(sim.telemetry())?);
    Ok(())
}
