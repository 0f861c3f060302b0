//! Game loop demo: two falling bodies driven by gravity, velocity and
//! render systems over a shared entity registry.

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use ecs_registry::{EntityRegistry, RegistryConfig};
use example_systems::{TickConfig, run, spawn_scene};

#[derive(Parser)]
#[command(name = "gameloop", about = "Run the entity registry demo loop")]
struct Args {
    /// Fixed timestep in seconds
    #[arg(long, default_value_t = 1.0)]
    dt: f32,

    /// Number of ticks to run
    #[arg(short, long, default_value_t = 10)]
    ticks: u64,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("gameloop=info".parse()?)
                .add_directive("example_systems=info".parse()?),
        )
        .init();

    let args = Args::parse();
    let config = TickConfig {
        dt: args.dt,
        ticks: args.ticks,
    };

    let mut registry = EntityRegistry::with_config(RegistryConfig::new().with_initial_capacity(2));
    let spawned = spawn_scene(&mut registry)?;
    info!(entities = spawned.len(), dt = config.dt, ticks = config.ticks, "scene ready");

    run(&mut registry, &config)?;

    info!(live = registry.len(), "game loop finished");
    Ok(())
}
