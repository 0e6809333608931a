//! Headless zombie simulation.
mod config;
mod world;

use anyhow::{Context, Result};
use config::SimConfig;
use world::World;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = SimConfig::from_env();
    tracing::debug!(?config, "loaded configuration");

    let mut world = World::new(&config).context("failed to set up the world")?;

    for _ in 0..config.frames {
        let tally = world.step(config.frame_time);
        if world.frame() % config.log_every == 0 {
            let boy = world.boy().position;
            tracing::info!(
                frame = world.frame(),
                boy.x = boy.x,
                boy.y = boy.y,
                running = tally.running,
                success = tally.success,
                failure = tally.failure,
                "progress"
            );
        }
    }

    let boy = world.boy().position;
    for (index, zombie) in world.zombies().iter().enumerate() {
        let body = zombie.body();
        tracing::info!(
            zombie = index,
            x = body.position.x,
            y = body.position.y,
            gap = body.position.distance(boy),
            balls = body.ball_count,
            "final position"
        );
    }
    tracing::info!(frames = world.frame(), "simulation finished");

    Ok(())
}
