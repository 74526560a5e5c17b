//! Console front end for the biped simulation.

use anyhow::{Context, Result};
use biped_commander::{Console, MotionConfig, Robot, config};
use clap::Parser;
use std::io;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Drive a simulated biped with stacked and queued commands.
#[derive(Parser)]
#[command(name = "biped-commander")]
#[command(about = "Interactive stack-then-queue command loop for a simulated biped", long_about = None)]
#[command(version)]
struct Cli {
    /// Distance covered by one leg step, in metres
    #[arg(long, default_value_t = config::DEFAULT_STEP_SIZE)]
    step_size: f64,

    /// Arrival tolerance, in metres
    #[arg(long, default_value_t = config::DEFAULT_EPSILON_DISTANCE)]
    epsilon: f64,

    /// Re-aim at the destination before every step
    #[arg(long)]
    reorient_each_step: bool,

    /// Log per-step detail
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();

    let config = MotionConfig::default()
        .with_step_size(cli.step_size)
        .with_epsilon_distance(cli.epsilon)
        .with_reorient_each_step(cli.reorient_each_step);
    let mut robot = Robot::new(config).context("invalid motion configuration")?;

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());
    let report = console.run(&mut robot).context("console session failed")?;

    let position = robot.position();
    info!(
        rounds = report.rounds,
        executed = report.executed,
        "Session finished at ({}, {})",
        position.x,
        position.y
    );
    Ok(())
}
