#![warn(clippy::all)]

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use std::str::FromStr;
use torus_life::{Config, Simulation};
use tracing_subscriber::EnvFilter;

/// Conway's Game of Life on a toroidal grid.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct CliArgs {
    /// Grid dimensions expressed as WIDTHxHEIGHT (for example 40x15).
    #[arg(short = 's', long = "size", value_name = "WIDTHxHEIGHT", conflicts_with_all = ["width", "height"])]
    size: Option<SizeArg>,
    /// Number of columns.
    #[arg(long, value_name = "COLUMNS", default_value_t = Config::WIDTH)]
    width: usize,
    /// Number of rows.
    #[arg(long, value_name = "ROWS", default_value_t = Config::HEIGHT)]
    height: usize,
    /// Number of generations to play.
    #[arg(short = 'g', long, default_value_t = Config::GENERATIONS)]
    generations: u64,
    /// Upper bound on frames per second.
    #[arg(long = "fps", value_name = "FPS", default_value_t = Config::MAX_FPS)]
    max_fps: f64,
    /// Seed of the initial generation; random when omitted.
    #[arg(long)]
    seed: Option<u64>,
    /// Show the simulation in a window instead of the terminal.
    #[arg(long)]
    gui: bool,
}

#[derive(Clone, Copy, Debug)]
struct SizeArg {
    width: usize,
    height: usize,
}

impl FromStr for SizeArg {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (width, height) = value
            .split_once(['x', 'X'])
            .ok_or_else(|| "expected format WIDTHxHEIGHT".to_string())?;
        let width = width
            .trim()
            .parse::<usize>()
            .map_err(|error| format!("invalid width: {error}"))?;
        let height = height
            .trim()
            .parse::<usize>()
            .map_err(|error| format!("invalid height: {error}"))?;
        Ok(Self { width, height })
    }
}

impl CliArgs {
    fn into_config(self) -> Config {
        let (width, height) = match self.size {
            Some(size) => (size.width, size.height),
            None => (self.width, self.height),
        };
        Config {
            width,
            height,
            generations: self.generations,
            max_fps: self.max_fps,
            seed: self.seed,
            ..Config::default()
        }
    }
}

fn main() -> Result<()> {
    // logs go to stderr so they never mix with frames
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = CliArgs::parse();
    let gui = args.gui;
    let config = args.into_config();
    config.validate().context("invalid configuration")?;

    let mut life = Simulation::random(config.width, config.height, config.seed);
    if gui {
        torus_life::run_gui(life, &config).map_err(|err| anyhow!("window failed: {err}"))?;
    } else {
        let stdout = std::io::stdout();
        torus_life::run_terminal(&mut life, &config, &mut stdout.lock())
            .context("failed to write frame")?;
    }
    Ok(())
}
