use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

mod chart;
mod color;
mod config;
mod display;
mod error;
mod model;

use chart::TorqueChart;
use color::SeriesPalette;
use config::Config;
use display::DisplayMode;

#[derive(Parser, Debug)]
#[command(name = "crater-winch")]
#[command(author, version, about = "Winch torque needed to pull a rover up a crater wall")]
struct Args {
    /// Config file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write the default config file to the user config directory and exit
    #[arg(long)]
    init_config: bool,

    /// Crater depth (m)
    #[arg(long)]
    depth: Option<f64>,

    /// Crater rim diameter (m)
    #[arg(long)]
    diameter: Option<f64>,

    /// Surface gravity (m/s^2)
    #[arg(long)]
    gravity: Option<f64>,

    /// Cable linear mass density (kg/m)
    #[arg(long)]
    cable_density: Option<f64>,

    /// Radius of the fully wound spool (m)
    #[arg(long)]
    outer_radius: Option<f64>,

    /// Radius of the bare spool core (m)
    #[arg(long)]
    inner_radius: Option<f64>,

    /// Rover mass in kg; repeat or comma-separate for several
    #[arg(short = 'm', long = "mass", value_delimiter = ',')]
    masses: Vec<f64>,

    /// Number of sampled cable positions
    #[arg(short = 'n', long)]
    samples: Option<usize>,

    /// Series colours
    #[arg(long)]
    palette: Option<SeriesPalette>,

    /// Print a text summary instead of drawing the chart
    #[arg(long)]
    no_display: bool,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("crater_winch=info".parse()?),
        )
        .init();

    let args = Args::parse();

    if args.init_config {
        let path = Config::init_default_config()?;
        info!("Wrote default config to {}", path.display());
        return Ok(());
    }

    // Load config, then let the command line override it
    let mut config = match &args.config {
        Some(path) => {
            info!("Loading config from {}", path.display());
            Config::load(path)?
        }
        None => Config::load_from_default_path().unwrap_or_default(),
    };
    config.merge_args(&args);

    let mode = DisplayMode::from_flags(args.no_display);
    info!("Starting crater-winch in {:?} mode", mode);

    let sweep = model::compute(&config).context("Failed to compute torque sweep")?;
    info!(
        "Crater arc radius {:.1} m, rim angle {:.3} rad, cable length {:.1} m",
        sweep.geometry.arc_radius, sweep.geometry.initial_angle, sweep.geometry.cable_length
    );

    match mode {
        DisplayMode::Terminal => {
            let chart = TorqueChart::new(&sweep, &config.chart)?;
            display::terminal::run(&sweep, &chart)?;
        }
        DisplayMode::Summary => {
            display::summary::run(&sweep)?;
        }
    }

    Ok(())
}
