//! Headless demo driver.
//!
//! Plays the role of the external animation loop: builds an engine, computes
//! a fixed number of frames at the configured dt, optionally applies a
//! mid-run rate change (the slider path), and emits snapshots as JSON for
//! whatever renders them.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{ensure, Context, Result};
use clap::Parser;
use tracing::info;

use gyrosim_core::config::SimConfig;
use gyrosim_sim::SimulationEngine;

#[derive(Parser, Debug)]
#[command(name = "gyrosim", about = "Spin/precession/nutation kinematics demo driver")]
struct Args {
    /// Number of frames to compute.
    #[arg(long, default_value_t = 800)]
    frames: u64,

    /// Path to a JSON config; defaults are used for missing fields.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Emit every frame snapshot as a JSON line instead of only the last.
    #[arg(long)]
    emit_all: bool,

    /// Replace the angular rates mid-run: "OMEGA_ROT,OMEGA_P,OMEGA_N".
    #[arg(long, value_name = "R,P,N")]
    set_rates: Option<String>,

    /// Frame index at which --set-rates is applied.
    #[arg(long, default_value_t = 0, value_name = "FRAME")]
    at_frame: u64,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let config = load_config(args.config.as_deref())?;
    info!(?config, "config loaded");

    let rates = args.set_rates.as_deref().map(parse_rates).transpose()?;

    let mut engine = SimulationEngine::new(config)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let mut last = None;
    for frame in 0..args.frames {
        if let Some((omega_rot, omega_p, omega_n)) = rates {
            if frame == args.at_frame {
                engine.set_parameters(omega_rot, omega_p, omega_n)?;
            }
        }

        let snapshot = engine.compute_frame(frame);
        if args.emit_all {
            serde_json::to_writer(&mut out, &snapshot)?;
            writeln!(out)?;
        }
        last = Some(snapshot);
    }

    if !args.emit_all {
        if let Some(snapshot) = &last {
            serde_json::to_writer(&mut out, snapshot)?;
            writeln!(out)?;
        }
    }

    Ok(())
}

fn load_config(path: Option<&std::path::Path>) -> Result<SimConfig> {
    match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("parsing config {}", path.display()))
        }
        None => Ok(SimConfig::default()),
    }
}

fn parse_rates(raw: &str) -> Result<(f64, f64, f64)> {
    let parts: Vec<&str> = raw.split(',').collect();
    ensure!(
        parts.len() == 3,
        "expected three comma-separated rates, got {raw:?}"
    );
    let parse = |part: &str| {
        part.trim()
            .parse::<f64>()
            .with_context(|| format!("invalid rate {part:?}"))
    };
    Ok((parse(parts[0])?, parse(parts[1])?, parse(parts[2])?))
}
