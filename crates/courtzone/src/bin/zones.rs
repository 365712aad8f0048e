use anyhow::{Context, Result};
use clap::Parser;
use courtzone::{Config, Side, ZoneGeometry, constants::DEFAULT_CONFIG_PATH, extent};
use log::{info, warn};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "Export court zone outlines as JSON for a renderer", long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short = 'c', long = "config", default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// JSON output path
    #[arg(short = 'o', long = "output", default_value = "zones.json")]
    output: PathBuf,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let config = if args.config.exists() {
        Config::load_from_file(&args.config)?
    } else {
        warn!(
            "Config file not found: {}, using default settings",
            args.config.display()
        );
        Config::default()
    };

    let spec = config.court_spec()?;
    let arc = config.zones.arc_samples;
    let three = config.zones.three_point_samples;
    let left = ZoneGeometry::build_with(&spec, Side::Left, arc, three)?;
    let right = ZoneGeometry::build_with(&spec, Side::Right, arc, three)?;

    let (length, width) = spec.dims();
    let (hoop_l, hoop_r) = spec.hoop_centers();
    let export = serde_json::json!({
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "court": {
            "league": spec.league.to_string(),
            "units": spec.units.to_string(),
            "origin": spec.origin.to_string(),
            "orientation": spec.orientation.to_string(),
            "dims": [length, width],
            "center": spec.center(),
            "hoops": [hoop_l, hoop_r],
            "extent": extent(&spec, None),
        },
        "zones": [left, right],
    });

    std::fs::write(&args.output, serde_json::to_string_pretty(&export)?)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;
    info!(
        "Zone outlines for {} ({}, {}) saved to: {}",
        spec.league,
        spec.units,
        spec.orientation,
        args.output.display()
    );
    Ok(())
}
