use anyhow::{Context, Result};
use clap::Parser;
use courtzone::{
    Config, InputConvention, classify, constants::DEFAULT_CONFIG_PATH, read_points_csv, write_classified_csv,
    zone_counts,
};
use log::{info, warn};
use std::{fs::File, io::BufWriter, path::PathBuf};

#[derive(Parser)]
#[command(author, version, about = "Label every point of a CSV file with its shot zone", long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short = 'c', long = "config", default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Point CSV with an `x,y` header
    #[arg(short = 'i', long = "input")]
    input: PathBuf,

    /// Labelled CSV output (`x,y,zone`)
    #[arg(short = 'o', long = "output", default_value = "zones.csv")]
    output: PathBuf,

    /// Input convention, overrides the config (standard, hawkeye, nba, ...)
    #[arg(long = "convention")]
    convention: Option<String>,

    /// Optional JSON summary of per-zone counts
    #[arg(short = 's', long = "summary")]
    summary: Option<PathBuf>,
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
    let convention = match &args.convention {
        Some(token) => InputConvention::parse(token)?,
        None => config.input_convention()?,
    };
    info!(
        "Court: {} {} origin={} orientation={} (input: {})",
        spec.league, spec.units, spec.origin, spec.orientation, convention
    );

    let raw = read_points_csv(&args.input)
        .with_context(|| format!("Failed to read points from {}", args.input.display()))?;
    info!("Read {} points from {}", raw.len(), args.input.display());
    if raw.is_empty() {
        warn!("No points to classify");
    }

    let (x, y) = convention.normalize(&raw.x, &raw.y, &spec)?;
    let zones = classify(&x, &y, &spec)?;

    let out = File::create(&args.output)
        .with_context(|| format!("Failed to create {}", args.output.display()))?;
    write_classified_csv(BufWriter::new(out), &raw, &zones)?;
    info!("Labelled points written to {}", args.output.display());

    let counts = zone_counts(&zones);
    info!("=== Zone counts ===");
    for (zone, count) in &counts {
        info!("{:<20} {}", zone.to_string(), count);
    }

    if let Some(path) = &args.summary {
        let summary = serde_json::json!({
            "timestamp": chrono::Utc::now().to_rfc3339(),
            "input": args.input.display().to_string(),
            "court": {
                "league": spec.league.to_string(),
                "units": spec.units.to_string(),
                "origin": spec.origin.to_string(),
                "orientation": spec.orientation.to_string(),
            },
            "convention": convention.to_string(),
            "total": zones.len(),
            "counts": counts
                .iter()
                .map(|(zone, count)| (zone.to_string(), serde_json::Value::from(*count)))
                .collect::<serde_json::Map<_, _>>(),
        });
        std::fs::write(path, serde_json::to_string_pretty(&summary)?)
            .with_context(|| format!("Failed to write summary {}", path.display()))?;
        info!("Summary saved to: {}", path.display());
    }

    Ok(())
}
