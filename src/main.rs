use std::path::PathBuf;

use clap::Parser;
use dumbbell_rs::{
    logging, mode::Mode, plate::Plate, settings::Settings, summary::Summary, unit::Unit,
};
use itertools::Itertools;
use tracing::info;

/// Every dumbbell weight your plates can make.
#[derive(Parser)]
#[command(version)]
struct Args {
    /// Plates as WEIGHTxCOUNT, e.g. 2.5x4. Replaces the saved inventory.
    #[arg(value_parser = clap::value_parser!(Plate))]
    plates: Vec<Plate>,

    /// Handle weight.
    #[arg(long)]
    handle: Option<f64>,

    /// single or pair.
    #[arg(long, value_parser = clap::value_parser!(Mode))]
    mode: Option<Mode>,

    /// Most plates that fit on one side (1-20).
    #[arg(long, conflicts_with = "no_limit")]
    max_plates: Option<i64>,

    /// Lift the plates-per-side cap.
    #[arg(long)]
    no_limit: bool,

    /// kg or lbs. Saved weights are converted when the unit changes.
    #[arg(long, value_parser = clap::value_parser!(Unit))]
    unit: Option<Unit>,

    /// Settings file, defaults to the user config directory.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the resulting inputs back to the settings file.
    #[arg(long)]
    save: bool,

    /// Print common plate and handle weights for the unit and exit.
    #[arg(long)]
    presets: bool,

    /// Log the enumeration to stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    logging::setup_tracing(if args.verbose { "debug" } else { "warn" });

    let path = match args.config {
        Some(path) => path,
        None => Settings::default_path()?,
    };
    let mut rack = Settings::load(&path)?.to_rack()?;

    if let Some(unit) = args.unit {
        rack.convert_to(unit)?;
    }

    if args.presets {
        let unit = rack.unit();
        println!(
            "Plates:  {}",
            unit.common_plates().iter().map(|w| unit.format(*w)).join(", ")
        );
        println!(
            "Handles: {}",
            unit.common_handles().iter().map(|w| unit.format(*w)).join(", ")
        );
        return Ok(());
    }

    if !args.plates.is_empty() {
        rack.clear_plates();
        for plate in &args.plates {
            rack.add_plate(plate.weight(), i64::from(plate.count()))?;
        }
    }
    if let Some(handle) = args.handle {
        rack.set_handle_weight(handle)?;
    }
    if let Some(mode) = args.mode {
        rack.set_mode(mode);
    }
    if args.no_limit {
        rack.set_max_plates(None)?;
    } else if let Some(max_plates) = args.max_plates {
        rack.set_max_plates(Some(max_plates))?;
    }

    if rack.plates().is_empty() {
        println!("No weights calculated yet.");
        println!("Add some plates, e.g. `dumbbell-rs 2.5x4 5x2 --handle 2`.");
    } else {
        let unit = rack.unit();
        let results = rack.weights();

        match rack.mode() {
            Mode::Single => println!("Possible weights (single dumbbell):"),
            Mode::Pair => println!("Possible weights (pair of dumbbells):"),
        }
        for result in &results {
            println!("  {}", result.describe(unit));
        }

        if let Some(summary) = Summary::new(&rack, &results) {
            println!();
            println!("{summary}");
        }
    }

    if args.save {
        Settings::from(&rack).save(&path)?;
        info!(path = %path.display(), "settings saved");
    }

    Ok(())
}
