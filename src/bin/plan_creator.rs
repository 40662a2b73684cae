//! Run a plan creator from the command line and print the resulting plan.
//!
//! Usage:
//!   cargo run --bin plan_creator -- --lat 47.0 --lon 8.0
//!   cargo run --bin plan_creator -- --config planner.json --creator Blank
//!   cargo run --bin plan_creator -- --list

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use plan_creator::{
    build_plan, logging, mission::command_name, resolve_map_center, MissionController,
    PlanCreatorRegistry, PlannerConfig,
};

#[derive(Debug, Parser)]
#[command(name = "plan_creator", about = "Generate a mission plan from a map coordinate")]
struct Args {
    /// JSON config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Plan creator to run (overrides config)
    #[arg(long)]
    creator: Option<String>,

    /// Map center latitude in degrees
    #[arg(long, allow_hyphen_values = true, requires = "lon")]
    lat: Option<f64>,

    /// Map center longitude in degrees
    #[arg(long, allow_hyphen_values = true, requires = "lat")]
    lon: Option<f64>,

    /// Map center altitude in meters
    #[arg(long, allow_hyphen_values = true)]
    alt: Option<f64>,

    /// List available plan creators and exit
    #[arg(long)]
    list: bool,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    let registry = PlanCreatorRegistry::with_defaults();

    if args.list {
        for creator in registry.iter() {
            println!("{:<16} {}", creator.name(), creator.image_resource());
        }
        return Ok(());
    }

    let config = match &args.config {
        Some(path) => PlannerConfig::load(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => PlannerConfig::default(),
    };

    let map_center = resolve_map_center(args.lat, args.lon, args.alt, &config)?;

    if !map_center.is_valid() {
        log::warn!("Map center {} is out of range", map_center);
    }

    let creator = args.creator.as_deref().unwrap_or(&config.creator);
    let controller = build_plan(&registry, creator, config.settings.clone(), map_center)?;

    print_plan(&controller);
    Ok(())
}

/// One line per item; lat/lon as MISSION_ITEM_INT scaled integers.
fn print_plan(controller: &MissionController) {
    if let Some(home) = controller.planned_home() {
        println!("  0 {:<18} {}", "HOME", home);
    }

    for item in controller.items() {
        println!(
            "{:>3} {:<18} {:>11} {:>11} {:>8.1}m{}",
            item.seq,
            command_name(item.command),
            item.coordinate.latitude_e7(),
            item.coordinate.longitude_e7(),
            item.altitude(),
            if item.wizard_mode() { "  [wizard]" } else { "" }
        );
    }
}
