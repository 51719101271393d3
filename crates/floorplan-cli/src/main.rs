//! floorplan CLI - generate 2D floor plans as DXF drawings
//!
//! ```bash
//! # Default 10x10 m single room
//! floorplan generate
//!
//! # From a request file, reproducible
//! floorplan generate --request house.toml --seed 7 --output house.dxf
//!
//! # Inspect the planned rooms without writing a drawing
//! floorplan layout --width 12 --length 9 --rooms 5
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use floorplan::{generate, FloorPlan, Footprint, GenerationReport, Layout, RandomJitter};
use serde::Serialize;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;

use config::{CliConfig, InputArgs};

#[derive(Parser)]
#[command(name = "floorplan")]
#[command(version, about = "Parametric 2D floor plan generator with DXF output", long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a floor plan and write it as DXF
    Generate {
        #[command(flatten)]
        input: InputArgs,

        /// Output DXF file
        #[arg(short, long, default_value = "floorplan.dxf")]
        output: PathBuf,
    },
    /// Print the planned rooms and placement report as JSON
    Layout {
        #[command(flatten)]
        input: InputArgs,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Generate { input, output } => {
            generate_file(&input, &output)?;
        }
        Commands::Layout { input } => {
            print_layout(&input)?;
        }
    }

    Ok(())
}

fn build(input: &InputArgs) -> Result<FloorPlan> {
    let CliConfig { request, drafting } = input.resolve()?;

    let mut jitter = match input.seed {
        Some(seed) => RandomJitter::seeded(seed),
        None => RandomJitter::from_entropy(),
    };

    generate(&request, &mut jitter, &drafting).context("Invalid floor plan request")
}

fn generate_file(input: &InputArgs, output: &Path) -> Result<()> {
    let plan = build(input)?;
    log_report(&plan.report);

    plan.document
        .export(output)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    println!(
        "Exported DXF to {} ({} rooms, {} entities)",
        output.display(),
        plan.report.rooms.len(),
        plan.document.num_entities()
    );
    Ok(())
}

fn log_report(report: &GenerationReport) {
    for room in &report.rooms {
        info!(
            room = room.number,
            name = %room.name,
            category = %room.category,
            doors = room.doors_placed(),
            windows = room.windows_placed(),
            fixtures = room.fixtures,
            "room"
        );
        if !room.unannotated.is_empty() {
            info!(
                room = room.number,
                labels = ?room.unannotated,
                "openings too close to a corner for a dimension"
            );
        }
    }
    if report.dropped_openings() > 0 {
        warn!(
            dropped = report.dropped_openings(),
            "some requested doors or windows had no wall to go on"
        );
    }
    if !report.unused_cells.is_empty() {
        warn!(
            cells = report.unused_cells.len(),
            area = report.unused_area(),
            "part of the footprint has no room"
        );
    }
}

#[derive(Serialize)]
struct LayoutOutput<'a> {
    footprint: &'a Footprint,
    layout: &'a Layout,
    report: &'a GenerationReport,
}

fn print_layout(input: &InputArgs) -> Result<()> {
    let plan = build(input)?;
    let output = LayoutOutput {
        footprint: &plan.footprint,
        layout: &plan.layout,
        report: &plan.report,
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
