//! printinfo - CLI tool to inspect print metadata in G-code and 3MF files.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use printinfo::{extract_print_info, PrintInfo};

/// Extract print metadata (time, filament, layers) from G-code and 3MF files.
#[derive(Parser, Debug)]
#[command(name = "printinfo")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input G-code / 3MF file paths (other extensions are ignored)
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Output the record as JSON
    #[arg(long)]
    json: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    info!("Processing {} file(s)", args.files.len());

    let print_info = extract_print_info(&args.files);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&print_info)?);
        return Ok(());
    }

    if print_info.is_empty() {
        info!("No print metadata found");
        return Ok(());
    }

    print_report(&print_info);

    Ok(())
}

fn print_report(info: &PrintInfo) {
    let mut rows: Vec<(&str, String)> = Vec::new();

    let optional = [
        ("Print time", &info.time_human),
        ("Filament type", &info.filament_type),
        ("Filament color", &info.filament_color),
        ("Color name", &info.filament_color_name),
        ("Filament length", &info.filament_amount_m),
        ("Filament weight", &info.filament_amount_g),
        ("Density", &info.filament_density),
        ("Diameter", &info.filament_diameter),
        ("Layer height", &info.layer_height),
    ];
    for (label, value) in optional {
        if let Some(value) = value {
            rows.push((label, value.clone()));
        }
    }
    if info.total_layers > 0 {
        rows.push(("Total layers", info.total_layers.to_string()));
    }
    if info.pieces > 0 {
        rows.push(("Pieces", info.pieces.to_string()));
    }
    if info.color_changes > 0 {
        rows.push(("Color changes", info.color_changes.to_string()));
    }

    for (label, value) in rows {
        println!("{:<16} {}", format!("{}:", label), value);
    }
}
