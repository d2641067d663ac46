//! Antenna Map CLI
//!
//! Inspect antenna maps and mark the locations antennas interfere on.
//!
//! Usage:
//!     antenna-map show --map data/map.txt
//!     antenna-map resolve --map data/map.txt --out map_effects.txt
//!     antenna-map demo --map data/map.txt --out map_effects.txt

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use antenna_map::adapters::{load_grid, save_grid, TextGridFile};
use antenna_map::core::{resolve, Grid, PointSet};
use antenna_map::ports::{GridResult, GridStore};

/// Antenna Map - find the cells antennas interfere on
#[derive(Parser)]
#[command(name = "antenna-map")]
#[command(version)]
#[command(about = "Antenna maps and their interference (effect) locations", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a map and the antennas on it
    Show {
        /// Map file path
        #[arg(short, long, default_value = "data/map.txt")]
        map: String,
    },

    /// Compute effect locations and optionally write the marked map
    Resolve {
        /// Map file path
        #[arg(short, long, default_value = "data/map.txt")]
        map: String,

        /// Where to write the map with effects marked
        #[arg(short, long)]
        out: Option<String>,

        /// Print antennas and effects as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run the full walkthrough: resolve, save, reload, insert and remove antennas
    Demo {
        /// Map file path
        #[arg(short, long, default_value = "data/map.txt")]
        map: String,

        /// Where to write the map with effects marked
        #[arg(short, long, default_value = "map_effects.txt")]
        out: String,
    },
}

/// Antennas added during the demo walkthrough
const DEMO_INSERTS: [(char, usize, usize); 5] =
    [('O', 3, 2), ('A', 5, 6), ('O', 2, 8), ('O', 0, 11), ('O', 10, 10)];

/// Coordinates removed at the end of the demo walkthrough
const DEMO_REMOVALS: [(usize, usize); 2] = [(5, 6), (2, 8)];

fn expand_path(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}

fn print_grid(title: &str, grid: &Grid) {
    println!("\n{}:", title);
    // Skip the header line, print cells only
    for line in grid.to_text().lines().skip(1) {
        println!("{}", line);
    }
}

fn print_set(title: &str, set: &PointSet) {
    println!("\n{}:", title);
    for line in set.render() {
        println!("{}", line);
    }
}

fn cmd_show(map: &str) -> GridResult<()> {
    let (grid, antennas) = load_grid(expand_path(map))?;

    println!("╔══════════════════════════════════════════════════════════════════╗");
    println!("║  Map: {:<58} ║", map);
    println!("║  Size: {:<57} ║", format!("{} x {}", grid.rows(), grid.cols()));
    println!("║  Antennas: {:<53} ║", antennas.len());
    println!("╚══════════════════════════════════════════════════════════════════╝");

    print_grid("Map", &grid);
    print_set("Antennas", &antennas);
    Ok(())
}

fn cmd_resolve(map: &str, out: Option<&str>, json: bool) -> GridResult<()> {
    let (grid, antennas) = load_grid(expand_path(map))?;
    let effects = resolve(&antennas);

    if json {
        let doc = serde_json::json!({
            "antennas": antennas,
            "effects": effects,
        });
        println!("{}", doc);
    } else {
        print_set("Effect locations", &effects);
        print_grid("Map with effects", &grid.with_effects(&effects));
    }

    if let Some(out) = out {
        save_grid(expand_path(out), &grid, &effects)?;
        if !json {
            println!("\nWrote {}", out);
        }
    }
    Ok(())
}

fn cmd_demo(map: &str, out: &str) -> GridResult<()> {
    let (grid, antennas) = load_grid(expand_path(map))?;
    print_grid("Map loaded", &grid);
    print_set("Antennas loaded from map", &antennas);

    let effects = resolve(&antennas);
    print_set("Effect locations", &effects);

    let out_path = expand_path(out);
    save_grid(&out_path, &grid, &effects)?;
    let reloaded = TextGridFile::new(&out_path).load()?;
    print_grid("Map with effects reloaded", &reloaded);

    let antennas = DEMO_INSERTS
        .iter()
        .fold(antennas, |set, &(label, x, y)| set.insert(label, x, y));
    print_set("Antennas after insertion", &antennas);

    let (antennas, notices) = antennas.remove_where(&effects);
    for notice in &notices {
        println!("{}", notice);
    }

    let antennas = DEMO_REMOVALS
        .iter()
        .fold(antennas, |set, &(x, y)| set.remove(x, y));
    print_set("Antennas after removal", &antennas);
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Show { map } => cmd_show(&map),
        Commands::Resolve { map, out, json } => cmd_resolve(&map, out.as_deref(), json),
        Commands::Demo { map, out } => cmd_demo(&map, &out),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
