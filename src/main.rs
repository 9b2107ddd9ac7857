//! Travel Matrix - Command Line Interface
//!
//! Create, edit, inspect and merge labeled distance tables stored as JSON.

use clap::{Parser, Subcommand};
use log::{info, warn};
use travel_matrix::matrix::{LabeledDistanceTable, DEFAULT_ZERO};

use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "travel-matrix")]
#[command(version = "1.0")]
#[command(about = "Build and check pairwise travel-cost tables for route optimizers")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an empty table over a set of locations
    New {
        /// Comma-separated location labels
        #[arg(short, long, value_delimiter = ',', required = true)]
        labels: Vec<String>,

        /// Self-distance written on the diagonal
        #[arg(short, long, default_value_t = DEFAULT_ZERO)]
        zero: i32,

        /// Output file
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Set the cost between two locations (both directions)
    Set {
        #[arg(short, long)]
        table: PathBuf,

        #[arg(long)]
        from: String,

        #[arg(long)]
        to: String,

        /// Cost to store; omit to clear the cell
        #[arg(long)]
        value: Option<i32>,
    },

    /// Print the cost between two locations
    Get {
        #[arg(short, long)]
        table: PathBuf,

        #[arg(long)]
        from: String,

        #[arg(long)]
        to: String,
    },

    /// Report whether a table is complete and consistent
    Check {
        #[arg(short, long)]
        table: PathBuf,

        /// List every missing cell and unbalanced pair
        #[arg(short, long)]
        verbose: bool,
    },

    /// Merge two tables; the left table wins where both define a cost
    Merge {
        #[arg(short, long)]
        left: PathBuf,

        #[arg(short, long)]
        right: PathBuf,

        #[arg(short, long)]
        output: PathBuf,
    },
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::New { labels, zero, output } => create_table(labels, zero, &output),
        Commands::Set { table, from, to, value } => set_cost(&table, &from, &to, value),
        Commands::Get { table, from, to } => get_cost(&table, &from, &to),
        Commands::Check { table, verbose } => check_table(&table, verbose),
        Commands::Merge { left, right, output } => merge_tables(&left, &right, &output),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn load_table(path: &Path) -> Result<LabeledDistanceTable, String> {
    let json = fs::read_to_string(path)
        .map_err(|e| format!("Cannot open {:?}: {}", path, e))?;
    serde_json::from_str(&json)
        .map_err(|e| format!("Invalid table in {:?}: {}", path, e))
}

fn save_table(table: &LabeledDistanceTable, path: &Path) -> Result<(), String> {
    let json = serde_json::to_string_pretty(table)
        .map_err(|e| format!("Serialization error: {}", e))?;
    fs::write(path, json)
        .map_err(|e| format!("Cannot write {:?}: {}", path, e))?;
    info!("Saved {} locations to {:?}", table.len(), path);
    Ok(())
}

fn create_table(labels: Vec<String>, zero: i32, output: &Path) -> Result<(), String> {
    let requested = labels.len();
    let table = LabeledDistanceTable::with_zero(labels, zero);
    if table.len() != requested {
        warn!("{} duplicate or empty labels dropped", requested - table.len());
    }
    save_table(&table, output)?;
    println!("Created {}x{} table: {}", table.len(), table.len(), table.labels().join(", "));
    Ok(())
}

fn set_cost(path: &Path, from: &str, to: &str, value: Option<i32>) -> Result<(), String> {
    let mut table = load_table(path)?;
    table.set(from, to, value).map_err(|e| e.to_string())?;
    save_table(&table, path)
}

fn get_cost(path: &Path, from: &str, to: &str) -> Result<(), String> {
    let table = load_table(path)?;
    match table.get(from, to).map_err(|e| e.to_string())? {
        Some(cost) => println!("{}", cost),
        None => println!("unset"),
    }
    Ok(())
}

fn check_table(path: &Path, verbose: bool) -> Result<(), String> {
    let table = load_table(path)?;
    let report = table.audit();
    println!("{}", report);

    if verbose {
        for (from, to) in &report.missing {
            println!("  missing: {} -> {}", from, to);
        }
        for (from, to) in &report.unbalanced {
            println!("  unbalanced: {} <-> {}", from, to);
        }
    }

    if !report.is_ready() {
        warn!("{:?} is not ready for optimization", path);
        std::process::exit(1);
    }
    Ok(())
}

fn merge_tables(left: &Path, right: &Path, output: &Path) -> Result<(), String> {
    let a = load_table(left)?;
    let b = load_table(right)?;
    let merged = a.merge(&b).map_err(|e| e.to_string())?;
    save_table(&merged, output)?;

    println!(
        "Merged {} + {} locations into {} (ready: {})",
        a.len(),
        b.len(),
        merged.len(),
        merged.is_ready()
    );
    Ok(())
}
