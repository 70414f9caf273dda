mod config;

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use config::AppConfig;
use sortify::{RestoreOutcome, SortEngine};
use tablify::{EventTarget, Table};
use tracing::info;
use vaultify::RedbVault;

#[derive(Parser)]
#[command(name = "histoire")]
#[command(about = "Sort file listing snapshots the way the listing page does", long_about = None)]
struct Cli {
    /// Config file (defaults to $HISTOIRE_CONFIG, then ./histoire.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Click a header cell and remember the resulting order
    Click {
        /// Listing snapshot (JSON)
        snapshot: PathBuf,
        /// Physical position of the header cell
        #[arg(long)]
        column: usize,
        /// Number of consecutive clicks
        #[arg(long, default_value_t = 1)]
        times: usize,
        /// Write the sorted snapshot here instead of printing rows
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Replay the remembered order on a freshly loaded snapshot
    Restore {
        /// Listing snapshot (JSON)
        snapshot: PathBuf,
        /// Write the sorted snapshot here instead of printing rows
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Show the remembered order
    State,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init_logger();

    let config = AppConfig::load(cli.config.as_deref())?;
    let vault = RedbVault::from_settings(&config.vault)
        .with_context(|| format!("failed to open vault {}", config.vault.path.display()))?;
    let engine = SortEngine::new(config.sort, vault);

    match cli.command {
        Commands::Click {
            snapshot,
            column,
            times,
            out,
        } => {
            let mut table = load_snapshot(&snapshot)?;
            let target = EventTarget::header(column);
            for _ in 0..times {
                match engine.click(&mut table, &target) {
                    Some(directive) => info!("sorted by {}", directive),
                    None => info!("header {} did not sort", column),
                }
            }
            emit(&table, out)?;
        }
        Commands::Restore { snapshot, out } => {
            let mut table = load_snapshot(&snapshot)?;
            match engine.restore(&mut table) {
                RestoreOutcome::Applied(directive) => info!("restored {}", directive),
                outcome => info!("left as rendered: {:?}", outcome),
            }
            emit(&table, out)?;
        }
        Commands::State => match engine.persistence().load()? {
            Some(directive) => println!("{}", directive),
            None => println!("(none)"),
        },
    }
    Ok(())
}

fn load_snapshot(path: &Path) -> Result<Table> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read snapshot {}", path.display()))?;
    Table::from_json(&raw).with_context(|| format!("failed to parse snapshot {}", path.display()))
}

fn emit(table: &Table, out: Option<PathBuf>) -> Result<()> {
    match out {
        Some(path) => {
            fs::write(&path, table.to_json()?)
                .with_context(|| format!("failed to write snapshot {}", path.display()))?;
            info!("snapshot written to {}", path.display());
        }
        None => print_rows(table),
    }
    Ok(())
}

fn print_rows(table: &Table) {
    let labels: Vec<String> = table
        .header
        .iter()
        .map(|cell| match cell.state {
            Some(direction) => format!("{} [{}]", cell.label, direction),
            None => cell.label.clone(),
        })
        .collect();
    println!("{}", labels.join("\t"));

    for row in &table.body.rows {
        let cells: Vec<&str> = row.cells.iter().map(|cell| cell.text.as_str()).collect();
        println!("{}", cells.join("\t"));
    }
}
