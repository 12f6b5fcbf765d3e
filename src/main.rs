use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use marina_cli::fleet::DEFAULT_CAPACITY;
use marina_cli::{shell, storage};

#[derive(Parser)]
#[command(
    name = "marina",
    version,
    about = "Marina boat inventory manager",
    long_about = "Tracks boats, their storage assignments, and outstanding \
                  balances, persisting them to a flat text file between runs. \
                  The file is loaded at startup and written back on exit."
)]
struct Cli {
    /// Path to the boat data file (created on exit if missing)
    file: PathBuf,

    /// Maximum number of boats the marina holds
    #[arg(long, env = "MARINA_CAPACITY", default_value_t = DEFAULT_CAPACITY)]
    capacity: usize,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let report = storage::load_fleet(&cli.file, cli.capacity)
        .with_context(|| format!("failed to load {}", cli.file.display()))?;
    if report.file_missing {
        eprintln!(
            "Could not open {}; starting with an empty inventory",
            cli.file.display()
        );
    }
    for warning in &report.warnings {
        eprintln!("Warning: {}", warning);
    }

    let mut fleet = report.fleet;

    let stdin = io::stdin();
    let stdout = io::stdout();
    shell::run(&mut fleet, &mut stdin.lock(), &mut stdout.lock())?;

    // losing the ability to persist the records is the one unrecoverable
    // error in the system
    storage::save_fleet(&cli.file, &fleet)
        .with_context(|| format!("failed to save {}", cli.file.display()))?;

    Ok(())
}
