// File: crates/demo/src/main.rs
// Summary: `fitchart` entry point: logging setup and command dispatch.

use std::io;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use fitchart::cli::{Cli, Command};
use fitchart::commands;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).try_init();

    match cli.command {
        Command::Render(args) => {
            let report = commands::render(&args)?;
            for path in &report.written {
                println!("Wrote {}", path.display());
            }
            for (field, reason) in &report.skipped {
                println!("Skipped {field}: {reason}");
            }
        }
        Command::Inspect(args) => {
            let report = commands::inspect(&args)?;
            print!("{report}");
        }
    }
    Ok(())
}
