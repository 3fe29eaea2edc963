//! Daily puzzle solver CLI.
//!
//! Reads a puzzle grid from stdin (or a file), runs the matching Prism
//! engine, and prints a JSON result of the form
//! `{"part1": ..., "part2": ..., "additional-info": {...}}` on stdout.

mod logging;
mod solve;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "prism",
    version,
    about = "Grid-puzzle solvers emitting JSON results"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Beam propagation puzzle: count distinct splitter activations.
    Beam {
        /// Input file; stdin when absent.
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
    /// Roll accessibility puzzle: single-pass survey plus iterative
    /// removal.
    Rolls {
        /// Input file; stdin when absent.
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
}

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let report = match cli.command {
        Command::Beam { input } => solve::beam(&read_input(input.as_deref())?)?,
        Command::Rolls { input } => solve::rolls(&read_input(input.as_deref())?)?,
    };
    println!("{}", serde_json::to_string(&report)?);
    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("read {}", path.display()))
        }
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("read stdin")?;
            Ok(text)
        }
    }
}
