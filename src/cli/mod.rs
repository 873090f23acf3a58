//! CLI commands for dg.

pub mod input;
pub mod output;

use crate::error::Result;
use crate::graph::{has_cycle, topological_sort, DiGraph};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

/// dg — directed-graph toolkit
#[derive(Parser)]
#[command(name = "dg")]
#[command(about = "Cycle detection and topological sorting over edge lists", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show vertex and edge counts plus the edge list
    Info {
        /// Edge-list file, or `-` for stdin
        file: PathBuf,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Report whether the graph contains a directed cycle
    Check {
        /// Edge-list file, or `-` for stdin
        file: PathBuf,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Print the vertices in topological order
    Sort {
        /// Edge-list file, or `-` for stdin
        file: PathBuf,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

/// Run the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Info { file, json } => cmd_info(&file, json),
        Commands::Check { file, json } => cmd_check(&file, json),
        Commands::Sort { file, json } => cmd_sort(&file, json),
    }
}

fn load(file: &Path) -> Result<DiGraph> {
    let text = input::read_source(file)?;
    input::parse_edge_list(&text)
}

fn cmd_info(file: &Path, json: bool) -> Result<()> {
    let graph = load(file)?;
    output::print_info(&graph, json)
}

fn cmd_check(file: &Path, json: bool) -> Result<()> {
    let graph = load(file)?;
    let cyclic = has_cycle(&graph);
    output::print_check(cyclic, json)?;
    if cyclic {
        // Verdict is also reported through the exit code.
        std::process::exit(1);
    }
    Ok(())
}

fn cmd_sort(file: &Path, json: bool) -> Result<()> {
    let graph = load(file)?;
    let order = topological_sort(&graph)?;
    output::print_sort(&order, json)
}
