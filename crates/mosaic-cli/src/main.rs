//! mosaic CLI - composes notebook cells into a compilable Go file.

mod decls;
mod lines;
mod report;

use clap::{Parser, Subcommand};
use mosaic_core::Cursor;

#[derive(Parser)]
#[command(name = "mosaic")]
#[command(about = "Compose notebook cells into a compilable Go file")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compose a file from the raw lines of a cell
    Lines {
        /// Path to the cell contents
        cell: String,

        /// Cursor in the cell, as LINE:COL (zero-based)
        #[arg(long)]
        cursor: Option<Cursor>,

        /// Execution directory the composed file is written to
        #[arg(short, long, default_value = ".")]
        dir: String,

        /// Write to this file instead of <dir>/main.go
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Compose a file from parsed declarations (JSON)
    Decls {
        /// Path to the declarations JSON document
        input: String,

        /// Execution directory the composed file is written to
        #[arg(short, long, default_value = ".")]
        dir: String,

        /// Write to this file instead of <dir>/main.go
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        tracing_subscriber::EnvFilter::from_default_env()
            .add_directive(tracing::Level::DEBUG.into())
    } else {
        tracing_subscriber::EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    match cli.command {
        Commands::Lines {
            cell,
            cursor,
            dir,
            output,
        } => lines::execute(&cell, cursor, &dir, output.as_deref())?,

        Commands::Decls { input, dir, output } => {
            decls::execute(&input, &dir, output.as_deref())?;
        }
    }

    Ok(())
}
