use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "innerlv")]
#[command(about = "Internal-level dataset tools for the song catalog", version)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Infer internal levels from bracket listings and merge the dataset
    Fill {
        /// Directory holding listings and support files
        #[arg(short, long, default_value = "assets")]
        assets: PathBuf,

        /// Output mapping; also read back as the previous run's values
        #[arg(short, long, default_value = "assets/internal_lvs.json")]
        out: PathBuf,

        /// Title that must step to the next bucket (repeatable)
        #[arg(long = "force-gap", value_name = "TITLE")]
        force_gaps: Vec<String>,
    },
    /// Write the review sheet for manual curation
    Export {
        /// Directory holding listings and support files
        #[arg(short, long, default_value = "assets")]
        assets: PathBuf,

        /// Previously recorded mapping to prefill the sheet from
        #[arg(short, long)]
        levels: PathBuf,

        /// Review sheet to write
        #[arg(short, long, default_value = "review.csv")]
        out: PathBuf,
    },
    /// Read a curated review sheet back into a level mapping
    Finalize {
        /// Curated review sheet
        #[arg(short, long, default_value = "review.csv")]
        csv: PathBuf,

        /// Output mapping
        #[arg(short, long)]
        out: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("innerlv=info".parse()?)
                .add_directive("innerlv_core=info".parse()?),
        )
        .init();

    let args = Args::parse();

    match args.command {
        Command::Fill {
            assets,
            out,
            force_gaps,
        } => commands::fill::run(&assets, &out, force_gaps),
        Command::Export { assets, levels, out } => commands::export::run(&assets, &levels, &out),
        Command::Finalize { csv, out } => commands::finalize::run(&csv, &out),
    }
}
