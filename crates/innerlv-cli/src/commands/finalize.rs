//! Finalize command implementation.
//!
//! Reads the curated review sheet back, clears values that fail the
//! bracket quantization check, and persists the surviving mapping.

use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use innerlv_core::{finalize_rows, format_run_summary, read_review_csv, save_levels};

pub fn run(csv: &Path, out: &Path) -> Result<()> {
    let file = File::open(csv).with_context(|| format!("opening {}", csv.display()))?;
    let rows = read_review_csv(file)?;
    info!("Read {} review rows", rows.len());

    let finalized = finalize_rows(&rows);
    info!("{} rows have no internal level", finalized.missing);

    save_levels(out, &finalized.levels)?;
    info!(
        "Wrote {} entries to {}",
        finalized.levels.len(),
        out.display()
    );

    print!("{}", format_run_summary(finalized.levels.len(), &finalized.warnings));
    Ok(())
}
