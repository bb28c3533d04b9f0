//! Export command implementation.
//!
//! Shapes the upper-bracket charts into the review sheet, prefilled with
//! the recorded levels so the curator only touches what changed.

use std::collections::HashSet;
use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use innerlv_core::{
    build_review_rows, load_levels, load_listing, write_review_csv, NoveltyIndex,
    REVIEW_DIFFICULTIES,
};

pub fn run(assets: &Path, levels: &Path, out: &Path) -> Result<()> {
    let previous = load_levels(levels).context("loading the recorded mapping")?;

    let newest = load_listing(assets.join("listings/newest.json"))
        .context("loading the newest-release listing")?;
    let novelty = NoveltyIndex::from_listing(&newest, HashSet::new());

    let mut listings = Vec::new();
    for difficulty in REVIEW_DIFFICULTIES {
        let path = assets.join(format!("listings/{}.json", difficulty.short_name()));
        let records = load_listing(&path)
            .with_context(|| format!("loading the {} listing", difficulty))?;
        listings.push(records);
    }

    let rows = build_review_rows(&listings, &previous, &novelty);
    let file = File::create(out)
        .with_context(|| format!("creating {}", out.display()))?;
    write_review_csv(file, &rows)?;
    info!("Wrote {} review rows to {}", rows.len(), out.display());

    Ok(())
}
