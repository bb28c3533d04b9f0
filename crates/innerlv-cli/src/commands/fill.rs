//! Fill command implementation.
//!
//! The main inference pass: build the category map from the reference
//! listing, walk every bracket listing in ladder order, keep entries worth
//! retaining, merge with the previous run and the manual overrides, and
//! persist the result. An overflow aborts before anything is written.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use innerlv_core::{
    format_run_summary, infer, load_levels, load_listing, merge, save_levels, CategoryMap,
    InferConfig, Level, NoveltyIndex, VersionIndex,
};

pub fn run(assets: &Path, out: &Path, force_gaps: Vec<String>) -> Result<()> {
    let config = InferConfig {
        force_gaps: force_gaps.into_iter().collect(),
        ..InferConfig::default()
    };

    let reference = load_listing(assets.join("listings/master.json"))
        .context("loading the reference listing")?;
    let (categories, mut warnings) = CategoryMap::build(&reference, &config.collision_title);
    info!("Category map holds {} titles", categories.len());

    let newest = load_listing(assets.join("listings/newest.json"))
        .context("loading the newest-release listing")?;
    let versions = VersionIndex::load(assets.join("versions.json"))
        .context("loading the version index")?;
    let novelty = NoveltyIndex::from_listing(&newest, versions.flatten());

    let mut listings = Vec::new();
    for level in Level::LADDER {
        let path = assets.join(format!("listings/lv/{}.json", level.file_stem()));
        let records = load_listing(&path)
            .with_context(|| format!("loading the {} listing", level))?;
        info!("Level {} listing holds {} entries", level, records.len());
        listings.push((level, records));
    }

    let inference = infer(&listings, &categories, &novelty, &config)?;
    warnings.extend(inference.warnings);

    let overrides = load_levels(assets.join("manual.json"))
        .context("loading the manual override mapping")?;
    let previous = if out.exists() {
        load_levels(out).context("loading the previous mapping")?
    } else {
        BTreeMap::new()
    };

    let merged = merge(&inference.levels, &previous, &overrides);
    save_levels(out, &merged)?;
    info!("Wrote {} entries to {}", merged.len(), out.display());

    print!("{}", format_run_summary(merged.len(), &warnings));
    Ok(())
}
