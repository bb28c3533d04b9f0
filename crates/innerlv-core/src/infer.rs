//! Ordinal inference over bracket listings.
//!
//! The upstream site orders each bracket's charts by internal level, then by
//! category. Walking a listing in order, a drop in the resolved category id
//! is the signal that the listing moved on to the next internal-level
//! bucket. That is enough to reconstruct every value in the bracket from
//! position alone.

use std::collections::{BTreeMap, HashSet};

use tracing::warn;

use crate::category::CategoryMap;
use crate::chart::{ChartKey, InternalLv, Level, ScoreRecord};
use crate::error::{Error, Result};
use crate::novelty::NoveltyIndex;

/// Knobs for one inference pass.
#[derive(Debug, Clone)]
pub struct InferConfig {
    /// The one title known to recur across categories. It cannot be looked
    /// up, so it takes the previous entry's resolved category instead.
    pub collision_title: String,
    /// Titles that force a step to the next bucket even without a category
    /// regression, for listings where two buckets happen to share an
    /// ascending category run.
    pub force_gaps: HashSet<String>,
}

impl Default for InferConfig {
    fn default() -> Self {
        Self {
            collision_title: "Link".to_string(),
            force_gaps: HashSet::new(),
        }
    }
}

/// Result of an inference pass over all bracket listings.
#[derive(Debug, Default)]
pub struct Inference {
    /// Rendered identity key to inferred level.
    pub levels: BTreeMap<String, InternalLv>,
    /// Human-readable diagnostics the run continued past.
    pub warnings: Vec<String>,
}

impl Inference {
    fn warn(&mut self, message: String) {
        warn!("{message}");
        self.warnings.push(message);
    }
}

/// Infer internal levels for every bracket listing, in ladder order.
///
/// Only overflow is fatal: a bracket that steps onto the next bracket's base
/// value proves the listing (or the force-gap set) is wrong, and the whole
/// run is abandoned so nothing half-filled gets persisted.
pub fn infer(
    listings: &[(Level, Vec<ScoreRecord>)],
    categories: &CategoryMap,
    novelty: &NoveltyIndex,
    config: &InferConfig,
) -> Result<Inference> {
    let mut outcome = Inference::default();
    for (level, records) in listings {
        infer_bracket(*level, records, categories, novelty, config, &mut outcome)?;
    }
    Ok(outcome)
}

fn infer_bracket(
    level: Level,
    records: &[ScoreRecord],
    categories: &CategoryMap,
    novelty: &NoveltyIndex,
    config: &InferConfig,
    outcome: &mut Inference,
) -> Result<()> {
    let mut current = level.base();
    let next_base = level.next_base();
    let mut tracked_category: u32 = 1;

    for (position, record) in records.iter().enumerate() {
        let category = if record.title == config.collision_title {
            // Carry-forward heuristic: only sound when the predecessor's
            // category matches the colliding chart's true one. A leading
            // occurrence has no predecessor, so flag it for review.
            if position == 0 {
                outcome.warn(format!(
                    "Colliding title \"{}\" leads the {} listing; its carried category is a guess",
                    record.title, level
                ));
            }
            tracked_category
        } else {
            match categories.get(&record.title) {
                Some(category) => category,
                None => {
                    outcome.warn(format!(
                        "Song \"{}\" not found in category map, skipping",
                        record.title
                    ));
                    continue;
                }
            }
        };

        if category < tracked_category || config.force_gaps.contains(&record.title) {
            current += 1;
            if next_base == Some(current) {
                return Err(Error::LevelOverflow {
                    level,
                    title: record.title.clone(),
                });
            }
        }

        let key = ChartKey::new(category, record.title.clone(), record.deluxe, record.difficulty);
        if novelty.retains(&key) {
            outcome.levels.insert(key.render(), InternalLv::from_scaled(current));
        }
        tracked_category = category;
    }

    // Never reaching the last bucket of a bracket usually means the site
    // merged two buckets, or a force gap is missing. Worth a human look.
    if let Some(next_base) = next_base {
        if current < next_base - 1 {
            outcome.warn(format!(
                "Level {} still has a gap after filling (stopped at {})",
                level,
                InternalLv::from_scaled(current)
            ));
        }
    }

    Ok(())
}
