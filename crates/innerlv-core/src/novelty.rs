use std::collections::HashSet;

use crate::chart::{ChartKey, ScoreRecord};

/// Decides which charts belong in the persisted dataset.
///
/// A chart is retained when its title is on the newest-release listing, or
/// its identity key was introduced by a past version on record. Anything
/// else is out-of-scope content, typically region exclusives.
#[derive(Debug, Clone, Default)]
pub struct NoveltyIndex {
    new_titles: HashSet<String>,
    legacy_keys: HashSet<String>,
}

impl NoveltyIndex {
    pub fn new(new_titles: HashSet<String>, legacy_keys: HashSet<String>) -> Self {
        Self {
            new_titles,
            legacy_keys,
        }
    }

    /// Build from the newest-release listing plus the flattened version index.
    pub fn from_listing(newest: &[ScoreRecord], legacy_keys: HashSet<String>) -> Self {
        let new_titles = newest.iter().map(|record| record.title.clone()).collect();
        Self::new(new_titles, legacy_keys)
    }

    pub fn retains(&self, key: &ChartKey) -> bool {
        self.new_titles.contains(&key.title) || self.legacy_keys.contains(&key.render())
    }

    pub fn is_new_title(&self, title: &str) -> bool {
        self.new_titles.contains(title)
    }
}
