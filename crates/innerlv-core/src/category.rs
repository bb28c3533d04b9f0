use std::collections::HashMap;

use tracing::warn;

use crate::chart::ScoreRecord;

/// Title to category-id lookup built from the reference listing.
///
/// Category ids are only trustworthy on the reference listing; bracket
/// listings deliberately ignore their own category column and resolve
/// titles through this map.
#[derive(Debug, Clone, Default)]
pub struct CategoryMap {
    map: HashMap<String, u32>,
}

impl CategoryMap {
    /// Walk the reference listing in order, keeping the first-seen category
    /// per title. A later conflicting occurrence is reported unless it is
    /// the known colliding title, which recurs across categories upstream
    /// and is resolved elsewhere by carry-forward.
    pub fn build(records: &[ScoreRecord], collision_title: &str) -> (Self, Vec<String>) {
        let mut map: HashMap<String, u32> = HashMap::new();
        let mut warnings = Vec::new();

        for record in records {
            match map.get(&record.title) {
                Some(&previous) if previous != record.category => {
                    if record.title != collision_title {
                        let message = format!(
                            "Title collision: \"{}\" already in category {}, listing proposes {}",
                            record.title, previous, record.category
                        );
                        warn!("{message}");
                        warnings.push(message);
                    }
                }
                Some(_) => {}
                None => {
                    map.insert(record.title.clone(), record.category);
                }
            }
        }

        (Self { map }, warnings)
    }

    pub fn get(&self, title: &str) -> Option<u32> {
        self.map.get(title).copied()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
