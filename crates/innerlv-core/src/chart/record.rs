use serde::{Deserialize, Serialize};

use crate::chart::{ChartKey, Difficulty, Level};

/// One score-list entry as emitted by the external list parser.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub title: String,
    pub category: u32,
    pub difficulty: Difficulty,
    pub deluxe: bool,
    /// Bracket the entry was listed under. Difficulty-page listings carry
    /// it per record; bracket-page listings imply it from the file instead.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<Level>,
}

impl ScoreRecord {
    /// Identity key under the record's own category field.
    ///
    /// Only meaningful for listings whose category column is trustworthy;
    /// bracket listings resolve categories through the category map instead.
    pub fn key(&self) -> ChartKey {
        ChartKey::new(self.category, self.title.clone(), self.deluxe, self.difficulty)
    }
}
