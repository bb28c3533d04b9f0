use crate::chart::Difficulty;

/// Identity key for one chart: category, title, variant and difficulty slot.
///
/// The rendered form is the map key of every persisted mapping. Titles may
/// contain underscores, so rendered keys are compared as opaque strings and
/// never parsed back.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChartKey {
    pub category: u32,
    pub title: String,
    pub deluxe: bool,
    pub difficulty: Difficulty,
}

impl ChartKey {
    pub fn new(category: u32, title: impl Into<String>, deluxe: bool, difficulty: Difficulty) -> Self {
        Self {
            category,
            title: title.into(),
            deluxe,
            difficulty,
        }
    }

    /// Canonical string form: `{category}_{title}_{t|f}_{difficulty index}`.
    pub fn render(&self) -> String {
        format!(
            "{}_{}_{}_{}",
            self.category,
            self.title,
            if self.deluxe { "t" } else { "f" },
            self.difficulty.index()
        )
    }
}
