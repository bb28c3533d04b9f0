use std::collections::BTreeMap;
use std::io::{Read, Write};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::chart::{ChartKey, Difficulty, InternalLv, Level, ScoreRecord};
use crate::error::Result;
use crate::novelty::NoveltyIndex;
use crate::validate::check_quantization;

/// Brackets worth a manual review pass.
pub const REVIEW_LEVELS: [Level; 6] = [
    Level::Lv12Plus,
    Level::Lv13,
    Level::Lv13Plus,
    Level::Lv14,
    Level::Lv14Plus,
    Level::Lv15,
];

/// Difficulty listings the review sheet is built from.
pub const REVIEW_DIFFICULTIES: [Difficulty; 3] =
    [Difficulty::Expert, Difficulty::Master, Difficulty::ReMaster];

/// One row of the review sheet, in its wire form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewRow {
    pub level: Level,
    pub category: u32,
    pub title: String,
    /// "dx" or "std".
    pub deluxe: String,
    /// Difficulty short name ("bsc" through "rem").
    pub difficulty: String,
    pub internal_lv: Option<f64>,
    /// "Y" when the title is on the newest-release listing, empty otherwise.
    pub new: String,
}

impl ReviewRow {
    fn from_record(
        record: &ScoreRecord,
        level: Level,
        previous: &BTreeMap<String, InternalLv>,
        novelty: &NoveltyIndex,
    ) -> Self {
        let key = record.key();
        Self {
            level,
            category: record.category,
            title: record.title.clone(),
            deluxe: if record.deluxe { "dx" } else { "std" }.to_string(),
            difficulty: record.difficulty.short_name().to_string(),
            internal_lv: previous.get(&key.render()).map(|lv| lv.value()),
            new: if novelty.is_new_title(&record.title) { "Y" } else { "" }.to_string(),
        }
    }

    fn chart_key(&self) -> Option<ChartKey> {
        let difficulty: Difficulty = self.difficulty.parse().ok()?;
        Some(ChartKey::new(
            self.category,
            process_title(&self.title),
            self.deluxe == "dx",
            difficulty,
        ))
    }
}

/// One catalog title is a bare ideographic space; spreadsheet editors strip
/// it to an empty cell, so restore it on the way back in.
fn process_title(title: &str) -> &str {
    if title.is_empty() { "\u{3000}" } else { title }
}

/// Build review rows from the difficulty-page listings.
///
/// Categories on these listings are trustworthy, so the row key comes from
/// the record itself. Previously recorded levels ride along for the curator
/// to correct; unknown ones stay blank.
pub fn build_review_rows(
    listings: &[Vec<ScoreRecord>],
    previous: &BTreeMap<String, InternalLv>,
    novelty: &NoveltyIndex,
) -> Vec<ReviewRow> {
    let mut rows = Vec::new();
    for records in listings {
        for record in records {
            let Some(level) = record.level else { continue };
            if REVIEW_LEVELS.contains(&level) {
                rows.push(ReviewRow::from_record(record, level, previous, novelty));
            }
        }
    }
    rows
}

pub fn write_review_csv<W: Write>(writer: W, rows: &[ReviewRow]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn read_review_csv<R: Read>(reader: R) -> Result<Vec<ReviewRow>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut rows = Vec::new();
    for row in csv_reader.deserialize() {
        rows.push(row?);
    }
    Ok(rows)
}

/// Outcome of reading the curated sheet back.
#[derive(Debug, Default)]
pub struct Finalized {
    pub levels: BTreeMap<String, InternalLv>,
    pub warnings: Vec<String>,
    /// Rows that came back with no value at all.
    pub missing: usize,
}

/// Validate a curated sheet and shape it into a level mapping.
///
/// A value outside its bracket's quantized set is cleared, reported, and
/// the row is omitted; a row without a value never enters the mapping.
pub fn finalize_rows(rows: &[ReviewRow]) -> Finalized {
    let mut finalized = Finalized::default();

    for row in rows {
        let Some(value) = row.internal_lv else {
            finalized.missing += 1;
            continue;
        };

        let candidate = InternalLv::from_value_exact(value)
            .filter(|lv| check_quantization(row.level, *lv));
        let Some(lv) = candidate else {
            let message = format!(
                "Internal level does not match for \"{}\": {} vs {}",
                row.title,
                row.level,
                value
            );
            warn!("{message}");
            finalized.warnings.push(message);
            continue;
        };

        let Some(key) = row.chart_key() else {
            let message = format!(
                "Unknown difficulty \"{}\" for \"{}\", dropping row",
                row.difficulty, row.title
            );
            warn!("{message}");
            finalized.warnings.push(message);
            continue;
        };

        finalized.levels.insert(key.render(), lv);
    }

    finalized
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(level: Level, title: &str, internal_lv: Option<f64>) -> ReviewRow {
        ReviewRow {
            level,
            category: 7,
            title: title.to_string(),
            deluxe: "std".to_string(),
            difficulty: "mas".to_string(),
            internal_lv,
            new: String::new(),
        }
    }

    #[test]
    fn test_finalize_accepts_legal_value() {
        let finalized = finalize_rows(&[row(Level::Lv12Plus, "Caliburne", Some(12.7))]);
        assert!(finalized.warnings.is_empty());
        assert_eq!(
            finalized.levels.get("7_Caliburne_f_3"),
            Some(&InternalLv::from_scaled(127))
        );
    }

    #[test]
    fn test_finalize_clears_mismatch() {
        let finalized = finalize_rows(&[row(Level::Lv12Plus, "Caliburne", Some(12.3))]);
        assert!(finalized.levels.is_empty());
        assert_eq!(finalized.warnings.len(), 1);
        assert!(finalized.warnings[0].contains("Caliburne"));
        assert!(finalized.warnings[0].contains("12+"));
        assert!(finalized.warnings[0].contains("12.3"));
    }

    #[test]
    fn test_finalize_counts_missing() {
        let finalized = finalize_rows(&[
            row(Level::Lv13, "a", None),
            row(Level::Lv13, "b", Some(13.2)),
            row(Level::Lv14, "c", None),
        ]);
        assert_eq!(finalized.missing, 2);
        assert_eq!(finalized.levels.len(), 1);
    }

    #[test]
    fn test_finalize_restores_blank_title() {
        let finalized = finalize_rows(&[row(Level::Lv13, "", Some(13.1))]);
        assert_eq!(
            finalized.levels.get("7_\u{3000}_f_3"),
            Some(&InternalLv::from_scaled(131))
        );
    }

    #[test]
    fn test_finalize_rejects_extra_precision() {
        let finalized = finalize_rows(&[row(Level::Lv13, "x", Some(13.25))]);
        assert!(finalized.levels.is_empty());
        assert_eq!(finalized.warnings.len(), 1);
    }

    #[test]
    fn test_csv_round_trip() {
        let rows = vec![
            row(Level::Lv14, "PANDORA PARADOXXX", Some(14.4)),
            row(Level::Lv12Plus, "no value yet", None),
        ];

        let mut buffer = Vec::new();
        write_review_csv(&mut buffer, &rows).unwrap();
        let text = String::from_utf8(buffer.clone()).unwrap();
        assert!(text.starts_with("level,category,title,deluxe,difficulty,internal_lv,new"));

        let back = read_review_csv(buffer.as_slice()).unwrap();
        assert_eq!(back.len(), 2);
        assert_eq!(back[0].level, Level::Lv14);
        assert_eq!(back[0].internal_lv, Some(14.4));
        assert_eq!(back[1].internal_lv, None);
    }
}
