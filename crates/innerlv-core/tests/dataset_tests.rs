//! Dataset assembly tests: persistence, version index, merge precedence.

use std::collections::BTreeMap;
use std::fs;

use innerlv_core::{
    infer, load_levels, merge, save_levels, CategoryMap, Difficulty, InferConfig, InternalLv,
    Level, NoveltyIndex, ScoreRecord, VersionIndex,
};

fn record(title: &str, category: u32) -> ScoreRecord {
    ScoreRecord {
        title: title.to_string(),
        category,
        difficulty: Difficulty::Master,
        deluxe: false,
        level: None,
    }
}

#[test]
fn fill_pipeline_produces_persistable_mapping() {
    let dir = tempfile::tempdir().unwrap();

    // Version index marks one legacy chart; the newest listing one new title.
    let versions_path = dir.path().join("versions.json");
    fs::write(
        &versions_path,
        r#"{"FESTiVAL": ["2_older song_f_3"]}"#,
    )
    .unwrap();
    let versions = VersionIndex::load(&versions_path).unwrap();

    let reference = vec![record("older song", 2), record("newer song", 3)];
    let (categories, _) = CategoryMap::build(&reference, "Link");
    let novelty = NoveltyIndex::from_listing(&[record("newer song", 3)], versions.flatten());

    let listings = vec![(Level::Lv14, reference.clone())];
    let inference = infer(&listings, &categories, &novelty, &InferConfig::default()).unwrap();
    assert_eq!(inference.levels.len(), 2);

    // Manual override pins the newer song down half a bucket up.
    let overrides = BTreeMap::from([(
        "3_newer song_f_3".to_string(),
        InternalLv::from_scaled(141),
    )]);
    let previous = BTreeMap::from([(
        "9_gone song_f_3".to_string(),
        InternalLv::from_scaled(140),
    )]);

    let merged = merge(&inference.levels, &previous, &overrides);
    assert_eq!(merged["2_older song_f_3"], InternalLv::from_scaled(140));
    assert_eq!(merged["3_newer song_f_3"], InternalLv::from_scaled(141));
    assert_eq!(merged["9_gone song_f_3"], InternalLv::from_scaled(140));

    let out_path = dir.path().join("internal_lvs.json");
    save_levels(&out_path, &merged).unwrap();
    assert_eq!(load_levels(&out_path).unwrap(), merged);
}

#[test]
fn merge_is_stable_under_repeat() {
    let inferred = BTreeMap::from([("a".to_string(), InternalLv::from_scaled(127))]);
    let previous = BTreeMap::from([("a".to_string(), InternalLv::from_scaled(120))]);
    let overrides = BTreeMap::new();

    let first = merge(&inferred, &previous, &overrides);
    let second = merge(&first, &previous, &overrides);
    assert_eq!(first, second);
    assert_eq!(first["a"], InternalLv::from_scaled(127));
}

#[test]
fn persisted_mapping_is_sorted_and_pretty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("levels.json");

    let levels = BTreeMap::from([
        ("2_b_f_3".to_string(), InternalLv::from_scaled(130)),
        ("1_a_t_4".to_string(), InternalLv::from_scaled(146)),
    ]);
    save_levels(&path, &levels).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    let a = text.find("1_a_t_4").unwrap();
    let b = text.find("2_b_f_3").unwrap();
    assert!(a < b, "keys must be written in sorted order");
    assert!(text.contains("14.6"));
    assert!(text.contains('\n'));
}
