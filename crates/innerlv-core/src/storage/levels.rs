use std::collections::BTreeMap;
use std::fs;
use std::io::Write as _;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::chart::InternalLv;
use crate::error::{Error, Result};

/// Load a persisted level mapping (identity key to internal level).
///
/// The manual override mapping shares this shape and loader.
pub fn load_levels<P: AsRef<Path>>(path: P) -> Result<BTreeMap<String, InternalLv>> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Write a level mapping as pretty JSON, atomically.
///
/// The content lands in a temp file next to the destination and is renamed
/// over it, so an aborted run never leaves a torn mapping behind.
pub fn save_levels<P: AsRef<Path>>(path: P, levels: &BTreeMap<String, InternalLv>) -> Result<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(levels)?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(json.as_bytes())?;
    file.write_all(b"\n")?;
    file.persist(path).map_err(|e| Error::PersistFailed {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("levels.json");

        let mut levels = BTreeMap::new();
        levels.insert("3_Link_f_3".to_string(), InternalLv::from_scaled(121));
        levels.insert("7_Valsqotch_f_3".to_string(), InternalLv::from_scaled(138));

        save_levels(&path, &levels).unwrap();
        let loaded = load_levels(&path).unwrap();
        assert_eq!(loaded, levels);

        // The temp file must be gone; only the destination remains.
        let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_save_overwrites_previous() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("levels.json");

        let first = BTreeMap::from([("a".to_string(), InternalLv::from_scaled(100))]);
        let second = BTreeMap::from([("b".to_string(), InternalLv::from_scaled(101))]);

        save_levels(&path, &first).unwrap();
        save_levels(&path, &second).unwrap();
        assert_eq!(load_levels(&path).unwrap(), second);
    }

    #[test]
    fn test_load_missing_is_fatal() {
        assert!(load_levels("no/such/file.json").is_err());
    }
}
