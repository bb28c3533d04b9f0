use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Historical version index: version label to the identity keys that
/// release introduced.
///
/// Membership of the flattened set is what marks an entry as legacy; an
/// entry on neither this index nor the newest-release listing is dropped
/// as out-of-scope.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VersionIndex {
    versions: BTreeMap<String, Vec<String>>,
}

impl VersionIndex {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// All known legacy keys across every version.
    pub fn flatten(&self) -> HashSet<String> {
        self.versions
            .values()
            .flat_map(|keys| keys.iter().cloned())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.versions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }
}
