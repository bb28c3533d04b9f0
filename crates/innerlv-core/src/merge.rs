use std::collections::BTreeMap;

use crate::chart::InternalLv;

/// Combine the three level sources into the final mapping.
///
/// Previously recorded values only fill keys inference did not cover, and
/// manual overrides win over everything. Entries cleared by validation must
/// be omitted from the inputs, never passed through as placeholders.
pub fn merge(
    inferred: &BTreeMap<String, InternalLv>,
    previous: &BTreeMap<String, InternalLv>,
    overrides: &BTreeMap<String, InternalLv>,
) -> BTreeMap<String, InternalLv> {
    let mut result = previous.clone();
    result.extend(inferred.iter().map(|(key, lv)| (key.clone(), *lv)));
    result.extend(overrides.iter().map(|(key, lv)| (key.clone(), *lv)));
    result
}
