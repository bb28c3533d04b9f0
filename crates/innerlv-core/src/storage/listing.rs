use std::fs;
use std::path::Path;

use crate::chart::ScoreRecord;
use crate::error::Result;

/// Load one parsed score listing (the external list parser's JSON output).
pub fn load_listing<P: AsRef<Path>>(path: P) -> Result<Vec<ScoreRecord>> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
