// Input processing module
// Reads candidate hostnames from local files

use crate::Result;
use crate::error::DiscoveryError;
use std::path::Path;

/// Read raw candidate names from a file
///
/// One name per line; blank lines and `#` comments are skipped. Names are
/// returned trimmed but otherwise untouched, normalization happens later.
pub fn read_candidates_file(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path).map_err(|e| DiscoveryError::fs(path, e))?;
    Ok(parse_candidates(&content))
}

/// Split file content into candidate lines
pub fn parse_candidates(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(String::from)
        .collect()
}
