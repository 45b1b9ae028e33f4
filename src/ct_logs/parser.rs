// crt.sh Response Parser
//
// Extracts candidate names from the aggregator's JSON output

use super::Result;
use crate::error::DiscoveryError;
use serde::Deserialize;

/// One certificate record as returned by crt.sh
///
/// Only `name_value` is needed; every other field is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct CrtShRecord {
    /// Newline-delimited list of names covered by the certificate
    #[serde(default)]
    pub name_value: String,
}

impl CrtShRecord {
    /// Non-empty, trimmed lines of `name_value`
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.name_value
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
    }
}

/// Parse a crt.sh JSON body into raw candidate names
///
/// Names are returned as found (not normalized, not deduplicated).
pub fn parse_response(body: &str) -> Result<Vec<String>> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    let records: Vec<CrtShRecord> =
        serde_json::from_str(trimmed).map_err(|e| DiscoveryError::ParseError {
            message: format!("Failed to parse crt.sh response: {}", e),
        })?;

    Ok(records
        .iter()
        .flat_map(|record| record.names())
        .map(String::from)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_multiline_name_value() {
        let body = r#"[
            {"issuer_ca_id": 1, "name_value": "example.com\n*.example.com", "id": 10},
            {"name_value": "api.example.com\r\n\nwww.example.com "}
        ]"#;

        let names = parse_response(body).unwrap();
        assert_eq!(
            names,
            vec![
                "example.com",
                "*.example.com",
                "api.example.com",
                "www.example.com"
            ]
        );
    }

    #[test]
    fn test_parse_empty_bodies() {
        assert!(parse_response("").unwrap().is_empty());
        assert!(parse_response("[]").unwrap().is_empty());
    }

    #[test]
    fn test_missing_name_value_is_skipped() {
        let names = parse_response(r#"[{"common_name": "example.com"}]"#).unwrap();
        assert!(names.is_empty());
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = parse_response("<html>502 Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, DiscoveryError::ParseError { .. }));
    }
}
