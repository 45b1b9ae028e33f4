// JSON Output Module

use crate::Result;
use crate::error::DiscoveryError;
use crate::scanner::aggregation::ResultMapping;
use std::path::Path;

/// Generate JSON output: an object of hostname -> array of IP strings
pub fn generate_json(mapping: &ResultMapping, pretty: bool) -> Result<String> {
    if pretty {
        Ok(serde_json::to_string_pretty(mapping)?)
    } else {
        Ok(serde_json::to_string(mapping)?)
    }
}

/// Write JSON to file
pub fn write_json_file(mapping: &ResultMapping, path: &Path, pretty: bool) -> Result<()> {
    let json = generate_json(mapping, pretty)?;
    std::fs::write(path, json).map_err(|e| DiscoveryError::fs(path, e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapping() -> ResultMapping {
        let mut mapping = ResultMapping::new();
        mapping.insert(
            "www.example.com".to_string(),
            vec!["93.184.216.34".to_string()],
        );
        mapping.insert(
            "api.example.com".to_string(),
            vec![
                "2606:2800:220:1:248:1893:25c8:1946".to_string(),
                "93.184.216.34".to_string(),
            ],
        );
        mapping
    }

    #[test]
    fn test_json_generation() {
        let json = generate_json(&mapping(), false).unwrap();
        assert_eq!(
            json,
            r#"{"api.example.com":["2606:2800:220:1:248:1893:25c8:1946","93.184.216.34"],"www.example.com":["93.184.216.34"]}"#
        );

        let pretty_json = generate_json(&mapping(), true).unwrap();
        assert!(pretty_json.contains("\n"));
        assert!(pretty_json.contains("\"www.example.com\""));
    }

    #[test]
    fn test_empty_mapping() {
        assert_eq!(generate_json(&ResultMapping::new(), false).unwrap(), "{}");
    }
}
