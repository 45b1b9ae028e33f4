// Output module - Output formatting (JSON, CSV, Terminal)

pub mod csv;
pub mod json;
pub mod terminal;

use crate::Result;
use crate::scanner::aggregation::ResultMapping;
use crate::scanner::config::OutputConfig;
use std::path::PathBuf;
use tracing::{debug, info};

/// Write the configured report files, returning the paths written
///
/// Nothing is written for an empty mapping.
pub fn write_reports(mapping: &ResultMapping, config: &OutputConfig) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();

    if mapping.is_empty() {
        debug!("No resolved hostnames, skipping report files");
        return Ok(written);
    }

    if let Some(path) = &config.json_path {
        json::write_json_file(mapping, path, config.pretty)?;
        info!("JSON results saved to {}", path.display());
        written.push(path.clone());
    }

    if let Some(path) = &config.csv_path {
        csv::write_csv_file(mapping, path)?;
        info!("CSV results saved to {}", path.display());
        written.push(path.clone());
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_mapping_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let config = OutputConfig {
            json_path: Some(dir.path().join("out.json")),
            csv_path: Some(dir.path().join("out.csv")),
            pretty: true,
            quiet: true,
        };

        let written = write_reports(&ResultMapping::new(), &config).unwrap();
        assert!(written.is_empty());
        assert!(!dir.path().join("out.json").exists());
        assert!(!dir.path().join("out.csv").exists());
    }

    #[test]
    fn test_reports_written() {
        let dir = tempfile::tempdir().unwrap();
        let config = OutputConfig {
            json_path: Some(dir.path().join("out.json")),
            csv_path: None,
            pretty: false,
            quiet: true,
        };
        let mut mapping = ResultMapping::new();
        mapping.insert("www.example.com".to_string(), vec!["10.0.0.1".to_string()]);

        let written = write_reports(&mapping, &config).unwrap();
        assert_eq!(written, vec![dir.path().join("out.json")]);

        let content = std::fs::read_to_string(dir.path().join("out.json")).unwrap();
        assert_eq!(content, r#"{"www.example.com":["10.0.0.1"]}"#);
    }

    #[test]
    fn test_unwritable_path_is_error() {
        let config = OutputConfig {
            json_path: Some(PathBuf::from("/nonexistent/subrun/out.json")),
            ..Default::default()
        };
        let mut mapping = ResultMapping::new();
        mapping.insert("www.example.com".to_string(), vec!["10.0.0.1".to_string()]);

        assert!(write_reports(&mapping, &config).is_err());
    }
}
