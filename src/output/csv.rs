// CSV Output Module

use crate::Result;
use crate::error::DiscoveryError;
use crate::scanner::aggregation::ResultMapping;
use csv::Writer;
use std::path::Path;

/// Generate CSV output: one `hostname,ip` row per resolved address
pub fn generate_csv(mapping: &ResultMapping) -> Result<String> {
    let mut wtr = Writer::from_writer(vec![]);

    wtr.write_record(["hostname", "ip"])?;

    for (hostname, addresses) in mapping {
        for ip in addresses {
            wtr.write_record([hostname.as_str(), ip.as_str()])?;
        }
    }

    let data = wtr.into_inner()?;
    Ok(String::from_utf8(data)?)
}

/// Write CSV to file
pub fn write_csv_file(mapping: &ResultMapping, path: &Path) -> Result<()> {
    let csv = generate_csv(mapping)?;
    std::fs::write(path, csv).map_err(|e| DiscoveryError::fs(path, e))?;
    Ok(())
}
