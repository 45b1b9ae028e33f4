// Certificate Transparency Logs Module
//
// Queries the crt.sh aggregator for certificates issued under a domain and
// turns their SAN entries into candidate hostnames.

pub mod client;
pub mod parser;

pub use client::CrtShClient;
pub use parser::{CrtShRecord, parse_response};

use crate::error::DiscoveryError;

/// Result type for CT logs operations
pub type Result<T> = std::result::Result<T, DiscoveryError>;
