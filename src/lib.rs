// SubRun - Certificate Transparency subdomain discovery
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

//! SubRun discovers subdomains of a parent domain through the crt.sh
//! Certificate Transparency aggregator and checks which of them are live by
//! resolving them concurrently with several lookup strategies.

pub mod cli;
pub mod commands;
pub mod ct_logs;
pub mod error;
pub mod input;
pub mod output;
pub mod scanner;
pub mod utils;

// Re-export commonly used types
pub use crate::cli::Args;
pub use crate::error::DiscoveryError;
pub use crate::scanner::aggregation::{AggregatedResults, DiscoverySummary};
pub use crate::scanner::resolver::{ResolutionOutcome, ResolutionStatus};

/// Result type for SubRun operations
pub type Result<T> = std::result::Result<T, DiscoveryError>;
