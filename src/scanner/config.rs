//! Focused configuration objects extracted from CLI Args.
//!
//! Each pipeline stage receives only the settings it needs instead of the
//! full Args struct, which keeps the stages usable from library code and
//! tests without going through clap.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::Result;
use crate::cli::Args;
use crate::error::DiscoveryError;
use crate::scanner::scheduler::{DEFAULT_CONCURRENCY, MAX_CONCURRENCY};
use crate::utils::custom_resolvers::CustomResolvers;

/// Default per-strategy lookup timeout
pub const DEFAULT_LOOKUP_TIMEOUT: Duration = Duration::from_secs(10);

/// Longest per-strategy lookup timeout accepted
pub const MAX_LOOKUP_TIMEOUT: Duration = Duration::from_secs(120);

/// Default timeout for the CT log query
pub const DEFAULT_CT_TIMEOUT: Duration = Duration::from_secs(20);

/// Default crt.sh compatible endpoint
pub const DEFAULT_CT_ENDPOINT: &str = "https://crt.sh";

/// Client identifier sent to the aggregator
pub const DEFAULT_USER_AGENT: &str = concat!("subrun/", env!("CARGO_PKG_VERSION"));

/// Configuration for the hostname resolver
#[derive(Debug, Clone)]
pub struct LookupConfig {
    /// Timeout applied to each strategy call
    pub timeout: Duration,
    /// Use the operating system resolver
    pub use_system: bool,
    /// Issue explicit A queries
    pub use_ipv4: bool,
    /// Issue explicit AAAA queries
    pub use_ipv6: bool,
    /// Nameservers for A/AAAA queries (empty = system configuration)
    pub nameservers: Vec<SocketAddr>,
}

impl LookupConfig {
    /// Create configuration from CLI Args
    pub fn from_args(args: &Args) -> Result<Self> {
        let nameservers = if args.network.resolvers.is_empty() {
            Vec::new()
        } else {
            CustomResolvers::new(args.network.resolvers.clone())?
                .addresses()
                .to_vec()
        };

        Ok(Self {
            timeout: Duration::from_secs(args.network.timeout),
            use_system: !args.network.no_system,
            use_ipv4: !args.network.no_ipv4,
            use_ipv6: !args.network.no_ipv6,
            nameservers,
        })
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.use_system || self.use_ipv4 || self.use_ipv6) {
            return Err(DiscoveryError::ConfigError {
                message: "At least one lookup strategy must stay enabled".to_string(),
            });
        }

        if self.timeout.is_zero() || self.timeout > MAX_LOOKUP_TIMEOUT {
            return Err(DiscoveryError::ConfigError {
                message: format!(
                    "Lookup timeout must be between 1 and {} seconds",
                    MAX_LOOKUP_TIMEOUT.as_secs()
                ),
            });
        }

        Ok(())
    }
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_LOOKUP_TIMEOUT,
            use_system: true,
            use_ipv4: true,
            use_ipv6: true,
            nameservers: Vec::new(),
        }
    }
}

/// Configuration for the bounded concurrency scheduler
#[derive(Debug, Clone, Copy)]
pub struct SchedulerConfig {
    pub concurrency: usize,
}

impl SchedulerConfig {
    pub fn from_args(args: &Args) -> Self {
        Self {
            concurrency: args.network.concurrency,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.concurrency == 0 || self.concurrency > MAX_CONCURRENCY {
            return Err(DiscoveryError::ConfigError {
                message: format!("Concurrency must be between 1 and {}", MAX_CONCURRENCY),
            });
        }
        Ok(())
    }
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            concurrency: DEFAULT_CONCURRENCY,
        }
    }
}

/// Configuration for the Certificate Transparency query
#[derive(Debug, Clone)]
pub struct CtQueryConfig {
    /// Base URL of the aggregator
    pub endpoint: String,
    /// Timeout for the whole HTTP exchange
    pub timeout: Duration,
    /// User-Agent header value
    pub user_agent: String,
}

impl CtQueryConfig {
    pub fn from_args(args: &Args) -> Self {
        Self {
            endpoint: args.ct_logs.endpoint.trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(args.ct_logs.timeout),
            user_agent: args
                .ct_logs
                .user_agent
                .clone()
                .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.endpoint.starts_with("http://") || self.endpoint.starts_with("https://")) {
            return Err(DiscoveryError::ConfigError {
                message: format!("CT endpoint must be an http(s) URL: {}", self.endpoint),
            });
        }
        if self.timeout.is_zero() {
            return Err(DiscoveryError::ConfigError {
                message: "CT timeout must be at least 1 second".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for CtQueryConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_CT_ENDPOINT.to_string(),
            timeout: DEFAULT_CT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Configuration for the report writers
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    /// JSON report path (None = not written)
    pub json_path: Option<PathBuf>,
    /// CSV report path (None = not written)
    pub csv_path: Option<PathBuf>,
    /// Pretty print the JSON report
    pub pretty: bool,
    /// Suppress the progress bar and terminal report
    pub quiet: bool,
}

impl OutputConfig {
    /// Create configuration from CLI Args for a canonical domain
    pub fn from_args(args: &Args, domain: &str) -> Self {
        let (json_path, csv_path) = if args.output.no_files {
            (None, None)
        } else {
            let stem = format!("{}_subdomains", domain);
            (
                Some(
                    args.output
                        .json
                        .clone()
                        .unwrap_or_else(|| args.output.output_dir.join(format!("{}.json", stem))),
                ),
                Some(
                    args.output
                        .csv
                        .clone()
                        .unwrap_or_else(|| args.output.output_dir.join(format!("{}.csv", stem))),
                ),
            )
        };

        Self {
            json_path,
            csv_path,
            pretty: !args.output.compact,
            quiet: args.output.quiet,
        }
    }
}
