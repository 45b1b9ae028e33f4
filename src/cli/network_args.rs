// DNS resolution configuration arguments
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

use clap::Args;

/// DNS resolution options
///
/// Controls how many hostnames are resolved at once, how long each lookup
/// strategy may take, and which strategies and nameservers are used.
#[derive(Args, Debug, Clone, Default)]
pub struct NetworkArgs {
    /// Maximum number of hostnames resolved concurrently
    #[arg(short = 'c', long = "concurrency", value_name = "NUM", default_value = "20")]
    pub concurrency: usize,

    /// Timeout in seconds for each individual lookup strategy
    #[arg(short = 't', long = "timeout", value_name = "SECONDS", default_value = "10")]
    pub timeout: u64,

    /// Custom DNS resolvers for A/AAAA queries (comma-separated: 8.8.8.8,1.1.1.1)
    #[arg(long = "resolvers", value_delimiter = ',')]
    pub resolvers: Vec<String>,

    /// Skip the operating system resolver lookup
    #[arg(long = "no-system")]
    pub no_system: bool,

    /// Skip explicit A record queries
    #[arg(long = "no-ipv4")]
    pub no_ipv4: bool,

    /// Skip explicit AAAA record queries
    #[arg(long = "no-ipv6")]
    pub no_ipv6: bool,
}
