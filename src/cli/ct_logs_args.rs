// Certificate Transparency query configuration arguments
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

use clap::Args;

/// Certificate Transparency aggregator options
#[derive(Args, Debug, Clone, Default)]
pub struct CtLogsArgs {
    /// Base URL of the crt.sh compatible aggregator
    #[arg(long = "ct-endpoint", value_name = "URL", default_value = "https://crt.sh")]
    pub endpoint: String,

    /// Timeout in seconds for the CT log query
    #[arg(
        long = "ct-timeout",
        id = "ct_timeout",
        value_name = "SECONDS",
        default_value = "20"
    )]
    pub timeout: u64,

    /// User-Agent header sent to the aggregator
    #[arg(long = "user-agent", value_name = "UA")]
    pub user_agent: Option<String>,
}
