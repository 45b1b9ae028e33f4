// CLI module - Command line interface and argument parsing
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

use clap::Parser;

// Sub-modules for organized CLI arguments
mod ct_logs_args;
mod input_args;
mod network_args;
mod output_args;

// Re-export sub-structs
pub use ct_logs_args::CtLogsArgs;
pub use input_args::InputArgs;
pub use network_args::NetworkArgs;
pub use output_args::OutputArgs;

/// SubRun - Certificate Transparency subdomain discovery
///
/// The Args struct composes the domain-specific groups with
/// `#[command(flatten)]`:
/// - Candidate input (InputArgs)
/// - DNS resolution and concurrency (NetworkArgs)
/// - Certificate Transparency query (CtLogsArgs)
/// - Output files and display (OutputArgs)
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "subrun")]
#[command(author, version)]
#[command(about = "Discover subdomains from CT logs and check which ones resolve", long_about = None)]
pub struct Args {
    /// Target domain (e.g. example.com)
    #[arg(value_name = "DOMAIN")]
    pub domain: String,

    // ============ Candidate Input ============
    #[command(flatten)]
    pub input: InputArgs,

    // ============ DNS Resolution ============
    #[command(flatten)]
    pub network: NetworkArgs,

    // ============ Certificate Transparency ============
    #[command(flatten)]
    pub ct_logs: CtLogsArgs,

    // ============ Output Files and Display ============
    #[command(flatten)]
    pub output: OutputArgs,
}

impl Args {
    /// Build Args for a domain with every other option at its CLI default
    ///
    /// The domain is passed after `--` so it is never taken for a flag.
    pub fn for_domain(domain: impl Into<String>) -> Result<Self, clap::Error> {
        Self::try_parse_from(["subrun", "--", &domain.into()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let args = Args::try_parse_from(["subrun", "example.com"]).unwrap();

        assert_eq!(args.domain, "example.com");
        assert_eq!(args.network.concurrency, 20);
        assert_eq!(args.network.timeout, 10);
        assert_eq!(args.ct_logs.timeout, 20);
        assert_eq!(args.ct_logs.endpoint, "https://crt.sh");
        assert!(!args.input.no_resolve);
        assert!(args.input.file.is_none());
        assert!(!args.output.no_files);
    }

    #[test]
    fn test_missing_domain_is_rejected() {
        let err = Args::try_parse_from(["subrun"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_concurrency_and_timeout_flags() {
        let args = Args::try_parse_from([
            "subrun",
            "example.com",
            "--concurrency",
            "5",
            "--timeout",
            "3",
        ])
        .unwrap();

        assert_eq!(args.network.concurrency, 5);
        assert_eq!(args.network.timeout, 3);
    }

    #[test]
    fn test_resolvers_are_comma_separated() {
        let args =
            Args::try_parse_from(["subrun", "example.com", "--resolvers", "8.8.8.8,1.1.1.1:53"])
                .unwrap();

        assert_eq!(args.network.resolvers, vec!["8.8.8.8", "1.1.1.1:53"]);
    }

    #[test]
    fn test_for_domain_matches_parse() {
        let args = Args::for_domain("example.org").unwrap();
        assert_eq!(args.domain, "example.org");
        assert_eq!(args.network.concurrency, 20);
        assert_eq!(args.ct_logs.timeout, 20);
    }

    #[test]
    fn test_for_domain_never_exits() {
        let args = Args::for_domain("-c").unwrap();
        assert_eq!(args.domain, "-c");
        assert_eq!(args.network.concurrency, 20);
    }

    #[test]
    fn test_lookup_and_ct_timeouts_are_independent() {
        let args = Args::try_parse_from([
            "subrun",
            "example.com",
            "--timeout",
            "3",
            "--ct-timeout",
            "45",
        ])
        .unwrap();

        assert_eq!(args.network.timeout, 3);
        assert_eq!(args.ct_logs.timeout, 45);

        let args = Args::try_parse_from(["subrun", "example.com", "--ct-timeout", "5"]).unwrap();
        assert_eq!(args.network.timeout, 10);
        assert_eq!(args.ct_logs.timeout, 5);
    }
}
