// DiscoverCommand - CT log discovery followed by concurrent resolution
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

use super::{Command, gather_candidates};
use crate::output::{self, terminal};
use crate::scanner::Pipeline;
use crate::scanner::aggregation::DiscoverySummary;
use crate::scanner::config::{LookupConfig, OutputConfig, SchedulerConfig};
use crate::scanner::normalizer::normalize_domain;
use crate::scanner::resolver::ResolutionOutcome;
use crate::{Args, Result};
use async_trait::async_trait;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::Write;
use std::sync::Mutex;
use tracing::{debug, info};

/// DiscoverCommand runs the full discovery pipeline
///
/// This command is responsible for:
/// - Gathering candidates (CT log or `--file`) and normalizing them
/// - Resolving every candidate under the concurrency bound
/// - Printing successes live, then the report and summary
/// - Writing the JSON and CSV reports
pub struct DiscoverCommand {
    args: Args,
}

impl DiscoverCommand {
    /// Create a new DiscoverCommand with the given arguments
    pub fn new(args: Args) -> Self {
        Self { args }
    }

    fn progress_bar(len: usize, quiet: bool) -> ProgressBar {
        if quiet {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new(len as u64);
        let style = ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-");
        pb.set_style(style);
        pb
    }
}

/// Live per-hostname reporting during resolution
///
/// Success lines are written to `out` with the bar suspended, so they show up
/// whether or not the bar itself can be drawn.
struct LiveReporter<W> {
    pb: ProgressBar,
    out: Mutex<W>,
    quiet: bool,
}

impl<W: Write + Send> LiveReporter<W> {
    fn new(pb: ProgressBar, out: W, quiet: bool) -> Self {
        Self {
            pb,
            out: Mutex::new(out),
            quiet,
        }
    }

    fn record(&self, outcome: &ResolutionOutcome) {
        if outcome.is_resolved() && !self.quiet {
            let line = terminal::format_success(outcome);
            self.pb.suspend(|| {
                if let Ok(mut out) = self.out.lock()
                    && let Err(e) = writeln!(out, "{}", line)
                {
                    debug!("Failed to print result line: {}", e);
                }
            });
        }
        self.pb.inc(1);
    }

    fn finish(self) -> W {
        self.pb.finish_and_clear();
        match self.out.into_inner() {
            Ok(out) => out,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

#[async_trait]
impl Command for DiscoverCommand {
    async fn execute(&self) -> Result<()> {
        let domain = normalize_domain(&self.args.domain)?;

        // Validate everything before touching the network
        let lookup = LookupConfig::from_args(&self.args)?;
        let scheduling = SchedulerConfig::from_args(&self.args);
        let output_config = OutputConfig::from_args(&self.args, &domain);
        let pipeline = Pipeline::from_config(&lookup, &scheduling)?;

        info!("Starting subdomain discovery for {}", domain);
        let candidates = gather_candidates(&self.args, &domain).await?;

        if candidates.is_empty() {
            println!("{}", terminal::format_summary(&DiscoverySummary::default()));
            return Ok(());
        }

        if !output_config.quiet {
            println!("{}", terminal::format_banner(&domain, candidates.len()));
        }

        let reporter = LiveReporter::new(
            Self::progress_bar(candidates.len(), output_config.quiet),
            std::io::stdout(),
            output_config.quiet,
        );
        let results = pipeline
            .run(&candidates, |outcome| reporter.record(outcome))
            .await;
        reporter.finish();

        if output_config.quiet {
            println!("{}", terminal::format_summary(&results.summary));
        } else {
            println!("{}", terminal::TerminalReport::new(&domain, &results));
        }

        for path in output::write_reports(&results.mapping, &output_config)? {
            if !output_config.quiet {
                println!("Results saved to {}", path.display());
            }
        }

        Ok(())
    }

    fn name(&self) -> &'static str {
        "DiscoverCommand"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;
    use std::net::IpAddr;

    fn resolved(host: &str, ip: &str) -> ResolutionOutcome {
        let addrs: BTreeSet<IpAddr> = [ip.parse().unwrap()].into_iter().collect();
        ResolutionOutcome::from_addresses(host, addrs)
    }

    #[test]
    fn test_success_lines_survive_hidden_bar() {
        colored::control::set_override(false);

        let pb = ProgressBar::hidden();
        let reporter = LiveReporter::new(pb.clone(), Vec::new(), false);
        reporter.record(&resolved("localhost", "127.0.0.1"));
        reporter.record(&ResolutionOutcome::unresolved("gone.example.com"));

        assert_eq!(pb.position(), 2);
        let printed = String::from_utf8(reporter.finish()).unwrap();
        assert_eq!(printed, "[+] localhost [127.0.0.1]\n");
    }

    #[test]
    fn test_quiet_reporter_prints_nothing() {
        let reporter = LiveReporter::new(ProgressBar::hidden(), Vec::new(), true);
        reporter.record(&resolved("www.example.com", "10.0.0.1"));

        assert!(reporter.finish().is_empty());
    }
}
