// SubRun - Terminal Output Module
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

//! Terminal formatting for discovery results
//!
//! Live lines are printed while the scheduler runs, the report tree and the
//! summary once aggregation is done.

use crate::scanner::aggregation::{AggregatedResults, DiscoverySummary};
use crate::scanner::resolver::ResolutionOutcome;
use colored::*;
use std::fmt;

/// One-line notice for a hostname that just resolved
pub fn format_success(outcome: &ResolutionOutcome) -> String {
    let addresses: Vec<String> = outcome
        .addresses()
        .into_iter()
        .flatten()
        .map(|ip| ip.to_string())
        .collect();
    format!(
        "{} {} {}",
        "[+]".green().bold(),
        outcome.hostname.bold(),
        format!("[{}]", addresses.join(", ")).dimmed()
    )
}

/// Banner printed before resolution starts
pub fn format_banner(domain: &str, candidates: usize) -> String {
    format!(
        "{} {} candidate subdomain{} for {}",
        "[*]".cyan().bold(),
        candidates.to_string().bold(),
        if candidates == 1 { "" } else { "s" },
        domain.green().bold()
    )
}

/// Report for a finished run
pub struct TerminalReport<'a> {
    pub domain: &'a str,
    pub results: &'a AggregatedResults,
}

impl<'a> TerminalReport<'a> {
    pub fn new(domain: &'a str, results: &'a AggregatedResults) -> Self {
        Self { domain, results }
    }
}

impl fmt::Display for TerminalReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "{}", self.domain.cyan().bold())?;

        let count = self.results.mapping.len();
        for (index, (hostname, addresses)) in self.results.mapping.iter().enumerate() {
            let last_host = index + 1 == count;
            let (branch, stem) = if last_host {
                ("└──", "    ")
            } else {
                ("├──", "│   ")
            };
            writeln!(f, "{} {}", branch, hostname.green())?;

            for (ip_index, ip) in addresses.iter().enumerate() {
                let leaf = if ip_index + 1 == addresses.len() {
                    "└──"
                } else {
                    "├──"
                };
                writeln!(f, "{}{} {}", stem, leaf, ip.dimmed())?;
            }
        }

        writeln!(f)?;
        write!(f, "{}", format_summary(&self.results.summary))
    }
}

/// "found vs resolved" summary line
pub fn format_summary(summary: &DiscoverySummary) -> String {
    let mut line = format!(
        "{} {} subdomain{} found, {} resolved",
        "[=]".cyan().bold(),
        summary.total.to_string().bold(),
        if summary.total == 1 { "" } else { "s" },
        summary.resolved.to_string().green().bold()
    );

    if summary.failed > 0 {
        line.push_str(&format!(
            " ({} failed)",
            summary.failed.to_string().red().bold()
        ));
    }

    line
}
