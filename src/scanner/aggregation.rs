// SubRun - Result aggregation
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

//! Folds per-hostname outcomes into the final result mapping.
//!
//! - Only hostnames with at least one address are kept
//! - Entries are ordered by hostname, addresses inside an entry are sorted
//! - The summary counts every outcome, whatever its status
//!
//! The output depends only on the set of outcomes, never on the order in
//! which the scheduler produced them.

use crate::scanner::resolver::{ResolutionOutcome, ResolutionStatus};
use std::collections::BTreeMap;

/// Hostname to resolved addresses, sorted by hostname
pub type ResultMapping = BTreeMap<String, Vec<String>>;

/// Counts for the end-of-run report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiscoverySummary {
    /// Candidates that went through resolution
    pub total: usize,
    /// Candidates with at least one address
    pub resolved: usize,
    /// Candidates where no strategy produced an address
    pub unresolved: usize,
    /// Candidates whose resolution aborted
    pub failed: usize,
}

/// Final mapping plus summary
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregatedResults {
    pub mapping: ResultMapping,
    pub summary: DiscoverySummary,
}

impl AggregatedResults {
    pub fn is_empty(&self) -> bool {
        self.mapping.is_empty()
    }
}

/// Aggregate outcomes into the sorted mapping and summary
pub fn aggregate<I>(outcomes: I) -> AggregatedResults
where
    I: IntoIterator<Item = ResolutionOutcome>,
{
    let mut results = AggregatedResults::default();

    for outcome in outcomes {
        results.summary.total += 1;

        match outcome.status {
            ResolutionStatus::Resolved(addresses) => {
                results.summary.resolved += 1;
                let entry = results.mapping.entry(outcome.hostname).or_default();
                entry.extend(addresses.iter().map(|ip| ip.to_string()));
                entry.sort();
                entry.dedup();
            }
            ResolutionStatus::Unresolved => results.summary.unresolved += 1,
            ResolutionStatus::Failed(_) => results.summary.failed += 1,
        }
    }

    results
}
