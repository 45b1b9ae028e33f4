// Scanner module - Concurrent resolution pipeline
//
// candidates -> normalizer -> scheduler (resolver per hostname) -> aggregation

pub mod aggregation;
pub mod config;
pub mod normalizer;
pub mod resolver;
pub mod scheduler;

use crate::Result;
use crate::scanner::aggregation::{AggregatedResults, aggregate};
use crate::scanner::config::{LookupConfig, SchedulerConfig};
use crate::scanner::resolver::{HostnameResolver, ResolutionOutcome, Resolve};
use crate::scanner::scheduler::Scheduler;
use std::collections::BTreeSet;
use tracing::info;

/// Resolution pipeline over a deduplicated candidate set
pub struct Pipeline {
    resolver: Box<dyn Resolve>,
    scheduler: Scheduler,
}

impl Pipeline {
    /// Assemble a pipeline from an arbitrary resolver
    pub fn new(resolver: Box<dyn Resolve>, scheduler: Scheduler) -> Self {
        Self {
            resolver,
            scheduler,
        }
    }

    /// Build the production pipeline from configuration
    pub fn from_config(lookup: &LookupConfig, scheduling: &SchedulerConfig) -> Result<Self> {
        scheduling.validate()?;
        let resolver = HostnameResolver::from_config(lookup)?;

        info!(
            "Lookup strategies: {} (timeout {:?}, concurrency {})",
            resolver.strategy_names().join(", "),
            resolver.timeout(),
            scheduling.concurrency
        );

        Ok(Self::new(
            Box::new(resolver),
            Scheduler::new(scheduling.concurrency),
        ))
    }

    /// Resolve every candidate and aggregate the outcomes
    ///
    /// `on_outcome` is called for each hostname as soon as it completes.
    pub async fn run<F>(&self, candidates: &BTreeSet<String>, on_outcome: F) -> AggregatedResults
    where
        F: Fn(&ResolutionOutcome) + Sync,
    {
        let hostnames: Vec<String> = candidates.iter().cloned().collect();
        let outcomes = self
            .scheduler
            .run(&hostnames, self.resolver.as_ref(), on_outcome)
            .await;

        aggregate(outcomes)
    }
}
