// Bounded Concurrency Scheduler
//
// Drives a resolver over a batch of hostnames with at most K resolutions in
// flight. K workers share one atomic cursor and keep claiming the next
// unclaimed index until the batch is exhausted, so a slow run of hostnames
// never pins a single worker. Every hostname yields exactly one outcome.

use crate::scanner::resolver::{ResolutionOutcome, Resolve};
use futures::FutureExt;
use futures::future::join_all;
use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::{debug, warn};

/// Default number of concurrent resolutions
pub const DEFAULT_CONCURRENCY: usize = 20;

/// Upper bound accepted for the concurrency limit
pub const MAX_CONCURRENCY: usize = 1000;

/// Bounded concurrency scheduler
#[derive(Debug, Clone, Copy)]
pub struct Scheduler {
    concurrency: usize,
}

impl Scheduler {
    /// Create a scheduler; a limit of 0 is treated as 1
    pub fn new(concurrency: usize) -> Self {
        Self {
            concurrency: concurrency.max(1),
        }
    }

    pub fn concurrency(&self) -> usize {
        self.concurrency
    }

    /// Resolve every hostname exactly once and return one outcome per hostname
    ///
    /// Workers are cooperatively scheduled futures on the calling task; the
    /// only suspension points are the resolver's own lookups. `on_outcome`
    /// runs as soon as each hostname completes, in completion order. The
    /// returned vector is in completion order too; callers that need a
    /// stable order go through the aggregator.
    pub async fn run<R, F>(
        &self,
        hostnames: &[String],
        resolver: &R,
        on_outcome: F,
    ) -> Vec<ResolutionOutcome>
    where
        R: Resolve + ?Sized,
        F: Fn(&ResolutionOutcome) + Sync,
    {
        if hostnames.is_empty() {
            return Vec::new();
        }

        let workers = self.concurrency.min(hostnames.len());
        let cursor = AtomicUsize::new(0);

        debug!(
            "Resolving {} hostnames with {} workers",
            hostnames.len(),
            workers
        );

        let batches = join_all(
            (0..workers).map(|id| worker(id, hostnames, &cursor, resolver, &on_outcome)),
        )
        .await;

        batches.into_iter().flatten().collect()
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new(DEFAULT_CONCURRENCY)
    }
}

/// Claim indices from the shared cursor until none are left
async fn worker<R, F>(
    id: usize,
    hostnames: &[String],
    cursor: &AtomicUsize,
    resolver: &R,
    on_outcome: &F,
) -> Vec<ResolutionOutcome>
where
    R: Resolve + ?Sized,
    F: Fn(&ResolutionOutcome) + Sync,
{
    let mut outcomes = Vec::new();

    loop {
        let index = cursor.fetch_add(1, Ordering::Relaxed);
        let Some(hostname) = hostnames.get(index) else {
            break;
        };

        let outcome = match AssertUnwindSafe(resolver.resolve(hostname))
            .catch_unwind()
            .await
        {
            Ok(outcome) => outcome,
            Err(panic) => {
                let reason = panic_message(panic.as_ref());
                warn!("Resolution of {} aborted: {}", hostname, reason);
                ResolutionOutcome::failed(hostname.clone(), reason)
            }
        };

        on_outcome(&outcome);
        outcomes.push(outcome);
    }

    debug!("Worker {} finished after {} hostnames", id, outcomes.len());
    outcomes
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(msg) = panic.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = panic.downcast_ref::<String>() {
        msg.clone()
    } else {
        "resolver panicked".to_string()
    }
}
