// Commands module - Command Pattern implementation
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

mod command;
mod router;

// Individual command implementations
mod discover;
mod enumerate;

pub use command::Command;
pub use router::CommandRouter;

// Re-export individual commands for testing purposes
pub use discover::DiscoverCommand;
pub use enumerate::EnumerateCommand;

use crate::Args;
use crate::Result;
use crate::ct_logs::CrtShClient;
use crate::input;
use crate::scanner::config::CtQueryConfig;
use crate::scanner::normalizer;
use std::collections::BTreeSet;
use tracing::info;

/// Canonical candidate set for the invocation
///
/// Names come from `--file` when given, otherwise from the CT log query.
/// Either way they are normalized against `domain` and deduplicated.
pub(crate) async fn gather_candidates(args: &Args, domain: &str) -> Result<BTreeSet<String>> {
    let raw = match &args.input.file {
        Some(path) => {
            let names = input::read_candidates_file(path)?;
            info!("Loaded {} names from {}", names.len(), path.display());
            names
        }
        None => {
            let client = CrtShClient::new(&CtQueryConfig::from_args(args))?;
            client.fetch_candidates(domain).await
        }
    };

    let candidates = normalizer::collect_candidates(raw, domain);
    info!("{} unique candidates under {}", candidates.len(), domain);
    Ok(candidates)
}
