// EnumerateCommand - Candidate enumeration without DNS resolution
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

use super::{Command, gather_candidates};
use crate::scanner::normalizer::normalize_domain;
use crate::{Args, Result};
use async_trait::async_trait;
use std::io::Write;
use tracing::info;

/// EnumerateCommand prints the canonical hostname set, one per line
///
/// Nothing else goes to stdout so the output can be piped into other tools.
pub struct EnumerateCommand {
    args: Args,
}

impl EnumerateCommand {
    /// Create a new EnumerateCommand with the given arguments
    pub fn new(args: Args) -> Self {
        Self { args }
    }
}

#[async_trait]
impl Command for EnumerateCommand {
    async fn execute(&self) -> Result<()> {
        let domain = normalize_domain(&self.args.domain)?;
        info!("Enumerating subdomains of {}", domain);

        let candidates = gather_candidates(&self.args, &domain).await?;

        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        for hostname in &candidates {
            writeln!(out, "{}", hostname)?;
        }
        out.flush()?;

        Ok(())
    }

    fn name(&self) -> &'static str {
        "EnumerateCommand"
    }
}
