// SubRun - Certificate Transparency subdomain discovery
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

use anyhow::Result;
use clap::Parser;
use subrun::Args;
use subrun::commands::CommandRouter;
use tracing::{Level, debug};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    // Missing DOMAIN is reported by clap with usage and exit status 2
    let args = Args::parse();

    // Initialize logging - respect RUST_LOG unless -v / -q override it
    let log_level = if args.output.verbose > 0 {
        Level::DEBUG
    } else if args.output.quiet {
        Level::WARN
    } else {
        std::env::var("RUST_LOG")
            .ok()
            .and_then(|s| s.parse::<Level>().ok())
            .unwrap_or(Level::INFO)
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    if args.output.no_color {
        colored::control::set_override(false);
    }

    let command = CommandRouter::route(args)?;
    debug!("Executing {}", command.name());
    command.execute().await?;

    Ok(())
}
