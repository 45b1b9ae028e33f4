// CommandRouter - Routes CLI arguments to appropriate Command
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

use super::{Command, DiscoverCommand, EnumerateCommand};
use crate::{Args, Result};

/// CommandRouter determines which Command to execute based on CLI arguments
///
/// Routing order:
/// 1. Enumeration only (--no-resolve)
/// 2. Full discovery (default)
pub struct CommandRouter;

impl CommandRouter {
    /// Route CLI arguments to the appropriate Command
    ///
    /// # Errors
    /// Returns a DiscoveryError if the argument combination is invalid
    pub fn route(args: Args) -> Result<Box<dyn Command>> {
        Self::validate_routing(&args)?;

        if args.input.no_resolve {
            return Ok(Box::new(EnumerateCommand::new(args)));
        }

        Ok(Box::new(DiscoverCommand::new(args)))
    }

    /// Check that the arguments can be routed at all
    pub fn validate_routing(args: &Args) -> Result<()> {
        if args.input.no_resolve && (args.output.json.is_some() || args.output.csv.is_some()) {
            crate::discovery_bail!(
                "--no-resolve prints hostnames only and cannot be combined with --json or --csv"
            );
        }

        Ok(())
    }
}
