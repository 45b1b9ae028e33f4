// Candidate input arguments
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

use clap::Args;
use std::path::PathBuf;

/// Candidate source options
#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// Read candidate hostnames from a file instead of querying CT logs
    #[arg(short = 'f', long = "file", value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Only list discovered hostnames, do not resolve them
    #[arg(long = "no-resolve")]
    pub no_resolve: bool,
}
