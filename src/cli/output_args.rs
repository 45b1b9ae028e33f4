// Output configuration arguments
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

use clap::Args;
use std::path::PathBuf;

/// Output file and display options
///
/// By default both a JSON and a CSV report are written to the output
/// directory as `<domain>_subdomains.json` and `<domain>_subdomains.csv`.
#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Directory for the default report files
    #[arg(short = 'o', long = "output-dir", value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Write the JSON report to this file instead
    #[arg(long = "json", value_name = "FILE", id = "output_json")]
    pub json: Option<PathBuf>,

    /// Write the CSV report to this file instead
    #[arg(long = "csv", value_name = "FILE")]
    pub csv: Option<PathBuf>,

    /// Write single-line JSON instead of pretty-printed JSON
    #[arg(long = "compact")]
    pub compact: bool,

    /// Do not write any report files
    #[arg(long = "no-files")]
    pub no_files: bool,

    /// Quiet mode (no progress bar, warnings only)
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,

    /// Verbose mode (shows per-strategy lookup failures)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long = "no-color")]
    pub no_color: bool,
}
