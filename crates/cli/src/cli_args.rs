//! Command-line argument parsing.
//!
//! This module defines the command-line interface structure using the
//! `clap` crate. Column arguments are kept as raw strings here; turning
//! them into column numbers, and rejecting bad ones, is left to
//! [`cl_core::config::Config`].

use clap::Parser;

/// Command-line arguments for the `cl` tool.
///
/// Flags and column numbers may be given in any order.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use cl_cli::cli_args::Args;
///
/// let args = Args::parse_from(["cl", "-s", ",", "1", "3"]);
/// assert_eq!(args.columns, vec!["1", "3"]);
/// ```
#[derive(Parser, Debug)] // requires `derive` feature
#[command(
    name = "cl",
    version,
    about = "Filter data by columns: reads lines from stdin and prints the selected columns, tab separated."
)]
#[command(term_width = 0)] // Just to make testing across clap features easier
pub struct Args {
    /// Skip the first line of input (a header).
    #[arg(long = "skip-header", short = 'i', action)]
    pub skip_header: bool,

    /// A character or regex to split lines (default: whitespace).
    #[arg(long, short = 's', value_name = "PATTERN", allow_hyphen_values = true)]
    pub separator: Option<String>,

    /// Use tabs as separator (alias of -s '\t').
    #[arg(long, short = 't', action)]
    pub tab: bool,

    /// Columns to print, counted from 1.
    ///
    /// Output keeps the order of the input fields, whatever order the
    /// columns are given in. Repeated columns are printed once.
    #[arg(value_name = "COLUMN", allow_negative_numbers = true)]
    pub columns: Vec<String>,
}

impl Args {
    /// The `-s` pattern, empty when it was not given.
    #[must_use]
    pub fn separator(&self) -> &str {
        self.separator.as_deref().unwrap_or_default()
    }
}
