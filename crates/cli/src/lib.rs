//! cl CLI Library
//!
//! This crate provides the command-line interface for `cl`, a tool for
//! filtering data by columns. It binds parsed arguments and a set of
//! streams to the engine in [`cl_core`] and turns the outcome into a
//! process exit status.
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line argument definitions
//! - [`run`]: The entry point, taking its input, output and error
//!   streams as arguments so it can run against anything, not just the
//!   process's standard streams
//!
//! # Examples
//!
//! The CLI binary (`cl`) reads standard input and writes standard output:
//!
//! ```bash
//! # Second whitespace-separated column
//! ps aux | cl 2
//!
//! # First and third comma-separated columns
//! cl -s , 1 3 < data.csv
//!
//! # Tab-separated input with a header line to skip
//! cl -t -i 4 < report.tsv
//! ```

use std::io::{BufRead, Write};

use clap::CommandFactory;
use log::debug;

use cl_core::config::Config;
use cl_core::error::{Error, Result};
use cl_core::filter::{self, Summary};

use crate::cli_args::Args;

pub mod cli_args;

/// Exit status of a successful run.
pub const EXIT_SUCCESS: u8 = 0;
/// Exit status of every failed run.
pub const EXIT_FAILURE: u8 = 1;

/// Prefix marking error messages on the error stream.
pub const ERROR_PREFIX: &str = "ERROR:";

fn execute<R: BufRead, W: Write>(args: &Args, input: R, output: W) -> Result<Summary> {
    let config = Config::new(&args.columns, args.separator(), args.tab, args.skip_header)?;
    filter::run(&config, input, output)
}

fn print_usage<W: Write>(output: &mut W) -> std::io::Result<()> {
    let help = Args::command().render_help();
    write!(output, "{help}")?;
    output.flush()
}

/// Writes an error message. A failing error stream has nowhere left to
/// report to but the log.
fn report<E: Write>(error: &mut E, message: &str) {
    if let Err(e) = writeln!(error, "{ERROR_PREFIX} {message}") {
        debug!("Could not write to the error stream: {e} (message: {message})");
    }
}

/// Runs `cl` with already parsed arguments against the given streams.
///
/// Filtered lines go to `output`. Problems are reported on `error`,
/// prefixed with [`ERROR_PREFIX`]; when no columns were given the usage
/// text is printed to `output` instead.
///
/// # Returns
///
/// [`EXIT_SUCCESS`] when all input was filtered, [`EXIT_FAILURE`] otherwise.
///
/// # Examples
///
/// ```
/// use clap::Parser;
/// use cl_cli::cli_args::Args;
///
/// let args = Args::parse_from(["cl", "2"]);
/// let mut output = Vec::new();
/// let mut error = Vec::new();
///
/// let status = cl_cli::run(&args, "1 2 3\n4 5 6\n".as_bytes(), &mut output, &mut error);
///
/// assert_eq!(status, cl_cli::EXIT_SUCCESS);
/// assert_eq!(output, b"2\n5\n");
/// ```
pub fn run<R: BufRead, W: Write, E: Write>(
    args: &Args,
    input: R,
    mut output: W,
    mut error: E,
) -> u8 {
    match execute(args, input, &mut output) {
        Ok(summary) => {
            debug!("Finished: {:?}", summary);
            EXIT_SUCCESS
        }
        Err(Error::MissingColumns) => {
            debug!("No columns given, printing usage");
            if let Err(e) = print_usage(&mut output) {
                report(&mut error, &format!("failed to print usage: {e}"));
            }
            EXIT_FAILURE
        }
        Err(e) => {
            debug!("Run failed: {:?}", e);
            report(&mut error, &e.to_string());
            EXIT_FAILURE
        }
    }
}
