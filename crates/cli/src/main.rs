use std::io::{self, BufWriter};
use std::process::ExitCode;

use clap::Parser;
use log::debug;

use cl_cli::cli_args::Args;

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();
    debug!("Arguments: {:?}", args);

    let input = io::stdin().lock();
    let output = BufWriter::new(io::stdout().lock());
    let error = io::stderr().lock();

    ExitCode::from(cl_cli::run(&args, input, output, error))
}
