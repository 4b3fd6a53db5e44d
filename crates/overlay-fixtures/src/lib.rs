use std::{error::Error, process::ExitCode};

use clap::Parser;
use overlay_fixtures_core::sets::FixtureSet;

use crate::cli::Cli;

pub use generate::{generate, GenerateOptions};

pub mod cli;
pub mod generate;
pub mod reporter;

/// Entry point shared by the generator binaries.
pub fn run(set: &dyn FixtureSet) -> ExitCode {
    let cli = Cli::parse();
    cli.init_logger();

    match cli.options().and_then(|options| generate(set, &options)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", error_chain(&err));
            ExitCode::FAILURE
        }
    }
}

/// Formats `err` followed by each of its sources, separated by ": ".
pub fn error_chain(err: &dyn Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
