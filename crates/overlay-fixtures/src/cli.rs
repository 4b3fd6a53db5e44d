use std::{io::Write, path::PathBuf};

use clap::{Parser, ValueEnum};
use env_logger::Env;
use log::*;
use overlay_fixtures_core::{
    source::{RandomSource, DEFAULT_RANDOM_DEVICE},
    FixtureError, PageSize,
};

use crate::generate::GenerateOptions;

#[derive(Parser, Debug)]
#[clap(version, about, long_about = None, author = "Jonathan Nilsson")]
pub struct Cli {
    /// Set the logging verbosity
    #[clap(short, long, value_enum, default_value_t = LogLevel::Info)]
    pub verbose: LogLevel,

    /// Directory the fixture files are written to
    #[clap(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Page size in bytes, defaults to the page size of this system
    #[clap(short, long, value_parser = clap::value_parser!(u64).range(1..))]
    pub page_size: Option<u64>,

    /// Device or file to read random bytes from
    #[clap(short, long, default_value = DEFAULT_RANDOM_DEVICE)]
    pub random_source: PathBuf,

    /// Fill random fixtures from a seeded generator instead of the random source
    #[clap(short, long, conflicts_with = "random_source")]
    pub seed: Option<u64>,
}

#[derive(Copy, Clone, Debug, Default, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
            LogLevel::Off => LevelFilter::Off,
        }
    }
}

impl Cli {
    pub fn init_logger(&self) {
        env_logger::Builder::from_env(Env::default())
            .filter_level(self.verbose.into())
            .target(env_logger::Target::Stdout)
            .format(|buf, record| {
                let level = record.level();
                if level == Level::Info {
                    writeln!(buf, "{}", record.args())
                } else {
                    writeln!(buf, "{}: {}", record.level(), record.args())
                }
            })
            .init();
    }

    /// Resolves the page size and random source for a run.
    pub fn options(&self) -> Result<GenerateOptions, FixtureError> {
        let page_size = match self.page_size {
            Some(bytes) => PageSize::new(bytes)
                .expect("This already has been verified by the page size value parser"),
            None => PageSize::system()?,
        };

        let source = match self.seed {
            Some(seed) => RandomSource::Seeded(seed),
            None => RandomSource::Device(self.random_source.clone()),
        };

        Ok(GenerateOptions {
            output_dir: self.output_dir.clone(),
            page_size,
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    pub fn no_arguments_uses_defaults() {
        let cli = Cli::try_parse_from(["generate-fixtures"]).unwrap();

        assert!(matches!(cli.verbose, LogLevel::Info));
        assert_eq!(cli.output_dir, PathBuf::from("."));
        assert_eq!(cli.page_size, None);
        assert_eq!(cli.seed, None);

        let options = cli.options().unwrap();
        assert_eq!(options.source, RandomSource::default());
    }

    #[test]
    pub fn page_size_override() {
        let cli = Cli::try_parse_from(["generate-fixtures", "--page-size", "4096"]).unwrap();
        assert_eq!(cli.options().unwrap().page_size.get(), 4096);
    }

    #[test]
    pub fn zero_page_size_is_rejected() {
        let err = Cli::try_parse_from(["generate-fixtures", "-p", "0"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    pub fn seed_selects_seeded_source() {
        let cli = Cli::try_parse_from(["generate-small-fixtures", "-s", "99", "-o", "out"]).unwrap();
        let options = cli.options().unwrap();

        assert_eq!(options.source, RandomSource::Seeded(99));
        assert_eq!(options.output_dir, PathBuf::from("out"));
    }

    #[test]
    pub fn seed_conflicts_with_random_source() {
        let result = Cli::try_parse_from([
            "generate-fixtures",
            "--seed",
            "1",
            "--random-source",
            "/dev/urandom",
        ]);
        assert!(result.is_err());
    }
}
