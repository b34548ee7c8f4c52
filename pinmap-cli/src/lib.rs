//! Command-line front end shared by `csv2vhd` and `csv2xdc`
//!
//! Both binaries are plain filters: with no arguments they read the signal
//! table from stdin and write the generated fragment to stdout. Log output
//! goes to stderr.

use anyhow::{Context, Result};
use clap::{CommandFactory, FromArgMatches, Parser};
use pinmap_core::{Emitter, FilterConfig};
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

pub mod config;

/// Options common to both filters
#[derive(Parser, Debug)]
#[command(version)]
pub struct Args {
    /// Signal table to read (default: stdin)
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Path to configuration file (TOML)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Number of leading lines to skip (overrides the config file)
    #[arg(long, value_name = "COUNT")]
    pub header_rows: Option<usize>,

    /// Fail on the first malformed row instead of skipping it
    #[arg(long)]
    pub strict: bool,

    /// Verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Parse the process arguments under the given binary name
    pub fn parse_as(name: &'static str, about: &'static str) -> Self {
        let matches = Self::command().name(name).about(about).get_matches();
        Self::from_arg_matches(&matches).unwrap_or_else(|e| e.exit())
    }

    /// Merge the config file (if any) with command-line overrides
    pub fn filter_config(&self) -> Result<FilterConfig> {
        let mut filter = match &self.config {
            Some(path) => {
                log::debug!("Loading configuration from: {:?}", path);
                config::load_config(path)?.filter_config()
            }
            None => FilterConfig::new(),
        };

        if let Some(rows) = self.header_rows {
            filter = filter.with_header_rows(rows);
        }
        if self.strict {
            filter = filter.with_strict(true);
        }

        Ok(filter)
    }
}

/// Parse arguments, set up logging and run `emitter` over the input
pub fn main_with<E: Emitter>(name: &'static str, about: &'static str, emitter: E) -> Result<()> {
    let args = Args::parse_as(name, about);
    init_logging(args.verbose, args.quiet);

    log::debug!("{} v{} (pinmap-core v{})", name, env!("CARGO_PKG_VERSION"), pinmap_core::VERSION);

    run(&args, &emitter)
}

/// Run one filter pass as described by `args`
///
/// The whole fragment is generated in memory first, so a failed run never
/// leaves a partial output file behind.
pub fn run<E: Emitter + ?Sized>(args: &Args, emitter: &E) -> Result<()> {
    let config = args.filter_config()?;
    let input = open_input(args)?;

    let mut generated = Vec::new();
    let stats = pinmap_core::run_filter(input, &mut generated, emitter, &config)
        .with_context(|| match &args.input {
            Some(path) => format!("Failed to convert signal table: {:?}", path),
            None => "Failed to convert signal table from stdin".to_string(),
        })?;

    match &args.output {
        Some(path) => fs::write(path, &generated)
            .with_context(|| format!("Failed to write output file: {:?}", path))?,
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(&generated)?;
            stdout.flush()?;
        }
    }

    if stats.rows_malformed > 0 {
        log::warn!("{} malformed row(s) skipped", stats.rows_malformed);
    }

    Ok(())
}

fn open_input(args: &Args) -> Result<Box<dyn BufRead>> {
    match &args.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open signal table: {:?}", path))?;
            Ok(Box::new(BufReader::new(file)))
        }
        None => Ok(Box::new(io::stdin().lock())),
    }
}

/// Initialize logging based on verbosity level
///
/// Warnings are shown by default since stdout carries the generated fragment
/// and the per-row diagnostics are the only feedback a user gets.
pub fn init_logging(verbose: u8, quiet: bool) {
    use env_logger::Builder;
    use log::LevelFilter;

    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    Builder::new()
        .filter_level(level)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        let args = Args::try_parse_from(["csv2vhd"]).unwrap();

        assert!(args.input.is_none());
        assert!(args.output.is_none());
        assert_eq!(args.filter_config().unwrap(), FilterConfig::new());
    }

    #[test]
    fn test_flags_override_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pinmap.toml");
        fs::write(&path, "[input]\nheader_rows = 3\n").unwrap();

        let args = Args::try_parse_from([
            "csv2xdc",
            "--config",
            path.to_str().unwrap(),
            "--header-rows",
            "1",
            "--strict",
        ])
        .unwrap();

        assert_eq!(
            args.filter_config().unwrap(),
            FilterConfig::new().with_header_rows(1).with_strict(true)
        );
    }

    #[test]
    fn test_config_file_used_without_flags() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pinmap.toml");
        fs::write(&path, "[input]\nheader_rows = 2\n[diagnostics]\nstrict = true\n").unwrap();

        let args = Args::try_parse_from(["csv2vhd", "-c", path.to_str().unwrap()]).unwrap();

        assert_eq!(
            args.filter_config().unwrap(),
            FilterConfig::new().with_header_rows(2).with_strict(true)
        );
    }

    #[test]
    fn test_verbosity_flags() {
        let args = Args::try_parse_from(["csv2vhd", "-vv", "-q"]).unwrap();

        assert_eq!(args.verbose, 2);
        assert!(args.quiet);
    }
}
