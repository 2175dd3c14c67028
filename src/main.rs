use crate::config::Config;
use crate::display::{display_diagnostics, display_headers, display_students};
use crate::loaders::{CsvStudentLoader, load};
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;
mod display;
mod loaders;
mod model;

#[derive(Parser)]
#[command(version, about)]
struct Options {
    /// Use FILE configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Read students from FILE instead of grades.csv
    #[arg(short, long, value_name = "FILE")]
    file: Option<PathBuf>,
    /// Fail if the students file cannot be opened
    #[arg(short, long)]
    strict: bool,
    /// Do not print the header column names
    #[arg(long)]
    no_headers: bool,
    /// Set verbosity level
    #[arg(short, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("grades={level}")));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    let options = Options::parse();
    init_logging(options.verbose);
    let mut config = match &options.config {
        Some(file) => Config::load(file)?,
        None => Config::default(),
    };
    if let Some(file) = options.file {
        config.loader.file = file;
    }
    config.loader.strict |= options.strict;
    config.display.headers &= !options.no_headers;
    let path = config.loader.file;
    let loaded = if config.loader.strict {
        CsvStudentLoader::new(&path).try_load()?
    } else {
        load(&path)
    };
    info!(
        path = %path.display(),
        students = loaded.students.len(),
        "students loaded"
    );
    let mut stdout = io::stdout().lock();
    if config.display.headers {
        display_headers(&mut stdout, &loaded.headers)?;
    }
    stdout.flush()?;
    display_diagnostics(&mut io::stderr().lock(), &loaded.diagnostics)?;
    display_students(&mut stdout, &loaded.students)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_is_consistent() {
        Options::command().debug_assert();
    }

    #[test]
    fn cli_flags() {
        let options =
            Options::try_parse_from(["grades", "-f", "class.csv", "--strict", "--no-headers", "-vv"])
                .unwrap();
        assert_eq!(options.file, Some(PathBuf::from("class.csv")));
        assert!(options.strict);
        assert!(options.no_headers);
        assert_eq!(options.verbose, 2);
        assert!(options.config.is_none());
    }
}
