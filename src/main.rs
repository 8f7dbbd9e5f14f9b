//! foldermap - CLI entry point
//!
//! This module contains the main function that serves as the entry point
//! for the foldermap command-line tool. It handles argument parsing, logging
//! setup and timing, and delegates the scan to the core library.

use chrono::Local;
use clap::Parser;
use env_logger::{Env, Target};
use foldermap::{run, Args, Config};
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::process;
use std::time::Instant;

fn main() {
    let args = Args::parse();

    if let Err(e) = init_logging(&args) {
        eprintln!("Error: cannot open log file: {}", e);
        process::exit(1);
    }

    // Load configuration from ~/.foldermap.toml if it exists
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            log::error!("{}", e);
            process::exit(1);
        }
    };

    let start = Instant::now();
    log::info!("Starting scan of folder: {}", args.folder.display());

    let success = run(&args, &config);
    let elapsed = start.elapsed().as_secs_f64();

    if success {
        log::info!("Scan finished in {:.2} s", elapsed);
    } else {
        log::error!("Scan failed after {:.2} s", elapsed);
        process::exit(1);
    }
}

/// Initialize logger with RUST_LOG env var support, optionally copying
/// every record to a log file
fn init_logging(args: &Args) -> io::Result<()> {
    let default_filter = if args.verbose { "debug" } else { "info" };
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or(default_filter));

    builder.format(|buf, record| {
        writeln!(
            buf,
            "{} - {} - {}",
            Local::now().format("%Y-%m-%d %H:%M:%S"),
            record.level(),
            record.args()
        )
    });

    if let Some(path) = args.log_path() {
        builder.target(Target::Pipe(Box::new(LogTee::create(&path)?)));
    }

    builder.init();
    Ok(())
}

/// Writes log output to stderr and a log file
struct LogTee {
    file: File,
}

impl LogTee {
    fn create(path: &Path) -> io::Result<Self> {
        Ok(Self {
            file: File::create(path)?,
        })
    }
}

impl Write for LogTee {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        io::stderr().write_all(buf)?;
        self.file.write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stderr().flush()?;
        self.file.flush()
    }
}
