use crate::lang::Error;
use crate::mach::{Event, Listing, Runtime};
use ansi_term::Style;
use clap::error::ErrorKind;
use clap::Parser;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Runs a Minitran program.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The program to run, usually ending in `.mt`.
    path: PathBuf,
}

pub fn main() -> ExitCode {
    env_logger::init();
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(error) => match error.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => error.exit(),
            _ => {
                println!("Usage: {} <program.mt>", program_name());
                return ExitCode::from(1);
            }
        },
    };
    match main_loop(&args.path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{}", Style::new().bold().paint(format!("Error: {}", error)));
            ExitCode::from(1)
        }
    }
}

fn program_name() -> String {
    std::env::args()
        .next()
        .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string())
}

fn main_loop(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let listing = load(path)?;
    let mut runtime = Runtime::new(listing);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    loop {
        match runtime.execute(5000) {
            Event::Stopped => break,
            Event::Running => {}
            Event::Print(s) => out.write_all(s.as_bytes())?,
        }
    }
    out.flush()?;
    Ok(())
}

fn load(path: &Path) -> Result<Listing, Error> {
    let listing = Listing::load(path)?;
    if listing.is_empty() {
        log::info!("{} has no statements", path.display());
    }
    if log::log_enabled!(log::Level::Trace) {
        for line in listing.lines() {
            log::trace!("{:>4}| {}", line.number(), line);
        }
    }
    Ok(listing)
}
