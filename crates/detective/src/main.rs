//! Detective Quest
//!
//! Explore a mansion of rooms, collect clues, then name the culprit.

mod error;
mod plain;
mod source;
mod tui;

use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;

use clap::Parser;

use dq_core::{Explorer, Layout, Mansion, SessionOptions, Verdict};
use dq_data::default_layout;

use crate::error::AppError;

/// Detective Quest - explore the mansion and accuse a suspect
#[derive(Parser, Debug)]
#[command(name = "detective")]
#[command(author, version, about = "Detective Quest - collect clues, name the culprit", long_about = None)]
struct Args {
    /// Line-oriented play on stdin/stdout instead of the full-screen UI
    #[arg(long = "plain")]
    plain: bool,

    /// Mansion layout JSON file (defaults to the built-in mansion)
    #[arg(short = 'm', long = "layout")]
    layout: Option<std::path::PathBuf>,

    /// Maximum number of rooms kept in the path record
    #[arg(long = "path-capacity")]
    path_capacity: Option<usize>,

    /// Number of suspect index buckets
    #[arg(long = "buckets")]
    buckets: Option<usize>,

    /// Accuse this suspect instead of prompting (plain mode)
    #[arg(short = 'g', long = "guess")]
    guess: Option<String>,

    /// Print the session report as JSON
    #[arg(long = "json")]
    json: bool,

    /// Echo the event history to stderr at the end
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

impl Args {
    fn options(&self) -> SessionOptions {
        let mut options = SessionOptions::default();
        if let Some(capacity) = self.path_capacity {
            options = options.with_path_capacity(capacity);
        }
        if let Some(buckets) = self.buckets {
            options = options.with_suspect_buckets(buckets);
        }
        options
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("detective: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), AppError> {
    let layout = match &args.layout {
        Some(path) => load_layout(path)?,
        None => default_layout(),
    };
    let mansion = Mansion::build(&layout)?;
    let explorer = Explorer::new(mansion, args.options())?;

    let (explorer, verdict) = if args.plain {
        play_plain(explorer, args)?
    } else {
        tui::run_tui(explorer)?
    };

    if args.json {
        let report = serde_json::json!({
            "report": explorer.report(),
            "verdict": verdict,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if !args.plain {
        if let Some(verdict) = &verdict {
            println!("{verdict}");
        }
    }

    if args.verbose {
        let mut err = io::stderr().lock();
        for event in explorer.history() {
            writeln!(err, "{event}")?;
        }
        let released = explorer.teardown();
        writeln!(
            err,
            "released {} rooms, {} clues, {} suspects",
            released.rooms, released.clues, released.suspects
        )?;
    }

    Ok(())
}

/// With `--json` the interactive text goes to stderr so stdout stays parseable
fn play_plain(
    mut explorer: Explorer,
    args: &Args,
) -> Result<(Explorer, Option<Verdict>), AppError> {
    let stdin = io::stdin().lock();
    let guess = args.guess.as_deref();
    let verdict = if args.json {
        plain::run_plain(&mut explorer, stdin, &mut io::stderr().lock(), guess)?
    } else {
        plain::run_plain(&mut explorer, stdin, &mut io::stdout().lock(), guess)?
    };
    Ok((explorer, Some(verdict)))
}

/// Read and parse a mansion layout
fn load_layout(path: &Path) -> Result<Layout, AppError> {
    let text = fs::read_to_string(path).map_err(|source| AppError::LayoutFile {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&text)?)
}
