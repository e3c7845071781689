//! Interactive shell over one observable list store.
//!
//! # Responsibility
//! - Resolve logging configuration from flags and environment.
//! - Own the single `ListStore` and pass it down to command dispatch.
//! - Re-render the list whenever the store reports a change.

mod command;

use clap::Parser;
use command::{dispatch, parse_line, render_records, Flow};
use liststore_core::{core_version, init_logging_from_config, CoreConfig, ListStore};
use log::info;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[clap(name = "liststore", version, about = "Edit an in-memory list of entries")]
struct CommandLine {
    /// trace|debug|info|warn|error; overrides LISTSTORE_LOG_LEVEL.
    #[clap(long)]
    log_level: Option<String>,
    /// Absolute directory for rolling log files; overrides LISTSTORE_LOG_DIR.
    #[clap(long)]
    log_dir: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = CommandLine::parse();

    let mut config = CoreConfig::from_env();
    if let Some(level) = args.log_level {
        config.log_level = level;
    }
    if let Some(dir) = args.log_dir {
        config.log_dir = Some(dir);
    }
    if let Err(err) = config.validate() {
        eprintln!("liststore: {err}");
        return ExitCode::FAILURE;
    }
    if let Err(err) = init_logging_from_config(&config) {
        eprintln!("liststore: {err}");
        return ExitCode::FAILURE;
    }
    info!(
        "event=cli_start module=cli status=ok version={}",
        core_version()
    );

    let mut store = ListStore::new();
    store.subscribe(|records| {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        let _ = render_records(records, &mut out);
    });

    match run_shell(&mut store, io::stdin().lock(), &mut io::stdout()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("liststore: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run_shell(store: &mut ListStore, input: impl BufRead, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "liststore {} (type `help`)", core_version())?;
    for line in input.lines() {
        let line = line?;
        let command = match parse_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(message) => {
                writeln!(out, "error: {message}")?;
                continue;
            }
        };
        if dispatch(store, command, &mut *out)? == Flow::Exit {
            break;
        }
    }
    info!(
        "event=cli_exit module=cli status=ok records={}",
        store.len()
    );
    Ok(())
}
