//! Line command parsing and dispatch for the interactive shell.
//!
//! # Responsibility
//! - Map one input line to a store operation.
//! - Report rejected input without touching the store.

use liststore_core::{EntryService, ListStore};
use std::io::{self, Write};

pub const HELP_TEXT: &str = "commands:
  add <text>          append an entry
  set <index> <text>  replace the entry at index
  del <index>         remove the entry at index
  list                print all entries
  json                print a JSON snapshot
  help                show this help
  quit                exit";

/// Parsed shell command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(String),
    Set(usize, String),
    Del(usize),
    List,
    Json,
    Help,
    Quit,
}

/// Whether the shell keeps reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Parses one input line.
///
/// Returns `Ok(None)` for blank lines and `Err(message)` for unusable input.
pub fn parse_line(line: &str) -> Result<Option<Command>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    let command = match verb.to_ascii_lowercase().as_str() {
        "add" => Command::Add(rest.to_string()),
        "set" => {
            let (index, text) = match rest.split_once(char::is_whitespace) {
                Some((index, text)) => (index, text),
                None => (rest, ""),
            };
            Command::Set(parse_index(index)?, text.to_string())
        }
        "del" | "rm" => Command::Del(parse_index(rest)?),
        "list" | "ls" => Command::List,
        "json" => Command::Json,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(format!("unknown command `{other}`; type `help`")),
    };
    Ok(Some(command))
}

fn parse_index(raw: &str) -> Result<usize, String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err("missing index".to_string());
    }
    raw.parse::<usize>()
        .map_err(|_| format!("invalid index `{raw}`"))
}

/// Applies one command against the shared store.
///
/// Successful mutations are rendered by the store's listeners; this function
/// only writes rejections and read-only output to `out`.
pub fn dispatch(store: &mut ListStore, command: Command, out: &mut impl Write) -> io::Result<Flow> {
    match command {
        Command::Add(text) => {
            if let Err(err) = EntryService::new(store).add_entry(&text) {
                writeln!(out, "error: {err}")?;
            }
        }
        Command::Set(index, text) => {
            if let Err(err) = EntryService::new(store).edit_entry(index, &text) {
                writeln!(out, "error: {err}")?;
            }
        }
        Command::Del(index) => {
            if let Err(err) = EntryService::new(store).remove_entry(index) {
                writeln!(out, "error: {err}")?;
            }
        }
        Command::List => render_records(store.read_all(), out)?,
        Command::Json => {
            let json = serde_json::to_string_pretty(&store.snapshot())
                .map_err(io::Error::other)?;
            writeln!(out, "{json}")?;
        }
        Command::Help => writeln!(out, "{HELP_TEXT}")?,
        Command::Quit => return Ok(Flow::Exit),
    }
    Ok(Flow::Continue)
}

/// Writes the numbered entry list.
pub fn render_records(records: &[String], out: &mut impl Write) -> io::Result<()> {
    if records.is_empty() {
        return writeln!(out, "(empty)");
    }
    for (index, record) in records.iter().enumerate() {
        writeln!(out, "{index:>3}  {record}")?;
    }
    Ok(())
}
