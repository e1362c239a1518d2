use super::render::{render_error, render_result, PROMPT};
use super::setup::Cli;
use clap::Parser;
use phonebook::api::PhonebookApi;
use phonebook::config::{home_dir, PhonebookConfig};
use phonebook::error::Result;
use phonebook::parser::Command;
use phonebook::store::fs::FileStore;
use phonebook::store::DataStore;
use std::io::{self, BufRead, Write};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut api = init_api(&cli)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let session = match cli.command_line() {
        Some(line) => handle_line(&mut api, &line, &mut out).map(|_| ()),
        None => run_session(&mut api, io::stdin().lock(), &mut out),
    };
    if let Err(e) = &session {
        error!("session ended abnormally: {}", e);
    }

    // Flush regardless of how the session ended
    let saved = api.shutdown()?;
    write!(out, "{}", render_result(&saved))?;
    session
}

/// Logs go to stderr: `RUST_LOG` wins, then `--verbose`, then warnings only.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn init_api(cli: &Cli) -> Result<PhonebookApi<FileStore>> {
    let home = home_dir();
    let config = PhonebookConfig::load(&home).unwrap_or_else(|e| {
        warn!("ignoring unreadable config in {}: {}", home.display(), e);
        PhonebookConfig::default()
    });
    let data_path = cli
        .file
        .clone()
        .unwrap_or_else(|| config.data_path(&home));
    info!(path = %data_path.display(), "opening address book");

    PhonebookApi::open(FileStore::new(data_path))
}

/// Reads commands until an exit keyword or the end of input.
fn run_session<S, R, W>(api: &mut PhonebookApi<S>, input: R, out: &mut W) -> Result<()>
where
    S: DataStore,
    R: BufRead,
    W: Write,
{
    let mut lines = input.lines();
    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        let Some(line) = lines.next() else {
            writeln!(out)?;
            return Ok(());
        };
        if handle_line(api, &line?, out)? {
            return Ok(());
        }
    }
}

/// Runs one command line and prints its outcome. Returns whether it asked to exit.
fn handle_line<S: DataStore, W: Write>(
    api: &mut PhonebookApi<S>,
    line: &str,
    out: &mut W,
) -> Result<bool> {
    let command = Command::parse(line);
    match api.execute(&command) {
        Ok(result) => write!(out, "{}", render_result(&result))?,
        Err(e) => write!(out, "{}", render_error(&e))?,
    }
    Ok(command.is_exit())
}
