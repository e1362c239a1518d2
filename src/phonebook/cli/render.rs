//! # Rendering
//!
//! Turns [`CmdResult`]s and errors into terminal text. Record lines come first,
//! then messages, each message colored by its level. `colored` drops the ANSI
//! codes on its own when stdout is not a terminal.

use colored::Colorize;
use phonebook::api::{CmdMessage, CmdResult, MessageLevel};
use phonebook::error::PhonebookError;
use phonebook::model::Record;

pub const PROMPT: &str = "Enter a command: ";

pub fn render_result(result: &CmdResult) -> String {
    let mut output = render_records(&result.listed_records);
    output.push_str(&render_messages(&result.messages));
    output
}

pub fn render_records(records: &[Record]) -> String {
    records
        .iter()
        .map(|record| format!("{}\n", render_record(record)))
        .collect()
}

fn render_record(record: &Record) -> String {
    let line = record.to_string();
    let name = record.name().as_str();
    // the rendered line always starts with the name
    let rest = line.strip_prefix(name).unwrap_or(&line);
    format!("{}{}", name.bold(), rest)
}

pub fn render_messages(messages: &[CmdMessage]) -> String {
    messages
        .iter()
        .map(|message| format!("{}\n", render_message(message)))
        .collect()
}

fn render_message(message: &CmdMessage) -> String {
    match message.level {
        MessageLevel::Info => message.content.dimmed().to_string(),
        MessageLevel::Success => message.content.green().to_string(),
        MessageLevel::Warning => message.content.yellow().to_string(),
        MessageLevel::Error => message.content.red().to_string(),
    }
}

/// Errors from a command are shown like any other message and never end the session.
pub fn render_error(err: &PhonebookError) -> String {
    render_messages(&[CmdMessage::error(err.to_string())])
}
