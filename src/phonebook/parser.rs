//! # Command Parser
//!
//! Turns one line of user input into a [`Command`]. Keywords are matched as
//! case-insensitive prefixes of the line, in a fixed order, and the first match
//! wins. Whatever follows the keyword is split on whitespace into arguments.
//!
//! Only the keyword is checked here. Argument counts and field formats are the
//! command layer's concern.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(Vec<String>),
    Change(Vec<String>),
    Remove(Vec<String>),
    Search(Vec<String>),
    ClearAll,
    ShowAll,
    Save,
    Hello,
    Exit,
    Unknown,
}

#[derive(Debug, Clone, Copy)]
enum Kind {
    Add,
    Change,
    Remove,
    Search,
    ClearAll,
    ShowAll,
    Save,
    Hello,
    Exit,
}

const KEYWORDS: &[(&str, Kind)] = &[
    ("add", Kind::Add),
    ("change", Kind::Change),
    ("remove", Kind::Remove),
    ("search", Kind::Search),
    ("clear all", Kind::ClearAll),
    ("show all", Kind::ShowAll),
    ("save", Kind::Save),
    ("hello", Kind::Hello),
    ("good bye", Kind::Exit),
    ("exit", Kind::Exit),
    ("close", Kind::Exit),
];

impl Command {
    pub fn parse(line: &str) -> Self {
        let line = line.trim_start();
        for (keyword, kind) in KEYWORDS {
            let Some(head) = line.get(..keyword.len()) else {
                continue;
            };
            if !head.eq_ignore_ascii_case(keyword) {
                continue;
            }
            let args: Vec<String> = line[keyword.len()..]
                .split_whitespace()
                .map(str::to_string)
                .collect();
            return match kind {
                Kind::Add => Command::Add(args),
                Kind::Change => Command::Change(args),
                Kind::Remove => Command::Remove(args),
                Kind::Search => Command::Search(args),
                Kind::ClearAll => Command::ClearAll,
                Kind::ShowAll => Command::ShowAll,
                Kind::Save => Command::Save,
                Kind::Hello => Command::Hello,
                Kind::Exit => Command::Exit,
            };
        }
        Command::Unknown
    }

    pub fn is_exit(&self) -> bool {
        matches!(self, Command::Exit)
    }

    /// Short name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Add(_) => "add",
            Command::Change(_) => "change",
            Command::Remove(_) => "remove",
            Command::Search(_) => "search",
            Command::ClearAll => "clear all",
            Command::ShowAll => "show all",
            Command::Save => "save",
            Command::Hello => "hello",
            Command::Exit => "exit",
            Command::Unknown => "unknown",
        }
    }
}
