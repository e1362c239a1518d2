//! # Phonebook Architecture
//!
//! Phonebook is a **UI-agnostic contact book library** with a CLI client on top.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, reads input lines, formats output      │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Parser (parser.rs) + API Layer (api.rs)                    │
//! │  - Line → Command, Command → command module                 │
//! │  - Owns the AddressBook and the store for a session         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Argument checks, field validation, merge-on-add          │
//! │  - Returns structured CmdResult values                      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (model.rs, book.rs) and Storage (store/)              │
//! │  - Validated fields, Record, AddressBook                    │
//! │  - DataStore trait: FileStore (JSON), InMemoryStore (tests) │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular Rust arguments, returns
//! `Result<CmdResult>` and never writes to stdout or stderr. Diagnostics go
//! through `tracing`; the binary decides where they end up.
//!
//! ## Errors
//!
//! [`error::PhonebookError`] covers malformed input (`Validation`), unknown
//! contacts or empty searches (`NotFound`), wrong argument counts
//! (`Argument`), and storage failures. The first three are meant to be shown
//! to the user verbatim.
//!
//! ## Module Overview
//!
//! - [`model`]: `Name`, `Phone`, `Birthday`, `Record`
//! - [`book`]: `AddressBook`
//! - [`parser`]: command-line keywords to `Command`
//! - [`commands`]: business logic for each command
//! - [`api`]: the facade UI clients talk to
//! - [`store`]: storage abstraction and implementations
//! - [`config`]: home directory and `config.json`
//! - [`error`]: error types

pub mod api;
pub mod book;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod parser;
pub mod store;
