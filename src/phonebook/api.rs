//! # API Facade
//!
//! [`PhonebookApi`] is the single entry point for every phonebook operation. It
//! owns the [`AddressBook`] for the whole session together with the storage
//! backend it came from, and dispatches each call to the matching command
//! module.
//!
//! ## Lifecycle
//!
//! 1. [`PhonebookApi::open`] loads the book from the store.
//! 2. Commands mutate the in-memory book; nothing is written per command.
//! 3. [`PhonebookApi::save`] writes on demand.
//! 4. [`PhonebookApi::shutdown`] flushes the book if it changed since it was
//!    loaded or last saved, and releases the API. UI clients call it on every
//!    way out of a session, not only when the user typed an exit keyword.
//!
//! ## Generic Over DataStore
//!
//! - Production: `PhonebookApi<FileStore>`
//! - Testing: `PhonebookApi<InMemoryStore>`

use crate::book::AddressBook;
use crate::commands;
use crate::error::Result;
use crate::parser::Command;
use crate::store::DataStore;
use tracing::{debug, info};

pub struct PhonebookApi<S: DataStore> {
    store: S,
    book: AddressBook,
    unsaved: bool,
}

impl<S: DataStore> PhonebookApi<S> {
    pub fn open(store: S) -> Result<Self> {
        let book = store.load()?;
        Ok(Self {
            store,
            book,
            unsaved: false,
        })
    }

    pub fn add_contact(&mut self, args: &[String]) -> Result<CmdResult> {
        let result = commands::add::run(&mut self.book, args)?;
        self.unsaved = true;
        Ok(result)
    }

    pub fn change_contact(&mut self, args: &[String]) -> Result<CmdResult> {
        let result = commands::change::run(&mut self.book, args)?;
        self.unsaved = true;
        Ok(result)
    }

    pub fn remove_contact(&mut self, args: &[String]) -> Result<CmdResult> {
        let result = commands::remove::run(&mut self.book, args)?;
        self.unsaved = true;
        Ok(result)
    }

    pub fn search_contacts(&self, args: &[String]) -> Result<CmdResult> {
        commands::search::run(&self.book, args)
    }

    pub fn list_contacts(&self) -> CmdResult {
        commands::list::run(&self.book)
    }

    pub fn clear_contacts(&mut self) -> CmdResult {
        self.unsaved = true;
        commands::clear::run(&mut self.book)
    }

    pub fn save(&mut self) -> Result<CmdResult> {
        let result = commands::save::run(&mut self.store, &self.book)?;
        self.unsaved = false;
        Ok(result)
    }

    /// Whether the book changed since it was loaded or last saved.
    pub fn has_unsaved_changes(&self) -> bool {
        self.unsaved
    }

    /// Runs a parsed command line. `Exit` only produces the farewell; ending
    /// the session is the caller's job, through [`PhonebookApi::shutdown`].
    pub fn execute(&mut self, command: &Command) -> Result<CmdResult> {
        debug!(command = command.name(), "executing");
        match command {
            Command::Add(args) => self.add_contact(args),
            Command::Change(args) => self.change_contact(args),
            Command::Remove(args) => self.remove_contact(args),
            Command::Search(args) => self.search_contacts(args),
            Command::ClearAll => Ok(self.clear_contacts()),
            Command::ShowAll => Ok(self.list_contacts()),
            Command::Save => self.save(),
            Command::Hello => Ok(commands::greet::hello()),
            Command::Exit => Ok(commands::greet::goodbye()),
            Command::Unknown => Ok(commands::greet::unknown()),
        }
    }

    /// Flushes the book to the store and releases it. A book with no
    /// unsaved changes is not written again and the result has no messages.
    pub fn shutdown(mut self) -> Result<CmdResult> {
        info!(count = self.book.len(), unsaved = self.unsaved, "shutting down");
        if !self.unsaved {
            return Ok(CmdResult::default());
        }
        self.save()
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};
