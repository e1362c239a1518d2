//! # Storage Layer
//!
//! The [`DataStore`] trait hands a whole [`AddressBook`] to a backend and gets
//! one back. There is no incremental persistence: every save writes the full
//! collection, every load reads it.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: a single JSON file holding the records in order.
//!   Saves go through a temporary file and a rename, so an interrupted save
//!   leaves the previous file intact.
//! - [`memory::InMemoryStore`]: keeps the last saved snapshot in memory, for
//!   tests.
//!
//! ## Storage Format
//!
//! ```text
//! [
//!   { "name": "John Smith", "phones": ["+380501234567"], "birthday": "01.01.1990" },
//!   { "name": "Anna", "phones": [], "birthday": null }
//! ]
//! ```

use crate::book::AddressBook;
use crate::error::Result;
use std::path::Path;

pub mod fs;
pub mod memory;

pub trait DataStore {
    /// Load the stored book. A store that holds nothing yet yields an empty book.
    fn load(&self) -> Result<AddressBook>;

    /// Replace the stored book with `book`.
    fn save(&mut self, book: &AddressBook) -> Result<()>;

    /// Where the book lives on disk, for stores that have such a place.
    fn location(&self) -> Option<&Path> {
        None
    }
}
