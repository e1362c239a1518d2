//! # Address Book
//!
//! [`AddressBook`] owns every [`Record`], keyed by the lower-cased normalized
//! name and kept in insertion order. Overwriting a key keeps its original
//! position.
//!
//! The key is always derived from the record's own [`Name`], which cannot
//! change once the record exists, so the map key and the record never drift
//! apart.
//!
//! Operations that users trigger directly return the confirmation text shown
//! to them. Lookups return borrowed records; [`AddressBook::iter`] hands out a
//! fresh iterator on every call and the book keeps no cursor of its own.

use crate::error::{PhonebookError, Result};
use crate::model::{Name, Phone, Record};
use std::collections::HashMap;
use tracing::debug;

pub const EMPTY_BOOK_MESSAGE: &str = "There are no contacts saved.";

#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    entries: HashMap<String, Record>,
    order: Vec<String>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a book from stored records, later duplicates overwriting earlier ones.
    pub fn from_records(records: impl IntoIterator<Item = Record>) -> Self {
        let mut book = Self::new();
        for stored in records {
            let mut record = Record::new(stored.name().clone());
            for phone in stored.phones() {
                record.add_phone(phone.clone());
            }
            record.set_birthday(stored.birthday().copied());
            book.insert(record);
        }
        book
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> + '_ {
        self.order.iter().filter_map(|key| self.entries.get(key))
    }

    /// Every record in insertion order, as handed to a store for saving.
    pub fn records(&self) -> Vec<&Record> {
        self.iter().collect()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.order.iter().map(String::as_str)
    }

    fn insert(&mut self, record: Record) {
        let key = record.key();
        if self.entries.insert(key.clone(), record).is_none() {
            self.order.push(key);
        }
    }

    /// Inserts `record`, replacing any record with the same name.
    pub fn add_record(&mut self, record: Record) -> String {
        let message = confirmation(&record);
        debug!(key = %record.key(), phones = record.phones().len(), "storing record");
        self.insert(record);
        message
    }

    pub fn remove_record(&mut self, name: &str) -> Result<String> {
        let key = Name::new(name).key();
        let record = self
            .entries
            .remove(&key)
            .ok_or_else(|| not_found(name))?;
        self.order.retain(|k| k != &key);
        debug!(%key, "removed record");
        Ok(format!(
            "Contact '{}' removed from address book",
            record.name()
        ))
    }

    /// Swaps `old` for `new` on the named record.
    ///
    /// A record that does not carry `old` is left as it is and the same
    /// confirmation is returned.
    pub fn change_record(&mut self, name: &str, old: &Phone, new: &Phone) -> Result<String> {
        let record = self
            .find_record_mut(name)
            .ok_or_else(|| not_found(name))?;
        if !record.change_phone(old, new) {
            debug!(key = %record.key(), %old, "phone to change not on record");
        }
        Ok(format!(
            "Old phone {} changed to {} for contact '{}'",
            old,
            new,
            record.name()
        ))
    }

    pub fn find_record_by_name(&self, name: &str) -> Option<&Record> {
        self.entries.get(&Name::new(name).key())
    }

    pub fn find_record_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.entries.get_mut(&Name::new(name).key())
    }

    /// Records whose name contains `term` (ignoring case) or whose phones
    /// contain it literally.
    pub fn search(&self, term: &str) -> Result<Vec<&Record>> {
        let term = term.trim();
        let term_lower = term.to_lowercase();
        let matches: Vec<&Record> = self
            .iter()
            .filter(|record| {
                record.key().contains(&term_lower)
                    || record.phones().iter().any(|p| p.as_str().contains(term))
            })
            .collect();

        if matches.is_empty() {
            return Err(PhonebookError::NotFound(format!(
                "No matches found for '{}'",
                term
            )));
        }
        Ok(matches)
    }

    pub fn clear_all(&mut self) -> String {
        debug!(count = self.len(), "clearing address book");
        self.entries.clear();
        self.order.clear();
        "All contacts have been cleared from the address book.".to_string()
    }

    pub fn list_all(&self) -> String {
        if self.is_empty() {
            return EMPTY_BOOK_MESSAGE.to_string();
        }
        self.iter()
            .map(Record::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Confirmation shown after a record is stored.
pub fn confirmation(record: &Record) -> String {
    let birthday = record
        .birthday()
        .map(|b| format!(", {}", b))
        .unwrap_or_default();
    format!(
        "Contact {}: {}{} added successfully",
        record.name(),
        record.phone_list(),
        birthday
    )
}

fn not_found(name: &str) -> PhonebookError {
    PhonebookError::NotFound(format!(
        "Contact '{}' not found in address book",
        Name::new(name)
    ))
}
