use super::DataStore;
use crate::book::AddressBook;
use crate::error::Result;
use crate::model::Record;

/// In-memory storage for testing and development.
/// Does NOT persist data beyond the process.
#[derive(Default)]
pub struct InMemoryStore {
    records: Vec<Record>,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// How many times `save` has been called.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Result<AddressBook> {
        Ok(AddressBook::from_records(self.records.clone()))
    }

    fn save(&mut self, book: &AddressBook) -> Result<()> {
        self.records = book.records().into_iter().cloned().collect();
        self.saves += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Birthday, Name, Phone};

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_contact(mut self, name: &str, phones: &[&str]) -> Self {
            let mut record = Record::new(Name::new(name));
            for phone in phones {
                record.add_phone(Phone::new(*phone).unwrap());
            }
            self.store.records.push(record);
            self
        }

        pub fn with_birthday_contact(mut self, name: &str, phone: &str, birthday: &str) -> Self {
            let mut record = Record::new(Name::new(name));
            record.add_phone(Phone::new(phone).unwrap());
            record.set_birthday(Some(Birthday::new(birthday).unwrap()));
            self.store.records.push(record);
            self
        }
    }
}
