use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &mut S, book: &AddressBook) -> Result<CmdResult> {
    store.save(book)?;
    let message = match store.location() {
        Some(path) => format!("Address book saved to file: {}", path.display()),
        None => "Address book saved".to_string(),
    };
    Ok(CmdResult::default().with_message(CmdMessage::success(message)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn test_writes_book_to_store() {
        let mut store = StoreFixture::new()
            .with_contact("john", &["+380501234567"])
            .store;
        let mut book = store.load().unwrap();
        book.clear_all();

        let result = run(&mut store, &book).unwrap();
        assert_eq!(result.messages[0].content, "Address book saved");
        assert_eq!(store.save_count(), 1);
        assert!(store.records().is_empty());
    }
}
