use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};

pub fn run(book: &mut AddressBook) -> CmdResult {
    let removed: Vec<_> = book.iter().cloned().collect();
    let message = book.clear_all();
    CmdResult::default()
        .with_message(CmdMessage::success(message))
        .with_affected_records(removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;

    #[test]
    fn test_clears_every_contact() {
        let mut book = AddressBook::new();
        add::run(&mut book, &["john".to_string(), "+380501234567".to_string()]).unwrap();
        add::run(&mut book, &["anna".to_string(), "+380509999999".to_string()]).unwrap();

        let result = run(&mut book);
        assert!(book.is_empty());
        assert_eq!(result.affected_records.len(), 2);
        assert_eq!(
            result.messages[0].content,
            "All contacts have been cleared from the address book."
        );
    }
}
