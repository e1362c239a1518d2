use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};

pub fn run(book: &AddressBook) -> CmdResult {
    if book.is_empty() {
        return CmdResult::default().with_message(CmdMessage::info(book.list_all()));
    }
    CmdResult::default().with_listed_records(book.iter().cloned().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::book::EMPTY_BOOK_MESSAGE;
    use crate::commands::add;

    #[test]
    fn test_empty_book_reports_no_contacts() {
        let result = run(&AddressBook::new());
        assert!(result.listed_records.is_empty());
        assert_eq!(result.messages[0].content, EMPTY_BOOK_MESSAGE);
    }

    #[test]
    fn test_lists_in_insertion_order() {
        let mut book = AddressBook::new();
        for name in ["zed", "anna", "mike"] {
            add::run(&mut book, &[name.to_string(), "+380501234567".to_string()]).unwrap();
        }

        let result = run(&book);
        let names: Vec<_> = result
            .listed_records
            .iter()
            .map(|r| r.name().as_str())
            .collect();
        assert_eq!(names, ["Zed", "Anna", "Mike"]);
        assert!(result.messages.is_empty());
    }
}
