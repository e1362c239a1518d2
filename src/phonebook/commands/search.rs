use crate::book::AddressBook;
use crate::commands::CmdResult;
use crate::error::{PhonebookError, Result};

pub fn run(book: &AddressBook, args: &[String]) -> Result<CmdResult> {
    let [term] = args else {
        return Err(PhonebookError::Argument(
            "Please provide the search term (name or phone number)".to_string(),
        ));
    };

    let matches = book.search(term)?.into_iter().cloned().collect();
    Ok(CmdResult::default().with_listed_records(matches))
}
