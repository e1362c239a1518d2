use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{PhonebookError, Result};

pub fn run(book: &mut AddressBook, args: &[String]) -> Result<CmdResult> {
    if args.is_empty() {
        return Err(PhonebookError::Argument(
            "Please provide the name of the contact to remove".to_string(),
        ));
    }

    let name = args.join(" ");
    let removed = book.find_record_by_name(&name).cloned();
    let message = book.remove_record(&name)?;

    Ok(CmdResult::default()
        .with_message(CmdMessage::success(message))
        .with_affected_records(removed.into_iter().collect()))
}
