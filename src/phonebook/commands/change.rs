use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{PhonebookError, Result};
use crate::model::Phone;

/// `change <name words...> <old phone> <new phone>`
pub fn run(book: &mut AddressBook, args: &[String]) -> Result<CmdResult> {
    if args.len() < 3 {
        return Err(PhonebookError::Argument(
            "Please provide the name, old phone number, and new phone number".to_string(),
        ));
    }

    let split = args.len() - 2;
    let name = args[..split].join(" ");
    let old = Phone::new(args[split].as_str())?;
    let new = Phone::new(args[split + 1].as_str())?;

    let message = book.change_record(&name, &old, &new)?;
    let affected = book.find_record_by_name(&name).cloned().into_iter().collect();
    Ok(CmdResult::default()
        .with_message(CmdMessage::success(message))
        .with_affected_records(affected))
}
