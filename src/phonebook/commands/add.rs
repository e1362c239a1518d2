use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{PhonebookError, Result};
use crate::model::{Birthday, Name, Phone, Record};
use tracing::debug;

/// Adds a contact, or merges phones and birthday into an existing one.
///
/// Words starting with `+` are phones, words with exactly two dots are a
/// birthday, and everything else belongs to the name. Every field is
/// validated before the book is touched.
pub fn run(book: &mut AddressBook, args: &[String]) -> Result<CmdResult> {
    if args.len() < 2 {
        return Err(PhonebookError::Argument(
            "Please provide both name and phone number".to_string(),
        ));
    }

    let mut name_words = vec![args[0].as_str()];
    let mut phones = Vec::new();
    let mut birthday = None;

    for arg in &args[1..] {
        if arg.starts_with('+') {
            phones.push(Phone::new(arg.as_str())?);
        } else if arg.matches('.').count() == 2 {
            birthday = Birthday::parse_optional(arg)?;
        } else {
            name_words.push(arg);
        }
    }

    let name = Name::new(name_words.join(" "));
    let mut record = match book.find_record_by_name(name.as_str()) {
        Some(existing) => {
            debug!(key = %existing.key(), "merging into existing contact");
            existing.clone()
        }
        None => Record::new(name),
    };
    for phone in phones {
        record.add_phone(phone);
    }
    if birthday.is_some() {
        record.set_birthday(birthday);
    }

    let message = book.add_record(record.clone());
    Ok(CmdResult::default()
        .with_message(CmdMessage::success(message))
        .with_affected_records(vec![record]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_creates_contact_with_phone_and_birthday() {
        let mut book = AddressBook::new();
        let result = run(&mut book, &args(&["john", "+380501234567", "01.01.1990"])).unwrap();

        assert_eq!(
            result.messages[0].content,
            "Contact John: +380501234567, 01.01.1990 added successfully"
        );
        let record = book.find_record_by_name("john").unwrap();
        assert_eq!(record.phone_list(), "+380501234567");
        assert_eq!(record.birthday().unwrap().to_string(), "01.01.1990");
    }

    #[test]
    fn test_joins_extra_words_into_the_name() {
        let mut book = AddressBook::new();
        run(&mut book, &args(&["john", "+380501234567", "SMITH"])).unwrap();

        assert!(book.find_record_by_name("john smith").is_some());
        assert!(book.find_record_by_name("john").is_none());
        assert_eq!(book.keys().collect::<Vec<_>>(), ["john smith"]);
    }

    #[test]
    fn test_merges_phones_into_existing_contact() {
        let mut book = AddressBook::new();
        run(&mut book, &args(&["john", "+380501234567", "01.01.1990"])).unwrap();
        run(&mut book, &args(&["JOHN", "+380509999999", "+380501234567"])).unwrap();

        assert_eq!(book.len(), 1);
        let record = book.find_record_by_name("john").unwrap();
        assert_eq!(record.phone_list(), "+380501234567, +380509999999");
        // birthday kept when not supplied again
        assert_eq!(record.birthday().unwrap().to_string(), "01.01.1990");
    }

    #[test]
    fn test_new_birthday_overwrites_old_one() {
        let mut book = AddressBook::new();
        run(&mut book, &args(&["john", "01.01.1990"])).unwrap();
        run(&mut book, &args(&["john", "02.02.1992"])).unwrap();

        let record = book.find_record_by_name("john").unwrap();
        assert_eq!(record.birthday().unwrap().to_string(), "02.02.1992");
    }

    #[test]
    fn test_rejects_too_few_arguments() {
        let mut book = AddressBook::new();
        let err = run(&mut book, &args(&["john"])).unwrap_err();
        assert!(matches!(err, PhonebookError::Argument(_)));
        assert!(book.is_empty());
    }

    #[test]
    fn test_invalid_phone_leaves_book_untouched() {
        let mut book = AddressBook::new();
        let err = run(&mut book, &args(&["john", "+380501234567", "+123"])).unwrap_err();
        assert!(matches!(
            err,
            PhonebookError::Validation(ValidationError::InvalidPhone(_))
        ));
        assert_eq!(err.to_string(), "Invalid phone number");
        assert!(book.is_empty());
    }

    #[test]
    fn test_invalid_birthday_is_rejected() {
        let mut book = AddressBook::new();
        let err = run(&mut book, &args(&["john", "31.02.1990"])).unwrap_err();
        assert!(matches!(
            err,
            PhonebookError::Validation(ValidationError::InvalidBirthday(_))
        ));
    }
}
