use phonebook::book::AddressBook;
use phonebook::error::PhonebookError;
use phonebook::model::{Birthday, Name, Phone, Record};
use phonebook::store::fs::FileStore;
use phonebook::store::DataStore;
use std::collections::HashSet;
use std::fs;
use tempfile::TempDir;

fn setup() -> (TempDir, FileStore) {
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path().join("address_book.json"));
    (dir, store)
}

fn sample_book() -> AddressBook {
    let mut book = AddressBook::new();

    let mut john = Record::new(Name::new("john smith"));
    john.add_phone(Phone::new("+380501234567").unwrap());
    john.add_phone(Phone::new("+380500000000").unwrap());
    john.set_birthday(Some(Birthday::new("29.02.2000").unwrap()));
    book.add_record(john);

    let mut anna = Record::new(Name::new("anna"));
    anna.add_phone(Phone::new("+380509999999").unwrap());
    book.add_record(anna);

    book.add_record(Record::new(Name::new("no phones")));
    book
}

#[test]
fn test_missing_file_loads_empty_book() {
    let (_dir, store) = setup();
    let book = store.load().unwrap();
    assert!(book.is_empty());
}

#[test]
fn test_round_trip_preserves_keys_names_phones_and_birthdays() {
    let (_dir, mut store) = setup();
    let book = sample_book();

    store.save(&book).unwrap();
    let loaded = store.load().unwrap();

    let original_keys: Vec<_> = book.keys().collect();
    let loaded_keys: Vec<_> = loaded.keys().collect();
    assert_eq!(original_keys, loaded_keys);

    for original in book.iter() {
        let reloaded = loaded.find_record_by_name(original.name().as_str()).unwrap();
        assert_eq!(reloaded.name(), original.name());
        assert_eq!(reloaded.key(), original.key());

        let a: HashSet<_> = original.phones().iter().collect();
        let b: HashSet<_> = reloaded.phones().iter().collect();
        assert_eq!(a, b);

        assert_eq!(reloaded.birthday(), original.birthday());
    }
}

#[test]
fn test_save_creates_parent_directories() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("deeper").join("book.json");
    let mut store = FileStore::new(&path);

    store.save(&sample_book()).unwrap();
    assert!(path.exists());
}

#[test]
fn test_atomic_save_leaves_no_temp_files() {
    let (dir, mut store) = setup();

    store.save(&sample_book()).unwrap();
    store.save(&AddressBook::new()).unwrap();

    let entries: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    assert_eq!(entries, ["address_book.json"]);
    assert!(store.load().unwrap().is_empty());
}

#[test]
fn test_saved_file_is_plain_json() {
    let (_dir, mut store) = setup();
    store.save(&sample_book()).unwrap();

    let content = fs::read_to_string(store.path()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(value[0]["name"], "John Smith");
    assert_eq!(value[0]["phones"][1], "+380500000000");
    assert_eq!(value[0]["birthday"], "29.02.2000");
    assert_eq!(value[1]["birthday"], serde_json::Value::Null);
}

#[test]
fn test_corrupt_file_is_an_error_and_left_alone() {
    let (_dir, store) = setup();
    fs::write(store.path(), "{ not json").unwrap();

    assert!(matches!(
        store.load(),
        Err(PhonebookError::Serialization(_))
    ));
    assert_eq!(fs::read_to_string(store.path()).unwrap(), "{ not json");
}

#[test]
fn test_invalid_stored_phone_is_rejected() {
    let (_dir, store) = setup();
    fs::write(
        store.path(),
        r#"[{"name": "john", "phones": ["0501234567"], "birthday": null}]"#,
    )
    .unwrap();

    assert!(store.load().is_err());
}

#[test]
fn test_hand_edited_names_are_normalized_on_load() {
    let (_dir, store) = setup();
    fs::write(
        store.path(),
        r#"[{"name": "  jOHN   smith ", "phones": ["+380501234567", "+380501234567"]}]"#,
    )
    .unwrap();

    let book = store.load().unwrap();
    let record = book.find_record_by_name("john smith").unwrap();
    assert_eq!(record.name().as_str(), "John Smith");
    assert_eq!(record.phones().len(), 1);
    assert_eq!(book.keys().collect::<Vec<_>>(), ["john smith"]);
}
