//! # Contact Model
//!
//! Field types validate on construction, so a value that exists is a value that
//! passed its format check:
//!
//! - [`Name`]: whitespace-normalized, every word capitalized. Never fails.
//! - [`Phone`]: `+` followed by exactly twelve ASCII digits.
//! - [`Birthday`]: a real calendar date written as `dd.mm.yyyy`.
//!
//! A [`Record`] groups one name with its phones and an optional birthday. The
//! name is fixed at construction: the address book keys records by it, and a
//! rename would leave the key pointing at a stale value.
//!
//! ## Leap-day birthdays
//!
//! A birthday on February 29th is celebrated on February 28th in years that
//! have no February 29th.

use crate::error::ValidationError;
use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";
const PHONE_DIGITS: usize = 12;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Name(String);

impl Name {
    pub fn new(text: impl AsRef<str>) -> Self {
        let normalized = text
            .as_ref()
            .split_whitespace()
            .map(capitalize)
            .collect::<Vec<_>>()
            .join(" ");
        Self(normalized)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The address book lookup key: the normalized name, lower-cased.
    pub fn key(&self) -> String {
        self.0.to_lowercase()
    }
}

/// Upper-cases the first char and lower-cases the rest. A first char whose
/// upper case is several chars (`ß`, `ﬁ`) is kept as is, so a second pass
/// never changes the word again.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let mut upper = first.to_uppercase();
    let head = match (upper.next(), upper.next()) {
        (Some(single), None) => single,
        _ => first,
    };
    std::iter::once(head)
        .chain(chars.flat_map(char::to_lowercase))
        .collect()
}

impl From<String> for Name {
    fn from(value: String) -> Self {
        Name::new(value)
    }
}

impl From<Name> for String {
    fn from(value: Name) -> Self {
        value.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A phone number in international form, e.g. `+380501234567`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    pub fn new(text: impl Into<String>) -> Result<Self, ValidationError> {
        let text = text.into();
        if !Self::is_valid(&text) {
            return Err(ValidationError::InvalidPhone(text));
        }
        Ok(Self(text))
    }

    fn is_valid(text: &str) -> bool {
        match text.strip_prefix('+') {
            Some(digits) => {
                digits.len() == PHONE_DIGITS && digits.bytes().all(|b| b.is_ascii_digit())
            }
            None => false,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Serialize for Phone {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Phone {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Phone::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Birthday(NaiveDate);

impl Birthday {
    pub fn new(text: &str) -> Result<Self, ValidationError> {
        let invalid = || ValidationError::InvalidBirthday(text.to_string());

        // chrono accepts unpadded fields, so the dd.mm.yyyy shape is checked first
        if !has_birthday_shape(text) {
            return Err(invalid());
        }
        NaiveDate::parse_from_str(text, BIRTHDAY_FORMAT)
            .map(Self)
            .map_err(|_| invalid())
    }

    /// Empty or blank text means "no birthday" rather than an error.
    pub fn parse_optional(text: &str) -> Result<Option<Self>, ValidationError> {
        if text.trim().is_empty() {
            return Ok(None);
        }
        Self::new(text).map(Some)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// First anniversary on or after `today`.
    pub fn next_occurrence(&self, today: NaiveDate) -> NaiveDate {
        let this_year = self.occurrence_in(today.year());
        if this_year < today {
            self.occurrence_in(today.year() + 1)
        } else {
            this_year
        }
    }

    fn occurrence_in(&self, year: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, self.0.month(), self.0.day())
            .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
            .unwrap_or(self.0)
    }
}

fn has_birthday_shape(text: &str) -> bool {
    let bytes = text.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            2 | 5 => *b == b'.',
            _ => b.is_ascii_digit(),
        })
}

impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_string().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,
    #[serde(default)]
    phones: Vec<Phone>,
    #[serde(default)]
    birthday: Option<Birthday>,
}

impl Record {
    pub fn new(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn key(&self) -> String {
        self.name.key()
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    pub fn set_birthday(&mut self, birthday: Option<Birthday>) {
        self.birthday = birthday;
    }

    /// Appends `phone` unless the record already has it.
    pub fn add_phone(&mut self, phone: Phone) {
        if !self.phones.contains(&phone) {
            self.phones.push(phone);
        }
    }

    /// Replaces every occurrence of `old` with `new`, in place.
    ///
    /// A record without `old` is left untouched. Returns whether anything was
    /// replaced.
    pub fn change_phone(&mut self, old: &Phone, new: &Phone) -> bool {
        let mut changed = false;
        for phone in self.phones.iter_mut().filter(|p| **p == *old) {
            *phone = new.clone();
            changed = true;
        }
        if changed {
            self.dedup_phones();
        }
        changed
    }

    fn dedup_phones(&mut self) {
        let mut seen: Vec<Phone> = Vec::with_capacity(self.phones.len());
        self.phones.retain(|p| {
            if seen.contains(p) {
                false
            } else {
                seen.push(p.clone());
                true
            }
        });
    }

    pub fn days_to_next_birthday(&self, today: NaiveDate) -> Option<i64> {
        self.birthday
            .map(|b| (b.next_occurrence(today) - today).num_days())
    }

    pub fn days_to_next_birthday_from_now(&self) -> Option<i64> {
        self.days_to_next_birthday(Local::now().date_naive())
    }

    /// Comma-joined phone list, as shown in listings and confirmations.
    pub fn phone_list(&self) -> String {
        self.phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// One-line rendering relative to `today`.
    pub fn describe(&self, today: NaiveDate) -> String {
        let mut line = format!("{}: {}", self.name, self.phone_list());
        if let Some(birthday) = &self.birthday {
            line.push_str(&format!(", {}", birthday));
        }
        if let Some(days) = self.days_to_next_birthday(today) {
            line.push_str(&format!(", Days until the next birthday: {}", days));
        }
        line
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe(Local::now().date_naive()))
    }
}
