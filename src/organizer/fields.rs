//! # Field Validators
//!
//! Every value stored on a contact passes through exactly one constructor here.
//! A successfully built value is valid for its whole lifetime: the stores never
//! re-check it, and snapshots deserialize through the same constructors.
//!
//! | kind     | accepted input                          | stored / rendered      |
//! |----------|-----------------------------------------|------------------------|
//! | Name     | any non-blank string                    | trimmed                |
//! | Phone    | `+380XXXXXXXXX`, `380…`, `0…`, 9 digits | `+380XXXXXXXXX`        |
//! | Email    | `local@domain.tld`                      | as given               |
//! | Birthday | `DD.MM.YYYY`                            | `DD.MM.YYYY`           |
//! | Address  | any non-blank string                    | trimmed                |

use crate::error::ValidationError;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

const COUNTRY_PREFIX: &str = "+380";
const SUBSCRIBER_DIGITS: usize = 9;
const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[\w.-]+@[\w.-]+\.[A-Za-z]{2,}$").expect("valid email regex")
});
static BIRTHDAY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{2}\.\d{2}\.\d{4}$").expect("valid birthday regex"));

/// Normalizes a raw phone string into the canonical `+380XXXXXXXXX` form.
///
/// Separators (spaces, dashes, parentheses) are dropped first. A `+` is only
/// kept when no digit precedes it.
pub fn normalize_phone(raw: &str) -> Result<String, ValidationError> {
    let mut has_plus = false;
    let mut digits = String::with_capacity(raw.len());
    for ch in raw.chars() {
        if ch.is_ascii_digit() {
            digits.push(ch);
        } else if ch == '+' && digits.is_empty() {
            has_plus = true;
        }
    }

    let subscriber = if has_plus {
        digits
            .strip_prefix("380")
            .filter(|rest| rest.len() == SUBSCRIBER_DIGITS)
    } else {
        match digits.len() {
            12 => digits.strip_prefix("380"),
            10 => digits.strip_prefix('0'),
            SUBSCRIBER_DIGITS => Some(digits.as_str()),
            _ => None,
        }
    };

    subscriber
        .map(|rest| format!("{}{}", COUNTRY_PREFIX, rest))
        .ok_or(ValidationError::InvalidPhone)
}

fn non_blank(raw: &str, err: ValidationError) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        Err(err)
    } else {
        Ok(trimmed.to_string())
    }
}

/// Declares a validated string newtype that (de)serializes through `parse`.
macro_rules! string_field {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn format(&self) -> String {
                self.0.clone()
            }
        }

        impl TryFrom<String> for $name {
            type Error = ValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::parse(&value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_field!(
    /// Contact name, the unique key of the contact store.
    Name
);
string_field!(
    /// A phone number in canonical `+380XXXXXXXXX` form.
    Phone
);
string_field!(Email);
string_field!(Address);

impl Name {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        non_blank(raw, ValidationError::EmptyName).map(Self)
    }
}

impl Phone {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        normalize_phone(raw).map(Self)
    }
}

impl Email {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        if EMAIL_RE.is_match(raw) {
            Ok(Self(raw.to_string()))
        } else {
            Err(ValidationError::InvalidEmail)
        }
    }
}

impl Address {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        non_blank(raw, ValidationError::EmptyAddress).map(Self)
    }
}

/// A calendar date of birth, parsed from and rendered as `DD.MM.YYYY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Birthday(NaiveDate);

impl Birthday {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let raw = raw.trim();
        if !BIRTHDAY_RE.is_match(raw) {
            return Err(ValidationError::InvalidDate);
        }
        NaiveDate::parse_from_str(raw, BIRTHDAY_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidDate)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    pub fn format(&self) -> String {
        self.0.format(BIRTHDAY_FORMAT).to_string()
    }
}

impl TryFrom<String> for Birthday {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Birthday> for String {
    fn from(value: Birthday) -> Self {
        value.format()
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}

/// The kinds of field a contact carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Name,
    Phone,
    Email,
    Address,
    Birthday,
}

/// One validated contact field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field {
    Name(Name),
    Phone(Phone),
    Email(Email),
    Address(Address),
    Birthday(Birthday),
}

impl Field {
    /// Validates `raw` as a field of the given kind.
    pub fn parse(kind: FieldKind, raw: &str) -> Result<Self, ValidationError> {
        Ok(match kind {
            FieldKind::Name => Field::Name(Name::parse(raw)?),
            FieldKind::Phone => Field::Phone(Phone::parse(raw)?),
            FieldKind::Email => Field::Email(Email::parse(raw)?),
            FieldKind::Address => Field::Address(Address::parse(raw)?),
            FieldKind::Birthday => Field::Birthday(Birthday::parse(raw)?),
        })
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            Field::Name(_) => FieldKind::Name,
            Field::Phone(_) => FieldKind::Phone,
            Field::Email(_) => FieldKind::Email,
            Field::Address(_) => FieldKind::Address,
            Field::Birthday(_) => FieldKind::Birthday,
        }
    }

    pub fn label(&self) -> &'static str {
        match self.kind() {
            FieldKind::Name => "name",
            FieldKind::Phone => "phone",
            FieldKind::Email => "email",
            FieldKind::Address => "address",
            FieldKind::Birthday => "birthday",
        }
    }

    pub fn format(&self) -> String {
        match self {
            Field::Name(v) => v.format(),
            Field::Phone(v) => v.format(),
            Field::Email(v) => v.format(),
            Field::Address(v) => v.format(),
            Field::Birthday(v) => v.format(),
        }
    }
}
