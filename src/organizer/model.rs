use crate::fields::{normalize_phone, Address, Birthday, Email, Field, Name, Phone};
use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Timestamp layout used for note ids.
pub const NOTE_ID_FORMAT: &str = "%Y%m%d%H%M%S";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    name: Name,
    pub phones: Vec<Phone>,
    pub birthday: Option<Birthday>,
    pub email: Option<Email>,
    pub address: Option<Address>,
}

impl Contact {
    pub fn new(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
            email: None,
            address: None,
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Position of the first phone equal to `phone`. Input that normalizes is
    /// compared in canonical form, anything else verbatim.
    pub fn find_phone(&self, phone: &str) -> Option<usize> {
        let target = normalize_phone(phone).unwrap_or_else(|_| phone.to_string());
        self.phones.iter().position(|p| p.as_str() == target)
    }

    /// The optional fields that are currently set, in display order.
    pub fn extra_fields(&self) -> Vec<Field> {
        let mut fields = Vec::new();
        if let Some(b) = self.birthday {
            fields.push(Field::Birthday(b));
        }
        if let Some(e) = &self.email {
            fields.push(Field::Email(e.clone()));
        }
        if let Some(a) = &self.address {
            fields.push(Field::Address(a.clone()));
        }
        fields
    }

    pub fn phones_display(&self) -> String {
        self.phones
            .iter()
            .map(Phone::format)
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Contact name: {}, phones: {}",
            self.name,
            self.phones_display()
        )?;
        for field in self.extra_fields() {
            write!(f, ", {}: {}", field.label(), field.format())?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: String,
    pub text: String,
    pub tags: Vec<String>,
    pub created: NaiveDateTime,
}

impl Note {
    pub fn new(text: String, tags: Vec<String>) -> Self {
        Self::created_at(text, tags, Local::now().naive_local())
    }

    /// Builds a note with an explicit creation instant. Duplicate tags are dropped.
    pub fn created_at(text: String, tags: Vec<String>, created: NaiveDateTime) -> Self {
        let mut note = Self {
            id: created.format(NOTE_ID_FORMAT).to_string(),
            text,
            tags: Vec::with_capacity(tags.len()),
            created,
        };
        for tag in tags {
            note.add_tag(tag);
        }
        note
    }

    pub fn edit(&mut self, text: String) {
        self.text = text;
    }

    /// Returns false when the tag was already present.
    pub fn add_tag(&mut self, tag: String) -> bool {
        if self.tags.contains(&tag) {
            return false;
        }
        self.tags.push(tag);
        true
    }

    /// Returns false when the tag was not present.
    pub fn remove_tag(&mut self, tag: &str) -> bool {
        match self.tags.iter().position(|t| t == tag) {
            Some(pos) => {
                self.tags.remove(pos);
                true
            }
            None => false,
        }
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)?;
        if !self.tags.is_empty() {
            write!(f, " [tags: {}]", self.tags.join(", "))?;
        }
        write!(f, " (Created: {})", self.created.format("%Y-%m-%d %H:%M"))
    }
}
