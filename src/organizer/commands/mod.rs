//! # Command Layer
//!
//! One handler per console verb. A handler receives the [`Workspace`] and the
//! already arity-checked argument list, and returns a [`CmdResult`]: messages
//! plus whatever records the verb lists. Handlers never print.

use crate::contacts::{ContactStore, UpcomingBirthday};
use crate::model::{Contact, Note};
use crate::notes::NoteStore;

pub mod birthdays;
pub mod contacts;
pub mod notes;
pub mod session;

/// The two in-memory stores every command operates on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Workspace {
    pub contacts: ContactStore,
    pub notes: NoteStore,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub messages: Vec<CmdMessage>,
    pub contacts: Vec<Contact>,
    pub notes: Vec<Note>,
    pub birthdays: Vec<UpcomingBirthday>,
    /// Known verbs close to an unrecognized one.
    pub suggestions: Vec<String>,
    pub show_help: bool,
    pub exit: bool,
}

impl CmdResult {
    pub fn message(message: CmdMessage) -> Self {
        Self::default().with_message(message)
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_contacts<'a>(mut self, contacts: impl IntoIterator<Item = &'a Contact>) -> Self {
        self.contacts = contacts.into_iter().cloned().collect();
        self
    }

    pub fn with_notes<'a>(mut self, notes: impl IntoIterator<Item = &'a Note>) -> Self {
        self.notes = notes.into_iter().cloned().collect();
        self
    }

    pub fn with_birthdays(mut self, birthdays: Vec<UpcomingBirthday>) -> Self {
        self.birthdays = birthdays;
        self
    }

    pub fn with_suggestions(mut self, suggestions: Vec<String>) -> Self {
        self.suggestions = suggestions;
        self
    }

    /// The first message's text, handy for single-line outcomes.
    pub fn first_message(&self) -> Option<&str> {
        self.messages.first().map(|m| m.content.as_str())
    }
}

/// Joins `args[from..]` with single spaces.
pub(crate) fn rest(args: &[String], from: usize) -> String {
    args.get(from..).unwrap_or_default().join(" ")
}

#[cfg(test)]
pub(crate) fn args(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
