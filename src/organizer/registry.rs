//! # Command Registry
//!
//! The fixed table of console verbs, built once at startup. The dispatcher
//! looks verbs up here and checks arity before calling a handler; the
//! resolver draws its vocabulary from the same table, so a suggestion is
//! always a verb that can actually run.

use crate::commands::{birthdays, contacts, notes, session, CmdResult, Workspace};
use crate::error::{OrganizerError, Result};

pub type Handler = fn(&mut Workspace, &[String]) -> Result<CmdResult>;

#[derive(Debug, Clone, Copy)]
pub struct CommandSpec {
    pub verb: &'static str,
    pub aliases: &'static [&'static str],
    /// Minimum number of arguments.
    pub arity: usize,
    pub usage: &'static str,
    pub summary: &'static str,
    pub handler: Handler,
}

impl CommandSpec {
    pub fn matches(&self, verb: &str) -> bool {
        self.verb == verb || self.aliases.contains(&verb)
    }

    pub fn run(&self, ws: &mut Workspace, args: &[String]) -> Result<CmdResult> {
        if args.len() < self.arity {
            return Err(OrganizerError::Arity {
                verb: self.verb.to_string(),
                expected: self.arity,
            });
        }
        (self.handler)(ws, args)
    }
}

macro_rules! spec {
    (
        $verb:literal $(| $alias:literal)*,
        $arity:expr,
        $usage:literal,
        $summary:literal,
        $handler:path
    ) => {
        CommandSpec {
            verb: $verb,
            aliases: &[$($alias),*],
            arity: $arity,
            usage: $usage,
            summary: $summary,
            handler: $handler,
        }
    };
}

const COMMANDS: &[CommandSpec] = &[
    spec!("hello", 0, "hello", "Greet the assistant", session::hello),
    spec!(
        "add",
        2,
        "add <name> <phone>",
        "Add a contact or a phone to it",
        contacts::add
    ),
    spec!(
        "delete-contact",
        1,
        "delete-contact <name>",
        "Delete a contact",
        contacts::delete
    ),
    spec!(
        "change",
        3,
        "change <name> <old phone> <new phone>",
        "Replace a contact's phone",
        contacts::change
    ),
    spec!(
        "search" | "phone",
        1,
        "search <keyword>",
        "Find contacts by name or phone",
        contacts::search
    ),
    spec!("all", 0, "all", "Show all contacts", contacts::all),
    spec!(
        "add-phone",
        2,
        "add-phone <name> <phone>",
        "Add a phone to a contact",
        contacts::add_phone
    ),
    spec!(
        "remove-phone",
        2,
        "remove-phone <name> <phone>",
        "Remove a phone from a contact",
        contacts::remove_phone
    ),
    spec!(
        "add-birthday",
        2,
        "add-birthday <name> <DD.MM.YYYY>",
        "Set a contact's birthday",
        birthdays::add_birthday
    ),
    spec!(
        "show-birthday",
        1,
        "show-birthday <name>",
        "Show a contact's birthday",
        birthdays::show_birthday
    ),
    spec!(
        "birthdays",
        0,
        "birthdays",
        "Birthdays in the next 7 days",
        birthdays::upcoming
    ),
    spec!(
        "birthdays-in",
        1,
        "birthdays-in <days>",
        "Birthdays in the next N days, nearest first",
        birthdays::in_days
    ),
    spec!(
        "add-email",
        2,
        "add-email <name> <email>",
        "Set a contact's email",
        contacts::add_email
    ),
    spec!(
        "show-email",
        1,
        "show-email <name>",
        "Show a contact's email",
        contacts::show_email
    ),
    spec!(
        "add-address",
        2,
        "add-address <name> <address...>",
        "Set a contact's address",
        contacts::add_address
    ),
    spec!(
        "show-address",
        1,
        "show-address <name>",
        "Show a contact's address",
        contacts::show_address
    ),
    spec!(
        "add-note",
        1,
        "add-note <text> [tags...]",
        "Add a note with optional tags",
        notes::add
    ),
    spec!(
        "delete-note",
        1,
        "delete-note <id>",
        "Delete a note",
        notes::delete
    ),
    spec!(
        "edit-note",
        2,
        "edit-note <id> <text...>",
        "Rewrite a note's text",
        notes::edit
    ),
    spec!("show-notes", 0, "show-notes", "Show all notes", notes::show),
    spec!(
        "find-tag",
        1,
        "find-tag <keyword>",
        "Find notes by tag",
        notes::find_tag
    ),
    spec!(
        "find-note",
        1,
        "find-note <keyword>",
        "Find notes by text",
        notes::find_text
    ),
    spec!(
        "add-tag",
        2,
        "add-tag <id> <tag>",
        "Tag a note",
        notes::add_tag
    ),
    spec!(
        "delete-tag",
        2,
        "delete-tag <id> <tag>",
        "Untag a note",
        notes::remove_tag
    ),
    spec!(
        "sort-notes",
        0,
        "sort-notes [date|tag-count|tag-name] [asc|desc]",
        "Show notes in order",
        notes::sort
    ),
    spec!(
        "help" | "show",
        0,
        "help",
        "Show all commands",
        session::help
    ),
    spec!("exit" | "close", 0, "exit", "Save and quit", session::exit),
];

#[derive(Debug, Clone)]
pub struct CommandRegistry {
    commands: &'static [CommandSpec],
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self { commands: COMMANDS }
    }

    pub fn lookup(&self, verb: &str) -> Option<&CommandSpec> {
        self.commands.iter().find(|c| c.matches(verb))
    }

    pub fn commands(&self) -> &[CommandSpec] {
        self.commands
    }

    /// Every verb and alias the dispatcher accepts.
    pub fn vocabulary(&self) -> Vec<String> {
        self.commands
            .iter()
            .flat_map(|c| std::iter::once(c.verb).chain(c.aliases.iter().copied()))
            .map(String::from)
            .collect()
    }
}
