//! # API Facade
//!
//! The single entry point for UI clients. [`OrganizerApi`] owns the two stores,
//! the command registry and the snapshot backend.
//!
//! ## Dispatch Boundary
//!
//! [`OrganizerApi::execute`] is where errors stop. Every handler error is turned
//! into an error message on the returned [`CmdResult`]:
//!
//! - validation failures: their own text, verbatim
//! - unknown contact or note: "not found"
//! - missing arguments: "not enough parameters"
//!
//! Unknown verbs are passed to the [`Resolver`]; its suggestions come back in
//! [`CmdResult::suggestions`]. Running a suggestion is up to the caller.
//!
//! ## Generic Over SnapshotStore
//!
//! - Production: `OrganizerApi<FileStore>`
//! - Testing: `OrganizerApi<InMemoryStore>`

use crate::commands::{CmdMessage, CmdResult, Workspace};
use crate::config::OrganizerConfig;
use crate::error::{OrganizerError, Result};
use crate::registry::CommandRegistry;
use crate::resolver::Resolver;
use crate::store::{persist, restore, SnapshotStore};

pub struct OrganizerApi<S: SnapshotStore> {
    backend: S,
    config: OrganizerConfig,
    workspace: Workspace,
    registry: CommandRegistry,
    resolver: Resolver,
}

impl<S: SnapshotStore> OrganizerApi<S> {
    /// Restores both stores from `backend`. Missing snapshots give empty stores.
    pub fn open(mut backend: S, config: OrganizerConfig) -> Self {
        let workspace = Workspace {
            contacts: restore(&mut backend, &config.contacts_snapshot),
            notes: restore(&mut backend, &config.notes_snapshot),
        };
        let registry = CommandRegistry::new();
        let resolver = Resolver::new(registry.vocabulary())
            .with_limits(config.max_suggestions, config.suggestion_cutoff);
        Self {
            backend,
            config,
            workspace,
            registry,
            resolver,
        }
    }

    pub fn save(&mut self) -> Result<()> {
        persist(
            &mut self.backend,
            &self.config.contacts_snapshot,
            &self.workspace.contacts,
        )?;
        persist(
            &mut self.backend,
            &self.config.notes_snapshot,
            &self.workspace.notes,
        )?;
        Ok(())
    }

    /// Parses and runs one console line.
    pub fn execute(&mut self, line: &str) -> CmdResult {
        match parse_line(line) {
            Some((verb, args)) => self.run(&verb, &args),
            None => CmdResult {
                show_help: true,
                ..CmdResult::default()
            },
        }
    }

    /// Runs `verb` with already split arguments.
    pub fn run(&mut self, verb: &str, args: &[String]) -> CmdResult {
        let verb = verb.to_lowercase();
        let Some(spec) = self.registry.lookup(&verb) else {
            return self.unknown(&verb);
        };
        tracing::debug!(verb = spec.verb, args = args.len(), "dispatching command");
        match spec.run(&mut self.workspace, args) {
            Ok(result) => result,
            Err(e) => {
                tracing::debug!(verb = spec.verb, error = ?e, "command failed");
                CmdResult::message(error_message(&e))
            }
        }
    }

    fn unknown(&self, verb: &str) -> CmdResult {
        let suggestions = self.resolver.resolve(verb);
        if suggestions.is_empty() {
            return CmdResult::message(CmdMessage::error(format!(
                "Unknown command '{verb}': not found"
            )));
        }
        CmdResult::message(CmdMessage::warning(format!(
            "Unknown command '{verb}'. Did you mean: {}?",
            suggestions.join(", ")
        )))
        .with_suggestions(suggestions)
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }
}

fn error_message(e: &OrganizerError) -> CmdMessage {
    match e {
        OrganizerError::Validation(v) => CmdMessage::error(v.to_string()),
        OrganizerError::NotFound(_) => CmdMessage::error("not found"),
        OrganizerError::Arity { .. } => CmdMessage::error("not enough parameters"),
        other => CmdMessage::error(other.to_string()),
    }
}

/// Splits a console line into a lower-cased verb and its arguments.
///
/// Words are separated by whitespace; double quotes group words into one
/// argument (`add-note "buy milk" home`). Returns `None` for a blank line.
pub fn parse_line(line: &str) -> Option<(String, Vec<String>)> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => {
                in_quotes = !in_quotes;
                in_token = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            c => {
                current.push(c);
                in_token = true;
            }
        }
    }
    if in_token {
        tokens.push(current);
    }

    let mut tokens = tokens.into_iter();
    let verb = tokens.next()?.to_lowercase();
    Some((verb, tokens.collect()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    fn api() -> OrganizerApi<InMemoryStore> {
        OrganizerApi::open(InMemoryStore::new(), OrganizerConfig::default())
    }

    #[test]
    fn parse_line_handles_quotes_and_case() {
        let (verb, args) = parse_line("  ADD-note \"buy  milk\" home ").unwrap();
        assert_eq!(verb, "add-note");
        assert_eq!(args, vec!["buy  milk", "home"]);
        assert_eq!(parse_line("   "), None);
        let (_, args) = parse_line("edit-note 1 \"\"").unwrap();
        assert_eq!(args, vec!["1", ""]);
    }

    #[test]
    fn errors_render_at_the_boundary() {
        let mut api = api();
        assert_eq!(
            api.execute("add John").first_message(),
            Some("not enough parameters")
        );
        assert_eq!(
            api.execute("add John 123").first_message(),
            Some("invalid phone format")
        );
        assert_eq!(
            api.execute("show-email Ghost").first_message(),
            Some("not found")
        );
        assert_eq!(
            api.execute("sort-notes size").first_message(),
            Some("unsupported sort type")
        );
    }

    #[test]
    fn unknown_verb_gets_suggestions() {
        let mut api = api();
        let result = api.execute("add-not hello");
        assert!(result.suggestions.contains(&"add-note".to_string()));
        assert!(result.suggestions.len() <= 2);

        let result = api.execute("zzz");
        assert!(result.suggestions.is_empty());
        assert_eq!(
            result.first_message(),
            Some("Unknown command 'zzz': not found")
        );
    }

    #[test]
    fn blank_line_shows_help_and_exit_flags() {
        let mut api = api();
        assert!(api.execute("").show_help);
        assert!(api.execute("close").exit);
    }

    #[test]
    fn save_then_reopen_restores_both_stores() {
        let mut api = api();
        api.execute("add John 0501234567");
        api.execute("add-birthday John 15.03.1990");
        api.execute("add-note \"call the bank\" finance");
        api.save().unwrap();

        let OrganizerApi {
            backend, workspace, ..
        } = api;
        let reopened = OrganizerApi::open(backend, OrganizerConfig::default());
        assert_eq!(reopened.workspace(), &workspace);
        assert_eq!(reopened.workspace().notes.len(), 1);
    }

    #[test]
    fn huge_birthday_window_is_answered() {
        let mut api = api();
        api.execute("add John 0501234567");
        api.execute("add-birthday John 15.03.1990");
        let result = api.execute("birthdays-in 100000000");
        assert_eq!(result.birthdays.len(), 1);
        assert_eq!(result.birthdays[0].name, "John");
    }

    #[test]
    fn change_with_unknown_phone_keeps_list() {
        let mut api = api();
        api.execute("add John 0501234567");
        let result = api.execute("change John 0509999999 0671234567");
        assert_eq!(result.first_message(), Some("not found"));
        assert_eq!(
            api.workspace().contacts.find("John").unwrap().phones_display(),
            "+380501234567"
        );
    }
}
