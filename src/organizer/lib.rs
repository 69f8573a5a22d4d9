//! # Organizer Architecture
//!
//! A personal organizer library: contacts with birthday reminders, and tagged
//! notes. The console binary is one client of it; nothing from [`api`] inward
//! prints, exits, or touches a terminal.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Binary (main.rs, args.rs, render.rs)                       │
//! │  - Read loop, colors, tables, confirmation prompts          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs, registry.rs, resolver.rs)               │
//! │  - Splits lines, dispatches verbs, renders errors as text   │
//! │  - Suggests close verbs for unknown ones                    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One handler per verb, returns CmdResult                  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Engines (contacts.rs, notes.rs, fields.rs, model.rs)       │
//! │  - Validation, reminders, search and sort                   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - SnapshotStore trait, FileStore, InMemoryStore            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade and dispatch boundary
//! - [`commands`]: Handlers for each console verb
//! - [`registry`]: The verb table shared by dispatcher and resolver
//! - [`resolver`]: "Did you mean" matching for unknown verbs
//! - [`contacts`]: Contact store and birthday reminders
//! - [`notes`]: Note store, tag/text search and sorting
//! - [`fields`]: Field validators
//! - [`model`]: `Contact` and `Note`
//! - [`store`]: Snapshot persistence
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod contacts;
pub mod error;
pub mod fields;
pub mod model;
pub mod notes;
pub mod registry;
pub mod resolver;
pub mod store;
