//! # Storage Layer
//!
//! The contact store and the note store are persisted as two independent
//! snapshots. A [`SnapshotStore`] only moves named text blobs around; the
//! envelope format lives here, behind [`persist`] and [`restore`].
//!
//! ## Snapshot Format
//!
//! ```text
//! { "version": 1, "entries": [ ...contacts or notes... ] }
//! ```
//!
//! Entries are deserialized through the field validators, so a hand-edited
//! snapshot with a bad phone or date is rejected as a whole. A rejected
//! snapshot is set aside under `<name>.corrupt` before the store starts empty,
//! so the next save never overwrites it.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: `<data dir>/<name>.json`
//! - [`memory::InMemoryStore`]: no persistence, for tests

use crate::contacts::ContactStore;
use crate::error::{OrganizerError, Result};
use crate::model::{Contact, Note};
use crate::notes::NoteStore;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

pub mod fs;
pub mod memory;

pub const SNAPSHOT_VERSION: u32 = 1;

/// Abstract interface for snapshot storage.
pub trait SnapshotStore {
    /// Raw snapshot contents, or `None` if nothing was saved under `name` yet.
    fn load(&self, name: &str) -> Result<Option<String>>;

    /// Replace the snapshot stored under `name`.
    fn save(&mut self, name: &str, data: &str) -> Result<()>;

    /// Move the snapshot stored under `name` out of the way, keeping its contents.
    fn set_aside(&mut self, name: &str) -> Result<()>;
}

/// A store that can be flattened to, and rebuilt from, a list of entries.
pub trait Snapshot: Sized + Default {
    type Entry: Serialize + DeserializeOwned;

    fn entries(&self) -> Vec<Self::Entry>;

    fn from_entries(entries: Vec<Self::Entry>) -> Self;
}

impl Snapshot for ContactStore {
    type Entry = Contact;

    fn entries(&self) -> Vec<Contact> {
        self.list_all().into_iter().cloned().collect()
    }

    fn from_entries(entries: Vec<Contact>) -> Self {
        let mut store = ContactStore::new();
        for contact in entries {
            store.insert(contact);
        }
        store
    }
}

impl Snapshot for NoteStore {
    type Entry = Note;

    fn entries(&self) -> Vec<Note> {
        self.list_all().into_iter().cloned().collect()
    }

    fn from_entries(entries: Vec<Note>) -> Self {
        let mut store = NoteStore::new();
        for note in entries {
            store.insert(note);
        }
        store
    }
}

#[derive(Serialize, Deserialize)]
struct Envelope<E> {
    version: u32,
    entries: Vec<E>,
}

pub fn encode<T: Snapshot>(store: &T) -> Result<String> {
    let envelope = Envelope {
        version: SNAPSHOT_VERSION,
        entries: store.entries(),
    };
    Ok(serde_json::to_string_pretty(&envelope)?)
}

pub fn decode<T: Snapshot>(data: &str) -> Result<T> {
    let envelope: Envelope<T::Entry> = serde_json::from_str(data)?;
    if envelope.version != SNAPSHOT_VERSION {
        return Err(OrganizerError::Snapshot(format!(
            "unsupported snapshot version {}",
            envelope.version
        )));
    }
    Ok(T::from_entries(envelope.entries))
}

pub fn persist<S: SnapshotStore, T: Snapshot>(
    backend: &mut S,
    name: &str,
    store: &T,
) -> Result<()> {
    let data = encode(store)?;
    backend.save(name, &data)?;
    tracing::info!(snapshot = name, "snapshot saved");
    Ok(())
}

/// Loads the snapshot saved under `name`.
///
/// Never fails: a missing or unreadable snapshot yields an empty store. An
/// unreadable one is set aside first.
pub fn restore<S: SnapshotStore, T: Snapshot>(backend: &mut S, name: &str) -> T {
    let loaded = backend
        .load(name)
        .and_then(|data| data.map(|d| decode::<T>(&d)).transpose());
    match loaded {
        Ok(Some(store)) => {
            tracing::info!(snapshot = name, "snapshot restored");
            store
        }
        Ok(None) => {
            tracing::info!(snapshot = name, "no snapshot found, starting empty");
            T::default()
        }
        Err(e) => {
            tracing::warn!(snapshot = name, error = %e, "snapshot unreadable, starting empty");
            if let Err(e) = backend.set_aside(name) {
                tracing::error!(snapshot = name, error = %e, "could not set snapshot aside");
            }
            T::default()
        }
    }
}
