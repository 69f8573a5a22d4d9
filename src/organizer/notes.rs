//! # Note Store
//!
//! Notes are keyed by an id derived from their creation second
//! (`YYYYMMDDHHMMSS`). When a second already has a note, the next one gets a
//! `-2`, `-3`, … suffix. Suffixes order numerically (`-10` after `-9`), all of
//! them between their second and the next.
//!
//! Search is always a case-insensitive substring match. Sorting is stable over
//! the store's own order, which is creation order.

use crate::error::{OrganizerError, Result, ValidationError};
use crate::model::Note;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Date,
    TagCount,
    TagName,
}

impl FromStr for SortKey {
    type Err = ValidationError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "date" => Ok(SortKey::Date),
            "tag-count" => Ok(SortKey::TagCount),
            "tag-name" => Ok(SortKey::TagName),
            _ => Err(ValidationError::UnsupportedSortType),
        }
    }
}

impl SortKey {
    fn compare(self, a: &Note, b: &Note) -> Ordering {
        match self {
            SortKey::Date => a.created.cmp(&b.created),
            SortKey::TagCount => a.tags.len().cmp(&b.tags.len()),
            SortKey::TagName => first_tag_key(a).cmp(&first_tag_key(b)),
        }
    }
}

fn first_tag_key(note: &Note) -> String {
    note.tags
        .first()
        .map(|t| t.to_lowercase())
        .unwrap_or_default()
}

/// Store key of a note id: the creation stamp, then the numeric suffix if any.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct NoteKey {
    stamp: String,
    seq: Option<u32>,
}

impl NoteKey {
    fn of(id: &str) -> Self {
        if let Some((stamp, suffix)) = id.rsplit_once('-') {
            let canonical = !suffix.starts_with('0') && suffix.bytes().all(|b| b.is_ascii_digit());
            if let Some(seq) = suffix.parse().ok().filter(|_| canonical) {
                return Self {
                    stamp: stamp.to_string(),
                    seq: Some(seq),
                };
            }
        }
        Self {
            stamp: id.to_string(),
            seq: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteStore {
    notes: BTreeMap<NoteKey, Note>,
}

impl NoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Creates a note stamped with the current time and returns its id.
    pub fn add_note(&mut self, text: &str, tags: Vec<String>) -> Result<String> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ValidationError::EmptyNote.into());
        }
        if tags.iter().any(|t| t.trim().is_empty()) {
            return Err(ValidationError::EmptyTag.into());
        }
        Ok(self.insert(Note::new(text.to_string(), tags)))
    }

    /// Stores `note`, suffixing its id if that id is already taken.
    pub fn insert(&mut self, mut note: Note) -> String {
        if self.notes.contains_key(&NoteKey::of(&note.id)) {
            let base = note.id.clone();
            let mut n = 2;
            while self.notes.contains_key(&NoteKey::of(&format!("{base}-{n}"))) {
                n += 1;
            }
            note.id = format!("{base}-{n}");
        }
        let id = note.id.clone();
        tracing::debug!(note = %id, "note saved");
        self.notes.insert(NoteKey::of(&id), note);
        id
    }

    pub fn get(&self, id: &str) -> Option<&Note> {
        self.notes.get(&NoteKey::of(id))
    }

    fn get_mut(&mut self, id: &str) -> Result<&mut Note> {
        self.notes
            .get_mut(&NoteKey::of(id))
            .ok_or_else(|| OrganizerError::NotFound(format!("note {id}")))
    }

    pub fn delete_note(&mut self, id: &str) -> Result<Note> {
        self.notes
            .remove(&NoteKey::of(id))
            .ok_or_else(|| OrganizerError::NotFound(format!("note {id}")))
    }

    pub fn edit_note(&mut self, id: &str, text: &str) -> Result<()> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ValidationError::EmptyNote.into());
        }
        self.get_mut(id)?.edit(text.to_string());
        Ok(())
    }

    /// Returns false when the note already had the tag.
    pub fn add_tag(&mut self, id: &str, tag: &str) -> Result<bool> {
        let tag = tag.trim();
        if tag.is_empty() {
            return Err(ValidationError::EmptyTag.into());
        }
        Ok(self.get_mut(id)?.add_tag(tag.to_string()))
    }

    /// Returns false when the note did not have the tag.
    pub fn remove_tag(&mut self, id: &str, tag: &str) -> Result<bool> {
        Ok(self.get_mut(id)?.remove_tag(tag.trim()))
    }

    pub fn list_all(&self) -> Vec<&Note> {
        self.notes.values().collect()
    }

    /// Notes with at least one tag containing `keyword`, ignoring case.
    pub fn find_by_tag(&self, keyword: &str) -> Vec<&Note> {
        let needle = keyword.to_lowercase();
        self.notes
            .values()
            .filter(|n| n.tags.iter().any(|t| t.to_lowercase().contains(&needle)))
            .collect()
    }

    pub fn search_text(&self, keyword: &str) -> Vec<&Note> {
        let needle = keyword.to_lowercase();
        self.notes
            .values()
            .filter(|n| n.text.to_lowercase().contains(&needle))
            .collect()
    }

    pub fn get_sorted_notes(&self, sort_type: &str, reverse: bool) -> Result<Vec<&Note>> {
        let key: SortKey = sort_type.parse()?;
        Ok(self.sorted_by(key, reverse))
    }

    pub fn sorted_by(&self, key: SortKey, reverse: bool) -> Vec<&Note> {
        let mut notes = self.list_all();
        if reverse {
            notes.sort_by(|a, b| key.compare(b, a));
        } else {
            notes.sort_by(|a, b| key.compare(a, b));
        }
        notes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    fn at(minute: u32, second: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 10)
            .unwrap()
            .and_hms_opt(12, minute, second)
            .unwrap()
    }

    fn note(text: &str, tags: &[&str], minute: u32) -> Note {
        Note::created_at(
            text.to_string(),
            tags.iter().map(|t| t.to_string()).collect(),
            at(minute, 0),
        )
    }

    fn texts(notes: &[&Note]) -> Vec<String> {
        notes.iter().map(|n| n.text.clone()).collect()
    }

    fn fixture() -> NoteStore {
        let mut store = NoteStore::new();
        store.insert(note("plan sprint", &["Work", "planning"], 1));
        store.insert(note("buy milk", &["home"], 2));
        store.insert(note("call mom", &[], 3));
        store.insert(note("fix bike", &["garage", "home", "weekend"], 4));
        store.insert(note("review PR", &["work"], 5));
        store
    }

    #[test]
    fn find_by_tag_is_case_insensitive_substring() {
        let store = fixture();
        assert_eq!(
            texts(&store.find_by_tag("wor")),
            vec!["plan sprint", "review PR"]
        );
        assert_eq!(texts(&store.find_by_tag("HOM")), vec!["buy milk", "fix bike"]);
        assert!(store.find_by_tag("zzz").is_empty());
    }

    #[test]
    fn search_text_is_case_insensitive() {
        let store = fixture();
        assert_eq!(texts(&store.search_text("MILK")), vec!["buy milk"]);
        assert_eq!(texts(&store.search_text("i")).len(), 4);
    }

    #[test]
    fn sort_by_date_both_directions() {
        let store = fixture();
        let asc = store.get_sorted_notes("date", false).unwrap();
        assert_eq!(asc.first().unwrap().text, "plan sprint");
        let desc = store.get_sorted_notes("date", true).unwrap();
        assert_eq!(desc.first().unwrap().text, "review PR");
    }

    #[test]
    fn sort_by_tag_count_reverse_is_stable() {
        let store = fixture();
        let sorted = store.get_sorted_notes("tag-count", true).unwrap();
        assert_eq!(
            texts(&sorted),
            vec!["fix bike", "plan sprint", "buy milk", "review PR", "call mom"]
        );
    }

    #[test]
    fn sort_by_tag_name_folds_case_and_puts_untagged_first() {
        let store = fixture();
        let sorted = store.get_sorted_notes("tag-name", false).unwrap();
        assert_eq!(
            texts(&sorted),
            vec!["call mom", "fix bike", "buy milk", "plan sprint", "review PR"]
        );
    }

    #[test]
    fn unsupported_sort_type() {
        let store = fixture();
        let err = store.get_sorted_notes("size", false).unwrap_err();
        assert_eq!(err.to_string(), "unsupported sort type");
    }

    #[test]
    fn same_second_ids_do_not_collide() {
        let mut store = NoteStore::new();
        let a = store.insert(note("first", &[], 7));
        let b = store.insert(note("second", &[], 7));
        let c = store.insert(note("third", &[], 7));
        assert_eq!(a, "20250310120700");
        assert_eq!(b, "20250310120700-2");
        assert_eq!(c, "20250310120700-3");
        assert_eq!(store.len(), 3);
        let later = store.insert(note("later", &[], 8));
        let order: Vec<_> = store.list_all().iter().map(|n| n.id.clone()).collect();
        assert_eq!(order, vec![a, b, c, later]);
    }

    #[test]
    fn many_notes_in_one_second_keep_creation_order() {
        let mut store = NoteStore::new();
        let ids: Vec<_> = (0..12)
            .map(|i| store.insert(note(&format!("n{i}"), &[], 7)))
            .collect();
        assert_eq!(ids[10], "20250310120700-11");
        store.insert(note("next second", &[], 8));

        let expected: Vec<String> = (0..12)
            .map(|i| format!("n{i}"))
            .chain(["next second".to_string()])
            .collect();
        assert_eq!(texts(&store.list_all()), expected);
        assert_eq!(
            texts(&store.get_sorted_notes("date", false).unwrap()),
            expected
        );
        assert_eq!(store.get("20250310120700-10").unwrap().text, "n9");
    }

    #[test]
    fn tag_mutations_on_missing_note_are_not_found() {
        let mut store = fixture();
        assert!(matches!(
            store.add_tag("nope", "x"),
            Err(OrganizerError::NotFound(_))
        ));
        assert!(matches!(
            store.remove_tag("nope", "x"),
            Err(OrganizerError::NotFound(_))
        ));
    }

    #[test]
    fn add_tag_is_noop_when_present() {
        let mut store = NoteStore::new();
        let id = store.insert(note("x", &["a"], 1));
        assert!(!store.add_tag(&id, "a").unwrap());
        assert!(store.add_tag(&id, "b").unwrap());
        assert!(store.remove_tag(&id, "a").unwrap());
        assert_eq!(store.get(&id).unwrap().tags, vec!["b"]);
    }

    #[test]
    fn add_edit_delete_note() {
        let mut store = NoteStore::new();
        let id = store.add_note("  draft  ", vec!["idea".into()]).unwrap();
        assert_eq!(store.get(&id).unwrap().text, "draft");

        store.edit_note(&id, "final").unwrap();
        assert_eq!(store.get(&id).unwrap().text, "final");
        assert!(store.edit_note(&id, " ").is_err());

        store.delete_note(&id).unwrap();
        assert!(store.delete_note(&id).is_err());
        assert!(store.add_note("", vec![]).is_err());
    }
}
