use super::SnapshotStore;
use crate::error::Result;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Keeps each snapshot in `<root>/<name>.json`.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn snapshot_path(&self, name: &str) -> PathBuf {
        self.root.join(format!("{}.json", name))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root)?;
        }
        Ok(())
    }
}

impl SnapshotStore for FileStore {
    fn load(&self, name: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.snapshot_path(name)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&mut self, name: &str, data: &str) -> Result<()> {
        self.ensure_dir()?;
        // Write beside the target first so a failed write keeps the old snapshot.
        let path = self.snapshot_path(name);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, data)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    /// Renames `<name>.json` to `<name>.json.corrupt`, replacing an older copy.
    fn set_aside(&mut self, name: &str) -> Result<()> {
        let path = self.snapshot_path(name);
        match fs::rename(&path, path.with_extension("json.corrupt")) {
            Err(e) if e.kind() != ErrorKind::NotFound => Err(e.into()),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contacts::ContactStore;
    use crate::store::{persist, restore};

    #[test]
    fn missing_file_loads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("nested"));
        assert_eq!(store.load("addressbook").unwrap(), None);
    }

    #[test]
    fn save_creates_dir_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("nested"));
        store.save("notes", "one").unwrap();
        store.save("notes", "two").unwrap();
        assert_eq!(store.load("notes").unwrap().as_deref(), Some("two"));
        assert!(dir.path().join("nested").join("notes.json").exists());
        assert!(!dir.path().join("nested").join("notes.json.tmp").exists());
    }

    #[test]
    fn contacts_survive_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let mut backend = FileStore::new(dir.path().to_path_buf());
        let mut contacts = ContactStore::new();
        contacts.add("John", Some("0501234567")).unwrap();
        persist(&mut backend, "addressbook", &contacts).unwrap();

        let mut reopened = FileStore::new(dir.path().to_path_buf());
        let restored: ContactStore = restore(&mut reopened, "addressbook");
        assert_eq!(restored, contacts);
    }

    #[test]
    fn unreadable_snapshot_is_renamed_aside() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("addressbook.json");
        fs::write(&path, "{ broken").unwrap();

        let mut backend = FileStore::new(dir.path().to_path_buf());
        let restored: ContactStore = restore(&mut backend, "addressbook");
        assert!(restored.is_empty());
        assert!(!path.exists());
        assert_eq!(
            fs::read_to_string(dir.path().join("addressbook.json.corrupt")).unwrap(),
            "{ broken"
        );
    }
}
