use super::SnapshotStore;
use crate::error::Result;
use std::collections::HashMap;

/// In-memory snapshot storage for testing.
/// Does NOT persist data.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    snapshots: HashMap<String, String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SnapshotStore for InMemoryStore {
    fn load(&self, name: &str) -> Result<Option<String>> {
        Ok(self.snapshots.get(name).cloned())
    }

    fn save(&mut self, name: &str, data: &str) -> Result<()> {
        self.snapshots.insert(name.to_string(), data.to_string());
        Ok(())
    }

    fn set_aside(&mut self, name: &str) -> Result<()> {
        if let Some(data) = self.snapshots.remove(name) {
            self.snapshots.insert(format!("{name}.corrupt"), data);
        }
        Ok(())
    }
}
