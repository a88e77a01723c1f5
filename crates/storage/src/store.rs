use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use crate::backend::{JsonFileBackend, MemoryBackend, StorageBackend};
use crate::error::Result;
use crate::models::{Hackathon, User};
use crate::{ENTRIES_KEY, SESSION_KEY};

/// Handle over a [`StorageBackend`], exposing the two persisted slots as
/// typed load-all/save-all operations. There is no partial-update API:
/// every mutation reads the full collection, transforms it in memory and
/// writes the full collection back.
#[derive(Clone)]
pub struct Store {
    backend: Arc<dyn StorageBackend>,
    simulated_latency: Duration,
}

impl Store {
    /// Open a file-backed store rooted at `dir`.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::with_backend(Arc::new(JsonFileBackend::open(dir)?)))
    }

    /// In-memory store with zero latency, for tests and fakes.
    pub fn in_memory() -> Self {
        Self::with_backend(Arc::new(MemoryBackend::new()))
    }

    pub fn with_backend(backend: Arc<dyn StorageBackend>) -> Self {
        Self {
            backend,
            simulated_latency: Duration::ZERO,
        }
    }

    /// Fixed artificial delay applied by the simulated write operations.
    pub fn with_simulated_latency(mut self, latency: Duration) -> Self {
        self.simulated_latency = latency;
        self
    }

    /// Stand-in for network latency. Never rejects, cannot be cancelled
    /// once scheduled.
    pub(crate) async fn simulate_latency(&self) {
        if !self.simulated_latency.is_zero() {
            tokio::time::sleep(self.simulated_latency).await;
        }
    }

    /// Load the whole hackathon collection. A missing slot reads as the
    /// empty collection.
    pub fn load_entries(&self) -> Result<Vec<Hackathon>> {
        match self.backend.get(ENTRIES_KEY)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    /// Replace the whole hackathon collection.
    pub fn save_entries(&self, entries: &[Hackathon]) -> Result<()> {
        let raw = serde_json::to_string(entries)?;
        self.backend.set(ENTRIES_KEY, &raw)
    }

    /// Load the session user. Malformed session data is logged, the slot
    /// cleared, and treated as no session.
    pub fn load_session(&self) -> Result<Option<User>> {
        let Some(raw) = self.backend.get(SESSION_KEY)? else {
            return Ok(None);
        };

        match serde_json::from_str(&raw) {
            Ok(user) => Ok(Some(user)),
            Err(e) => {
                tracing::warn!("Discarding malformed session data: {}", e);
                self.backend.remove(SESSION_KEY)?;
                Ok(None)
            }
        }
    }

    pub fn save_session(&self, user: &User) -> Result<()> {
        let raw = serde_json::to_string(user)?;
        self.backend.set(SESSION_KEY, &raw)
    }

    pub fn clear_session(&self) -> Result<()> {
        self.backend.remove(SESSION_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_entries_slot_reads_as_empty_collection() {
        let store = Store::in_memory();
        assert!(store.load_entries().unwrap().is_empty());
    }

    #[test]
    fn test_malformed_session_is_cleared_and_treated_as_absent() {
        let backend = Arc::new(MemoryBackend::new());
        backend.set(SESSION_KEY, "{not json").unwrap();

        let store = Store::with_backend(backend.clone());
        assert!(store.load_session().unwrap().is_none());

        // The slot was cleared, not just ignored.
        assert!(backend.get(SESSION_KEY).unwrap().is_none());
    }

    #[test]
    fn test_session_roundtrip() {
        let store = Store::in_memory();
        let user = User::fabricate("ada@example.com", Some("Ada"));

        store.save_session(&user).unwrap();
        let loaded = store.load_session().unwrap().unwrap();
        assert_eq!(loaded.id, user.id);
        assert_eq!(loaded.email, "ada@example.com");

        store.clear_session().unwrap();
        assert!(store.load_session().unwrap().is_none());
    }
}
