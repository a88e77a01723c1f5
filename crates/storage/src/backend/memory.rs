use std::collections::HashMap;
use std::sync::Mutex;

use crate::error::Result;

use super::StorageBackend;

/// In-memory slot store used by tests and as a fake in place of the
/// file-backed store.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    slots: Mutex<HashMap<String, String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let slots = self.slots.lock().expect("slot map poisoned");
        Ok(slots.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut slots = self.slots.lock().expect("slot map poisoned");
        slots.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut slots = self.slots.lock().expect("slot map poisoned");
        slots.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        let backend = MemoryBackend::new();
        assert!(backend.get("hackfolio_user").unwrap().is_none());

        backend.set("hackfolio_user", "{}").unwrap();
        assert_eq!(backend.get("hackfolio_user").unwrap().as_deref(), Some("{}"));

        backend.remove("hackfolio_user").unwrap();
        assert!(backend.get("hackfolio_user").unwrap().is_none());
    }

    #[test]
    fn test_remove_absent_slot_is_noop() {
        let backend = MemoryBackend::new();
        backend.remove("never_written").unwrap();
    }
}
