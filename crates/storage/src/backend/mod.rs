mod json_file;
mod memory;

pub use json_file::JsonFileBackend;
pub use memory::MemoryBackend;

use crate::error::Result;

/// A key-value slot store, the persistence contract behind [`crate::Store`].
///
/// Slots hold opaque JSON strings; the whole slot is the unit of read and
/// write. Access is synchronous: the medium is owned by a single logical
/// actor, so no locking beyond interior mutability is involved. Two
/// processes sharing the same backing store race last-write-wins.
pub trait StorageBackend: Send + Sync {
    /// Read the raw contents of a slot, `None` if the slot was never
    /// written or has been removed.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the contents of a slot.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove a slot. Removing an absent slot is a no-op.
    fn remove(&self, key: &str) -> Result<()>;
}
