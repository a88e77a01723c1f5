pub mod backend;
pub mod dto;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;
mod store;

pub use error::{Result, StorageError};
pub use store::Store;

/// Slot key holding the serialized session user.
pub const SESSION_KEY: &str = "hackfolio_user";

/// Slot key holding the serialized hackathon collection.
pub const ENTRIES_KEY: &str = "hackfolio_hackathons";
