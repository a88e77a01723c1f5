pub mod auth;
pub mod entries;
pub mod profile;
pub mod stats;

use anyhow::bail;
use storage::Store;
use storage::models::User;
use storage::repository::{SessionRepository, SessionState};

/// Gate for commands that correspond to authenticated pages: presence of
/// the stored session record is the whole identity check.
pub fn require_user(store: &Store) -> anyhow::Result<User> {
    match SessionRepository::new(store).state()? {
        SessionState::Present(user) => Ok(user),
        _ => bail!("You are not signed in. Run `hackfolio login` or `hackfolio signup` first."),
    }
}
