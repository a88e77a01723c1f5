use chrono::Utc;

use crate::Store;
use crate::dto::user::{LoginRequest, SignupRequest, UpdateProfileRequest};
use crate::error::{Result, StorageError};
use crate::models::User;

/// The session gate: a single optional user record whose presence in the
/// session slot is treated as proof of identity. No token expiry, no
/// refresh, no server-verified identity.
#[derive(Debug, Clone, Default)]
pub enum SessionState {
    /// The session slot has not been checked yet.
    #[default]
    Unknown,
    /// Checked and empty: unauthenticated.
    Absent,
    /// Checked and populated: authenticated.
    Present(User),
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Present(_))
    }

    pub fn user(&self) -> Option<&User> {
        match self {
            SessionState::Present(user) => Some(user),
            _ => None,
        }
    }
}

/// Simulated authentication over the session slot. Sign-in and sign-up
/// fabricate the user locally and always succeed once validation has
/// passed; the artificial delay stands in for the network round trip.
pub struct SessionRepository<'a> {
    store: &'a Store,
}

impl<'a> SessionRepository<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Probe the session slot.
    pub fn state(&self) -> Result<SessionState> {
        Ok(match self.store.load_session()? {
            Some(user) => SessionState::Present(user),
            None => SessionState::Absent,
        })
    }

    /// The current user, if any.
    pub fn current(&self) -> Result<Option<User>> {
        self.store.load_session()
    }

    /// Create an account. The password is discarded after validation.
    pub async fn sign_up(&self, req: &SignupRequest) -> Result<User> {
        self.store.simulate_latency().await;

        let user = User::fabricate(&req.email, Some(&req.name));
        self.store.save_session(&user)?;
        tracing::info!("Account created for {}", user.email);

        Ok(user)
    }

    /// Sign in. Identity is fabricated from the email address, the name
    /// falling back to the email local part.
    pub async fn sign_in(&self, req: &LoginRequest) -> Result<User> {
        self.store.simulate_latency().await;

        let user = User::fabricate(&req.email, None);
        self.store.save_session(&user)?;
        tracing::info!("Signed in as {}", user.email);

        Ok(user)
    }

    /// Merge profile settings over the stored user, stamping the updated
    /// timestamp. NotFound without an active session.
    pub async fn update_profile(&self, req: &UpdateProfileRequest) -> Result<User> {
        self.store.simulate_latency().await;

        let mut user = self.store.load_session()?.ok_or(StorageError::NotFound)?;

        if let Some(name) = &req.name {
            user.name = name.clone();
        }
        if let Some(email) = &req.email {
            user.email = email.clone();
        }
        if let Some(bio) = &req.bio {
            user.bio = Some(bio.clone());
        }
        if let Some(location) = &req.location {
            user.location = Some(location.clone());
        }
        if let Some(website) = &req.website {
            user.website = Some(website.clone());
        }
        if let Some(github) = &req.github {
            user.github = Some(github.clone());
        }
        if let Some(linkedin) = &req.linkedin {
            user.linkedin = Some(linkedin.clone());
        }
        user.updated_at = Some(Utc::now());

        self.store.save_session(&user)?;
        Ok(user)
    }

    /// Destroy the session.
    pub fn sign_out(&self) -> Result<()> {
        self.store.clear_session()
    }
}
