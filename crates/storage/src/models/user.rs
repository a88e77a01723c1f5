use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The locally fabricated session user. Created at login/signup, destroyed
/// on logout; its presence in the session slot is the whole identity model.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub avatar: String,
    pub joined_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl User {
    /// Fabricate a user record for a simulated sign-in/sign-up. The avatar
    /// is a deterministic placeholder seeded by the email address.
    pub fn fabricate(email: &str, name: Option<&str>) -> Self {
        let name = match name {
            Some(name) if !name.trim().is_empty() => name.trim().to_string(),
            _ => local_part(email).to_string(),
        };

        Self {
            id: Uuid::new_v4(),
            email: email.to_string(),
            name,
            avatar: avatar_url(email),
            joined_at: Utc::now(),
            bio: None,
            location: None,
            website: None,
            github: None,
            linkedin: None,
            updated_at: None,
        }
    }

    /// Public handle, the local part of the email address.
    pub fn username(&self) -> &str {
        local_part(&self.email)
    }
}

pub(crate) fn avatar_url(seed: &str) -> String {
    format!("https://api.dicebear.com/7.x/avataaars/svg?seed={seed}")
}

fn local_part(email: &str) -> &str {
    email.split('@').next().unwrap_or(email)
}
