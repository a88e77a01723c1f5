use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One hackathon participation record. The whole collection is persisted
/// as a single JSON array, insertion order preserved; field names follow
/// the stored camelCase layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hackathon {
    pub id: Uuid,
    pub name: String,
    pub event_name: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default = "default_team_size")]
    pub team_size: u32,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certificate_link: Option<String>,
    #[serde(default)]
    pub achievements: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placement: Option<String>,
    #[serde(default)]
    pub likes: i64,
    #[serde(default)]
    pub liked_by_user: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn default_team_size() -> u32 {
    1
}

impl Hackathon {
    /// Flip the like state, moving the counter in lockstep. Un-liking at
    /// zero leaves the counter at zero; no other floor is enforced.
    pub fn toggle_like(&mut self) {
        if self.liked_by_user {
            self.likes = if self.likes == 0 { 0 } else { self.likes - 1 };
        } else {
            self.likes += 1;
        }
        self.liked_by_user = !self.liked_by_user;
    }

    /// Medal derived from the free-text placement, if any.
    pub fn medal(&self) -> Medal {
        match &self.placement {
            None => Medal::None,
            Some(placement) => {
                if placement.contains("1st") || placement.contains("winner") {
                    Medal::Gold
                } else if placement.contains("2nd") {
                    Medal::Silver
                } else if placement.contains("3rd") {
                    Medal::Bronze
                } else {
                    Medal::Participant
                }
            }
        }
    }
}

/// Placement tier shown next to an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Medal {
    Gold,
    Silver,
    Bronze,
    Participant,
    None,
}

impl Medal {
    pub fn icon(&self) -> &'static str {
        match self {
            Medal::Gold => "🥇",
            Medal::Silver => "🥈",
            Medal::Bronze => "🥉",
            Medal::Participant => "🏅",
            Medal::None => "",
        }
    }
}
