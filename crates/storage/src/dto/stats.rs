use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::Achievement;

/// Aggregate portfolio statistics, recomputed from the collection on every
/// load or mutation and never persisted.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioStats {
    pub total_hackathons: usize,
    pub total_likes: i64,
    /// Distinct technologies across all entries, first-seen order.
    pub technologies: Vec<String>,
    pub achievements: Vec<Achievement>,
}

/// Public showcase view for a username: profile header plus derived stats.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicProfile {
    pub username: String,
    pub name: String,
    pub bio: String,
    pub avatar: String,
    pub location: Option<String>,
    pub website: Option<String>,
    pub joined_at: DateTime<Utc>,
    pub stats: PortfolioStats,
}
