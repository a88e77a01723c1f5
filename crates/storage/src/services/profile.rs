use chrono::Utc;

use crate::dto::stats::PublicProfile;
use crate::models::{Hackathon, User, avatar_url};

use super::stats::compute_stats;

const DEFAULT_BIO: &str =
    "Full-stack developer passionate about building innovative solutions at hackathons";

/// Build the public showcase view for a username.
///
/// When the stored session user matches the requested handle, their real
/// profile fields are shown; otherwise a placeholder header is fabricated
/// around the handle. The stats are always derived from the stored
/// collection — there is no per-user filtering in the single-user model.
pub fn build_public_profile(
    username: &str,
    session_user: Option<&User>,
    entries: &[Hackathon],
) -> PublicProfile {
    let stats = compute_stats(entries);

    match session_user.filter(|u| u.username() == username) {
        Some(user) => PublicProfile {
            username: username.to_string(),
            name: user.name.clone(),
            bio: user.bio.clone().unwrap_or_else(|| DEFAULT_BIO.to_string()),
            avatar: user.avatar.clone(),
            location: user.location.clone(),
            website: user.website.clone(),
            joined_at: user.joined_at,
            stats,
        },
        None => PublicProfile {
            username: username.to_string(),
            name: username.to_string(),
            bio: DEFAULT_BIO.to_string(),
            avatar: avatar_url(username),
            location: None,
            website: None,
            joined_at: Utc::now(),
            stats,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matching_session_user_fills_the_header() {
        let mut user = User::fabricate("ada@example.com", Some("Ada Lovelace"));
        user.bio = Some("Engines, analytical".to_string());
        user.location = Some("London".to_string());

        let profile = build_public_profile("ada", Some(&user), &[]);
        assert_eq!(profile.name, "Ada Lovelace");
        assert_eq!(profile.bio, "Engines, analytical");
        assert_eq!(profile.location.as_deref(), Some("London"));
    }

    #[test]
    fn test_unknown_handle_gets_fabricated_header() {
        let profile = build_public_profile("somebody", None, &[]);
        assert_eq!(profile.name, "somebody");
        assert_eq!(profile.bio, DEFAULT_BIO);
        assert!(profile.avatar.ends_with("seed=somebody"));
        assert_eq!(profile.stats.total_hackathons, 0);
    }
}
