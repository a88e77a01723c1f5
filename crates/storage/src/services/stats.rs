use itertools::Itertools;

use crate::dto::stats::PortfolioStats;
use crate::models::{Achievement, Hackathon};

/// Compute aggregate statistics over the collection. Pure and stateless:
/// re-evaluated from scratch on every call, never persisted, so the result
/// cannot drift from the stored entries.
pub fn compute_stats(entries: &[Hackathon]) -> PortfolioStats {
    let total_likes = total_likes(entries);

    let technologies: Vec<String> = entries
        .iter()
        .flat_map(|h| h.technologies.iter())
        .unique()
        .cloned()
        .collect();

    PortfolioStats {
        total_hackathons: entries.len(),
        total_likes,
        technologies,
        achievements: Achievement::earned(entries.len(), total_likes),
    }
}

/// Sum of likes across the collection.
pub fn total_likes(entries: &[Hackathon]) -> i64 {
    entries.iter().map(|h| h.likes).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use uuid::Uuid;

    fn entry(likes: i64, technologies: &[&str]) -> Hackathon {
        let now = Utc::now();
        Hackathon {
            id: Uuid::new_v4(),
            name: "entry".to_string(),
            event_name: "event".to_string(),
            description: "description".to_string(),
            start_date: NaiveDate::from_ymd_opt(2024, 9, 14).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 9, 15).unwrap(),
            team_size: 1,
            role: String::new(),
            technologies: technologies.iter().map(|t| t.to_string()).collect(),
            github_link: None,
            demo_link: None,
            certificate_link: None,
            achievements: String::new(),
            placement: None,
            likes,
            liked_by_user: false,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_empty_collection() {
        let stats = compute_stats(&[]);
        assert_eq!(stats.total_hackathons, 0);
        assert_eq!(stats.total_likes, 0);
        assert!(stats.technologies.is_empty());
        assert!(stats.achievements.is_empty());
    }

    #[test]
    fn test_total_likes_is_sum_of_entries() {
        let entries = vec![entry(3, &[]), entry(0, &[]), entry(9, &[])];
        assert_eq!(total_likes(&entries), 12);
        assert_eq!(compute_stats(&entries).total_likes, 12);
    }

    #[test]
    fn test_distinct_technologies_collapse_duplicates() {
        let entries = vec![
            entry(0, &["Rust", "Postgres"]),
            entry(0, &["Rust", "React"]),
            entry(0, &["Postgres"]),
        ];

        let stats = compute_stats(&entries);
        assert_eq!(stats.technologies, vec!["Rust", "Postgres", "React"]);

        let raw_count: usize = entries.iter().map(|h| h.technologies.len()).sum();
        assert!(stats.technologies.len() <= raw_count);
    }

    #[test]
    fn test_five_entries_twelve_likes_scenario() {
        let entries = vec![
            entry(4, &[]),
            entry(0, &[]),
            entry(5, &[]),
            entry(2, &[]),
            entry(1, &[]),
        ];

        let stats = compute_stats(&entries);
        assert_eq!(stats.total_hackathons, 5);
        assert_eq!(stats.total_likes, 12);
        assert_eq!(
            stats.achievements,
            vec![
                Achievement::FirstTimer,
                Achievement::Regular,
                Achievement::CommunityFavorite,
            ]
        );
    }
}
