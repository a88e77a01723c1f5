use serde::Serialize;

/// Portfolio badges, an ordered checklist against fixed thresholds.
/// Thresholds are not mutually exclusive: every qualifying badge is
/// included, and the set is re-evaluated from scratch on each call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Achievement {
    FirstTimer,
    Regular,
    Veteran,
    CommunityFavorite,
    PopularCreator,
}

impl Achievement {
    /// All badges earned by a portfolio with `entry_count` hackathons and
    /// `total_likes` likes across them, in checklist order.
    pub fn earned(entry_count: usize, total_likes: i64) -> Vec<Achievement> {
        let mut earned = Vec::new();

        if entry_count >= 1 {
            earned.push(Achievement::FirstTimer);
        }
        if entry_count >= 5 {
            earned.push(Achievement::Regular);
        }
        if entry_count >= 10 {
            earned.push(Achievement::Veteran);
        }
        if total_likes >= 10 {
            earned.push(Achievement::CommunityFavorite);
        }
        if total_likes >= 50 {
            earned.push(Achievement::PopularCreator);
        }

        earned
    }

    pub fn title(&self) -> &'static str {
        match self {
            Achievement::FirstTimer => "First Timer",
            Achievement::Regular => "Regular",
            Achievement::Veteran => "Veteran",
            Achievement::CommunityFavorite => "Community Favorite",
            Achievement::PopularCreator => "Popular Creator",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Achievement::FirstTimer => "🎯",
            Achievement::Regular => "🔥",
            Achievement::Veteran => "⭐",
            Achievement::CommunityFavorite => "💜",
            Achievement::PopularCreator => "🌟",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_portfolio_earns_nothing() {
        assert!(Achievement::earned(0, 0).is_empty());
    }

    #[test]
    fn test_single_entry_earns_first_timer() {
        assert_eq!(Achievement::earned(1, 0), vec![Achievement::FirstTimer]);
    }

    #[test]
    fn test_five_entries_twelve_likes() {
        assert_eq!(
            Achievement::earned(5, 12),
            vec![
                Achievement::FirstTimer,
                Achievement::Regular,
                Achievement::CommunityFavorite,
            ]
        );
    }

    #[test]
    fn test_thresholds_are_cumulative_not_exclusive() {
        assert_eq!(
            Achievement::earned(10, 50),
            vec![
                Achievement::FirstTimer,
                Achievement::Regular,
                Achievement::Veteran,
                Achievement::CommunityFavorite,
                Achievement::PopularCreator,
            ]
        );
    }

    #[test]
    fn test_thresholds_are_monotonic() {
        // Growing either input never drops a previously earned badge.
        let mut previous: Vec<Achievement> = Vec::new();
        for count in 0..12 {
            let current = Achievement::earned(count, 0);
            assert!(previous.iter().all(|badge| current.contains(badge)));
            previous = current;
        }

        let mut previous: Vec<Achievement> = Vec::new();
        for likes in 0..60 {
            let current = Achievement::earned(3, likes);
            assert!(previous.iter().all(|badge| current.contains(badge)));
            previous = current;
        }
    }
}
