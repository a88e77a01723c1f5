use storage::Store;
use storage::repository::HackathonRepository;
use storage::services::stats::compute_stats;

use super::require_user;

/// The dashboard overview: totals, distinct technologies and earned
/// achievement badges, all re-derived from the stored collection.
pub fn run(store: &Store) -> anyhow::Result<()> {
    let user = require_user(store)?;

    let entries = HackathonRepository::new(store).list()?;
    let stats = compute_stats(&entries);

    println!("Welcome back, {}!", user.name);
    println!();
    println!("  Total Hackathons: {}", stats.total_hackathons);
    println!("  Total Likes:      {}", stats.total_likes);
    println!("  Technologies:     {}", stats.technologies.len());
    println!("  Achievements:     {}", stats.achievements.len());

    if !stats.technologies.is_empty() {
        println!();
        println!("Technologies: {}", stats.technologies.join(", "));
    }

    if !stats.achievements.is_empty() {
        println!();
        println!("Your Achievements:");
        for badge in &stats.achievements {
            println!("  {} {}", badge.icon(), badge.title());
        }
    }

    Ok(())
}
