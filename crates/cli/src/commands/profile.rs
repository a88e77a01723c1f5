use storage::Store;
use storage::repository::{HackathonRepository, SessionRepository};
use storage::services::profile::build_public_profile;

/// Public showcase for a username; does not require a session.
pub fn run(store: &Store, username: &str) -> anyhow::Result<()> {
    let session_user = SessionRepository::new(store).current()?;
    let entries = HackathonRepository::new(store).list()?;

    let profile = build_public_profile(username, session_user.as_ref(), &entries);

    println!("{} (@{})", profile.name, profile.username);
    println!("{}", profile.bio);
    if let Some(location) = &profile.location {
        println!("Location: {location}");
    }
    if let Some(website) = &profile.website {
        println!("Website:  {website}");
    }
    println!("Joined {}", profile.joined_at.format("%B %Y"));
    println!();
    println!(
        "{} hackathons · {} likes · {} technologies",
        profile.stats.total_hackathons,
        profile.stats.total_likes,
        profile.stats.technologies.len()
    );

    if !entries.is_empty() {
        println!();
        for entry in &entries {
            println!(
                "  {} {} — {} ({} likes)",
                entry.medal().icon(),
                entry.name,
                entry.event_name,
                entry.likes
            );
        }
    }

    Ok(())
}
