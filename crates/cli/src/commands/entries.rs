use std::io::{self, BufRead, Write as _};

use chrono::NaiveDate;
use clap::Args;
use storage::Store;
use storage::dto::hackathon::{CreateHackathonRequest, UpdateHackathonRequest};
use storage::models::Hackathon;
use storage::repository::HackathonRepository;
use uuid::Uuid;
use validator::Validate;

use super::require_user;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Project name
    #[arg(long)]
    pub name: String,

    /// Hackathon event, e.g. "HackMIT 2024"
    #[arg(long)]
    pub event: String,

    #[arg(long)]
    pub description: String,

    #[arg(long)]
    pub start_date: NaiveDate,

    #[arg(long)]
    pub end_date: NaiveDate,

    #[arg(long, default_value_t = 1)]
    pub team_size: u32,

    #[arg(long, default_value = "")]
    pub role: String,

    /// Repeatable: --tech Rust --tech Postgres
    #[arg(long = "tech")]
    pub technologies: Vec<String>,

    #[arg(long)]
    pub github: Option<String>,

    #[arg(long)]
    pub demo: Option<String>,

    #[arg(long)]
    pub certificate: Option<String>,

    /// Awards, prizes, or special recognition received
    #[arg(long, default_value = "")]
    pub achievements: String,

    #[arg(long)]
    pub placement: Option<String>,
}

pub async fn add(store: &Store, args: AddArgs) -> anyhow::Result<()> {
    require_user(store)?;

    let req = CreateHackathonRequest {
        name: args.name,
        event_name: args.event,
        description: args.description,
        start_date: args.start_date,
        end_date: args.end_date,
        team_size: args.team_size,
        role: args.role,
        technologies: args.technologies,
        github_link: args.github,
        demo_link: args.demo,
        certificate_link: args.certificate,
        achievements: args.achievements,
        placement: args.placement,
    };
    req.validate()?;

    let entry = HackathonRepository::new(store).create(&req).await?;

    println!("✓ Hackathon added to your portfolio");
    print_entry(&entry);

    Ok(())
}

#[derive(Debug, Args)]
pub struct EditArgs {
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub event: Option<String>,

    #[arg(long)]
    pub description: Option<String>,

    #[arg(long)]
    pub start_date: Option<NaiveDate>,

    #[arg(long)]
    pub end_date: Option<NaiveDate>,

    #[arg(long)]
    pub team_size: Option<u32>,

    #[arg(long)]
    pub role: Option<String>,

    /// Repeatable; replaces the stored list when given
    #[arg(long = "tech")]
    pub technologies: Option<Vec<String>>,

    /// An empty string clears the stored link
    #[arg(long)]
    pub github: Option<String>,

    /// An empty string clears the stored link
    #[arg(long)]
    pub demo: Option<String>,

    /// An empty string clears the stored link
    #[arg(long)]
    pub certificate: Option<String>,

    #[arg(long)]
    pub achievements: Option<String>,

    /// An empty string clears the stored placement
    #[arg(long)]
    pub placement: Option<String>,
}

pub async fn edit(store: &Store, id: Uuid, args: EditArgs) -> anyhow::Result<()> {
    require_user(store)?;

    let req = UpdateHackathonRequest {
        name: args.name,
        event_name: args.event,
        description: args.description,
        start_date: args.start_date,
        end_date: args.end_date,
        team_size: args.team_size,
        role: args.role,
        technologies: args.technologies,
        github_link: args.github,
        demo_link: args.demo,
        certificate_link: args.certificate,
        achievements: args.achievements,
        placement: args.placement,
    };
    req.validate()?;

    match HackathonRepository::new(store).update(id, &req).await {
        Ok(entry) => {
            println!("✓ Hackathon updated successfully");
            print_entry(&entry);
            Ok(())
        }
        Err(e) if e.is_not_found() => {
            print_not_found();
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

pub fn delete(store: &Store, id: Uuid, yes: bool) -> anyhow::Result<()> {
    require_user(store)?;

    if !yes {
        let confirmed = confirm(
            "Are you sure you want to delete this hackathon? This action cannot be undone.",
        )?;
        if !confirmed {
            println!("Cancelled.");
            return Ok(());
        }
    }

    match HackathonRepository::new(store).delete(id) {
        Ok(()) => {
            println!("✓ Hackathon removed from your portfolio");
            Ok(())
        }
        Err(e) if e.is_not_found() => {
            print_not_found();
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

pub fn show(store: &Store, id: Uuid) -> anyhow::Result<()> {
    require_user(store)?;

    match HackathonRepository::new(store).find_by_id(id) {
        Ok(entry) => {
            print_entry(&entry);
            Ok(())
        }
        Err(e) if e.is_not_found() => {
            print_not_found();
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

pub fn list(store: &Store) -> anyhow::Result<()> {
    require_user(store)?;

    let entries = HackathonRepository::new(store).list()?;
    if entries.is_empty() {
        println!("No hackathons yet. Add your first one with `hackfolio add`.");
        return Ok(());
    }

    println!("Your Hackathons ({}):", entries.len());
    for entry in &entries {
        let liked = if entry.liked_by_user { "♥ " } else { "" };
        println!(
            "  {} {} — {} ({} → {})  {}{} like(s)  [{}]",
            entry.medal().icon(),
            entry.name,
            entry.event_name,
            entry.start_date,
            entry.end_date,
            liked,
            entry.likes,
            entry.id
        );
    }

    Ok(())
}

pub fn like(store: &Store, id: Uuid) -> anyhow::Result<()> {
    require_user(store)?;

    match HackathonRepository::new(store).toggle_like(id) {
        Ok(entry) => {
            println!(
                "✓ Like updated: {} now has {} like(s){}",
                entry.name,
                entry.likes,
                if entry.liked_by_user { " (liked by you)" } else { "" }
            );
            Ok(())
        }
        Err(e) if e.is_not_found() => {
            print_not_found();
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

fn print_entry(entry: &Hackathon) {
    println!("{} {}", entry.name, entry.medal().icon());
    println!("  Event:        {}", entry.event_name);
    println!("  Dates:        {} → {}", entry.start_date, entry.end_date);
    println!("  Team size:    {}", entry.team_size);
    if !entry.role.is_empty() {
        println!("  Role:         {}", entry.role);
    }
    if !entry.technologies.is_empty() {
        println!("  Technologies: {}", entry.technologies.join(", "));
    }
    if let Some(github) = &entry.github_link {
        println!("  GitHub:       {github}");
    }
    if let Some(demo) = &entry.demo_link {
        println!("  Demo:         {demo}");
    }
    if let Some(certificate) = &entry.certificate_link {
        println!("  Certificate:  {certificate}");
    }
    if let Some(placement) = &entry.placement {
        println!("  Placement:    {placement}");
    }
    if !entry.achievements.is_empty() {
        println!("  Achievements: {}", entry.achievements);
    }
    println!("  Likes:        {}", entry.likes);
    println!("  Description:  {}", entry.description);
    println!("  Id:           {}", entry.id);
}

fn print_not_found() {
    println!("Hackathon not found — the hackathon you're looking for doesn't exist.");
}

fn confirm(prompt: &str) -> io::Result<bool> {
    print!("{prompt} [y/N] ");
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use storage::models::User;

    fn signed_in_store() -> Store {
        let store = Store::in_memory();
        store
            .save_session(&User::fabricate("ada@example.com", None))
            .unwrap();
        store
    }

    #[test]
    fn test_show_refuses_without_session() {
        let store = Store::in_memory();
        assert!(show(&store, Uuid::new_v4()).is_err());
    }

    #[test]
    fn test_like_refuses_without_session() {
        let store = Store::in_memory();
        assert!(like(&store, Uuid::new_v4()).is_err());

        // The collection was not touched.
        assert!(store.load_entries().unwrap().is_empty());
    }

    #[test]
    fn test_show_with_session_renders_not_found() {
        let store = signed_in_store();
        assert!(show(&store, Uuid::new_v4()).is_ok());
    }

    #[test]
    fn test_like_with_session_renders_not_found() {
        let store = signed_in_store();
        assert!(like(&store, Uuid::new_v4()).is_ok());
    }
}
