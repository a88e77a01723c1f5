use std::time::Duration;

use chrono::NaiveDate;
use storage::Store;
use storage::dto::hackathon::CreateHackathonRequest;
use storage::dto::user::SignupRequest;
use storage::repository::{HackathonRepository, SessionRepository};
use storage::services::stats::compute_stats;

fn entry_request(name: &str, technologies: &[&str]) -> CreateHackathonRequest {
    CreateHackathonRequest {
        name: name.to_string(),
        event_name: "HackMIT 2024".to_string(),
        description: "A weekend build".to_string(),
        start_date: NaiveDate::from_ymd_opt(2024, 9, 14).unwrap(),
        end_date: NaiveDate::from_ymd_opt(2024, 9, 15).unwrap(),
        team_size: 3,
        role: "Backend".to_string(),
        technologies: technologies.iter().map(|t| t.to_string()).collect(),
        github_link: Some("https://github.com/ada/routefinder".to_string()),
        demo_link: None,
        certificate_link: None,
        achievements: String::new(),
        placement: None,
    }
}

#[tokio::test]
async fn full_portfolio_flow_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();

    let created_id = {
        let store = Store::open(dir.path())
            .unwrap()
            .with_simulated_latency(Duration::from_millis(1));

        let sessions = SessionRepository::new(&store);
        sessions
            .sign_up(&SignupRequest {
                email: "ada@example.com".to_string(),
                name: "Ada".to_string(),
                password: "hunter2".to_string(),
                confirm_password: "hunter2".to_string(),
            })
            .await
            .unwrap();

        let entries = HackathonRepository::new(&store);
        let first = entries
            .create(&entry_request("Routefinder", &["Rust", "Postgres"]))
            .await
            .unwrap();
        entries
            .create(&entry_request("Plantsense", &["Rust", "React"]))
            .await
            .unwrap();

        entries.toggle_like(first.id).unwrap();
        first.id
    };

    // A fresh store over the same directory sees everything.
    let store = Store::open(dir.path()).unwrap();

    let sessions = SessionRepository::new(&store);
    let user = sessions.current().unwrap().expect("session persisted");
    assert_eq!(user.email, "ada@example.com");

    let entries = HackathonRepository::new(&store);
    let all = entries.list().unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].name, "Routefinder");

    let liked = entries.find_by_id(created_id).unwrap();
    assert_eq!(liked.likes, 1);
    assert!(liked.liked_by_user);

    let stats = compute_stats(&all);
    assert_eq!(stats.total_hackathons, 2);
    assert_eq!(stats.total_likes, 1);
    assert_eq!(stats.technologies, vec!["Rust", "Postgres", "React"]);
}

#[tokio::test]
async fn delete_and_stats_stay_consistent() {
    let dir = tempfile::tempdir().unwrap();
    let store = Store::open(dir.path()).unwrap();
    let entries = HackathonRepository::new(&store);

    let a = entries.create(&entry_request("a", &["Rust"])).await.unwrap();
    entries.create(&entry_request("b", &["Go"])).await.unwrap();

    entries.toggle_like(a.id).unwrap();
    entries.delete(a.id).unwrap();

    let remaining = entries.list().unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].name, "b");

    // Stats are derived from the collection, so the deleted entry's like
    // disappears with it.
    let stats = compute_stats(&remaining);
    assert_eq!(stats.total_likes, 0);
    assert_eq!(stats.technologies, vec!["Go"]);
}
