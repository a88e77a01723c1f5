use clap::Args;
use storage::Store;
use storage::dto::user::{LoginRequest, SignupRequest, UpdateProfileRequest};
use storage::repository::{SessionRepository, SessionState};
use validator::Validate;

use super::require_user;

pub async fn signup(
    store: &Store,
    email: String,
    name: String,
    password: String,
    confirm_password: Option<String>,
) -> anyhow::Result<()> {
    let confirm_password = confirm_password.unwrap_or_else(|| password.clone());
    let req = SignupRequest {
        email,
        name,
        password,
        confirm_password,
    };
    req.validate()?;

    let user = SessionRepository::new(store).sign_up(&req).await?;

    println!("✓ Account created successfully!");
    println!("Signed in as {} <{}>", user.name, user.email);

    Ok(())
}

pub async fn login(store: &Store, email: String, password: String) -> anyhow::Result<()> {
    let req = LoginRequest { email, password };
    req.validate()?;

    let user = SessionRepository::new(store).sign_in(&req).await?;

    println!("✓ Welcome back, {}!", user.name);

    Ok(())
}

pub fn logout(store: &Store) -> anyhow::Result<()> {
    SessionRepository::new(store).sign_out()?;
    println!("Signed out.");
    Ok(())
}

pub fn whoami(store: &Store) -> anyhow::Result<()> {
    match SessionRepository::new(store).state()? {
        SessionState::Present(user) => {
            println!("{} <{}>", user.name, user.email);
            println!("Username: @{}", user.username());
            println!("Joined:   {}", user.joined_at.format("%B %Y"));
        }
        _ => println!("Not signed in."),
    }
    Ok(())
}

#[derive(Debug, Args)]
pub struct SettingsArgs {
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    #[arg(long)]
    pub bio: Option<String>,

    #[arg(long)]
    pub location: Option<String>,

    #[arg(long)]
    pub website: Option<String>,

    #[arg(long)]
    pub github: Option<String>,

    #[arg(long)]
    pub linkedin: Option<String>,
}

pub async fn settings(store: &Store, args: SettingsArgs) -> anyhow::Result<()> {
    require_user(store)?;

    let req = UpdateProfileRequest {
        name: args.name,
        email: args.email,
        bio: args.bio,
        location: args.location,
        website: args.website,
        github: args.github,
        linkedin: args.linkedin,
    };
    req.validate()?;

    let user = SessionRepository::new(store).update_profile(&req).await?;

    println!("✓ Profile updated successfully");
    println!("{}", serde_json::to_string_pretty(&user)?);

    Ok(())
}
