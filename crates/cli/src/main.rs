use clap::{Parser, Subcommand};
use storage::Store;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

mod commands;
mod config;

use config::Config;

#[derive(Parser)]
#[command(name = "hackfolio")]
#[command(about = "Track and showcase your hackathon participation", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an account (simulated) and start a session
    Signup {
        #[arg(long)]
        email: String,

        #[arg(long)]
        name: String,

        #[arg(long)]
        password: String,

        /// Defaults to the password when omitted
        #[arg(long)]
        confirm_password: Option<String>,
    },
    /// Sign in (simulated) and start a session
    Login {
        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,
    },
    /// End the current session
    Logout,
    /// Show the current session state
    Whoami,
    /// Update profile settings
    Settings(commands::auth::SettingsArgs),
    /// Record a new hackathon entry
    Add(commands::entries::AddArgs),
    /// Edit an existing entry
    Edit {
        id: Uuid,

        #[command(flatten)]
        changes: commands::entries::EditArgs,
    },
    /// Delete an entry
    Delete {
        id: Uuid,

        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Show one entry in full
    Show { id: Uuid },
    /// List all entries
    List,
    /// Toggle the like on an entry
    Like { id: Uuid },
    /// Show portfolio statistics and achievements
    Stats,
    /// Show the public profile for a username
    Profile { username: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("storage={log_level}").into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    let store = Store::open(&config.data_dir)?.with_simulated_latency(config.simulated_latency);

    match cli.command {
        Commands::Signup {
            email,
            name,
            password,
            confirm_password,
        } => commands::auth::signup(&store, email, name, password, confirm_password).await,
        Commands::Login { email, password } => {
            commands::auth::login(&store, email, password).await
        }
        Commands::Logout => commands::auth::logout(&store),
        Commands::Whoami => commands::auth::whoami(&store),
        Commands::Settings(args) => commands::auth::settings(&store, args).await,
        Commands::Add(args) => commands::entries::add(&store, args).await,
        Commands::Edit { id, changes } => commands::entries::edit(&store, id, changes).await,
        Commands::Delete { id, yes } => commands::entries::delete(&store, id, yes),
        Commands::Show { id } => commands::entries::show(&store, id),
        Commands::List => commands::entries::list(&store),
        Commands::Like { id } => commands::entries::like(&store, id),
        Commands::Stats => commands::stats::run(&store),
        Commands::Profile { username } => commands::profile::run(&store, &username),
    }
}
