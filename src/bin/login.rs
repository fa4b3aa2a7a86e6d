//! Command-line login against the configured authentication API.
//!
//! Runs the same login flow as the web form: schema validation, one call to
//! the authentication endpoint, token storage, and a single notification.
//!
//! # Usage
//!
//! ```bash
//! # Prompt for both fields
//! cargo run --bin login
//!
//! # Provide the username, prompt for the password, print the issued tokens
//! cargo run --bin login -- --username hammad --print-tokens
//!
//! # Override the endpoint
//! cargo run --bin login -- --auth-url http://localhost:8000/auth/login
//! ```
//!
//! # Environment Variables
//!
//! - `AUTH_API_URL`: login endpoint, used when `--auth-url` is absent

use login_portal::application::services::{LoginOutcome, LoginService};
use login_portal::domain::entities::{
    Credentials, Notification, NotificationLevel, generate_session_id,
};
use login_portal::domain::gateways::Notifier;
use login_portal::domain::repositories::SessionRepository;
use login_portal::infrastructure::auth::HttpAuthClient;
use login_portal::infrastructure::session::InMemorySessionStore;

use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use clap::Parser;
use colored::*;
use dialoguer::{Input, Password};
use std::sync::Arc;
use std::time::Duration;

/// Log in from the terminal.
#[derive(Parser)]
#[command(name = "login")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Username (prompted when omitted)
    #[arg(short, long)]
    username: Option<String>,

    /// Login endpoint (defaults to AUTH_API_URL)
    #[arg(long)]
    auth_url: Option<String>,

    /// Print the stored tokens as JSON after a successful login
    #[arg(long)]
    print_tokens: bool,
}

/// Prints notifications straight to the terminal.
struct ConsoleNotifier;

#[async_trait]
impl Notifier for ConsoleNotifier {
    async fn push(&self, _session_id: &str, notification: Notification) {
        match notification.level {
            NotificationLevel::Success => {
                println!("{}", format!("✅ {}", notification.message).green().bold());
            }
            NotificationLevel::Error => {
                eprintln!("{}", format!("❌ {}", notification.message).red().bold());
            }
        }
    }

    async fn take(&self, _session_id: &str) -> Vec<Notification> {
        Vec::new()
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let auth_url = match cli.auth_url {
        Some(url) => url,
        None => std::env::var("AUTH_API_URL").context("AUTH_API_URL must be set")?,
    };

    println!("{}", "🔐 Login".bright_blue().bold());
    println!("  Endpoint: {}", auth_url.cyan());
    println!();

    let username = match cli.username {
        Some(u) => u,
        None => Input::new()
            .with_prompt("Username")
            .allow_empty(true)
            .interact_text()?,
    };

    let password = Password::new()
        .with_prompt("Password")
        .allow_empty_password(true)
        .interact()?;

    let sessions = Arc::new(InMemorySessionStore::new(Duration::from_secs(3600)));
    let service = LoginService::new(
        Arc::new(HttpAuthClient::new(auth_url)),
        sessions.clone(),
        Arc::new(ConsoleNotifier),
    );

    let session_id = generate_session_id();
    let outcome = service
        .submit(&session_id, Credentials::new(username, password))
        .await;

    match outcome {
        LoginOutcome::Authenticated {
            session_id: authenticated_id,
            ..
        } => {
            if cli.print_tokens {
                let tokens = sessions
                    .get_auth(&authenticated_id)
                    .await?
                    .context("Tokens missing from session")?;

                println!();
                println!("{}", serde_json::to_string_pretty(&tokens)?);
            }
            Ok(())
        }
        LoginOutcome::Rejected { .. } => bail!("Login failed"),
        LoginOutcome::Invalid(errors) => {
            for message in [errors.username, errors.password].into_iter().flatten() {
                eprintln!("  {} {}", "•".red(), message.yellow());
            }
            bail!("Invalid credentials")
        }
        LoginOutcome::AlreadySubmitting => bail!("A login is already in progress"),
    }
}
