//! LearnPortal Terminal Dashboard
//!
//! Views over the LearnPortal API: class list, class rosters, and
//! home-learning progress. Every data command gates on a stored,
//! unexpired session.
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `LEARNPORTAL_CONFIG` | - | Path to a config TOML |
//! | `LEARNPORTAL_API_BASE_URL` | from config | Backend base URL |
//! | `LEARNPORTAL_USERNAME` | from config | Login username |
//! | `LEARNPORTAL_PASSWORD` | - | Login password (skips the prompt) |
//! | `LEARNPORTAL_SESSION_FILE` | user data dir | Session file path |
//! | `RUST_LOG` | `info` | Log level |

use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration as StdDuration;

use anyhow::{Context, Result};
use chrono::{Duration, NaiveDate, Utc};
use clap::{Parser, Subcommand};
use tracing::debug;

use lp_client::{Client, ClientConfig, FileSessionStore, Session};
use lp_config::{AppConfig, ConfigLoader};

mod render;

#[derive(Parser, Debug)]
#[command(
    name = "lp-dashboard",
    version,
    about = "Terminal dashboard for LearnPortal classes, students, and home-learning progress"
)]
struct Cli {
    /// Config file path (otherwise the standard search paths apply)
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Log in and store the session
    Login {
        /// Login username; defaults to api.username from the config
        #[arg(long)]
        username: Option<String>,

        /// Password; read from the environment or prompted when absent
        #[arg(long, env = "LEARNPORTAL_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },
    /// Log out and clear the stored session
    Logout,
    /// Show the logged-in user and session expiry
    Whoami,
    /// List classes
    Classes {
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    /// List the students of a class
    Students {
        /// Class id
        #[arg(long)]
        class: String,

        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    /// Show home-learning progress for a class and date
    Progress {
        /// Class id
        #[arg(long)]
        class: String,

        /// Date (YYYY-MM-DD); defaults to today in UTC+7
        #[arg(long)]
        date: Option<NaiveDate>,

        #[arg(long, default_value_t = 1)]
        page: u32,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    lp_common::init_logging("lp-dashboard");

    let cli = Cli::parse();

    let loader = match &cli.config {
        Some(path) => ConfigLoader::with_path(path),
        None => ConfigLoader::new(),
    };
    let config = loader.load().context("failed to load configuration")?;
    config.validate().context("invalid configuration")?;

    let session_path = session_file_path(&config)?;
    debug!(path = %session_path.display(), "Session file");
    let store = Arc::new(FileSessionStore::new(session_path));

    let client_config = ClientConfig::new(config.api.base_url.clone())
        .with_timeout(StdDuration::from_secs(config.api.timeout_secs))
        .with_fetch_page_size(config.api.fetch_page_size);
    let client = Client::new(client_config, store)?;

    match cli.command {
        Command::Login { username, password } => login(&client, &config, username, password).await,
        Command::Logout => logout(&client, &config).await,
        Command::Whoami => whoami(&client),
        Command::Classes { page } => classes(&client, &config, page).await,
        Command::Students { class, page } => students(&client, &config, &class, page).await,
        Command::Progress { class, date, page } => {
            progress(&client, &config, &class, date, page).await
        }
    }
}

/// Resolve the session file: config value, or the per-user data directory.
fn session_file_path(config: &AppConfig) -> Result<PathBuf> {
    if !config.session.file.is_empty() {
        return Ok(PathBuf::from(&config.session.file));
    }
    let data_dir = dirs::data_dir().context("no user data directory available")?;
    Ok(data_dir.join("learnportal").join("session.json"))
}

/// The dashboard's "today" is UTC+7 regardless of host timezone.
fn today_utc7() -> NaiveDate {
    (Utc::now() + Duration::hours(7)).date_naive()
}

/// Gate for data commands: a valid stored session, or a pointer to `login`.
fn require_session(client: &Client) -> Result<Session> {
    client
        .auth()
        .current()
        .context("Not logged in or session expired - run `lp-dashboard login`")
}

async fn login(
    client: &Client,
    config: &AppConfig,
    username: Option<String>,
    password: Option<String>,
) -> Result<()> {
    let username = username
        .filter(|u| !u.is_empty())
        .or_else(|| Some(config.api.username.clone()).filter(|u| !u.is_empty()))
        .context("no username - pass --username or set api.username")?;

    let password = match password {
        Some(password) => password,
        None => prompt_password(&username)?,
    };

    let session = client.auth().login(&username, &password).await?;
    println!(
        "Logged in as {} (session valid until {})",
        session.user_name,
        session.expire_time.format("%Y-%m-%d %H:%M UTC")
    );
    Ok(())
}

fn prompt_password(username: &str) -> Result<String> {
    print!("Password for {}: ", username);
    std::io::stdout().flush()?;
    let mut password = String::new();
    std::io::stdin().read_line(&mut password)?;
    Ok(password.trim_end_matches(['\r', '\n']).to_string())
}

async fn logout(client: &Client, config: &AppConfig) -> Result<()> {
    client.auth().logout(&config.api.username).await?;
    println!("Logged out");
    Ok(())
}

fn whoami(client: &Client) -> Result<()> {
    let session = require_session(client)?;
    println!(
        "{} (session valid until {})",
        session.user_name,
        session.expire_time.format("%Y-%m-%d %H:%M UTC")
    );
    Ok(())
}

async fn classes(client: &Client, config: &AppConfig, page: u32) -> Result<()> {
    let session = require_session(client)?;
    let result = client
        .classes()
        .list(&session.token, page, config.ui.page_size)
        .await?;

    if result.data.is_empty() {
        println!("No classes found");
        return Ok(());
    }
    render::classes_table(&result.data);
    render::page_footer(result.page, result.total_pages);
    Ok(())
}

async fn students(client: &Client, config: &AppConfig, class: &str, page: u32) -> Result<()> {
    let session = require_session(client)?;
    let result = client
        .students()
        .list(&session.token, class, page, config.ui.page_size)
        .await?;

    if result.data.is_empty() {
        println!("No students found");
        return Ok(());
    }
    render::students_table(&result.data);
    render::page_footer(result.page, result.total_pages);
    Ok(())
}

async fn progress(
    client: &Client,
    config: &AppConfig,
    class: &str,
    date: Option<NaiveDate>,
    page: u32,
) -> Result<()> {
    let session = require_session(client)?;
    let date = date.unwrap_or_else(today_utc7);

    let result = client
        .progress()
        .page(&session.token, class, date, page, config.ui.page_size)
        .await?;

    if result.data.is_empty() {
        println!("No learning progress found for {}", date);
        return Ok(());
    }
    println!("Home learning for class {} on {}", class, date);
    render::progress_table(&result.data);
    render::page_footer(result.page, result.total_pages);
    Ok(())
}
