//! chirper - sign in to or register with a chirper backend from the terminal.
//!
//! The issued api key is kept in a session file in the cache directory so
//! later invocations (`whoami`, `token`) can use it until `logout`.

use std::io;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use chirper_core::config::BASE_URL_ENV;
use chirper_core::ui::elements;
use chirper_core::{
    ApiClient, Config, FileStorage, MemoryDocument, Outcome, Session, SessionStorage,
    SignInHandler, SignUpHandler,
};

#[derive(Debug, Parser)]
#[command(name = "chirper", version, about = "Sign in to a chirper backend")]
struct Cli {
    /// Backend base URL (overrides the config file)
    #[arg(long, global = true, env = BASE_URL_ENV)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Sign in with email and password
    Login {
        /// Defaults to the last email used
        #[arg(long)]
        email: Option<String>,
        /// Prompted for when omitted
        #[arg(long)]
        password: Option<String>,
    },
    /// Create an account and sign in
    Register {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: Option<String>,
        #[arg(long)]
        password_repeat: Option<String>,
    },
    /// Show the user the stored api key belongs to
    Whoami,
    /// Print the stored api key
    Token,
    /// Forget the stored api key
    Logout,
}

/// Initialize the tracing subscriber for logging
fn init_tracing() {
    // Use RUST_LOG env var to control log level (e.g., RUST_LOG=debug)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn prompt_if_missing(value: Option<String>, prompt: &str) -> Result<String> {
    match value {
        Some(value) => Ok(value),
        None => rpassword::prompt_password(prompt).context("Failed to read password"),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    init_tracing();

    let cli = Cli::parse();

    let mut config = Config::load()?;
    if let Some(url) = cli.base_url {
        config.base_url = url;
    }

    let storage = FileStorage::new(config.cache_dir()?);
    info!(base_url = %config.base_url, "chirper starting");

    match cli.command {
        Command::Login { email, password } => {
            let email = email.or_else(|| config.last_email.clone()).unwrap_or_default();
            let password = prompt_if_missing(password, "Password: ")?;

            let handler = SignInHandler::new(ApiClient::new(&config.base_url)?, Session::new(storage));
            let mut document = MemoryDocument::login_form()
                .with_input(elements::EMAIL, email.clone())
                .with_input(elements::PASSWORD, password);

            let outcome = handler.handle(&mut document).await?;
            report(&mut config, outcome, &email)?;
        }
        Command::Register {
            email,
            password,
            password_repeat,
        } => {
            let password = prompt_if_missing(password, "Password: ")?;
            let password_repeat = prompt_if_missing(password_repeat, "Repeat password: ")?;

            let handler = SignUpHandler::new(ApiClient::new(&config.base_url)?, Session::new(storage));
            let mut document = MemoryDocument::register_form()
                .with_input(elements::REGISTER_EMAIL, email.clone())
                .with_input(elements::REGISTER_PASSWORD, password)
                .with_input(elements::REGISTER_PASSWORD_REPEAT, password_repeat);

            let outcome = handler.handle(&mut document).await?;
            report(&mut config, outcome, &email)?;
        }
        Command::Whoami => {
            let token = Session::new(storage)
                .token()?
                .ok_or_else(|| anyhow::anyhow!("Not signed in. Run `chirper login` first."))?;

            let user = ApiClient::new(&config.base_url)?.current_user(&token).await?;
            println!("{} (id {})", user.name, user.id);
            println!(
                "followers: {}  following: {}",
                user.follower_count(),
                user.following_count()
            );
        }
        Command::Token => match Session::new(storage).token()? {
            Some(token) => println!("{}", token),
            None => eprintln!("Not signed in."),
        },
        Command::Logout => {
            storage.clear()?;
            eprintln!("Signed out.");
        }
    }

    Ok(())
}

fn report(config: &mut Config, outcome: Outcome, email: &str) -> Result<()> {
    match outcome {
        Outcome::Skipped => {
            eprintln!("Email and password are required; nothing was sent.");
        }
        Outcome::Authenticated(_) => {
            config.last_email = Some(email.to_string());
            config.save()?;
            eprintln!("Signed in as {}", email);
        }
    }
    Ok(())
}
