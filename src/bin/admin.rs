//! CLI administration tool for user-service.
//!
//! Inspects the database the service reads from, using the same
//! configuration and repository as the HTTP server.
//!
//! # Usage
//!
//! ```bash
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # Show database server version
//! cargo run --bin admin -- db info
//!
//! # Print every user record as JSON
//! cargo run --bin admin -- users list
//!
//! # Count user records
//! cargo run --bin admin -- users count
//! ```
//!
//! # Environment Variables
//!
//! Same as the server, see [`user_service::config`].

use user_service::config::{self, Config};
use user_service::infrastructure::persistence::PgUserRepository;
use user_service::server::{build_state, connect_pool};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing user-service.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Inspect user records
    Users {
        #[command(subcommand)]
        action: UsersAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// User inspection subcommands.
#[derive(Subcommand)]
enum UsersAction {
    /// Print all user records
    List {
        /// Print one compact JSON object per line
        #[arg(long)]
        compact: bool,
    },

    /// Print the number of user records
    Count,
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    let pool = connect_pool(&config).await?;

    match cli.command {
        Commands::Users { action } => handle_users_action(action, pool, &config).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches user inspection commands.
///
/// `list` goes through the same service the HTTP handler uses; `count` asks
/// the database directly so rows with unexpected keys do not fail it.
async fn handle_users_action(action: UsersAction, pool: PgPool, config: &Config) -> Result<()> {
    let pool = Arc::new(pool);

    match action {
        UsersAction::List { compact } => {
            let state = build_state(pool, config);
            let users = state
                .user_service
                .get_all_users()
                .await
                .map_err(|e| anyhow::anyhow!("Failed to load users: {}", e))?;

            if users.is_empty() {
                eprintln!("{}", "No users found".yellow());
                return Ok(());
            }

            for user in &users {
                let json = if compact {
                    serde_json::to_string(user)
                } else {
                    serde_json::to_string_pretty(user)
                }
                .context("Failed to serialize user")?;
                println!("{json}");
            }

            eprintln!();
            eprintln!(
                "  Total: {}",
                users.len().to_string().bright_white().bold()
            );
        }
        UsersAction::Count => {
            let repo = PgUserRepository::new(pool, config.user_table());
            let count = repo
                .count()
                .await
                .map_err(|e| anyhow::anyhow!("Failed to count users: {}", e))?;

            println!(
                "  Users in {}: {}",
                config.users_table.cyan(),
                count.to_string().bright_green().bold()
            );
        }
    }

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
    }

    Ok(())
}
