//! CLI administration tool for movie-rental.
//!
//! Provides commands for minting auth tokens, viewing statistics, and
//! performing database checks without requiring HTTP API access.
//!
//! # Usage
//!
//! ```bash
//! # Mint an auth token for ops use
//! cargo run --bin admin -- token create --user-id 1 --admin
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `JWT_PRIVATE_KEY` (required for `token create`): token signing secret
//! - `DATABASE_URL` (required for `stats` and `db`): PostgreSQL connection string

use movie_rental::application::services::AuthService;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use sqlx::PgPool;
use sqlx::Row;

/// CLI tool for managing movie-rental.
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
    /// Manage auth tokens
    Token {
        #[command(subcommand)]
        action: TokenAction,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Token management subcommands.
#[derive(Subcommand)]
enum TokenAction {
    /// Mint a new auth token
    Create {
        /// User id to embed in the token
        #[arg(short, long)]
        user_id: Option<i64>,

        /// Grant admin claims (enables DELETE endpoints)
        #[arg(short, long)]
        admin: bool,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
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
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Token { action } => match action {
            TokenAction::Create {
                user_id,
                admin,
                yes,
            } => create_token(user_id, admin, yes),
        },
        Commands::Stats => show_stats().await,
        Commands::Db { action } => match action {
            DbAction::Check => db_check().await,
            DbAction::Info => db_info().await,
        },
    }
}

fn create_token(user_id: Option<i64>, admin: bool, yes: bool) -> Result<()> {
    let private_key = std::env::var("JWT_PRIVATE_KEY")
        .context("JWT_PRIVATE_KEY must be set to mint tokens")?;

    let expiry_hours: i64 = std::env::var("JWT_EXPIRY_HOURS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(24);

    let user_id = match user_id {
        Some(id) => id,
        None => Input::new()
            .with_prompt("User id to embed in the token")
            .interact_text()?,
    };

    if admin && !yes {
        let confirmed = Confirm::new()
            .with_prompt("Mint a token with admin claims?")
            .default(false)
            .interact()?;
        if !confirmed {
            println!("{}", "Aborted.".yellow());
            return Ok(());
        }
    }

    let auth = AuthService::new(&private_key, expiry_hours);
    let token = auth
        .sign(user_id, admin)
        .map_err(|e| anyhow::anyhow!("failed to sign token: {e}"))?;

    println!("{}", "Token minted:".green().bold());
    println!("{}", token);
    println!();
    println!(
        "Pass it in the {} header. Expires in {}h.",
        "x-auth-token".cyan(),
        expiry_hours
    );

    Ok(())
}

async fn show_stats() -> Result<()> {
    let pool = connect().await?;

    let movies: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM movies")
        .fetch_one(&pool)
        .await?;
    let customers: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM customers")
        .fetch_one(&pool)
        .await?;
    let open_rentals: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM rentals WHERE date_returned IS NULL")
            .fetch_one(&pool)
            .await?;
    let settled_rentals: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM rentals WHERE date_returned IS NOT NULL")
            .fetch_one(&pool)
            .await?;

    println!("{}", "Statistics".bold());
    println!("  Movies:          {}", movies.to_string().cyan());
    println!("  Customers:       {}", customers.to_string().cyan());
    println!("  Open rentals:    {}", open_rentals.to_string().cyan());
    println!("  Settled rentals: {}", settled_rentals.to_string().cyan());

    Ok(())
}

async fn db_check() -> Result<()> {
    let pool = connect().await?;

    sqlx::query("SELECT 1").execute(&pool).await?;
    println!("{}", "Database connection OK".green());

    Ok(())
}

async fn db_info() -> Result<()> {
    let pool = connect().await?;

    let row = sqlx::query("SELECT version(), current_database()")
        .fetch_one(&pool)
        .await?;
    let version: String = row.try_get(0)?;
    let database: String = row.try_get(1)?;

    println!("{}", "Database info".bold());
    println!("  Database: {}", database.cyan());
    println!("  Server:   {}", version);

    Ok(())
}

async fn connect() -> Result<PgPool> {
    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")
}
