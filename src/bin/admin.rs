//! CLI administration tool for the URL shortener.
//!
//! Manages aliases and checks the database directly, without going through
//! the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Store a URL under a generated alias
//! cargo run --bin admin -- url add https://example.com
//!
//! # Store a URL under a chosen alias
//! cargo run --bin admin -- url add https://example.com --alias example
//!
//! # Show where an alias points
//! cargo run --bin admin -- url show example
//!
//! # Remove an alias
//! cargo run --bin admin -- url remove example
//!
//! # Check database connection and apply the schema
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (or `DB_*` components): PostgreSQL connection string
//! - `ALIAS_LENGTH` (optional): length of generated aliases

use alias_shortener::application::services::UrlService;
use alias_shortener::config::Config;
use alias_shortener::domain::errors::StoreError;
use alias_shortener::infrastructure::persistence::PgUrlRepository;
use alias_shortener::server::ensure_schema;
use alias_shortener::utils::alias_generator::is_reserved_alias;
use alias_shortener::utils::validation::validate_destination;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing the URL shortener.
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
    /// Manage aliases
    Url {
        #[command(subcommand)]
        action: UrlAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Alias management subcommands.
#[derive(Subcommand)]
enum UrlAction {
    /// Store a URL under an alias
    Add {
        /// Destination URL
        url: String,

        /// Alias to use (generated if omitted)
        #[arg(short, long)]
        alias: Option<String>,
    },

    /// Show the destination and id of an alias
    Show {
        alias: String,
    },

    /// Remove an alias
    Remove {
        alias: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection and apply the schema
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = Config::load_database_url()?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Url { action } => handle_url_action(action, pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches alias management commands.
async fn handle_url_action(action: UrlAction, pool: PgPool) -> Result<()> {
    ensure_schema(&pool).await?;

    let alias_length = Config::load_alias_length()?;

    let repo = Arc::new(PgUrlRepository::new(Arc::new(pool)));
    let service = UrlService::new(repo.clone(), alias_length);

    match action {
        UrlAction::Add { url, alias } => add_url(&service, url, alias).await,
        UrlAction::Show { alias } => show_url(&repo, &alias).await,
        UrlAction::Remove { alias, yes } => remove_url(&service, &alias, yes).await,
    }
}

/// Validates and stores a URL, printing the alias used.
async fn add_url(service: &UrlService, url: String, alias: Option<String>) -> Result<()> {
    println!("{}", "Add URL".bright_blue().bold());
    println!();

    if validate_destination(&url).is_err() {
        anyhow::bail!("'{}' is not a valid URL", url);
    }

    if let Some(alias) = alias.as_deref().filter(|a| is_reserved_alias(a)) {
        anyhow::bail!("Alias '{}' is reserved", alias);
    }

    let (id, alias) = match service.shorten(&url, alias).await {
        Ok(saved) => saved,
        Err(StoreError::Conflict(alias)) => {
            anyhow::bail!("Alias '{}' already exists", alias);
        }
        Err(e) => return Err(anyhow::anyhow!("Failed to save URL: {}", e)),
    };

    println!("  Alias: {}", alias.bright_yellow().bold());
    println!("  URL:   {}", url.cyan());
    println!("  ID:    {}", id.to_string().bright_black());
    println!();
    println!("{}", "URL saved".green().bold());

    Ok(())
}

/// Prints the record stored under an alias.
async fn show_url(repo: &PgUrlRepository, alias: &str) -> Result<()> {
    let record = match repo.find_record(alias).await {
        Ok(record) => record,
        Err(StoreError::NotFound) => anyhow::bail!("Alias '{}' not found", alias),
        Err(e) => return Err(anyhow::anyhow!("Database error: {}", e)),
    };

    println!("  Alias: {}", record.alias.bright_yellow().bold());
    println!("  URL:   {}", record.destination.cyan());
    println!("  ID:    {}", record.id.to_string().bright_black());

    Ok(())
}

/// Removes an alias after confirmation.
///
/// Confirmation defaults to No unless `--yes` is given.
async fn remove_url(service: &UrlService, alias: &str, skip_confirm: bool) -> Result<()> {
    println!("{}", "Remove URL".bright_blue().bold());
    println!();

    let destination = match service.resolve(alias).await {
        Ok(destination) => destination,
        Err(StoreError::NotFound) => anyhow::bail!("Alias '{}' not found", alias),
        Err(e) => return Err(anyhow::anyhow!("Database error: {}", e)),
    };

    println!("  Alias: {}", alias.bright_yellow());
    println!("  URL:   {}", destination.cyan());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Remove this alias?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    service
        .remove(alias)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to remove alias: {}", e))?;

    println!("{}", "Alias removed".green().bold());

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;
            println!("{}", "Database connection OK".green().bold());

            ensure_schema(pool).await?;
            println!("{}", "Schema up to date".green().bold());
        }
    }

    Ok(())
}
