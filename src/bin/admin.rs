//! CLI administration tool for shorturl.
//!
//! Inspects and removes short URLs, generates API keys and performs database
//! checks without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Generate a value for API_KEY
//! cargo run --bin admin -- key generate
//!
//! # List stored short URLs
//! cargo run --bin admin -- url list --page 2 --limit 20
//!
//! # Show or delete one short URL
//! cargo run --bin admin -- url show V1StGXR8_Z5jdHi6B-myT
//! cargo run --bin admin -- url delete V1StGXR8_Z5jdHi6B-myT
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
//! - `DATABASE_URL` or `DB_*` components (required): PostgreSQL connection
//! - `HOST` (optional): short URL prefix, must match the server's
//! - `REDIS_URL` / `REDIS_HOST` (optional): evict deleted records from the cache

use shorturl::application::services::UrlService;
use shorturl::config::{Config, mask_connection_string};
use shorturl::domain::entities::UrlRecord;
use shorturl::infrastructure::cache::{CacheService, NullCache, RedisCache};
use shorturl::infrastructure::persistence::PgUrlRepository;
use shorturl::utils::identifier::NanoIdGenerator;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

type AdminUrlService = UrlService<PgUrlRepository, NanoIdGenerator>;

/// CLI tool for managing shorturl.
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
    /// API key helpers
    Key {
        #[command(subcommand)]
        action: KeyAction,
    },

    /// Inspect and remove short URLs
    Url {
        #[command(subcommand)]
        action: UrlAction,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

#[derive(Subcommand)]
enum KeyAction {
    /// Generate a random API key
    Generate,
}

/// Short URL subcommands.
#[derive(Subcommand)]
enum UrlAction {
    /// List short URLs in creation order
    List {
        #[arg(short, long, default_value_t = 1)]
        page: i64,

        #[arg(short, long, default_value_t = 10)]
        limit: i64,
    },

    /// Show a short URL by identifier
    Show { identifier: String },

    /// Delete a short URL by identifier
    Delete {
        identifier: String,

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
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Key { action } => handle_key_action(&action)?,
        Commands::Url { action } => handle_url_action(action, &connect().await?).await?,
        Commands::Stats => handle_stats(&connect().await?).await?,
        Commands::Db { action } => handle_db_action(action, &connect().await?).await?,
    }

    Ok(())
}

async fn connect() -> Result<PgPool> {
    let database_url = Config::load_database_url()?;

    PgPool::connect(&database_url).await.with_context(|| {
        format!(
            "Failed to connect to database at {}",
            mask_connection_string(&database_url)
        )
    })
}

fn handle_key_action(action: &KeyAction) -> Result<()> {
    match action {
        KeyAction::Generate => {
            let key = generate_api_key();

            println!("{}", "API key generated".bright_blue().bold());
            println!();
            println!("  {}", key.bright_yellow().bold());
            println!();
            println!("{}", "Set it in the server environment:".bright_white());
            println!("  API_KEY={}", key);
            println!();
            println!("{}", "Example:".bright_white());
            println!(
                "  curl -H \"x-api-key: {}\" http://localhost:3000/url",
                key.bright_yellow()
            );
            println!();
        }
    }

    Ok(())
}

/// Builds the URL service the same way the server does.
///
/// The cache is only used for eviction on delete; when Redis is not configured
/// or unreachable, stale entries expire on their TTL.
async fn build_service(pool: &PgPool) -> AdminUrlService {
    let host = std::env::var("HOST").unwrap_or_else(|_| "localhost:3000".to_string());

    let cache: Arc<dyn CacheService> = match Config::load_redis_url() {
        Some(redis_url) => {
            let ttl = std::env::var("CACHE_TTL_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10);
            match RedisCache::connect(&redis_url, ttl).await {
                Ok(redis) => Arc::new(redis),
                Err(e) => {
                    println!("{} {}", "Redis unavailable, cache not evicted:".yellow(), e);
                    Arc::new(NullCache::new())
                }
            }
        }
        None => Arc::new(NullCache::new()),
    };

    UrlService::new(
        Arc::new(PgUrlRepository::new(Arc::new(pool.clone()))),
        Arc::new(NanoIdGenerator),
        cache,
        host,
        None,
    )
}

/// Dispatches short URL commands.
async fn handle_url_action(action: UrlAction, pool: &PgPool) -> Result<()> {
    let service = build_service(pool).await;

    match action {
        UrlAction::List { page, limit } => list_urls(&service, page, limit).await?,
        UrlAction::Show { identifier } => show_url(&service, &identifier).await?,
        UrlAction::Delete { identifier, yes } => delete_url(&service, &identifier, yes).await?,
    }

    Ok(())
}

/// Lists one page of short URLs.
///
/// # Output Format
///
/// ```text
/// Short URLs (page 1 of 3, 27 total)
///
///   ID    Title                      Short URL                          Redirect
///   ──────────────────────────────────────────────────────────────────────────────
///   1     Google                     localhost:3000/V1StGXR8_Z5jdHi6B   https://google.com
/// ```
async fn list_urls(service: &AdminUrlService, page: i64, limit: i64) -> Result<()> {
    if page < 1 || !(1..=100).contains(&limit) {
        anyhow::bail!("page must be >= 1 and limit between 1 and 100");
    }

    let result = service
        .find_all(page, limit)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list URLs: {}", e))?;

    println!(
        "{}",
        format!(
            "Short URLs (page {} of {}, {} total)",
            result.meta.current_page, result.meta.total_pages, result.meta.total_count
        )
        .bright_blue()
        .bold()
    );
    println!();

    if result.data.is_empty() {
        println!("{}", "  No short URLs found".yellow());
        return Ok(());
    }

    println!(
        "  {:<5} {:<26} {:<34} {}",
        "ID".bright_white().bold(),
        "Title".bright_white().bold(),
        "Short URL".bright_white().bold(),
        "Redirect".bright_white().bold()
    );
    println!("  {}", "─".repeat(80).bright_black());

    for record in &result.data {
        println!(
            "  {:<5} {:<26} {:<34} {}",
            record.id.to_string().bright_black(),
            truncate(&record.title, 25).cyan(),
            record.url,
            record.redirect.bright_black()
        );
    }

    println!();
    if result.meta.has_next_page {
        println!(
            "  Next page: {} admin url list --page {} --limit {}",
            "cargo run --bin".bright_cyan(),
            page + 1,
            limit
        );
        println!();
    }

    Ok(())
}

async fn show_url(service: &AdminUrlService, identifier: &str) -> Result<()> {
    let record = service
        .find_one(identifier)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?
        .with_context(|| format!("No short URL with identifier '{}'", identifier))?;

    print_record(&record);
    Ok(())
}

/// Deletes a short URL after confirmation (default: No).
async fn delete_url(service: &AdminUrlService, identifier: &str, skip_confirm: bool) -> Result<()> {
    println!("{}", "Delete short URL".bright_blue().bold());
    println!();

    let record = service
        .find_one(identifier)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?
        .with_context(|| format!("No short URL with identifier '{}'", identifier))?;

    print_record(&record);

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this short URL?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    service
        .remove(record.id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete short URL: {}", e))?;

    println!();
    println!("{}", "Short URL deleted".green().bold());
    println!();

    Ok(())
}

fn print_record(record: &UrlRecord) {
    println!("  ID:          {}", record.id.to_string().bright_black());
    println!("  Title:       {}", record.title.cyan());
    println!(
        "  Description: {}",
        record.description.as_deref().unwrap_or("-")
    );
    println!("  Short URL:   {}", record.url.bright_white());
    println!("  Redirect:    {}", record.redirect.bright_yellow());
    println!(
        "  Created:     {}",
        record.created_at.format("%Y-%m-%d %H:%M")
    );
    println!(
        "  Updated:     {}",
        record.updated_at.format("%Y-%m-%d %H:%M")
    );
    println!();
}

/// Displays system statistics.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "Statistics".bright_blue().bold());
    println!();

    let urls_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM urls")
        .fetch_one(pool)
        .await?;

    let last_created: Option<chrono::DateTime<chrono::Utc>> =
        sqlx::query_scalar("SELECT MAX(created_at) FROM urls")
            .fetch_one(pool)
            .await?;

    println!(
        "  Short URLs:   {}",
        urls_count.to_string().bright_green().bold()
    );
    println!(
        "  Last created: {}",
        last_created
            .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "-".to_string())
            .bright_green()
    );
    println!();

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

            let migrations: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM _sqlx_migrations")
                .fetch_one(pool)
                .await
                .unwrap_or(0);

            println!("  PostgreSQL: {}", version.bright_white());
            println!("  Migrations: {}", migrations.to_string().bright_white());
            println!();
        }
    }

    Ok(())
}

fn truncate(value: &str, max_chars: usize) -> String {
    if value.chars().count() <= max_chars {
        value.to_string()
    } else {
        let mut truncated: String = value.chars().take(max_chars - 1).collect();
        truncated.push('…');
        truncated
    }
}

/// Generates a cryptographically random API key.
///
/// # Format
///
/// - Length: 48 characters
/// - Character set: A-Z, a-z, 0-9
/// - Entropy: ~286 bits
fn generate_api_key() -> String {
    use rand::Rng;
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
    const KEY_LEN: usize = 48;

    let mut rng = rand::rng();

    (0..KEY_LEN)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}
