//! CLI administration tool for url-shrinker.
//!
//! Shortens and resolves URLs directly against the database, shows entry
//! statistics, and performs database checks without going through HTTP.
//!
//! # Usage
//!
//! ```bash
//! # Shorten a URL with the configured strategy
//! cargo run --bin admin -- shorten https://www.rust-lang.org
//!
//! # Look up the URL behind an alias (counts as a view)
//! cargo run --bin admin -- resolve 928e4e
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
//! Same as the server: `DATABASE_URL` (or `DB_*` components),
//! `ALIAS_STRATEGY` and `BASE_URL`.

use url_shrinker::application::services::build_alias_service;
use url_shrinker::config::{self, Config, StoreBackend};
use url_shrinker::infrastructure::persistence::PgEntryRepository;
use url_shrinker::server::connect_pool;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing url-shrinker.
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
    /// Shorten a URL and print its short URL
    Shorten {
        /// URL address to shorten
        url: String,
    },

    /// Print the URL assigned to an alias
    Resolve {
        /// Alias to look up
        alias: String,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
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

    let config = config::load_with_backend(Some(StoreBackend::Postgres))?;
    let database_url = config
        .database_url
        .as_deref()
        .context("DATABASE_URL must be set")?;

    let pool = connect_pool(&config, database_url).await?;

    match cli.command {
        Commands::Shorten { url } => shorten(&config, &pool, &url).await?,
        Commands::Resolve { alias } => resolve(&config, &pool, &alias).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Shortens `url` with the configured strategy.
async fn shorten(config: &Config, pool: &PgPool, url: &str) -> Result<()> {
    println!("{}", "✂️  Shorten URL".bright_blue().bold());
    println!();

    let repo = Arc::new(PgEntryRepository::new(Arc::new(pool.clone())));
    let service = build_alias_service(config.alias_strategy, repo);

    let alias = service
        .shorten(url)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to shorten URL: {}", e))?;

    let short_url = format!("{}/{}", config.base_url.trim_end_matches('/'), alias);

    println!("  URL:       {}", url.cyan());
    println!("  Strategy:  {}", config.alias_strategy.to_string().bright_black());
    println!("  Alias:     {}", alias.bright_yellow().bold());
    println!("  Short URL: {}", short_url.bright_green().bold());
    println!();

    Ok(())
}

/// Resolves `alias` with the configured strategy.
async fn resolve(config: &Config, pool: &PgPool, alias: &str) -> Result<()> {
    println!("{}", "🔎 Resolve alias".bright_blue().bold());
    println!();

    let repo = Arc::new(PgEntryRepository::new(Arc::new(pool.clone())));
    let service = build_alias_service(config.alias_strategy, repo);

    match service.resolve(alias).await {
        Ok(url) => {
            println!("  Alias: {}", alias.bright_yellow());
            println!("  URL:   {}", url.cyan().bold());
            println!();
            Ok(())
        }
        Err(e) => {
            println!("{}", format!("❌ {}", e).red());
            anyhow::bail!("Alias '{}' could not be resolved", alias)
        }
    }
}

/// Displays entry statistics.
///
/// Shows:
/// - Total number of entries
/// - Number of entries with a stored hash alias
/// - Total number of recorded views
/// - The most viewed entries
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let entries_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM url_entries")
        .fetch_one(pool)
        .await?;

    let aliased_count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM url_entries WHERE url_alias IS NOT NULL")
            .fetch_one(pool)
            .await?;

    let views_count: i64 =
        sqlx::query_scalar("SELECT COALESCE(SUM(total_views), 0)::BIGINT FROM url_entries")
            .fetch_one(pool)
            .await?;

    println!(
        "  Entries:        {}",
        entries_count.to_string().bright_green().bold()
    );
    println!(
        "  Stored aliases: {}",
        aliased_count.to_string().bright_green().bold()
    );
    println!(
        "  Views:          {}",
        views_count.to_string().bright_green().bold()
    );
    println!();

    let top: Vec<(i64, String, i64)> = sqlx::query_as(
        r#"
        SELECT id, url_address, total_views
        FROM url_entries
        WHERE total_views > 0
        ORDER BY total_views DESC, id
        LIMIT 10
        "#,
    )
    .fetch_all(pool)
    .await?;

    if top.is_empty() {
        return Ok(());
    }

    println!(
        "  {:<8} {:<8} {}",
        "ID".bright_white().bold(),
        "Views".bright_white().bold(),
        "URL".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for (id, url_address, total_views) in &top {
        println!(
            "  {:<8} {:<8} {}",
            id.to_string().bright_black(),
            total_views.to_string().bright_green(),
            url_address.cyan()
        );
    }
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
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
