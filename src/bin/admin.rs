//! CLI administration tool for link-shortener.
//!
//! Inspects and manages short URLs directly in the database, without
//! requiring HTTP API access.
//!
//! # Usage
//!
//! ```bash
//! # List short URLs
//! cargo run --bin admin -- urls list --page 0 --size 20
//!
//! # Show one short URL with statistics
//! cargo run --bin admin -- urls show abc123
//!
//! # Deactivate / reactivate
//! cargo run --bin admin -- urls deactivate abc123
//! cargo run --bin admin -- urls activate abc123
//!
//! # Delete (asks for confirmation unless -y)
//! cargo run --bin admin -- urls delete abc123
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` or `DB_*` components (required)
//! - `BASE_URL` (optional): origin used when printing short links

use link_shortener::application::services::LifecycleService;
use link_shortener::config::Config;
use link_shortener::domain::entities::{ShortUrl, ShortUrlPatch};
use link_shortener::infrastructure::persistence::PgShortUrlRepository;
use link_shortener::server::connect_pool;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

type Lifecycle = LifecycleService<PgShortUrlRepository>;

/// CLI tool for managing link-shortener.
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
    /// Manage short URLs
    Urls {
        #[command(subcommand)]
        action: UrlAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Short URL subcommands.
#[derive(Subcommand)]
enum UrlAction {
    /// List short URLs, oldest first
    List {
        /// Zero-based page index
        #[arg(short, long, default_value_t = 0)]
        page: u32,

        /// Page size
        #[arg(short, long, default_value_t = 20)]
        size: u32,
    },

    /// Show one short URL with its statistics
    Show { code: String },

    /// Re-enable redirects for a short URL
    Activate { code: String },

    /// Stop redirecting a short URL without deleting it
    Deactivate { code: String },

    /// Delete a short URL permanently
    Delete {
        code: String,

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
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = Config::from_env()?;
    let database_url = config
        .database_url
        .clone()
        .context("DATABASE_URL (or DB_HOST, DB_USER, DB_PASSWORD, DB_NAME) must be set")?;

    let pool = connect_pool(&config, &database_url).await?;

    match cli.command {
        Commands::Urls { action } => {
            let repo = Arc::new(PgShortUrlRepository::new(Arc::new(pool)));
            let service = LifecycleService::new(repo, config.base_url.clone());
            handle_url_action(action, &service).await?
        }
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches short URL commands.
async fn handle_url_action(action: UrlAction, service: &Lifecycle) -> Result<()> {
    match action {
        UrlAction::List { page, size } => list_urls(service, page, size).await,
        UrlAction::Show { code } => show_url(service, &code).await,
        UrlAction::Activate { code } => set_active(service, &code, true).await,
        UrlAction::Deactivate { code } => set_active(service, &code, false).await,
        UrlAction::Delete { code, yes } => delete_url(service, &code, yes).await,
    }
}

/// Lists one page of short URLs.
///
/// # Output Format
///
/// ```text
/// 📋 Short URLs (page 0)
///
///   Code        Clicks   Created            Status    URL
///   ──────────────────────────────────────────────────────────────
///   abc123      42       2025-01-15 10:30   ACTIVE    https://example.com/
/// ```
async fn list_urls(service: &Lifecycle, page: u32, size: u32) -> Result<()> {
    if size == 0 || size > 1000 {
        anyhow::bail!("Page size must be between 1 and 1000");
    }

    println!(
        "{}",
        format!("📋 Short URLs (page {})", page).bright_blue().bold()
    );
    println!();

    let urls = service
        .list(page, size)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list short URLs: {}", e))?;

    if urls.is_empty() {
        println!("{}", "  No short URLs found".yellow());
        return Ok(());
    }

    println!(
        "  {:<11} {:<8} {:<18} {:<9} {}",
        "Code".bright_white().bold(),
        "Clicks".bright_white().bold(),
        "Created".bright_white().bold(),
        "Status".bright_white().bold(),
        "URL".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for url in &urls {
        println!(
            "  {:<11} {:<8} {:<18} {:<9} {}",
            url.short_code.cyan(),
            url.click_count.to_string().bright_green(),
            url.created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            status_label(url.active),
            url.original_url
        );
    }

    println!();
    println!("  Shown: {}", urls.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

async fn show_url(service: &Lifecycle, code: &str) -> Result<()> {
    let url = service
        .get(code)
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    print_details(service, &url);
    Ok(())
}

/// Flips the active flag, leaving the description untouched.
async fn set_active(service: &Lifecycle, code: &str, active: bool) -> Result<()> {
    let patch = ShortUrlPatch {
        description: None,
        active: Some(active),
    };

    let url = service
        .update(code, patch)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to update short URL: {}", e))?;

    let verb = if active { "activated" } else { "deactivated" };
    println!("{}", format!("✅ Short URL {}", verb).green().bold());
    println!();
    print_details(service, &url);

    Ok(())
}

/// Deletes a short URL.
///
/// # Safety
///
/// - Requires confirmation (default: No) unless `--yes`
async fn delete_url(service: &Lifecycle, code: &str, skip_confirm: bool) -> Result<()> {
    println!("{}", "🗑️  Delete Short URL".bright_blue().bold());
    println!();

    let url = service
        .get(code)
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    println!("  Code:   {}", url.short_code.cyan());
    println!("  URL:    {}", url.original_url);
    println!("  Clicks: {}", url.click_count.to_string().bright_black());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this short URL?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    service
        .delete(code)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete short URL: {}", e))?;

    println!();
    println!("{}", "✅ Short URL deleted".green().bold());
    println!();

    Ok(())
}

fn print_details(service: &Lifecycle, url: &ShortUrl) {
    println!("  Code:          {}", url.short_code.cyan());
    println!(
        "  Short link:    {}",
        service.short_url(&url.short_code).bright_yellow()
    );
    println!("  Target:        {}", url.original_url);
    if let Some(description) = &url.description {
        println!("  Description:   {}", description);
    }
    println!("  Status:        {}", status_label(url.active));
    println!(
        "  Clicks:        {}",
        url.click_count.to_string().bright_green().bold()
    );
    println!(
        "  Created:       {}",
        url.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    match url.last_accessed_at {
        Some(at) => println!("  Last accessed: {}", at.format("%Y-%m-%d %H:%M:%S UTC")),
        None => println!("  Last accessed: {}", "never".bright_black()),
    }
    println!();
}

fn status_label(active: bool) -> ColoredString {
    if active {
        "ACTIVE".green()
    } else {
        "INACTIVE".red()
    }
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM short_urls")
                .fetch_one(pool)
                .await
                .context("Table short_urls is missing; start the server once to migrate")?;

            println!("{}", "✅ Database connection OK".green().bold());
            println!(
                "  Short URLs stored: {}",
                count.to_string().bright_white().bold()
            );
        }
    }

    Ok(())
}
