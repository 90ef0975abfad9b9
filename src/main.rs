use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use wall_core::{AppConfig, MessageStore};

#[derive(Parser)]
#[command(
    name = "hackwall",
    about = "Community wall of hacks: serve the wall, inspect stats, bulk-create issues",
    version,
    author
)]
struct Cli {
    /// Path to config file (default: ~/.config/hackwall/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Override the message source (file path or http(s) URL)
    #[arg(short, long, global = true)]
    source: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the wall page and JSON API (default)
    Serve {
        /// Bind host
        #[arg(long)]
        host: Option<String>,
        /// Bind port
        #[arg(long)]
        port: Option<u16>,
    },

    /// Print aggregate statistics for the wall
    Stats {
        /// Filter messages before aggregating
        #[arg(short, long)]
        query: Option<String>,
    },

    /// Print the message of the day
    Daily {
        /// Pick for a specific date (YYYY-MM-DD) instead of today
        #[arg(long)]
        date: Option<String>,
    },

    /// Bulk-create issues from a templated Markdown file
    Issues {
        /// Markdown file to parse (default: from config)
        #[arg(short, long)]
        file: Option<PathBuf>,
        /// Parse and report without calling the API
        #[arg(long)]
        dry_run: bool,
    },

    /// Show or manage configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current configuration
    Show,
    /// Initialize default configuration file
    Init,
    /// Print the config file path
    Path,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up tracing.
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new(std::env::var("RUST_LOG").unwrap_or_else(|_| "hackwall=info,warn".into()))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    // Load config.
    let mut config = match &cli.config {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load()?,
    };

    // Apply CLI overrides.
    if let Some(source) = &cli.source {
        config.data.source = source.clone();
    }

    match cli.command {
        Some(Commands::Serve { host, port }) => {
            if let Some(h) = host {
                config.server.host = h;
            }
            if let Some(p) = port {
                config.server.port = p;
            }
            let store = Arc::new(MessageStore::load(&config.data.source).await?);
            wall_server::serve(config, store).await?;
        }
        None => {
            let store = Arc::new(MessageStore::load(&config.data.source).await?);
            wall_server::serve(config, store).await?;
        }
        Some(Commands::Stats { query }) => {
            let store = MessageStore::load(&config.data.source).await?;
            handle_stats(&store, query.as_deref().unwrap_or(""));
        }
        Some(Commands::Daily { date }) => {
            let store = MessageStore::load(&config.data.source).await?;
            let date = match date {
                Some(raw) => NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
                    .with_context(|| format!("invalid date: {raw}"))?,
                None => chrono::Utc::now().date_naive(),
            };
            handle_daily(&store, date);
        }
        Some(Commands::Issues { file, dry_run }) => {
            let path = file.unwrap_or_else(|| config.issues.file.clone());
            handle_issues(&config, &path, dry_run).await?;
        }
        Some(Commands::Config { action }) => {
            handle_config_command(action, &config)?;
        }
    }

    Ok(())
}

fn handle_stats(store: &MessageStore, query: &str) {
    let filtered: Vec<wall_core::Message> =
        wall_core::search::filter_messages(store.messages(), query)
            .into_iter()
            .cloned()
            .collect();
    let snapshot = wall_stats::aggregate(&filtered);
    print!("{}", wall_stats::reports::text_summary(&snapshot));
}

fn handle_daily(store: &MessageStore, date: NaiveDate) {
    match wall_stats::pick_daily(store.messages(), date) {
        Some(pick) => {
            println!("Hack of the day ({}):", pick.computed_for);
            println!("  \"{}\"", pick.message.text);
            let author = pick.message.author.trim();
            println!(
                "  - {} ({})",
                if author.is_empty() { "Anonymous" } else { author },
                pick.message.date
            );
        }
        None => println!("The wall is empty."),
    }
}

async fn handle_issues(config: &AppConfig, path: &PathBuf, dry_run: bool) -> Result<()> {
    let issues = wall_issues::parse_issues_file(path)
        .with_context(|| format!("reading {}", path.display()))?;
    println!("Found {} issues to create", issues.len());

    if dry_run {
        for issue in &issues {
            println!(
                "  would create: {} [{}]",
                issue.title,
                issue.labels.join(", ")
            );
        }
        return Ok(());
    }

    let client = wall_issues::IssueClient::new(&config.issues)?;
    let summary = client.create_all(&issues).await;
    println!(
        "Done: {} created, {} failed",
        summary.created, summary.failed
    );
    Ok(())
}

fn handle_config_command(action: Option<ConfigAction>, config: &AppConfig) -> Result<()> {
    match action {
        Some(ConfigAction::Show) | None => {
            let toml_str = toml::to_string_pretty(config)?;
            println!("{}", toml_str);
        }
        Some(ConfigAction::Init) => {
            let path = AppConfig::default_path();
            if path.exists() {
                println!("Config already exists at: {}", path.display());
            } else {
                config.save()?;
                println!("Created default config at: {}", path.display());
            }
        }
        Some(ConfigAction::Path) => {
            println!("{}", AppConfig::default_path().display());
        }
    }
    Ok(())
}
