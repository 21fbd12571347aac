use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::{TimeDelta, Utc};
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use bountywatch::bounty::BountyRecord;
use bountywatch::config::Config;
use bountywatch::extract::extract_bounties;
use bountywatch::output::terminal;
use bountywatch::pipeline::BountyWatch;
use bountywatch::scrape::StaticSource;
use bountywatch::select::filter_recent;

/// bountywatch: announce the top new Replit bounty to Slack.
///
/// Scrapes the public bounty listing, picks the best-paying bounty posted in
/// the last 24 hours, and posts it to Slack unless it was announced before.
#[derive(Parser)]
#[command(name = "bountywatch", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the pipeline once: fetch, select, announce
    Run {
        /// Replay a saved markdown page instead of calling Firecrawl
        #[arg(long)]
        from_file: Option<PathBuf>,

        /// Print the outcome as JSON
        #[arg(long)]
        json: bool,
    },

    /// List recent bounties without announcing anything
    Bounties {
        /// Only show bounties posted within this many hours (default: 24)
        #[arg(long)]
        within_hours: Option<u32>,

        /// Print the list as JSON
        #[arg(long)]
        json: bool,
    },

    /// Extract bounties from a saved markdown page
    Parse {
        /// Path to the markdown file
        file: PathBuf,

        /// Print the list as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show configuration and sent-log status
    Status,

    /// Verify that the Firecrawl key and Slack webhook are configured
    Check,

    /// Serve the HTTP endpoints (/, /scrape, /bounties)
    #[cfg(feature = "web")]
    Serve {
        /// Port to listen on (default: 8080)
        #[arg(long, default_value = "8080")]
        port: u16,

        /// Address to bind (default: 0.0.0.0)
        #[arg(long, default_value = "0.0.0.0")]
        bind: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("bountywatch=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Run { from_file, json } => {
            let watch = match from_file {
                Some(path) => {
                    let markdown = read_markdown(&path)?;
                    info!(path = %path.display(), "Replaying saved bounty page");
                    BountyWatch::from_config_with_source(
                        &config,
                        Arc::new(StaticSource::new(markdown)),
                    )?
                }
                None => BountyWatch::from_config(&config)?,
            };

            let outcome = watch.run().await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&outcome.to_json())?);
            } else {
                terminal::display_run_outcome(&outcome);
            }
        }

        Commands::Bounties { within_hours, json } => {
            let watch = BountyWatch::from_config(&config)?;
            let now = Utc::now();
            let mut bounties = watch.bounties_at(now).await;
            if let Some(hours) = within_hours {
                bounties = filter_recent(&bounties, now, TimeDelta::hours(i64::from(hours)));
            }
            print_bounties(&bounties, json)?;
        }

        Commands::Parse { file, json } => {
            let markdown = read_markdown(&file)?;
            let bounties = extract_bounties(&markdown, Utc::now());
            print_bounties(&bounties, json)?;
        }

        Commands::Status => {
            bountywatch::status::show(&config).await?;
        }

        Commands::Check => {
            let mut problems = 0;
            for check in [config.require_firecrawl(), config.require_webhook()] {
                if let Err(e) = check {
                    println!("{} {e}", "!".red().bold());
                    problems += 1;
                }
            }
            if problems == 0 {
                println!("{}", "Configuration looks good.".green());
            } else {
                anyhow::bail!("{problems} configuration problem(s) found");
            }
        }

        #[cfg(feature = "web")]
        Commands::Serve { port, bind } => {
            let watch = BountyWatch::from_config(&config)?;
            bountywatch::web::run_server(watch, port, &bind).await?;
        }
    }

    Ok(())
}

fn read_markdown(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read markdown from {}", path.display()))
}

fn print_bounties(bounties: &[BountyRecord], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(bounties)?);
    } else {
        terminal::display_bounty_list(bounties, Utc::now());
    }
    Ok(())
}
