//! pressroom-authoring - CMS authoring engine CLI
//!
//! Out-of-band operator tooling for the authoring engine: inspect or
//! clear the persisted draft slots and show the resolved configuration.

use anyhow::Result;
use clap::{Parser, Subcommand};
use pressroom_authoring::persist::{SlotStore, SqliteSlotStore, DRAFT_SLOT, PREVIEW_SLOT};
use pressroom_common::config::AuthoringConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pressroom-authoring", version, about)]
struct Cli {
    /// Content API base URL
    #[arg(long, env = "PRESSROOM_API_BASE_URL")]
    api_base_url: Option<String>,

    /// Directory holding the local draft-slot database
    #[arg(long, env = "PRESSROOM_DATA_DIR")]
    data_dir: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Inspect or clear the persisted draft slots
    Slot {
        #[command(subcommand)]
        action: SlotAction,
    },
    /// Show the resolved configuration
    Config,
}

#[derive(Subcommand)]
enum SlotAction {
    /// Print a slot's snapshot JSON
    Show {
        #[arg(default_value = DRAFT_SLOT)]
        slot: String,
    },
    /// Delete a slot, or both well-known slots when none is given
    Clear {
        slot: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = AuthoringConfig::resolve(cli.api_base_url.as_deref(), cli.data_dir.as_deref());

    match cli.command {
        Command::Slot { action } => {
            let store = SqliteSlotStore::connect(&config.slot_db_path()).await?;
            match action {
                SlotAction::Show { slot } => match store.load(&slot).await? {
                    Some(raw) => {
                        // Re-encode for readability; fall back to the raw
                        // text when the snapshot is unparseable.
                        match serde_json::from_str::<serde_json::Value>(&raw) {
                            Ok(value) => println!("{}", serde_json::to_string_pretty(&value)?),
                            Err(_) => println!("{}", raw),
                        }
                    }
                    None => println!("Slot '{}' is empty", slot),
                },
                SlotAction::Clear { slot } => {
                    match slot {
                        Some(slot) => {
                            store.delete(&slot).await?;
                            info!(slot, "Slot cleared");
                        }
                        None => {
                            store.delete(DRAFT_SLOT).await?;
                            store.delete(PREVIEW_SLOT).await?;
                            info!("Draft and preview slots cleared");
                        }
                    }
                }
            }
        }
        Command::Config => {
            println!("api_base_url: {}", config.api_base_url);
            println!("data_dir: {}", config.data_dir.display());
            println!("autosave_interval_secs: {}", config.autosave_interval_secs);
            println!("auto_summary_override: {}", config.auto_summary_override);
            println!(
                "artist_dedup_case_insensitive: {}",
                config.artist_dedup_case_insensitive
            );
        }
    }

    Ok(())
}
