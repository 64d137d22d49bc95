// src/main.rs
//
// Command-line front end over the application layer.
// Every subcommand builds a fresh AppState, so each run starts from what
// storage holds and `collections sync` behaves like a window regaining focus.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use env_logger::{Builder, Target};
use log::LevelFilter;
use serde::Serialize;

use wikinime::application::commands;
use wikinime::application::{CollectAnimesDto, ErrorResponse, Notification};
use wikinime::{AnimeId, AppConfig, AppState, CollectionId};

/// Browse the anime catalog and manage saved collections
#[derive(Parser)]
#[command(name = "wikinime")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory holding the collection database
    #[arg(global = true, short, long)]
    data_dir: Option<PathBuf>,

    /// Enable verbose output
    #[arg(global = true, short, long)]
    verbose: bool,

    /// Print results as JSON
    #[arg(global = true, long)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage saved collections
    Collections {
        #[command(subcommand)]
        command: CollectionCommands,
    },

    /// Query the anime catalog
    Anime {
        #[command(subcommand)]
        command: AnimeCommands,
    },
}

#[derive(Subcommand)]
enum CollectionCommands {
    /// List collections, newest first
    List,

    /// Show one collection with its anime
    Show { id: CollectionId },

    /// Create an empty collection
    Create { name: String },

    /// Rename a collection
    Rename { id: CollectionId, name: String },

    /// Delete a collection
    Delete { id: CollectionId },

    /// Fetch anime from the catalog and save them into collections
    Add {
        /// Catalog ids of the anime to save
        #[arg(required = true)]
        anime_ids: Vec<AnimeId>,

        /// Existing collection to add to (repeatable)
        #[arg(short = 'c', long = "collection")]
        collections: Vec<CollectionId>,

        /// Also create a new collection with this name
        #[arg(short, long)]
        new: Option<String>,
    },

    /// Remove one anime from a collection
    Remove {
        collection_id: CollectionId,
        anime_id: AnimeId,
    },

    /// Reload collections from storage
    Sync,
}

#[derive(Subcommand)]
enum AnimeCommands {
    /// Show one anime
    Get { id: AnimeId },

    /// Browse or search the catalog
    Browse {
        #[arg(short, long)]
        page: Option<u32>,

        #[arg(long)]
        per_page: Option<u32>,

        #[arg(short, long)]
        search: Option<String>,
    },
}

fn init_logger(verbose: bool) {
    if std::env::var("RUST_LOG").is_ok() {
        env_logger::init();
        return;
    }

    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    Builder::new()
        .target(Target::Stderr)
        .filter_level(LevelFilter::Warn)
        .filter_module("wikinime", level)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let mut config = AppConfig::from_env()?;
    if let Some(data_dir) = cli.data_dir {
        config.data_dir = data_dir;
    }
    let state = AppState::bootstrap(&config)?;
    let json = cli.json;

    match cli.command {
        Commands::Collections { command } => run_collections(&state, command, json).await,
        Commands::Anime { command } => run_anime(&state, command, json).await,
    }
}

async fn run_collections(
    state: &AppState,
    command: CollectionCommands,
    json: bool,
) -> anyhow::Result<()> {
    match command {
        CollectionCommands::List => {
            let collections = commands::list_collections(state);
            if json {
                return print_json(&collections);
            }
            if collections.is_empty() {
                println!("No collections yet");
            }
            for collection in collections {
                println!(
                    "{:>6}  {}  ({} anime)",
                    collection.id, collection.name, collection.anime_count
                );
            }
        }
        CollectionCommands::Show { id } => {
            let collection = commands::get_collection(state, id).map_err(failure)?;
            if json {
                return print_json(&collection);
            }
            println!("{}", collection);
            for anime in &collection.animes {
                println!("{:>8}  {}", anime.id, anime.display_title());
            }
        }
        CollectionCommands::Create { name } => {
            report(commands::create_collection(state, &name).map_err(failure)?);
        }
        CollectionCommands::Rename { id, name } => {
            report(commands::rename_collection(state, id, &name).map_err(failure)?);
        }
        CollectionCommands::Delete { id } => {
            report(commands::delete_collection(state, id).map_err(failure)?);
        }
        CollectionCommands::Add {
            anime_ids,
            collections,
            new,
        } => {
            let animes = state
                .catalog_service
                .get_animes_by_id(&anime_ids)
                .await
                .map_err(|e| failure(e.into()))?;
            let dto = CollectAnimesDto {
                animes,
                selected_collection_ids: collections,
                new_collection_name: new,
            };
            for notification in commands::collect_animes(state, dto).map_err(failure)? {
                report(notification);
            }
        }
        CollectionCommands::Remove {
            collection_id,
            anime_id,
        } => {
            report(
                commands::remove_anime_from_collection(state, collection_id, anime_id)
                    .map_err(failure)?,
            );
        }
        CollectionCommands::Sync => {
            commands::window_focused(state, "cli");
            println!("{} collections loaded", state.collection_store.len());
        }
    }
    Ok(())
}

async fn run_anime(state: &AppState, command: AnimeCommands, json: bool) -> anyhow::Result<()> {
    match command {
        AnimeCommands::Get { id } => {
            let anime = commands::get_anime(state, id).await.map_err(failure)?;
            if json {
                return print_json(&anime);
            }
            println!("{}  {}", anime.id, anime.display_title());
            if anime.season_year > 0 {
                println!("Year: {}", anime.season_year);
            }
            if !anime.genres.is_empty() {
                println!("Genres: {}", anime.genres.join(", "));
            }
            if !anime.description.is_empty() {
                println!("\n{}", anime.description);
            }
        }
        AnimeCommands::Browse {
            page,
            per_page,
            search,
        } => {
            let result = commands::browse_animes(state, page, per_page, search)
                .await
                .map_err(failure)?;
            if json {
                return print_json(&result);
            }
            for anime in &result.media {
                println!("{:>8}  {}", anime.id, anime.display_title());
            }
            println!(
                "Page {} of {} ({} total)",
                result.page_info.current_page, result.page_info.last_page, result.page_info.total
            );
        }
    }
    Ok(())
}

fn report(notification: Notification) {
    if notification.is_error() {
        eprintln!("error: {}", notification);
    } else {
        println!("{}", notification);
    }
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn failure(error: ErrorResponse) -> anyhow::Error {
    anyhow::anyhow!("{}", error)
}
