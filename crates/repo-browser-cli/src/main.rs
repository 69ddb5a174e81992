use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};

use repo_bookmarks::{default_store_path, BookmarkStore};
use repo_explore::ExploreController;
use repo_search::{ReqwestTransport, Repository, SearchClient};

#[derive(Parser)]
#[command(name = "repo-browser")]
#[command(about = "Search and bookmark GitHub repositories")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search repositories with optional filters
    Search {
        /// Stars bucket (e.g., "New (0-50)", "Trending (5000+)")
        #[arg(long)]
        stars: Option<String>,

        /// Language filter (e.g., "Rust", "Go")
        #[arg(long)]
        language: Option<String>,

        /// License filter (e.g., "MIT", "Apache-2.0")
        #[arg(long)]
        license: Option<String>,

        /// Number of pages to fetch
        #[arg(long, default_value_t = 1)]
        pages: u32,

        /// Results per page
        #[arg(long, default_value_t = 10)]
        per_page: u32,

        /// Bookmark these repository ids from the results
        #[arg(long)]
        bookmark: Vec<i64>,
    },

    /// Manage saved bookmarks
    Bookmarks {
        #[command(subcommand)]
        command: BookmarkCommands,
    },
}

#[derive(Subcommand)]
enum BookmarkCommands {
    /// List saved bookmarks
    List,
    /// Remove a bookmark by repository id
    Remove { id: i64 },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        std::env::set_var("RUST_LOG", "debug");
    }
    env_logger::init();

    match cli.command {
        Commands::Search {
            stars,
            language,
            license,
            pages,
            per_page,
            bookmark,
        } => run_search(stars, language, license, pages, per_page, bookmark).await,
        Commands::Bookmarks { command } => run_bookmarks(command),
    }
}

async fn run_search(
    stars: Option<String>,
    language: Option<String>,
    license: Option<String>,
    pages: u32,
    per_page: u32,
    bookmark: Vec<i64>,
) -> Result<()> {
    let transport = Arc::new(ReqwestTransport::new());
    let service = Arc::new(SearchClient::new(transport));
    let controller = ExploreController::new(service, per_page);

    for (category, selection) in [
        ("Stars", stars),
        ("Language", language),
        ("License", license),
    ] {
        if let Some(option) = selection {
            if !controller.select_filter(category, &option) {
                anyhow::bail!("unknown {} option '{}'", category.to_lowercase(), option);
            }
        }
    }

    controller.reload().await;
    for _ in 1..pages {
        controller.load_more().await;
    }

    let state = controller.state();
    if let Some(error) = &state.last_error {
        log::error!("search ended with an error: {error}");
        eprintln!("error: {error}");
    }

    for repo in &state.repositories {
        print_repository(repo);
    }
    println!(
        "\n{} repositories across {} page(s)",
        state.repositories.len(),
        state.current_page
    );

    if !bookmark.is_empty() {
        let mut store = BookmarkStore::load(default_store_path()?);
        for id in bookmark {
            match state.repositories.iter().find(|r| r.id == id) {
                Some(repo) => {
                    if store.add(repo) {
                        println!("bookmarked {}", repo.full_name);
                    } else {
                        println!("{} is already bookmarked", repo.full_name);
                    }
                }
                None => eprintln!("no repository with id {id} in these results"),
            }
        }
        store.save()?;
    }

    Ok(())
}

fn run_bookmarks(command: BookmarkCommands) -> Result<()> {
    let mut store = BookmarkStore::load(default_store_path()?);

    match command {
        BookmarkCommands::List => {
            if store.is_empty() {
                println!("no bookmarks saved");
                return Ok(());
            }
            for saved in store.all() {
                print_repository(&saved.to_repository());
            }
        }
        BookmarkCommands::Remove { id } => {
            if store.remove(id) {
                store.save()?;
                println!("removed bookmark {id}");
            } else {
                eprintln!("no bookmark with id {id}");
            }
        }
    }

    Ok(())
}

fn print_repository(repo: &Repository) {
    let language = repo.language.as_deref().unwrap_or("-");
    let description = repo.description.as_deref().unwrap_or("");
    println!(
        "{:>10}  {:<40} *{:<7} {:<12} {}",
        repo.id, repo.full_name, repo.stargazers_count, language, description
    );
}
