// blogstore CLI.
// Builds one client and one store per invocation and prints what the UI would render.

use clap::{Parser, Subcommand};
use tracing::info;

use blogstore::api::BlogClient;
use blogstore::config::Config;
use blogstore::error::Result;
use blogstore::fetcher::{DEFAULT_PAGE, ListParams, PostFetcher};
use blogstore::logging;
use blogstore::store::BlogStore;

#[derive(Parser)]
#[command(name = "blogstore")]
#[command(about = "Browse blog posts through a cached data layer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Collection endpoint (overrides config file and BLOGSTORE_API_BASE)
    #[arg(long, global = true)]
    api_base: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    timeout: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, global = true, default_value = "info")]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Show one page through the caching store
    List {
        #[arg(short, long, default_value_t = DEFAULT_PAGE)]
        page: u32,
    },
    /// Show a single post through the caching store
    Show { id: String },
    /// Fetch one remote page directly, without caching
    Fetch {
        #[arg(short, long, default_value_t = DEFAULT_PAGE)]
        page: u32,
        /// Page size sent to the remote (defaults to the configured fetch_limit)
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Show several pages from one store session
    Browse {
        #[arg(long, value_delimiter = ',', default_value = "1")]
        pages: Vec<u32>,
    },
    /// Print the effective configuration
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(&cli.log_level);

    let mut config = Config::load()?;
    if let Some(api_base) = cli.api_base {
        config.api_base = api_base;
    }
    if let Some(timeout) = cli.timeout {
        config.request_timeout_secs = timeout;
    }
    config.validate()?;

    info!(api_base = %config.api_base, "starting blogstore v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::List { page } => {
            let store = BlogStore::new(BlogClient::from_config(&config)?);
            print_store_pages(&store, &[page]).await?;
        }
        Commands::Browse { pages } => {
            let store = BlogStore::new(BlogClient::from_config(&config)?);
            print_store_pages(&store, &pages).await?;
        }
        Commands::Show { id } => {
            let store = BlogStore::new(BlogClient::from_config(&config)?);
            match store.fetch_post_by_id(&id).await? {
                Some(post) => println!("{}", serde_json::to_string_pretty(&post)?),
                None => println!("No post id given"),
            }
        }
        Commands::Fetch { page, limit } => {
            let fetcher = PostFetcher::new(BlogClient::from_config(&config)?);
            let params = ListParams {
                page,
                limit: limit.unwrap_or(config.fetch_limit),
            };
            for post in fetcher.fetch_posts(params).await? {
                println!("{}", post.summary());
            }
        }
        Commands::Config => {
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
    }

    Ok(())
}

async fn print_store_pages(store: &BlogStore<BlogClient>, pages: &[u32]) -> Result<()> {
    for &page in pages {
        let posts = store.fetch_posts(page).await?;
        println!("Page {} of {}", page, store.total_pages().await);
        for post in &posts {
            println!("  {}", post.summary());
        }
    }
    info!(
        total_count = store.total_count().await,
        "served {} page(s)",
        pages.len()
    );
    Ok(())
}
