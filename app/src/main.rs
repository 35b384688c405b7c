#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

use bikefinder_catalog::DEFAULT_LIMIT;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod command;

use command::{
    CatalogStrategy, ChatInput, ChatStrategy, CommandStrategy, InfoStrategy, InitStrategy,
    RecommendInput, RecommendStrategy, VersionStrategy,
};

#[derive(Parser)]
#[command(name = "bikefinder")]
#[command(about = "Bike purchase assistant", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Chat with the bike-purchase assistant
    Chat {
        /// Single message to send
        #[arg(short = 'm', long)]
        message: Option<String>,

        /// Model to use
        #[arg(short = 'M', long)]
        model: Option<String>,

        /// Maximum number of recommendations per turn
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Rank the catalog against preferences given as flags or free text
    Recommend {
        /// Free-text query to extract preferences from
        #[arg(short, long)]
        query: Option<String>,

        /// Budget ceiling in dollars (accepts 1200, "1,200", or 2k)
        #[arg(short, long)]
        budget: Option<String>,

        /// Bike category (road, mountain, hybrid, gravel, city, e-bike)
        #[arg(short, long)]
        category: Option<String>,

        /// Terrain (paved, gravel, trail, urban)
        #[arg(short, long)]
        terrain: Option<String>,

        /// Preferred brand
        #[arg(long)]
        brand: Option<String>,

        /// Require electric assist
        #[arg(long, conflicts_with = "no_electric")]
        electric: bool,

        /// Exclude electric assist
        #[arg(long)]
        no_electric: bool,

        /// Prefer lightweight bikes
        #[arg(long)]
        lightweight: bool,

        /// Maximum number of recommendations
        #[arg(short, long, default_value_t = DEFAULT_LIMIT)]
        limit: usize,
    },
    /// List the full bike catalog
    Catalog,
    /// Show configuration
    Info,
    /// Initialize configuration
    Init,
    /// Show version
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Chat {
            message,
            model,
            limit,
        } => {
            ChatStrategy
                .execute(ChatInput {
                    message,
                    model,
                    limit,
                })
                .await
        }
        Commands::Recommend {
            query,
            budget,
            category,
            terrain,
            brand,
            electric,
            no_electric,
            lightweight,
            limit,
        } => {
            RecommendStrategy
                .execute(RecommendInput {
                    query,
                    budget,
                    category,
                    terrain,
                    brand,
                    electric,
                    no_electric,
                    lightweight,
                    limit,
                })
                .await
        }
        Commands::Catalog => CatalogStrategy.execute(()).await,
        Commands::Info => InfoStrategy.execute(()).await,
        Commands::Init => InitStrategy.execute(()).await,
        Commands::Version => VersionStrategy.execute(()).await,
    }
}
