pub mod cli;
pub mod clients;
pub mod config;
pub mod constants;
pub mod domain;
pub mod error;
pub mod favorites;
pub mod models;
pub mod render;
pub mod view;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
pub use config::Config;
pub use error::{Error, NetworkError, StorageError};
use view::SearchFilters;

fn init_tracing(config: &Config) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let mut log_level = config.general.log_level.clone();
    log_level.push_str(",hyper_util=off");

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level));

    // stdout carries rendered cards; logs go to stderr.
    let fmt_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

pub async fn run(config: Config) -> anyhow::Result<()> {
    init_tracing(&config);

    let cli = Cli::parse();

    if matches!(cli.command, Commands::Init) {
        return cli::cmd_init();
    }

    config.validate()?;
    let display = cli.display;

    match cli.command {
        Commands::Search {
            query,
            genre,
            year,
            media_type,
        } => {
            let filters = SearchFilters {
                genre,
                year,
                media_type,
            };
            cli::cmd_search(&config, display, &query.join(" "), filters).await
        }
        Commands::Random => cli::cmd_random(&config, display).await,
        Commands::Trending => cli::cmd_trending(&config, display).await,
        Commands::Seasonal { year, season } => {
            cli::cmd_seasonal(&config, display, year, season).await
        }
        Commands::Favorites => cli::cmd_favorites_list(&config, display).await,
        Commands::Favorite { id, title, image } => {
            cli::cmd_favorite_toggle(&config, display, id, title, image).await
        }
        Commands::Init => cli::cmd_init(),
    }
}
