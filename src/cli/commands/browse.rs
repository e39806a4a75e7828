//! Catalog browsing commands: search, random, trending, seasonal.

use crate::cli::DisplayArgs;
use crate::config::Config;
use crate::domain::Season;
use crate::view::{LoadOutcome, SearchFilters, Tab};

use super::{open_controller, print_container};

pub async fn cmd_search(
    config: &Config,
    display: DisplayArgs,
    query: &str,
    filters: SearchFilters,
) -> anyhow::Result<()> {
    let mut controller = open_controller(config, display)?;
    controller.set_filters(filters).await;

    if controller.search(query).await == LoadOutcome::Applied {
        print_container(
            config,
            display,
            &format!("Search Results for '{}':", query.trim()),
            controller.container(Tab::Search),
        );
    }

    Ok(())
}

pub async fn cmd_random(config: &Config, display: DisplayArgs) -> anyhow::Result<()> {
    let mut controller = open_controller(config, display)?;

    if controller.random().await == LoadOutcome::Applied {
        print_container(
            config,
            display,
            "Random Anime:",
            controller.container(Tab::Search),
        );
    }

    Ok(())
}

pub async fn cmd_trending(config: &Config, display: DisplayArgs) -> anyhow::Result<()> {
    let mut controller = open_controller(config, display)?;

    match controller.load_trending().await {
        LoadOutcome::Applied => print_container(
            config,
            display,
            "Top Anime:",
            controller.container(Tab::Trending),
        ),
        _ => println!("Trending anime are unavailable right now."),
    }

    Ok(())
}

pub async fn cmd_seasonal(
    config: &Config,
    display: DisplayArgs,
    year: Option<i32>,
    season: Option<Season>,
) -> anyhow::Result<()> {
    let controller = open_controller(config, display)?;
    let (current_year, current_season) = controller.season();
    let year = year.unwrap_or(current_year);
    let season = season.unwrap_or(current_season);

    let mut controller = controller.with_season(year, season);

    match controller.load_seasonal().await {
        LoadOutcome::Applied => print_container(
            config,
            display,
            &format!("Anime of {season} {year}:"),
            controller.container(Tab::Seasonal),
        ),
        _ => println!("Seasonal anime for {season} {year} are unavailable right now."),
    }

    Ok(())
}
