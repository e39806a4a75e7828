//! Favorites commands

use crate::cli::DisplayArgs;
use crate::config::Config;
use crate::domain::AnimeId;
use crate::error::Error;
use crate::view::Tab;

use super::{open_controller, print_container};

pub async fn cmd_favorites_list(config: &Config, display: DisplayArgs) -> anyhow::Result<()> {
    let mut controller = open_controller(config, display)?;
    controller.switch_tab(Tab::Favorites).await;

    print_container(
        config,
        display,
        &format!("Favorites ({} total)", controller.favorites().len()),
        controller.container(Tab::Favorites),
    );

    Ok(())
}

pub async fn cmd_favorite_toggle(
    config: &Config,
    display: DisplayArgs,
    id: AnimeId,
    title: Option<String>,
    image: Option<String>,
) -> anyhow::Result<()> {
    let mut controller = open_controller(config, display)?;

    let favorited = if controller.favorites().contains(id) {
        controller.toggle_favorite(id)?
    } else {
        let (title, image) = match title {
            Some(title) => (title, image.unwrap_or_default()),
            None => {
                let anime = controller
                    .catalog()
                    .get_anime(id)
                    .await?
                    .ok_or(Error::NotFound(id))?;
                let title = anime.display_title(controller.translate()).to_string();
                (title, image.or(anime.image_url).unwrap_or_default())
            }
        };
        controller.toggle_favorite_entry(id, &title, &image)?
    };

    let title = controller
        .favorites()
        .get(id)
        .map_or_else(|| id.to_string(), |entry| entry.title.clone());

    if favorited {
        println!("Added to favorites: {title} (ID: {id})");
    } else {
        println!("Removed from favorites: ID {id}");
    }

    Ok(())
}
