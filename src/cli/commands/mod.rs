mod browse;
mod favorites;
mod init;

pub use browse::{cmd_random, cmd_search, cmd_seasonal, cmd_trending};
pub use favorites::{cmd_favorite_toggle, cmd_favorites_list};
pub use init::cmd_init;

use anyhow::Context;

use crate::clients::jikan::JikanClient;
use crate::config::{Config, OutputFormat};
use crate::favorites::{FavoritesStore, FileStorage};
use crate::render::Container;
use crate::view::{ConsoleNotifier, ViewController};

use super::DisplayArgs;

/// Builds a controller over the configured catalog and favorites storage.
fn open_controller(
    config: &Config,
    display: DisplayArgs,
) -> anyhow::Result<ViewController<JikanClient>> {
    let data_path = config.general.data_path();
    let store = FavoritesStore::open(FileStorage::new(&data_path)).with_context(|| {
        format!("Failed to open favorites storage in {}", data_path.display())
    })?;

    let translate = display.translate || config.display.translate_titles;

    Ok(ViewController::new(
        JikanClient::new(&config.jikan),
        store,
        Box::new(ConsoleNotifier),
    )
    .with_translate(translate))
}

fn print_container(config: &Config, display: DisplayArgs, heading: &str, container: &Container) {
    if display.html || config.display.output == OutputFormat::Html {
        print!("{}", container.to_html());
        return;
    }

    println!("{heading}");
    println!("{:-<60}", "");
    print!("{}", container.to_text());
}
