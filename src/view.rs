//! Tab/view controller.
//!
//! Owns the catalog client and the favorites store, tracks which tab is
//! showing, and keeps the rendered container of each view up to date.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, error, info, warn};

use crate::clients::jikan::Catalog;
use crate::constants::messages;
use crate::domain::{AnimeId, Season};
use crate::error::{Error, NetworkError};
use crate::favorites::FavoritesStore;
use crate::models::anime::AnimeRecord;
use crate::render::{self, Container};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Search,
    Trending,
    Seasonal,
    Favorites,
}

impl Tab {
    pub const ALL: [Self; 4] = [Self::Search, Self::Trending, Self::Seasonal, Self::Favorites];

    const fn index(self) -> usize {
        match self {
            Self::Search => 0,
            Self::Trending => 1,
            Self::Seasonal => 2,
            Self::Favorites => 3,
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Search => "search",
            Self::Trending => "trending",
            Self::Seasonal => "seasonal",
            Self::Favorites => "favorites",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown tab '{s}'"))
    }
}

/// User-facing notifications.
pub trait Notifier {
    /// Blocking alert for failed user-initiated actions.
    fn alert(&self, message: &str);

    fn loading(&self, _active: bool) {}
}

/// Writes alerts and the loading indicator to stderr.
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn alert(&self, message: &str) {
        eprintln!("{message}");
    }

    fn loading(&self, active: bool) {
        if active {
            eprintln!("Searching...");
        }
    }
}

/// Narrows rendered search results.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilters {
    pub genre: Option<String>,
    pub year: Option<i32>,
    pub media_type: Option<String>,
}

impl SearchFilters {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.genre.is_none() && self.year.is_none() && self.media_type.is_none()
    }

    #[must_use]
    pub fn matches(&self, anime: &AnimeRecord) -> bool {
        if let Some(genre) = &self.genre
            && !anime.has_genre(genre)
        {
            return false;
        }

        if let Some(year) = self.year
            && anime.year != Some(year)
        {
            return false;
        }

        if let Some(media_type) = &self.media_type {
            let matches_type = anime
                .media_type
                .as_deref()
                .is_some_and(|t| t.eq_ignore_ascii_case(media_type));
            if !matches_type {
                return false;
            }
        }

        true
    }
}

/// Identifies one load of one view. Only the most recent ticket per view
/// may write its container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    view: Tab,
    generation: u64,
}

impl Ticket {
    #[must_use]
    pub const fn view(&self) -> Tab {
        self.view
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Applied,
    /// A newer load of the same view started first; the response was dropped.
    Stale,
    Failed,
    /// Nothing to do (blank search text).
    Skipped,
}

#[derive(Default)]
struct ViewState {
    records: Vec<AnimeRecord>,
    container: Container,
    generation: u64,
}

pub struct ViewController<C: Catalog> {
    catalog: C,
    favorites: FavoritesStore,
    notifier: Box<dyn Notifier>,
    current: Tab,
    translate: bool,
    filters: SearchFilters,
    last_query: Option<String>,
    season: Option<(i32, Season)>,
    views: [ViewState; 4],
}

fn render_view(
    records: &[AnimeRecord],
    filters: Option<&SearchFilters>,
    translate: bool,
    favorites: &FavoritesStore,
) -> Container {
    match filters {
        Some(filters) if !filters.is_empty() => {
            let filtered: Vec<AnimeRecord> = records
                .iter()
                .filter(|a| filters.matches(a))
                .cloned()
                .collect();
            render::render_results(&filtered, translate, |id| favorites.contains(id))
        }
        _ => render::render_results(records, translate, |id| favorites.contains(id)),
    }
}

impl<C: Catalog> ViewController<C> {
    pub fn new(catalog: C, favorites: FavoritesStore, notifier: Box<dyn Notifier>) -> Self {
        let mut controller = Self {
            catalog,
            favorites,
            notifier,
            current: Tab::Search,
            translate: false,
            filters: SearchFilters::default(),
            last_query: None,
            season: None,
            views: Default::default(),
        };
        controller.render_favorites();
        controller
    }

    #[must_use]
    pub fn with_translate(mut self, translate: bool) -> Self {
        self.translate = translate;
        self
    }

    /// Pins the season used by the seasonal view instead of today's date.
    #[must_use]
    pub fn with_season(mut self, year: i32, season: Season) -> Self {
        self.season = Some((year, season));
        self
    }

    #[must_use]
    pub const fn current_tab(&self) -> Tab {
        self.current
    }

    #[must_use]
    pub const fn translate(&self) -> bool {
        self.translate
    }

    #[must_use]
    pub const fn catalog(&self) -> &C {
        &self.catalog
    }

    #[must_use]
    pub const fn favorites(&self) -> &FavoritesStore {
        &self.favorites
    }

    #[must_use]
    pub const fn filters(&self) -> &SearchFilters {
        &self.filters
    }

    #[must_use]
    pub fn container(&self, tab: Tab) -> &Container {
        &self.views[tab.index()].container
    }

    #[must_use]
    pub fn season(&self) -> (i32, Season) {
        self.season.unwrap_or_else(|| {
            use chrono::Datelike;
            (chrono::Local::now().year(), Season::current())
        })
    }

    /// Starts a load of `view`, invalidating any load still in flight for it.
    pub fn begin_load(&mut self, view: Tab) -> Ticket {
        let state = &mut self.views[view.index()];
        state.generation += 1;
        Ticket {
            view,
            generation: state.generation,
        }
    }

    /// Writes a finished load into its view unless a newer one has started.
    pub fn complete_load(&mut self, ticket: Ticket, records: Vec<AnimeRecord>) -> LoadOutcome {
        let state = &self.views[ticket.view.index()];
        if state.generation != ticket.generation {
            debug!(
                view = %ticket.view,
                stale = ticket.generation,
                current = state.generation,
                "Discarding stale response"
            );
            return LoadOutcome::Stale;
        }

        let filters = (ticket.view == Tab::Search).then_some(&self.filters);
        let container = render_view(&records, filters, self.translate, &self.favorites);

        let state = &mut self.views[ticket.view.index()];
        state.records = records;
        state.container = container;
        LoadOutcome::Applied
    }

    /// Loads the background views concurrently and renders favorites.
    pub async fn init(&mut self) {
        let trending_ticket = self.begin_load(Tab::Trending);
        let seasonal_ticket = self.begin_load(Tab::Seasonal);
        let (year, season) = self.season();

        let (trending, seasonal) = tokio::join!(
            self.catalog.trending(),
            self.catalog.seasonal(year, season)
        );

        self.finish_background(trending_ticket, trending);
        self.finish_background(seasonal_ticket, seasonal);
        self.render_favorites();
    }

    pub async fn search(&mut self, query: &str) -> LoadOutcome {
        let query = query.trim();
        if query.is_empty() {
            return LoadOutcome::Skipped;
        }

        self.last_query = Some(query.to_string());
        info!("Searching for '{}'", query);

        self.notifier.loading(true);
        let ticket = self.begin_load(Tab::Search);
        let result = self.catalog.search(query).await;
        let outcome = self.finish_user_action(ticket, result, messages::SEARCH_FAILED);
        self.notifier.loading(false);

        outcome
    }

    /// Fetches one random anime into the search view and switches to it.
    pub async fn random(&mut self) -> LoadOutcome {
        self.notifier.loading(true);
        let ticket = self.begin_load(Tab::Search);
        let result = self.catalog.random().await;
        let outcome = self.finish_user_action(ticket, result, messages::RANDOM_FAILED);

        if outcome == LoadOutcome::Applied {
            self.switch_tab(Tab::Search).await;
        }
        self.notifier.loading(false);

        outcome
    }

    pub async fn load_trending(&mut self) -> LoadOutcome {
        let ticket = self.begin_load(Tab::Trending);
        let result = self.catalog.trending().await;
        self.finish_background(ticket, result)
    }

    pub async fn load_seasonal(&mut self) -> LoadOutcome {
        let ticket = self.begin_load(Tab::Seasonal);
        let (year, season) = self.season();
        let result = self.catalog.seasonal(year, season).await;
        self.finish_background(ticket, result)
    }

    /// Enters `tab` and (re)loads or (re)renders its content.
    pub async fn switch_tab(&mut self, tab: Tab) {
        debug!(from = %self.current, to = %tab, "Switching tab");
        self.current = tab;

        match tab {
            Tab::Search => self.rerender(Tab::Search),
            Tab::Trending => {
                self.load_trending().await;
            }
            Tab::Seasonal => {
                self.load_seasonal().await;
            }
            Tab::Favorites => self.render_favorites(),
        }
    }

    /// Changes the title language and reloads the current tab.
    pub async fn set_translate(&mut self, translate: bool) {
        self.translate = translate;
        self.reload_current().await;
    }

    /// Replaces the search filters; re-runs the search when it is showing.
    pub async fn set_filters(&mut self, filters: SearchFilters) {
        self.filters = filters;
        if self.current == Tab::Search {
            self.reload_current().await;
        }
    }

    /// Toggles the favorite state of a card shown in any view.
    ///
    /// The title and image are taken from the rendered card, so the stored
    /// title is whatever the user saw at that moment.
    pub fn toggle_favorite(&mut self, id: AnimeId) -> Result<bool, Error> {
        let (title, image_url) = match Tab::ALL
            .iter()
            .find_map(|tab| self.container(*tab).find(id))
        {
            Some(card) => (card.title.clone(), card.image_url.clone()),
            None => match self.favorites.get(id) {
                Some(entry) => (entry.title.clone(), entry.image_url.clone()),
                None => return Err(Error::NotFound(id)),
            },
        };

        self.toggle_favorite_entry(id, &title, &image_url)
    }

    /// Toggles a favorite with an explicit title and image.
    pub fn toggle_favorite_entry(
        &mut self,
        id: AnimeId,
        title: &str,
        image_url: &str,
    ) -> Result<bool, Error> {
        let favorited = self.favorites.toggle(id, title, image_url)?;

        let favorites = &self.favorites;
        for state in &mut self.views {
            state.container.refresh_favorites(|id| favorites.contains(id));
        }

        if self.current == Tab::Favorites {
            self.render_favorites();
        }

        Ok(favorited)
    }

    async fn reload_current(&mut self) {
        match self.current {
            Tab::Search => match self.last_query.clone() {
                Some(query) => {
                    self.search(&query).await;
                }
                None => self.rerender(Tab::Search),
            },
            Tab::Trending => {
                self.load_trending().await;
            }
            Tab::Seasonal => {
                self.load_seasonal().await;
            }
            Tab::Favorites => self.render_favorites(),
        }
    }

    fn rerender(&mut self, tab: Tab) {
        if tab == Tab::Favorites {
            self.render_favorites();
            return;
        }

        let filters = (tab == Tab::Search).then_some(&self.filters);
        let state = &self.views[tab.index()];
        if state.generation == 0 {
            return;
        }
        let container = render_view(&state.records, filters, self.translate, &self.favorites);
        self.views[tab.index()].container = container;
    }

    fn render_favorites(&mut self) {
        self.views[Tab::Favorites.index()].container =
            render::render_favorites(self.favorites.all());
    }

    fn finish_user_action(
        &mut self,
        ticket: Ticket,
        result: Result<Vec<AnimeRecord>, NetworkError>,
        message: &str,
    ) -> LoadOutcome {
        match result {
            Ok(records) => self.complete_load(ticket, records),
            Err(e) => {
                error!(view = %ticket.view, "Catalog request failed: {}", e);
                self.notifier.alert(message);
                LoadOutcome::Failed
            }
        }
    }

    fn finish_background(
        &mut self,
        ticket: Ticket,
        result: Result<Vec<AnimeRecord>, NetworkError>,
    ) -> LoadOutcome {
        match result {
            Ok(records) => self.complete_load(ticket, records),
            Err(e) => {
                warn!(view = %ticket.view, "Background load failed: {}", e);
                LoadOutcome::Failed
            }
        }
    }
}
