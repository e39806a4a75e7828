//! Mapping of catalog records and favorites to display fragments.
//!
//! Everything here is pure: the favorite state of a card is supplied by the
//! caller, so the same functions serve every view.

use html_escape::{encode_double_quoted_attribute, encode_text};
use serde::Serialize;

use crate::constants::render::{DEFAULT_MEDIA_TYPE, FAVORITE_LABEL, MAX_GENRES, PLACEHOLDER};
use crate::domain::AnimeId;
use crate::models::anime::AnimeRecord;
use crate::models::favorite::FavoriteEntry;

/// Score, year and genres. Only catalog cards carry them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardDetails {
    pub score: String,
    pub year: String,
    pub genres: Vec<String>,
}

/// One renderable card.
///
/// The identifier is kept as typed data so a favorite toggle can be routed
/// back to the card without inspecting the generated markup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Fragment {
    pub id: AnimeId,
    pub title: String,
    pub image_url: String,
    pub type_label: String,
    pub details: Option<CardDetails>,
    pub favorited: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EmptyState {
    NoResults,
    NoFavorites,
}

impl EmptyState {
    #[must_use]
    pub const fn heading(&self) -> &'static str {
        match self {
            Self::NoResults => "No results found",
            Self::NoFavorites => "No favorites yet",
        }
    }

    #[must_use]
    pub const fn hint(&self) -> &'static str {
        match self {
            Self::NoResults => "Try a different search term or check your filters.",
            Self::NoFavorites => "Add some anime to your favorites by clicking the heart icon!",
        }
    }
}

/// Rendered content of one view.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "items")]
pub enum Container {
    Empty(EmptyState),
    Cards(Vec<Fragment>),
}

impl Default for Container {
    fn default() -> Self {
        Self::Cards(Vec::new())
    }
}

fn format_score(score: Option<f32>) -> String {
    match score {
        Some(s) if s > 0.0 => format!("{s}"),
        _ => PLACEHOLDER.to_string(),
    }
}

/// Renders one catalog record.
#[must_use]
pub fn render_record(anime: &AnimeRecord, translate: bool, favorited: bool) -> Fragment {
    Fragment {
        id: anime.id,
        title: anime.display_title(translate).to_string(),
        image_url: anime.image_url.clone().unwrap_or_default(),
        type_label: anime
            .media_type
            .clone()
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| DEFAULT_MEDIA_TYPE.to_string()),
        details: Some(CardDetails {
            score: format_score(anime.score),
            year: anime
                .year
                .map_or_else(|| PLACEHOLDER.to_string(), |y| y.to_string()),
            genres: anime.genres.iter().take(MAX_GENRES).cloned().collect(),
        }),
        favorited,
    }
}

#[must_use]
pub fn render_favorite(entry: &FavoriteEntry) -> Fragment {
    Fragment {
        id: entry.id,
        title: entry.title.clone(),
        image_url: entry.image_url.clone(),
        type_label: FAVORITE_LABEL.to_string(),
        details: None,
        favorited: true,
    }
}

/// Renders a result list. An empty list yields the "No results found" state.
pub fn render_results<F>(list: &[AnimeRecord], translate: bool, is_favorite: F) -> Container
where
    F: Fn(AnimeId) -> bool,
{
    if list.is_empty() {
        return Container::Empty(EmptyState::NoResults);
    }

    Container::Cards(
        list.iter()
            .map(|anime| render_record(anime, translate, is_favorite(anime.id)))
            .collect(),
    )
}

#[must_use]
pub fn render_favorites(entries: &[FavoriteEntry]) -> Container {
    if entries.is_empty() {
        return Container::Empty(EmptyState::NoFavorites);
    }

    Container::Cards(entries.iter().map(render_favorite).collect())
}

impl Fragment {
    #[must_use]
    pub fn to_html(&self) -> String {
        let title_attr = encode_double_quoted_attribute(&self.title);
        let image = encode_double_quoted_attribute(&self.image_url);
        let info = self.details.as_ref().map_or_else(String::new, details_html);
        let (class, heart) = if self.favorited {
            ("favorite-btn favorited", "❤️")
        } else {
            ("favorite-btn", "🤍")
        };

        format!(
            concat!(
                "<div class=\"anime-card\" data-id=\"{id}\">\n",
                "  <img src=\"{image}\" alt=\"{title_attr}\" loading=\"lazy\">\n",
                "  <div class=\"card-content\">\n",
                "    <div class=\"card-title\">{title}</div>\n",
                "{info}",
                "    <div class=\"card-actions\">\n",
                "      <span class=\"type\">{type_label}</span>\n",
                "      <button class=\"{class}\" data-id=\"{id}\">{heart}</button>\n",
                "    </div>\n",
                "  </div>\n",
                "</div>\n",
            ),
            id = self.id,
            image = image,
            title_attr = title_attr,
            title = encode_text(&self.title),
            info = info,
            type_label = encode_text(&self.type_label),
            class = class,
            heart = heart,
        )
    }

    #[must_use]
    pub fn to_text(&self) -> String {
        let heart = if self.favorited { "♥" } else { "♡" };
        let line = match &self.details {
            Some(details) if details.genres.is_empty() => format!(
                "ID: {} | Score: {} | Year: {}",
                self.id, details.score, details.year
            ),
            Some(details) => format!(
                "ID: {} | Score: {} | Year: {} | {}",
                self.id,
                details.score,
                details.year,
                details.genres.join(", ")
            ),
            None => format!("ID: {}", self.id),
        };

        format!("{heart} {} [{}]\n  {line}\n", self.title, self.type_label)
    }
}

fn details_html(details: &CardDetails) -> String {
    let genres: String = details
        .genres
        .iter()
        .map(|genre| format!("      <span class=\"genre-tag\">{}</span>\n", encode_text(genre)))
        .collect();

    format!(
        concat!(
            "    <div class=\"card-info\">\n",
            "      <span class=\"rating\">⭐ {score}</span>\n",
            "      <span class=\"year\">{year}</span>\n",
            "    </div>\n",
            "    <div class=\"genres\">\n",
            "{genres}",
            "    </div>\n",
        ),
        score = encode_text(&details.score),
        year = encode_text(&details.year),
        genres = genres,
    )
}

impl Container {
    #[must_use]
    pub fn fragments(&self) -> &[Fragment] {
        match self {
            Self::Cards(cards) => cards,
            Self::Empty(_) => &[],
        }
    }

    #[must_use]
    pub fn find(&self, id: AnimeId) -> Option<&Fragment> {
        self.fragments().iter().find(|f| f.id == id)
    }

    /// Re-decorates every card with the current favorite state.
    pub fn refresh_favorites<F>(&mut self, is_favorite: F)
    where
        F: Fn(AnimeId) -> bool,
    {
        if let Self::Cards(cards) = self {
            for card in cards {
                card.favorited = is_favorite(card.id);
            }
        }
    }

    #[must_use]
    pub fn to_html(&self) -> String {
        match self {
            Self::Empty(state) => format!(
                "<div class=\"empty-state\">\n  <h3>{}</h3>\n  <p>{}</p>\n</div>\n",
                state.heading(),
                encode_text(state.hint())
            ),
            Self::Cards(cards) => cards.iter().map(Fragment::to_html).collect(),
        }
    }

    #[must_use]
    pub fn to_text(&self) -> String {
        match self {
            Self::Empty(state) => format!("{}\n{}\n", state.heading(), state.hint()),
            Self::Cards(cards) => cards
                .iter()
                .map(Fragment::to_text)
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}
