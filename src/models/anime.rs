use serde::{Deserialize, Serialize};

use crate::domain::AnimeId;

/// A catalog entry as the rest of the crate sees it.
///
/// Built from the Jikan payload by [`crate::clients::jikan::MalAnime`]'s
/// conversion and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimeRecord {
    pub id: AnimeId,
    pub title: String,
    pub title_english: Option<String>,
    pub score: Option<f32>,
    pub year: Option<i32>,
    pub genres: Vec<String>,
    pub media_type: Option<String>,
    pub image_url: Option<String>,
}

impl AnimeRecord {
    /// Title to show for the given translation preference.
    #[must_use]
    pub fn display_title(&self, translate: bool) -> &str {
        match (&self.title_english, translate) {
            (Some(english), true) if !english.is_empty() => english,
            _ => &self.title,
        }
    }

    #[must_use]
    pub fn has_genre(&self, genre: &str) -> bool {
        self.genres.iter().any(|g| g.eq_ignore_ascii_case(genre))
    }
}
