use serde::{Deserialize, Serialize};

use crate::domain::AnimeId;

/// A favorited anime.
///
/// The title is a snapshot taken when the entry was created and is not kept
/// in sync with the catalog. Field names on the wire match the stored
/// `animeFavorites` format (`mal_id`, `title`, `imageUrl`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteEntry {
    #[serde(rename = "mal_id")]
    pub id: AnimeId,
    pub title: String,
    #[serde(rename = "imageUrl", default)]
    pub image_url: String,
}

impl FavoriteEntry {
    pub fn new(id: AnimeId, title: impl Into<String>, image_url: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            image_url: image_url.into(),
        }
    }
}
