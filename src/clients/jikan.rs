use async_trait::async_trait;
use chrono::Datelike;
use reqwest::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

use crate::config::JikanConfig;
use crate::domain::{AnimeId, Season};
use crate::error::NetworkError;
use crate::models::anime::AnimeRecord;

#[derive(Debug, Deserialize)]
struct JikanResponse<T> {
    data: T,
}

#[derive(Debug, Deserialize)]
pub struct MalAnime {
    pub mal_id: i32,
    pub title: String,
    pub title_english: Option<String>,
    #[serde(rename = "type")]
    pub anime_type: Option<String>,
    pub score: Option<f32>,
    pub genres: Option<Vec<MalGenericInfo>>,
    pub year: Option<i32>,
    pub aired: Option<Aired>,
    pub images: Option<MalImages>,
}

#[derive(Debug, Deserialize)]
pub struct Aired {
    pub from: Option<String>,
    pub prop: Option<AiredProp>,
}

#[derive(Debug, Deserialize)]
pub struct AiredProp {
    pub from: Option<AiredDate>,
}

#[derive(Debug, Deserialize)]
pub struct AiredDate {
    pub year: Option<i32>,
}

#[derive(Debug, Deserialize)]
pub struct MalGenericInfo {
    pub mal_id: i32,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct MalImages {
    pub jpg: Option<MalImageSet>,
}

#[derive(Debug, Deserialize)]
pub struct MalImageSet {
    pub image_url: Option<String>,
    pub large_image_url: Option<String>,
}

impl MalAnime {
    pub fn get_start_year(&self) -> Option<i32> {
        if let Some(year) = self.year {
            return Some(year);
        }

        let aired = self.aired.as_ref()?;

        aired
            .prop
            .as_ref()
            .and_then(|p| p.from.as_ref())
            .and_then(|f| f.year)
            .or_else(|| {
                aired
                    .from
                    .as_deref()
                    .and_then(|from| chrono::DateTime::parse_from_rfc3339(from).ok())
                    .map(|date| date.year())
            })
    }

    fn large_image_url(&self) -> Option<String> {
        let jpg = self.images.as_ref()?.jpg.as_ref()?;
        jpg.large_image_url.clone().or_else(|| jpg.image_url.clone())
    }
}

impl From<MalAnime> for AnimeRecord {
    fn from(mal: MalAnime) -> Self {
        let year = mal.get_start_year();
        let image_url = mal.large_image_url();

        Self {
            id: AnimeId::new(mal.mal_id),
            title: mal.title,
            title_english: mal.title_english.filter(|t| !t.is_empty()),
            score: mal.score,
            year,
            genres: mal
                .genres
                .unwrap_or_default()
                .into_iter()
                .map(|g| g.name)
                .collect(),
            media_type: mal.anime_type,
            image_url,
        }
    }
}

/// The four catalog queries the explorer issues.
///
/// Each call performs a single request and fails with [`NetworkError`] on
/// any transport, status or decode problem. Nothing is retried.
#[async_trait]
pub trait Catalog: Send + Sync {
    async fn search(&self, query: &str) -> Result<Vec<AnimeRecord>, NetworkError>;

    /// Always a single-element list on success.
    async fn random(&self) -> Result<Vec<AnimeRecord>, NetworkError>;

    async fn trending(&self) -> Result<Vec<AnimeRecord>, NetworkError>;

    async fn seasonal(
        &self,
        year: i32,
        season: Season,
    ) -> Result<Vec<AnimeRecord>, NetworkError>;
}

#[derive(Clone)]
pub struct JikanClient {
    client: Client,
    base_url: String,
    limit: u32,
}

impl Default for JikanClient {
    fn default() -> Self {
        Self::new(&JikanConfig::default())
    }
}

impl JikanClient {
    pub fn new(config: &JikanConfig) -> Self {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(u64::from(config.request_timeout_seconds)))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            limit: config.result_limit,
        }
    }

    /// Looks up a single anime. `Ok(None)` when the catalog does not know the id.
    pub async fn get_anime(&self, id: AnimeId) -> Result<Option<AnimeRecord>, NetworkError> {
        let url = format!("{}/anime/{}", self.base_url, id);
        let response = self.send(&url).await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let anime: MalAnime = Self::decode(&url, response).await?;
        Ok(Some(anime.into()))
    }

    async fn send(&self, url: &str) -> Result<reqwest::Response, NetworkError> {
        debug!(%url, "Jikan request");
        self.client
            .get(url)
            .send()
            .await
            .map_err(|source| NetworkError::Transport {
                url: url.to_string(),
                source,
            })
    }

    async fn decode<T: DeserializeOwned>(
        url: &str,
        response: reqwest::Response,
    ) -> Result<T, NetworkError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(NetworkError::Status { status, body });
        }

        let body = response
            .text()
            .await
            .map_err(|source| NetworkError::Transport {
                url: url.to_string(),
                source,
            })?;

        let parsed: JikanResponse<T> =
            serde_json::from_str(&body).map_err(|source| NetworkError::Decode {
                url: url.to_string(),
                source,
            })?;

        Ok(parsed.data)
    }

    async fn fetch_list(&self, url: String) -> Result<Vec<AnimeRecord>, NetworkError> {
        let response = self.send(&url).await?;
        let list: Vec<MalAnime> = Self::decode(&url, response).await?;
        Ok(list.into_iter().map(AnimeRecord::from).collect())
    }
}

#[async_trait]
impl Catalog for JikanClient {
    async fn search(&self, query: &str) -> Result<Vec<AnimeRecord>, NetworkError> {
        let url = format!(
            "{}/anime?q={}&limit={}",
            self.base_url,
            urlencoding::encode(query),
            self.limit
        );
        self.fetch_list(url).await
    }

    async fn random(&self) -> Result<Vec<AnimeRecord>, NetworkError> {
        let url = format!("{}/random/anime", self.base_url);
        let response = self.send(&url).await?;
        let anime: MalAnime = Self::decode(&url, response).await?;
        Ok(vec![anime.into()])
    }

    async fn trending(&self) -> Result<Vec<AnimeRecord>, NetworkError> {
        let url = format!("{}/top/anime?limit={}", self.base_url, self.limit);
        self.fetch_list(url).await
    }

    async fn seasonal(
        &self,
        year: i32,
        season: Season,
    ) -> Result<Vec<AnimeRecord>, NetworkError> {
        let url = format!(
            "{}/seasons/{}/{}?limit={}",
            self.base_url, year, season, self.limit
        );
        self.fetch_list(url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_from_payload() {
        let json = r#"{
            "mal_id": 16498,
            "title": "Shingeki no Kyojin",
            "title_english": "Attack on Titan",
            "type": "TV",
            "score": 8.55,
            "year": 2013,
            "genres": [{"mal_id": 1, "name": "Action"}, {"mal_id": 8, "name": "Drama"}],
            "images": {"jpg": {
                "image_url": "https://cdn.myanimelist.net/images/anime/10/47347.jpg",
                "large_image_url": "https://cdn.myanimelist.net/images/anime/10/47347l.jpg"
            }}
        }"#;

        let mal: MalAnime = serde_json::from_str(json).unwrap();
        let record = AnimeRecord::from(mal);

        assert_eq!(record.id, AnimeId::new(16498));
        assert_eq!(record.title_english.as_deref(), Some("Attack on Titan"));
        assert_eq!(record.genres, vec!["Action", "Drama"]);
        assert_eq!(record.media_type.as_deref(), Some("TV"));
        assert_eq!(
            record.image_url.as_deref(),
            Some("https://cdn.myanimelist.net/images/anime/10/47347l.jpg")
        );
    }

    #[test]
    fn test_start_year_falls_back_to_aired() {
        let json = r#"{
            "mal_id": 1,
            "title": "Cowboy Bebop",
            "year": null,
            "aired": {"from": "1998-04-03T00:00:00+00:00", "prop": {"from": {"year": null}}}
        }"#;
        let mal: MalAnime = serde_json::from_str(json).unwrap();
        assert_eq!(mal.get_start_year(), Some(1998));

        let json = r#"{
            "mal_id": 1,
            "title": "Cowboy Bebop",
            "aired": {"from": null, "prop": {"from": {"year": 1998}}}
        }"#;
        let mal: MalAnime = serde_json::from_str(json).unwrap();
        assert_eq!(mal.get_start_year(), Some(1998));
    }

    #[test]
    fn test_missing_optional_fields() {
        let mal: MalAnime = serde_json::from_str(r#"{"mal_id": 7, "title": "X"}"#).unwrap();
        let record = AnimeRecord::from(mal);
        assert!(record.genres.is_empty());
        assert!(record.score.is_none());
        assert!(record.year.is_none());
        assert!(record.image_url.is_none());
    }

    #[test]
    fn test_empty_english_title_is_dropped() {
        let mal: MalAnime =
            serde_json::from_str(r#"{"mal_id": 7, "title": "X", "title_english": ""}"#).unwrap();
        assert!(AnimeRecord::from(mal).title_english.is_none());
    }
}
