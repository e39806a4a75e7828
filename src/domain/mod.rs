//! Domain primitives shared by the catalog client, the favorites store and
//! the view controller.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// MyAnimeList id of a catalog entry, as Jikan reports it in `mal_id`.
///
/// Serializes as the bare integer so stored favorites keep their
/// `"mal_id": 16498` shape.
///
/// ```rust
/// use anime_explorer::domain::AnimeId;
///
/// let id: AnimeId = "16498".parse().unwrap();
/// assert_eq!(id.get(), 16498);
/// assert_eq!(id.to_string(), "16498");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnimeId(i32);

impl AnimeId {
    #[must_use]
    pub const fn new(mal_id: i32) -> Self {
        Self(mal_id)
    }

    #[must_use]
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl fmt::Display for AnimeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Parses the id form users type on the command line.
impl FromStr for AnimeId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().parse::<i32>() {
            Ok(id) if id > 0 => Ok(Self(id)),
            _ => Err(format!("'{s}' is not a MyAnimeList id")),
        }
    }
}

/// Airing season, as used by Jikan's `/seasons/{year}/{season}` endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Winter,
    Spring,
    Summer,
    Fall,
}

impl Season {
    /// Maps a calendar month (1-12) to its season.
    ///
    /// March through May is spring, June through August summer, September
    /// through November fall. Everything else, including out-of-range
    /// values, is winter.
    #[must_use]
    pub const fn from_month(month: u32) -> Self {
        match month {
            3..=5 => Self::Spring,
            6..=8 => Self::Summer,
            9..=11 => Self::Fall,
            _ => Self::Winter,
        }
    }

    /// Season of the local current date.
    #[must_use]
    pub fn current() -> Self {
        use chrono::Datelike;
        Self::from_month(chrono::Local::now().month())
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Winter => "winter",
            Self::Spring => "spring",
            Self::Summer => "summer",
            Self::Fall => "fall",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Season {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "winter" => Ok(Self::Winter),
            "spring" => Ok(Self::Spring),
            "summer" => Ok(Self::Summer),
            "fall" | "autumn" => Ok(Self::Fall),
            other => Err(format!("unknown season '{other}'")),
        }
    }
}
