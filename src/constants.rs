pub const APP_NAME: &str = "anime-explorer";

pub mod jikan {

    pub const BASE_URL: &str = "https://api.jikan.moe/v4";

    pub const DEFAULT_LIMIT: u32 = 20;
}

pub mod storage {

    /// Key under which the favorites list is persisted.
    pub const FAVORITES_KEY: &str = "animeFavorites";
}

pub mod render {

    pub const PLACEHOLDER: &str = "N/A";

    pub const DEFAULT_MEDIA_TYPE: &str = "Anime";

    pub const FAVORITE_LABEL: &str = "Favorite";

    pub const MAX_GENRES: usize = 3;
}

pub mod messages {

    pub const SEARCH_FAILED: &str = "Failed to search anime. Please try again.";

    pub const RANDOM_FAILED: &str = "Failed to get random anime. Please try again.";
}
