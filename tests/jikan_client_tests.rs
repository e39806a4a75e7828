//! Jikan client and view controller against a local stand-in for the API.

use anime_explorer::clients::jikan::{Catalog, JikanClient};
use anime_explorer::config::JikanConfig;
use anime_explorer::domain::{AnimeId, Season};
use anime_explorer::favorites::{FavoritesStore, MemoryStorage};
use anime_explorer::render::{Container, EmptyState};
use anime_explorer::view::{LoadOutcome, Notifier, Tab, ViewController};
use anime_explorer::NetworkError;
use axum::{
    Json, Router,
    extract::{Path, Query},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde_json::{Value, json};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

fn anime_json(id: i32, title: &str, english: Option<&str>) -> Value {
    json!({
        "mal_id": id,
        "title": title,
        "title_english": english,
        "type": "TV",
        "score": 8.5,
        "year": 2023,
        "genres": [
            {"mal_id": 1, "name": "Action"},
            {"mal_id": 2, "name": "Adventure"},
            {"mal_id": 8, "name": "Drama"},
            {"mal_id": 10, "name": "Fantasy"}
        ],
        "images": {"jpg": {
            "image_url": format!("https://cdn.example/{id}.jpg"),
            "large_image_url": format!("https://cdn.example/{id}l.jpg")
        }}
    })
}

async fn search(Query(params): Query<HashMap<String, String>>) -> Response {
    let q = params.get("q").cloned().unwrap_or_default();
    let limit = params.get("limit").cloned().unwrap_or_default();

    match q.as_str() {
        "down" => (StatusCode::INTERNAL_SERVER_ERROR, "upstream unavailable").into_response(),
        "broken" => (StatusCode::OK, "<html>not json</html>").into_response(),
        "nothing" => Json(json!({"data": []})).into_response(),
        _ => Json(json!({"data": [
            anime_json(16498, &format!("{q} (limit {limit})"), Some("Attack on Titan")),
            anime_json(5114, "Fullmetal Alchemist: Brotherhood", None),
        ]}))
        .into_response(),
    }
}

async fn random() -> Json<Value> {
    Json(json!({"data": anime_json(1, "Cowboy Bebop", None)}))
}

async fn top(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    let limit = params.get("limit").cloned().unwrap_or_default();
    Json(json!({"data": [anime_json(52991, &format!("Sousou no Frieren (limit {limit})"), None)]}))
}

async fn season(Path((year, season)): Path<(i32, String)>) -> Json<Value> {
    Json(json!({"data": [anime_json(58514, &format!("{season} {year}"), None)]}))
}

async fn anime_by_id(Path(id): Path<i32>) -> Response {
    if id == 404 {
        return (StatusCode::NOT_FOUND, Json(json!({"status": 404}))).into_response();
    }
    Json(json!({"data": anime_json(id, "Looked Up", Some("Looked Up EN"))})).into_response()
}

async fn spawn_catalog() -> String {
    let app = Router::new()
        .route("/v4/anime", get(search))
        .route("/v4/anime/{id}", get(anime_by_id))
        .route("/v4/random/anime", get(random))
        .route("/v4/top/anime", get(top))
        .route("/v4/seasons/{year}/{season}", get(season));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind test listener");
    let addr = listener.local_addr().expect("missing local addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("test server failed");
    });

    format!("http://{addr}/v4")
}

fn client(base_url: &str) -> JikanClient {
    JikanClient::new(&JikanConfig {
        base_url: base_url.to_string(),
        result_limit: 7,
        request_timeout_seconds: 5,
        ..JikanConfig::default()
    })
}

#[tokio::test]
async fn search_maps_records_and_passes_query() {
    let client = client(&spawn_catalog().await);

    let results = client.search("shingeki no kyojin").await.unwrap();

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].id, AnimeId::new(16498));
    assert_eq!(results[0].title, "shingeki no kyojin (limit 7)");
    assert_eq!(results[0].title_english.as_deref(), Some("Attack on Titan"));
    assert_eq!(results[0].genres.len(), 4);
    assert_eq!(
        results[0].image_url.as_deref(),
        Some("https://cdn.example/16498l.jpg")
    );
    assert!(results[1].title_english.is_none());
}

#[tokio::test]
async fn random_returns_single_record() {
    let client = client(&spawn_catalog().await);
    let results = client.random().await.unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].title, "Cowboy Bebop");
}

#[tokio::test]
async fn trending_and_seasonal_hit_their_endpoints() {
    let client = client(&spawn_catalog().await);

    let top = client.trending().await.unwrap();
    assert_eq!(top[0].title, "Sousou no Frieren (limit 7)");

    let seasonal = client.seasonal(2024, Season::Fall).await.unwrap();
    assert_eq!(seasonal[0].title, "fall 2024");
}

#[tokio::test]
async fn get_anime_distinguishes_missing_ids() {
    let client = client(&spawn_catalog().await);

    let found = client.get_anime(AnimeId::new(21)).await.unwrap();
    assert_eq!(found.unwrap().title, "Looked Up");

    let missing = client.get_anime(AnimeId::new(404)).await.unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn failures_surface_as_network_errors() {
    let client = client(&spawn_catalog().await);

    let err = client.search("down").await.unwrap_err();
    assert!(matches!(err, NetworkError::Status { status, .. } if status.as_u16() == 500));

    let err = client.search("broken").await.unwrap_err();
    assert!(matches!(err, NetworkError::Decode { .. }));
}

#[tokio::test]
async fn unreachable_host_is_a_transport_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = client(&format!("http://{addr}/v4"));
    let err = client.trending().await.unwrap_err();
    assert!(matches!(err, NetworkError::Transport { .. }));
}

#[derive(Clone, Default)]
struct Alerts(Rc<RefCell<Vec<String>>>);

impl Notifier for Alerts {
    fn alert(&self, message: &str) {
        self.0.borrow_mut().push(message.to_string());
    }
}

#[tokio::test]
async fn controller_renders_live_catalog() {
    let alerts = Alerts::default();
    let store = FavoritesStore::open(MemoryStorage::new()).unwrap();
    let mut controller = ViewController::new(
        client(&spawn_catalog().await),
        store,
        Box::new(alerts.clone()),
    )
    .with_season(2024, Season::Fall);

    controller.init().await;
    assert_eq!(controller.container(Tab::Seasonal).fragments()[0].title, "fall 2024");

    assert_eq!(controller.search("nothing").await, LoadOutcome::Applied);
    assert_eq!(
        controller.container(Tab::Search),
        &Container::Empty(EmptyState::NoResults)
    );

    controller.search("titan").await;
    let card = controller
        .container(Tab::Search)
        .find(AnimeId::new(16498))
        .unwrap();
    let details = card.details.as_ref().unwrap();
    assert_eq!(details.genres, vec!["Action", "Adventure", "Drama"]);
    assert_eq!(details.year, "2023");

    assert_eq!(controller.search("down").await, LoadOutcome::Failed);
    assert_eq!(alerts.0.borrow().len(), 1);
}
