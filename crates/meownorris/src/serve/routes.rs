//! HTTP routes for the joke API.
//!
//! - `GET /` - Welcome message and endpoint map
//! - `GET /health` - Liveness probe
//! - `GET /jokes/random?mascot=<name>` - Random joke
//! - `GET /jokes/woof/random` - Random joke for Woof Norris
//! - `GET /jokes/category/{category}?mascot=<name>` - Joke from a category
//! - `GET /jokes/woof/category/{category}` - Joke from a category for Woof Norris
//! - `GET /jokes/categories` - Provider categories
//! - `GET /mascots` - Registered mascots

use crate::error::Error;
use crate::provider::JokeProvider;
use crate::service::JokeService;
use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use meownorris_core::joke::Joke;
use meownorris_core::mascot::{self, Mascot, WOOF_NORRIS};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

type SharedService<P> = Arc<JokeService<P>>;

#[derive(Debug, Deserialize)]
pub struct MascotQuery {
    mascot: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    categories: Vec<String>,
    total: usize,
}

#[derive(Debug, Serialize)]
pub struct MascotEntry {
    #[serde(flatten)]
    mascot: &'static Mascot,
    example_endpoint: String,
}

#[derive(Debug, Serialize)]
pub struct MascotsResponse {
    mascots: Vec<MascotEntry>,
    total: usize,
    note: &'static str,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    status: &'static str,
    service: &'static str,
    version: &'static str,
}

/// Build the joke API router around a shared service.
pub fn router<P: JokeProvider + 'static>(service: SharedService<P>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(welcome))
        .route("/health", get(health))
        .route("/jokes/random", get(random_joke::<P>))
        .route("/jokes/woof/random", get(woof_random_joke::<P>))
        .route("/jokes/category/{category}", get(category_joke::<P>))
        .route("/jokes/woof/category/{category}", get(woof_category_joke::<P>))
        .route("/jokes/categories", get(categories::<P>))
        .route("/mascots", get(mascots::<P>))
        .layer(cors)
        .with_state(service)
}

async fn welcome() -> Json<serde_json::Value> {
    let mascot_names: Vec<&str> = mascot::list().iter().map(|m| m.name).collect();

    Json(serde_json::json!({
        "message": "Welcome to the Meow Norris Joke API! 🐱🐶",
        "description": "Get Chuck Norris jokes transformed for our office mascots",
        "endpoints": {
            "random_meow_joke": "/jokes/random",
            "random_woof_joke": "/jokes/woof/random",
            "joke_by_category": "/jokes/category/{category}",
            "woof_joke_by_category": "/jokes/woof/category/{category}",
            "categories": "/jokes/categories",
            "mascots": "/mascots",
            "custom_mascot": "/jokes/random?mascot=YourMascot"
        },
        "popular_mascots": mascot_names,
    }))
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: "meownorris",
        version: env!("CARGO_PKG_VERSION"),
    })
}

async fn random_joke<P: JokeProvider>(
    State(service): State<SharedService<P>>,
    Query(query): Query<MascotQuery>,
) -> Result<Json<Joke>, Error> {
    log::debug!("GET /jokes/random mascot={:?}", query.mascot);
    let joke = service.get_random(query.mascot.as_deref()).await?;
    Ok(Json(joke))
}

async fn woof_random_joke<P: JokeProvider>(
    State(service): State<SharedService<P>>,
) -> Result<Json<Joke>, Error> {
    log::debug!("GET /jokes/woof/random");
    let joke = service.get_random(Some(WOOF_NORRIS)).await?;
    Ok(Json(joke))
}

async fn category_joke<P: JokeProvider>(
    State(service): State<SharedService<P>>,
    Path(category): Path<String>,
    Query(query): Query<MascotQuery>,
) -> Result<Json<Joke>, Error> {
    log::debug!(
        "GET /jokes/category/{category} mascot={:?}",
        query.mascot
    );
    let joke = service
        .get_by_category(&category, query.mascot.as_deref())
        .await?;
    Ok(Json(joke))
}

async fn woof_category_joke<P: JokeProvider>(
    State(service): State<SharedService<P>>,
    Path(category): Path<String>,
) -> Result<Json<Joke>, Error> {
    log::debug!("GET /jokes/woof/category/{category}");
    let joke = service.get_by_category(&category, Some(WOOF_NORRIS)).await?;
    Ok(Json(joke))
}

async fn categories<P: JokeProvider>(
    State(service): State<SharedService<P>>,
) -> Result<Json<CategoriesResponse>, Error> {
    let categories = service.list_categories().await?;
    Ok(Json(CategoriesResponse {
        total: categories.len(),
        categories,
    }))
}

async fn mascots<P: JokeProvider>(State(service): State<SharedService<P>>) -> Json<MascotsResponse> {
    let mascots: Vec<MascotEntry> = service
        .list_mascots()
        .iter()
        .map(|mascot| MascotEntry {
            mascot,
            example_endpoint: example_endpoint(mascot.name),
        })
        .collect();

    Json(MascotsResponse {
        total: mascots.len(),
        mascots,
        note: "You can use any custom mascot name with the 'mascot' parameter!",
    })
}

fn example_endpoint(name: &str) -> String {
    if name == WOOF_NORRIS {
        "/jokes/woof/random".to_string()
    } else {
        format!("/jokes/random?mascot={}", urlencoding::encode(name))
    }
}
