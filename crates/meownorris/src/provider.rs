use crate::config::ProviderConfig;
use crate::prelude::*;
use async_trait::async_trait;
use meownorris_core::error::ProviderError;
use meownorris_core::joke::RawJoke;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

/// Source of raw jokes.
///
/// Each call performs at most one outbound request and never retries.
#[async_trait]
pub trait JokeProvider: Send + Sync {
    async fn fetch_random(&self) -> Result<RawJoke, ProviderError>;

    async fn fetch_by_category(&self, category: &str) -> Result<RawJoke, ProviderError>;

    async fn fetch_categories(&self) -> Result<Vec<String>, ProviderError>;
}

/// Joke provider reached over HTTP
#[derive(Debug, Clone)]
pub struct HttpProvider {
    client: reqwest::Client,
    base_url: String,
}

impl HttpProvider {
    pub fn new(config: &ProviderConfig) -> Result<Self> {
        Ok(Self {
            client: config.create_client()?,
            base_url: config.base_url.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        category: Option<&str>,
    ) -> Result<T, ProviderError> {
        let url = format!("{}/{path}", self.base_url);

        let mut request = self.client.get(&url);
        if let Some(category) = category {
            request = request.query(&[("category", category)]);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                ProviderError::Unavailable(format!("request to {url} timed out"))
            } else {
                ProviderError::Unavailable(format!("request to {url} failed: {e}"))
            }
        })?;

        if let Some(err) = classify_status(response.status(), category) {
            return Err(err);
        }

        response.json::<T>().await.map_err(|e| {
            if e.is_decode() {
                ProviderError::Protocol(format!("unexpected response from {url}: {e}"))
            } else {
                ProviderError::Unavailable(format!("failed to read response from {url}: {e}"))
            }
        })
    }
}

#[async_trait]
impl JokeProvider for HttpProvider {
    async fn fetch_random(&self) -> Result<RawJoke, ProviderError> {
        self.get_json("random", None).await
    }

    async fn fetch_by_category(&self, category: &str) -> Result<RawJoke, ProviderError> {
        if category.is_empty() {
            return Err(ProviderError::InvalidCategory(
                "category must not be empty".to_string(),
            ));
        }

        self.get_json("random", Some(category)).await
    }

    async fn fetch_categories(&self) -> Result<Vec<String>, ProviderError> {
        self.get_json("categories", None).await
    }
}

/// Map a provider status code to a fault, if it is one.
///
/// 404 and 400 only mean an unknown category when a category was requested.
fn classify_status(status: StatusCode, category: Option<&str>) -> Option<ProviderError> {
    if status.is_success() {
        return None;
    }

    if status.is_server_error() {
        return Some(ProviderError::Unavailable(format!("HTTP {status}")));
    }

    let rejected = status == StatusCode::NOT_FOUND || status == StatusCode::BAD_REQUEST;

    match category {
        Some(category) if rejected => Some(ProviderError::InvalidCategory(format!(
            "{category} (HTTP {status})"
        ))),
        _ => Some(ProviderError::Protocol(format!("unexpected HTTP {status}"))),
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::Query;
    use axum::routing::get;
    use axum::{Json, Router};
    use std::collections::HashMap;
    use std::time::Duration;

    async fn spawn_provider(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}/jokes")
    }

    fn create_test_provider(base_url: &str, timeout: Duration) -> HttpProvider {
        let config = ProviderConfig::new(base_url, timeout).unwrap();
        HttpProvider::new(&config).unwrap()
    }

    fn joke_payload(category: Option<&str>) -> serde_json::Value {
        serde_json::json!({
            "categories": category.map(|c| vec![c]).unwrap_or_default(),
            "created_at": "2020-01-05 13:42:19.576875",
            "icon_url": "https://api.chucknorris.io/img/avatar/chuck-norris.png",
            "id": "elgv2wkvt8ioag6xywykbq",
            "updated_at": "2020-01-05 13:42:19.576875",
            "url": "https://api.chucknorris.io/jokes/elgv2wkvt8ioag6xywykbq",
            "value": "Chuck Norris doesn't wear a watch."
        })
    }

    fn fake_provider() -> Router {
        async fn random(
            Query(params): Query<HashMap<String, String>>,
        ) -> Result<Json<serde_json::Value>, (StatusCode, Json<serde_json::Value>)> {
            match params.get("category").map(String::as_str) {
                None => Ok(Json(joke_payload(None))),
                Some("dev") => Ok(Json(joke_payload(Some("dev")))),
                Some(_) => Err((
                    StatusCode::NOT_FOUND,
                    Json(serde_json::json!({ "status": 404, "error": "Not Found" })),
                )),
            }
        }

        async fn categories() -> Json<Vec<&'static str>> {
            Json(vec!["animal", "career", "dev"])
        }

        Router::new()
            .route("/jokes/random", get(random))
            .route("/jokes/categories", get(categories))
    }

    // ============================================================================
    // classify_status tests
    // ============================================================================

    #[test]
    fn test_classify_status_success() {
        assert_eq!(classify_status(StatusCode::OK, None), None);
    }

    #[test]
    fn test_classify_status_server_error() {
        assert!(matches!(
            classify_status(StatusCode::BAD_GATEWAY, Some("dev")),
            Some(ProviderError::Unavailable(_))
        ));
    }

    #[test]
    fn test_classify_status_not_found_with_category() {
        assert!(matches!(
            classify_status(StatusCode::NOT_FOUND, Some("nope")),
            Some(ProviderError::InvalidCategory(_))
        ));
        assert!(matches!(
            classify_status(StatusCode::BAD_REQUEST, Some("nope")),
            Some(ProviderError::InvalidCategory(_))
        ));
    }

    #[test]
    fn test_classify_status_not_found_without_category() {
        assert!(matches!(
            classify_status(StatusCode::NOT_FOUND, None),
            Some(ProviderError::Protocol(_))
        ));
    }

    // ============================================================================
    // HttpProvider tests
    // ============================================================================

    #[tokio::test]
    async fn test_fetch_random() {
        let base_url = spawn_provider(fake_provider()).await;
        let provider = create_test_provider(&base_url, Duration::from_secs(5));

        let raw = provider.fetch_random().await.unwrap();

        assert_eq!(raw.id, "elgv2wkvt8ioag6xywykbq");
        assert_eq!(raw.text, "Chuck Norris doesn't wear a watch.");
        assert!(raw.categories.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_by_category() {
        let base_url = spawn_provider(fake_provider()).await;
        let provider = create_test_provider(&base_url, Duration::from_secs(5));

        let raw = provider.fetch_by_category("dev").await.unwrap();

        assert_eq!(raw.categories, vec!["dev".to_string()]);
    }

    #[tokio::test]
    async fn test_fetch_by_unknown_category() {
        let base_url = spawn_provider(fake_provider()).await;
        let provider = create_test_provider(&base_url, Duration::from_secs(5));

        let result = provider.fetch_by_category("not-a-real-category").await;

        assert!(matches!(result, Err(ProviderError::InvalidCategory(_))));
    }

    #[tokio::test]
    async fn test_fetch_by_empty_category() {
        let provider = create_test_provider("http://127.0.0.1:1/jokes", Duration::from_secs(1));

        let result = provider.fetch_by_category("").await;

        assert!(matches!(result, Err(ProviderError::InvalidCategory(_))));
    }

    #[tokio::test]
    async fn test_fetch_categories() {
        let base_url = spawn_provider(fake_provider()).await;
        let provider = create_test_provider(&base_url, Duration::from_secs(5));

        let categories = provider.fetch_categories().await.unwrap();

        assert_eq!(categories, vec!["animal", "career", "dev"]);
    }

    #[tokio::test]
    async fn test_server_error_is_unavailable() {
        let router = Router::new().route(
            "/jokes/random",
            get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        );
        let base_url = spawn_provider(router).await;
        let provider = create_test_provider(&base_url, Duration::from_secs(5));

        let result = provider.fetch_random().await;

        assert!(matches!(result, Err(ProviderError::Unavailable(_))));
    }

    #[tokio::test]
    async fn test_malformed_body_is_protocol_error() {
        let router = Router::new().route("/jokes/random", get(|| async { "not json" }));
        let base_url = spawn_provider(router).await;
        let provider = create_test_provider(&base_url, Duration::from_secs(5));

        let result = provider.fetch_random().await;

        assert!(matches!(result, Err(ProviderError::Protocol(_))));
    }

    #[tokio::test]
    async fn test_wrong_shape_is_protocol_error() {
        let router = Router::new().route(
            "/jokes/categories",
            get(|| async { Json(serde_json::json!({ "categories": "nope" })) }),
        );
        let base_url = spawn_provider(router).await;
        let provider = create_test_provider(&base_url, Duration::from_secs(5));

        let result = provider.fetch_categories().await;

        assert!(matches!(result, Err(ProviderError::Protocol(_))));
    }

    #[tokio::test]
    async fn test_timeout_is_unavailable() {
        let router = Router::new().route(
            "/jokes/random",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                Json(joke_payload(None))
            }),
        );
        let base_url = spawn_provider(router).await;
        let provider = create_test_provider(&base_url, Duration::from_millis(200));

        let result = provider.fetch_random().await;

        assert!(matches!(result, Err(ProviderError::Unavailable(_))));
    }

    #[tokio::test]
    async fn test_connection_refused_is_unavailable() {
        let provider = create_test_provider("http://127.0.0.1:1/jokes", Duration::from_secs(2));

        let result = provider.fetch_categories().await;

        assert!(matches!(result, Err(ProviderError::Unavailable(_))));
    }
}
