use crate::provider::JokeProvider;
use meownorris_core::error::{map_provider_error, ServiceError};
use meownorris_core::joke::{build_joke, normalize_category, Joke};
use meownorris_core::mascot::{self, Mascot};

/// Fetches jokes from a provider and rewrites them for a mascot.
///
/// Holds no mutable state; one instance is shared by every request.
#[derive(Debug)]
pub struct JokeService<P> {
    provider: P,
}

impl<P: JokeProvider> JokeService<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Random joke for `mascot`, or for the default mascot when none is given.
    pub async fn get_random(&self, mascot: Option<&str>) -> Result<Joke, ServiceError> {
        let mascot = mascot::resolve_name(mascot);

        let raw = self.provider.fetch_random().await.map_err(|e| {
            log::error!("Error fetching random joke: {e}");
            map_provider_error(e, "fetch a random joke", None)
        })?;

        Ok(build_joke(raw, &mascot, None))
    }

    /// Random joke from `category`.
    ///
    /// Blank categories are rejected as unknown without calling the provider.
    pub async fn get_by_category(
        &self,
        category: &str,
        mascot: Option<&str>,
    ) -> Result<Joke, ServiceError> {
        let category = normalize_category(category)
            .ok_or_else(|| ServiceError::UnknownCategory(category.to_string()))?;
        let mascot = mascot::resolve_name(mascot);

        let raw = self
            .provider
            .fetch_by_category(&category)
            .await
            .map_err(|e| {
                log::error!("Error fetching joke by category {category}: {e}");
                map_provider_error(e, "fetch a joke by category", Some(category.as_str()))
            })?;

        Ok(build_joke(raw, &mascot, Some(category)))
    }

    pub async fn list_categories(&self) -> Result<Vec<String>, ServiceError> {
        self.provider.fetch_categories().await.map_err(|e| {
            log::error!("Error fetching categories: {e}");
            map_provider_error(e, "list categories", None)
        })
    }

    pub fn list_mascots(&self) -> &'static [Mascot] {
        mascot::list()
    }
}
