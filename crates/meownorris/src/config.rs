use crate::prelude::*;
use std::time::Duration;

/// Default joke provider endpoint
pub const DEFAULT_PROVIDER_URL: &str = "https://api.chucknorris.io/jokes";

/// Joke provider configuration, built from CLI flags or their environment variables
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl ProviderConfig {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, Error> {
        let base_url = base_url.trim().trim_end_matches('/');

        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(Error::Config(format!(
                "provider URL must start with http:// or https://, got '{base_url}'"
            )));
        }

        if timeout.is_zero() {
            return Err(Error::Config(
                "timeout must be greater than zero".to_string(),
            ));
        }

        Ok(Self {
            base_url: base_url.to_string(),
            timeout,
        })
    }

    /// Load configuration from the global CLI options
    pub fn from_global(global: &crate::Global) -> Result<Self, Error> {
        Self::new(&global.provider_url, Duration::from_secs(global.timeout))
    }

    /// Create the HTTP client shared by every provider call
    pub fn create_client(&self) -> Result<reqwest::Client> {
        reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(concat!("meownorris/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| eyre!("Failed to build HTTP client: {}", e))
    }
}
