//! Shared plumbing for the HTTP-backed adapters

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::warn;
use url::Url;

use seolens_core::{Error, Result};

use crate::config::EndpointConfig;

/// Build the HTTP client shared by all adapters
pub fn build_client(timeout: Duration) -> Result<Client> {
    Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| Error::Network(e.to_string()))
}

/// One configured endpoint plus the client used to reach it
#[derive(Debug, Clone)]
pub(crate) struct HttpEndpoint {
    pub client: Client,
    pub config: EndpointConfig,
    pub provider: &'static str,
}

impl HttpEndpoint {
    pub fn new(client: Client, config: EndpointConfig, provider: &'static str) -> Self {
        Self {
            client,
            config,
            provider,
        }
    }

    pub fn api_key(&self) -> Result<&str> {
        self.config.api_key.as_deref().ok_or_else(|| {
            Error::Authentication(format!("{} API key not configured", self.provider))
        })
    }

    /// Resolve `path` under the configured base URL, keeping any path prefix
    /// the base carries
    pub fn url(&self, path: &str) -> Result<Url> {
        Url::parse(&self.config.base_url)
            .and_then(|mut base| {
                if !base.path().ends_with('/') {
                    let prefix = format!("{}/", base.path());
                    base.set_path(&prefix);
                }
                base.join(path.trim_start_matches('/'))
            })
            .map_err(|e| {
                Error::Configuration(format!(
                    "invalid {} URL '{}': {}",
                    self.provider, self.config.base_url, e
                ))
            })
    }

    /// Host name sent in `x-rapidapi-host`
    pub fn host(&self) -> String {
        self.config.host().unwrap_or_default()
    }

    /// Decode a successful JSON response, or turn a non-2xx one into an error
    pub async fn read_json<T: DeserializeOwned>(&self, response: Response) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            if status.as_u16() == 401 || status.as_u16() == 403 {
                return Err(Error::Authentication(format!(
                    "{} rejected the credential ({}): {}",
                    self.provider, status, error_text
                )));
            }
            return Err(Error::Provider(format!(
                "{} request failed with status {}: {}",
                self.provider, status, error_text
            )));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| Error::Serialization(format!("{} response: {}", self.provider, e)))
    }

    /// Unwrap a call result, logging the failure and substituting the default
    pub fn or_default<T>(&self, result: Result<T>, default: impl FnOnce() -> T) -> T {
        match result {
            Ok(value) => value,
            Err(e) => {
                warn!(provider = self.provider, error = %e, "capability call failed, using fail-closed default");
                default()
            }
        }
    }
}

pub(crate) fn network_error(e: reqwest::Error) -> Error {
    Error::Network(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoint(base_url: &str) -> HttpEndpoint {
        HttpEndpoint::new(
            build_client(Duration::from_secs(1)).unwrap(),
            EndpointConfig::new(base_url),
            "test",
        )
    }

    #[test]
    fn test_url_keeps_base_path_prefix() {
        assert_eq!(
            endpoint("http://gateway.local/ninjas").url("/v1/sentiment").unwrap().as_str(),
            "http://gateway.local/ninjas/v1/sentiment"
        );
        assert_eq!(
            endpoint("http://gateway.local/ninjas/").url("/v1/sentiment").unwrap().as_str(),
            "http://gateway.local/ninjas/v1/sentiment"
        );
    }

    #[test]
    fn test_url_on_bare_host() {
        let razor = endpoint("https://api.textrazor.com");
        assert_eq!(razor.url("/").unwrap().as_str(), "https://api.textrazor.com/");
        assert_eq!(
            endpoint("https://rapid.example.com")
                .url("/article/paraphrase/")
                .unwrap()
                .as_str(),
            "https://rapid.example.com/article/paraphrase/"
        );
    }

    #[test]
    fn test_invalid_base_url_is_configuration_error() {
        assert!(matches!(
            endpoint("not a url").url("/v1/sentiment"),
            Err(Error::Configuration(_))
        ));
    }
}
