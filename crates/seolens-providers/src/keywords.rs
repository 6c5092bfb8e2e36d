//! RapidAPI SEO keyword research

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use seolens_core::{Error, KeywordSuggester, Result};

use crate::config::EndpointConfig;
use crate::http::{network_error, HttpEndpoint};

/// Keyword suggester backed by the RapidAPI "SEO Keyword Research" service
#[derive(Debug, Clone)]
pub struct SeoKeywordClient {
    endpoint: HttpEndpoint,
    country: String,
}

#[derive(Deserialize)]
struct KeywordEntry {
    text: Option<String>,
}

impl SeoKeywordClient {
    pub fn new(client: Client, config: EndpointConfig, country: impl Into<String>) -> Self {
        Self {
            endpoint: HttpEndpoint::new(client, config, "SEO keyword research"),
            country: country.into(),
        }
    }

    async fn request_keywords(&self, seed_topic: &str) -> Result<Vec<String>> {
        let api_key = self.endpoint.api_key()?;
        let url = self.endpoint.url("/keynew.php")?;

        let response = self
            .endpoint
            .client
            .get(url)
            .query(&[("keyword", seed_topic), ("country", self.country.as_str())])
            .header("x-rapidapi-key", api_key)
            .header("x-rapidapi-host", self.endpoint.host())
            .send()
            .await
            .map_err(network_error)?;

        // Anything other than an array of entries means "no suggestions"
        let body: serde_json::Value = self.endpoint.read_json(response).await?;
        if !body.is_array() {
            return Ok(Vec::new());
        }
        let entries: Vec<KeywordEntry> = serde_json::from_value(body)
            .map_err(|e| Error::Serialization(format!("{} response: {}", self.endpoint.provider, e)))?;

        Ok(entries.into_iter().filter_map(|e| e.text).collect())
    }
}

#[async_trait]
impl KeywordSuggester for SeoKeywordClient {
    async fn suggest_keywords(&self, seed_topic: &str) -> Vec<String> {
        let result = self.request_keywords(seed_topic).await;
        self.endpoint.or_default(result, Vec::new)
    }
}
