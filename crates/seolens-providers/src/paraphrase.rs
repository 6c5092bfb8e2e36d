//! Paraphrasing through the RapidAPI "Quillbot alternative" service

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use seolens_core::{Paraphraser, Result};

use crate::config::EndpointConfig;
use crate::http::{network_error, HttpEndpoint};

/// Paraphraser backed by the advanced paraphrasing API
#[derive(Debug, Clone)]
pub struct QuillbotParaphraser {
    endpoint: HttpEndpoint,
    language: String,
    mode: String,
}

#[derive(Serialize)]
struct ParaphraseRequest<'a> {
    text: &'a str,
    language: &'a str,
    mode: &'a str,
}

#[derive(Deserialize)]
struct ParaphraseResponse {
    rewritten_text: Option<String>,
}

impl QuillbotParaphraser {
    pub fn new(
        client: Client,
        config: EndpointConfig,
        language: impl Into<String>,
        mode: impl Into<String>,
    ) -> Self {
        Self {
            endpoint: HttpEndpoint::new(client, config, "Paraphrase"),
            language: language.into(),
            mode: mode.into(),
        }
    }

    async fn request_paraphrase(&self, text: &str) -> Result<Option<String>> {
        let api_key = self.endpoint.api_key()?;
        let url = self.endpoint.url("/article/paraphrase/")?;

        let response = self
            .endpoint
            .client
            .post(url)
            .header("x-rapidapi-key", api_key)
            .header("x-rapidapi-host", self.endpoint.host())
            .json(&ParaphraseRequest {
                text,
                language: &self.language,
                mode: &self.mode,
            })
            .send()
            .await
            .map_err(network_error)?;

        let body: ParaphraseResponse = self.endpoint.read_json(response).await?;
        Ok(body
            .rewritten_text
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty()))
    }
}

#[async_trait]
impl Paraphraser for QuillbotParaphraser {
    async fn paraphrase(&self, text: &str) -> String {
        let result = self.request_paraphrase(text).await;
        self.endpoint
            .or_default(result, || None)
            .unwrap_or_else(|| text.to_string())
    }
}
