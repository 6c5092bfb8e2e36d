//! TextRazor topic extraction

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use seolens_core::{Result, Topic, TopicExtractor};

use crate::config::EndpointConfig;
use crate::http::{network_error, HttpEndpoint};

/// Topic extractor backed by the TextRazor API
#[derive(Debug, Clone)]
pub struct TextRazorClient {
    endpoint: HttpEndpoint,
}

#[derive(Deserialize)]
struct TextRazorResponse {
    #[serde(default)]
    ok: bool,
    response: Option<TextRazorBody>,
}

#[derive(Deserialize)]
struct TextRazorBody {
    topics: Option<Vec<TextRazorTopic>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TextRazorTopic {
    label: String,
    #[serde(default)]
    relevance_score: f64,
}

impl TextRazorClient {
    pub fn new(client: Client, config: EndpointConfig) -> Self {
        Self {
            endpoint: HttpEndpoint::new(client, config, "TextRazor"),
        }
    }

    async fn request_topics(&self, text: &str) -> Result<Vec<Topic>> {
        let api_key = self.endpoint.api_key()?;
        let url = self.endpoint.url("/")?;

        let response = self
            .endpoint
            .client
            .post(url)
            .header("x-textrazor-key", api_key)
            .form(&[("text", text), ("extractors", "topics")])
            .send()
            .await
            .map_err(network_error)?;

        let body: TextRazorResponse = self.endpoint.read_json(response).await?;

        let topics = match body.response.and_then(|r| r.topics) {
            Some(topics) if body.ok => topics,
            _ => {
                debug!("TextRazor response was not ok or carried no topics");
                return Ok(Vec::new());
            }
        };

        Ok(topics
            .into_iter()
            .filter(|t| t.relevance_score.is_finite())
            .map(|t| Topic::new(t.label, t.relevance_score))
            .collect())
    }
}

#[async_trait]
impl TopicExtractor for TextRazorClient {
    async fn extract_topics(&self, text: &str) -> Vec<Topic> {
        let result = self.request_topics(text).await;
        self.endpoint.or_default(result, Vec::new)
    }
}
