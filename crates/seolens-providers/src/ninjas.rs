//! API-Ninjas sentiment and text similarity

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use seolens_core::{Result, Sentiment, SentimentClassifier, SentimentReport, SimilarityScorer};

use crate::config::EndpointConfig;
use crate::http::{network_error, HttpEndpoint};

/// Sentiment classifier backed by the API-Ninjas sentiment endpoint
#[derive(Debug, Clone)]
pub struct NinjasSentimentClient {
    endpoint: HttpEndpoint,
}

#[derive(Deserialize)]
struct SentimentResponse {
    #[serde(default)]
    sentiment: String,
    #[serde(default)]
    score: f64,
}

impl NinjasSentimentClient {
    pub fn new(client: Client, config: EndpointConfig) -> Self {
        Self {
            endpoint: HttpEndpoint::new(client, config, "API-Ninjas sentiment"),
        }
    }

    async fn request_sentiment(&self, text: &str) -> Result<SentimentReport> {
        let api_key = self.endpoint.api_key()?;
        let url = self.endpoint.url("/v1/sentiment")?;

        let response = self
            .endpoint
            .client
            .get(url)
            .query(&[("text", text)])
            .header("X-Api-Key", api_key)
            .send()
            .await
            .map_err(network_error)?;

        let body: SentimentResponse = self.endpoint.read_json(response).await?;
        Ok(SentimentReport::new(
            Sentiment::from_label(&body.sentiment),
            body.score,
        ))
    }
}

#[async_trait]
impl SentimentClassifier for NinjasSentimentClient {
    async fn classify(&self, text: &str) -> SentimentReport {
        let result = self.request_sentiment(text).await;
        self.endpoint.or_default(result, SentimentReport::neutral)
    }
}

/// Similarity scorer backed by the API-Ninjas text similarity endpoint
#[derive(Debug, Clone)]
pub struct NinjasSimilarityClient {
    endpoint: HttpEndpoint,
}

#[derive(Serialize)]
struct SimilarityRequest<'a> {
    text_1: &'a str,
    text_2: &'a str,
}

#[derive(Deserialize)]
struct SimilarityResponse {
    similarity: Option<f64>,
}

impl NinjasSimilarityClient {
    pub fn new(client: Client, config: EndpointConfig) -> Self {
        Self {
            endpoint: HttpEndpoint::new(client, config, "API-Ninjas similarity"),
        }
    }

    async fn request_similarity(&self, text_a: &str, text_b: &str) -> Result<f64> {
        let api_key = self.endpoint.api_key()?;
        let url = self.endpoint.url("/v1/textsimilarity")?;

        let response = self
            .endpoint
            .client
            .post(url)
            .header("X-Api-Key", api_key)
            .json(&SimilarityRequest {
                text_1: text_a,
                text_2: text_b,
            })
            .send()
            .await
            .map_err(network_error)?;

        let body: SimilarityResponse = self.endpoint.read_json(response).await?;
        Ok(body.similarity.filter(|s| s.is_finite()).unwrap_or(0.0))
    }
}

#[async_trait]
impl SimilarityScorer for NinjasSimilarityClient {
    async fn similarity(&self, text_a: &str, text_b: &str) -> f64 {
        let result = self.request_similarity(text_a, text_b).await;
        self.endpoint.or_default(result, || 0.0)
    }
}
