//! Capability providers for seolens
//!
//! This crate provides the concrete implementations of the capability traits
//! defined in `seolens-core`: a local readability scorer and HTTP adapters for
//! the external topic, keyword, sentiment, similarity and paraphrasing services.

mod config;
mod http;
mod keywords;
mod ninjas;
mod paraphrase;
mod readability;
mod textrazor;


pub use config::{
    EndpointConfig, ProvidersConfig, DEFAULT_API_NINJAS_URL, DEFAULT_PARAPHRASE_URL,
    DEFAULT_SEO_KEYWORD_URL, DEFAULT_TEXTRAZOR_URL,
};
pub use http::build_client;
pub use keywords::SeoKeywordClient;
pub use ninjas::{NinjasSentimentClient, NinjasSimilarityClient};
pub use paraphrase::QuillbotParaphraser;
pub use readability::FleschReadability;
pub use textrazor::TextRazorClient;

// Re-export core types for convenience
pub use seolens_core::{
    Error, KeywordSuggester, Paraphraser, ReadabilityScorer, Result, SentimentClassifier,
    SimilarityScorer, TopicExtractor,
};

/// One adapter per capability, all sharing a single HTTP client
#[derive(Debug, Clone)]
pub struct ProviderSet {
    pub readability: FleschReadability,
    pub topics: TextRazorClient,
    pub sentiment: NinjasSentimentClient,
    pub keywords: SeoKeywordClient,
    pub similarity: NinjasSimilarityClient,
    pub paraphraser: QuillbotParaphraser,
}

impl ProviderSet {
    /// Build every adapter from one configuration
    pub fn from_config(config: &ProvidersConfig) -> Result<Self> {
        let client = build_client(config.request_timeout)?;

        Ok(Self {
            readability: FleschReadability::new(),
            topics: TextRazorClient::new(client.clone(), config.textrazor.clone()),
            sentiment: NinjasSentimentClient::new(client.clone(), config.api_ninjas.clone()),
            keywords: SeoKeywordClient::new(
                client.clone(),
                config.seo_keywords.clone(),
                config.keyword_country.clone(),
            ),
            similarity: NinjasSimilarityClient::new(client.clone(), config.api_ninjas.clone()),
            paraphraser: QuillbotParaphraser::new(
                client,
                config.paraphrase.clone(),
                config.paraphrase_language.clone(),
                config.paraphrase_mode.clone(),
            ),
        })
    }
}
