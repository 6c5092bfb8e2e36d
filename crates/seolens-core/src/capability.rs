//! Capability provider traits
//!
//! Each trait is a single-operation contract for one external analysis
//! capability. Implementations never return errors: when the provider is
//! unreachable, unauthorised or answers with something unexpected, they log
//! the failure and return the documented default instead. A partial outage
//! therefore lowers result quality but never aborts a pipeline.

use async_trait::async_trait;

use crate::{SentimentReport, Topic};

/// Scores how easy a text is to read.
///
/// Computed locally, so the call is synchronous. Blank input scores 0.
pub trait ReadabilityScorer: Send + Sync {
    fn score(&self, text: &str) -> f64;
}

/// Extracts the topics a text is about.
///
/// Fails closed with an empty list.
#[async_trait]
pub trait TopicExtractor: Send + Sync {
    async fn extract_topics(&self, text: &str) -> Vec<Topic>;
}

/// Classifies the overall sentiment of a text.
///
/// Fails closed with [`SentimentReport::neutral`].
#[async_trait]
pub trait SentimentClassifier: Send + Sync {
    async fn classify(&self, text: &str) -> SentimentReport;
}

/// Suggests related search keywords for a seed topic.
///
/// Fails closed with an empty list.
#[async_trait]
pub trait KeywordSuggester: Send + Sync {
    async fn suggest_keywords(&self, seed_topic: &str) -> Vec<String>;
}

/// Scores the semantic similarity of two texts.
///
/// The range is provider-defined; 0 means "no similarity", which is also the
/// fail-closed value.
#[async_trait]
pub trait SimilarityScorer: Send + Sync {
    async fn similarity(&self, text_a: &str, text_b: &str) -> f64;
}

/// Rewrites a sentence so it reads naturally.
///
/// Fails closed by returning the input unchanged.
#[async_trait]
pub trait Paraphraser: Send + Sync {
    async fn paraphrase(&self, text: &str) -> String;
}
