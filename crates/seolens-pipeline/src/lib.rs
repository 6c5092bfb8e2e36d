//! Analysis and keyword-insertion pipelines for seolens
//!
//! Both pipelines are stateless and request-scoped. They only combine the
//! results of the capability providers they are built with; all NLP happens
//! behind those providers.

mod analysis;
mod insertion;


pub use analysis::{AnalysisPipeline, MAX_MAIN_TOPICS, MAX_SUGGESTED_KEYWORDS, NO_TOPICS_MESSAGE};
pub use insertion::{annotate_sentence, InsertionPipeline};

// Re-export core types for convenience
pub use seolens_core::{
    AnalysisResult, Error, InsertionResult, KeywordSuggester, Paraphraser, ReadabilityScorer,
    Result, Sentiment, SentimentClassifier, SimilarityScorer, Topic, TopicExtractor,
};
