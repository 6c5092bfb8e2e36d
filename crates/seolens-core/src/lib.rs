//! Core traits and types for seolens
//!
//! This crate defines the data model shared by the analysis and keyword-insertion
//! pipelines, the capability-facing interfaces every external provider implements,
//! input validation and sentence segmentation.

pub mod capability;
pub mod error;
pub mod sentence;
pub mod types;
pub mod validation;

pub use capability::{
    KeywordSuggester, Paraphraser, ReadabilityScorer, SentimentClassifier, SimilarityScorer,
    TopicExtractor,
};
pub use error::{Error, Result};
pub use sentence::{segment, Sentences};
pub use types::*;
pub use validation::{validate_analysis_text, validate_insertion, MIN_ANALYSIS_CHARS};
