//! Analysis pipeline: readability, sentiment, topics and keyword suggestions

use std::collections::HashSet;
use std::sync::Arc;

use tracing::{debug, info, instrument};

use seolens_core::{
    validate_analysis_text, AnalysisResult, KeywordSuggester, ReadabilityScorer, Result,
    SentimentClassifier, Topic, TopicExtractor,
};

/// Number of topic labels reported in `main_topics`
pub const MAX_MAIN_TOPICS: usize = 5;
/// Number of keywords reported in `suggested_keywords`
pub const MAX_SUGGESTED_KEYWORDS: usize = 15;
/// Attached to results where no topic could be extracted
pub const NO_TOPICS_MESSAGE: &str =
    "Analysis complete, but no main topics were identified to generate suggestions.";

/// Fans a text out to the analysis capabilities and consolidates their answers
#[derive(Clone)]
pub struct AnalysisPipeline {
    readability: Arc<dyn ReadabilityScorer>,
    topics: Arc<dyn TopicExtractor>,
    sentiment: Arc<dyn SentimentClassifier>,
    keywords: Arc<dyn KeywordSuggester>,
}

impl AnalysisPipeline {
    pub fn new(
        readability: Arc<dyn ReadabilityScorer>,
        topics: Arc<dyn TopicExtractor>,
        sentiment: Arc<dyn SentimentClassifier>,
        keywords: Arc<dyn KeywordSuggester>,
    ) -> Self {
        Self {
            readability,
            topics,
            sentiment,
            keywords,
        }
    }

    /// Analyze a block of text.
    ///
    /// Fails only on invalid input. Provider outages show up as a lower
    /// quality result: zero readability, neutral sentiment, or no topics (in
    /// which case `message` is set and no keywords are requested).
    #[instrument(skip_all, fields(chars = text.len()))]
    pub async fn analyze(&self, text: &str) -> Result<AnalysisResult> {
        let text = validate_analysis_text(text)?;

        let (readability, topics, sentiment) = tokio::join!(
            async { self.readability.score(text) },
            self.topics.extract_topics(text),
            self.sentiment.classify(text),
        );

        let word_count = count_words(text);
        let readability_score = round_to_hundredths(readability);
        let ranked = rank_topics(topics);

        let Some(seed_topic) = ranked.first().map(|t| t.label.clone()) else {
            info!("no topics extracted, skipping keyword suggestions");
            return Ok(AnalysisResult {
                word_count,
                readability_score,
                sentiment: sentiment.sentiment,
                main_topics: Vec::new(),
                suggested_keywords: Vec::new(),
                message: Some(NO_TOPICS_MESSAGE.to_string()),
            });
        };

        let main_topics: Vec<String> = ranked
            .into_iter()
            .take(MAX_MAIN_TOPICS)
            .map(|t| t.label)
            .collect();

        info!(seed_topic = %seed_topic, "requesting keyword suggestions");
        let suggestions = self.keywords.suggest_keywords(&seed_topic).await;
        let received = suggestions.len();
        let suggested_keywords = consolidate_keywords(suggestions, text, MAX_SUGGESTED_KEYWORDS);
        debug!(received, kept = suggested_keywords.len(), "consolidated keyword suggestions");

        Ok(AnalysisResult {
            word_count,
            readability_score,
            sentiment: sentiment.sentiment,
            main_topics,
            suggested_keywords,
            message: None,
        })
    }
}

/// Whitespace-delimited token count
pub(crate) fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

pub(crate) fn round_to_hundredths(value: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    (value * 100.0).round() / 100.0
}

/// Highest score first. Equal scores keep the order the provider returned
/// them in; topics without a usable score are dropped.
pub(crate) fn rank_topics(mut topics: Vec<Topic>) -> Vec<Topic> {
    topics.retain(|t| t.score.is_finite());
    topics.sort_by(|a, b| b.score.total_cmp(&a.score));
    topics
}

/// Deduplicate suggestions (first occurrence wins), drop any that already
/// appear in the text (case-insensitive substring), and cap the list.
pub(crate) fn consolidate_keywords(
    suggestions: Vec<String>,
    text: &str,
    limit: usize,
) -> Vec<String> {
    let lower_text = text.to_lowercase();
    let mut seen = HashSet::new();

    suggestions
        .into_iter()
        .filter(|keyword| seen.insert(keyword.clone()))
        .filter(|keyword| !lower_text.contains(&keyword.to_lowercase()))
        .take(limit)
        .collect()
}
