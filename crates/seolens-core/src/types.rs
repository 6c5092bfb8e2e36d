//! Common types used across the seolens system

use serde::{Deserialize, Serialize};

/// A topic reported by a topic extractor.
///
/// `score` is whatever relevance measure the provider uses. It is only ever
/// compared against other scores from the same response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Topic {
    pub label: String,
    pub score: f64,
}

impl Topic {
    pub fn new(label: impl Into<String>, score: f64) -> Self {
        Self {
            label: label.into(),
            score,
        }
    }
}

/// Overall polarity of a text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Sentiment {
    Positive,
    Negative,
    #[default]
    Neutral,
}

impl Sentiment {
    /// Parse a provider label.
    ///
    /// Graded labels such as `WEAK_POSITIVE` fold into their polarity; anything
    /// unrecognised is neutral.
    pub fn from_label(label: &str) -> Self {
        let label = label.trim().to_ascii_uppercase();
        let polarity = label.strip_prefix("WEAK_").unwrap_or(&label);
        match polarity {
            "POSITIVE" => Sentiment::Positive,
            "NEGATIVE" => Sentiment::Negative,
            _ => Sentiment::Neutral,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "POSITIVE",
            Sentiment::Negative => "NEGATIVE",
            Sentiment::Neutral => "NEUTRAL",
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Output of a sentiment classifier
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SentimentReport {
    pub sentiment: Sentiment,
    pub score: f64,
}

impl SentimentReport {
    pub fn new(sentiment: Sentiment, score: f64) -> Self {
        Self { sentiment, score }
    }

    /// Returned when the classifier could not be reached
    pub fn neutral() -> Self {
        Self::default()
    }
}

/// Body of an analysis request.
///
/// A missing `text` deserialises to an empty string so it fails validation
/// the same way as a short one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisRequest {
    #[serde(default)]
    pub text: String,
}

/// Consolidated analysis of one text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub word_count: usize,
    /// Rounded to two decimal places
    pub readability_score: f64,
    pub sentiment: Sentiment,
    /// At most five labels, highest relevance first
    pub main_topics: Vec<String>,
    /// At most fifteen unique keywords, none of which already occur in the text
    pub suggested_keywords: Vec<String>,
    /// Set when the analysis completed with reduced quality
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl AnalysisResult {
    /// True when no topics were found and keyword suggestion was skipped
    pub fn is_degraded(&self) -> bool {
        self.message.is_some()
    }
}

/// Body of a keyword-insertion request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertionRequest {
    #[serde(default)]
    pub original_text: String,
    #[serde(default)]
    pub keyword_to_insert: String,
}

/// Outcome of a keyword insertion
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertionResult {
    pub new_text: String,
    /// The sentence that was chosen and rewritten
    #[serde(skip)]
    pub target_sentence: String,
    /// The paraphrased replacement for `target_sentence`
    #[serde(skip)]
    pub rewritten_sentence: String,
}

/// A sentence scored against the keyword being inserted
#[derive(Debug, Clone, PartialEq)]
pub struct SentenceCandidate<'a> {
    pub index: usize,
    pub text: &'a str,
    pub similarity_score: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_json_snapshot;

    #[test]
    fn test_sentiment_from_label() {
        assert_eq!(Sentiment::from_label("POSITIVE"), Sentiment::Positive);
        assert_eq!(Sentiment::from_label("weak_negative"), Sentiment::Negative);
        assert_eq!(Sentiment::from_label("WEAK_POSITIVE"), Sentiment::Positive);
        assert_eq!(Sentiment::from_label("NEUTRAL"), Sentiment::Neutral);
        assert_eq!(Sentiment::from_label("MIXED"), Sentiment::Neutral);
        assert_eq!(Sentiment::from_label(""), Sentiment::Neutral);
    }

    #[test]
    fn test_sentiment_serializes_uppercase() {
        assert_eq!(
            serde_json::to_string(&Sentiment::Negative).unwrap(),
            "\"NEGATIVE\""
        );
        assert_eq!(Sentiment::Neutral.to_string(), "NEUTRAL");
    }

    #[test]
    fn test_analysis_result_wire_shape() {
        let result = AnalysisResult {
            word_count: 12,
            readability_score: 61.25,
            sentiment: Sentiment::Positive,
            main_topics: vec!["Search engine optimization".to_string()],
            suggested_keywords: vec!["seo tools".to_string(), "seo audit".to_string()],
            message: None,
        };

        assert_json_snapshot!(result, @r###"
        {
          "wordCount": 12,
          "readabilityScore": 61.25,
          "sentiment": "POSITIVE",
          "mainTopics": [
            "Search engine optimization"
          ],
          "suggestedKeywords": [
            "seo tools",
            "seo audit"
          ]
        }
        "###);
    }

    #[test]
    fn test_degraded_result_carries_message() {
        let result = AnalysisResult {
            word_count: 10,
            readability_score: 0.0,
            sentiment: Sentiment::Neutral,
            main_topics: vec![],
            suggested_keywords: vec![],
            message: Some("no topics".to_string()),
        };
        assert!(result.is_degraded());

        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["message"], "no topics");
        assert_eq!(value["mainTopics"], serde_json::json!([]));
    }

    #[test]
    fn test_requests_tolerate_missing_fields() {
        let req: AnalysisRequest = serde_json::from_str("{}").unwrap();
        assert!(req.text.is_empty());

        let req: InsertionRequest =
            serde_json::from_str(r#"{"originalText": "Hello there."}"#).unwrap();
        assert_eq!(req.original_text, "Hello there.");
        assert!(req.keyword_to_insert.is_empty());
    }

    #[test]
    fn test_insertion_result_serializes_new_text_only() {
        let result = InsertionResult {
            new_text: "A. B.".to_string(),
            target_sentence: "B.".to_string(),
            rewritten_sentence: "B.".to_string(),
        };
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value, serde_json::json!({ "newText": "A. B." }));
    }
}
