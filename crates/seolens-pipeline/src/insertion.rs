//! Keyword-insertion pipeline

use std::sync::Arc;

use tracing::{debug, info, instrument};

use seolens_core::{
    segment, validate_insertion, InsertionResult, Paraphraser, Result, SentenceCandidate,
    SimilarityScorer,
};

/// Splices a keyword into a text by rewriting its most related sentence
#[derive(Clone)]
pub struct InsertionPipeline {
    similarity: Arc<dyn SimilarityScorer>,
    paraphraser: Arc<dyn Paraphraser>,
}

/// The literal sentence handed to the paraphraser
pub fn annotate_sentence(sentence: &str, keyword: &str) -> String {
    format!("{} (related to: {})", sentence, keyword)
}

impl InsertionPipeline {
    pub fn new(similarity: Arc<dyn SimilarityScorer>, paraphraser: Arc<dyn Paraphraser>) -> Self {
        Self {
            similarity,
            paraphraser,
        }
    }

    /// Insert `keyword_to_insert` into `original_text`.
    ///
    /// The target sentence is the one scored most similar to the keyword; when
    /// no sentence scores above zero the last sentence is used. Only the first
    /// occurrence of the target sentence is replaced.
    #[instrument(skip_all, fields(chars = original_text.len()))]
    pub async fn insert_keyword(
        &self,
        original_text: &str,
        keyword_to_insert: &str,
    ) -> Result<InsertionResult> {
        let (original_text, keyword) = validate_insertion(original_text, keyword_to_insert)?;
        let keyword = keyword.trim();

        let sentences = segment(original_text);
        let target = self.select_target(&sentences, keyword).await;
        info!(target_sentence = %target, "selected sentence for keyword insertion");

        let annotated = annotate_sentence(target, keyword);
        let rewritten = self.paraphraser.paraphrase(&annotated).await;
        debug!(annotated = %annotated, rewritten = %rewritten, "paraphrased target sentence");

        let new_text = original_text.replacen(target, &rewritten, 1);

        Ok(InsertionResult {
            new_text,
            target_sentence: target.to_string(),
            rewritten_sentence: rewritten,
        })
    }

    /// Score sentences one at a time, in order, so that equal scores always
    /// resolve to the earliest sentence.
    async fn select_target<'a>(&self, sentences: &[&'a str], keyword: &str) -> &'a str {
        let mut best: Option<SentenceCandidate<'a>> = None;

        for (index, &text) in sentences.iter().enumerate() {
            let similarity_score = self.similarity.similarity(text, keyword).await;
            debug!(index, similarity_score, "scored sentence");

            best = pick_better(
                best,
                SentenceCandidate {
                    index,
                    text,
                    similarity_score,
                },
            );
        }

        match best {
            Some(candidate) => {
                debug!(
                    index = candidate.index,
                    similarity_score = candidate.similarity_score,
                    "best matching sentence"
                );
                candidate.text
            }
            None => {
                debug!("no sentence scored above zero, using the last one");
                sentences.last().copied().unwrap_or_default()
            }
        }
    }
}

/// A candidate only counts with a positive score, and only displaces the
/// current best with a strictly greater one.
fn pick_better<'a>(
    best: Option<SentenceCandidate<'a>>,
    candidate: SentenceCandidate<'a>,
) -> Option<SentenceCandidate<'a>> {
    let score = candidate.similarity_score;
    if !score.is_finite() || score <= 0.0 {
        return best;
    }
    match best {
        Some(current) if current.similarity_score >= score => Some(current),
        _ => Some(candidate),
    }
}
