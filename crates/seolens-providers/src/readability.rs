//! Local Flesch reading-ease scorer

use seolens_core::{ReadabilityScorer, Sentences};

/// Flesch Reading Ease, clamped to 0..=100. Higher is easier to read.
#[derive(Debug, Clone, Copy, Default)]
pub struct FleschReadability;

impl FleschReadability {
    pub fn new() -> Self {
        Self
    }

    /// Count syllables in a single word (vowel groups, silent trailing `e`)
    fn count_syllables_in_word(word: &str) -> usize {
        let word_lower: String = word
            .chars()
            .filter(|c| c.is_alphabetic())
            .flat_map(char::to_lowercase)
            .collect();
        if word_lower.is_empty() {
            return 0;
        }

        let mut syllable_count = 0;
        let mut previous_was_vowel = false;
        for ch in word_lower.chars() {
            let is_vowel = matches!(ch, 'a' | 'e' | 'i' | 'o' | 'u' | 'y');
            if is_vowel && !previous_was_vowel {
                syllable_count += 1;
            }
            previous_was_vowel = is_vowel;
        }

        if word_lower.ends_with('e') && !word_lower.ends_with("le") && syllable_count > 1 {
            syllable_count -= 1;
        }

        syllable_count.max(1)
    }
}

impl ReadabilityScorer for FleschReadability {
    fn score(&self, text: &str) -> f64 {
        if text.trim().is_empty() {
            return 0.0;
        }

        let words: Vec<&str> = text
            .split_whitespace()
            .filter(|w| w.chars().any(char::is_alphanumeric))
            .collect();
        if words.is_empty() {
            return 0.0;
        }

        let sentence_count = Sentences::new(text).count().max(1) as f64;
        let word_count = words.len() as f64;
        let syllable_count: usize = words
            .iter()
            .map(|w| Self::count_syllables_in_word(w).max(1))
            .sum();

        let score = 206.835
            - 1.015 * (word_count / sentence_count)
            - 84.6 * (syllable_count as f64 / word_count);

        if score.is_finite() {
            score.clamp(0.0, 100.0)
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_text_scores_zero() {
        let scorer = FleschReadability::new();
        assert_eq!(scorer.score(""), 0.0);
        assert_eq!(scorer.score("   \n\t"), 0.0);
        assert_eq!(scorer.score("... !!!"), 0.0);
    }

    #[test]
    fn test_syllable_heuristic() {
        assert_eq!(FleschReadability::count_syllables_in_word("cat"), 1);
        assert_eq!(FleschReadability::count_syllables_in_word("make"), 1);
        assert_eq!(FleschReadability::count_syllables_in_word("table"), 2);
        assert_eq!(FleschReadability::count_syllables_in_word("readability"), 5);
        assert_eq!(FleschReadability::count_syllables_in_word("Optimization,"), 5);
        assert_eq!(FleschReadability::count_syllables_in_word("42"), 0);
    }

    #[test]
    fn test_simple_text_reads_easier_than_dense_text() {
        let scorer = FleschReadability::new();
        let simple = scorer.score("The cat sat on the mat. The dog ran to the park.");
        let dense = scorer.score(
            "Comprehensive organizational optimization necessitates interdisciplinary \
             collaboration between multifunctional stakeholders and institutional \
             administrators.",
        );
        assert!(simple > dense);
        assert!((0.0..=100.0).contains(&simple));
        assert!((0.0..=100.0).contains(&dense));
    }

    #[test]
    fn test_score_is_clamped() {
        let scorer = FleschReadability::new();
        assert_eq!(scorer.score("Go. Go. Go. Go."), 100.0);
    }
}
