//! Terminal output for the analyze and insert commands

use anyhow::{Context, Result};
use colored::*;
use std::io::{self, Read};
use std::path::Path;

use seolens_core::{AnalysisResult, InsertionResult, Sentiment};

/// Read the text to work on from a file, or from stdin when no file is given
pub fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("failed to read text from stdin")?;
            Ok(input)
        }
    }
}

/// Human-readable summary of an analysis
pub fn render_analysis(result: &AnalysisResult) -> String {
    let sentiment = match result.sentiment {
        Sentiment::Positive => result.sentiment.as_str().green(),
        Sentiment::Negative => result.sentiment.as_str().red(),
        Sentiment::Neutral => result.sentiment.as_str().yellow(),
    };

    let mut out = String::new();
    out.push_str(&format!("{} {}\n", "Words:".bold(), result.word_count));
    out.push_str(&format!(
        "{} {:.2}\n",
        "Readability:".bold(),
        result.readability_score
    ));
    out.push_str(&format!("{} {}\n", "Sentiment:".bold(), sentiment));

    if let Some(message) = &result.message {
        out.push_str(&format!("{} {}\n", "⚠️".yellow(), message));
        return out;
    }

    out.push_str(&format!("{}\n", "Main topics:".bold()));
    for topic in &result.main_topics {
        out.push_str(&format!("  {} {}\n", "•".blue(), topic));
    }

    out.push_str(&format!("{}\n", "Suggested keywords:".bold()));
    if result.suggested_keywords.is_empty() {
        out.push_str(&format!("  {}\n", "(none)".dimmed()));
    }
    for keyword in &result.suggested_keywords {
        out.push_str(&format!("  {} {}\n", "→".green(), keyword));
    }

    out
}

/// Human-readable summary of a keyword insertion
pub fn render_insertion(result: &InsertionResult) -> String {
    format!(
        "{} {}\n{} {}\n\n{}\n",
        "Rewrote:".bold(),
        result.target_sentence.dimmed(),
        "As:".bold(),
        result.rewritten_sentence.green(),
        result.new_text
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_analysis_lists_topics_and_keywords() {
        let result = AnalysisResult {
            word_count: 20,
            readability_score: 71.5,
            sentiment: Sentiment::Positive,
            main_topics: vec!["Baking".to_string()],
            suggested_keywords: vec!["bread flour".to_string()],
            message: None,
        };

        let out = render_analysis(&result);
        for expected in [
            "Words:",
            "20",
            "Readability:",
            "71.50",
            "Sentiment:",
            "POSITIVE",
            "Baking",
            "bread flour",
        ] {
            assert!(out.contains(expected), "missing {expected:?} in {out:?}");
        }
        assert!(!out.contains("(none)"));
    }

    #[test]
    fn test_render_degraded_analysis_shows_message() {
        let result = AnalysisResult {
            word_count: 12,
            readability_score: 0.0,
            sentiment: Sentiment::Neutral,
            main_topics: vec![],
            suggested_keywords: vec![],
            message: Some("no topics".to_string()),
        };

        let out = render_analysis(&result);
        assert!(out.contains("no topics"));
        assert!(out.contains("NEUTRAL"));
        assert!(!out.contains("Main topics"));
    }

    #[test]
    fn test_render_insertion_ends_with_new_text() {
        let result = InsertionResult {
            new_text: "Cats are great. Loyal dogs make great pets.".to_string(),
            target_sentence: "Dogs are loyal.".to_string(),
            rewritten_sentence: "Loyal dogs make great pets.".to_string(),
        };

        let out = render_insertion(&result);
        assert!(out.contains("Dogs are loyal."));
        assert!(out.ends_with("Cats are great. Loyal dogs make great pets.\n"));
    }

    #[test]
    fn test_read_input_from_missing_file_fails() {
        let err = read_input(Some(Path::new("/definitely/not/here.txt"))).unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }
}
