//! Request validation

use crate::{Error, Result};

/// Minimum number of characters (after trimming) an analysis text must have
pub const MIN_ANALYSIS_CHARS: usize = 50;

const ANALYSIS_TEXT_MESSAGE: &str = "Please provide a block of text with at least 50 characters.";
const INSERTION_FIELDS_MESSAGE: &str = "originalText and keywordToInsert are required.";

/// Check a text submitted for analysis.
///
/// Returns the text unchanged when its trimmed length is at least
/// [`MIN_ANALYSIS_CHARS`] characters.
pub fn validate_analysis_text(text: &str) -> Result<&str> {
    if text.trim().chars().count() < MIN_ANALYSIS_CHARS {
        return Err(Error::Validation(ANALYSIS_TEXT_MESSAGE.to_string()));
    }
    Ok(text)
}

/// Check the two fields of a keyword-insertion request.
///
/// Whitespace-only values count as missing.
pub fn validate_insertion<'a>(
    original_text: &'a str,
    keyword_to_insert: &'a str,
) -> Result<(&'a str, &'a str)> {
    if original_text.trim().is_empty() || keyword_to_insert.trim().is_empty() {
        return Err(Error::Validation(INSERTION_FIELDS_MESSAGE.to_string()));
    }
    Ok((original_text, keyword_to_insert))
}
