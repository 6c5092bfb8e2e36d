//! Sentence segmentation
//!
//! Sentences end at a run of `.`, `!` or `?` and keep that punctuation. Text
//! after the last terminator is not a sentence.

use std::sync::LazyLock;

use regex::Regex;

static SENTENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^.!?]+[.!?]+").expect("sentence pattern is valid")
});

/// Lazy iterator over the sentences of a text.
///
/// Yields trimmed slices borrowed from the source. A copy of the iterator
/// resumes from the same position; build a new one with [`Sentences::new`]
/// to scan from the start again.
#[derive(Debug, Clone, Copy)]
pub struct Sentences<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Sentences<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }
}

impl<'a> Iterator for Sentences<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        while self.pos < self.text.len() {
            match SENTENCE.find_at(self.text, self.pos) {
                Some(m) => {
                    self.pos = m.end();
                    let sentence = m.as_str().trim();
                    // A bare run of punctuation separated by whitespace is not a sentence
                    if sentence
                        .trim_end_matches(['.', '!', '?'])
                        .trim()
                        .is_empty()
                    {
                        continue;
                    }
                    return Some(sentence);
                }
                None => self.pos = self.text.len(),
            }
        }
        None
    }
}

/// Split a text into sentences.
///
/// When no terminated sentence is found, the whole trimmed text is returned as
/// the only one, so the result is never empty.
pub fn segment(text: &str) -> Vec<&str> {
    let sentences: Vec<&str> = Sentences::new(text).collect();
    if sentences.is_empty() {
        return vec![text.trim()];
    }
    sentences
}
