pub mod exact;
pub mod fuzzy;

#[cfg(test)]
mod tests;

pub use exact::Phrase;
pub use fuzzy::{PartialRatio, Similarity};

use crate::errors::ScoutError;
use std::borrow::Cow;

/// Similarity score a fuzzy match has to reach, on a 0-100 scale
pub const DEFAULT_FUZZY_THRESHOLD: f64 = 90.0;

/// How a phrase is compared against a text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Case-insensitive, bounded by non-alphanumeric characters
    Exact,
    /// Similarity score at or above the matcher threshold
    Fuzzy,
}

/// Decides whether a trigger phrase applies to a text
#[derive(Debug)]
pub struct TextMatcher {
    similarity: Box<dyn Similarity>,
    threshold: f64,
}

impl Default for TextMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl TextMatcher {
    /// Partial-ratio similarity at the default threshold
    pub fn new() -> Self {
        Self {
            similarity: Box::new(PartialRatio),
            threshold: DEFAULT_FUZZY_THRESHOLD,
        }
    }

    /// Set the fuzzy threshold (0-100)
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Swap in another similarity function
    pub fn with_similarity(mut self, similarity: Box<dyn Similarity>) -> Self {
        self.similarity = similarity;
        self
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Test one phrase against a text. Empty text never matches.
    pub fn matches(&self, text: &str, phrase: &Phrase, mode: MatchMode) -> bool {
        if text.trim().is_empty() {
            return false;
        }

        let matched = match mode {
            MatchMode::Exact => phrase.is_match(text),
            MatchMode::Fuzzy => {
                let text = lowercase(text);
                self.similarity.score(phrase.as_str(), &text) >= self.threshold
            }
        };

        if matched {
            ::log::trace!("{:?} match for '{}'", mode, phrase.as_str());
        }
        matched
    }
}

/// Compile `phrase` and test it with a default matcher
pub fn matches(text: &str, phrase: &str, mode: MatchMode) -> Result<bool, ScoutError> {
    let phrase = Phrase::new(phrase)?;
    Ok(TextMatcher::new().matches(text, &phrase, mode))
}

fn lowercase(text: &str) -> Cow<'_, str> {
    if text.chars().any(char::is_uppercase) {
        Cow::Owned(text.to_lowercase())
    } else {
        Cow::Borrowed(text)
    }
}
