use crate::errors::ScoutError;
use regex::Regex;

/// A compiled trigger phrase
///
/// Holds the lower-cased phrase for similarity scoring and a word-boundary
/// pattern for exact matching. A phrase only matches where it is flanked by
/// a non-alphanumeric character or the edge of the text, so `ccm` never
/// fires inside `starccm`.
#[derive(Debug, Clone)]
pub struct Phrase {
    text: String,
    pattern: Regex,
}

impl Phrase {
    /// Compile a phrase. Blank phrases are a configuration error.
    pub fn new(phrase: &str) -> Result<Self, ScoutError> {
        let text = phrase.trim().to_lowercase();
        if text.is_empty() {
            return Err(ScoutError::Configuration(
                "trigger phrases must not be empty".to_string(),
            ));
        }

        let pattern = Regex::new(&format!(
            r"(?i)(?:^|[^\p{{L}}\p{{N}}]){}(?:[^\p{{L}}\p{{N}}]|$)",
            regex::escape(&text)
        ))?;

        Ok(Self { text, pattern })
    }

    /// The normalised phrase text
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Case-insensitive word-boundary match
    pub fn is_match(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }
}
