use std::fmt::Debug;

/// Scores how well a phrase occurs in a text, on a 0-100 scale
pub trait Similarity: Debug + Send + Sync {
    fn score(&self, phrase: &str, text: &str) -> f64;
}

/// Partial-ratio similarity backed by Levenshtein distance
#[derive(Debug, Clone, Copy, Default)]
pub struct PartialRatio;

impl Similarity for PartialRatio {
    fn score(&self, phrase: &str, text: &str) -> f64 {
        partial_ratio(phrase, text)
    }
}

/// Best similarity of `phrase` against every same-length window of `text`
///
/// Each window is scored `100 * (1 - levenshtein / len)` where `len` is the
/// phrase length. A text shorter than the phrase is scored whole against
/// the phrase, still over the phrase length. Either side being empty
/// scores 0.
pub fn partial_ratio(phrase: &str, text: &str) -> f64 {
    let phrase: Vec<char> = phrase.chars().collect();
    let text: Vec<char> = text.chars().collect();

    if phrase.is_empty() || text.is_empty() {
        return 0.0;
    }

    let width = phrase.len();
    let score = |distance: usize| (100.0 * (1.0 - distance as f64 / width as f64)).max(0.0);

    if text.len() < width {
        return score(strsim::generic_levenshtein(&phrase, &text));
    }

    let mut best = 0.0_f64;
    for window in text.windows(width) {
        let distance = strsim::generic_levenshtein(&phrase, &window.to_vec());
        best = best.max(score(distance));
        if distance == 0 {
            break;
        }
    }

    best
}
