use crate::matcher::fuzzy::partial_ratio;
use crate::matcher::{MatchMode, Phrase, Similarity, TextMatcher};

#[derive(Debug)]
struct Always(f64);

impl Similarity for Always {
    fn score(&self, _phrase: &str, _text: &str) -> f64 {
        self.0
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_partial_ratio_exact_substring() {
        assert_eq!(partial_ratio("openfoam", "we use openfoam daily"), 100.0);
        // Substrings inside words count for partial ratio
        assert_eq!(partial_ratio("ccm", "starccm"), 100.0);
    }

    #[test]
    fn test_partial_ratio_one_edit() {
        // 1 substitution over 28 characters
        let score = partial_ratio(
            "computational fluid dynamics",
            "experience in computational fluid dinamics",
        );
        assert!((score - 100.0 * (1.0 - 1.0 / 28.0)).abs() < 1e-9);

        // 1 substitution over 6 characters
        let score = partial_ratio("fluent", "fluend");
        assert!((score - 100.0 * (1.0 - 1.0 / 6.0)).abs() < 1e-9);
    }

    #[test]
    fn test_partial_ratio_empty() {
        assert_eq!(partial_ratio("", "text"), 0.0);
        assert_eq!(partial_ratio("text", ""), 0.0);
    }

    #[test]
    fn test_text_shorter_than_phrase() {
        // Scored against the whole phrase length, not the text length
        assert_eq!(partial_ratio("openfoam", "a"), 12.5);
        assert_eq!(partial_ratio("openfoam", "foam"), 50.0);
        let score = partial_ratio("ansys fluent", "ansys");
        assert!((score - 100.0 * (1.0 - 7.0 / 12.0)).abs() < 1e-9);
        // A long text is not a window of a short phrase
        assert!(partial_ratio("we use openfoam daily", "openfoam") < 50.0);
    }

    #[test]
    fn test_short_text_never_reaches_threshold() {
        let matcher = TextMatcher::new();
        for phrase in ["openfoam", "ansys fluent", "star-ccm+", "code_saturne", "paraview", "converge"] {
            let phrase = Phrase::new(phrase).unwrap();
            assert!(!matcher.matches("a", &phrase, MatchMode::Fuzzy), "{}", phrase.as_str());
            assert!(!matcher.matches("cfd", &phrase, MatchMode::Fuzzy), "{}", phrase.as_str());
        }
    }

    #[test]
    fn test_fuzzy_threshold() {
        let matcher = TextMatcher::new();
        let phrase = Phrase::new("computational fluid dynamics").unwrap();
        let text = "experience in computational fluid dinamics";

        assert!(!matcher.matches(text, &phrase, MatchMode::Exact));
        assert!(matcher.matches(text, &phrase, MatchMode::Fuzzy));

        let strict = TextMatcher::new().with_threshold(97.0);
        assert!(!strict.matches(text, &phrase, MatchMode::Fuzzy));
    }

    #[test]
    fn test_short_typo_stays_below_threshold() {
        let matcher = TextMatcher::new();
        let phrase = Phrase::new("fluent").unwrap();
        assert!(!matcher.matches("ansys fluend user", &phrase, MatchMode::Fuzzy));
    }

    #[test]
    fn test_fuzzy_is_case_insensitive() {
        let matcher = TextMatcher::new();
        let phrase = Phrase::new("paraview").unwrap();
        assert!(matcher.matches("Post-processing in ParaView", &phrase, MatchMode::Fuzzy));
    }

    #[test]
    fn test_pluggable_similarity() {
        let phrase = Phrase::new("openfoam").unwrap();

        let never = TextMatcher::new().with_similarity(Box::new(Always(0.0)));
        assert!(!never.matches("openfoam", &phrase, MatchMode::Fuzzy));

        let always = TextMatcher::new().with_similarity(Box::new(Always(100.0)));
        assert!(always.matches("unrelated text", &phrase, MatchMode::Fuzzy));
        // Exact mode ignores the similarity function
        assert!(!always.matches("unrelated text", &phrase, MatchMode::Exact));
    }
}
