use crate::parsers::text;

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_normalize_whitespace() {
        assert_eq!(text::normalize_whitespace(""), "");
        assert_eq!(text::normalize_whitespace("   "), "");
        assert_eq!(text::normalize_whitespace("Line 1\nLine 2\n\n  Line 3"), "Line 1 Line 2 Line 3");
        assert_eq!(text::normalize_whitespace("a\t\tb"), "a b");
    }

    #[test]
    fn test_normalize_description() {
        assert_eq!(
            text::normalize_description("  Expérience   OpenFOAM\nAérodynamique "),
            "expérience openfoam aérodynamique"
        );
    }

    #[test]
    fn test_join_text() {
        let nodes = vec!["\n  CFD ", " Engineer\n", ""];
        assert_eq!(text::join_text(nodes.into_iter()), "CFD Engineer");
    }
}
