/// Collapse runs of whitespace (including newlines) into single spaces
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// The form descriptions are matched in: lower-cased, single spaced
pub fn normalize_description(text: &str) -> String {
    normalize_whitespace(text).to_lowercase()
}

/// Join the text nodes of an element into one normalised string
pub fn join_text<'a>(nodes: impl Iterator<Item = &'a str>) -> String {
    normalize_whitespace(&nodes.collect::<Vec<_>>().join(" "))
}
