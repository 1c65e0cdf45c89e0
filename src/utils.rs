use crate::search::TimeFilter;

/// Convert a free-form label (a location, a keyword) to a safe file name part
pub fn sanitize_filename(name: &str) -> String {
    // Replace path separators, punctuation and whitespace
    let name: String = name
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '?' | '&' | '=' | '#' | '%' | '*' | '"' | '<' | '>' | '|' => '_',
            c if c.is_whitespace() => '_',
            c => c,
        })
        .collect();

    // Limit filename length
    name.chars().take(100).collect()
}

/// Export file name for one search, e.g. `jobs_France_week.csv`
pub fn search_file_name(kind: &str, location: &str, time_filter: TimeFilter) -> String {
    format!("{}_{}_{}.csv", kind, sanitize_filename(location), time_filter.name())
}
