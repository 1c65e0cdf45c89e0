use serde::{Deserialize, Deserializer, Serialize};

/// Placeholder stored in any field that could not be extracted.
pub const UNKNOWN: &str = "unknown";

/// Label assigned on the single-label axes when no trigger phrase matches.
pub const OTHER: &str = "other";

fn unknown() -> String {
    UNKNOWN.to_string()
}

/// `null` reads as a missing field
fn nullable_field<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(field_or_unknown(value.as_deref()))
}

fn nullable_description<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// A job listing as captured from a search result page
///
/// Fields that could not be extracted hold [`UNKNOWN`] rather than being
/// absent, so every downstream decision sees a value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawJobRecord {
    /// Posting title (`post_name` in older dumps)
    #[serde(default = "unknown", alias = "post_name", deserialize_with = "nullable_field")]
    pub title: String,

    /// Hiring company
    #[serde(default = "unknown", deserialize_with = "nullable_field")]
    pub company: String,

    /// Location as displayed on the card
    #[serde(default = "unknown", deserialize_with = "nullable_field")]
    pub location: String,

    /// Posting date, `YYYY-MM-DD` when the site provides it
    #[serde(default = "unknown", alias = "date_posted", deserialize_with = "nullable_field")]
    pub posted_date: String,

    /// Link to the listing
    #[serde(default = "unknown", deserialize_with = "nullable_field")]
    pub link: String,

    /// Free-text description, possibly empty
    #[serde(default, deserialize_with = "nullable_description")]
    pub description: String,
}

impl RawJobRecord {
    /// Create a record, normalising every field through [`field_or_unknown`]
    pub fn new(
        title: &str,
        company: &str,
        location: &str,
        posted_date: &str,
        link: &str,
        description: &str,
    ) -> Self {
        Self {
            title: field_or_unknown(Some(title)),
            company: field_or_unknown(Some(company)),
            location: field_or_unknown(Some(location)),
            posted_date: field_or_unknown(Some(posted_date)),
            link: field_or_unknown(Some(link)),
            description: description.trim().to_string(),
        }
    }

    /// Re-apply sentinel normalisation, e.g. after deserialising a dump
    /// written by another tool that used `N/A` or empty strings.
    pub fn normalized(self) -> Self {
        Self {
            title: field_or_unknown(Some(&self.title)),
            company: field_or_unknown(Some(&self.company)),
            location: field_or_unknown(Some(&self.location)),
            posted_date: field_or_unknown(Some(&self.posted_date)),
            link: field_or_unknown(Some(&self.link)),
            description: self.description.trim().to_string(),
        }
    }
}

/// Map an extracted value to itself, or to [`UNKNOWN`] when it is missing,
/// blank or the `N/A` placeholder.
pub fn field_or_unknown(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() && !v.eq_ignore_ascii_case("n/a") => v.to_string(),
        _ => unknown(),
    }
}

/// Ordered boolean flags for a multi-flag axis, one per taxonomy entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlagSet {
    entries: Vec<(String, bool)>,
}

impl FlagSet {
    pub fn new(entries: Vec<(String, bool)>) -> Self {
        Self { entries }
    }

    /// Flag value for `label`, or `None` if the axis has no such entry
    pub fn get(&self, label: &str) -> Option<bool> {
        self.entries
            .iter()
            .find(|(name, _)| name == label)
            .map(|(_, set)| *set)
    }

    /// Labels whose flag is set, in taxonomy order
    pub fn set_labels(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|(_, set)| *set)
            .map(|(name, _)| name.as_str())
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.entries.iter().map(|(name, set)| (name.as_str(), *set))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// An accepted listing together with its labels on every axis
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassifiedJobRecord {
    pub record: RawJobRecord,
    /// Exactly one domain label, [`OTHER`] when nothing matched
    pub domain: String,
    /// Exactly one application label, [`OTHER`] when nothing matched
    pub application: String,
    pub software: FlagSet,
    pub languages: FlagSet,
}
