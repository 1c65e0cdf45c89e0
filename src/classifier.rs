use crate::errors::ScoutError;
use crate::matcher::{MatchMode, Phrase, TextMatcher};
use crate::parsers::text::normalize_description;
use crate::results::{ClassifiedJobRecord, FlagSet, OTHER, RawJobRecord};
use crate::taxonomy::{Axis, Category, Taxonomy};

/// A taxonomy entry with its phrases compiled
#[derive(Debug, Clone)]
struct CompiledCategory {
    label: String,
    phrases: Vec<Phrase>,
}

impl CompiledCategory {
    fn compile(category: &Category) -> Result<Self, ScoutError> {
        let phrases = category
            .phrases
            .iter()
            .map(|p| Phrase::new(p))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            label: category.label.clone(),
            phrases,
        })
    }
}

fn compile_axis(taxonomy: &Taxonomy, axis: Axis) -> Result<Vec<CompiledCategory>, ScoutError> {
    taxonomy
        .axis(axis)
        .iter()
        .map(CompiledCategory::compile)
        .collect()
}

/// Assigns labels on every axis from a record's description
///
/// Only the description is scanned; title and company are identity and
/// display fields.
#[derive(Debug)]
pub struct Classifier {
    domain: Vec<CompiledCategory>,
    application: Vec<CompiledCategory>,
    software: Vec<CompiledCategory>,
    language: Vec<CompiledCategory>,
    matcher: TextMatcher,
}

impl Classifier {
    /// Validate and compile `taxonomy`. Fails on configuration errors only.
    pub fn new(taxonomy: &Taxonomy, matcher: TextMatcher) -> Result<Self, ScoutError> {
        taxonomy.validate()?;

        Ok(Self {
            domain: compile_axis(taxonomy, Axis::Domain)?,
            application: compile_axis(taxonomy, Axis::Application)?,
            software: compile_axis(taxonomy, Axis::Software)?,
            language: compile_axis(taxonomy, Axis::Language)?,
            matcher,
        })
    }

    /// Built-in taxonomy, default matcher
    pub fn builtin() -> Result<Self, ScoutError> {
        Self::new(&Taxonomy::builtin(), TextMatcher::new())
    }

    /// Labels of a multi-flag axis in column order
    pub fn flag_labels(&self, axis: Axis) -> Vec<&str> {
        let categories = match axis {
            Axis::Domain => &self.domain,
            Axis::Application => &self.application,
            Axis::Software => &self.software,
            Axis::Language => &self.language,
        };
        categories.iter().map(|c| c.label.as_str()).collect()
    }

    /// Label one record. Total: a record that matches nothing gets
    /// `other`/`other` and all flags cleared.
    pub fn classify(&self, record: &RawJobRecord) -> ClassifiedJobRecord {
        let description = normalize_description(&record.description);

        let classified = ClassifiedJobRecord {
            record: record.clone(),
            domain: self.first_label(&self.domain, &description),
            application: self.first_label(&self.application, &description),
            software: self.flags(&self.software, &description, true),
            languages: self.flags(&self.language, &description, false),
        };

        ::log::debug!(
            "Classified '{}': domain={}, application={}, software={:?}, languages={:?}",
            record.title,
            classified.domain,
            classified.application,
            classified.software.set_labels(),
            classified.languages.set_labels()
        );

        classified
    }

    /// First label in declaration order with an exact phrase match
    fn first_label(&self, categories: &[CompiledCategory], text: &str) -> String {
        categories
            .iter()
            .find(|c| self.any_match(c, text, MatchMode::Exact))
            .map(|c| c.label.clone())
            .unwrap_or_else(|| OTHER.to_string())
    }

    /// One independent flag per entry; fuzzy is tried only after every
    /// phrase of the entry failed the exact test.
    fn flags(&self, categories: &[CompiledCategory], text: &str, fuzzy_fallback: bool) -> FlagSet {
        FlagSet::new(
            categories
                .iter()
                .map(|c| {
                    let set = self.any_match(c, text, MatchMode::Exact)
                        || (fuzzy_fallback && self.any_match(c, text, MatchMode::Fuzzy));
                    (c.label.clone(), set)
                })
                .collect(),
        )
    }

    fn any_match(&self, category: &CompiledCategory, text: &str, mode: MatchMode) -> bool {
        category
            .phrases
            .iter()
            .any(|phrase| self.matcher.matches(text, phrase, mode))
    }
}
