// Re-export modules
pub mod classifier;
pub mod config;
pub mod errors;
pub mod export;
pub mod matcher;
pub mod parsers;
pub mod pipeline;
pub mod report;
pub mod results;
pub mod search;
pub mod session;
pub mod sources;
pub mod taxonomy;
pub mod tracker;
pub mod utils;

// Re-export commonly used types for convenience
pub use classifier::Classifier;
pub use config::{ScoutConfig, SearchConfig};
pub use errors::ScoutError;
pub use pipeline::{PipelineOutput, RecordPipeline, RunStats};
pub use results::{ClassifiedJobRecord, FlagSet, OTHER, RawJobRecord, UNKNOWN};
pub use session::Session;
pub use taxonomy::{Axis, Category, Taxonomy};
pub use tracker::{KeyPolicy, RepostCounting, RepostTracker};

use matcher::TextMatcher;
use std::path::{Path, PathBuf};

/// Main builder for a classification session
#[derive(Debug, Default)]
pub struct Scout {
    config: ScoutConfig,
    taxonomy: Option<Taxonomy>,
}

impl Scout {
    /// Create a builder with default settings and the built-in taxonomy
    pub fn new() -> Self {
        Self::default()
    }

    /// The configuration as it stands
    pub fn config(&self) -> &ScoutConfig {
        &self.config
    }

    /// Replace the configuration
    pub fn with_config(mut self, config: ScoutConfig) -> Self {
        self.config = config;
        self
    }

    /// Load configuration from a file
    pub fn with_config_file(self, path: impl AsRef<Path>) -> Result<Self, ScoutError> {
        let config = ScoutConfig::from_file(path)?;
        Ok(self.with_config(config))
    }

    /// Load configuration from a string
    pub fn with_config_str(self, config_str: &str) -> Result<Self, ScoutError> {
        let config = ScoutConfig::from_json(config_str)?;
        Ok(self.with_config(config))
    }

    /// Use this taxonomy instead of the built-in one or the configured file
    pub fn with_taxonomy(mut self, taxonomy: Taxonomy) -> Self {
        self.taxonomy = Some(taxonomy);
        self
    }

    /// Override the taxonomy file
    pub fn with_taxonomy_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.taxonomy_file = Some(path.into());
        self
    }

    /// Override the identity/grouping policy
    pub fn with_key_policy(mut self, policy: KeyPolicy) -> Self {
        self.config.key_policy = policy;
        self
    }

    /// Override whether duplicates count towards repost groups
    pub fn with_repost_counting(mut self, counting: RepostCounting) -> Self {
        self.config.repost_counting = counting;
        self
    }

    /// Override the fuzzy match threshold (0-100)
    pub fn with_fuzzy_threshold(mut self, threshold: f64) -> Self {
        self.config.fuzzy_threshold = threshold;
        self
    }

    /// Override the output directory
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.output_dir = dir.into();
        self
    }

    /// Resolve the taxonomy and compile the classifier
    ///
    /// All configuration errors surface here, before any record is seen.
    pub fn build(self) -> Result<Session, ScoutError> {
        self.config.validate()?;

        let taxonomy = match (self.taxonomy, &self.config.taxonomy_file) {
            (Some(taxonomy), _) => taxonomy,
            (None, Some(path)) => {
                ::log::info!("Loading taxonomy from {}", path.display());
                Taxonomy::from_file(path)?
            }
            (None, None) => Taxonomy::builtin(),
        };

        let matcher = TextMatcher::new().with_threshold(self.config.fuzzy_threshold);
        let classifier = Classifier::new(&taxonomy, matcher)?;

        ::log::debug!(
            "Classifier ready: {} domains, {} applications, {} software, {} languages",
            taxonomy.domain.len(),
            taxonomy.application.len(),
            taxonomy.software.len(),
            taxonomy.language.len()
        );

        Ok(Session::new(self.config, classifier))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_defaults() {
        let session = Scout::new().build().unwrap();
        assert_eq!(session.config().key_policy, KeyPolicy::Split);
        assert_eq!(
            session.classifier().flag_labels(Axis::Software),
            Taxonomy::builtin().labels(Axis::Software)
        );
    }

    #[test]
    fn test_build_with_custom_taxonomy() {
        let taxonomy = Taxonomy {
            domain: vec![Category::new("combustion", &["combustion"])],
            application: vec![],
            software: vec![Category::new("OpenFOAM", &["openfoam"])],
            language: vec![],
        };
        let session = Scout::new().with_taxonomy(taxonomy).build().unwrap();
        assert_eq!(session.classifier().flag_labels(Axis::Software), vec!["OpenFOAM"]);
        assert!(session.classifier().flag_labels(Axis::Language).is_empty());
    }

    #[test]
    fn test_build_from_config_str() {
        let session = Scout::new()
            .with_config_str(r#"{"key_policy": "listing", "fuzzy_threshold": 95}"#)
            .unwrap()
            .with_repost_counting(RepostCounting::AllOccurrences)
            .build()
            .unwrap();
        assert_eq!(session.config().key_policy, KeyPolicy::Listing);
        assert_eq!(session.config().repost_counting, RepostCounting::AllOccurrences);
        assert_eq!(session.config().fuzzy_threshold, 95.0);
    }

    #[test]
    fn test_configuration_errors_surface_at_build() {
        assert!(Scout::new().with_fuzzy_threshold(-1.0).build().is_err());
        assert!(
            Scout::new()
                .with_taxonomy_file("/nonexistent/taxonomy.json")
                .build()
                .is_err()
        );
    }
}
