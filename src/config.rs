use crate::errors::ScoutError;
use crate::matcher::DEFAULT_FUZZY_THRESHOLD;
use crate::search::{SearchQuery, TimeFilter};
use crate::tracker::{KeyPolicy, RepostCounting};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// One search: a location and a time filter, plus where its saved pages are
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Search keywords
    #[serde(default = "default_keywords")]
    pub keywords: String,

    /// Location the search is restricted to
    pub location: String,

    /// Posting age filter
    #[serde(default)]
    pub time_filter: TimeFilter,

    /// Number of result pages to request
    #[serde(default = "default_max_pages")]
    pub max_pages: usize,

    /// Saved result pages or record dumps (files or directories)
    #[serde(default)]
    pub inputs: Vec<PathBuf>,
}

impl SearchConfig {
    /// Create a search with default keywords and page count
    pub fn new(location: &str, time_filter: TimeFilter) -> Self {
        Self {
            keywords: default_keywords(),
            location: location.to_string(),
            time_filter,
            max_pages: default_max_pages(),
            inputs: Vec::new(),
        }
    }

    pub fn query(&self) -> SearchQuery {
        SearchQuery::new(&self.keywords, &self.location, self.time_filter)
    }
}

/// Settings for a whole scouting session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoutConfig {
    /// Fields used for identity and repost grouping
    #[serde(default)]
    pub key_policy: KeyPolicy,

    /// Whether duplicates count towards repost groups
    #[serde(default)]
    pub repost_counting: RepostCounting,

    /// Fuzzy similarity a software phrase must reach (0-100)
    #[serde(default = "default_fuzzy_threshold")]
    pub fuzzy_threshold: f64,

    /// Whether the job export carries the description column
    #[serde(default = "default_include_description")]
    pub include_description: bool,

    /// JSON taxonomy replacing the built-in one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub taxonomy_file: Option<PathBuf>,

    /// Directory exports are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Rows kept in the company post count report
    #[serde(default = "default_top_companies")]
    pub top_companies: usize,

    /// Searches to run, each as an independent run
    #[serde(default)]
    pub searches: Vec<SearchConfig>,
}

/// Default search keywords
fn default_keywords() -> String {
    "cfd".to_string()
}

/// Default number of result pages
fn default_max_pages() -> usize {
    50
}

fn default_fuzzy_threshold() -> f64 {
    DEFAULT_FUZZY_THRESHOLD
}

fn default_include_description() -> bool {
    true
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_top_companies() -> usize {
    10
}

impl Default for ScoutConfig {
    fn default() -> Self {
        Self {
            key_policy: KeyPolicy::default(),
            repost_counting: RepostCounting::default(),
            fuzzy_threshold: default_fuzzy_threshold(),
            include_description: default_include_description(),
            taxonomy_file: None,
            output_dir: default_output_dir(),
            top_companies: default_top_companies(),
            searches: Vec::new(),
        }
    }
}

impl ScoutConfig {
    /// Load configuration from a file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ScoutError> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ScoutError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check values serde cannot
    pub fn validate(&self) -> Result<(), ScoutError> {
        if !(0.0..=100.0).contains(&self.fuzzy_threshold) {
            return Err(ScoutError::Configuration(format!(
                "fuzzy_threshold must be within 0-100, got {}",
                self.fuzzy_threshold
            )));
        }
        if let Some(search) = self.searches.iter().find(|s| s.location.trim().is_empty()) {
            return Err(ScoutError::Configuration(format!(
                "search for '{}' has no location",
                search.keywords
            )));
        }
        Ok(())
    }
}
