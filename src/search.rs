use crate::errors::ScoutError;
use serde::{Deserialize, Serialize};
use url::Url;

/// Search endpoint results are paged from
pub const DEFAULT_SEARCH_URL: &str = "https://www.linkedin.com/jobs/search/";

/// Listings per result page; the `start` parameter moves in these steps
pub const PAGE_SIZE: usize = 25;

/// Posting age filter understood by the search page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum TimeFilter {
    /// Last 24 hours
    Day,
    /// Last week
    Week,
    /// Last month
    Month,
    /// No restriction
    #[default]
    Any,
}

impl TimeFilter {
    /// Value of the `f_TPR` query parameter
    pub fn code(&self) -> &'static str {
        match self {
            TimeFilter::Day => "r86400",
            TimeFilter::Week => "r604800",
            TimeFilter::Month => "r2592000",
            TimeFilter::Any => "",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            TimeFilter::Day => "day",
            TimeFilter::Week => "week",
            TimeFilter::Month => "month",
            TimeFilter::Any => "any",
        }
    }
}

/// A keyword search in one location, paged
#[derive(Debug, Clone)]
pub struct SearchQuery {
    base: Url,
    keywords: String,
    location: String,
    time_filter: TimeFilter,
}

impl SearchQuery {
    /// Create a query against [`DEFAULT_SEARCH_URL`]
    pub fn new(keywords: &str, location: &str, time_filter: TimeFilter) -> Self {
        Self {
            base: Url::parse(DEFAULT_SEARCH_URL).expect("default search URL should be valid"),
            keywords: keywords.to_string(),
            location: location.to_string(),
            time_filter,
        }
    }

    /// Point the query at another search endpoint
    pub fn with_base_url(mut self, base: &str) -> Result<Self, ScoutError> {
        self.base = Url::parse(base)?;
        Ok(self)
    }

    /// URL of the zero-based result page `page`
    pub fn page_url(&self, page: usize) -> Url {
        let mut url = self.base.clone();
        url.query_pairs_mut()
            .clear()
            .append_pair("f_TPR", self.time_filter.code())
            .append_pair("keywords", &self.keywords)
            .append_pair("location", &self.location)
            .append_pair("origin", "JOB_SEARCH_PAGE_JOB_FILTER")
            .append_pair("start", &(page * PAGE_SIZE).to_string());
        url
    }

    /// URLs of the first `max_pages` result pages
    pub fn page_urls(&self, max_pages: usize) -> Vec<Url> {
        (0..max_pages).map(|page| self.page_url(page)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_filter_codes() {
        assert_eq!(TimeFilter::Day.code(), "r86400");
        assert_eq!(TimeFilter::Week.code(), "r604800");
        assert_eq!(TimeFilter::Month.code(), "r2592000");
        assert_eq!(TimeFilter::Any.code(), "");
    }

    #[test]
    fn test_page_url() {
        let query = SearchQuery::new("cfd", "United Kingdom", TimeFilter::Week);
        let url = query.page_url(2);

        assert_eq!(url.host_str(), Some("www.linkedin.com"));
        assert_eq!(url.path(), "/jobs/search/");

        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(
            pairs,
            vec![
                ("f_TPR".to_string(), "r604800".to_string()),
                ("keywords".to_string(), "cfd".to_string()),
                ("location".to_string(), "United Kingdom".to_string()),
                ("origin".to_string(), "JOB_SEARCH_PAGE_JOB_FILTER".to_string()),
                ("start".to_string(), "50".to_string()),
            ]
        );
    }

    #[test]
    fn test_page_urls() {
        let query = SearchQuery::new("cfd", "France", TimeFilter::Any);
        let urls = query.page_urls(3);
        assert_eq!(urls.len(), 3);
        assert!(urls[0].as_str().ends_with("start=0"));
        assert!(urls[2].as_str().ends_with("start=50"));
        assert!(urls[0].as_str().contains("f_TPR=&"));
    }

    #[test]
    fn test_custom_base_url() {
        let query = SearchQuery::new("cfd", "Germany", TimeFilter::Day)
            .with_base_url("https://de.linkedin.com/jobs/search/")
            .unwrap();
        assert_eq!(query.page_url(0).host_str(), Some("de.linkedin.com"));
        assert!(SearchQuery::new("cfd", "Germany", TimeFilter::Day).with_base_url("not a url").is_err());
    }
}
