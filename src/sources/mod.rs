pub mod files;

pub use files::FileSource;

use crate::results::RawJobRecord;
use std::collections::VecDeque;

/// Where raw records come from, one result page at a time
///
/// Implementations wrap whatever did the scraping. Extraction failures are
/// their business: a page either yields records (with sentinels where needed)
/// or is skipped.
pub trait RecordSource {
    /// Label used in logs
    fn name(&self) -> &str;

    /// Records of the next page, or `None` when exhausted
    fn next_page(&mut self) -> Option<Vec<RawJobRecord>>;
}

/// Pages already held in memory
#[derive(Debug, Default)]
pub struct MemorySource {
    pages: VecDeque<Vec<RawJobRecord>>,
}

impl MemorySource {
    pub fn new(pages: Vec<Vec<RawJobRecord>>) -> Self {
        Self {
            pages: pages.into(),
        }
    }
}

impl RecordSource for MemorySource {
    fn name(&self) -> &str {
        "memory"
    }

    fn next_page(&mut self) -> Option<Vec<RawJobRecord>> {
        self.pages.pop_front()
    }
}
