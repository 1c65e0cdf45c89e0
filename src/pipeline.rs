use crate::classifier::Classifier;
use crate::results::{ClassifiedJobRecord, RawJobRecord};
use crate::tracker::{KeyPolicy, RepostCounting, RepostGroups, RepostTracker};
use serde::Serialize;

/// Counters for one run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunStats {
    /// Records fed in
    pub observed: usize,
    /// Records kept and classified
    pub accepted: usize,
    /// Records rejected as duplicates
    pub duplicates: usize,
}

/// Everything a finished run hands back
#[derive(Debug)]
pub struct PipelineOutput {
    pub jobs: Vec<ClassifiedJobRecord>,
    pub reposts: RepostGroups,
    pub stats: RunStats,
}

/// Feeds records through duplicate suppression and classification
///
/// One pipeline is one run: it owns the identities seen so far and the
/// repost groups, and nothing else writes to them. Start a new pipeline to
/// reset.
#[derive(Debug)]
pub struct RecordPipeline<'a> {
    classifier: &'a Classifier,
    tracker: RepostTracker,
    jobs: Vec<ClassifiedJobRecord>,
    stats: RunStats,
}

impl<'a> RecordPipeline<'a> {
    pub fn new(classifier: &'a Classifier, policy: KeyPolicy, counting: RepostCounting) -> Self {
        Self {
            classifier,
            tracker: RepostTracker::new(policy, counting),
            jobs: Vec::new(),
            stats: RunStats::default(),
        }
    }

    /// Process one record; returns the classified record if it was accepted
    pub fn push(&mut self, record: RawJobRecord) -> Option<&ClassifiedJobRecord> {
        self.stats.observed += 1;

        let observation = self.tracker.observe(&record);
        if !observation.accepted {
            self.stats.duplicates += 1;
            return None;
        }

        self.stats.accepted += 1;
        self.jobs.push(self.classifier.classify(&record));
        self.jobs.last()
    }

    /// Process a batch, e.g. one result page. Returns how many were accepted.
    pub fn extend<I>(&mut self, records: I) -> usize
    where
        I: IntoIterator<Item = RawJobRecord>,
    {
        let before = self.stats.accepted;
        for record in records {
            self.push(record);
        }
        self.stats.accepted - before
    }

    pub fn stats(&self) -> RunStats {
        self.stats
    }

    /// Records accepted so far
    pub fn jobs(&self) -> &[ClassifiedJobRecord] {
        &self.jobs
    }

    /// End the run and take its results
    pub fn finish(self) -> PipelineOutput {
        ::log::info!(
            "Run finished: {} observed, {} accepted, {} duplicates",
            self.stats.observed,
            self.stats.accepted,
            self.stats.duplicates
        );

        PipelineOutput {
            jobs: self.jobs,
            reposts: self.tracker.into_groups(),
            stats: self.stats,
        }
    }
}
