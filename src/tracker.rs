use crate::results::RawJobRecord;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Which fields identify a posting and which fields group reposts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum KeyPolicy {
    /// Identity (title, date); reposts grouped by (company, date)
    #[default]
    Split,
    /// (title, company, location) for both identity and grouping
    Listing,
}

/// Whether rejected duplicates still count towards their repost group
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum RepostCounting {
    /// Only accepted records are counted
    #[default]
    AcceptedOnly,
    /// Every occurrence is counted, duplicates included
    AllOccurrences,
}

/// Key under which two records count as the same posting
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum JobIdentity {
    TitleDate {
        title: String,
        posted_date: String,
    },
    Listing {
        title: String,
        company: String,
        location: String,
    },
}

impl JobIdentity {
    pub fn of(record: &RawJobRecord, policy: KeyPolicy) -> Self {
        match policy {
            KeyPolicy::Split => JobIdentity::TitleDate {
                title: record.title.clone(),
                posted_date: record.posted_date.clone(),
            },
            KeyPolicy::Listing => JobIdentity::Listing {
                title: record.title.clone(),
                company: record.company.clone(),
                location: record.location.clone(),
            },
        }
    }
}

/// Key of a repost group
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum RepostKey {
    CompanyDate {
        company: String,
        posted_date: String,
    },
    Listing {
        title: String,
        company: String,
        location: String,
    },
}

impl RepostKey {
    pub fn of(record: &RawJobRecord, policy: KeyPolicy) -> Self {
        match policy {
            KeyPolicy::Split => RepostKey::CompanyDate {
                company: record.company.clone(),
                posted_date: record.posted_date.clone(),
            },
            KeyPolicy::Listing => RepostKey::Listing {
                title: record.title.clone(),
                company: record.company.clone(),
                location: record.location.clone(),
            },
        }
    }

    /// Company the group belongs to, whatever the policy
    pub fn company(&self) -> &str {
        match self {
            RepostKey::CompanyDate { company, .. } => company,
            RepostKey::Listing { company, .. } => company,
        }
    }

    /// Key fields as `(column, value)` pairs for export
    pub fn fields(&self) -> Vec<(&'static str, &str)> {
        match self {
            RepostKey::CompanyDate { company, posted_date } => {
                vec![("company", company.as_str()), ("date_posted", posted_date.as_str())]
            }
            RepostKey::Listing {
                title,
                company,
                location,
            } => vec![
                ("title", title.as_str()),
                ("company", company.as_str()),
                ("location", location.as_str()),
            ],
        }
    }
}

/// Occurrences observed for one repost key
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RepostGroup {
    pub count: usize,
    pub dates: Vec<String>,
}

/// Repost groups in first-seen order
#[derive(Debug, Clone, Default)]
pub struct RepostGroups {
    groups: Vec<(RepostKey, RepostGroup)>,
    index: HashMap<RepostKey, usize>,
}

impl RepostGroups {
    /// Count one occurrence; returns true if this created the group
    pub fn record(&mut self, key: &RepostKey, posted_date: &str) -> bool {
        let (slot, created) = match self.index.get(key) {
            Some(&slot) => (slot, false),
            None => {
                self.groups.push((key.clone(), RepostGroup::default()));
                let slot = self.groups.len() - 1;
                self.index.insert(key.clone(), slot);
                (slot, true)
            }
        };

        let group = &mut self.groups[slot].1;
        group.count += 1;
        group.dates.push(posted_date.to_string());
        created
    }

    pub fn get(&self, key: &RepostKey) -> Option<&RepostGroup> {
        self.index.get(key).map(|&slot| &self.groups[slot].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&RepostKey, &RepostGroup)> {
        self.groups.iter().map(|(key, group)| (key, group))
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Groups seen more than once
    pub fn reposted(&self) -> impl Iterator<Item = (&RepostKey, &RepostGroup)> {
        self.iter().filter(|(_, group)| group.count > 1)
    }
}

/// Outcome of observing one record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Observation {
    /// False when the identity had been seen before in this run
    pub accepted: bool,
    pub repost_key: RepostKey,
    /// True when this occurrence created its repost group
    pub first_of_group: bool,
}

/// Duplicate suppression and repost bookkeeping for one run
#[derive(Debug, Clone, Default)]
pub struct RepostTracker {
    policy: KeyPolicy,
    counting: RepostCounting,
    seen: HashSet<JobIdentity>,
    groups: RepostGroups,
}

impl RepostTracker {
    pub fn new(policy: KeyPolicy, counting: RepostCounting) -> Self {
        Self {
            policy,
            counting,
            seen: HashSet::new(),
            groups: RepostGroups::default(),
        }
    }

    /// Accept or reject a record and update its repost group
    ///
    /// `unknown` fields take part in keys like any other value, so records
    /// missing a date share whatever group their other fields select.
    pub fn observe(&mut self, record: &RawJobRecord) -> Observation {
        let identity = JobIdentity::of(record, self.policy);
        let repost_key = RepostKey::of(record, self.policy);
        let accepted = self.seen.insert(identity);

        let counted = accepted || self.counting == RepostCounting::AllOccurrences;
        let first_of_group = counted && self.groups.record(&repost_key, &record.posted_date);

        if accepted {
            ::log::trace!("Accepted '{}' ({})", record.title, record.posted_date);
        } else {
            ::log::debug!(
                "Duplicate '{}' at {} ({})",
                record.title,
                record.company,
                record.posted_date
            );
        }

        Observation {
            accepted,
            repost_key,
            first_of_group,
        }
    }

    /// Number of distinct identities seen so far
    pub fn seen_len(&self) -> usize {
        self.seen.len()
    }

    pub fn groups(&self) -> &RepostGroups {
        &self.groups
    }

    /// Hand the repost groups back at the end of the run
    pub fn into_groups(self) -> RepostGroups {
        self.groups
    }
}
