use crate::results::ClassifiedJobRecord;
use crate::tracker::RepostGroups;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

/// Accepted postings of one company
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompanyCount {
    pub company: String,
    pub posts: usize,
}

/// Postings of one company in one calendar month
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompanyMonth {
    pub company: String,
    pub month: String,
    pub posts: usize,
}

/// Companies by number of accepted postings, largest first, at most `top`
pub fn company_post_counts(jobs: &[ClassifiedJobRecord], top: usize) -> Vec<CompanyCount> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for job in jobs {
        *counts.entry(job.record.company.as_str()).or_insert(0) += 1;
    }

    let mut counts: Vec<CompanyCount> = counts
        .into_iter()
        .map(|(company, posts)| CompanyCount {
            company: company.to_string(),
            posts,
        })
        .collect();
    counts.sort_by(|a, b| b.posts.cmp(&a.posts).then_with(|| a.company.cmp(&b.company)));
    counts.truncate(top);
    counts
}

/// `YYYY-MM` of a `YYYY-MM-DD` date
pub fn month_of(date: &str) -> Option<String> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .ok()
        .map(|d| d.format("%Y-%m").to_string())
}

/// Repost group dates bucketed per company and month
///
/// Groups of the same company are summed. Dates that do not parse, the
/// sentinel included, are left out.
pub fn company_posts_per_month(groups: &RepostGroups) -> Vec<CompanyMonth> {
    let mut buckets: BTreeMap<(&str, String), usize> = BTreeMap::new();
    let mut skipped = 0;

    for (key, group) in groups.iter() {
        for date in &group.dates {
            match month_of(date) {
                Some(month) => *buckets.entry((key.company(), month)).or_insert(0) += 1,
                None => skipped += 1,
            }
        }
    }

    if skipped > 0 {
        ::log::warn!("Left {} undated postings out of the monthly report", skipped);
    }

    buckets
        .into_iter()
        .map(|((company, month), posts)| CompanyMonth {
            company: company.to_string(),
            month,
            posts,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::Classifier;
    use crate::results::{RawJobRecord, UNKNOWN};
    use crate::tracker::{KeyPolicy, RepostKey};

    fn job(classifier: &Classifier, company: &str) -> ClassifiedJobRecord {
        classifier.classify(&RawJobRecord::new("Engineer", company, "Paris", "2024-01-05", "", ""))
    }

    #[test]
    fn test_company_post_counts() {
        let classifier = Classifier::builtin().unwrap();
        let jobs = vec![
            job(&classifier, "Globex"),
            job(&classifier, "Acme"),
            job(&classifier, "Globex"),
            job(&classifier, "Initech"),
            job(&classifier, "Acme"),
            job(&classifier, "Globex"),
        ];

        let counts = company_post_counts(&jobs, 2);
        assert_eq!(
            counts,
            vec![
                CompanyCount {
                    company: "Globex".to_string(),
                    posts: 3
                },
                CompanyCount {
                    company: "Acme".to_string(),
                    posts: 2
                },
            ]
        );
    }

    #[test]
    fn test_month_of() {
        assert_eq!(month_of("2024-01-05"), Some("2024-01".to_string()));
        assert_eq!(month_of(UNKNOWN), None);
        assert_eq!(month_of("05/01/2024"), None);
    }

    #[test]
    fn test_company_posts_per_month() {
        let mut groups = RepostGroups::default();
        let record = |company: &str, date: &str| {
            RawJobRecord::new("Engineer", company, "Paris", date, "", "")
        };

        for (company, date) in [
            ("Acme", "2024-01-05"),
            ("Acme", "2024-01-05"),
            ("Acme", "2024-01-20"),
            ("Acme", "2024-02-01"),
            ("Globex", UNKNOWN),
        ] {
            let r = record(company, date);
            groups.record(&RepostKey::of(&r, KeyPolicy::Split), &r.posted_date);
        }

        let months = company_posts_per_month(&groups);
        assert_eq!(
            months,
            vec![
                CompanyMonth {
                    company: "Acme".to_string(),
                    month: "2024-01".to_string(),
                    posts: 3
                },
                CompanyMonth {
                    company: "Acme".to_string(),
                    month: "2024-02".to_string(),
                    posts: 1
                },
            ]
        );
    }
}
