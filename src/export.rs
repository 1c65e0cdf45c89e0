use crate::errors::ScoutError;
use crate::report::{CompanyCount, CompanyMonth};
use crate::results::ClassifiedJobRecord;
use crate::tracker::{KeyPolicy, RepostGroups};
use csv::{Writer, WriterBuilder};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// UTF-8 byte order mark; spreadsheet tools need it to read accents
const BOM: &[u8] = b"\xEF\xBB\xBF";

/// One row of the per-search statistics table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchSummary {
    pub country: String,
    pub time_filter: String,
    pub n_jobs: usize,
}

/// Column layout of the job export
#[derive(Debug, Clone)]
pub struct JobColumns {
    pub software: Vec<String>,
    pub languages: Vec<String>,
    pub include_description: bool,
}

impl JobColumns {
    pub fn header(&self) -> Vec<String> {
        let mut header: Vec<String> = ["title", "company", "location", "date_posted", "link"]
            .iter()
            .map(|c| c.to_string())
            .collect();
        if self.include_description {
            header.push("description".to_string());
        }
        header.push("domain".to_string());
        header.push("application".to_string());
        header.extend(self.software.iter().cloned());
        header.extend(self.languages.iter().cloned());
        header
    }

    fn row(&self, job: &ClassifiedJobRecord) -> Vec<String> {
        let record = &job.record;
        let mut row = vec![
            record.title.clone(),
            record.company.clone(),
            record.location.clone(),
            record.posted_date.clone(),
            record.link.clone(),
        ];
        if self.include_description {
            row.push(record.description.clone());
        }
        row.push(job.domain.clone());
        row.push(job.application.clone());
        for label in &self.software {
            row.push(job.software.get(label).unwrap_or(false).to_string());
        }
        for label in &self.languages {
            row.push(job.languages.get(label).unwrap_or(false).to_string());
        }
        row
    }
}

/// Open `path` for writing, creating parent directories
pub fn create_file(path: &Path) -> Result<BufWriter<File>, ScoutError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(BufWriter::new(File::create(path)?))
}

fn bom_writer<W: Write>(mut inner: W) -> Result<Writer<W>, ScoutError> {
    inner.write_all(BOM)?;
    Ok(Writer::from_writer(inner))
}

/// One row per accepted job; booleans as `true`/`false`
pub fn write_jobs<W: Write>(
    inner: W,
    columns: &JobColumns,
    jobs: &[ClassifiedJobRecord],
) -> Result<(), ScoutError> {
    let mut writer = bom_writer(inner)?;
    writer.write_record(columns.header())?;
    for job in jobs {
        writer.write_record(columns.row(job))?;
    }
    writer.flush()?;
    Ok(())
}

/// One row per repost group: key fields, count, dates joined with `;`
pub fn write_reposts<W: Write>(
    inner: W,
    policy: KeyPolicy,
    groups: &RepostGroups,
) -> Result<(), ScoutError> {
    let mut writer = bom_writer(inner)?;

    let mut header = match policy {
        KeyPolicy::Split => vec!["company", "date_posted"],
        KeyPolicy::Listing => vec!["title", "company", "location"],
    };
    header.extend(["count", "dates"]);
    writer.write_record(&header)?;

    for (key, group) in groups.iter() {
        let mut row: Vec<String> = key.fields().into_iter().map(|(_, v)| v.to_string()).collect();
        row.push(group.count.to_string());
        row.push(group.dates.join(";"));
        writer.write_record(&row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Rows of any serialisable report, BOM prefixed. The header is written
/// even when there are no rows.
pub fn write_rows<W: Write, T: Serialize>(
    mut inner: W,
    header: &[&str],
    rows: &[T],
) -> Result<(), ScoutError> {
    inner.write_all(BOM)?;
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(inner);
    writer.write_record(header)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_company_counts<W: Write>(inner: W, counts: &[CompanyCount]) -> Result<(), ScoutError> {
    write_rows(inner, &["company", "posts"], counts)
}

pub fn write_company_months<W: Write>(inner: W, months: &[CompanyMonth]) -> Result<(), ScoutError> {
    write_rows(inner, &["company", "month", "posts"], months)
}

/// The cross-search statistics table, plain UTF-8
pub fn write_statistics<W: Write>(inner: W, rows: &[SearchSummary]) -> Result<(), ScoutError> {
    let mut writer = Writer::from_writer(inner);
    writer.write_record(["country", "time_filter", "n_jobs"])?;
    for row in rows {
        writer.write_record([
            row.country.as_str(),
            row.time_filter.as_str(),
            row.n_jobs.to_string().as_str(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::Classifier;
    use crate::pipeline::RecordPipeline;
    use crate::results::RawJobRecord;
    use crate::taxonomy::Axis;
    use crate::tracker::RepostCounting;

    fn columns(classifier: &Classifier, include_description: bool) -> JobColumns {
        JobColumns {
            software: classifier.flag_labels(Axis::Software).iter().map(|s| s.to_string()).collect(),
            languages: classifier.flag_labels(Axis::Language).iter().map(|s| s.to_string()).collect(),
            include_description,
        }
    }

    fn as_text(bytes: Vec<u8>) -> String {
        assert!(bytes.starts_with(BOM));
        String::from_utf8(bytes[BOM.len()..].to_vec()).unwrap()
    }

    #[test]
    fn test_write_jobs() {
        let classifier = Classifier::builtin().unwrap();
        let job = classifier.classify(&RawJobRecord::new(
            "Ingénieur CFD",
            "Acme, Inc.",
            "Toulouse",
            "2024-01-05",
            "https://example.com/1",
            "OpenFOAM and Python",
        ));
        let columns = columns(&classifier, true);

        let mut out = Vec::new();
        write_jobs(&mut out, &columns, &[job]).unwrap();
        let text = as_text(out);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("title,company,location,date_posted,link,description,domain,application,OpenFOAM,"));
        assert!(lines[1].starts_with(
            "Ingénieur CFD,\"Acme, Inc.\",Toulouse,2024-01-05,https://example.com/1,OpenFOAM and Python,other,other,true,false,"
        ));
        assert_eq!(lines[0].split(',').count(), 8 + columns.software.len() + columns.languages.len());
    }

    #[test]
    fn test_write_jobs_without_description() {
        let classifier = Classifier::builtin().unwrap();
        let columns = columns(&classifier, false);

        let mut out = Vec::new();
        write_jobs(&mut out, &columns, &[]).unwrap();
        let text = as_text(out);

        assert!(text.starts_with("title,company,location,date_posted,link,domain,application,"));
        assert_eq!(text.lines().count(), 1);
    }

    #[test]
    fn test_write_reposts() {
        let classifier = Classifier::builtin().unwrap();
        let mut pipeline = RecordPipeline::new(&classifier, KeyPolicy::Split, RepostCounting::AcceptedOnly);
        pipeline.extend(vec![
            RawJobRecord::new("A", "Acme", "Paris", "2024-01-05", "", ""),
            RawJobRecord::new("B", "Acme", "Paris", "2024-01-05", "", ""),
        ]);
        let output = pipeline.finish();

        let mut out = Vec::new();
        write_reposts(&mut out, KeyPolicy::Split, &output.reposts).unwrap();
        assert_eq!(
            as_text(out),
            "company,date_posted,count,dates\nAcme,2024-01-05,2,2024-01-05;2024-01-05\n"
        );
    }

    #[test]
    fn test_write_reports() {
        let mut out = Vec::new();
        write_company_counts(
            &mut out,
            &[CompanyCount {
                company: "Acme".to_string(),
                posts: 4,
            }],
        )
        .unwrap();
        assert_eq!(as_text(out), "company,posts\nAcme,4\n");

        let mut out = Vec::new();
        write_company_counts(&mut out, &[]).unwrap();
        assert_eq!(as_text(out), "company,posts\n");

        let mut out = Vec::new();
        write_company_months(&mut out, &[]).unwrap();
        assert_eq!(as_text(out), "company,month,posts\n");

        let mut out = Vec::new();
        write_statistics(
            &mut out,
            &[SearchSummary {
                country: "France".to_string(),
                time_filter: "any".to_string(),
                n_jobs: 12,
            }],
        )
        .unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "country,time_filter,n_jobs\nFrance,any,12\n"
        );
    }
}
