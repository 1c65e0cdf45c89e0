use crate::classifier::Classifier;
use crate::config::{ScoutConfig, SearchConfig};
use crate::errors::ScoutError;
use crate::export::{self, JobColumns, SearchSummary};
use crate::pipeline::{PipelineOutput, RecordPipeline};
use crate::report;
use crate::sources::{FileSource, RecordSource};
use crate::taxonomy::Axis;
use crate::utils::search_file_name;
use std::path::PathBuf;

/// File name of the cross-search statistics table
pub const STATISTICS_FILE: &str = "job_statistics.csv";

/// Result of one search
#[derive(Debug)]
pub struct SearchOutcome {
    pub summary: SearchSummary,
    pub output: PipelineOutput,
    /// Files written for this search
    pub files: Vec<PathBuf>,
}

/// A configured classifier plus the settings runs are made with
#[derive(Debug)]
pub struct Session {
    config: ScoutConfig,
    classifier: Classifier,
}

impl Session {
    pub fn new(config: ScoutConfig, classifier: Classifier) -> Self {
        Self { config, classifier }
    }

    pub fn config(&self) -> &ScoutConfig {
        &self.config
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    /// A fresh run with this session's policies
    pub fn pipeline(&self) -> RecordPipeline<'_> {
        RecordPipeline::new(
            &self.classifier,
            self.config.key_policy,
            self.config.repost_counting,
        )
    }

    /// Drain a source through a fresh pipeline
    pub fn run<S: RecordSource + ?Sized>(&self, source: &mut S) -> PipelineOutput {
        let mut pipeline = self.pipeline();
        let mut page = 0;

        while let Some(records) = source.next_page() {
            let count = records.len();
            let accepted = pipeline.extend(records);
            ::log::info!(
                "{}: page {} gave {} records, {} new",
                source.name(),
                page,
                count,
                accepted
            );
            page += 1;
        }

        pipeline.finish()
    }

    /// Column layout of the job export for this taxonomy
    pub fn job_columns(&self) -> JobColumns {
        let owned = |axis| {
            self.classifier
                .flag_labels(axis)
                .into_iter()
                .map(String::from)
                .collect::<Vec<_>>()
        };
        JobColumns {
            software: owned(Axis::Software),
            languages: owned(Axis::Language),
            include_description: self.config.include_description,
        }
    }

    /// Run one search from its saved inputs and write its exports
    pub fn run_search(&self, search: &SearchConfig) -> Result<SearchOutcome, ScoutError> {
        let name = format!("{}/{}", search.location, search.time_filter.name());
        ::log::info!("Starting search '{}' for '{}'", name, search.keywords);

        ::log::debug!(
            "Expecting up to {} saved pages, starting from {}",
            search.max_pages,
            search.query().page_url(0)
        );

        let mut source = FileSource::new(&name, &search.inputs)?.with_max_pages(search.max_pages);
        let output = self.run(&mut source);
        let files = self.export(search, &output)?;

        let summary = SearchSummary {
            country: search.location.clone(),
            time_filter: search.time_filter.name().to_string(),
            n_jobs: output.jobs.len(),
        };
        ::log::info!(
            "Kept {} job postings for '{}'",
            summary.n_jobs,
            name
        );

        Ok(SearchOutcome {
            summary,
            output,
            files,
        })
    }

    /// Write the job table, repost groups and company reports of one search
    pub fn export(&self, search: &SearchConfig, output: &PipelineOutput) -> Result<Vec<PathBuf>, ScoutError> {
        let path = |kind: &str| {
            self.config
                .output_dir
                .join(search_file_name(kind, &search.location, search.time_filter))
        };

        let jobs_path = path("jobs");
        export::write_jobs(export::create_file(&jobs_path)?, &self.job_columns(), &output.jobs)?;

        let reposts_path = path("reposts");
        export::write_reposts(
            export::create_file(&reposts_path)?,
            self.config.key_policy,
            &output.reposts,
        )?;

        let companies_path = path("companies");
        let counts = report::company_post_counts(&output.jobs, self.config.top_companies);
        export::write_company_counts(export::create_file(&companies_path)?, &counts)?;

        let months_path = path("company_months");
        let months = report::company_posts_per_month(&output.reposts);
        export::write_company_months(export::create_file(&months_path)?, &months)?;

        let files = vec![jobs_path, reposts_path, companies_path, months_path];
        for file in &files {
            ::log::info!("Wrote {}", file.display());
        }
        Ok(files)
    }

    /// Run every configured search, then write the statistics table
    ///
    /// Each search is its own run: identities seen in one search do not
    /// suppress listings of another.
    pub fn run_all(&self) -> Result<Vec<SearchSummary>, ScoutError> {
        if self.config.searches.is_empty() {
            return Err(ScoutError::Configuration("no searches configured".to_string()));
        }

        let mut summaries = Vec::with_capacity(self.config.searches.len());
        for search in &self.config.searches {
            summaries.push(self.run_search(search)?.summary);
        }

        let path = self.config.output_dir.join(STATISTICS_FILE);
        export::write_statistics(export::create_file(&path)?, &summaries)?;
        ::log::info!("Aggregated statistics saved to {}", path.display());

        Ok(summaries)
    }
}
