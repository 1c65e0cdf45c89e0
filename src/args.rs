use clap::{Args as ClapArgs, Parser, Subcommand};
use job_scout::search::TimeFilter;
use job_scout::{KeyPolicy, RepostCounting, SearchConfig};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "job-scout")]
#[command(about = "Deduplicates and tags scraped job listings")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Classify saved result pages and write CSV exports
    Run(RunArgs),
    /// Print the result page URLs of a search
    Urls(SearchArgs),
    /// Print the built-in taxonomy as JSON
    Taxonomy,
}

#[derive(ClapArgs, Debug)]
pub struct SearchArgs {
    /// Search keywords
    #[arg(short, long, default_value = "cfd")]
    pub keywords: String,

    /// Search location
    #[arg(short, long, default_value = "France")]
    pub location: String,

    /// Posting age filter
    #[arg(short, long, value_enum, default_value_t = TimeFilter::Any)]
    pub time_filter: TimeFilter,

    /// Number of result pages
    #[arg(short, long, default_value_t = 50)]
    pub pages: usize,
}

#[derive(ClapArgs, Debug)]
pub struct RunArgs {
    /// Saved result pages (.html) or record dumps (.json), files or directories
    pub inputs: Vec<PathBuf>,

    /// Path to a JSON configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// JSON taxonomy replacing the built-in one
    #[arg(long)]
    pub taxonomy: Option<PathBuf>,

    /// Override the identity/grouping policy
    #[arg(long, value_enum)]
    pub key_policy: Option<KeyPolicy>,

    /// Override whether duplicates count towards repost groups
    #[arg(long, value_enum)]
    pub repost_counting: Option<RepostCounting>,

    /// Override the fuzzy match threshold (0-100)
    #[arg(long)]
    pub threshold: Option<f64>,

    /// Override the output directory
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub search: SearchArgs,
}

impl SearchArgs {
    pub fn search_config(&self) -> SearchConfig {
        let mut search = SearchConfig::new(&self.location, self.time_filter);
        search.keywords = self.keywords.clone();
        search.max_pages = self.pages;
        search
    }
}

impl RunArgs {
    /// The search described by the positional inputs, if any were given
    pub fn search_config(&self) -> Option<SearchConfig> {
        if self.inputs.is_empty() {
            return None;
        }
        let mut search = self.search.search_config();
        search.inputs = self.inputs.clone();
        Some(search)
    }
}
