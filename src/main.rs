use clap::Parser;
use job_scout::{Scout, Taxonomy};
use std::error::Error;

mod args;
use args::{Args, Command, RunArgs, SearchArgs};

fn main() -> Result<(), Box<dyn Error>> {
    // Initialize logging
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();

    let result = match args.command {
        Command::Run(run_args) => run(run_args),
        Command::Urls(search) => print_urls(&search),
        Command::Taxonomy => print_taxonomy(),
    };

    if let Err(e) = &result {
        ::log::error!("{}", e);
    }
    result
}

fn run(args: RunArgs) -> Result<(), Box<dyn Error>> {
    let mut scout = Scout::new();
    if let Some(path) = &args.config {
        ::log::info!("Loading configuration from {}", path.display());
        scout = scout.with_config_file(path)?;
    }

    // Apply overrides if specified
    if let Some(path) = &args.taxonomy {
        scout = scout.with_taxonomy_file(path);
    }
    if let Some(policy) = args.key_policy {
        scout = scout.with_key_policy(policy);
    }
    if let Some(counting) = args.repost_counting {
        scout = scout.with_repost_counting(counting);
    }
    if let Some(threshold) = args.threshold {
        scout = scout.with_fuzzy_threshold(threshold);
    }
    if let Some(dir) = &args.output {
        scout = scout.with_output_dir(dir);
    }

    let mut config = scout.config().clone();
    if let Some(search) = args.search_config() {
        config.searches.push(search);
    }
    let session = scout.with_config(config).build()?;

    let start_time = std::time::Instant::now();
    let summaries = session.run_all()?;

    for summary in &summaries {
        println!(
            "Kept {} job postings in {} with time filter {}",
            summary.n_jobs, summary.country, summary.time_filter
        );
    }
    ::log::info!(
        "Processing complete - {} searches in {:.2} seconds",
        summaries.len(),
        start_time.elapsed().as_secs_f64()
    );

    Ok(())
}

fn print_urls(args: &SearchArgs) -> Result<(), Box<dyn Error>> {
    let search = args.search_config();
    for url in search.query().page_urls(search.max_pages) {
        println!("{}", url);
    }
    Ok(())
}

fn print_taxonomy() -> Result<(), Box<dyn Error>> {
    println!("{}", serde_json::to_string_pretty(&Taxonomy::builtin())?);
    Ok(())
}
