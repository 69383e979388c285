// src/runner.rs
use std::path::PathBuf;

use tracing::info;

use crate::{
    config::options::RunOptions,
    core::net::{Fetcher, HttpFetcher},
    data::{DataSet, Stats},
    error::{Error, Result},
    file::{self, Clock},
    progress::Progress,
    scrape,
};

/// Summary of what was produced.
#[derive(Debug)]
pub struct RunSummary {
    pub path: PathBuf,
    pub dataset: DataSet,
    pub stats: Stats,
    pub failed: Vec<String>,
}

/// Full run with the real HTTP client and the local clock.
pub fn run(opts: &RunOptions, progress: Option<&mut (dyn Progress + '_)>) -> Result<RunSummary> {
    let fetcher = HttpFetcher::new(&opts.scrape)?;
    run_with(opts, &fetcher, &file::SystemClock, progress)
}

/// Fetch → extract → score → sort → report → save.
/// Only a failure to save ends the run with an error.
pub fn run_with(
    opts: &RunOptions,
    fetcher: &dyn Fetcher,
    clock: &dyn Clock,
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Result<RunSummary> {
    if opts.topics.is_empty() {
        return Err(Error::Config(s!("no topic URLs to scrape")));
    }

    let collected = scrape::collect_paragraphs(
        &opts.topics,
        fetcher,
        &opts.scrape,
        progress.as_deref_mut(),
    );

    let dataset = DataSet::from_paragraphs(collected.paragraphs, &opts.keywords);
    let stats = dataset.stats();

    if let Some(p) = progress.as_deref_mut() {
        p.preview(dataset.top(opts.preview_rows));
    }

    let saved = file::save_dataset(&opts.export, &dataset, clock);
    let path = match saved {
        Ok(path) => path,
        Err(e) => {
            if let Some(p) = progress.as_deref_mut() {
                p.finish();
            }
            return Err(e.into());
        }
    };
    info!(path = %path.display(), records = dataset.len(), "dataset saved");

    if let Some(p) = progress.as_deref_mut() {
        p.saved(&path);
        p.summary(&stats);
        p.finish();
    }

    Ok(RunSummary { path, dataset, stats, failed: collected.failed })
}
