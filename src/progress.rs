// src/progress.rs
use std::path::Path;

use crate::data::{ScoredRecord, Stats};
use crate::error::FetchError;

/// Operator-facing reporting for a run.
/// Frontends implement this to surface status; the pipeline itself never prints.
pub trait Progress {
    /// Called at the start with the number of topic URLs.
    fn begin(&mut self, _total: usize) {}

    /// A fetch is about to start.
    fn fetching(&mut self, _url: &str) {}

    /// One URL produced `paragraphs` kept paragraphs (possibly zero).
    fn item_done(&mut self, _url: &str, _paragraphs: usize) {}

    /// One URL could not be fetched and was skipped.
    fn item_failed(&mut self, _url: &str, _err: &FetchError) {}

    /// All URLs visited; `total` paragraphs collected.
    fn collected(&mut self, _total: usize) {}

    /// Highest-scoring records, already sorted.
    fn preview(&mut self, _top: &[ScoredRecord]) {}

    fn saved(&mut self, _path: &Path) {}

    fn summary(&mut self, _stats: &Stats) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
