// src/cli.rs
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::config::consts::*;
use crate::config::options::{ExportFormat, RunOptions};
use crate::config::topics::load_topic_file;
use crate::data::{truncate_chars, ScoredRecord, Stats};
use crate::error::{FetchError, Result};
use crate::progress::Progress;

const RULE_WIDTH: usize = 80;

#[derive(Parser, Debug)]
#[command(
    name = "sport_corpus",
    version,
    about = "Scrape sports articles from Wikipedia into a relevance-scored paragraph dataset"
)]
pub struct Cli {
    /// Topic URL to scrape; repeat for several. Replaces the built-in topic list
    #[arg(short = 'u', long = "url", value_name = "URL")]
    pub url: Vec<String>,

    /// File with one topic URL per line (`#` starts a comment)
    #[arg(long = "urls", value_name = "FILE", conflicts_with = "url")]
    pub urls_file: Option<PathBuf>,

    /// Print the topic list that would be scraped and exit
    #[arg(long)]
    pub list_topics: bool,

    /// Directory the dataset is written to
    #[arg(short = 'o', long, default_value = DEFAULT_OUT_DIR)]
    pub out_dir: PathBuf,

    /// Filename prefix; the save timestamp is appended
    #[arg(long, default_value = DEFAULT_PREFIX)]
    pub prefix: String,

    #[arg(long, value_enum, default_value_t = Format::Csv)]
    pub format: Format,

    /// Pause after each URL, in milliseconds
    #[arg(long, default_value_t = REQUEST_PAUSE_MS)]
    pub delay_ms: u64,

    /// Per-request timeout, in seconds
    #[arg(long, default_value_t = REQUEST_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// How many top records to preview
    #[arg(long, default_value_t = PREVIEW_ROWS)]
    pub preview: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Csv,
    Tsv,
}

impl From<Format> for ExportFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Csv => ExportFormat::Csv,
            Format::Tsv => ExportFormat::Tsv,
        }
    }
}

impl Cli {
    pub fn into_options(self) -> Result<RunOptions> {
        let mut opts = RunOptions::default();

        if let Some(path) = &self.urls_file {
            opts.topics = load_topic_file(path)?;
        } else if !self.url.is_empty() {
            opts.topics = self.url;
        }

        opts.scrape.pause = Duration::from_millis(self.delay_ms);
        opts.scrape.timeout = Duration::from_secs(self.timeout_secs);
        opts.export.dir = self.out_dir;
        opts.export.prefix = self.prefix;
        opts.export.format = self.format.into();
        opts.preview_rows = self.preview;
        Ok(opts)
    }
}

pub fn run(cli: Cli) -> Result<()> {
    let list_only = cli.list_topics;
    let opts = cli.into_options()?;

    if list_only {
        for url in &opts.topics {
            println!("{url}");
        }
        return Ok(());
    }

    let mut console = ConsoleProgress::default();
    crate::runner::run(&opts, Some(&mut console)).map(|_| ())
}

/* ---------------- Console frontend ---------------- */

/// Prints progress, preview and statistics to stdout.
#[derive(Default)]
pub struct ConsoleProgress {
    total: usize,
    seen: usize,
}

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        println!("Collecting data from Wikipedia...");
        println!("{}", rule());
    }

    fn fetching(&mut self, url: &str) {
        self.seen += 1;
        println!("[{}/{}] Scraping: {url}", self.seen, self.total);
    }

    fn item_done(&mut self, url: &str, paragraphs: usize) {
        println!("✓ Scraped {paragraphs} paragraphs from {url}");
    }

    fn item_failed(&mut self, url: &str, err: &FetchError) {
        println!("Error scraping {url}: {err}");
    }

    fn collected(&mut self, total: usize) {
        println!("\n{}", rule());
        println!("Collected {total} texts from Wikipedia");
    }

    fn preview(&mut self, top: &[ScoredRecord]) {
        println!("\n{}", rule());
        println!("Dataset Preview");
        println!("{}", rule());
        for (i, r) in top.iter().enumerate() {
            println!("\nText {} | Score: {}", i + 1, r.score_cell());
            println!("{}...", truncate_chars(&r.text, PREVIEW_CHARS));
            println!("{}", "-".repeat(RULE_WIDTH));
        }
    }

    fn saved(&mut self, path: &Path) {
        println!("\n✓ Dataset saved to: {}", path.display());
    }

    fn summary(&mut self, stats: &Stats) {
        let num = |v: Option<f64>| v.map_or_else(|| s!("-"), |x| format!("{x:.1}"));
        println!("\nDataset Statistics:");
        println!("Total texts: {}", stats.total);
        println!(
            "Average score: {}",
            stats.mean.map_or_else(|| s!("-"), |m| format!("{m:.2}"))
        );
        println!("Min score: {}", num(stats.min));
        println!("Max score: {}", num(stats.max));

        println!("\nScore Distribution:");
        for (band, count) in &stats.bands {
            println!("  {}: {count} texts", band.label());
        }
    }
}
