// src/config/options.rs
use std::path::PathBuf;
use std::time::Duration;

use super::consts::*;
use super::topics::default_topics;
use crate::core::score::KeywordSet;

#[derive(Clone, Debug, PartialEq)]
pub struct RunOptions {
    pub topics: Vec<String>,
    pub scrape: ScrapeOptions,
    pub export: ExportOptions,
    pub keywords: KeywordSet,
    /// How many top records the preview shows.
    pub preview_rows: usize,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            topics: default_topics(),
            scrape: ScrapeOptions::default(),
            export: ExportOptions::default(),
            keywords: KeywordSet::default(),
            preview_rows: PREVIEW_ROWS,
        }
    }
}

/// Exclusive character bounds for a kept paragraph.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParagraphBounds {
    pub min_chars: usize,
    pub max_chars: usize,
}

impl Default for ParagraphBounds {
    fn default() -> Self {
        Self { min_chars: MIN_PARAGRAPH_CHARS, max_chars: MAX_PARAGRAPH_CHARS }
    }
}

impl ParagraphBounds {
    pub fn accepts(&self, text: &str) -> bool {
        let n = text.chars().count();
        n > self.min_chars && n < self.max_chars
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    pub timeout: Duration,
    /// Pause after every URL, success or not.
    pub pause: Duration,
    pub user_agent: String,
    pub bounds: ParagraphBounds,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
            pause: Duration::from_millis(REQUEST_PAUSE_MS),
            user_agent: s!(USER_AGENT),
            bounds: ParagraphBounds::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> char {
        match self { ExportFormat::Csv => ',', ExportFormat::Tsv => '\t' }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub dir: PathBuf,
    /// Filename stem before the timestamp.
    pub prefix: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            prefix: s!(DEFAULT_PREFIX),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_exclusive() {
        let b = ParagraphBounds::default();
        assert!(!b.accepts(&"a".repeat(80)));
        assert!(b.accepts(&"a".repeat(81)));
        assert!(b.accepts(&"a".repeat(999)));
        assert!(!b.accepts(&"a".repeat(1000)));
    }

    #[test]
    fn bounds_count_chars_not_bytes() {
        // 81 Arabic letters are 162 bytes
        assert!(ParagraphBounds::default().accepts(&"ك".repeat(81)));
        assert!(!ParagraphBounds::default().accepts(&"ك".repeat(80)));
    }

    #[test]
    fn format_ext_and_delim() {
        assert_eq!(ExportFormat::Csv.ext(), "csv");
        assert_eq!(ExportFormat::Tsv.delim(), '\t');
    }
}
