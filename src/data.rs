// src/data.rs
//
// Scored dataset and the numbers reported about it.
//
// - ScoredRecord: one (text, score) row, immutable once built.
// - DataSet: records sorted by score, highest first. Ties keep input order.
// - Stats: count, mean/min/max and a five-band histogram.

use crate::core::score::{score, KeywordSet};

#[derive(Clone, Debug, PartialEq)]
pub struct ScoredRecord {
    pub text: String,
    pub score: f64,
}

impl ScoredRecord {
    pub fn new(text: String, keywords: &KeywordSet) -> Self {
        let score = score(&text, keywords);
        Self { text, score }
    }

    /// As written to the score column.
    pub fn score_cell(&self) -> String {
        format!("{:.1}", self.score)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DataSet {
    records: Vec<ScoredRecord>,
}

impl DataSet {
    /// Score paragraphs in order, then sort.
    pub fn from_paragraphs(paragraphs: Vec<String>, keywords: &KeywordSet) -> Self {
        let records = paragraphs
            .into_iter()
            .map(|t| ScoredRecord::new(t, keywords))
            .collect();
        Self::from_records(records)
    }

    /// Stable sort, descending by score.
    pub fn from_records(mut records: Vec<ScoredRecord>) -> Self {
        records.sort_by(|a, b| b.score.total_cmp(&a.score));
        Self { records }
    }

    pub fn records(&self) -> &[ScoredRecord] { &self.records }
    pub fn len(&self) -> usize { self.records.len() }
    pub fn is_empty(&self) -> bool { self.records.is_empty() }

    pub fn top(&self, n: usize) -> &[ScoredRecord] {
        &self.records[..n.min(self.records.len())]
    }

    pub fn stats(&self) -> Stats {
        Stats::of(&self.records)
    }
}

/// Half-open `[lo, hi)` unless `closed` is set, then `[lo, hi]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScoreBand {
    pub lo: f64,
    pub hi: f64,
    pub closed: bool,
}

impl ScoreBand {
    pub fn contains(&self, v: f64) -> bool {
        v >= self.lo && (v < self.hi || (self.closed && v == self.hi))
    }

    pub fn label(&self) -> String {
        format!("{}-{}", self.lo, self.hi)
    }
}

/// The top band includes 10 so every score in `[0, 10]` lands in exactly one band.
pub const SCORE_BANDS: [ScoreBand; 5] = [
    ScoreBand { lo: 0.0, hi: 2.0, closed: false },
    ScoreBand { lo: 2.0, hi: 4.0, closed: false },
    ScoreBand { lo: 4.0, hi: 6.0, closed: false },
    ScoreBand { lo: 6.0, hi: 8.0, closed: false },
    ScoreBand { lo: 8.0, hi: 10.0, closed: true },
];

#[derive(Clone, Debug, PartialEq)]
pub struct Stats {
    pub total: usize,
    pub mean: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub bands: Vec<(ScoreBand, usize)>,
}

impl Stats {
    pub fn of(records: &[ScoredRecord]) -> Self {
        let total = records.len();
        let scores = || records.iter().map(|r| r.score);

        let (mean, min, max) = if total == 0 {
            (None, None, None)
        } else {
            let sum: f64 = scores().sum();
            (
                Some(sum / total as f64),
                scores().reduce(f64::min),
                scores().reduce(f64::max),
            )
        };

        let bands = SCORE_BANDS
            .iter()
            .map(|b| (*b, scores().filter(|s| b.contains(*s)).count()))
            .collect();

        Self { total, mean, min, max, bands }
    }

    pub fn banded(&self) -> usize {
        self.bands.iter().map(|(_, n)| n).sum()
    }
}

/// First `max` chars of `s`, on a char boundary.
pub fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((i, _)) => &s[..i],
        None => s,
    }
}
