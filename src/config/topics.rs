// src/config/topics.rs
use std::{fs, path::Path};

use crate::error::{Error, Result};

/// Arabic Wikipedia sports pages scraped when no list is supplied.
pub const DEFAULT_TOPICS: &[&str] = &[
    // Football
    "https://ar.wikipedia.org/wiki/كرة_القدم",
    "https://ar.wikipedia.org/wiki/كأس_العالم_لكرة_القدم",
    "https://ar.wikipedia.org/wiki/دوري_أبطال_أوروبا",
    "https://ar.wikipedia.org/wiki/رونالدو",
    "https://ar.wikipedia.org/wiki/ميسي",
    // Basketball
    "https://ar.wikipedia.org/wiki/كرة_السلة",
    "https://ar.wikipedia.org/wiki/NBA",
    // Volleyball
    "https://ar.wikipedia.org/wiki/كرة_الطائرة",
    // Tennis
    "https://ar.wikipedia.org/wiki/كرة_المضرب",
    // Swimming
    "https://ar.wikipedia.org/wiki/السباحة",
    // Track and field
    "https://ar.wikipedia.org/wiki/ألعاب_القوى",
    // Olympics
    "https://ar.wikipedia.org/wiki/الألعاب_الأولمبية",
    // Leagues
    "https://ar.wikipedia.org/wiki/الدوري_الإسباني",
    "https://ar.wikipedia.org/wiki/الدوري_الإيطالي",
    "https://ar.wikipedia.org/wiki/الدوري_الإنجليزي_الممتاز",
];

pub fn default_topics() -> Vec<String> {
    DEFAULT_TOPICS.iter().map(|u| s!(*u)).collect()
}

/// One URL per line. Blank lines and `#` comments are skipped.
pub fn parse_topic_list(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .map(String::from)
        .collect()
}

pub fn load_topic_file(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path)
        .map_err(|e| Error::Config(format!("cannot read {}: {e}", path.display())))?;
    let topics = parse_topic_list(&text);
    if topics.is_empty() {
        return Err(Error::Config(format!("no URLs in {}", path.display())));
    }
    Ok(topics)
}
