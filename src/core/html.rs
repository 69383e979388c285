// src/core/html.rs
use scraper::{ElementRef, Html, Selector};

use super::sanitize::clean;
use crate::config::options::ParagraphBounds;

/// Paragraph texts of a page in document order, cleaned and length-filtered
/// with the default bounds.
pub fn extract(page: &str) -> Vec<String> {
    extract_with(page, ParagraphBounds::default())
}

/// Same as [`extract`] with caller-supplied bounds.
/// A page the parser cannot make sense of yields nothing, never an error.
pub fn extract_with(page: &str, bounds: ParagraphBounds) -> Vec<String> {
    let Ok(sel) = Selector::parse("p") else {
        return Vec::new();
    };
    let doc = Html::parse_document(page);
    doc.select(&sel)
        .map(paragraph_text)
        .filter(|t| bounds.accepts(t))
        .collect()
}

fn paragraph_text(p: ElementRef<'_>) -> String {
    clean(&p.text().collect::<String>())
}
