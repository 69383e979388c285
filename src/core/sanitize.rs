// src/core/sanitize.rs
use once_cell::sync::Lazy;
use regex::Regex;

static REF_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[\d+\]").expect("reference marker pattern"));

/// Collapse sequences of whitespace into a single space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Remove citation markers like `[12]`. Other bracketed text is left alone.
pub fn strip_ref_markers(s: &str) -> String {
    REF_MARKER.replace_all(s, "").into_owned()
}

/// Paragraph cleaning: markers out, whitespace collapsed, ends trimmed.
pub fn clean(raw: &str) -> String {
    normalize_ws(&strip_ref_markers(raw))
}
