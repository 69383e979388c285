// src/scrape.rs
use std::thread;

use tracing::{debug, info, warn};

use crate::{
    config::options::ScrapeOptions,
    core::{html, net::Fetcher},
    progress::Progress,
};

/// Paragraphs gathered over one pass of the topic list.
#[derive(Debug, Default)]
pub struct Collected {
    /// URL list order, then document order within each page.
    pub paragraphs: Vec<String>,
    /// URLs skipped because the fetch failed.
    pub failed: Vec<String>,
}

/// Visit every URL in order, one at a time. A failed fetch is reported and
/// skipped; it never stops the pass. Sleeps `opts.pause` after every URL.
pub fn collect_paragraphs(
    urls: &[String],
    fetcher: &dyn Fetcher,
    opts: &ScrapeOptions,
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Collected {
    let mut out = Collected::default();

    if let Some(p) = progress.as_deref_mut() {
        p.begin(urls.len());
    }

    for url in urls {
        if let Some(p) = progress.as_deref_mut() {
            p.fetching(url);
        }

        match fetcher.fetch(url) {
            Ok(page) => {
                let found = html::extract_with(&page, opts.bounds);
                debug!(url = %url, bytes = page.len(), kept = found.len(), "extracted");
                info!(url = %url, paragraphs = found.len(), "scraped");
                if let Some(p) = progress.as_deref_mut() {
                    p.item_done(url, found.len());
                }
                out.paragraphs.extend(found);
            }
            Err(e) => {
                warn!(url = %url, error = %e, "fetch failed, skipping");
                if let Some(p) = progress.as_deref_mut() {
                    p.item_failed(url, &e);
                }
                out.failed.push(url.clone());
            }
        }

        if !opts.pause.is_zero() {
            thread::sleep(opts.pause); // be polite
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.collected(out.paragraphs.len());
    }
    out
}
