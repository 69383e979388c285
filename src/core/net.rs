// src/core/net.rs
// Blocking HTTP GET. One request at a time, no retries.

use reqwest::blocking::Client;
use reqwest::header;

use crate::config::options::ScrapeOptions;
use crate::error::{Error, FetchError};

/// Anything that can turn a URL into page text.
pub trait Fetcher {
    fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(opts: &ScrapeOptions) -> Result<Self, Error> {
        let client = Client::builder()
            .timeout(opts.timeout)
            .user_agent(opts.user_agent.as_str())
            .build()
            .map_err(Error::Client)?;
        Ok(Self { client })
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let resp = self
            .client
            .get(url)
            .header(header::ACCEPT, "text/html")
            .send()?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status { url: s!(url), status: status.as_u16() });
        }

        // Wikipedia serves UTF-8; decode as such regardless of headers.
        let bytes = resp.bytes()?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}
