// src/error.rs
use std::io;

/// Why a single topic page could not be fetched. Always recovered per URL.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("status {status} from {url}")]
    Status { url: String, status: u16 },
}

/// Run-level failures. Anything here aborts the run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("could not build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("configuration: {0}")]
    Config(String),

    #[error("could not write dataset: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
