use std::path::PathBuf;
use thiserror::Error;

/// Everything that can stop an acquisition run.
///
/// Each variant is logged where it occurs; callers only need to decide
/// whether the run succeeded.
#[derive(Debug, Error)]
pub enum AcquireError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("error fetching {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("error extracting comic data: {0}")]
    Extraction(String),

    #[error("error downloading image from {url}: {source}")]
    Download {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("error saving {}: {source}", .path.display())]
    Persistence {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl AcquireError {
    pub(crate) fn persistence(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Persistence {
            path: path.into(),
            source,
        }
    }
}
