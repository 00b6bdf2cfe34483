use reqwest::StatusCode;
use thiserror::Error;

use crate::sources::github::GithubError;

#[derive(Debug, Error)]
pub enum ProxyError {
    #[error("no asset ending with '{suffix}' found in the latest release")]
    AssetNotFound { suffix: String },
    #[error("firmware download from '{url}' returned status {status}")]
    DownloadFailed { url: String, status: StatusCode },
    #[error("GitHub error: {0}")]
    GitHub(#[from] GithubError),
}

impl ProxyError {
    /**
        The status code reported to the caller for this error.
    */
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::AssetNotFound { .. } => StatusCode::NOT_FOUND,
            Self::DownloadFailed { .. } => StatusCode::BAD_GATEWAY,
            Self::GitHub(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /**
        The message reported to the caller for this error.

        Never contains any details beyond the kind of error,
        those are only written to the logs.
    */
    #[must_use]
    pub fn public_message(&self) -> &'static str {
        match self {
            Self::AssetNotFound { .. } => "No .bin file found in the latest release.",
            Self::DownloadFailed { .. } => "Failed to download firmware file from GitHub.",
            Self::GitHub(_) => "An internal error occurred.",
        }
    }
}

pub type ProxyResult<T> = Result<T, ProxyError>;
