use reqwest::StatusCode;
use thiserror::Error;

use crate::repo::RepoId;

#[derive(Debug, Error)]
pub enum GithubError {
    #[error("latest release request for '{repo}' returned status {status}")]
    ReleaseStatus { repo: RepoId, status: StatusCode },
    #[error("reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),
    #[error("reqwest middleware error: {0}")]
    ReqwestMiddleware(#[from] reqwest_middleware::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),
    #[error("other error: {0}")]
    Other(String),
}

pub type GithubResult<T> = Result<T, GithubError>;
