#![allow(clippy::missing_errors_doc)]

use tracing::{debug, instrument};
use url::Url;

use crate::repo::RepoId;

use super::{FetchResponse, Fetcher};

const BASE_URL: &str = "https://api.github.com";

const ACCEPT_JSON: &str = "application/vnd.github+json";
const ACCEPT_BINARY: &str = "application/octet-stream";

pub mod models;
mod result;

use self::models::{GithubAsset, GithubRelease};

pub use self::result::{GithubError, GithubResult};

/**
    Builds the URL for the latest release of the given repository.
*/
pub fn latest_release_url(repo: &RepoId) -> GithubResult<Url> {
    let url = format!(
        "{BASE_URL}/repos/{owner}/{name}/releases/latest",
        owner = repo.owner(),
        name = repo.name(),
    );
    Ok(Url::parse(&url)?)
}

#[derive(Debug, Clone)]
pub struct GithubProvider<F> {
    fetcher: F,
}

impl<F: Fetcher> GithubProvider<F> {
    /**
        Creates a new GitHub provider issuing requests through the given fetcher.
    */
    pub fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /**
        Fetches the latest release for a given repository.
    */
    #[instrument(skip(self), fields(%repo), level = "debug")]
    pub async fn get_latest_release(&self, repo: &RepoId) -> GithubResult<GithubRelease> {
        debug!(%repo, "fetching latest release");

        let url = latest_release_url(repo)?;
        let response = self.fetcher.get(&url, ACCEPT_JSON).await?;
        if !response.is_success() {
            return Err(GithubError::ReleaseStatus {
                repo: repo.clone(),
                status: response.status,
            });
        }

        let release: GithubRelease = response.json()?;
        debug!(
            tag = release.tag_name.as_deref().unwrap_or("<none>"),
            assets = release.assets.len(),
            "found latest release"
        );

        Ok(release)
    }

    /**
        Downloads the contents of the given release asset.

        The response is returned regardless of its status,
        callers decide how to treat an unsuccessful download.
    */
    #[instrument(skip(self, asset), fields(name = %asset.name), level = "debug")]
    pub async fn download_asset(&self, asset: &GithubAsset) -> GithubResult<FetchResponse> {
        let url = asset.download_url()?;
        debug!(%url, "downloading asset contents");
        self.fetcher.get(&url, ACCEPT_BINARY).await
    }
}
