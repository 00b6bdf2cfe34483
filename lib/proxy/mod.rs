use tracing::{debug, error, instrument};

use crate::{
    result::{ProxyError, ProxyResult},
    sources::{Fetcher, HttpFetcher, github::GithubProvider},
};

mod response;
mod target;

pub use self::response::{CONTENT_TYPE_BINARY, CONTENT_TYPE_JSON, FunctionResponse, error_body};
pub use self::target::{FIRMWARE_ASSET_SUFFIX, FirmwareTarget};

/**
    Serves the latest firmware image published in a GitHub repository.

    Holds no state between invocations, every call fetches the
    latest release and the firmware asset from GitHub again.
*/
#[derive(Debug, Clone)]
pub struct FirmwareProxy<F = HttpFetcher> {
    github: GithubProvider<F>,
    target: FirmwareTarget,
}

impl FirmwareProxy<HttpFetcher> {
    /**
        Creates a proxy for the default firmware target, using a real HTTP client.

        # Errors

        - If the HTTP client could not be created.
    */
    pub fn new() -> ProxyResult<Self> {
        Self::new_with_target(FirmwareTarget::default())
    }

    /**
        Creates a proxy for the given firmware target, using a real HTTP client.

        # Errors

        - If the HTTP client could not be created.
    */
    pub fn new_with_target(target: FirmwareTarget) -> ProxyResult<Self> {
        let fetcher = HttpFetcher::new()?;
        Ok(Self::with_fetcher(fetcher, target))
    }
}

impl<F: Fetcher> FirmwareProxy<F> {
    pub fn with_fetcher(fetcher: F, target: FirmwareTarget) -> Self {
        Self {
            github: GithubProvider::new(fetcher),
            target,
        }
    }

    pub fn target(&self) -> &FirmwareTarget {
        &self.target
    }

    pub fn fetcher(&self) -> &F {
        self.github.fetcher()
    }

    /**
        Fetches the raw contents of the latest firmware image.

        # Errors

        - If the latest release has no asset matching the target suffix.
        - If downloading the asset returned an unsuccessful status.
        - If any request failed, or the release metadata was malformed.
    */
    #[instrument(skip(self), fields(repo = %self.target.repo), level = "debug")]
    pub async fn fetch_firmware(&self) -> ProxyResult<Vec<u8>> {
        let release = self.github.get_latest_release(&self.target.repo).await?;

        let suffix = self.target.asset_suffix.as_str();
        let Some(asset) = release.find_asset_with_suffix(suffix) else {
            return Err(ProxyError::AssetNotFound {
                suffix: suffix.to_string(),
            });
        };
        debug!(name = %asset.name, "selected firmware asset");

        let response = self.github.download_asset(asset).await?;
        if !response.is_success() {
            return Err(ProxyError::DownloadFailed {
                url: asset.browser_download_url.clone(),
                status: response.status,
            });
        }

        debug!(len = response.body.len(), "downloaded firmware");
        Ok(response.body)
    }

    /**
        Handles a single invocation, producing the function response.

        Never fails, errors are logged and turned into error responses.
    */
    pub async fn handle(&self) -> FunctionResponse {
        match self.fetch_firmware().await {
            Ok(contents) => FunctionResponse::firmware(&contents),
            Err(e) => {
                error!("{e}");
                FunctionResponse::error(&e)
            }
        }
    }
}
