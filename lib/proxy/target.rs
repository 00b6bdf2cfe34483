use crate::repo::RepoId;

/// Suffix identifying the merged firmware image among the release assets.
pub const FIRMWARE_ASSET_SUFFIX: &str = "keybot_merged.bin";

/**
    The repository and asset the proxy serves firmware from.
*/
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FirmwareTarget {
    pub repo: RepoId,
    pub asset_suffix: String,
}

impl FirmwareTarget {
    #[must_use]
    pub fn new(repo: RepoId, asset_suffix: impl Into<String>) -> Self {
        Self {
            repo,
            asset_suffix: asset_suffix.into(),
        }
    }
}

impl Default for FirmwareTarget {
    fn default() -> Self {
        Self::new(RepoId::default(), FIRMWARE_ASSET_SUFFIX)
    }
}
