use serde::Deserialize;
use url::Url;

use super::GithubResult;

#[derive(Debug, Clone, Deserialize)]
pub struct GithubRelease {
    pub assets: Vec<GithubAsset>,
    #[serde(default)]
    pub tag_name: Option<String>,
}

impl GithubRelease {
    /**
        Finds the first asset, in the order GitHub listed them,
        whose name ends with the given suffix.
    */
    #[must_use]
    pub fn find_asset_with_suffix(&self, suffix: &str) -> Option<&GithubAsset> {
        self.assets.iter().find(|asset| asset.name.ends_with(suffix))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GithubAsset {
    pub name: String,
    pub browser_download_url: String,
}

impl GithubAsset {
    /**
        Parses the download URL of the asset.

        Only checked once an asset is actually downloaded, so a broken
        URL on some other asset in the release never matters.
    */
    pub fn download_url(&self) -> GithubResult<Url> {
        Ok(Url::parse(&self.browser_download_url)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SUFFIX: &str = "keybot_merged.bin";

    fn asset(name: &str) -> GithubAsset {
        GithubAsset {
            name: name.to_string(),
            browser_download_url: format!("https://example.com/{name}"),
        }
    }

    fn release(names: &[&str]) -> GithubRelease {
        GithubRelease {
            assets: names.iter().map(|name| asset(name)).collect(),
            tag_name: None,
        }
    }

    #[test]
    fn find_asset_no_match() {
        assert!(release(&[]).find_asset_with_suffix(SUFFIX).is_none());
        assert!(
            release(&["keybot.elf", "keybot_merged.bin.sha256", "KEYBOT_MERGED.BIN"])
                .find_asset_with_suffix(SUFFIX)
                .is_none()
        );
    }

    #[test]
    fn find_asset_single_match() {
        let release = release(&["keybot.elf", "v1.2-keybot_merged.bin", "notes.txt"]);
        let found = release.find_asset_with_suffix(SUFFIX).unwrap();
        assert_eq!(found.name, "v1.2-keybot_merged.bin");
    }

    #[test]
    fn find_asset_first_match_wins() {
        let release = release(&[
            "bootloader.bin",
            "esp32s3-keybot_merged.bin",
            "keybot_merged.bin",
        ]);
        let found = release.find_asset_with_suffix(SUFFIX).unwrap();
        assert_eq!(found.name, "esp32s3-keybot_merged.bin");
        assert_eq!(
            found.browser_download_url,
            "https://example.com/esp32s3-keybot_merged.bin"
        );
    }

    #[test]
    fn deserialize_github_payload() {
        // Unknown fields from the real API are ignored
        let json = r#"{
            "tag_name": "v0.4.0",
            "prerelease": false,
            "assets": [
                {
                    "id": 1,
                    "name": "keybot_merged.bin",
                    "size": 1024,
                    "browser_download_url": "https://github.com/albal/keybot/releases/download/v0.4.0/keybot_merged.bin"
                }
            ]
        }"#;
        let release: GithubRelease = serde_json::from_str(json).unwrap();
        assert_eq!(release.tag_name.as_deref(), Some("v0.4.0"));
        assert_eq!(release.assets.len(), 1);
        assert!(release.find_asset_with_suffix(SUFFIX).is_some());
    }

    #[test]
    fn malformed_url_on_other_asset_is_ignored() {
        let json = r#"{
            "assets": [
                { "name": "notes.txt", "browser_download_url": "not a url" },
                { "name": "keybot_merged.bin", "browser_download_url": "https://example.com/keybot_merged.bin" }
            ]
        }"#;
        let release: GithubRelease = serde_json::from_str(json).unwrap();
        assert!(release.assets[0].download_url().is_err());

        let found = release.find_asset_with_suffix(SUFFIX).unwrap();
        assert_eq!(
            found.download_url().unwrap().as_str(),
            "https://example.com/keybot_merged.bin"
        );
    }

    #[test]
    fn deserialize_missing_assets_fails() {
        let json = r#"{ "message": "Not Found" }"#;
        assert!(serde_json::from_str::<GithubRelease>(json).is_err());
    }
}
