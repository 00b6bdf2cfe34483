use anyhow::{Context, Result};
use clap::{Args, Parser};

use keybot_proxy::{
    proxy::{FIRMWARE_ASSET_SUFFIX, FirmwareProxy, FirmwareTarget},
    repo::RepoId,
};

mod invoke;
mod serve;

use self::invoke::InvokeSubcommand;
use self::serve::ServeSubcommand;

#[derive(Debug, Parser)]
#[clap(author, version, about)]
pub struct Cli {
    #[clap(flatten)]
    pub target: TargetArgs,
    #[clap(subcommand)]
    pub subcommand: Subcommand,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        let target = self.target.into_target();
        let proxy = FirmwareProxy::new_with_target(target)
            .context("Failed to create firmware proxy")?;
        self.subcommand.run(proxy).await
    }
}

/// Where to look for the firmware.
#[derive(Debug, Args)]
pub struct TargetArgs {
    /// The GitHub repository publishing firmware releases, as `owner/repo`.
    #[clap(long, global = true, default_value_t = RepoId::default())]
    pub repo: RepoId,
    /// Name suffix of the release asset to serve.
    #[clap(long, global = true, default_value = FIRMWARE_ASSET_SUFFIX)]
    pub suffix: String,
}

impl TargetArgs {
    fn into_target(self) -> FirmwareTarget {
        FirmwareTarget::new(self.repo, self.suffix)
    }
}

#[derive(Debug, Parser)]
pub enum Subcommand {
    Invoke(InvokeSubcommand),
    Serve(ServeSubcommand),
}

impl Subcommand {
    pub async fn run(self, proxy: FirmwareProxy) -> Result<()> {
        match self {
            Self::Invoke(cmd) => cmd.run(proxy).await,
            Self::Serve(cmd) => cmd.run(proxy).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn target_defaults() {
        let cli = Cli::try_parse_from(["keybot-proxy", "invoke"]).unwrap();
        assert_eq!(cli.target.into_target(), FirmwareTarget::default());
    }

    #[test]
    fn target_overrides() {
        let cli = Cli::try_parse_from([
            "keybot-proxy",
            "serve",
            "--repo",
            "someone/firmware",
            "--suffix",
            ".img",
        ])
        .unwrap();
        let target = cli.target.into_target();
        assert_eq!(target.repo, RepoId::new("someone", "firmware"));
        assert_eq!(target.asset_suffix, ".img");
    }

    #[test]
    fn invoke_output_path() {
        let cli = Cli::try_parse_from(["keybot-proxy", "invoke", "-o", "fw.bin"]).unwrap();
        let Subcommand::Invoke(cmd) = cli.subcommand else {
            panic!("expected invoke subcommand");
        };
        assert_eq!(cmd.output.as_deref(), Some(std::path::Path::new("fw.bin")));
    }

    #[test]
    fn target_rejects_invalid_repo() {
        assert!(Cli::try_parse_from(["keybot-proxy", "invoke", "--repo", "keybot"]).is_err());
        assert!(Cli::try_parse_from(["keybot-proxy", "invoke", "--repo", "albal/.."]).is_err());
    }
}
