use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tokio::fs;
use tracing::info;

use keybot_proxy::proxy::{FirmwareProxy, FunctionResponse};

/// Runs the firmware function once and prints its response as JSON.
#[derive(Debug, Parser)]
pub struct InvokeSubcommand {
    /// Pretty-print the response JSON.
    #[clap(long)]
    pub pretty: bool,
    /// Write the decoded response body to this file instead of printing the response.
    #[clap(long, short)]
    pub output: Option<PathBuf>,
}

impl InvokeSubcommand {
    pub async fn run(self, proxy: FirmwareProxy) -> Result<()> {
        let response = proxy.handle().await;

        if let Some(path) = &self.output {
            write_decoded_body(&response, path).await?;
            info!(
                status = response.status_code,
                "wrote response body to {}",
                path.display()
            );
            return Ok(());
        }

        let json = if self.pretty {
            serde_json::to_string_pretty(&response)
        } else {
            serde_json::to_string(&response)
        }
        .context("Failed to serialize function response")?;

        println!("{json}");

        Ok(())
    }
}

async fn write_decoded_body(response: &FunctionResponse, path: &Path) -> Result<()> {
    let contents = response
        .decoded_body()
        .context("Function response body is not valid base64")?;
    fs::write(path, contents)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
