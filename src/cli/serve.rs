use std::{net::SocketAddr, sync::Arc};

use anyhow::{Context, Result};
use clap::Parser;
use tokio::net::TcpListener;
use tracing::info;

use keybot_proxy::proxy::FirmwareProxy;

use crate::server::{router, shutdown_signal};

/// Serves the latest firmware over HTTP, on every method and path.
#[derive(Debug, Parser)]
pub struct ServeSubcommand {
    /// The address to listen on.
    #[clap(long, default_value = "0.0.0.0:8888")]
    pub address: SocketAddr,
}

impl ServeSubcommand {
    pub async fn run(self, proxy: FirmwareProxy) -> Result<()> {
        let target = proxy.target();
        info!(repo = %target.repo, suffix = %target.asset_suffix, "serving firmware");

        let app = router(Arc::new(proxy));

        let listener = TcpListener::bind(self.address)
            .await
            .with_context(|| format!("Failed to bind to {}", self.address))?;
        info!("listening on {}", self.address);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("Server error")?;

        Ok(())
    }
}
