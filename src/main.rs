use std::process::exit;

use clap::Parser;
use tracing::error;

mod cli;
mod server;
mod util;

use self::cli::Cli;
use self::util::init_tracing;

#[tokio::main]
async fn main() {
    init_tracing();

    if let Err(e) = Cli::parse().run().await {
        // NOTE: We use tracing for errors here for consistent
        // output between returned errors, and errors that
        // may be logged while the proxy is running.
        error!("{e:?}");
        exit(1);
    }
}
