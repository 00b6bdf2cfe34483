use std::sync::Arc;

use axum::{
    Router,
    extract::State,
    http::header::CONTENT_TYPE,
    response::{IntoResponse, Response},
};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use keybot_proxy::{
    proxy::{CONTENT_TYPE_BINARY, CONTENT_TYPE_JSON, FirmwareProxy, error_body},
    sources::Fetcher,
};

mod cors;

use self::cors::cors_layer;

/**
    Builds the router serving firmware on every method and path.

    Unlike the function response, the firmware is served as raw bytes.
*/
pub fn router<F>(proxy: Arc<FirmwareProxy<F>>) -> Router
where
    F: Fetcher + 'static,
{
    Router::new()
        .fallback(serve_firmware::<F>)
        .with_state(proxy)
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
}

async fn serve_firmware<F: Fetcher>(State(proxy): State<Arc<FirmwareProxy<F>>>) -> Response {
    match proxy.fetch_firmware().await {
        Ok(contents) => ([(CONTENT_TYPE, CONTENT_TYPE_BINARY)], contents).into_response(),
        Err(e) => {
            error!("{e}");
            (
                e.status_code(),
                [(CONTENT_TYPE, CONTENT_TYPE_JSON)],
                error_body(&e),
            )
                .into_response()
        }
    }
}

pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("failed to listen for shutdown signal: {e}");
        return;
    }
    info!("shutdown signal received");
}
