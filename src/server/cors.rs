use axum::http::Method;
use tower_http::cors::{Any, CorsLayer};

/**
    Lets browser pages on any origin read the firmware.

    Credentials are never sent, so a wildcard origin is all that is needed.
*/
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::HEAD, Method::OPTIONS])
        .allow_headers(Any)
        .allow_credentials(false)
}
