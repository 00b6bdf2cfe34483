use std::time::Duration;

use reqwest::{
    Client, Error,
    header::{HeaderMap, HeaderValue, USER_AGENT},
};

use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_tracing::TracingMiddleware;

/*
    Adds middleware for tracing of HTTP requests.

    Failed requests are never retried, a single failure
    on any request fails the whole firmware invocation.
*/
fn add_client_middleware(client: Client) -> ClientWithMiddleware {
    ClientBuilder::new(client)
        .with(TracingMiddleware::default())
        .build()
}

/**
    Creates a client with:

    - HTTPS only
    - A timeout for connecting, but none for the response, so
      slow firmware downloads are never cut short
    - All common compression algorithms enabled
    - User agent set to `<crate_name>/<crate_version>`
*/
pub fn create_client(mut default_headers: HeaderMap) -> Result<ClientWithMiddleware, Error> {
    let user_agent = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

    default_headers.insert(USER_AGENT, HeaderValue::from_static(user_agent));

    let client = Client::builder()
        .default_headers(default_headers)
        .https_only(true)
        .connect_timeout(Duration::from_secs(15))
        .gzip(true)
        .brotli(true)
        .deflate(true)
        .build()?;

    Ok(add_client_middleware(client))
}
