use std::{
    collections::HashMap,
    future::Future,
    sync::{Mutex, PoisonError},
};

use reqwest::{
    StatusCode,
    header::{ACCEPT, HeaderMap, HeaderName, HeaderValue},
};
use reqwest_middleware::ClientWithMiddleware;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};
use url::Url;

use super::{
    client::create_client,
    github::{GithubError, GithubResult},
};

/**
    The status and full body of a single outbound GET request.
*/
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

impl FetchResponse {
    #[must_use]
    pub fn new(status: StatusCode, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /**
        Parses the body of the response as JSON.

        # Errors

        - If the body is not valid JSON for the given type.
    */
    pub fn json<T: DeserializeOwned>(&self) -> GithubResult<T> {
        Ok(serde_json::from_slice(&self.body)?)
    }
}

/**
    Capability to issue outbound GET requests.

    Implemented by [`HttpFetcher`] for real network access,
    and by [`CannedFetcher`] for serving fixed responses.
*/
pub trait Fetcher: Send + Sync {
    /**
        Issues a GET request to the given URL, reading the full response body.

        Responses with a non-success status are returned as-is, only
        failures to send the request or read the body are errors.
    */
    fn get(
        &self,
        url: &Url,
        accept: &'static str,
    ) -> impl Future<Output = GithubResult<FetchResponse>> + Send;
}

/**
    A [`Fetcher`] backed by a `reqwest` client.
*/
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: ClientWithMiddleware,
}

impl HttpFetcher {
    /**
        Creates a new fetcher set up for talking to the GitHub API.

        # Errors

        - If the HTTP client could not be created.
    */
    pub fn new() -> GithubResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            HeaderName::from_static("x-github-api-version"),
            HeaderValue::from_static("2022-11-28"),
        );

        let client = create_client(headers)?;

        Ok(Self { client })
    }
}

impl Fetcher for HttpFetcher {
    #[instrument(skip(self), fields(%url), level = "debug")]
    async fn get(&self, url: &Url, accept: &'static str) -> GithubResult<FetchResponse> {
        let response = self
            .client
            .get(url.clone())
            .header(ACCEPT, HeaderValue::from_static(accept))
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?.to_vec();
        debug!(%status, len = body.len(), "received response");

        Ok(FetchResponse { status, body })
    }
}

/**
    A [`Fetcher`] that serves fixed responses from memory.

    Requests for URLs without a registered response fail the same way
    an unreachable host would. Every request is recorded, in order.
*/
#[derive(Debug, Default)]
pub struct CannedFetcher {
    responses: HashMap<Url, FetchResponse>,
    requests: Mutex<Vec<Url>>,
}

impl CannedFetcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /**
        Registers the response to serve for the given URL,
        replacing any previously registered response.
    */
    #[must_use]
    pub fn with_response(mut self, url: Url, response: FetchResponse) -> Self {
        self.responses.insert(url, response);
        self
    }

    /**
        Returns all URLs requested so far, in request order.
    */
    #[must_use]
    pub fn requests(&self) -> Vec<Url> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Fetcher for CannedFetcher {
    async fn get(&self, url: &Url, _accept: &'static str) -> GithubResult<FetchResponse> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(url.clone());

        self.responses
            .get(url)
            .cloned()
            .ok_or_else(|| GithubError::Other(format!("no response registered for '{url}'")))
    }
}
