mod client;
mod fetch;

pub mod github;

pub use self::fetch::{CannedFetcher, FetchResponse, Fetcher, HttpFetcher};
