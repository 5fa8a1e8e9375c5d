//! The page walker: drain a server-paginated collection to exhaustion
//!
//! One GET per page, sequential, no prefetch. The server's next-page link is
//! followed verbatim until it stops appearing. A failure on any page aborts
//! the whole walk with no partial results.

use super::link::PageLinks;
use crate::error::{Error, Result};
use crate::http::HttpClient;
use serde::de::DeserializeOwned;
use tracing::debug;

/// One decodable page of a paginated collection.
///
/// Implemented by the per-resource response wrappers (e.g. the object whose
/// `key_transactions` field holds the records of one page). The walker only
/// needs to pull the records out; the next-page signal lives in the response
/// headers, not the body.
pub trait CollectionPage: DeserializeOwned {
    /// The record type this page carries.
    type Record;

    /// Consume the page, yielding its records in server order.
    fn into_records(self) -> Vec<Self::Record>;
}

/// Configuration for the page walker.
///
/// The default trusts the server's pagination metadata unconditionally, with
/// no ceiling on the number of pages fetched. `max_pages` is an opt-in guard
/// against a server that keeps issuing next links forever; exceeding it fails
/// the walk rather than returning a truncated result.
#[derive(Debug, Clone, Default)]
pub struct WalkerConfig {
    /// Maximum number of pages to fetch before giving up, unbounded if unset.
    pub max_pages: Option<u32>,
}

impl WalkerConfig {
    /// Create an unbounded walker configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration that fails after `limit` pages
    pub fn with_max_pages(limit: u32) -> Self {
        Self {
            max_pages: Some(limit),
        }
    }
}

/// Walk state: either a URL is pending, or the server reported no next page.
enum WalkState {
    Fetching(String),
    Done,
}

/// Fetch every page of a collection, concatenating records in arrival order.
///
/// The walk starts at `endpoint` with `query` attached; subsequent requests
/// use the server-supplied next URL verbatim, so the query is sent on the
/// first request only. An empty collection yields `Ok(vec![])` after one GET.
pub async fn collect_all<P: CollectionPage>(
    http: &HttpClient,
    endpoint: &str,
    query: &[(String, String)],
    config: &WalkerConfig,
) -> Result<Vec<P::Record>> {
    let mut results = Vec::new();
    let mut state = WalkState::Fetching(endpoint.to_string());
    let mut pages_fetched: u32 = 0;

    while let WalkState::Fetching(url) = state {
        if let Some(limit) = config.max_pages {
            if pages_fetched >= limit {
                return Err(Error::PageLimitExceeded { limit });
            }
        }

        // The filter belongs to the first request only; next-page URLs
        // already encode whatever parameters the server wants back.
        let params: &[(String, String)] = if pages_fetched == 0 { query } else { &[] };
        let response = http.get::<P>(&url, params).await?;

        let mut records = response.body.into_records();
        debug!(
            "page {} of {}: {} records",
            pages_fetched + 1,
            endpoint,
            records.len()
        );
        results.append(&mut records);
        pages_fetched += 1;

        let links = PageLinks::parse(&response.headers);
        state = match links.next {
            Some(next) if !next.is_empty() => WalkState::Fetching(next),
            _ => WalkState::Done,
        };
    }

    Ok(results)
}
