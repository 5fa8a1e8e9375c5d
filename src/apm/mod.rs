//! APM resource clients
//!
//! One handle, [`Apm`], exposes the typed read operations for the APM
//! product's resources. Listing operations drain the remote collection
//! through the pagination walker; single fetches are one GET.

mod key_transactions;
mod types;

pub use key_transactions::{KeyTransaction, KeyTransactionLinks, ListKeyTransactionsParams};
pub use types::{ApplicationSummary, EndUserSummary};

use crate::http::HttpClient;
use crate::pagination::WalkerConfig;

/// Client for APM resources.
///
/// Cheap to clone and safe to share: each call owns its own accumulation
/// state, so concurrent calls against one `Apm` are fine as long as the
/// underlying HTTP client is (it is).
#[derive(Debug, Clone)]
pub struct Apm {
    pub(crate) http: HttpClient,
    pub(crate) walker: WalkerConfig,
}

impl Apm {
    /// Create an APM client over the given HTTP transport.
    ///
    /// Pagination is unbounded, matching the server contract: listings walk
    /// next links until the server stops issuing them.
    pub fn new(http: HttpClient) -> Self {
        Self {
            http,
            walker: WalkerConfig::default(),
        }
    }

    /// Create an APM client with explicit walker configuration, e.g. a page
    /// ceiling for callers that do not trust the server's pagination
    /// metadata.
    pub fn with_walker_config(http: HttpClient, walker: WalkerConfig) -> Self {
        Self { http, walker }
    }
}
