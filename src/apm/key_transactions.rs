//! Key transactions: list with pagination, fetch by ID

use super::types::{ApplicationSummary, EndUserSummary};
use super::Apm;
use crate::error::Result;
use crate::pagination::{collect_all, CollectionPage};
use serde::{Deserialize, Serialize};

const KEY_TRANSACTIONS_ENDPOINT: &str = "/key_transactions.json";

/// A key transaction monitored by the APM product.
///
/// A snapshot owned by the remote system: the client reads it, never writes
/// it back. Identity is `id`; everything else is mutable server-side data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyTransaction {
    /// Resource identifier
    pub id: i64,
    /// Display name
    pub name: String,
    /// Name of the underlying transaction
    pub transaction_name: String,
    /// Health status as reported by the server (e.g. "green", "red")
    pub health_status: String,
    /// Timestamp of the last received data, in the server's string format
    pub last_reported_at: String,
    /// Whether the transaction is currently reporting data
    pub reporting: bool,
    /// Application performance rollup, passed through unmodified
    pub application_summary: ApplicationSummary,
    /// End-user performance rollup, passed through unmodified
    pub end_user_summary: EndUserSummary,
    /// References to related resources
    pub links: KeyTransactionLinks,
}

/// Associations of a key transaction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyTransactionLinks {
    /// ID of the owning application
    pub application: i64,
}

/// Filters for a key transaction listing.
///
/// Every field is optional and independently combinable; the default value
/// lists the whole collection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListKeyTransactionsParams {
    /// Substring match on the transaction name
    pub name: Option<String>,
    /// Restrict the listing to these IDs
    pub ids: Vec<i64>,
}

impl ListKeyTransactionsParams {
    /// Set the name filter
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the ID filter
    #[must_use]
    pub fn ids(mut self, ids: impl IntoIterator<Item = i64>) -> Self {
        self.ids = ids.into_iter().collect();
        self
    }

    /// Encode the filters as query parameters for the first page request.
    ///
    /// IDs are comma-joined into a single `filter[ids]` value; unset filters
    /// are omitted entirely.
    pub(crate) fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        if let Some(name) = &self.name {
            query.push(("filter[name]".to_string(), name.clone()));
        }
        if !self.ids.is_empty() {
            let joined = self
                .ids
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(",");
            query.push(("filter[ids]".to_string(), joined));
        }
        query
    }
}

/// One page of the key transaction collection.
#[derive(Debug, Deserialize)]
pub(crate) struct KeyTransactionsResponse {
    #[serde(default)]
    key_transactions: Vec<KeyTransaction>,
}

impl CollectionPage for KeyTransactionsResponse {
    type Record = KeyTransaction;

    fn into_records(self) -> Vec<KeyTransaction> {
        self.key_transactions
    }
}

/// Wrapper around a single fetched key transaction.
#[derive(Debug, Deserialize)]
pub(crate) struct KeyTransactionResponse {
    key_transaction: KeyTransaction,
}

impl Apm {
    /// List every key transaction matching `params`.
    ///
    /// Walks the collection to exhaustion, following the server's next-page
    /// links, and returns all records in arrival order. An empty remote
    /// collection yields an empty `Vec`. Any failure on any page aborts the
    /// call with that error and no partial results.
    pub async fn list_key_transactions(
        &self,
        params: &ListKeyTransactionsParams,
    ) -> Result<Vec<KeyTransaction>> {
        collect_all::<KeyTransactionsResponse>(
            &self.http,
            KEY_TRANSACTIONS_ENDPOINT,
            &params.to_query(),
            &self.walker,
        )
        .await
    }

    /// Fetch one key transaction by ID.
    ///
    /// Transport failures, not-found, and decode failures propagate verbatim
    /// with no retry. The server-returned ID is trusted, not re-verified.
    pub async fn get_key_transaction(&self, id: i64) -> Result<KeyTransaction> {
        let url = format!("/key_transactions/{id}.json");
        let response = self.http.get::<KeyTransactionResponse>(&url, &[]).await?;
        Ok(response.body.key_transaction)
    }
}
