//! HTTP transport module
//!
//! Provides the GET-and-decode capability the resource clients are built on:
//! base URL joining, default headers (API key), query parameter encoding,
//! status checking, and JSON decoding into a caller-supplied shape. The
//! decoded body is returned together with the response headers so the
//! pagination parser can read the `Link` header.
//!
//! Retries, backoff, and rate limiting are intentionally absent: failures
//! propagate to the caller on the first occurrence.

mod client;

pub use client::{ApiResponse, HttpClient, HttpClientConfig, HttpClientConfigBuilder};

#[cfg(test)]
mod tests;
