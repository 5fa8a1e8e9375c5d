//! Shared APM aggregate types
//!
//! Rolling performance aggregates the server attaches to several resource
//! kinds. The client passes them through unmodified.

use serde::{Deserialize, Serialize};

/// Server-side application performance rollup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicationSummary {
    /// Average response time in seconds
    pub response_time: f64,
    /// Throughput in requests per minute
    pub throughput: f64,
    /// Error rate as a percentage
    pub error_rate: f64,
    /// Configured Apdex target in seconds
    pub apdex_target: f64,
    /// Measured Apdex score
    pub apdex_score: f64,
    /// Number of hosts reporting
    pub host_count: i64,
    /// Number of instances reporting
    pub instance_count: i64,
}

/// Server-side end-user (browser) performance rollup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EndUserSummary {
    /// Average end-user response time in seconds
    pub response_time: f64,
    /// End-user throughput in pages per minute
    pub throughput: f64,
    /// Configured end-user Apdex target in seconds
    pub apdex_target: f64,
    /// Measured end-user Apdex score
    pub apdex_score: f64,
}
