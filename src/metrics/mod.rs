//! Prometheus metrics for the relay.
//!
//! - Dispatch outcomes and provider latency per category
//! - Rejected bearer credentials
//! - Asset deletions

mod helpers;

pub use helpers::{encode_metrics, AssetMetrics, AuthMetrics, DispatchMetrics};

use lazy_static::lazy_static;
use prometheus::{
    register_histogram_vec, register_int_counter, register_int_counter_vec, HistogramVec,
    IntCounter, IntCounterVec,
};

/// Prefix for all metrics
const METRIC_PREFIX: &str = "sundar_gutka";

lazy_static! {
    /// Dispatch attempts by category and outcome (success/failure)
    pub static ref DISPATCH_TOTAL: IntCounterVec = register_int_counter_vec!(
        format!("{}_dispatch_total", METRIC_PREFIX),
        "Notifications submitted to the messaging provider",
        &["category", "outcome"]
    ).unwrap();

    /// Provider round-trip latency
    pub static ref DISPATCH_LATENCY: HistogramVec = register_histogram_vec!(
        format!("{}_dispatch_latency_seconds", METRIC_PREFIX),
        "Messaging provider latency in seconds",
        &["category"],
        vec![0.01, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0]
    ).unwrap();

    pub static ref AUTH_REJECTED_TOTAL: IntCounter = register_int_counter!(
        format!("{}_auth_rejected_total", METRIC_PREFIX),
        "Requests rejected for a missing or invalid bearer token"
    ).unwrap();

    pub static ref ASSET_DELETIONS_TOTAL: IntCounterVec = register_int_counter_vec!(
        format!("{}_asset_deletions_total", METRIC_PREFIX),
        "Asset deletions forwarded to the asset store",
        &["outcome"]
    ).unwrap();
}
