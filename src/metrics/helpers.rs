//! Metrics helper structs for convenient metric recording

use std::time::Duration;

use prometheus::{Encoder, TextEncoder};

use super::{ASSET_DELETIONS_TOTAL, AUTH_REJECTED_TOTAL, DISPATCH_LATENCY, DISPATCH_TOTAL};

/// Encode all metrics to Prometheus text format
pub fn encode_metrics() -> Result<String, prometheus::Error> {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    encoder.encode(&metric_families, &mut buffer)?;
    Ok(String::from_utf8(buffer).unwrap_or_default())
}

fn outcome(success: bool) -> &'static str {
    if success {
        "success"
    } else {
        "failure"
    }
}

pub struct DispatchMetrics;

impl DispatchMetrics {
    /// Record one provider call
    pub fn record(category: &str, success: bool, elapsed: Duration) {
        DISPATCH_TOTAL
            .with_label_values(&[category, outcome(success)])
            .inc();
        DISPATCH_LATENCY
            .with_label_values(&[category])
            .observe(elapsed.as_secs_f64());
    }
}

pub struct AuthMetrics;

impl AuthMetrics {
    pub fn record_rejected() {
        AUTH_REJECTED_TOTAL.inc();
    }
}

pub struct AssetMetrics;

impl AssetMetrics {
    pub fn record_deletion(success: bool) {
        ASSET_DELETIONS_TOTAL
            .with_label_values(&[outcome(success)])
            .inc();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recorded_metrics_are_encoded() {
        DispatchMetrics::record("metrics-test", true, Duration::from_millis(20));
        AuthMetrics::record_rejected();
        AssetMetrics::record_deletion(false);

        let output = encode_metrics().unwrap();
        assert!(output.contains("sundar_gutka_dispatch_total"));
        assert!(output.contains("category=\"metrics-test\""));
        assert!(output.contains("sundar_gutka_auth_rejected_total"));
        assert!(output.contains("sundar_gutka_asset_deletions_total"));
    }
}
