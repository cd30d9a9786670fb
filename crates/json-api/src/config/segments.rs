//! Segment Service Config

use std::time::Duration;

use clap::Args;
use platter_app::domain::{
    carts::models::SegmentFailurePolicy, segments::SegmentServiceConfig,
};

/// User segment service settings.
#[derive(Debug, Args)]
pub struct SegmentsConfig {
    /// Segment service base URL
    #[arg(long, env = "SEGMENT_SERVICE_URL")]
    pub segment_service_url: String,

    /// Upper bound on a single segment lookup
    #[arg(long, env = "SEGMENT_SERVICE_TIMEOUT_MS", default_value_t = 2_000_u64)]
    pub segment_service_timeout_ms: u64,

    /// Behaviour when the segment service fails (propagate, no-segment)
    #[arg(
        long,
        env = "SEGMENT_FAILURE_POLICY",
        value_enum,
        default_value_t = SegmentFailurePolicy::Propagate
    )]
    pub segment_failure_policy: SegmentFailurePolicy,
}

impl SegmentsConfig {
    #[must_use]
    pub fn service_config(&self) -> SegmentServiceConfig {
        SegmentServiceConfig {
            base_url: self.segment_service_url.clone(),
            timeout: Duration::from_millis(self.segment_service_timeout_ms),
        }
    }
}
