//! HTTP client for the user segment service.

use std::time::Duration;

use async_trait::async_trait;
use platter::{offers::UserId, segments::Segment};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::debug;

use super::{SegmentLookupError, SegmentResolver};

/// Configuration for reaching the segment service.
#[derive(Debug, Clone)]
pub struct SegmentServiceConfig {
    /// Service address, e.g. `"http://localhost:1080"`.
    pub base_url: String,

    /// Upper bound on each lookup, connect included.
    pub timeout: Duration,
}

/// Resolves segments with `GET /api/v1/user_segment?user_id=<id>`.
#[derive(Debug, Clone)]
pub struct HttpSegmentResolver {
    config: SegmentServiceConfig,
    http: Client,
}

impl HttpSegmentResolver {
    #[must_use]
    pub fn new(config: SegmentServiceConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    fn url(&self) -> String {
        format!(
            "{}/api/v1/user_segment",
            self.config.base_url.trim_end_matches('/')
        )
    }
}

#[derive(Debug, Deserialize)]
struct SegmentResponse {
    segment: String,
}

#[async_trait]
impl SegmentResolver for HttpSegmentResolver {
    #[tracing::instrument(
        name = "segments.http.resolve",
        skip(self),
        fields(user_id = %user, status = tracing::field::Empty),
        err
    )]
    async fn resolve(&self, user: UserId) -> Result<Option<Segment>, SegmentLookupError> {
        let response = self
            .http
            .get(self.url())
            .query(&[("user_id", user.get())])
            .timeout(self.config.timeout)
            .send()
            .await?;

        let status = response.status();

        tracing::Span::current().record("status", status.as_u16());

        match status {
            StatusCode::OK => {
                let parsed: SegmentResponse = response.json().await?;

                debug!(segment = %parsed.segment, "resolved user segment");

                Ok(Some(Segment::from(parsed.segment)))
            }
            StatusCode::NOT_FOUND => Ok(None),
            _ => {
                let text = response.text().await.unwrap_or_default();

                Err(SegmentLookupError::UnexpectedResponse(format!(
                    "segment lookup failed with status {status}: {text}"
                )))
            }
        }
    }
}
