//! Segment lookup errors.

use thiserror::Error;

/// The segment service could not answer. Never the same as "no segment".
#[derive(Debug, Error)]
pub enum SegmentLookupError {
    /// Transport failure, timeout or undecodable body.
    #[error("segment service request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a status other than 200 or 404.
    #[error("unexpected response from segment service: {0}")]
    UnexpectedResponse(String),
}
