//! Segment Resolver

use async_trait::async_trait;
use mockall::automock;
use platter::{offers::UserId, segments::Segment};

use super::SegmentLookupError;

#[automock]
#[async_trait]
pub trait SegmentResolver: Send + Sync {
    /// The user's segment, or `None` when the user has no known segment.
    async fn resolve(&self, user: UserId) -> Result<Option<Segment>, SegmentLookupError>;
}
