//! User Segments

mod errors;
mod http;
mod resolver;

pub use errors::SegmentLookupError;
pub use http::{HttpSegmentResolver, SegmentServiceConfig};
pub use resolver::{MockSegmentResolver, SegmentResolver};
