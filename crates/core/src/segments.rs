//! Customer Segments

use std::{
    borrow::Borrow,
    fmt::{Display, Formatter, Result as FmtResult},
};

use rustc_hash::FxHashSet;

/// A label classifying a user, such as `"p1"` or `"gold"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Segment(String);

impl Segment {
    /// Create a segment from its label.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// The segment label.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the segment, returning its label.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl Display for Segment {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for Segment {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Segment {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl From<String> for Segment {
    fn from(label: String) -> Self {
        Self(label)
    }
}

/// The set of segments an offer targets.
///
/// An empty set matches nobody; there is no "all segments" wildcard.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SegmentSet(FxHashSet<Segment>);

impl SegmentSet {
    /// Whether `segment` is a member of the set.
    pub fn contains(&self, segment: &Segment) -> bool {
        self.0.contains(segment)
    }

    /// Whether a (possibly unresolved) user segment is targeted by this set.
    ///
    /// An unresolved segment never matches.
    pub fn matches(&self, segment: Option<&Segment>) -> bool {
        segment.is_some_and(|segment| self.contains(segment))
    }

    /// Number of distinct segments.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the set targets nobody.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the segments in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &Segment> {
        self.0.iter()
    }

    /// Segment labels in lexical order.
    pub fn sorted_labels(&self) -> Vec<String> {
        let mut labels: Vec<String> = self.0.iter().map(|s| s.as_str().to_owned()).collect();

        labels.sort_unstable();

        labels
    }
}

impl<S> FromIterator<S> for SegmentSet
where
    S: Into<Segment>,
{
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}
