//! Offers
//!
//! An offer is a discount rule owned by a restaurant and targeted at a set of
//! customer segments. Offers arrive as loosely typed registration input (a type
//! name such as `"FLATX"` plus a signed integer value) and are validated into a
//! closed [`Discount`] here, so nothing downstream ever sees an unknown type or
//! an out-of-range value.

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use thiserror::Error;

use crate::segments::{Segment, SegmentSet};

/// Restaurant identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RestaurantId(i64);

impl RestaurantId {
    /// Wrap a raw restaurant id.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// The raw restaurant id.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for RestaurantId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl Display for RestaurantId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0, f)
    }
}

/// User identifier, as understood by the segment service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(i64);

impl UserId {
    /// Wrap a raw user id.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// The raw user id.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for UserId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0, f)
    }
}

/// Reasons an offer is rejected at registration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidOfferError {
    /// The offer type name is not one of the supported types.
    #[error("unrecognised offer type `{0}`")]
    UnknownOfferType(String),

    /// Offer values are never negative.
    #[error("offer value must not be negative, got {0}")]
    NegativeValue(i64),

    /// Percentage offers must lie within `0..=100`.
    #[error("percentage offer value must be between 0 and 100, got {0}")]
    PercentageOutOfRange(i64),
}

/// Offer type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OfferType {
    /// Deduct a fixed number of currency units.
    FlatAmount,

    /// Deduct a percentage of the cart value.
    FlatPercent,
}

impl OfferType {
    /// Name used on the registration wire format.
    #[must_use]
    pub const fn wire_name(self) -> &'static str {
        match self {
            Self::FlatAmount => "FLATX",
            Self::FlatPercent => "FLAT%",
        }
    }

    /// Name used in persistent storage.
    #[must_use]
    pub const fn to_str(self) -> &'static str {
        match self {
            Self::FlatAmount => "flat_amount",
            Self::FlatPercent => "flat_percent",
        }
    }

    /// Parse a storage name produced by [`OfferType::to_str`].
    #[must_use]
    pub fn from_storage(name: &str) -> Option<Self> {
        match name {
            "flat_amount" => Some(Self::FlatAmount),
            "flat_percent" => Some(Self::FlatPercent),
            _ => None,
        }
    }
}

impl FromStr for OfferType {
    type Err = InvalidOfferError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "FLATX" | "FLAT_AMOUNT" => Ok(Self::FlatAmount),
            "FLAT%" | "FLAT_PERCENT" => Ok(Self::FlatPercent),
            other => Err(InvalidOfferError::UnknownOfferType(other.to_owned())),
        }
    }
}

impl Display for OfferType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.wire_name())
    }
}

/// A validated discount rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Discount {
    /// Deduct `amount` currency units, never taking the cart below zero.
    FlatAmount {
        /// Currency units to deduct.
        amount: u64,
    },

    /// Deduct `percentage` percent of the cart value.
    FlatPercent {
        /// Percentage in `0..=100`.
        percentage: u8,
    },
}

impl Discount {
    /// Validate a raw offer value against its type.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidOfferError::NegativeValue`] for negative values and
    /// [`InvalidOfferError::PercentageOutOfRange`] for percentages above 100.
    pub fn try_new(offer_type: OfferType, value: i64) -> Result<Self, InvalidOfferError> {
        let Ok(unsigned) = u64::try_from(value) else {
            return Err(InvalidOfferError::NegativeValue(value));
        };

        match offer_type {
            OfferType::FlatAmount => Ok(Self::FlatAmount { amount: unsigned }),
            OfferType::FlatPercent => u8::try_from(unsigned)
                .ok()
                .filter(|percentage| *percentage <= 100)
                .map(|percentage| Self::FlatPercent { percentage })
                .ok_or(InvalidOfferError::PercentageOutOfRange(value)),
        }
    }

    /// The offer type this discount was registered as.
    #[must_use]
    pub const fn offer_type(&self) -> OfferType {
        match self {
            Self::FlatAmount { .. } => OfferType::FlatAmount,
            Self::FlatPercent { .. } => OfferType::FlatPercent,
        }
    }

    /// The raw offer value (amount or percentage).
    #[must_use]
    pub fn value(&self) -> u64 {
        match *self {
            Self::FlatAmount { amount } => amount,
            Self::FlatPercent { percentage } => u64::from(percentage),
        }
    }
}

/// A validated offer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Offer {
    /// Owning restaurant.
    pub restaurant: RestaurantId,

    /// Discount rule.
    pub discount: Discount,

    /// Segments the offer is targeted at.
    pub segments: SegmentSet,
}

impl Offer {
    /// Build an offer from already validated parts.
    #[must_use]
    pub fn new(restaurant: RestaurantId, discount: Discount, segments: SegmentSet) -> Self {
        Self {
            restaurant,
            discount,
            segments,
        }
    }

    /// Validate registration input into an offer.
    ///
    /// # Errors
    ///
    /// Returns an [`InvalidOfferError`] when the type name is unrecognised or the
    /// value is out of range for the type.
    pub fn parse<I, S>(
        restaurant: RestaurantId,
        offer_type: &str,
        offer_value: i64,
        segments: I,
    ) -> Result<Self, InvalidOfferError>
    where
        I: IntoIterator<Item = S>,
        S: Into<Segment>,
    {
        let offer_type = offer_type.parse::<OfferType>()?;
        let discount = Discount::try_new(offer_type, offer_value)?;

        Ok(Self::new(restaurant, discount, segments.into_iter().collect()))
    }

    /// Whether this offer targets the given user segment.
    pub fn applies_to(&self, segment: Option<&Segment>) -> bool {
        self.segments.matches(segment)
    }
}
