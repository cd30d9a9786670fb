//! Platter
//!
//! Platter is the offer evaluation engine behind restaurant checkout: it validates
//! registered offers, computes the discount each offer yields for a cart and picks
//! the single best offer for a customer segment.

pub mod discounts;
pub mod offers;
pub mod prelude;
pub mod segments;
pub mod selection;
