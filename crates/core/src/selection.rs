//! Offer Selection
//!
//! Best-of-N selection over the offers eligible for a cart. The winner is the
//! offer with the largest absolute discount; among equal discounts the first
//! candidate in the given order wins. Stores hand candidates over in
//! registration order, so ties go to the earliest registered offer.

use crate::{
    discounts::{DiscountError, discount_amount},
    offers::{Discount, Offer},
};

/// Anything carrying a discount rule can take part in selection.
pub trait Candidate {
    /// The discount rule this candidate applies.
    fn discount(&self) -> &Discount;
}

impl Candidate for Offer {
    fn discount(&self) -> &Discount {
        &self.discount
    }
}

impl Candidate for Discount {
    fn discount(&self) -> &Discount {
        self
    }
}

/// The winning candidate and its effect on the cart.
#[derive(Debug, PartialEq, Eq)]
pub struct Selection<'a, C> {
    /// Winning candidate.
    pub offer: &'a C,

    /// Currency units deducted.
    pub discount: u64,

    /// Cart value after the discount.
    pub cart_value: u64,
}

/// Pick the candidate yielding the largest discount for `cart_value`.
///
/// Returns `None` for an empty candidate set.
///
/// # Errors
///
/// Returns a [`DiscountError`] if any candidate's discount cannot be computed.
pub fn select_best<C>(
    candidates: &[C],
    cart_value: u64,
) -> Result<Option<Selection<'_, C>>, DiscountError>
where
    C: Candidate,
{
    let mut best: Option<Selection<'_, C>> = None;

    for candidate in candidates {
        let discount = discount_amount(candidate.discount(), cart_value)?;

        // Strictly greater: earlier candidates keep ties.
        if best.as_ref().is_none_or(|current| discount > current.discount) {
            best = Some(Selection {
                offer: candidate,
                discount,
                cart_value: cart_value.saturating_sub(discount),
            });
        }
    }

    Ok(best)
}
