//! Platter Domain Concerns

pub mod carts;
pub mod offers;
pub mod segments;
