//! Offers

pub mod data;
mod errors;
pub mod records;
mod repository;
pub mod service;
pub mod store;

pub use errors::OffersServiceError;
pub use service::*;
pub use store::{InMemoryOfferStore, MockOfferStore, OfferStore, PgOfferStore};
