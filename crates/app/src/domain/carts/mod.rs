//! Cart Offers

mod errors;
pub mod models;
mod service;

pub use errors::CartOffersServiceError;
pub use service::*;
