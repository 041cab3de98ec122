//! Domain service layer.
//!
//! One method per backend operation. Services forward typed input and return
//! the envelope payload; they do not validate, retry or cache.

pub mod endpoints;

mod auth;
mod catalogue;
mod orders;
mod travel;

pub use auth::AuthService;
pub use catalogue::CatalogueService;
pub use orders::OrderService;
pub use travel::TravelService;
