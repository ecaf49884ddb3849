//! Service layer for the cash-flow projector
//!
//! The service layer holds the business logic on top of the data models,
//! handling validation and computed fields.

pub mod projection;

pub use projection::compute;
