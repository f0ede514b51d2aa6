//! Domain layer for the delivery order-intake service.
//!
//! This crate provides:
//! - The `CreateOrder` submission type as it arrives off the wire
//! - The field validation pipeline with per-field error collection
//! - The `OrderService` orchestrating validate → persist → read

pub mod error;
pub mod order;

pub use error::DomainError;
pub use order::{CreateOrder, OrderService, ValidationErrors, validate};
