//! Order intake: the submission type, validation, and the service.

pub mod commands;
pub mod service;
pub mod validate;

pub use commands::CreateOrder;
pub use service::OrderService;
pub use validate::{ValidationErrors, validate};
