//! The stored order record and its unpersisted counterpart.

use chrono::NaiveDateTime;
use common::OrderId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A stored delivery order.
///
/// `id` and `created_at` are assigned by the store on insert and never change
/// afterwards. The remaining fields are copied verbatim from the validated
/// submission; no operation updates or deletes a stored order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub sender_city: String,
    pub sender_address: String,
    pub receiver_city: String,
    pub receiver_address: String,
    /// Parcel weight in kilograms.
    pub weight: Decimal,
    pub pickup_date: NaiveDateTime,
    pub created_at: NaiveDateTime,
}

/// A validated order submission, ready to persist.
///
/// Carries no id and no creation timestamp; the store assigns both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewOrder {
    pub sender_city: String,
    pub sender_address: String,
    pub receiver_city: String,
    pub receiver_address: String,
    pub weight: Decimal,
    pub pickup_date: NaiveDateTime,
}
