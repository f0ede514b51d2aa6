//! The order submission as it arrives off the wire.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Deserialize;

/// A raw order submission.
///
/// Every field is optional so that missing fields surface as per-field
/// validation messages instead of deserialization failures. Run
/// [`validate`](crate::order::validate::validate) to turn a submission into
/// a persistable [`NewOrder`](order_store::NewOrder).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrder {
    pub sender_city: Option<String>,
    pub sender_address: Option<String>,
    pub receiver_city: Option<String>,
    pub receiver_address: Option<String>,
    /// Parcel weight in kilograms.
    pub weight: Option<Decimal>,
    pub pickup_date: Option<NaiveDateTime>,
}

impl CreateOrder {
    /// Builds a submission with every field present.
    pub fn new(
        sender_city: impl Into<String>,
        sender_address: impl Into<String>,
        receiver_city: impl Into<String>,
        receiver_address: impl Into<String>,
        weight: Decimal,
        pickup_date: NaiveDateTime,
    ) -> Self {
        Self {
            sender_city: Some(sender_city.into()),
            sender_address: Some(sender_address.into()),
            receiver_city: Some(receiver_city.into()),
            receiver_address: Some(receiver_address.into()),
            weight: Some(weight),
            pickup_date: Some(pickup_date),
        }
    }
}
