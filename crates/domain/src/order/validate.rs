//! Field validation for order submissions.
//!
//! Validation is pure: it takes the raw submission and the current instant,
//! checks every rule, and either returns a persistable [`NewOrder`] or the
//! full set of per-field failure messages. It never short-circuits after the
//! first failure and never touches storage.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::OnceLock;

use chrono::{Datelike, NaiveDateTime};
use order_store::NewOrder;
use regex::Regex;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::order::CreateOrder;

const MAX_CITY_LEN: usize = 100;

/// Field-level validation failures, keyed by wire field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    errors: BTreeMap<String, Vec<String>>,
}

impl ValidationErrors {
    fn add(&mut self, field: &str, message: impl Into<String>) {
        self.errors
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    /// Returns true when no rule failed.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of fields with at least one failure.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true when the given field has a recorded failure.
    pub fn contains(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    /// Messages recorded for a field; empty if the field passed.
    pub fn messages(&self, field: &str) -> &[String] {
        self.errors.get(field).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in &self.errors {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", field, messages.join(", "))?;
            first = false;
        }
        Ok(())
    }
}

// Format: ул. <street> д. <house> кв. <apartment>, Cyrillic street names only.
fn address_pattern() -> &'static Regex {
    static ADDRESS_PATTERN: OnceLock<Regex> = OnceLock::new();
    ADDRESS_PATTERN.get_or_init(|| {
        Regex::new(r"^ул\.\s+[а-яА-ЯёЁ\s\-]+\s+д\.\s+\d+\s+кв\.\s+\d+$")
            .expect("address pattern is a valid regex")
    })
}

/// Checks every field rule against the submission, collecting all failures.
///
/// `now` is the instant the future-pickup rule is checked against; the
/// service passes the current wall clock.
pub fn validate(cmd: &CreateOrder, now: NaiveDateTime) -> Result<NewOrder, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    let sender_city = check_city(
        &mut errors,
        "senderCity",
        cmd.sender_city.as_deref(),
        "Город отправителя обязателен",
        "Город отправителя не может быть длиннее 100 символов",
    );
    let sender_address = check_address(
        &mut errors,
        "senderAddress",
        cmd.sender_address.as_deref(),
        "Адрес отправителя обязателен",
    );
    let receiver_city = check_city(
        &mut errors,
        "receiverCity",
        cmd.receiver_city.as_deref(),
        "Город получателя обязателен",
        "Город получателя не может быть длиннее 100 символов",
    );
    let receiver_address = check_address(
        &mut errors,
        "receiverAddress",
        cmd.receiver_address.as_deref(),
        "Адрес получателя обязателен",
    );
    let weight = check_weight(&mut errors, cmd.weight);
    let pickup_date = check_pickup_date(&mut errors, cmd.pickup_date, now);

    match (
        sender_city,
        sender_address,
        receiver_city,
        receiver_address,
        weight,
        pickup_date,
    ) {
        (
            Some(sender_city),
            Some(sender_address),
            Some(receiver_city),
            Some(receiver_address),
            Some(weight),
            Some(pickup_date),
        ) if errors.is_empty() => Ok(NewOrder {
            sender_city,
            sender_address,
            receiver_city,
            receiver_address,
            weight,
            pickup_date,
        }),
        _ => Err(errors),
    }
}

fn check_city(
    errors: &mut ValidationErrors,
    field: &str,
    value: Option<&str>,
    required_msg: &str,
    too_long_msg: &str,
) -> Option<String> {
    let value = match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => {
            errors.add(field, required_msg);
            return None;
        }
    };

    if value.chars().count() > MAX_CITY_LEN {
        errors.add(field, too_long_msg);
        return None;
    }

    Some(value.to_string())
}

fn check_address(
    errors: &mut ValidationErrors,
    field: &str,
    value: Option<&str>,
    required_msg: &str,
) -> Option<String> {
    let value = match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => {
            errors.add(field, required_msg);
            return None;
        }
    };

    if !address_pattern().is_match(value) {
        errors.add(
            field,
            "Адрес должен быть в формате: ул. [название улицы] д. [номер дома] кв. [номер квартиры]",
        );
        return None;
    }

    Some(value.to_string())
}

fn check_weight(errors: &mut ValidationErrors, value: Option<Decimal>) -> Option<Decimal> {
    let min = Decimal::new(1, 2);
    let max = Decimal::ONE_THOUSAND;

    match value {
        None => {
            errors.add("weight", "Вес обязателен");
            None
        }
        Some(weight) if weight < min || weight > max => {
            errors.add("weight", "Вес должен быть от 0.01 до 1000 кг");
            None
        }
        Some(weight) => Some(weight),
    }
}

fn check_pickup_date(
    errors: &mut ValidationErrors,
    value: Option<NaiveDateTime>,
    now: NaiveDateTime,
) -> Option<NaiveDateTime> {
    let date = match value {
        Some(d) => d,
        None => {
            errors.add("pickupDate", "Дата забора обязательна");
            return None;
        }
    };

    if date <= now {
        errors.add("pickupDate", "Дата забора должна быть в будущем");
        return None;
    }

    // Defensive bound against malformed dates, not a scheduling rule.
    if !(1000..=9999).contains(&date.year()) {
        errors.add("pickupDate", "Год должен содержать ровно 4 цифры");
        return None;
    }

    Some(date)
}
