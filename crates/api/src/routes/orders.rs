//! Order intake and retrieval endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use chrono::NaiveDateTime;
use common::OrderId;
use domain::{CreateOrder, OrderService};
use order_store::{Order, OrderStore};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::ApiError;

/// Shared application state accessible from all handlers.
pub struct AppState<S: OrderStore> {
    pub order_service: OrderService<S>,
}

// -- Response types --

/// Full-detail order view, returned on creation and single-order retrieval.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetailResponse {
    pub id: OrderId,
    pub sender_city: String,
    pub sender_address: String,
    pub receiver_city: String,
    pub receiver_address: String,
    pub weight: Decimal,
    pub pickup_date: NaiveDateTime,
    pub created_at: NaiveDateTime,
}

impl From<Order> for OrderDetailResponse {
    fn from(order: Order) -> Self {
        Self {
            id: order.id,
            sender_city: order.sender_city,
            sender_address: order.sender_address,
            receiver_city: order.receiver_city,
            receiver_address: order.receiver_address,
            weight: order.weight,
            pickup_date: order.pickup_date,
            created_at: order.created_at,
        }
    }
}

/// Summary order view used for listings; addresses and the creation
/// timestamp are omitted.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummaryResponse {
    pub id: OrderId,
    pub sender_city: String,
    pub receiver_city: String,
    pub weight: Decimal,
    pub pickup_date: NaiveDateTime,
}

impl From<Order> for OrderSummaryResponse {
    fn from(order: Order) -> Self {
        Self {
            id: order.id,
            sender_city: order.sender_city,
            receiver_city: order.receiver_city,
            weight: order.weight,
            pickup_date: order.pickup_date,
        }
    }
}

// -- Handlers --

/// POST /orders — validate and persist a new order.
#[tracing::instrument(skip(state, req))]
pub async fn create<S: OrderStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Json(req): Json<CreateOrder>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<OrderDetailResponse>), ApiError> {
    let order = state.order_service.create_order(req).await?;
    let location = format!("/orders/{}", order.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(order.into()),
    ))
}

/// GET /orders — list all orders, most recently created first.
#[tracing::instrument(skip(state))]
pub async fn list<S: OrderStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
) -> Result<Json<Vec<OrderSummaryResponse>>, ApiError> {
    let orders = state.order_service.list_orders().await?;
    Ok(Json(orders.into_iter().map(Into::into).collect()))
}

/// GET /orders/:id — fetch a single order with full detail.
#[tracing::instrument(skip(state))]
pub async fn get<S: OrderStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Path(id): Path<String>,
) -> Result<Json<OrderDetailResponse>, ApiError> {
    let order_id = parse_order_id(&id)?;
    let order = state.order_service.get_order(order_id).await?;
    Ok(Json(order.into()))
}

fn parse_order_id(raw: &str) -> Result<OrderId, ApiError> {
    raw.parse::<i64>()
        .ok()
        .map(OrderId::new)
        .filter(OrderId::is_positive)
        .ok_or_else(|| ApiError::BadRequest(format!("Invalid order id: {raw}")))
}
