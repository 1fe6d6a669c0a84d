use std::fmt;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/* Server Requests */

/// Payload for POST {orders}. Quantity travels as the raw form field value;
/// the order service parses it on its side.
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
  pub username: String,
  pub product_name: String,
  pub quantity: String,
}

/// Client side of the status subscription handshake. The broker's topic
/// addressing stays opaque; these frames only name the destination.
#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub enum FeedRequest {
  Subscribe { topic: String },
  Unsubscribe { topic: String },
}

/* Server Responses */

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Product {
  pub id: i64,
  pub name: String,
  pub category: String,
  pub price: Decimal,
  pub quantity: i32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct UserAccount {
  pub id: i64,
  pub username: String,
  pub balance: Decimal,
}

/// Row of the orders snapshot. Status and timestamp stay null until the
/// saga settles the order, so both come through as options.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderRecord {
  pub id: Uuid,
  pub user_id: i64,
  pub product_id: i64,
  pub quantity: i32,
  #[serde(default)]
  pub status: Option<OrderStatus>,
  #[serde(default)]
  pub timestamp: Option<String>,
}

/// Message body published on the per-username status topic.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StatusUpdate {
  pub username: String,
  pub order_id: Uuid,
  pub status: OrderStatus,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
  Pending,
  Completed,
  Failed,
}

impl OrderStatus {
  /// COMPLETED and FAILED end the tracking of a submission.
  pub fn is_terminal(&self) -> bool {
    matches!(self, OrderStatus::Completed | OrderStatus::Failed)
  }
}

impl fmt::Display for OrderStatus {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      OrderStatus::Pending => write!(f, "PENDING"),
      OrderStatus::Completed => write!(f, "COMPLETED"),
      OrderStatus::Failed => write!(f, "FAILED"),
    }
  }
}

// App Errors
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
  FeedConnectionError(String),
  FeedChannelError(String),
  ServiceUnreachable(String),
  OrderRejected(String),
  SerializeError(String),
  DeserializeError(String),
}

impl std::error::Error for AppError {}

impl fmt::Display for AppError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      AppError::FeedConnectionError(msg) => write!(f, "Status feed connection error: {}", msg),
      AppError::FeedChannelError(msg) => write!(f, "Status feed channel error: {}", msg),
      AppError::ServiceUnreachable(msg) => write!(f, "Service unreachable: {}", msg),
      AppError::OrderRejected(msg) => write!(f, "Order rejected: {}", msg),
      AppError::SerializeError(msg) => write!(f, "Serialize error: {}", msg),
      AppError::DeserializeError(msg) => write!(f, "Deserialize error: {}", msg),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use rust_decimal_macros::dec;

  #[test]
  fn status_update_parses_notification_payload() {
    // shape published by the order service's notification sender
    let body = r#"{
      "username": "gavro",
      "orderId": "7f1f1f4e-56dc-4f0e-9b3e-1f6a4c9d2a10",
      "status": "COMPLETED"
    }"#;

    let update: StatusUpdate = serde_json::from_str(body).unwrap();
    assert_eq!(update.username, "gavro");
    assert_eq!(update.status, OrderStatus::Completed);
    assert!(update.status.is_terminal());
  }

  #[test]
  fn pending_is_not_terminal() {
    assert!(!OrderStatus::Pending.is_terminal());
    assert!(OrderStatus::Failed.is_terminal());
  }

  #[test]
  fn unknown_status_string_is_an_error() {
    let body = r#"{
      "username": "gavro",
      "orderId": "7f1f1f4e-56dc-4f0e-9b3e-1f6a4c9d2a10",
      "status": "SHIPPED"
    }"#;

    assert!(serde_json::from_str::<StatusUpdate>(body).is_err());
  }

  #[test]
  fn order_request_uses_backend_field_names() {
    let request = OrderRequest {
      username: "gavro".to_string(),
      product_name: "keyboard".to_string(),
      quantity: "3".to_string(),
    };

    let json = serde_json::to_value(&request).unwrap();
    assert_eq!(json["productName"], "keyboard");
    // quantity stays a string, exactly as the form field reads
    assert_eq!(json["quantity"], "3");
  }

  #[test]
  fn order_record_tolerates_unsettled_rows() {
    let body = r#"{
      "id": "7f1f1f4e-56dc-4f0e-9b3e-1f6a4c9d2a10",
      "userId": 1,
      "productId": 4,
      "quantity": 2,
      "status": null,
      "timestamp": null
    }"#;

    let record: OrderRecord = serde_json::from_str(body).unwrap();
    assert_eq!(record.status, None);
    assert_eq!(record.timestamp, None);
  }

  #[test]
  fn product_price_parses_as_decimal() {
    let body = r#"[{"id": 1, "name": "keyboard", "category": "peripherals", "price": 49.99, "quantity": 12}]"#;

    let products: Vec<Product> = serde_json::from_str(body).unwrap();
    assert_eq!(products[0].price, dec!(49.99));
  }

  #[test]
  fn subscribe_frame_carries_the_topic() {
    let frame = FeedRequest::Subscribe { topic: "/topic/order-status/gavro".to_string() };

    let json = serde_json::to_value(&frame).unwrap();
    assert_eq!(json["type"], "Subscribe");
    assert_eq!(json["topic"], "/topic/order-status/gavro");
  }
}
