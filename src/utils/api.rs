use dioxus::logger::tracing::info;
use reqwest::Client;

use super::server::{AppError, OrderRecord, OrderRequest, Product, UserAccount};

/// Everything the read endpoints serve, fetched in one pass.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSnapshot {
  pub products: Vec<Product>,
  pub users: Vec<UserAccount>,
  pub orders: Vec<OrderRecord>,
}

/// Thin wrapper over the three backend services. Reads are snapshots only;
/// the single write is the order placement POST, which is never retried.
#[derive(Clone)]
pub struct DashboardClient {
  client: Client,
  products_url: &'static str,
  users_url: &'static str,
  orders_url: &'static str,
}

impl DashboardClient {
  pub fn new(client: Client, products_url: &'static str, users_url: &'static str, orders_url: &'static str) -> Self {
    DashboardClient { client, products_url, users_url, orders_url }
  }

  pub async fn fetch_products(&self) -> Result<Vec<Product>, AppError> {
    let response = self.client.get(self.products_url).send().await
      .map_err(|e| AppError::ServiceUnreachable(e.to_string()))?;
    response.json::<Vec<Product>>().await
      .map_err(|e| AppError::DeserializeError(e.to_string()))
  }

  pub async fn fetch_users(&self) -> Result<Vec<UserAccount>, AppError> {
    let response = self.client.get(self.users_url).send().await
      .map_err(|e| AppError::ServiceUnreachable(e.to_string()))?;
    response.json::<Vec<UserAccount>>().await
      .map_err(|e| AppError::DeserializeError(e.to_string()))
  }

  pub async fn fetch_orders(&self) -> Result<Vec<OrderRecord>, AppError> {
    let response = self.client.get(self.orders_url).send().await
      .map_err(|e| AppError::ServiceUnreachable(e.to_string()))?;
    response.json::<Vec<OrderRecord>>().await
      .map_err(|e| AppError::DeserializeError(e.to_string()))
  }

  /// Products first, then users, then orders. The first failure aborts the
  /// load, leaving the later tables unrendered.
  pub async fn load_snapshot(&self) -> Result<DashboardSnapshot, AppError> {
    let products = self.fetch_products().await?;
    let users = self.fetch_users().await?;
    let orders = self.fetch_orders().await?;
    Ok(DashboardSnapshot { products, users, orders })
  }

  /// POST the order. Success is any 2xx; the accepted response has no body.
  pub async fn place_order(&self, request: &OrderRequest) -> Result<(), AppError> {
    let response = self.client.post(self.orders_url)
      .json(request)
      .send().await
      .map_err(|e| AppError::ServiceUnreachable(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
      return Err(AppError::OrderRejected(format!("order service answered {}", status)));
    }
    info!("order accepted for user {}", request.username);
    Ok(())
  }
}
