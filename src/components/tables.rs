#![allow(non_snake_case)]

use dioxus::prelude::*;

use crate::utils::server::{OrderRecord, Product, UserAccount};

#[component]
pub fn ProductsTable(products: Vec<Product>) -> Element {
  rsx! {
    table {
      id: "product-table",
      class: "snapshot-table",
      caption { "Products" }
      thead {
        tr {
          th { scope: "col", "Name" },
          th { scope: "col", "Price" },
          th { scope: "col", "Quantity" },
          th { scope: "col", "Category" },
        }
      }
      tbody {
        id: "product-table-body",
        for (idx, p) in products.iter().enumerate() {
          tr {
            key: "product-row-{idx}",
            td { "{p.name}" },
            td { "{p.price}" },
            td { "{p.quantity}" },
            td { "{p.category}" },
          }
        }
      }
    }
  }
}

#[component]
pub fn UsersTable(users: Vec<UserAccount>) -> Element {
  rsx! {
    table {
      id: "users-table",
      class: "snapshot-table",
      caption { "Users" }
      thead {
        tr {
          th { scope: "col", "Username" },
          th { scope: "col", "Balance" },
        }
      }
      tbody {
        id: "users-table-body",
        for (idx, u) in users.iter().enumerate() {
          tr {
            key: "user-row-{idx}",
            td { "{u.username}" },
            td { "{u.balance}" },
          }
        }
      }
    }
  }
}

struct OrderRow {
  row_id: String,
  id: String,
  user_id: i64,
  product_id: i64,
  quantity: i32,
  status: String,
  timestamp: String,
}

#[component]
pub fn OrdersTable(orders: Vec<OrderRecord>) -> Element {
  // unsettled rows carry no status or timestamp yet
  let rows: Vec<OrderRow> = orders.iter().enumerate().map(|(idx, o)| OrderRow {
    row_id: format!("order-row-{idx}"),
    id: o.id.to_string(),
    user_id: o.user_id,
    product_id: o.product_id,
    quantity: o.quantity,
    status: o.status.map_or("-".to_string(), |s| s.to_string()),
    timestamp: o.timestamp.clone().unwrap_or_else(|| "-".to_string()),
  }).collect();

  rsx! {
    table {
      id: "orders-table",
      class: "snapshot-table",
      caption { "Orders" }
      thead {
        tr {
          th { scope: "col", "Order" },
          th { scope: "col", "User" },
          th { scope: "col", "Product" },
          th { scope: "col", "Quantity" },
          th { scope: "col", "Status" },
          th { scope: "col", "Settled at" },
        }
      }
      tbody {
        id: "orders-table-body",
        for row in rows {
          tr {
            key: "{row.row_id}",
            td { class: "order-id", "{row.id}" },
            td { "{row.user_id}" },
            td { "{row.product_id}" },
            td { "{row.quantity}" },
            td { "{row.status}" },
            td { "{row.timestamp}" },
          }
        }
      }
    }
  }
}
