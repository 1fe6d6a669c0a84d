use std::collections::HashMap;
use dioxus::{logger::tracing::{error, info, warn}, prelude::*};
use dioxus::document;
use futures_util::StreamExt;
use tokio::sync::mpsc;

use crate::{
    components::{
        orderForm::OrderForm,
        tables::{OrdersTable, ProductsTable, UsersTable},
        toast::ErrorToast,
    },
    utils::{
        api::{DashboardClient, DashboardSnapshot},
        backoff::{load_until_ready, RetryConfig},
        flow::SubmissionPhase,
        server::{OrderRecord, OrderRequest, Product, StatusUpdate, UserAccount},
        status_feed::{track_order_status, FeedHandle},
    },
};

pub const PRODUCTS_URL: &str = env!("PRODUCTS_URL");
pub const USERS_URL: &str = env!("USERS_URL");
pub const ORDERS_URL: &str = env!("ORDERS_URL");
pub const STATUS_WS_URL: &str = env!("STATUS_WS_URL");

pub enum Action {
    Submit,
    Refresh,
}

#[component]
pub fn Dashboard() -> Element {
    let feed_conn: Signal<Option<FeedHandle>> = use_signal(|| None);
    let form_data: Signal<HashMap<String, FormValue>> = use_signal(HashMap::new);
    let phase: Signal<SubmissionPhase> = use_signal(|| SubmissionPhase::Idle);

    // snapshot signals
    let products: Signal<Vec<Product>> = use_signal(|| vec![]);
    let users: Signal<Vec<UserAccount>> = use_signal(|| vec![]);
    let orders: Signal<Vec<OrderRecord>> = use_signal(|| vec![]);
    let tables_visible: Signal<bool> = use_signal(|| false);
    let load_attempts: Signal<u32> = use_signal(|| 0);

    let client = use_signal(|| DashboardClient::new(reqwest::Client::new(), PRODUCTS_URL, USERS_URL, ORDERS_URL));

    // Initial dashboard load, polled with backoff while the services come up.
    use_future(move || async move {
        let http = client.read().clone();
        let snapshot = load_until_ready(&http, &RetryConfig::default(), load_attempts).await;
        apply_snapshot(snapshot, products, users, orders, tables_visible);
    });

    // React to client requests. The status feed reports through a channel
    // owned by this coroutine, so everything is instantiated exactly once.
    let actions = use_coroutine(move |mut rx: UnboundedReceiver<Action>| async move {
        let (update_tx, mut update_rx) = mpsc::channel::<StatusUpdate>(64);

        // Feed updates drive the phase machine; settling reloads the view once.
        spawn(async move {
            while let Some(update) = update_rx.recv().await {
                let mut phase = phase;
                let previous = phase();
                let next = previous.on_status(update.status);
                phase.set(next);

                if let SubmissionPhase::Settled(status) = next {
                    if !matches!(previous, SubmissionPhase::Settled(_)) {
                        info!("order {} settled as {}", update.order_id, status);
                        reload_view(client, products, users, orders, tables_visible).await;
                    }
                }
            }
        });

        while let Some(action) = rx.next().await {
            match action {
                Action::Submit => {
                    let mut phase = phase;
                    if !phase().can_submit() {
                        warn!("submission ignored while an order is in flight");
                        continue;
                    }

                    let current_form_data = form_data();
                    let username = current_form_data.get("username").map_or(String::new(), |v| v.as_value());
                    let product_name = current_form_data.get("product").map_or(String::new(), |v| v.as_value());
                    let quantity = current_form_data.get("quantity").map_or(String::new(), |v| v.as_value());

                    phase.set(phase().submit());

                    // subscribe before placing, so no update can slip past
                    // between the accept and the subscription
                    spawn({
                        let update_tx = update_tx.clone();
                        let username = username.clone();
                        async move {
                            if let Err(feed_err) = track_order_status(username, feed_conn, update_tx).await {
                                error!("status feed error: {}", feed_err);
                                document::eval(r#"
                                var x = document.getElementById("feed-down-toast");
                                x.classList.add("show");
                                setTimeout(function(){{x.classList.remove("show");}}, 2000);
                                "#);
                            }
                        }
                    });

                    let request = OrderRequest { username, product_name, quantity };
                    match client.read().place_order(&request).await {
                        Ok(()) => phase.set(phase().placed()),
                        Err(e) => {
                            error!("order placement failed: {}", e);
                            phase.set(phase().rejected());
                            document::eval(r#"
                            var x = document.getElementById("order-rejected-toast");
                            x.classList.add("show");
                            setTimeout(function(){{x.classList.remove("show");}}, 2000);
                            "#);
                        }
                    }
                }
                Action::Refresh => {
                    reload_view(client, products, users, orders, tables_visible).await;
                }
            }
        }
    });

    static CSS: Asset = asset!("/assets/dashboard.css");

    let load_status = if load_attempts() > 0 {
        format!("Backend unreachable, retrying (attempt {})", load_attempts())
    } else {
        "Loading dashboard...".to_string()
    };

    rsx! {
        document::Link { rel: "stylesheet", href: CSS },
        div {
            class: "dashboard-page",
            section {
                class: "order-card",
                h1 { class: "order-card-title", "Place an order" },
                OrderForm { form_data, phase },
            }
            if tables_visible() {
                div {
                    id: "tables-wrapper",
                    class: "tables-wrapper",
                    ProductsTable { products: products() },
                    UsersTable { users: users() },
                    OrdersTable { orders: orders() },
                }
                button {
                    id: "refresh-btn",
                    class: "button",
                    onclick: move |_evt| actions.send(Action::Refresh),
                    "Refresh"
                }
            } else {
                p { id: "load-status", "{load_status}" }
            }
            ErrorToast { id: "order-rejected-toast", content: "Order could not be placed! Try again later." },
            ErrorToast { id: "feed-down-toast", content: "Live status feed unavailable." }
        }
    }
}

fn apply_snapshot(
    snapshot: DashboardSnapshot,
    mut products: Signal<Vec<Product>>,
    mut users: Signal<Vec<UserAccount>>,
    mut orders: Signal<Vec<OrderRecord>>,
    mut tables_visible: Signal<bool>,
) {
    products.set(snapshot.products);
    users.set(snapshot.users);
    orders.set(snapshot.orders);
    tables_visible.set(true);
}

/// Clear the tables and fetch a fresh snapshot, once. A failure leaves the
/// cleared tables empty; only the initial load gets the backoff treatment.
async fn reload_view(
    client: Signal<DashboardClient>,
    mut products: Signal<Vec<Product>>,
    mut users: Signal<Vec<UserAccount>>,
    mut orders: Signal<Vec<OrderRecord>>,
    tables_visible: Signal<bool>,
) {
    products.set(vec![]);
    users.set(vec![]);
    orders.set(vec![]);

    match client.read().load_snapshot().await {
        Ok(snapshot) => apply_snapshot(snapshot, products, users, orders, tables_visible),
        Err(e) => warn!("view reload failed: {}", e),
    }
}
