use dioxus::prelude::*;
use crate::Route;

#[component]
pub fn Home() -> Element {
  static CSS: Asset = asset!("assets/home.css");
  rsx! {
    document::Stylesheet { href: CSS },
    div {
      class: "home-page",
      section {
        class: "hero",
        h1 { "Order Dashboard" },
        p { "Place orders against the store backend and follow each one live, from placement through the inventory and balance checks to its final status." },
        Link {
          class: "cta-button",
          to: Route::Dashboard { },
          "Open Dashboard"
        }
      },
      section {
        class: "features",
        div {
          class: "feature-card",
          h3 {
            class: "feature-card-title",
            span { "🛒" }
            "One-click ordering"
          }
          p { "Submit an order with a username, product and quantity. The backend settles it through the reservation and payment steps." }
        },
        div {
          class: "feature-card",
          h3 {
            class: "feature-card-title",
            span { "📡" }
            "Live status updates"
          }
          p { "Every submission subscribes to its own status topic, so the page reflects COMPLETED or FAILED the moment the saga settles." }
        },
        div {
          class: "feature-card",
          h3 {
            class: "feature-card-title",
            span { "📋" }
            "Fresh snapshots"
          }
          p { "Product stock, user balances and past orders reload after every settled order, and the initial load keeps polling until the services are up." }
        }
      }
    }
  }
}
