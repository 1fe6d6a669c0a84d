#![allow(non_snake_case)]

use dioxus::prelude::*;
use crate::Route;

#[component]
pub fn NavBar() -> Element {
  rsx! {
    nav {
      class: "navbar",
      Link { class: "nav-brand", to: Route::Home {}, "Order Dashboard" },
      div {
        class: "nav-links",
        Link { class: "nav-link", to: Route::Home {}, "Home" },
        Link { class: "nav-link", to: Route::Dashboard {}, "Dashboard" },
      }
    }
    Outlet::<Route> {}
  }
}
