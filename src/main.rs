#![allow(non_snake_case)]
mod pages;
mod components;
mod utils;

use components::nav::NavBar;
use dioxus::prelude::*;
use pages::{dashboard::Dashboard, home::Home};

#[derive(Routable, PartialEq, Clone)]
enum Route {
    #[layout(NavBar)]
    #[route("/")]
    Home {},
    #[route("/dashboard")]
    Dashboard {},
    #[route("/:..route")]
    PageNotFound { route: Vec<String> }
}

fn main() {
    dioxus::launch(App);
}

fn App() -> Element {
    rsx! { Router::<Route> {} }
}

#[component]
fn PageNotFound(route: Vec<String>) -> Element {
    rsx! {
        h1 { "Page not found" }
        p { "The page you were looking for doesn't exist." }
        pre { color: "red", "log:\nattempted to navigate to: {route:?}" }
    }
}
