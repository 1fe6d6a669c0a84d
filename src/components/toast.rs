#![allow(non_snake_case)]

use dioxus::prelude::*;

// Toasts start hidden; callers reveal them by toggling the "show" class
// through document::eval.

#[component]
pub fn ErrorToast(id: String, content: String) -> Element {
  rsx! {
    div {
      id: "{id}",
      class: "toast toast-error",
      "{content}"
    }
  }
}

#[component]
pub fn SuccessToast(id: String, content: String) -> Element {
  rsx! {
    div {
      id: "{id}",
      class: "toast toast-success",
      "{content}"
    }
  }
}
