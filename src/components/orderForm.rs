#![allow(non_snake_case)]

use std::collections::HashMap;
use dioxus::{logger::tracing::info, prelude::*};
use web_sys::{window, wasm_bindgen::JsCast, HtmlInputElement};

use crate::pages::dashboard::Action;
use crate::utils::flow::SubmissionPhase;

#[component]
pub fn OrderForm(mut form_data: Signal<HashMap<String, FormValue>>, phase: Signal<SubmissionPhase>) -> Element {
  let actions = use_coroutine_handle::<Action>();

  rsx! {
    form {
      id: "order-form",
      onsubmit: move |evt| {
        info!("order form submitted with {:?}", evt.values());
        let d = &mut form_data.write();
        d.extend(evt.values());
        actions.send(Action::Submit);
        // clear the quantity for the next order
        if let Some(input) = window()
          .and_then(|w| w.document())
          .and_then(|doc| doc.get_element_by_id("quantity"))
          .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        {
          input.set_value("");
        }
      },
      div {
        class: "form-group",
        label { class: "form-label", r#for: "username", "Username" },
        input { class: "form-input", id: "username", name: "username", r#type: "text" }
      },
      div {
        class: "form-group",
        label { class: "form-label", r#for: "product", "Product" },
        input { class: "form-input", id: "product", name: "product", r#type: "text" }
      },
      div {
        class: "form-group",
        label { class: "form-label", r#for: "quantity", "Quantity" },
        input { class: "form-input", id: "quantity", name: "quantity", r#type: "number" }
      },
      button {
        id: "submit-btn",
        class: "button",
        r#type: "submit",
        disabled: !phase().can_submit(),
        "Submit order"
      },
      p {
        id: "order-status",
        class: "order-status",
        "{phase().status_line()}"
      }
    }
  }
}
