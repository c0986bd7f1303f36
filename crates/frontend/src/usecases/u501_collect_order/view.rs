//! Logs what the order form is about to submit.
//!
//! Purely informational: the submission itself is never blocked or altered.

use crate::shared::config::FormConfig;
use crate::shared::error::{FormError, FormResult};
use contracts::usecases::u501_collect_order::OrderRequest;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, HtmlFormElement, HtmlInputElement, HtmlSelectElement,
    HtmlTextAreaElement,
};

/// Listen for submission of the order form. Returns `false` if there is no form.
pub fn watch_submit(document: &Document, config: &FormConfig) -> FormResult<bool> {
    let Some(form) = document
        .query_selector(&config.form_selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlFormElement>().ok())
    else {
        return Ok(false);
    };

    let form_for_submit = form.clone();
    let on_submit = Closure::wrap(Box::new(move |_: Event| {
        log_request(&form_fields(&form_for_submit));
    }) as Box<dyn FnMut(Event)>);
    form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())
        .map_err(FormError::dom)?;
    on_submit.forget();

    Ok(true)
}

fn log_request(fields: &[(String, String)]) {
    match OrderRequest::from_fields(fields.iter().map(|(name, value)| (name.as_str(), value.as_str()))) {
        Ok(request) => {
            log::info!(
                "ordering {} article(s) from {} for {}",
                request.articles.len(),
                request.supplier,
                request.date
            );
            if let Ok(json) = serde_json::to_string(&request) {
                log::debug!("{}", json);
            }
        }
        Err(e) => log::warn!("order form: {}", e),
    }
}

/// Name/value pairs the browser will submit: named controls only, unchecked
/// radios and checkboxes left out.
fn form_fields(form: &HtmlFormElement) -> Vec<(String, String)> {
    let elements = form.elements();
    (0..elements.length())
        .filter_map(|i| elements.item(i))
        .filter_map(|el| control_value(&el))
        .collect()
}

fn control_value(el: &Element) -> Option<(String, String)> {
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        let kind = input.type_();
        if matches!(kind.as_str(), "radio" | "checkbox") && !input.checked() {
            return None;
        }
        if matches!(kind.as_str(), "submit" | "button" | "reset" | "file") {
            return None;
        }
        return named(input.name(), input.value());
    }
    if let Some(select) = el.dyn_ref::<HtmlSelectElement>() {
        return named(select.name(), select.value());
    }
    if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
        return named(area.name(), area.value());
    }
    None
}

fn named(name: String, value: String) -> Option<(String, String)> {
    (!name.is_empty()).then_some((name, value))
}
