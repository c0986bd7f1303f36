//! Small helpers over `web_sys` for reading the server-rendered order page.

use super::error::{FormError, FormResult};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlTableElement};

pub fn document() -> FormResult<Document> {
    web_sys::window()
        .ok_or(FormError::NoWindow)?
        .document()
        .ok_or(FormError::NoDocument)
}

/// `(name, value attribute)` of every element whose `name` ends with `suffix`.
///
/// Reads the `value` *attribute*, i.e. what the server rendered, not what
/// the user has typed since.
pub fn controls_with_name_suffix(document: &Document, suffix: &str) -> Vec<(String, Option<String>)> {
    let selector = format!("[name$=\"{}\"]", suffix);
    let Ok(nodes) = document.query_selector_all(&selector) else {
        return Vec::new();
    };

    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .filter_map(|el| {
            let name = el.get_attribute("name")?;
            Some((name, el.get_attribute("value")))
        })
        .collect()
}

/// `None` for a table without rows, otherwise whether its last row has the `even` class.
pub fn last_row_is_even(table: &HtmlTableElement) -> Option<bool> {
    let rows = table.rows();
    let count = rows.length();
    if count == 0 {
        return None;
    }
    let last = rows.item(count - 1)?;
    Some(last.class_list().contains("even"))
}

/// Scroll the first element named `name` into view on the next frame,
/// after pending renders have been flushed.
pub fn scroll_into_view_next_frame(name: String) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let callback = Closure::once_into_js(move || {
        let Ok(document) = document() else { return };
        let Some(element) = document
            .get_elements_by_name(&name)
            .get(0)
            .and_then(|node| node.dyn_into::<Element>().ok())
        else {
            log::debug!("nothing named `{}` to scroll to", name);
            return;
        };
        element.scroll_into_view();
    });
    if let Err(e) = window.request_animation_frame(callback.unchecked_ref::<js_sys::Function>()) {
        log::debug!("cannot schedule scroll: {:?}", e);
    }
}
