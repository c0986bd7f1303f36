//! Pre-fills the order date with the default delivery date.

use crate::shared::config::FormConfig;
use crate::shared::error::{FormError, FormResult};
use chrono::Local;
use contracts::domain::a002_order_date::{delivery_date, format_iso_date};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlInputElement};

/// First element named `name`, which must be an `<input>`.
///
/// Further elements with the same name are ignored.
pub fn find_date_picker(document: &Document, name: &str) -> FormResult<HtmlInputElement> {
    document
        .get_elements_by_name(name)
        .get(0)
        .and_then(|node| node.dyn_into::<HtmlInputElement>().ok())
        .ok_or_else(|| FormError::DatePickerNotFound {
            name: name.to_string(),
        })
}

/// Sets the picker's `value` attribute so that a form reset restores the default too.
pub fn apply_default_date(document: &Document, config: &FormConfig) -> FormResult<String> {
    let picker = find_date_picker(document, &config.date_field)?;

    let date = delivery_date(Local::now().naive_local(), config.cutoff_hour)
        .ok_or(FormError::DateOutOfRange)?;
    let value = format_iso_date(date);

    picker.set_attribute("value", &value).map_err(FormError::dom)?;
    log::debug!("default order date {}", value);

    Ok(value)
}
