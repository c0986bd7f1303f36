//! "Add line" button of the order table.
//!
//! The server renders the initial order lines. On attach the builder reads
//! them once (suppliers, highest index, stripe of the last row) into an
//! [`OrderSheet`]; from then on the sheet is the only source of truth and the
//! table only renders it.

use super::rows::OrderLineRows;
use super::scan::{get_all_suppliers, get_even_odd, get_highest_index};
use crate::shared::config::FormConfig;
use crate::shared::dom::scroll_into_view_next_frame;
use crate::shared::error::{FormError, FormResult};
use contracts::domain::a001_order_line::{FieldName, OrderLine, OrderSheet};
use leptos::mount::mount_to;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, HtmlTableElement, MouseEvent as WebMouseEvent};

#[derive(Clone, Copy)]
pub struct OrderLineBuilder {
    sheet: RwSignal<OrderSheet>,
}

impl OrderLineBuilder {
    /// Wire the builder to the page.
    ///
    /// Returns `Ok(None)` without touching the page when the table or the
    /// trigger is missing.
    pub fn attach(document: &Document, config: &FormConfig) -> FormResult<Option<Self>> {
        let table = document
            .query_selector(&config.table_selector)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlTableElement>().ok());
        let trigger = document.get_element_by_id(&config.add_line_id);
        let (Some(table), Some(trigger)) = (table, trigger) else {
            return Ok(None);
        };

        let sheet = OrderSheet::new(
            get_all_suppliers(document),
            get_highest_index(document),
            get_even_odd(&table),
        );
        log::debug!(
            "order lines: suppliers {:?}, next index {:?}, next stripe {}",
            sheet.suppliers(),
            sheet.next_index(),
            sheet.next_stripe().css_class()
        );
        let builder = Self {
            sheet: RwSignal::new(sheet),
        };

        // new lines go into their own section after the server-rendered rows
        let body = document
            .create_element("tbody")
            .map_err(FormError::dom)?
            .dyn_into::<HtmlElement>()
            .map_err(|_| FormError::Dom("<tbody> is not an HTMLElement".to_string()))?;
        table.append_child(&body).map_err(FormError::dom)?;

        let sheet = builder.sheet;
        mount_to(body, move || view! { <OrderLineRows sheet=sheet /> }).forget();

        let on_click = Closure::wrap(Box::new(move |e: WebMouseEvent| {
            e.prevent_default();
            builder.add_line();
        }) as Box<dyn FnMut(WebMouseEvent)>);
        trigger
            .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
            .map_err(FormError::dom)?;
        // the listener lives as long as the page
        on_click.forget();

        Ok(Some(builder))
    }

    /// Append one order line and bring its quantity field into view.
    pub fn add_line(&self) -> Option<OrderLine> {
        let Some(line) = self.sheet.try_update(|sheet| sheet.push_line()).flatten() else {
            log::warn!("no order line index left");
            return None;
        };
        log::info!("added order line {}", line.index);

        if self.sheet.with_untracked(|sheet| !sheet.suppliers().is_empty()) {
            scroll_into_view_next_frame(FieldName::amount(line.index).to_string());
        }

        Some(line)
    }

    pub fn sheet(&self) -> RwSignal<OrderSheet> {
        self.sheet
    }
}
