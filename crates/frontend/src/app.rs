use crate::domain::a001_order_line::ui::OrderLineBuilder;
use crate::domain::a002_order_date::ui::apply_default_date;
use crate::shared::config::FormConfig;
use crate::shared::dom::document;
use crate::usecases::u501_collect_order::watch_submit;
use wasm_bindgen::JsValue;

/// Enhance the order page once it has been parsed.
///
/// The features are independent: a missing date picker does not keep the
/// order table from working. The date error is still returned afterwards so
/// it shows up as an uncaught error in the console.
pub fn enhance_page() -> Result<(), JsValue> {
    let document = document()?;
    let config = FormConfig::load(&document);
    log::set_max_level(config.log_level().to_level_filter());

    let date_result = apply_default_date(&document, &config);

    if let Err(e) = OrderLineBuilder::attach(&document, &config) {
        log::error!("order lines: {}", e);
    }

    match watch_submit(&document, &config) {
        Ok(true) => {}
        Ok(false) => log::debug!("no order form matching `{}`", config.form_selector),
        Err(e) => log::error!("order form: {}", e),
    }

    date_result?;
    Ok(())
}
