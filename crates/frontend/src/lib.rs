pub mod app;
pub mod domain;
pub mod shared;
pub mod usecases;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Run [`app::enhance_page`] now or, while the document is still loading, on `DOMContentLoaded`.
pub fn hydrate() -> Result<(), JsValue> {
    let document = shared::dom::document()?;

    if document.ready_state() != "loading" {
        return app::enhance_page();
    }

    let on_loaded = Closure::once_into_js(move || {
        if let Err(e) = app::enhance_page() {
            wasm_bindgen::throw_val(e);
        }
    });
    document.add_event_listener_with_callback("DOMContentLoaded", on_loaded.unchecked_ref())?;

    Ok(())
}

#[cfg_attr(not(test), wasm_bindgen(start))]
pub fn start() -> Result<(), JsValue> {
    // initializes logging using the `log` crate; the page config may lower the level later
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    hydrate()
}

#[cfg(all(test, target_arch = "wasm32"))]
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);
