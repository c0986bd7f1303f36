//! One-time reading of the order lines the server has already rendered.

use crate::shared::dom::{controls_with_name_suffix, last_row_is_even};
use contracts::domain::a001_order_line::{collect_suppliers, highest_index, Stripe};
use web_sys::{Document, HtmlTableElement};

/// Sorted, unique values of the `{index}_supplier` radios on the page.
pub fn get_all_suppliers(document: &Document) -> Vec<String> {
    let controls = controls_with_name_suffix(document, "_supplier");
    collect_suppliers(
        controls
            .iter()
            .filter_map(|(name, value)| Some((name.as_str(), value.as_deref()?))),
    )
}

/// Highest index among the `{index}_amount` fields, `None` if there are none.
pub fn get_highest_index(document: &Document) -> Option<u32> {
    let controls = controls_with_name_suffix(document, "_amount");
    highest_index(controls.iter().map(|(name, _)| name.as_str()))
}

/// Stripe of the next order line appended to `table`.
pub fn get_even_odd(table: &HtmlTableElement) -> Stripe {
    Stripe::after_last_row(last_row_is_even(table))
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    fn fixture(html: &str) -> Document {
        let document = crate::shared::dom::document().unwrap();
        document.body().unwrap().set_inner_html(html);
        document
    }

    fn table(document: &Document) -> HtmlTableElement {
        document
            .query_selector("table")
            .unwrap()
            .unwrap()
            .dyn_into()
            .unwrap()
    }

    #[wasm_bindgen_test]
    fn test_get_all_suppliers() {
        let document = fixture(
            r#"
            <input type="radio" name="0_supplier" value="A">
            <input type="radio" name="1_supplier" value="B">
            <input type="radio" name="2_supplier" value="A">
            <input type="radio" name="2_C_supplier" value="C">
            <input type="radio" name="3_supplier">
            <select name="supplier"><option value="D">D</option></select>
            "#,
        );
        assert_eq!(get_all_suppliers(&document), vec!["A", "B"]);
    }

    #[wasm_bindgen_test]
    fn test_get_highest_index() {
        let document = fixture("<p></p>");
        assert_eq!(get_highest_index(&document), None);

        let document = fixture(r#"<input name="0_amount"><input name="2_amount"><input name="9_A_amount">"#);
        assert_eq!(get_highest_index(&document), Some(2));
    }

    #[wasm_bindgen_test]
    fn test_get_even_odd() {
        let document = fixture("<table></table>");
        assert_eq!(get_even_odd(&table(&document)), Stripe::Odd);

        let document = fixture(r#"<table><tr class="even A"></tr><tr class="odd B"></tr></table>"#);
        assert_eq!(get_even_odd(&table(&document)), Stripe::Even);

        let document = fixture(r#"<table><tr class="odd A"></tr><tr class="even B"></tr></table>"#);
        assert_eq!(get_even_odd(&table(&document)), Stripe::Odd);
    }
}
