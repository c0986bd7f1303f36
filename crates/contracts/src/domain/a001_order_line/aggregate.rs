use super::field_name::{ArticleField, FieldName};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

// ============================================================================
// Stripe
// ============================================================================

/// Чередование строк заказа ("even"/"odd"), по одному классу на строку заказа.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stripe {
    Even,
    Odd,
}

impl Stripe {
    pub fn css_class(&self) -> &'static str {
        match self {
            Stripe::Even => "even",
            Stripe::Odd => "odd",
        }
    }

    pub fn flip(self) -> Self {
        match self {
            Stripe::Even => Stripe::Odd,
            Stripe::Odd => Stripe::Even,
        }
    }

    /// Stripe for the group that follows the table's current last row.
    ///
    /// `None` means the table has no rows; `Some(true)` means the last row
    /// carries the `even` class. Any other last row is followed by `even`.
    pub fn after_last_row(last_row_is_even: Option<bool>) -> Self {
        match last_row_is_even {
            None | Some(true) => Stripe::Odd,
            Some(false) => Stripe::Even,
        }
    }
}

// ============================================================================
// Scanning existing controls
// ============================================================================

/// Sorted, duplicate-free supplier values of all index-level supplier radios.
///
/// Input is `(name, value)` pairs of existing controls; per-supplier controls
/// and unrelated names are ignored.
pub fn collect_suppliers<'a, I>(controls: I) -> Vec<String>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    controls
        .into_iter()
        .filter(|(name, _)| matches!(FieldName::parse(name), Some(FieldName::Supplier { .. })))
        .map(|(_, value)| value.to_string())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Highest `{index}_amount` index, `None` when there is no order line yet.
///
/// Names whose index does not fit in a `u32` are not order line names and
/// are skipped like any other foreign control.
pub fn highest_index<'a, I>(names: I) -> Option<u32>
where
    I: IntoIterator<Item = &'a str>,
{
    names
        .into_iter()
        .filter_map(|name| match FieldName::parse(name) {
            Some(FieldName::Amount { index }) => Some(index),
            _ => None,
        })
        .max()
}

// ============================================================================
// Order sheet
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub index: u32,
    pub stripe: Stripe,
}

/// Shared quantity cell of an order line, rendered on its first row only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmountCell {
    pub name: String,
    pub rowspan: usize,
    pub min: u32,
}

/// One `<tr>` of an order line: everything needed to render it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowSpec {
    pub supplier: String,
    pub classes: Vec<String>,
    pub supplier_field: String,
    pub id_field: String,
    pub name_field: String,
    pub size_field: String,
    pub amount: Option<AmountCell>,
}

impl RowSpec {
    pub fn class_attr(&self) -> String {
        self.classes.join(" ")
    }
}

/// In-memory model of the order lines added on this page.
///
/// The supplier list is captured once when the sheet is created and never
/// re-scanned; indices and stripes come from the sheet, not from the DOM.
/// Once `u32::MAX` has been handed out the sheet accepts no more lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderSheet {
    suppliers: Vec<String>,
    lines: Vec<OrderLine>,
    next_index: Option<u32>,
    next_stripe: Stripe,
}

impl OrderSheet {
    pub fn new(suppliers: Vec<String>, highest_index: Option<u32>, next_stripe: Stripe) -> Self {
        Self {
            suppliers,
            lines: Vec::new(),
            next_index: highest_index.map_or(Some(0), |index| index.checked_add(1)),
            next_stripe,
        }
    }

    pub fn suppliers(&self) -> &[String] {
        &self.suppliers
    }

    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    /// `None` when every index has been used.
    pub fn next_index(&self) -> Option<u32> {
        self.next_index
    }

    pub fn next_stripe(&self) -> Stripe {
        self.next_stripe
    }

    /// Appends a new order line with the next free index and stripe.
    ///
    /// `None`, leaving the sheet unchanged, when no index is left.
    pub fn push_line(&mut self) -> Option<OrderLine> {
        let line = OrderLine {
            index: self.next_index?,
            stripe: self.next_stripe,
        };
        self.lines.push(line);
        self.next_index = line.index.checked_add(1);
        self.next_stripe = self.next_stripe.flip();
        Some(line)
    }

    /// Rows of one order line, one per supplier in supplier order.
    pub fn rows(&self, line: &OrderLine) -> Vec<RowSpec> {
        let rowspan = self.suppliers.len();
        self.suppliers
            .iter()
            .enumerate()
            .map(|(position, supplier)| {
                let first = position == 0;

                let mut classes = vec![line.stripe.css_class().to_string(), supplier.clone()];
                if first {
                    classes.push("first".to_string());
                }

                let article = |field| FieldName::article(line.index, supplier, field).to_string();

                RowSpec {
                    supplier: supplier.clone(),
                    classes,
                    supplier_field: FieldName::supplier(line.index).to_string(),
                    id_field: article(ArticleField::Id),
                    name_field: article(ArticleField::Name),
                    size_field: article(ArticleField::Size),
                    amount: first.then(|| AmountCell {
                        name: FieldName::amount(line.index).to_string(),
                        rowspan,
                        min: 0,
                    }),
                }
            })
            .collect()
    }
}
