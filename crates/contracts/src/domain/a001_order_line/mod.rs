pub mod aggregate;
pub mod field_name;

pub use aggregate::{
    collect_suppliers, highest_index, AmountCell, OrderLine, OrderSheet, RowSpec, Stripe,
};
pub use field_name::{ArticleField, FieldName};
