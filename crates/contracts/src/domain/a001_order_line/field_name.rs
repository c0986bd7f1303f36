//! Имена полей формы заказа.
//!
//! Every control of an order line encodes its line index and role in its
//! `name` attribute:
//!
//! ```text
//! {index}_supplier            radio, value = supplier
//! {index}_amount              shared quantity of the line
//! {index}_{supplier}_id       per-supplier article id
//! {index}_{supplier}_name     per-supplier article name
//! {index}_{supplier}_size     per-supplier article size
//! ```

use std::fmt;

const SUPPLIER_SUFFIX: &str = "_supplier";
const AMOUNT_SUFFIX: &str = "_amount";

/// Per-supplier text field of an order line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArticleField {
    Id,
    Name,
    Size,
}

impl ArticleField {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArticleField::Id => "id",
            ArticleField::Name => "name",
            ArticleField::Size => "size",
        }
    }

    fn from_str(s: &str) -> Option<Self> {
        match s {
            "id" => Some(ArticleField::Id),
            "name" => Some(ArticleField::Name),
            "size" => Some(ArticleField::Size),
            _ => None,
        }
    }
}

/// Parsed form of an order line control name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldName {
    Supplier {
        index: u32,
    },
    Amount {
        index: u32,
    },
    Article {
        index: u32,
        supplier: String,
        field: ArticleField,
    },
}

impl FieldName {
    pub fn supplier(index: u32) -> Self {
        FieldName::Supplier { index }
    }

    pub fn amount(index: u32) -> Self {
        FieldName::Amount { index }
    }

    pub fn article(index: u32, supplier: &str, field: ArticleField) -> Self {
        FieldName::Article {
            index,
            supplier: supplier.to_string(),
            field,
        }
    }

    /// Recognises `^\d+_supplier$`, `^\d+_amount$` and
    /// `^\d+_{supplier}_(id|name|size)$`. Anything else is `None`,
    /// including indices that do not fit in a `u32`.
    pub fn parse(name: &str) -> Option<Self> {
        if let Some(index) = name.strip_suffix(SUPPLIER_SUFFIX).and_then(parse_index) {
            return Some(FieldName::Supplier { index });
        }
        if let Some(index) = name.strip_suffix(AMOUNT_SUFFIX).and_then(parse_index) {
            return Some(FieldName::Amount { index });
        }

        let (index, rest) = name.split_once('_')?;
        let index = parse_index(index)?;
        // supplier names may contain '_', the role is always the last segment
        let (supplier, field) = rest.rsplit_once('_')?;
        if supplier.is_empty() {
            return None;
        }
        let field = ArticleField::from_str(field)?;

        Some(FieldName::Article {
            index,
            supplier: supplier.to_string(),
            field,
        })
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldName::Supplier { index } => write!(f, "{index}{SUPPLIER_SUFFIX}"),
            FieldName::Amount { index } => write!(f, "{index}{AMOUNT_SUFFIX}"),
            FieldName::Article {
                index,
                supplier,
                field,
            } => write!(f, "{index}_{supplier}_{}", field.as_str()),
        }
    }
}

/// Only plain ASCII digits; no sign, no whitespace, no overflow.
fn parse_index(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_index_level_names() {
        assert_eq!(FieldName::parse("0_supplier"), Some(FieldName::supplier(0)));
        assert_eq!(FieldName::parse("12_amount"), Some(FieldName::amount(12)));
    }

    #[test]
    fn test_parse_article_names() {
        assert_eq!(
            FieldName::parse("3_A_id"),
            Some(FieldName::article(3, "A", ArticleField::Id))
        );
        assert_eq!(
            FieldName::parse("7_aqua_shop_size"),
            Some(FieldName::article(7, "aqua_shop", ArticleField::Size))
        );
    }

    #[test]
    fn test_per_supplier_controls_are_not_index_level() {
        // `{i}_{supplier}_supplier` style names must not be taken for the radio
        assert_eq!(FieldName::parse("1_A_supplier"), None);
        assert_eq!(FieldName::parse("1_A_amount"), None);
    }

    #[test]
    fn test_rejects_foreign_names() {
        for name in [
            "date",
            "supplier",
            "_supplier",
            "x_supplier",
            "-1_amount",
            " 1_amount",
            "1__name",
            "1_A_colour",
            "99999999999_amount",
        ] {
            assert_eq!(FieldName::parse(name), None, "{name}");
        }
    }

    #[test]
    fn test_display_is_canonical() {
        assert_eq!(FieldName::supplier(3).to_string(), "3_supplier");
        assert_eq!(FieldName::amount(3).to_string(), "3_amount");
        assert_eq!(
            FieldName::article(3, "B", ArticleField::Name).to_string(),
            "3_B_name"
        );
        let name = FieldName::article(4, "long_supplier", ArticleField::Size);
        assert_eq!(FieldName::parse(&name.to_string()), Some(name));
    }
}
