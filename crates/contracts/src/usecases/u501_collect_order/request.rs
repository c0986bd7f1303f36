use crate::domain::a001_order_line::{ArticleField, FieldName};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use thiserror::Error;

/// Ошибки разбора отправляемой формы заказа
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CollectError {
    #[error("missing supplier or date")]
    MissingSupplierOrDate,

    #[error("missing {index}_supplier or {index}_{supplier}_name")]
    MissingLineField { index: u32, supplier: String },

    #[error("order for supplier {0} not found")]
    SupplierNotFound(String),
}

/// One article of a submitted order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderArticle {
    pub name: String,
    pub amount: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
}

/// Articles of every order line with a non-zero amount, grouped by the
/// supplier selected on that line. Lines keep their index order.
///
/// A name submitted more than once reads as its first value.
pub fn group_articles<'a, I>(
    fields: I,
) -> Result<BTreeMap<String, Vec<OrderArticle>>, CollectError>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut first_values: HashMap<&str, &str> = HashMap::new();
    for (name, value) in fields {
        first_values.entry(name).or_insert(value);
    }
    let fields = first_values;

    let mut amounts: Vec<(u32, &str)> = fields
        .iter()
        .filter_map(|(name, amount)| match FieldName::parse(name) {
            Some(FieldName::Amount { index }) if !amount.is_empty() && *amount != "0" => {
                Some((index, *amount))
            }
            _ => None,
        })
        .collect();
    amounts.sort_by_key(|(index, _)| *index);

    let mut grouped: BTreeMap<String, Vec<OrderArticle>> = BTreeMap::new();
    for (index, amount) in amounts {
        let supplier = fields
            .get(FieldName::supplier(index).to_string().as_str())
            .copied()
            .ok_or_else(|| CollectError::MissingLineField {
                index,
                supplier: String::new(),
            })?;
        let lookup = |field| {
            fields
                .get(FieldName::article(index, supplier, field).to_string().as_str())
                .map(|value| value.to_string())
        };
        let name = lookup(ArticleField::Name).ok_or_else(|| CollectError::MissingLineField {
            index,
            supplier: supplier.to_string(),
        })?;

        grouped
            .entry(supplier.to_string())
            .or_default()
            .push(OrderArticle {
                name,
                amount: amount.to_string(),
                id: lookup(ArticleField::Id),
                size: lookup(ArticleField::Size),
            });
    }

    Ok(grouped)
}

/// What the order form submits for the supplier chosen at the top of the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRequest {
    pub supplier: String,
    pub date: String,
    pub articles: Vec<OrderArticle>,
}

impl OrderRequest {
    pub fn from_fields<'a, I>(fields: I) -> Result<Self, CollectError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let fields: Vec<(&str, &str)> = fields.into_iter().collect();
        let top_level = |key: &str| {
            fields
                .iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| value.to_string())
        };

        let (Some(supplier), Some(date)) = (top_level("supplier"), top_level("date")) else {
            return Err(CollectError::MissingSupplierOrDate);
        };

        let mut grouped = group_articles(fields.iter().copied())?;
        let articles = grouped
            .remove(&supplier)
            .ok_or_else(|| CollectError::SupplierNotFound(supplier.clone()))?;

        Ok(Self {
            supplier,
            date,
            articles,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FORM: &[(&str, &str)] = &[
        ("supplier", "B"),
        ("date", "2022-01-05"),
        ("0_supplier", "A"),
        ("0_A_id", "17"),
        ("0_A_name", "Filter"),
        ("0_A_size", "2x3"),
        ("0_amount", "2"),
        ("1_supplier", "B"),
        ("1_B_name", "Pump"),
        ("1_amount", "1"),
        ("2_supplier", "B"),
        ("2_B_name", "Hose"),
        ("2_amount", "0"),
        ("3_supplier", "B"),
        ("3_B_id", "9"),
        ("3_B_name", "Valve"),
        ("3_amount", "4"),
    ];

    #[test]
    fn test_group_articles_skips_zero_amounts() {
        let grouped = group_articles(FORM.iter().copied()).unwrap();

        assert_eq!(grouped.len(), 2);
        assert_eq!(
            grouped["A"],
            vec![OrderArticle {
                name: "Filter".into(),
                amount: "2".into(),
                id: Some("17".into()),
                size: Some("2x3".into()),
            }]
        );
        let names: Vec<&str> = grouped["B"].iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["Pump", "Valve"]);
    }

    #[test]
    fn test_group_articles_missing_name() {
        let fields = [("5_supplier", "A"), ("5_amount", "1")];
        assert_eq!(
            group_articles(fields),
            Err(CollectError::MissingLineField {
                index: 5,
                supplier: "A".into(),
            })
        );
    }

    #[test]
    fn test_group_articles_unselected_line() {
        let fields = [("5_A_name", "Filter"), ("5_amount", "1")];
        assert!(matches!(
            group_articles(fields),
            Err(CollectError::MissingLineField { index: 5, .. })
        ));
    }

    #[test]
    fn test_order_request_for_selected_supplier() {
        let request = OrderRequest::from_fields(FORM.iter().copied()).unwrap();
        assert_eq!(request.supplier, "B");
        assert_eq!(request.date, "2022-01-05");
        assert_eq!(request.articles.len(), 2);
        assert_eq!(request.articles[1].id.as_deref(), Some("9"));
        assert_eq!(request.articles[1].size, None);
    }

    #[test]
    fn test_repeated_names_read_first_value() {
        let fields = [
            ("supplier", "A"),
            ("date", "2022-01-05"),
            ("supplier", "B"),
            ("0_supplier", "A"),
            ("0_A_name", "First"),
            ("0_A_name", "Second"),
            ("0_amount", "3"),
            ("0_amount", "0"),
        ];
        let request = OrderRequest::from_fields(fields).unwrap();
        assert_eq!(request.supplier, "A");
        assert_eq!(request.articles.len(), 1);
        assert_eq!(request.articles[0].name, "First");
        assert_eq!(request.articles[0].amount, "3");
    }

    #[test]
    fn test_order_request_errors() {
        assert_eq!(
            OrderRequest::from_fields([("date", "2022-01-05")]),
            Err(CollectError::MissingSupplierOrDate)
        );
        assert_eq!(
            OrderRequest::from_fields([("supplier", "C"), ("date", "2022-01-05")]),
            Err(CollectError::SupplierNotFound("C".into()))
        );
    }

    #[test]
    fn test_article_json_skips_missing_fields() {
        let article = OrderArticle {
            name: "Pump".into(),
            amount: "1".into(),
            id: None,
            size: None,
        };
        assert_eq!(
            serde_json::to_string(&article).unwrap(),
            r#"{"name":"Pump","amount":"1"}"#
        );
    }
}
