pub mod request;

pub use request::{group_articles, CollectError, OrderArticle, OrderRequest};
