pub mod builder;
pub mod rows;
pub mod scan;

pub use builder::OrderLineBuilder;
