pub mod a001_order_line;
pub mod a002_order_date;
