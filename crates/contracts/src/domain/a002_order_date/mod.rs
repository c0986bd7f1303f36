pub mod delivery_date;

pub use delivery_date::{delivery_date, format_iso_date, DEFAULT_CUTOFF_HOUR};
