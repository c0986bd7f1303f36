pub mod view;

pub use view::watch_submit;
