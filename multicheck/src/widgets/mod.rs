pub mod multi_checkbox;

pub use multi_checkbox::MultiCheckbox;
