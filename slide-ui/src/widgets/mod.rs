//! Reusable widgets

mod field_row;

pub use field_row::FieldRow;
