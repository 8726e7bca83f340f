pub mod aggregate;

pub use aggregate::{resolve_rows, SelectedRow, Selection};
