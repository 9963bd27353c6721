//! Input layer: row value model and the CSV row-loading adapter.

mod loader;
mod row;

pub use loader::{LoaderConfig, read_rows, read_rows_from_path};
pub use row::{CellValue, Row};
