mod json_workbook;
mod pool;

pub use json_workbook::JsonWorkbook;
pub use pool::{read_clue_pool, sample_clue_rows};

use crate::error::Result;

/// A named-table store. Tables are row-major string grids; a write
/// replaces the whole table, creating it when absent.
pub trait Workbook {
    fn table_exists(&self, name: &str) -> bool;

    /// Read a table's rows. Fails when the table does not exist.
    fn read_table(&self, name: &str) -> Result<Vec<Vec<String>>>;

    /// Clear-then-write the named table.
    fn write_table(&mut self, name: &str, rows: &[Vec<String>]) -> Result<()>;
}
