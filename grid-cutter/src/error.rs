use thiserror::Error;

use crate::CellNumber;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("invalid grid configuration: {columns} columns x {rows} rows (both must be positive)")]
    InvalidConfiguration { columns: u32, rows: u32 },
    #[error("cell {number} not found (grid has cells 1..={cell_count})")]
    CellNotFound { number: CellNumber, cell_count: u32 },
}
