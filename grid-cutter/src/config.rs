use serde::{Deserialize, Serialize};

use crate::error::GridError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    pub columns: u32,
    pub rows: u32,
    pub texture_width: u32,
    pub texture_height: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        // skybox net: 3x4 faces over a 500x375 texture
        Self {
            columns: 3,
            rows: 4,
            texture_width: 500,
            texture_height: 375,
        }
    }
}

impl GridConfig {
    pub fn new(columns: u32, rows: u32, texture_width: u32, texture_height: u32) -> Self {
        Self {
            columns,
            rows,
            texture_width,
            texture_height,
        }
    }

    pub fn validate(&self) -> Result<(), GridError> {
        if self.columns == 0 || self.rows == 0 {
            return Err(GridError::InvalidConfiguration {
                columns: self.columns,
                rows: self.rows,
            });
        }
        Ok(())
    }

    pub fn cell_count(&self) -> u32 {
        self.columns * self.rows
    }

    /// Truncating: the remainder column of pixels is left outside every cell.
    pub fn cell_width(&self) -> Result<u32, GridError> {
        self.validate()?;
        Ok(self.texture_width / self.columns)
    }

    pub fn cell_height(&self) -> Result<u32, GridError> {
        self.validate()?;
        Ok(self.texture_height / self.rows)
    }
}
