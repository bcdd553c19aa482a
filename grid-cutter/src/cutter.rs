use log::debug;

use crate::{
    CellNumber,
    config::GridConfig,
    error::GridError,
    geom::{CellBox, CornerRect, UvPoint},
};

/// Corner rectangles of every cell, indexed by 1-based row-major cell number.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellLookup {
    config: GridConfig,
    // cells[number - 1]
    cells: Vec<CornerRect>,
}

pub fn compute_cell_corners(
    columns: u32,
    rows: u32,
    width: u32,
    height: u32,
) -> Result<CellLookup, GridError> {
    CellLookup::build(&GridConfig::new(columns, rows, width, height))
}

impl CellLookup {
    pub fn build(config: &GridConfig) -> Result<Self, GridError> {
        let cw = config.cell_width()?;
        let ch = config.cell_height()?;
        debug!(
            "cutting {}x{} texture into {}x{} cells of {cw}x{ch}",
            config.texture_width, config.texture_height, config.columns, config.rows
        );

        let mut cells = Vec::with_capacity(config.cell_count() as usize);
        for row in 0..config.rows {
            for col in 0..config.columns {
                let x1 = col * cw;
                let y1 = row * ch;
                cells.push(CornerRect::new(x1, y1, x1 + cw, y1 + ch));
            }
        }

        Ok(Self {
            config: *config,
            cells,
        })
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn get(&self, number: CellNumber) -> Result<&CornerRect, GridError> {
        number
            .checked_sub(1)
            .and_then(|i| self.cells.get(i as usize))
            .ok_or(GridError::CellNotFound {
                number,
                cell_count: self.config.cell_count(),
            })
    }

    pub fn cell_box(&self, number: CellNumber) -> Result<CellBox, GridError> {
        self.get(number).map(|r| CellBox::from(*r))
    }

    pub fn uv_corners(&self, number: CellNumber) -> Result<[UvPoint; 4], GridError> {
        let r = self.get(number)?;
        Ok(r.to_uv(self.config.texture_width, self.config.texture_height))
    }

    /// Cell containing pixel `(x, y)`, or `None` inside the truncated remainder strip.
    pub fn cell_at(&self, x: u32, y: u32) -> Option<CellNumber> {
        let first = self.cells.first()?;
        let (cw, ch) = (first.width(), first.height());
        if cw == 0 || ch == 0 {
            return None;
        }
        let (col, row) = (x / cw, y / ch);
        if col >= self.config.columns || row >= self.config.rows {
            return None;
        }
        Some(row * self.config.columns + col + 1)
    }

    /// Cells in ascending number order.
    pub fn iter(&self) -> impl Iterator<Item = (CellNumber, &CornerRect)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, r)| (i as CellNumber + 1, r))
    }
}
