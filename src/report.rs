use std::{fmt, io::Write};

use anyhow::Context;
use grid_cutter::{CellLookup, CellNumber, CornerRect, GridConfig, GridError};
use log::trace;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    pub grid: GridConfig,
    pub faces: Vec<CellNumber>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            grid: GridConfig::default(),
            // cube faces of the skybox net
            faces: vec![2, 4, 5, 6, 8, 11],
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Face {
    pub number: CellNumber,
    pub corners: CornerRect,
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Face {}: {}", self.number, self.corners)
    }
}

/// Looks up `numbers` in order; the first unknown number aborts the selection.
pub fn select_faces(lookup: &CellLookup, numbers: &[CellNumber]) -> Result<Vec<Face>, GridError> {
    numbers
        .iter()
        .map(|&number| -> Result<Face, GridError> {
            let corners = *lookup.get(number)?;
            trace!("face {number}: {corners}");
            Ok(Face { number, corners })
        })
        .collect()
}

pub fn write_report<W: Write>(
    out: &mut W,
    lookup: &CellLookup,
    numbers: &[CellNumber],
) -> anyhow::Result<()> {
    let faces = select_faces(lookup, numbers).context("selecting faces")?;
    for face in faces {
        writeln!(out, "{face}")?;
    }
    Ok(())
}

impl ReportConfig {
    pub fn run<W: Write>(&self, out: &mut W) -> anyhow::Result<()> {
        let lookup = CellLookup::build(&self.grid).context("building cell lookup")?;
        write_report(out, &lookup, &self.faces)
    }
}
