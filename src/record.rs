use std::io::Write;

use grid_cutter::{CellBox, CellLookup, CellNumber, Point, UvPoint};
use serde::Serialize;

use crate::report::Face;

#[derive(Serialize, Debug)]
pub struct FaceRecord {
    pub schema: &'static str,
    pub face: CellNumber,
    pub corners: [Point; 4],
    #[serde(rename = "box")]
    pub cell_box: CellBox,
    pub uv: [UvPoint; 4],
}

impl FaceRecord {
    pub fn new(face: &Face, lookup: &CellLookup) -> Self {
        let cfg = lookup.config();
        Self {
            schema: "v1",
            face: face.number,
            corners: *face.corners.points(),
            cell_box: CellBox::from(face.corners),
            uv: face.corners.to_uv(cfg.texture_width, cfg.texture_height),
        }
    }
}

/// One JSON object per line.
pub fn write_records_jsonl<W: Write>(
    out: &mut W,
    lookup: &CellLookup,
    faces: &[Face],
) -> anyhow::Result<()> {
    for face in faces {
        let json = serde_json::to_string(&FaceRecord::new(face, lookup))?;
        writeln!(out, "{json}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::select_faces;
    use grid_cutter::GridConfig;
    use serde_json::Value;

    #[test]
    fn records_are_json_lines() {
        let lookup = CellLookup::build(&GridConfig::default()).unwrap();
        let faces = select_faces(&lookup, &[1, 12]).unwrap();
        let mut out = Vec::new();
        write_records_jsonl(&mut out, &lookup, &faces).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<Value> = text
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines.len(), 2);

        assert_eq!(lines[0]["schema"], "v1");
        assert_eq!(lines[0]["face"], 1);
        assert_eq!(lines[0]["corners"][1]["x"], 166);
        assert_eq!(lines[1]["box"]["x"], 332);
        assert_eq!(lines[1]["box"]["y"], 279);
        assert_eq!(lines[1]["box"]["w"], 166);
        assert_eq!(lines[1]["box"]["h"], 93);
        assert_eq!(lines[1]["uv"][0]["u"].as_f64().unwrap() as f32, 332.0 / 500.0);
    }
}
