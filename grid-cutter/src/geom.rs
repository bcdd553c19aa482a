use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}

impl Point {
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Texture coordinate normalized by the texture size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UvPoint {
    pub u: f32,
    pub v: f32,
}

/// Four corners of a cell: top-left, top-right, bottom-left, bottom-right.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CornerRect(pub [Point; 4]);

impl CornerRect {
    pub fn new(x1: u32, y1: u32, x2: u32, y2: u32) -> Self {
        Self([
            Point::new(x1, y1),
            Point::new(x2, y1),
            Point::new(x1, y2),
            Point::new(x2, y2),
        ])
    }

    pub fn top_left(&self) -> Point {
        self.0[0]
    }

    pub fn top_right(&self) -> Point {
        self.0[1]
    }

    pub fn bottom_left(&self) -> Point {
        self.0[2]
    }

    pub fn bottom_right(&self) -> Point {
        self.0[3]
    }

    pub fn points(&self) -> &[Point; 4] {
        &self.0
    }

    pub fn width(&self) -> u32 {
        self.top_right().x - self.top_left().x
    }

    pub fn height(&self) -> u32 {
        self.bottom_left().y - self.top_left().y
    }

    /// Half-open containment: right and bottom edges belong to the neighbour.
    pub fn contains(&self, x: u32, y: u32) -> bool {
        let tl = self.top_left();
        let br = self.bottom_right();
        x >= tl.x && x < br.x && y >= tl.y && y < br.y
    }

    pub fn to_uv(&self, texture_width: u32, texture_height: u32) -> [UvPoint; 4] {
        let norm = |value: u32, extent: u32| {
            if extent == 0 {
                0.0
            } else {
                value as f32 / extent as f32
            }
        };
        self.0.map(|p| UvPoint {
            u: norm(p.x, texture_width),
            v: norm(p.y, texture_height),
        })
    }
}

impl fmt::Display for CornerRect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [p0, p1, p2, p3] = &self.0;
        write!(f, "{p0} {p1} {p2} {p3}")
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellBox {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl CellBox {
    pub fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }
}

impl From<CellBox> for CornerRect {
    fn from(b: CellBox) -> Self {
        CornerRect::new(b.x, b.y, b.x + b.w, b.y + b.h)
    }
}

impl From<CornerRect> for CellBox {
    fn from(r: CornerRect) -> Self {
        let tl = r.top_left();
        CellBox::new(tl.x, tl.y, r.width(), r.height())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_renders_as_parenthesized_pair() {
        assert_eq!(Point::new(166, 93).to_string(), "(166, 93)");
    }

    #[test]
    fn corner_order_is_tl_tr_bl_br() {
        let r = CornerRect::new(10, 20, 30, 50);
        assert_eq!(r.top_left(), Point::new(10, 20));
        assert_eq!(r.top_right(), Point::new(30, 20));
        assert_eq!(r.bottom_left(), Point::new(10, 50));
        assert_eq!(r.bottom_right(), Point::new(30, 50));
        assert_eq!(r.to_string(), "(10, 20) (30, 20) (10, 50) (30, 50)");
    }

    #[test]
    fn cell_box_conversion_keeps_rectangle() {
        let b = CellBox::new(166, 93, 166, 93);
        let r = CornerRect::from(b);
        assert_eq!(r, CornerRect::new(166, 93, 332, 186));
        assert_eq!(CellBox::from(r), b);
    }

    #[test]
    fn contains_excludes_right_and_bottom_edges() {
        let r = CornerRect::new(0, 0, 4, 4);
        assert!(r.contains(0, 0));
        assert!(r.contains(3, 3));
        assert!(!r.contains(4, 0));
        assert!(!r.contains(0, 4));
    }

    #[test]
    fn uv_is_normalized_by_texture() {
        let uv = CornerRect::new(0, 0, 250, 75).to_uv(500, 300);
        assert_eq!(uv[0], UvPoint { u: 0.0, v: 0.0 });
        assert_eq!(uv[3], UvPoint { u: 0.5, v: 0.25 });
    }

    #[test]
    fn uv_on_zero_extent_is_zero() {
        let uv = CornerRect::new(0, 0, 0, 10).to_uv(0, 20);
        assert_eq!(uv[3], UvPoint { u: 0.0, v: 0.5 });
    }
}
