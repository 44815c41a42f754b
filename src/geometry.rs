//! Point and label-box value types plus the AABB overlap predicate.
//!
//! All geometry here is pure: no epsilon, exact f32 comparison. Two
//! rectangles that merely touch along an edge do not overlap because the
//! predicate is strict on both axes.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    /// Whether this point must carry a label.
    pub selected: bool,
}

impl Point {
    /// Bounding square of the point: `[x-r, x+r] x [y-r, y+r]`.
    ///
    /// Point-box overlap is tested against this square, not the circle.
    pub fn bounding_square(&self) -> LabelBox {
        LabelBox {
            x: self.x - self.radius,
            y: self.y - self.radius,
            width: 2.0 * self.radius,
            height: 2.0 * self.radius,
        }
    }
}

/// Axis-aligned label rectangle. `(x, y)` is the top-left corner; width and
/// height are shared by every box in a run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelBox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl LabelBox {
    /// Strict AABB intersection: projections must overlap on both axes.
    pub fn overlaps(&self, other: &LabelBox) -> bool {
        self.x < other.x + other.width
            && self.x + self.width > other.x
            && self.y < other.y + other.height
            && self.y + self.height > other.y
    }

    pub fn overlaps_point(&self, point: &Point) -> bool {
        self.overlaps(&point.bounding_square())
    }
}
