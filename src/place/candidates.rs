//! Directional label-box candidates for a single point.

use crate::config::PlacementConfig;
use crate::geometry::{LabelBox, Point};

/// The four canonical label directions relative to the owning point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Right,
    Above,
    Below,
    Left,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Above,
        Direction::Below,
        Direction::Left,
    ];
}

/// Label box for `point` in direction `dir`, or `None` when the box would
/// cross the canvas boundary.
///
/// Directions are always recomputed fresh; no caller ever removes a
/// previously tried direction from the pool.
pub fn candidate_box(point: &Point, dir: Direction, config: &PlacementConfig) -> Option<LabelBox> {
    let w = config.box_width;
    let h = config.box_height;
    let d = config.box_point_distance;
    let r = point.radius;

    let (x, y) = match dir {
        Direction::Right => (point.x + r + d, point.y - h / 2.0),
        Direction::Above => (point.x - w / 2.0, point.y + r + d),
        Direction::Below => (point.x - w / 2.0, point.y - r - d - h),
        Direction::Left => (point.x - r - d - w, point.y - h / 2.0),
    };

    let label_box = LabelBox {
        x,
        y,
        width: w,
        height: h,
    };
    within_boundary(&label_box, config).then_some(label_box)
}

/// All feasible candidates for `point`, in `Direction::ALL` order. May be
/// empty when every direction crosses the boundary; the caller decides what
/// that means (the point stays unlabeled).
pub fn feasible_candidates(point: &Point, config: &PlacementConfig) -> Vec<LabelBox> {
    Direction::ALL
        .iter()
        .filter_map(|&dir| candidate_box(point, dir, config))
        .collect()
}

pub(crate) fn within_boundary(label_box: &LabelBox, config: &PlacementConfig) -> bool {
    label_box.x >= 0.0
        && label_box.y >= 0.0
        && label_box.x + label_box.width <= config.boundary_width
        && label_box.y + label_box.height <= config.boundary_height
}
