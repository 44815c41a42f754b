//! Overlap counting over a whole layout.
//!
//! The evaluator is a pure function of the layout: it returns a fresh
//! [`OverlapReport`] on every call and stores nothing on the entities, so
//! re-running it on an unchanged layout always yields identical results and
//! there is no stale-highlight state to reset.

use std::collections::BTreeSet;

use crate::geometry::{LabelBox, Point};

use super::Layout;

/// Result of one evaluation pass: the two overlap counters plus the ids of
/// every participant, for repair targeting and highlighting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlapReport {
    /// Unordered label-label pairs that intersect.
    pub label_label: usize,
    /// (box, point) pairs that intersect, the point taken as its bounding
    /// square. A box's own point counts like any other.
    pub label_point: usize,
    /// Owning point ids of boxes involved in at least one overlap.
    pub overlapping_boxes: BTreeSet<usize>,
    /// Ids of points involved in at least one label-point overlap.
    pub overlapping_points: BTreeSet<usize>,
}

impl OverlapReport {
    pub fn total(&self) -> usize {
        self.label_label + self.label_point
    }
}

/// Evaluate the committed boxes of `layout` against each other and against
/// every point. O(m^2) over boxes plus O(n*m) over point-box pairs.
pub fn evaluate(layout: &Layout) -> OverlapReport {
    let boxes: Vec<(usize, LabelBox)> = layout
        .placed_boxes()
        .map(|(id, label_box)| (id, *label_box))
        .collect();
    evaluate_boxes(&layout.points, &boxes)
}

/// Core pass over an explicit `(owner id, box)` list. The greedy placer and
/// the repairer call this with hypothetical box sets that are not (yet) part
/// of any layout.
pub(super) fn evaluate_boxes(points: &[Point], boxes: &[(usize, LabelBox)]) -> OverlapReport {
    let mut report = OverlapReport {
        label_label: 0,
        label_point: 0,
        overlapping_boxes: BTreeSet::new(),
        overlapping_points: BTreeSet::new(),
    };

    for i in 0..boxes.len() {
        let (id_a, box_a) = boxes[i];
        for &(id_b, box_b) in &boxes[i + 1..] {
            if box_a.overlaps(&box_b) {
                report.label_label += 1;
                report.overlapping_boxes.insert(id_a);
                report.overlapping_boxes.insert(id_b);
            }
        }
        for (point_id, point) in points.iter().enumerate() {
            if box_a.overlaps_point(point) {
                report.label_point += 1;
                report.overlapping_boxes.insert(id_a);
                report.overlapping_points.insert(point_id);
            }
        }
    }

    report
}
