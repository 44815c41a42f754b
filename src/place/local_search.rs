//! Local-search repair: move overlapping boxes to their best direction until
//! the overlap count stalls.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::config::PlacementConfig;
use crate::geometry::LabelBox;

use super::candidates::{Direction, candidate_box};
use super::evaluate::{OverlapReport, evaluate, evaluate_boxes};
use super::{LabelSlot, Layout};

/// Result of a local-search run.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub layout: Layout,
    pub label_label_overlaps: usize,
    pub label_point_overlaps: usize,
    /// Repair passes executed, including the stalled ones.
    pub passes: u32,
    /// False when the safety cap cut the loop before the stall rule fired.
    pub converged: bool,
}

impl SearchOutcome {
    pub fn total_overlaps(&self) -> usize {
        self.label_label_overlaps + self.label_point_overlaps
    }
}

/// Running-minimum stall detector.
///
/// A pass whose count equals the recorded minimum increments the stall
/// counter; any other count, better or worse, overwrites the minimum and
/// resets the counter. This is deliberately not a strict-descent check: the
/// count may oscillate (5, 3, 5, 3, ...) forever without converging, and
/// only repeating the recorded minimum makes progress toward termination.
struct StallTracker {
    min_seen: Option<usize>,
    stall: u32,
    threshold: u32,
}

impl StallTracker {
    fn new(threshold: u32) -> Self {
        Self {
            min_seen: None,
            stall: 0,
            threshold,
        }
    }

    /// Record one pass's total; true once the count has repeated the minimum
    /// `threshold` times in a row.
    fn observe(&mut self, total: usize) -> bool {
        if self.min_seen == Some(total) {
            self.stall += 1;
        } else {
            self.min_seen = Some(total);
            self.stall = 0;
        }
        self.stall >= self.threshold
    }
}

/// Repair `layout` in place until convergence or the pass cap.
///
/// Each pass moves every box flagged overlapping by the latest evaluation to
/// its best-scoring feasible direction (whole-layout overlap count with only
/// that box moved; earlier moves in the same pass are visible), then
/// re-evaluates the full layout once.
pub fn refine(mut layout: Layout, config: &PlacementConfig, rng: &mut StdRng) -> SearchOutcome {
    let mut report = evaluate(&layout);
    let mut tracker = StallTracker::new(config.stall_threshold);
    let mut passes = 0u32;
    let mut converged = false;

    while passes < config.max_passes {
        move_overlapping_boxes(&mut layout, &report, config, rng);
        report = evaluate(&layout);
        passes += 1;
        let total = report.total();
        tracing::debug!(pass = passes, total, "repair pass complete");
        if tracker.observe(total) {
            converged = true;
            break;
        }
    }
    if !converged {
        tracing::warn!(
            passes,
            total = report.total(),
            "local search hit the pass cap without converging"
        );
    }

    SearchOutcome {
        label_label_overlaps: report.label_label,
        label_point_overlaps: report.label_point,
        layout,
        passes,
        converged,
    }
}

/// One repair pass: re-place every box flagged in `report`, ascending by
/// owning point id. Boxes whose four directions are somehow all infeasible
/// keep their current position.
fn move_overlapping_boxes(
    layout: &mut Layout,
    report: &OverlapReport,
    config: &PlacementConfig,
    rng: &mut StdRng,
) {
    for &id in &report.overlapping_boxes {
        let point = layout.points[id];
        let mut others: Vec<(usize, LabelBox)> = layout
            .placed_boxes()
            .filter(|&(owner, _)| owner != id)
            .map(|(owner, label_box)| (owner, *label_box))
            .collect();

        let mut scored: Vec<(LabelBox, usize)> = Vec::new();
        for dir in Direction::ALL {
            if let Some(candidate) = candidate_box(&point, dir, config) {
                others.push((id, candidate));
                let total = evaluate_boxes(&layout.points, &others).total();
                others.pop();
                scored.push((candidate, total));
            }
        }
        let Some(min_total) = scored.iter().map(|&(_, total)| total).min() else {
            continue;
        };
        let minimal: Vec<LabelBox> = scored
            .iter()
            .filter(|&&(_, total)| total == min_total)
            .map(|&(candidate, _)| candidate)
            .collect();
        let Some(&choice) = minimal.choose(rng) else {
            continue;
        };
        tracing::trace!(point = id, total = min_total, "moving overlapping box");
        layout.labels.insert(id, LabelSlot::Placed(choice));
    }
}
