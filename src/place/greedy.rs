//! Greedy incremental placement.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::config::PlacementConfig;
use crate::geometry::{LabelBox, Point};

use super::candidates::{Direction, candidate_box};
use super::evaluate::evaluate_boxes;
use super::{LabelSlot, Layout};

/// Place labels one selected point at a time, in ascending point-id order.
///
/// Each feasible candidate is scored by the overlap count that would result
/// from adding it to the boxes committed so far; later points are not yet
/// considered, so this is a single left-to-right pass. The minimum-score
/// candidate wins, ties broken uniformly at random. A point with no feasible
/// candidate is recorded as [`LabelSlot::Unlabeled`].
pub fn place_greedy(points: Vec<Point>, config: &PlacementConfig, rng: &mut StdRng) -> Layout {
    let mut layout = Layout::new(points);
    let mut committed: Vec<(usize, LabelBox)> = Vec::new();

    for id in 0..layout.points.len() {
        let point = layout.points[id];
        if !point.selected {
            continue;
        }

        let mut scored: Vec<(LabelBox, usize)> = Vec::new();
        for dir in Direction::ALL {
            if let Some(candidate) = candidate_box(&point, dir, config) {
                committed.push((id, candidate));
                let total = evaluate_boxes(&layout.points, &committed).total();
                committed.pop();
                scored.push((candidate, total));
            }
        }

        let Some(min_total) = scored.iter().map(|&(_, total)| total).min() else {
            tracing::debug!(point = id, "no feasible candidate, leaving unlabeled");
            layout.labels.insert(id, LabelSlot::Unlabeled);
            continue;
        };
        let minimal: Vec<LabelBox> = scored
            .iter()
            .filter(|&&(_, total)| total == min_total)
            .map(|&(candidate, _)| candidate)
            .collect();
        let choice = *minimal
            .choose(rng)
            .expect("minimal candidates are non-empty whenever a candidate scored");
        committed.push((id, choice));
        layout.labels.insert(id, LabelSlot::Placed(choice));
    }

    layout
}
