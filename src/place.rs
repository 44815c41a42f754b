//! Placement strategies and the layout they all produce.
//!
//! A [`Layout`] pairs every point with its label explicitly by point id (an
//! index into the point arena) instead of relying on insertion order. Each
//! selected point owns exactly one [`LabelSlot`]; unselected points own none.

mod candidates;
mod evaluate;
mod greedy;
mod local_search;
mod monte_carlo;
mod random;

pub use candidates::{Direction, candidate_box, feasible_candidates};
pub use evaluate::{OverlapReport, evaluate};
pub use greedy::place_greedy;
pub use local_search::{SearchOutcome, refine};
pub use monte_carlo::{SelectionOutcome, select_monte_carlo};
pub use random::place_random;

use std::collections::BTreeMap;

use crate::config::PlacementConfig;
use crate::error::ConfigError;
use crate::field::generate_points;
use crate::geometry::{LabelBox, Point};

/// Label state of one selected point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LabelSlot {
    Placed(LabelBox),
    /// The point is selected but no candidate direction was feasible.
    Unlabeled,
}

impl LabelSlot {
    pub fn placed(&self) -> Option<&LabelBox> {
        match self {
            LabelSlot::Placed(label_box) => Some(label_box),
            LabelSlot::Unlabeled => None,
        }
    }
}

/// A point field plus the label assignment for its selected points.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub points: Vec<Point>,
    /// Point id -> label slot. Contains an entry for every selected point
    /// once a placement strategy has run, and nothing else.
    pub labels: BTreeMap<usize, LabelSlot>,
}

impl Layout {
    pub fn new(points: Vec<Point>) -> Self {
        Self {
            points,
            labels: BTreeMap::new(),
        }
    }

    /// Committed boxes with their owning point ids.
    pub fn placed_boxes(&self) -> impl Iterator<Item = (usize, &LabelBox)> {
        self.labels
            .iter()
            .filter_map(|(&id, slot)| slot.placed().map(|label_box| (id, label_box)))
    }

    /// Selected points that ended up without a box.
    pub fn unlabeled(&self) -> Vec<usize> {
        self.labels
            .iter()
            .filter(|(_, slot)| matches!(slot, LabelSlot::Unlabeled))
            .map(|(&id, _)| id)
            .collect()
    }
}

/// Final layout of a one-shot strategy together with its evaluation.
#[derive(Debug, Clone)]
pub struct PlacementOutcome {
    pub layout: Layout,
    pub label_label_overlaps: usize,
    pub label_point_overlaps: usize,
}

impl PlacementOutcome {
    pub fn total_overlaps(&self) -> usize {
        self.label_label_overlaps + self.label_point_overlaps
    }
}

/// Generate a point field and place labels greedily.
pub fn run_greedy(config: &PlacementConfig) -> Result<PlacementOutcome, ConfigError> {
    config.validate()?;
    let mut rng = config.rng();
    let points = generate_points(config, &mut rng);
    let layout = place_greedy(points, config, &mut rng);
    let report = evaluate(&layout);
    Ok(PlacementOutcome {
        layout,
        label_label_overlaps: report.label_label,
        label_point_overlaps: report.label_point,
    })
}

/// Generate a point field, place labels randomly, then repair with
/// local search until the overlap count stalls.
pub fn run_local_search(config: &PlacementConfig) -> Result<SearchOutcome, ConfigError> {
    config.validate()?;
    let mut rng = config.rng();
    let points = generate_points(config, &mut rng);
    let layout = place_random(points, config, &mut rng);
    Ok(refine(layout, config, &mut rng))
}

/// Generate a point field and keep the best of `num_trials` random layouts.
pub fn run_monte_carlo(config: &PlacementConfig) -> Result<SelectionOutcome, ConfigError> {
    config.validate()?;
    let mut rng = config.rng();
    let points = generate_points(config, &mut rng);
    Ok(select_monte_carlo(&points, config, &mut rng))
}
