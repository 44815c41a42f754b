//! Random baseline placement: one uniformly random feasible direction per
//! selected point.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::config::PlacementConfig;
use crate::geometry::Point;

use super::candidates::feasible_candidates;
use super::{LabelSlot, Layout};

/// Assign every selected point a box in a uniformly random feasible
/// direction. Points with no feasible direction are recorded as
/// [`LabelSlot::Unlabeled`].
///
/// The choice is uniform over the feasible set, which matches
/// rejection-sampling over all four directions without the unbounded retry
/// loop.
pub fn place_random(points: Vec<Point>, config: &PlacementConfig, rng: &mut StdRng) -> Layout {
    let mut layout = Layout::new(points);
    for id in 0..layout.points.len() {
        let point = layout.points[id];
        if !point.selected {
            continue;
        }
        let slot = match feasible_candidates(&point, config).choose(rng) {
            Some(&label_box) => LabelSlot::Placed(label_box),
            None => LabelSlot::Unlabeled,
        };
        layout.labels.insert(id, slot);
    }
    layout
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::place::candidates::within_boundary;

    fn config(seed: u64) -> PlacementConfig {
        PlacementConfig {
            boundary_width: 500.0,
            boundary_height: 500.0,
            num_points: 10,
            num_selected: 5,
            point_radius: 1.0,
            box_width: 50.0,
            box_height: 6.0,
            box_point_distance: 1.0,
            seed: Some(seed),
            ..PlacementConfig::default()
        }
    }

    #[test]
    fn every_selected_point_gets_a_slot() {
        let config = config(3);
        let mut rng = config.rng();
        let points = crate::field::generate_points(&config, &mut rng);
        let layout = place_random(points, &config, &mut rng);
        for (id, point) in layout.points.iter().enumerate() {
            assert_eq!(
                layout.labels.contains_key(&id),
                point.selected,
                "slot presence must match selection for point {id}"
            );
        }
    }

    #[test]
    fn placed_boxes_respect_the_boundary() {
        let config = config(11);
        let mut rng = config.rng();
        let points = crate::field::generate_points(&config, &mut rng);
        let layout = place_random(points, &config, &mut rng);
        for (id, label_box) in layout.placed_boxes() {
            assert!(within_boundary(label_box, &config), "box {id} out of bounds");
        }
    }

    #[test]
    fn infeasible_point_is_recorded_unlabeled() {
        let config = config(0);
        let mut rng = config.rng();
        let corner = Point {
            x: 0.0,
            y: 0.0,
            radius: 1.0,
            selected: true,
        };
        let layout = place_random(vec![corner], &config, &mut rng);
        assert_eq!(layout.labels.get(&0), Some(&LabelSlot::Unlabeled));
        assert_eq!(layout.unlabeled(), vec![0]);
    }
}
