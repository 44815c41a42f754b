//! Random point-field generation.

use std::collections::HashSet;

use rand::Rng;
use rand::rngs::StdRng;
use rand::seq::index;

use crate::config::PlacementConfig;
use crate::geometry::Point;

/// Generate `num_points` uniformly random points, exactly `num_selected` of
/// which are flagged as requiring a label.
///
/// `x` is drawn from `[radius, width - radius]`. The vertical range depends
/// on whether a label can extend past the point's own bounding square: when
/// `2*radius >= box_height` the square already covers any label overhang and
/// `y` is drawn from `[radius, height - radius]`; otherwise `y` is kept
/// inside `[box_height/2, height - box_height/2]` so the left/right label
/// candidates of every point can fit vertically.
///
/// All randomness comes from `rng`; the same seeded RNG reproduces the same
/// field exactly.
pub fn generate_points(config: &PlacementConfig, rng: &mut StdRng) -> Vec<Point> {
    let radius = config.point_radius;
    let width = config.boundary_width;
    let height = config.boundary_height;

    let selected: HashSet<usize> = index::sample(rng, config.num_points, config.num_selected)
        .into_iter()
        .collect();

    let (y_start, y_end) = if 2.0 * radius >= config.box_height {
        (radius, height - radius)
    } else {
        (config.box_height / 2.0, height - config.box_height / 2.0)
    };

    (0..config.num_points)
        .map(|i| Point {
            x: rng.gen_range(radius..=width - radius),
            y: rng.gen_range(y_start..=y_end),
            radius,
            selected: selected.contains(&i),
        })
        .collect()
}
