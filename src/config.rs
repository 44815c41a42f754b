use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Engine configuration. Defaults mirror the canonical point-field setup:
/// a 2000x2000 boundary, 1000 points with 200 selected, 88x23 labels held
/// one unit away from their point.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacementConfig {
    pub boundary_width: f32,
    pub boundary_height: f32,
    pub num_points: usize,
    pub num_selected: usize,
    pub point_radius: f32,
    pub box_width: f32,
    pub box_height: f32,
    pub box_point_distance: f32,
    /// Number of random layouts sampled by the Monte-Carlo selector.
    pub num_trials: usize,
    /// Consecutive non-improving local-search passes before convergence.
    pub stall_threshold: u32,
    /// Safety cap on local-search passes; hitting it reports
    /// `converged: false` instead of looping forever.
    pub max_passes: u32,
    /// Fixed seed for reproducible runs. `None` draws from entropy.
    pub seed: Option<u64>,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            boundary_width: 2000.0,
            boundary_height: 2000.0,
            num_points: 1000,
            num_selected: 200,
            point_radius: 4.0,
            box_width: 88.0,
            box_height: 23.0,
            box_point_distance: 1.0,
            num_trials: 20,
            stall_threshold: 4,
            max_passes: 1000,
            seed: None,
        }
    }
}

impl PlacementConfig {
    /// Reject configurations that can never produce a valid layout.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("boundary_width", self.boundary_width),
            ("boundary_height", self.boundary_height),
            ("point_radius", self.point_radius),
            ("box_width", self.box_width),
            ("box_height", self.box_height),
        ] {
            if !(value > 0.0) {
                return Err(ConfigError::NonPositiveDimension { name, value });
            }
        }
        if self.box_point_distance < 0.0 {
            return Err(ConfigError::NonPositiveDimension {
                name: "box_point_distance",
                value: self.box_point_distance,
            });
        }
        if self.num_selected > self.num_points {
            return Err(ConfigError::SelectedExceedsTotal {
                selected: self.num_selected,
                total: self.num_points,
            });
        }
        if self.box_width > self.boundary_width || self.box_height > self.boundary_height {
            return Err(ConfigError::LabelExceedsBoundary {
                box_width: self.box_width,
                box_height: self.box_height,
                boundary_width: self.boundary_width,
                boundary_height: self.boundary_height,
            });
        }
        if 2.0 * self.point_radius > self.boundary_width
            || 2.0 * self.point_radius > self.boundary_height
        {
            return Err(ConfigError::RadiusExceedsBoundary {
                radius: self.point_radius,
                boundary_width: self.boundary_width,
                boundary_height: self.boundary_height,
            });
        }
        if self.num_trials == 0 {
            return Err(ConfigError::NoTrials);
        }
        Ok(())
    }

    /// RNG for one run. Every random draw in the engine goes through the
    /// handle returned here, so a fixed seed reproduces a run exactly and
    /// never perturbs any other RNG.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(PlacementConfig::default().validate(), Ok(()));
    }

    #[test]
    fn selected_count_may_not_exceed_total() {
        let config = PlacementConfig {
            num_points: 10,
            num_selected: 11,
            ..PlacementConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::SelectedExceedsTotal {
                selected: 11,
                total: 10,
            })
        );
    }

    #[test]
    fn oversized_label_is_rejected() {
        let config = PlacementConfig {
            boundary_width: 60.0,
            boundary_height: 60.0,
            ..PlacementConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::LabelExceedsBoundary { .. })
        ));
    }

    #[test]
    fn non_positive_dimensions_are_rejected() {
        let config = PlacementConfig {
            box_height: 0.0,
            ..PlacementConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::NonPositiveDimension {
                name: "box_height",
                value: 0.0,
            })
        );
    }

    #[test]
    fn zero_trials_are_rejected() {
        let config = PlacementConfig {
            num_trials: 0,
            ..PlacementConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::NoTrials));
    }

    #[test]
    fn seeded_rngs_agree() {
        use rand::Rng;
        let config = PlacementConfig {
            seed: Some(7),
            ..PlacementConfig::default()
        };
        let mut a = config.rng();
        let mut b = config.rng();
        for _ in 0..16 {
            assert_eq!(a.gen_range(0.0f32..=1.0), b.gen_range(0.0f32..=1.0));
        }
    }
}
