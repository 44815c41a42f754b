use thiserror::Error;

/// Configuration problems that make a run impossible. These are surfaced
/// before any placement work starts and are never silently clamped.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("selected count {selected} exceeds total point count {total}")]
    SelectedExceedsTotal { selected: usize, total: usize },

    #[error(
        "label box {box_width}x{box_height} cannot fit inside boundary \
         {boundary_width}x{boundary_height} in any direction"
    )]
    LabelExceedsBoundary {
        box_width: f32,
        box_height: f32,
        boundary_width: f32,
        boundary_height: f32,
    },

    #[error(
        "point radius {radius} leaves no room inside boundary \
         {boundary_width}x{boundary_height}"
    )]
    RadiusExceedsBoundary {
        radius: f32,
        boundary_width: f32,
        boundary_height: f32,
    },

    #[error("{name} must be positive, got {value}")]
    NonPositiveDimension { name: &'static str, value: f32 },

    #[error("at least one Monte-Carlo trial is required")]
    NoTrials,
}
