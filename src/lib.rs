pub mod config;
pub mod error;
pub mod field;
pub mod geometry;
pub mod place;

pub use config::PlacementConfig;
pub use error::ConfigError;
pub use geometry::{LabelBox, Point};
pub use place::{
    LabelSlot, Layout, OverlapReport, PlacementOutcome, SearchOutcome, SelectionOutcome,
    run_greedy, run_local_search, run_monte_carlo,
};
