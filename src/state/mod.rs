//! State management module
//!
//! Data the timeline renders but does not own:
//! - Track: One recorded data series (line, bar, or markers)
//! - TimelineSettings: Session duration, zoom, playback cadence, jump policy
//! - fixtures: The canned demo session

mod track;
mod settings;
pub mod fixtures;

pub use track::*;
pub use settings::*;
