//! Timeline engine
//!
//! Pure state and geometry, free of any UI types:
//! - time_space: seconds <-> pixels on a validated axis
//! - range / drag: the selected window and the handle drag state machine
//! - scroll_sync: one shared horizontal offset for ruler and lanes
//! - playback: the fixed-tick clock
//! - session: the single owner that ties them together

mod error;
pub mod time_space;
pub mod range;
pub mod drag;
pub mod scroll_sync;
pub mod playback;
pub mod lane_layout;
pub mod session;

pub use error::{Result, TimelineError};
