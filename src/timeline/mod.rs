//! Timeline module
//!
//! Dioxus components over the engine in `crate::core`. Components only
//! render session state and forward pointer input; they own no time state.

mod panel;
mod ruler;
mod playback_controls;
mod scrub_bar;
mod track_label;
mod track_lane;

pub use panel::TimelinePanel;
pub(crate) use playback_controls::TransportBar;
pub(crate) use track_lane::tone_color;
