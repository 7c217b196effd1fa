//! UI components around the timeline: title, status and the range inspector.

mod title_bar;
mod status_bar;
mod inspector;

pub use title_bar::TitleBar;
pub use status_bar::StatusBar;
pub use inspector::SessionInspector;
