use dioxus::prelude::*;
use crate::constants::*;
use crate::core::drag::DragHandle;

#[component]
pub fn StatusBar(is_playing: bool, speed: f64, zoom: f64, active_handle: Option<DragHandle>) -> Element {
    let state = match (active_handle, is_playing) {
        (Some(handle), _) => format!("Dragging {}", handle.label()),
        (None, true) => "Playing".to_string(),
        (None, false) => "Paused".to_string(),
    };
    rsx! {
        div {
            style: "display: flex; align-items: center; justify-content: space-between; height: 22px; padding: 0 14px; background-color: {BG_SURFACE}; border-top: 1px solid {BORDER_DEFAULT}; font-size: 11px; color: {TEXT_DIM}; flex-shrink: 0;",
            span { "{state}" }
            div {
                style: "display: flex; gap: 16px; font-family: 'SF Mono', Consolas, monospace;",
                span { "{speed:.1}x" }
                span { "{zoom:.0} px/s" }
            }
        }
    }
}
