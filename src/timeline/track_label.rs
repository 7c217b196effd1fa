use dioxus::prelude::*;
use crate::constants::{BORDER_SUBTLE, TEXT_DIM, TEXT_SECONDARY};

/// Track label in the sidebar; clicking it expands or collapses the lane
#[component]
pub fn TrackLabel(
    name: String,
    color: &'static str,
    height: f64,
    expanded: bool,
    on_toggle: EventHandler<MouseEvent>,
) -> Element {
    let chevron = if expanded { "▾" } else { "▸" };
    rsx! {
        div {
            style: "
                display: flex; align-items: center; gap: 10px; height: {height}px;
                padding: 0 12px; border-bottom: 1px solid {BORDER_SUBTLE};
                font-size: 12px; color: {TEXT_SECONDARY}; cursor: pointer;
                flex-shrink: 0;
            ",
            onclick: move |e| on_toggle.call(e),
            span { style: "font-size: 10px; color: {TEXT_DIM}; width: 10px;", "{chevron}" }
            div { style: "width: 3px; height: 16px; border-radius: 2px; background-color: {color};" }
            span { "{name}" }
        }
    }
}
