use dioxus::prelude::*;

use crate::constants::{
    ACCENT_PLAYHEAD, ACCENT_RANGE, BG_SURFACE, BORDER_DEFAULT, SCRUB_BAR_HEIGHT,
};
use crate::core::drag::DragHandle;

fn percent(time: f64, duration: f64) -> f64 {
    (time / duration.max(f64::EPSILON) * 100.0).clamp(0.0, 100.0)
}

/// Full-duration scrub bar: the selected range as an overlay with a handle
/// at each end, and the playhead handle on top.
///
/// Positions are drawn in percent of the bar; pointer input is reported in
/// pixels and converted by the session using the measured bar width.
#[component]
pub(crate) fn ScrubBar(
    duration: f64,
    current_time: f64,
    range_start: f64,
    range_end: f64,
    active_handle: Option<DragHandle>,
    /// Pointer-down on a handle, with the client X
    on_handle_down: EventHandler<(DragHandle, f64)>,
    /// Pointer-down on the bar body: (x inside the bar, client x)
    on_press: EventHandler<(f64, f64)>,
) -> Element {
    let start_pct = percent(range_start, duration);
    let end_pct = percent(range_end, duration);
    let width_pct = (end_pct - start_pct).max(0.0);
    let playhead_pct = percent(current_time, duration);

    let handle = move |kind: DragHandle, left: f64, color: &'static str, width: f64| {
        let active = active_handle == Some(kind);
        let scale = if active { 1.15 } else { 1.0 };
        let label = kind.label();
        let half = width / 2.0;
        rsx! {
            div {
                key: "{label}",
                "data-handle": "{label}",
                style: "
                    position: absolute; top: 0; left: {left}%;
                    width: {width}px; height: 100%;
                    margin-left: -{half}px;
                    background-color: {color}; border-radius: 2px;
                    cursor: ew-resize; z-index: 3;
                    transform: scaleY({scale});
                ",
                onmousedown: move |e: MouseEvent| {
                    e.prevent_default();
                    e.stop_propagation();
                    on_handle_down.call((kind, e.client_coordinates().x));
                },
            }
        }
    };

    rsx! {
        div {
            id: "timeline-scrub-bar",
            style: "
                position: relative; flex: 1;
                height: {SCRUB_BAR_HEIGHT}px;
                background-color: {BG_SURFACE};
                border: 1px solid {BORDER_DEFAULT}; border-radius: 4px;
                cursor: pointer;
            ",
            onmousedown: move |e: MouseEvent| {
                e.prevent_default();
                on_press.call((e.element_coordinates().x, e.client_coordinates().x));
            },

            // Selected range
            div {
                style: "
                    position: absolute; top: 0; bottom: 0;
                    left: {start_pct}%; width: {width_pct}%;
                    background-color: rgba(59, 130, 246, 0.18);
                    border-top: 1px solid {ACCENT_RANGE}; border-bottom: 1px solid {ACCENT_RANGE};
                    pointer-events: none;
                ",
            }
            {handle(DragHandle::RangeStart, start_pct, ACCENT_RANGE, 6.0)}
            {handle(DragHandle::RangeEnd, end_pct, ACCENT_RANGE, 6.0)}
            {handle(DragHandle::Playhead, playhead_pct, ACCENT_PLAYHEAD, 4.0)}
        }
    }
}
