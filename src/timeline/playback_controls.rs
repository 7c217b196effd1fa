use dioxus::prelude::*;
use crate::constants::{BG_HOVER, BG_SURFACE, BORDER_DEFAULT, TEXT_DIM, TEXT_MUTED, TEXT_PRIMARY};
use crate::core::drag::DragHandle;
use crate::core::time_space::format_seconds;

use super::scrub_bar::ScrubBar;

/// Playback button
#[component]
pub(crate) fn PlaybackBtn(
    icon: &'static str,
    title: &'static str,
    #[props(default = false)] primary: bool,
    on_click: EventHandler<MouseEvent>,
) -> Element {
    let bg = if primary { BG_HOVER } else { "transparent" };
    rsx! {
        button {
            class: "collapse-btn",
            title: "{title}",
            style: "width: 26px; height: 26px; border: none; border-radius: 4px; background-color: {bg}; color: {TEXT_MUTED}; font-size: 10px; cursor: pointer; display: flex; align-items: center; justify-content: center; transition: all 0.12s ease;",
            onclick: move |e| on_click.call(e),
            "{icon}"
        }
    }
}

/// `Range: 5.0s - 15.0s`
pub(crate) fn range_readout(start: f64, end: f64) -> String {
    format!("Range: {} - {}", format_seconds(start, 1), format_seconds(end, 1))
}

/// Transport row: buttons, time readouts and the full-duration scrub bar
#[component]
pub(crate) fn TransportBar(
    is_playing: bool,
    current_time: f64,
    duration: f64,
    range_start: f64,
    range_end: f64,
    active_handle: Option<DragHandle>,
    on_reset: EventHandler<()>,
    on_skip_backward: EventHandler<()>,
    on_play_pause: EventHandler<()>,
    on_skip_forward: EventHandler<()>,
    on_jump_to_end: EventHandler<()>,
    on_reset_range: EventHandler<()>,
    on_handle_down: EventHandler<(DragHandle, f64)>,
    on_scrub_press: EventHandler<(f64, f64)>,
) -> Element {
    let play_icon = if is_playing { "⏸" } else { "▶" };
    let play_title = if is_playing { "Pause" } else { "Play" };
    let time_label = format_seconds(current_time, 2);
    let duration_label = format_seconds(duration, 1);
    let range_label = range_readout(range_start, range_end);

    rsx! {
        div {
            style: "
                display: flex; align-items: center; gap: 12px;
                padding: 8px 14px;
                background-color: {BG_SURFACE}; border-bottom: 1px solid {BORDER_DEFAULT};
                flex-shrink: 0;
            ",

            div {
                style: "display: flex; align-items: center; gap: 4px;",
                PlaybackBtn { icon: "⏮", title: "Reset to range start", on_click: move |_| on_reset.call(()) }
                PlaybackBtn { icon: "|◀", title: "Back 1s", on_click: move |_| on_skip_backward.call(()) }
                PlaybackBtn {
                    icon: play_icon,
                    title: play_title,
                    primary: true,
                    on_click: move |_| on_play_pause.call(()),
                }
                PlaybackBtn { icon: "▶|", title: "Forward 1s", on_click: move |_| on_skip_forward.call(()) }
                PlaybackBtn { icon: "⏭", title: "Jump to range end", on_click: move |_| on_jump_to_end.call(()) }
            }

            span {
                style: "font-family: 'SF Mono', Consolas, monospace; font-size: 11px; color: {TEXT_PRIMARY}; min-width: 56px;",
                "{time_label}"
            }

            ScrubBar {
                duration: duration,
                current_time: current_time,
                range_start: range_start,
                range_end: range_end,
                active_handle: active_handle,
                on_handle_down: move |data| on_handle_down.call(data),
                on_press: move |data| on_scrub_press.call(data),
            }

            span {
                style: "font-family: 'SF Mono', Consolas, monospace; font-size: 11px; color: {TEXT_DIM};",
                "{duration_label}"
            }
            span {
                style: "font-size: 11px; color: {TEXT_MUTED}; white-space: nowrap;",
                "{range_label}"
            }
            button {
                class: "collapse-btn",
                style: "padding: 0 8px; height: 22px; border: 1px solid {BORDER_DEFAULT}; border-radius: 3px; background: transparent; color: {TEXT_MUTED}; font-size: 10px; cursor: pointer;",
                onclick: move |_| on_reset_range.call(()),
                "Full range"
            }
        }
    }
}
