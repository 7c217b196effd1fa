use dioxus::prelude::*;

use crate::constants::{
    ACCENT_PLAYHEAD, BG_ELEVATED, BG_SURFACE, BORDER_DEFAULT, LANE_COLLAPSED_HEIGHT,
    LANE_EXPANDED_HEIGHT, RULER_HEIGHT, TEXT_DIM, TEXT_MUTED, TRACK_LABEL_WIDTH,
};
use crate::core::scroll_sync::ScrollRegion;
use crate::core::time_space::TimeAxis;
use crate::state::{SeriesSelector, Track};

use super::ruler::TimeRuler;
use super::track_label::TrackLabel;
use super::track_lane::{display_color, TrackLane};

/// Ruler plus one lane per track, all sharing the session's zoomed axis
#[component]
pub fn TimelinePanel(
    tracks: Vec<Track>,
    expanded: Vec<uuid::Uuid>,
    feature: SeriesSelector,
    axis: TimeAxis,
    zoom: f64,
    min_zoom: f64,
    max_zoom: f64,
    current_time: f64,
    range_start: f64,
    range_end: f64,
    on_zoom_change: EventHandler<f64>,
    on_zoom_in: EventHandler<()>,
    on_zoom_out: EventHandler<()>,
    on_toggle_lane: EventHandler<uuid::Uuid>,
    on_feature_change: EventHandler<SeriesSelector>,
    /// Focus entering or leaving the feature selector
    on_input_focus: EventHandler<bool>,
    /// Mouse-down on the ruler: (x in scroll space, client x)
    on_ruler_press: EventHandler<(f64, f64)>,
) -> Element {
    let duration = axis.duration();
    let content_width = axis.width();
    let playhead_pos = axis.time_to_pixel(current_time).clamp(0.0, (content_width - 1.0).max(0.0));
    let zoom_label = if (zoom - min_zoom).abs() <= 0.5 {
        "Fit".to_string()
    } else {
        format!("{:.0}px/s", zoom)
    };
    let ruler_region = ScrollRegion::Ruler.to_string();

    rsx! {
        div {
            style: "
                display: flex; flex-direction: column; flex: 1;
                background-color: {BG_ELEVATED};
                overflow: hidden;
            ",

            // Header
            div {
                style: "
                    display: flex; align-items: center; justify-content: space-between;
                    height: 32px; padding: 0 14px;
                    background-color: {BG_SURFACE}; border-bottom: 1px solid {BORDER_DEFAULT};
                    flex-shrink: 0;
                ",

                // Left: label + zoom controls
                div {
                    style: "display: flex; align-items: center; gap: 12px;",
                    span { style: "font-size: 11px; font-weight: 500; color: {TEXT_MUTED}; text-transform: uppercase; letter-spacing: 0.5px;", "Lanes" }

                    div {
                        style: "display: flex; align-items: center; gap: 4px;",
                        button {
                            class: "collapse-btn",
                            style: "width: 20px; height: 20px; border: none; border-radius: 3px; background: transparent; color: {TEXT_MUTED}; font-size: 12px; cursor: pointer; display: flex; align-items: center; justify-content: center;",
                            onclick: move |_| on_zoom_out.call(()),
                            "−"
                        }
                        span {
                            style: "font-size: 10px; color: {TEXT_DIM}; min-width: 40px; text-align: center;",
                            "{zoom_label}"
                        }
                        button {
                            class: "collapse-btn",
                            style: "width: 20px; height: 20px; border: none; border-radius: 3px; background: transparent; color: {TEXT_MUTED}; font-size: 12px; cursor: pointer; display: flex; align-items: center; justify-content: center;",
                            onclick: move |_| on_zoom_in.call(()),
                            "+"
                        }
                        button {
                            class: "collapse-btn",
                            style: "padding: 0 6px; height: 20px; border: none; border-radius: 3px; background: transparent; color: {TEXT_MUTED}; font-size: 10px; cursor: pointer; display: flex; align-items: center; justify-content: center;",
                            onclick: move |_| on_zoom_change.call(min_zoom),
                            "Fit"
                        }
                        button {
                            class: "collapse-btn",
                            style: "padding: 0 6px; height: 20px; border: none; border-radius: 3px; background: transparent; color: {TEXT_MUTED}; font-size: 10px; cursor: pointer; display: flex; align-items: center; justify-content: center;",
                            onclick: move |_| on_zoom_change.call(max_zoom),
                            "Max"
                        }
                    }
                }

                // Right: emphasized series
                div {
                    style: "display: flex; align-items: center; gap: 8px;",
                    span { style: "font-size: 10px; color: {TEXT_DIM};", "Feature" }
                    select {
                        style: "background-color: {BG_ELEVATED}; color: {TEXT_MUTED}; border: 1px solid {BORDER_DEFAULT}; border-radius: 3px; font-size: 11px; padding: 2px 4px;",
                        value: "{feature.label()}",
                        onchange: move |e| on_feature_change.call(SeriesSelector::from_label(&e.value())),
                        onfocus: move |_| on_input_focus.call(true),
                        onblur: move |_| on_input_focus.call(false),
                        for series in [SeriesSelector::Value1, SeriesSelector::Value2] {
                            option { value: "{series.label()}", "{series.label()}" }
                        }
                    }
                }
            }

            // Rows: [label | scrollable content]. Each content cell scrolls on
            // its own and is kept aligned through the shared scroll offset.
            div {
                style: "flex: 1; display: flex; flex-direction: column; overflow-y: auto; overflow-x: hidden;",

                // Ruler row
                div {
                    style: "display: flex; height: {RULER_HEIGHT}px; min-height: {RULER_HEIGHT}px; border-bottom: 1px solid {BORDER_DEFAULT};",
                    div {
                        style: "width: {TRACK_LABEL_WIDTH}px; min-width: {TRACK_LABEL_WIDTH}px; background-color: {BG_ELEVATED}; border-right: 1px solid {BORDER_DEFAULT};",
                    }
                    div {
                        id: "timeline-scroll-host",
                        "data-scroll-region": "{ruler_region}",
                        style: "flex: 1; overflow-x: auto; overflow-y: hidden; background-color: {BG_SURFACE};",
                        div {
                            style: "position: relative; width: {content_width}px; height: 100%; cursor: pointer;",
                            // Click anywhere on the ruler to seek AND start dragging.
                            // element_coordinates is relative to this element, i.e. scroll space.
                            onmousedown: move |e| {
                                e.prevent_default();
                                on_ruler_press.call((e.element_coordinates().x, e.client_coordinates().x));
                            },

                            TimeRuler { duration: duration, zoom: zoom }

                            div {
                                style: "
                                    position: absolute;
                                    left: {playhead_pos}px;
                                    top: 0;
                                    width: 1px;
                                    height: 100%;
                                    background-color: {ACCENT_PLAYHEAD};
                                    pointer-events: none;
                                ",
                            }
                            div {
                                style: "
                                    position: absolute;
                                    left: {playhead_pos - 5.0}px;
                                    top: 0;
                                    width: 0;
                                    height: 0;
                                    border-left: 6px solid transparent;
                                    border-right: 6px solid transparent;
                                    border-top: 8px solid {ACCENT_PLAYHEAD};
                                    pointer-events: none;
                                ",
                            }
                        }
                    }
                }

                for track in tracks.iter() {
                    {
                        let is_expanded = expanded.contains(&track.id);
                        let height = if is_expanded { LANE_EXPANDED_HEIGHT } else { LANE_COLLAPSED_HEIGHT };
                        let track_id = track.id;
                        rsx! {
                            div {
                                key: "{track.id}",
                                style: "display: flex; flex-shrink: 0;",
                                div {
                                    style: "width: {TRACK_LABEL_WIDTH}px; min-width: {TRACK_LABEL_WIDTH}px; background-color: {BG_ELEVATED}; border-right: 1px solid {BORDER_DEFAULT};",
                                    TrackLabel {
                                        name: track.name.clone(),
                                        color: display_color(track.display),
                                        height: height,
                                        expanded: is_expanded,
                                        on_toggle: move |_| on_toggle_lane.call(track_id),
                                    }
                                }
                                div {
                                    style: "flex: 1; min-width: 0;",
                                    TrackLane {
                                        track: track.clone(),
                                        axis: axis,
                                        height: height,
                                        expanded: is_expanded,
                                        feature: feature,
                                        current_time: current_time,
                                        range_start: range_start,
                                        range_end: range_end,
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
