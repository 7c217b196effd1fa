use dioxus::prelude::*;

use crate::constants::{
    ACCENT_HIGHLIGHT, ACCENT_PLAYHEAD, ACCENT_SERIES_1, ACCENT_SERIES_2, BG_BASE, BORDER_STRONG,
    BORDER_SUBTLE, TONE_CHECK, TONE_FINISH, TONE_START, TONE_WARNING,
};
use crate::core::lane_layout::{layout_lane, polyline_points};
use crate::core::scroll_sync::ScrollRegion;
use crate::core::time_space::TimeAxis;
use crate::state::{MarkerTone, SeriesSelector, Track, TrackDisplay};

/// Markers may share a time and label, so the position in the lane is part of the key.
fn marker_key(index: usize, time: f64) -> String {
    format!("{index}-{time}")
}

pub(crate) fn tone_color(tone: MarkerTone) -> &'static str {
    match tone {
        MarkerTone::Start => TONE_START,
        MarkerTone::Warning => TONE_WARNING,
        MarkerTone::Finish => TONE_FINISH,
        MarkerTone::Check => TONE_CHECK,
    }
}

pub(crate) fn series_color(series: SeriesSelector) -> &'static str {
    match series {
        SeriesSelector::Value1 => ACCENT_SERIES_1,
        SeriesSelector::Value2 => ACCENT_SERIES_2,
    }
}

pub(crate) fn display_color(display: TrackDisplay) -> &'static str {
    match display {
        TrackDisplay::Line => ACCENT_SERIES_1,
        TrackDisplay::Bar => ACCENT_SERIES_2,
        TrackDisplay::Markers => TONE_WARNING,
    }
}

/// One horizontally scrollable lane. Its scroll offset is kept in step with
/// the ruler and the other lanes through `data-scroll-region`.
#[component]
pub fn TrackLane(
    track: Track,
    axis: TimeAxis,
    height: f64,
    expanded: bool,
    feature: SeriesSelector,
    current_time: f64,
    range_start: f64,
    range_end: f64,
) -> Element {
    let region = ScrollRegion::Lane(track.id).to_string();
    let layout = layout_lane(&track, &axis, height);
    let width = layout.width;
    let playhead_x = axis.time_to_pixel(current_time).clamp(0.0, (width - 1.0).max(0.0));
    let range_left = axis.time_to_pixel(range_start);
    let range_right = axis.time_to_pixel(range_end);
    let outside_right = (width - range_right).max(0.0);
    let baseline_y = height / 2.0;

    let body = if !expanded {
        let highlight = layout.highlight_x.map(|x| {
            rsx! {
                div {
                    style: "
                        position: absolute; left: {x - 4.0}px; top: {baseline_y - 4.0}px;
                        width: 8px; height: 8px; transform: rotate(45deg);
                        background-color: {ACCENT_HIGHLIGHT};
                    ",
                }
            }
        });
        rsx! {
            div {
                style: "position: absolute; left: 0; top: {baseline_y}px; width: 100%; height: 1px; background-color: {BORDER_STRONG};",
            }
            {highlight}
        }
    } else {
        match track.display {
            TrackDisplay::Line => {
                let series = [SeriesSelector::Value1, SeriesSelector::Value2].map(|s| {
                    let selected = s == feature;
                    (
                        polyline_points(layout.series(s)),
                        series_color(s),
                        if selected { 2.0 } else { 1.0 },
                        if selected { 1.0 } else { 0.35 },
                    )
                });
                rsx! {
                    svg {
                        width: "{width}",
                        height: "{height}",
                        style: "position: absolute; left: 0; top: 0;",
                        for (points, color, stroke, opacity) in series {
                            polyline {
                                points: "{points}",
                                fill: "none",
                                stroke: "{color}",
                                stroke_width: "{stroke}",
                                opacity: "{opacity}",
                            }
                        }
                    }
                }
            }
            TrackDisplay::Bar => rsx! {
                svg {
                    width: "{width}",
                    height: "{height}",
                    style: "position: absolute; left: 0; top: 0;",
                    for bar in layout.bars.iter() {
                        rect {
                            x: "{bar.x}",
                            y: "{height - bar.height}",
                            width: "{bar.width}",
                            height: "{bar.height}",
                            fill: series_color(bar.series),
                            opacity: if bar.series == feature { "0.9" } else { "0.3" },
                        }
                    }
                }
            },
            TrackDisplay::Markers => rsx! {
                for (index, marker) in layout.markers.iter().enumerate() {
                    div {
                        key: "{marker_key(index, marker.time)}",
                        style: "
                            position: absolute; left: {marker.x}px; top: 8px;
                            padding: 2px 6px; border-radius: 8px;
                            font-size: 10px; white-space: nowrap; color: {BG_BASE};
                            background-color: {tone_color(marker.tone)};
                        ",
                        "{marker.label}"
                    }
                }
            },
        }
    };

    let highlight_line = if expanded { layout.highlight_x } else { None };

    rsx! {
        div {
            class: "lane-scroll",
            "data-scroll-region": "{region}",
            style: "
                height: {height}px; overflow-x: auto; overflow-y: hidden;
                border-bottom: 1px solid {BORDER_SUBTLE};
                background-color: {BG_BASE};
                flex-shrink: 0;
            ",
            div {
                style: "position: relative; width: {width}px; height: 100%;",

                // Dim everything outside the selected range
                div {
                    style: "position: absolute; left: 0; top: 0; width: {range_left}px; height: 100%; background-color: rgba(0, 0, 0, 0.35); pointer-events: none;",
                }
                div {
                    style: "position: absolute; left: {range_right}px; top: 0; width: {outside_right}px; height: 100%; background-color: rgba(0, 0, 0, 0.35); pointer-events: none;",
                }

                {body}

                if let Some(x) = highlight_line {
                    div {
                        style: "position: absolute; left: {x}px; top: 0; width: 1px; height: 100%; background-color: {ACCENT_HIGHLIGHT}; opacity: 0.7; pointer-events: none;",
                    }
                }

                div {
                    style: "
                        position: absolute; left: {playhead_x}px; top: 0;
                        width: 1px; height: 100%;
                        background-color: {ACCENT_PLAYHEAD};
                        pointer-events: none; z-index: 10;
                    ",
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_keys_stay_unique_for_duplicate_markers() {
        assert_ne!(marker_key(0, 8.5), marker_key(1, 8.5));
        assert_eq!(marker_key(2, 12.0), "2-12");
    }
}
