use dioxus::prelude::*;
use crate::constants::*;
use crate::core::time_space::format_seconds;
use crate::state::{MarkerTone, Track};
use crate::timeline::tone_color;

/// A marker inside the selected range, flattened across tracks.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct InspectorEntry {
    pub track: String,
    pub time: f64,
    pub label: String,
    pub tone: MarkerTone,
}

/// Markers of every track that fall inside `[start, end]`, in time order.
pub(crate) fn markers_in_range(tracks: &[Track], start: f64, end: f64) -> Vec<InspectorEntry> {
    let mut entries: Vec<_> = tracks
        .iter()
        .flat_map(|track| {
            track.markers_between(start, end).map(move |marker| InspectorEntry {
                track: track.name.clone(),
                time: marker.time,
                label: marker.label.clone(),
                tone: marker.tone(),
            })
        })
        .collect();
    entries.sort_by(|a, b| a.time.total_cmp(&b.time));
    entries
}

/// Side panel listing the events inside the selected range. Rows jump the
/// playhead or narrow the range through the session's external requests.
#[component]
pub fn SessionInspector(
    tracks: Vec<Track>,
    range_start: f64,
    range_end: f64,
    current_time: f64,
    on_jump: EventHandler<f64>,
    on_frame: EventHandler<f64>,
) -> Element {
    let entries = markers_in_range(&tracks, range_start, range_end);
    let count = entries.len();

    rsx! {
        div {
            style: "
                display: flex; flex-direction: column;
                width: {INSPECTOR_WIDTH}px; min-width: {INSPECTOR_WIDTH}px;
                background-color: {BG_ELEVATED}; border-left: 1px solid {BORDER_DEFAULT};
                overflow: hidden;
            ",
            div {
                style: "
                    display: flex; align-items: center; justify-content: space-between;
                    height: 32px; padding: 0 14px; flex-shrink: 0;
                    background-color: {BG_SURFACE}; border-bottom: 1px solid {BORDER_DEFAULT};
                ",
                span { style: "font-size: 11px; font-weight: 500; color: {TEXT_MUTED}; text-transform: uppercase; letter-spacing: 0.5px;", "Events in range" }
                span { style: "font-size: 10px; color: {TEXT_DIM};", "{count}" }
            }
            div {
                style: "flex: 1; overflow-y: auto; padding: 6px 0;",
                if entries.is_empty() {
                    div { style: "padding: 12px 14px; font-size: 11px; color: {TEXT_DIM};", "No events in the selected range" }
                }
                for entry in entries {
                    {
                        let at_playhead = (entry.time - current_time).abs() < 0.05;
                        let bg = if at_playhead { BG_HOVER } else { "transparent" };
                        let time = entry.time;
                        let time_label = format_seconds(time, 1);
                        rsx! {
                            div {
                                key: "{entry.track}-{entry.time}-{entry.label}",
                                style: "display: flex; align-items: center; background-color: {bg};",
                                button {
                                    class: "collapse-btn",
                                    title: "Jump to event",
                                    style: "
                                        display: flex; align-items: center; gap: 8px; flex: 1; min-width: 0;
                                        padding: 6px 0 6px 14px; border: none; background: transparent;
                                        color: {TEXT_SECONDARY}; font-size: 11px; cursor: pointer; text-align: left;
                                    ",
                                    onclick: move |_| on_jump.call(time),
                                    div { style: "width: 8px; height: 8px; border-radius: 4px; background-color: {tone_color(entry.tone)}; flex-shrink: 0;" }
                                    span { style: "font-family: 'SF Mono', Consolas, monospace; color: {TEXT_DIM}; min-width: 44px;", "{time_label}" }
                                    span { style: "flex: 1; color: {TEXT_PRIMARY};", "{entry.label}" }
                                    span { style: "color: {TEXT_DIM};", "{entry.track}" }
                                }
                                button {
                                    class: "collapse-btn",
                                    title: "Narrow the range around this event",
                                    style: "width: 28px; height: 24px; margin-right: 8px; border: none; border-radius: 3px; background: transparent; color: {TEXT_MUTED}; font-size: 11px; cursor: pointer;",
                                    onclick: move |_| on_frame.call(time),
                                    "⇔"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::fixtures::demo_tracks;

    #[test]
    fn test_only_markers_inside_range_are_listed() {
        let tracks = demo_tracks(30.0);
        let entries = markers_in_range(&tracks, 5.0, 15.0);
        let labels: Vec<_> = entries.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, ["Check A", "Warning"]);
        assert_eq!(entries[1].tone, MarkerTone::Warning);
        assert_eq!(entries[0].track, "Control Actions");
    }

    #[test]
    fn test_range_bounds_are_inclusive() {
        let tracks = demo_tracks(30.0);
        let entries = markers_in_range(&tracks, 3.5, 8.5);
        assert_eq!(entries.iter().map(|e| e.time).collect::<Vec<_>>(), [3.5, 8.5]);
    }
}
