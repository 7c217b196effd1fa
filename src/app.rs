//! Root application component
//!
//! Owns the single `TimelineSession` signal and routes pointer, scroll,
//! timer and keyboard input into it. Every other component only renders
//! what the session reports.

use dioxus::core::Task;
use dioxus::prelude::*;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::components::{SessionInspector, StatusBar, TitleBar};
use crate::constants::*;
use crate::core::drag::DragState;
use crate::core::playback::{TickOutcome, TickToken};
use crate::core::scroll_sync::{ScrollBroadcast, ScrollRegion};
use crate::core::session::{DragSurface, TimelineSession};
use crate::hotkeys::{handle_hotkey, HotkeyAction, HotkeyContext, HotkeyResult};
use crate::state::{fixtures, SeriesSelector};
use crate::timeline::{TimelinePanel, TransportBar};

const DEMO_RUN_NAME: &str = "Demo run";

/// Messages posted by `TIMELINE_SYNC_SCRIPT`.
#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum TimelineDomEvent {
    Scroll { region: String, offset: f64 },
    Viewport { width: f64 },
    Scrubber { width: f64 },
}

/// Scroll offsets pushed back to the page.
#[derive(Debug, Serialize)]
struct ScrollCommand {
    offset: f64,
    targets: Vec<String>,
}

impl From<ScrollBroadcast> for ScrollCommand {
    fn from(broadcast: ScrollBroadcast) -> Self {
        Self {
            offset: broadcast.offset,
            targets: broadcast.targets.iter().map(ToString::to_string).collect(),
        }
    }
}

fn send_scroll(eval: Option<&document::Eval>, broadcast: ScrollBroadcast) {
    if broadcast.is_empty() {
        return;
    }
    let Some(eval) = eval else {
        return;
    };
    if let Err(err) = eval.send(ScrollCommand::from(broadcast)) {
        tracing::debug!(error = ?err, "scroll sync channel closed");
    }
}

#[component]
pub fn App() -> Element {
    let initial = use_context::<TimelineSession>();
    let duration = initial.duration();
    let jump_policy = initial.jump_policy();
    let mut session = use_signal(move || initial);
    let tracks = use_signal(|| fixtures::demo_tracks(duration));
    let mut expanded = use_signal(Vec::<uuid::Uuid>::new);
    let mut feature = use_signal(SeriesSelector::default);
    let mut input_focused = use_signal(|| false);
    let mut ticker = use_signal(|| None::<Task>);
    let mut sync_eval = use_signal(|| None::<document::Eval>);

    use_effect(move || {
        let lanes: Vec<_> = tracks.read().iter().map(|t| t.id).collect();
        session.write().register_lanes(lanes);
    });

    use_effect(move || {
        if sync_eval().is_some() {
            return;
        }
        let eval = document::eval(TIMELINE_SYNC_SCRIPT);
        sync_eval.set(Some(eval));
    });

    use_future(move || async move {
        loop {
            let Some(mut eval) = sync_eval() else {
                tokio::time::sleep(Duration::from_millis(100)).await;
                continue;
            };
            loop {
                let event = match eval.recv::<TimelineDomEvent>().await {
                    Ok(event) => event,
                    Err(_) => break,
                };
                let broadcast = match event {
                    TimelineDomEvent::Scroll { region, offset } => match region.parse::<ScrollRegion>() {
                        Ok(source) => session.write().on_scroll(source, offset),
                        Err(err) => {
                            tracing::debug!(%region, error = %err, "scroll from unknown region");
                            continue;
                        }
                    },
                    TimelineDomEvent::Viewport { width } => {
                        let mut session = session.write();
                        session.set_viewport_width(width);
                        // Lanes mount at scrollLeft 0; push the shared offset to all of them.
                        session.resync()
                    }
                    TimelineDomEvent::Scrubber { width } => {
                        session.write().set_scrubber_width(width);
                        continue;
                    }
                };
                send_scroll(Some(&eval), broadcast);
            }
            tokio::time::sleep(Duration::from_millis(100)).await;
        }
    });

    let mut stop_ticker = move || {
        if let Some(task) = ticker.take() {
            task.cancel();
        }
    };

    let mut start_ticker = move |token: TickToken| {
        stop_ticker();
        let period = session.peek().playback_interval();
        let task = spawn(async move {
            let mut interval = tokio::time::interval(period);
            // The first tick of a tokio interval completes immediately.
            interval.tick().await;
            loop {
                interval.tick().await;
                let outcome = session.write().tick(token);
                match outcome {
                    TickOutcome::Advanced(_) => {
                        let broadcast = session.write().follow_playhead();
                        send_scroll(sync_eval.peek().as_ref(), broadcast);
                    }
                    TickOutcome::Finished(_) | TickOutcome::Ignored => break,
                }
            }
        });
        ticker.set(Some(task));
    };

    use_drop(move || {
        if let Some(task) = ticker.take() {
            task.cancel();
        }
    });

    let mut run_action = move |action: HotkeyAction| match action {
        HotkeyAction::PlayPause => {
            let started = session.write().toggle_playback();
            match started {
                Some(token) => start_ticker(token),
                None => stop_ticker(),
            }
        }
        HotkeyAction::Reset => {
            stop_ticker();
            session.write().reset();
        }
        HotkeyAction::JumpToRangeEnd => {
            session.write().jump_to_range_end();
        }
        HotkeyAction::SkipBackward => {
            session.write().skip(-SKIP_SECONDS);
        }
        HotkeyAction::SkipForward => {
            session.write().skip(SKIP_SECONDS);
        }
        HotkeyAction::TimelineZoomIn => {
            let broadcast = session.write().zoom_in();
            send_scroll(sync_eval.peek().as_ref(), broadcast);
        }
        HotkeyAction::TimelineZoomOut => {
            let broadcast = session.write().zoom_out();
            send_scroll(sync_eval.peek().as_ref(), broadcast);
        }
    };

    let snapshot = session.read().clone();
    let range = snapshot.time_range();
    let (min_zoom, max_zoom) = snapshot.zoom_bounds();
    let active_handle = snapshot.drag_state().handle();
    let is_dragging = active_handle.is_some();
    let user_select = if is_dragging { "none" } else { "auto" };
    let drag_cursor = if is_dragging { "ew-resize" } else { "default" };

    rsx! {
        style {
            r#"
            *, *::before, *::after {{ box-sizing: border-box; }}
            html, body {{ margin: 0; padding: 0; overflow: hidden; background-color: {BG_BASE}; }}
            body {{ -webkit-font-smoothing: antialiased; }}
            ::-webkit-scrollbar {{ width: 6px; height: 6px; }}
            ::-webkit-scrollbar-track {{ background: transparent; }}
            ::-webkit-scrollbar-thumb {{ background: {BORDER_DEFAULT}; border-radius: 3px; }}
            ::-webkit-scrollbar-thumb:hover {{ background: {BORDER_STRONG}; }}
            .lane-scroll::-webkit-scrollbar {{ height: 0; }}
            .collapse-btn {{ opacity: 0.6; transition: opacity 0.15s ease, background-color 0.15s ease; }}
            .collapse-btn:hover {{ opacity: 1; background-color: {BG_HOVER} !important; }}
            [data-handle]:hover {{ outline: 1px solid {BORDER_ACCENT}; }}
            "#
        }

        div {
            class: "app-container",
            style: "
                display: flex; flex-direction: column;
                width: 100vw; height: 100vh;
                background-color: {BG_BASE}; color: {TEXT_PRIMARY};
                font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, sans-serif;
                overflow: hidden; position: fixed; top: 0; left: 0;
                user-select: {user_select};
                cursor: {drag_cursor};
            ",

            // A drag keeps going outside the element that started it.
            onmousemove: move |e| {
                if matches!(session.peek().drag_state(), DragState::Idle) {
                    return;
                }
                e.prevent_default();
                session.write().drag_to(e.client_coordinates().x);
            },
            onmouseup: move |_| {
                if !matches!(session.peek().drag_state(), DragState::Idle) {
                    session.write().end_drag();
                }
            },
            oncontextmenu: move |e| e.prevent_default(),
            tabindex: "0",
            onkeydown: move |e: KeyboardEvent| {
                let context = HotkeyContext { input_focused: input_focused() };
                let modifiers = e.modifiers();
                match handle_hotkey(&e.key(), modifiers.ctrl(), modifiers.alt(), modifiers.meta(), &context) {
                    HotkeyResult::Action(action) => {
                        e.prevent_default();
                        run_action(action);
                    }
                    HotkeyResult::NoMatch | HotkeyResult::Suppressed => {}
                }
            },

            TitleBar { run_name: DEMO_RUN_NAME.to_string(), jump_policy: jump_policy }

            TransportBar {
                is_playing: snapshot.is_playing(),
                current_time: snapshot.current_time(),
                duration: snapshot.duration(),
                range_start: range.start(),
                range_end: range.end(),
                active_handle: active_handle,
                on_reset: move |_| run_action(HotkeyAction::Reset),
                on_skip_backward: move |_| run_action(HotkeyAction::SkipBackward),
                on_play_pause: move |_| run_action(HotkeyAction::PlayPause),
                on_skip_forward: move |_| run_action(HotkeyAction::SkipForward),
                on_jump_to_end: move |_| run_action(HotkeyAction::JumpToRangeEnd),
                on_reset_range: move |_| {
                    session.write().reset_range();
                },
                on_handle_down: move |(handle, x)| {
                    if session.write().begin_drag(handle, DragSurface::Scrubber, x) {
                        stop_ticker();
                    }
                },
                on_scrub_press: move |(pixel, x)| {
                    if session.write().press(DragSurface::Scrubber, pixel, x) {
                        stop_ticker();
                    }
                },
            }

            div {
                style: "display: flex; flex: 1; overflow: hidden;",

                TimelinePanel {
                    tracks: tracks(),
                    expanded: expanded(),
                    feature: feature(),
                    axis: snapshot.axis(),
                    zoom: snapshot.zoom(),
                    min_zoom: min_zoom,
                    max_zoom: max_zoom,
                    current_time: snapshot.current_time(),
                    range_start: range.start(),
                    range_end: range.end(),
                    on_zoom_change: move |zoom| {
                        let broadcast = session.write().set_zoom(zoom);
                        send_scroll(sync_eval.peek().as_ref(), broadcast);
                    },
                    on_zoom_in: move |_| run_action(HotkeyAction::TimelineZoomIn),
                    on_zoom_out: move |_| run_action(HotkeyAction::TimelineZoomOut),
                    on_toggle_lane: move |id| {
                        let mut expanded = expanded.write();
                        if let Some(pos) = expanded.iter().position(|e| *e == id) {
                            expanded.remove(pos);
                        } else {
                            expanded.push(id);
                        }
                    },
                    on_feature_change: move |series| feature.set(series),
                    on_input_focus: move |focused| input_focused.set(focused),
                    on_ruler_press: move |(pixel, x)| {
                        if session.write().press(DragSurface::Ruler, pixel, x) {
                            stop_ticker();
                        }
                    },
                }

                SessionInspector {
                    tracks: tracks(),
                    range_start: range.start(),
                    range_end: range.end(),
                    current_time: snapshot.current_time(),
                    on_jump: move |time| {
                        session.write().request_time_change(time);
                    },
                    on_frame: move |time: f64| {
                        session.write().request_range_change(time - FRAME_EVENT_SECONDS, time + FRAME_EVENT_SECONDS);
                    },
                }
            }

            StatusBar {
                is_playing: snapshot.is_playing(),
                speed: snapshot.playback_speed(),
                zoom: snapshot.zoom(),
                active_handle: active_handle,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_dom_events_deserialize() {
        let event: TimelineDomEvent =
            serde_json::from_str(r#"{ "kind": "scroll", "region": "ruler", "offset": 120.5 }"#).unwrap();
        assert!(matches!(event, TimelineDomEvent::Scroll { ref region, offset } if region == "ruler" && offset == 120.5));

        let event: TimelineDomEvent = serde_json::from_str(r#"{ "kind": "viewport", "width": 640 }"#).unwrap();
        assert!(matches!(event, TimelineDomEvent::Viewport { width } if width == 640.0));
    }

    #[test]
    fn test_scroll_command_uses_dom_region_ids() {
        let lane = Uuid::new_v4();
        let command = ScrollCommand::from(ScrollBroadcast {
            offset: 80.0,
            targets: vec![ScrollRegion::Ruler, ScrollRegion::Lane(lane)],
        });
        let json = serde_json::to_value(&command).unwrap();
        assert_eq!(json["offset"], 80.0);
        assert_eq!(json["targets"][0], "ruler");
        assert_eq!(json["targets"][1], format!("lane-{lane}"));
    }
}
