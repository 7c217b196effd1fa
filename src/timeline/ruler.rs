use dioxus::prelude::*;
use crate::constants::{BORDER_STRONG, BORDER_SUBTLE, TEXT_DIM};

const NICE_STEPS: [f64; 10] = [0.5, 1.0, 2.0, 5.0, 10.0, 15.0, 30.0, 60.0, 120.0, 300.0];
/// Minor ticks closer than this collapse to the next nice step.
const TARGET_PX_PER_MINOR_TICK: f64 = 40.0;
const MINORS_PER_MAJOR: f64 = 5.0;

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct RulerTick {
    pub time: f64,
    pub x: f64,
    pub major: bool,
}

impl RulerTick {
    pub fn label(&self) -> String {
        format!("{:.0}s", self.time)
    }
}

fn first_nice_at_least(seconds: f64) -> Option<f64> {
    NICE_STEPS.iter().copied().find(|step| *step >= seconds)
}

/// Minor and major tick spacing in seconds for a zoom level.
pub(crate) fn tick_steps(zoom: f64) -> (f64, f64) {
    let target = TARGET_PX_PER_MINOR_TICK / zoom.max(0.1);
    let minor = first_nice_at_least(target).unwrap_or(NICE_STEPS[NICE_STEPS.len() - 1]);
    let major = first_nice_at_least(minor * MINORS_PER_MAJOR)
        .filter(|major| (major / minor).fract() == 0.0)
        .unwrap_or(minor * MINORS_PER_MAJOR);
    (minor, major)
}

/// Tick positions across `[0, duration]` in scroll space.
pub(crate) fn ruler_ticks(duration: f64, zoom: f64) -> Vec<RulerTick> {
    let (minor, major) = tick_steps(zoom);
    let per_major = (major / minor).round().max(1.0) as usize;
    let count = (duration / minor + 1e-9).floor().max(0.0) as usize;
    (0..=count)
        .map(|i| {
            let time = i as f64 * minor;
            RulerTick { time, x: time * zoom, major: i % per_major == 0 }
        })
        .collect()
}

/// Time ruler with tick marks and labels
/// All elements here use pointer-events: none so clicks pass through to parent
#[component]
pub(crate) fn TimeRuler(duration: f64, zoom: f64) -> Element {
    let ticks = ruler_ticks(duration, zoom);
    let content_width = duration * zoom;

    rsx! {
        div {
            style: "position: absolute; left: 0; top: 0; width: 100%; height: 100%; pointer-events: none;",

            for tick in ticks {
                {
                    let x = tick.x;
                    let label = tick.label();
                    let (height, color) = if tick.major { (10, BORDER_STRONG) } else { (4, BORDER_SUBTLE) };
                    // Right-align labels that would run past the content edge
                    let label_style = if x + 30.0 > content_width {
                        format!(
                            "position: absolute; left: {}px; top: 3px; font-size: 9px; color: {}; font-family: 'SF Mono', Consolas, monospace; user-select: none; pointer-events: none; transform: translateX(-100%);",
                            x - 4.0, TEXT_DIM
                        )
                    } else {
                        format!(
                            "position: absolute; left: {}px; top: 3px; font-size: 9px; color: {}; font-family: 'SF Mono', Consolas, monospace; user-select: none; pointer-events: none;",
                            x + 4.0, TEXT_DIM
                        )
                    };
                    rsx! {
                        div {
                            key: "tick-{tick.time}",
                            div {
                                style: "
                                    position: absolute;
                                    left: {x}px;
                                    bottom: 0;
                                    width: 1px;
                                    height: {height}px;
                                    background-color: {color};
                                    pointer-events: none;
                                ",
                            }
                            if tick.major {
                                div { style: "{label_style}", "{label}" }
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

    #[test]
    fn test_default_zoom_ticks_every_second_with_five_second_majors() {
        let zoom = 2000.0 / 30.0;
        assert_eq!(tick_steps(zoom), (1.0, 5.0));
        let ticks = ruler_ticks(30.0, zoom);
        assert_eq!(ticks.len(), 31);
        let majors: Vec<_> = ticks.iter().filter(|t| t.major).map(|t| t.label()).collect();
        assert_eq!(majors, ["0s", "5s", "10s", "15s", "20s", "25s", "30s"]);
    }

    #[test]
    fn test_zoomed_out_spreads_ticks() {
        assert_eq!(tick_steps(20.0), (2.0, 10.0));
        let ticks = ruler_ticks(30.0, 20.0);
        assert_eq!(ticks.len(), 16);
        assert_eq!(ticks.last().map(|t| t.x), Some(600.0));
    }

    #[test]
    fn test_zoomed_in_uses_half_seconds() {
        assert_eq!(tick_steps(400.0), (0.5, 5.0));
        let ticks = ruler_ticks(2.0, 400.0);
        assert_eq!(ticks.iter().map(|t| t.x).collect::<Vec<_>>(), [0.0, 200.0, 400.0, 600.0, 800.0]);
    }

    #[test]
    fn test_major_is_always_a_multiple_of_minor() {
        for zoom in [0.1, 0.5, 1.0, 3.0, 8.0, 20.0, 66.0, 200.0, 480.0] {
            let (minor, major) = tick_steps(zoom);
            assert_eq!((major / minor).fract(), 0.0, "zoom {zoom}");
        }
    }
}
