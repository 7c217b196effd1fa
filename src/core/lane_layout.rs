//! Geometry for one track lane, in the lane's own scroll space.
//!
//! Lanes are stateless with respect to time: given a track and the shared
//! axis they always produce the same shapes. Values use a fixed `0..=100`
//! domain like the recorder's charts.

use crate::state::{MarkerTone, SeriesSelector, Track};

use super::time_space::TimeAxis;

pub const VALUE_DOMAIN_MAX: f64 = 100.0;
const MAX_BAR_WIDTH_PX: f64 = 24.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LanePoint {
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LaneBar {
    pub x: f64,
    pub width: f64,
    /// Bar height in pixels, measured up from the lane bottom.
    pub height: f64,
    pub series: SeriesSelector,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LaneMarker {
    pub x: f64,
    pub time: f64,
    pub label: String,
    pub tone: MarkerTone,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LaneLayout {
    pub width: f64,
    pub height: f64,
    pub highlight_x: Option<f64>,
    pub value1: Vec<LanePoint>,
    pub value2: Vec<LanePoint>,
    pub bars: Vec<LaneBar>,
    pub markers: Vec<LaneMarker>,
}

impl LaneLayout {
    pub fn series(&self, series: SeriesSelector) -> &[LanePoint] {
        match series {
            SeriesSelector::Value1 => &self.value1,
            SeriesSelector::Value2 => &self.value2,
        }
    }
}

fn in_domain(time: f64, axis: &TimeAxis) -> bool {
    time.is_finite() && time >= 0.0 && time <= axis.duration()
}

fn value_to_y(value: f64, height: f64) -> f64 {
    let clamped = value.clamp(0.0, VALUE_DOMAIN_MAX);
    height - clamped / VALUE_DOMAIN_MAX * height
}

/// Lay out `track` across the full virtual width of `axis`.
pub fn layout_lane(track: &Track, axis: &TimeAxis, height: f64) -> LaneLayout {
    let mut layout = LaneLayout {
        width: axis.width(),
        height,
        highlight_x: in_domain(track.highlight_time, axis)
            .then(|| axis.time_to_pixel(track.highlight_time)),
        ..Default::default()
    };

    let bar_width = (axis.scale() * 0.35).clamp(1.0, MAX_BAR_WIDTH_PX);
    for sample in track.samples.iter().filter(|s| in_domain(s.time, axis)) {
        let x = axis.time_to_pixel(sample.time);
        layout.value1.push(LanePoint { x, y: value_to_y(sample.value1, height) });
        layout.value2.push(LanePoint { x, y: value_to_y(sample.value2, height) });
        for (series, left) in [(SeriesSelector::Value1, x - bar_width), (SeriesSelector::Value2, x)] {
            let value = sample.value(series);
            layout.bars.push(LaneBar {
                x: left.max(0.0),
                width: bar_width,
                height: height - value_to_y(value, height),
                series,
            });
        }
    }

    layout.markers = track
        .markers
        .iter()
        .filter(|m| in_domain(m.time, axis))
        .map(|m| LaneMarker {
            x: axis.time_to_pixel(m.time),
            time: m.time,
            label: m.label.clone(),
            tone: m.tone(),
        })
        .collect();

    layout
}

/// SVG `points` attribute for a polyline.
pub fn polyline_points(points: &[LanePoint]) -> String {
    points
        .iter()
        .map(|p| format!("{:.1},{:.1}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Sample, TrackMarker};

    fn axis() -> TimeAxis {
        TimeAxis::new(30.0, 3000.0).unwrap()
    }

    #[test]
    fn test_samples_map_onto_shared_axis() {
        let track = Track::line(
            "GT Speed",
            vec![
                Sample { time: 0.0, value1: 0.0, value2: 100.0 },
                Sample { time: 15.0, value1: 50.0, value2: 50.0 },
            ],
        );
        let layout = layout_lane(&track, &axis(), 40.0);
        assert_eq!(layout.value1, vec![LanePoint { x: 0.0, y: 40.0 }, LanePoint { x: 1500.0, y: 20.0 }]);
        assert_eq!(layout.value2[0], LanePoint { x: 0.0, y: 0.0 });
        assert_eq!(layout.width, 3000.0);
    }

    #[test]
    fn test_out_of_domain_times_are_dropped() {
        let track = Track::markers(
            "Control Actions",
            vec![
                TrackMarker::new(-1.0, "Start"),
                TrackMarker::new(12.0, "Warning"),
                TrackMarker::new(31.0, "Complete"),
                TrackMarker::new(f64::NAN, "Check A"),
            ],
        )
        .with_highlight(45.0);
        let layout = layout_lane(&track, &axis(), 40.0);
        assert_eq!(layout.markers.len(), 1);
        assert_eq!(layout.markers[0].x, 1200.0);
        assert_eq!(layout.markers[0].tone, MarkerTone::Warning);
        assert_eq!(layout.highlight_x, None);
    }

    #[test]
    fn test_values_clamp_to_lane_height() {
        let track = Track::bar("Checker Result", vec![Sample { time: 1.0, value1: 140.0, value2: -5.0 }]);
        let layout = layout_lane(&track, &axis(), 40.0);
        assert_eq!(layout.bars.len(), 2);
        assert_eq!(layout.bars[0].height, 40.0);
        assert_eq!(layout.bars[1].height, 0.0);
        assert_eq!(layout.bars[0].series, SeriesSelector::Value1);
    }

    #[test]
    fn test_highlight_follows_zoom() {
        let track = Track::line("Performance", Vec::new()).with_highlight(22.5);
        let narrow = layout_lane(&track, &axis(), 40.0);
        let wide = layout_lane(&track, &axis().with_width(6000.0).unwrap(), 40.0);
        assert_eq!(narrow.highlight_x, Some(2250.0));
        assert_eq!(wide.highlight_x, Some(4500.0));
    }

    #[test]
    fn test_polyline_points_format() {
        let points = [LanePoint { x: 0.0, y: 40.0 }, LanePoint { x: 12.34, y: 3.0 }];
        assert_eq!(polyline_points(&points), "0.0,40.0 12.3,3.0");
    }
}
