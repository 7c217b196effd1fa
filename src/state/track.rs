use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How a track is visualized in its lane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrackDisplay {
    /// Two continuous value series drawn as lines
    Line,
    /// Two value series drawn as paired bars
    Bar,
    /// Discrete labeled markers (control actions, checkpoints)
    Markers,
}

/// Which value series of a sample is emphasized in the lane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SeriesSelector {
    #[default]
    Value1,
    Value2,
}

impl SeriesSelector {
    pub fn label(self) -> &'static str {
        match self {
            SeriesSelector::Value1 => "feature1",
            SeriesSelector::Value2 => "feature2",
        }
    }

    pub fn from_label(label: &str) -> Self {
        match label {
            "feature2" => SeriesSelector::Value2,
            _ => SeriesSelector::Value1,
        }
    }
}

/// One recorded sample of a continuous track
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Time position in seconds
    pub time: f64,
    pub value1: f64,
    pub value2: f64,
}

impl Sample {
    pub fn value(&self, series: SeriesSelector) -> f64 {
        match series {
            SeriesSelector::Value1 => self.value1,
            SeriesSelector::Value2 => self.value2,
        }
    }
}

/// A point-in-time event on a marker track
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackMarker {
    /// Time position in seconds
    pub time: f64,
    pub label: String,
}

impl TrackMarker {
    pub fn new(time: f64, label: impl Into<String>) -> Self {
        Self { time, label: label.into() }
    }

    pub fn tone(&self) -> MarkerTone {
        MarkerTone::from_label(&self.label)
    }
}

/// Color family of a marker chip, derived from its label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerTone {
    Start,
    Warning,
    Finish,
    Check,
}

impl MarkerTone {
    pub fn from_label(label: &str) -> Self {
        if label.contains("Start") {
            MarkerTone::Start
        } else if label.contains("Warning") {
            MarkerTone::Warning
        } else if label.contains("Complete") || label.contains("End") {
            MarkerTone::Finish
        } else {
            MarkerTone::Check
        }
    }
}

/// A recorded data series shown as one lane of the timeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    /// Unique identifier
    pub id: Uuid,
    /// Display name (e.g., "GT Speed")
    pub name: String,
    pub display: TrackDisplay,
    /// Samples for line/bar tracks, ordered by time
    #[serde(default)]
    pub samples: Vec<Sample>,
    /// Markers for marker tracks, ordered by time
    #[serde(default)]
    pub markers: Vec<TrackMarker>,
    /// Time of the event this track calls out in its collapsed lane
    #[serde(default)]
    pub highlight_time: f64,
}

impl Track {
    fn new(name: impl Into<String>, display: TrackDisplay) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            display,
            samples: Vec::new(),
            markers: Vec::new(),
            highlight_time: 0.0,
        }
    }

    /// Create a line track
    pub fn line(name: impl Into<String>, samples: Vec<Sample>) -> Self {
        Self { samples, ..Self::new(name, TrackDisplay::Line) }
    }

    /// Create a bar track
    pub fn bar(name: impl Into<String>, samples: Vec<Sample>) -> Self {
        Self { samples, ..Self::new(name, TrackDisplay::Bar) }
    }

    /// Create a marker track
    pub fn markers(name: impl Into<String>, markers: Vec<TrackMarker>) -> Self {
        Self { markers, ..Self::new(name, TrackDisplay::Markers) }
    }

    pub fn with_highlight(mut self, time: f64) -> Self {
        self.highlight_time = time;
        self
    }

    /// Markers whose time falls inside `[start, end]`.
    pub fn markers_between(&self, start: f64, end: f64) -> impl Iterator<Item = &TrackMarker> {
        self.markers.iter().filter(move |m| m.time >= start && m.time <= end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_tone_from_label() {
        assert_eq!(MarkerTone::from_label("Start"), MarkerTone::Start);
        assert_eq!(MarkerTone::from_label("Warning"), MarkerTone::Warning);
        assert_eq!(MarkerTone::from_label("Complete"), MarkerTone::Finish);
        assert_eq!(MarkerTone::from_label("Run End"), MarkerTone::Finish);
        assert_eq!(MarkerTone::from_label("Check A"), MarkerTone::Check);
    }

    #[test]
    fn test_markers_between_is_inclusive() {
        let track = Track::markers(
            "Control Actions",
            vec![TrackMarker::new(3.5, "Start"), TrackMarker::new(8.5, "Check A"), TrackMarker::new(12.0, "Warning")],
        );
        let labels: Vec<_> = track.markers_between(3.5, 12.0).map(|m| m.label.as_str()).collect();
        assert_eq!(labels, vec!["Start", "Check A", "Warning"]);
        assert_eq!(track.markers_between(4.0, 8.0).count(), 0);
    }

    #[test]
    fn test_track_serialization() {
        let track = Track::line("GT Speed", vec![Sample { time: 0.0, value1: 50.0, value2: 55.0 }])
            .with_highlight(15.2);
        let json = serde_json::to_string_pretty(&track).unwrap();
        let parsed: Track = serde_json::from_str(&json).unwrap();
        assert_eq!(track, parsed);
    }

    #[test]
    fn test_track_without_optional_fields() {
        let json = r#"{
            "id": "6f1c2b9e-3d4a-4c5b-8e7f-0a1b2c3d4e5f",
            "name": "Control Actions",
            "display": "Markers"
        }"#;
        let track: Track = serde_json::from_str(json).unwrap();
        assert_eq!(track.display, TrackDisplay::Markers);
        assert_eq!(track.highlight_time, 0.0);
        assert!(track.samples.is_empty());
        assert!(track.markers.is_empty());
    }
}
