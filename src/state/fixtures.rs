//! Canned tracks for the demo session.
//!
//! Recorded runs are not ingested; these series stand in for the data the
//! console would receive from the run recorder.

use super::{Sample, Track, TrackMarker};

/// Small repeatable wobble so the series do not look synthetic.
fn jitter(i: usize, amplitude: f64) -> f64 {
    ((i * 37 + 11) % 17) as f64 / 16.0 * amplitude
}

fn sampled(duration: f64, f: impl Fn(usize, f64) -> (f64, f64)) -> Vec<Sample> {
    let count = duration.floor().max(0.0) as usize;
    (0..=count)
        .map(|i| {
            let t = i as f64;
            let (value1, value2) = f(i, t);
            Sample { time: t, value1, value2 }
        })
        .collect()
}

/// The four-lane session the console opens with.
pub fn demo_tracks(duration: f64) -> Vec<Track> {
    vec![
        Track::bar(
            "Checker Result",
            sampled(duration, |i, t| {
                (
                    ((t * 0.3).sin() * 60.0 + 30.0 + jitter(i, 10.0)).abs(),
                    ((t * 0.4).cos() * 50.0 + 35.0 + jitter(i + 3, 8.0)).abs(),
                )
            }),
        )
        .with_highlight(8.5),
        Track::line(
            "GT Speed",
            sampled(duration, |i, t| {
                (
                    50.0 + (t * 0.5).sin() * 25.0 + jitter(i, 5.0),
                    55.0 + (t * 0.4).cos() * 20.0 + jitter(i + 5, 4.0),
                )
            }),
        )
        .with_highlight(15.2),
        Track::markers(
            "Control Actions",
            vec![
                TrackMarker::new(3.5, "Start"),
                TrackMarker::new(8.5, "Check A"),
                TrackMarker::new(12.0, "Warning"),
                TrackMarker::new(18.5, "Check B"),
                TrackMarker::new(25.0, "Complete"),
            ],
        )
        .with_highlight(12.0),
        Track::line(
            "Performance",
            sampled(duration, |i, t| {
                (
                    40.0 + (t * 0.6).sin() * 15.0 + jitter(i + 7, 8.0),
                    45.0 + (t * 0.5).cos() * 18.0 + jitter(i + 2, 6.0),
                )
            }),
        )
        .with_highlight(22.8),
    ]
}
