use serde::{Deserialize, Serialize};

/// The operator-selected `[start, end]` window inside the full duration.
///
/// Constructors and setters keep `0 <= start < end <= duration` and
/// `end - start >= min_separation`; the fields are private for that reason.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimeRange {
    start: f64,
    end: f64,
}

impl TimeRange {
    /// The whole duration.
    pub fn full(duration: f64) -> Self {
        Self { start: 0.0, end: duration }
    }

    /// Build a range from arbitrary input, ordering and clamping it.
    ///
    /// The start is kept where possible and the end is pushed out to honor the
    /// minimum separation; if that would cross `duration` the start gives way.
    pub fn clamped(start: f64, end: f64, duration: f64, min_separation: f64) -> Self {
        let (lo, hi) = if start <= end { (start, end) } else { (end, start) };
        let start = lo.clamp(0.0, duration - min_separation);
        let end = hi.clamp(start + min_separation, duration);
        Self { start, end }
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn end(&self) -> f64 {
        self.end
    }

    pub fn clamp_time(&self, time: f64) -> f64 {
        time.clamp(self.start, self.end)
    }

    /// Move the start handle; the end is untouched.
    pub fn with_start(&self, start: f64, min_separation: f64) -> Self {
        Self {
            start: start.clamp(0.0, self.end - min_separation),
            end: self.end,
        }
    }

    /// Move the end handle; the start is untouched.
    pub fn with_end(&self, end: f64, duration: f64, min_separation: f64) -> Self {
        Self {
            start: self.start,
            end: end.clamp(self.start + min_separation, duration),
        }
    }

    pub fn as_tuple(&self) -> (f64, f64) {
        (self.start, self.end)
    }
}
