//! Conversion between timeline seconds and horizontal pixels.

use super::error::{Result, TimelineError};

/// Map a time in seconds to a pixel offset on a track `virtual_width` pixels wide.
pub fn time_to_pixel(time: f64, duration: f64, virtual_width: f64) -> Result<f64> {
    let axis = TimeAxis::new(duration, virtual_width)?;
    Ok(axis.time_to_pixel(time))
}

/// Map a pixel offset back to seconds, clamped to `[0, duration]`.
pub fn pixel_to_time(pixel: f64, duration: f64, virtual_width: f64) -> Result<f64> {
    let axis = TimeAxis::new(duration, virtual_width)?;
    Ok(axis.pixel_to_time(pixel))
}

/// A validated time axis. Holding one means the domain checks already passed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeAxis {
    duration: f64,
    width: f64,
}

impl TimeAxis {
    pub fn new(duration: f64, width: f64) -> Result<Self> {
        if !duration.is_finite() || duration <= 0.0 {
            return Err(TimelineError::InvalidDomain { duration });
        }
        if !width.is_finite() || width <= 0.0 {
            return Err(TimelineError::InvalidWidth { width });
        }
        Ok(Self { duration, width })
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    /// Pixels per second at this width.
    pub fn scale(&self) -> f64 {
        self.width / self.duration
    }

    pub fn time_to_pixel(&self, time: f64) -> f64 {
        time * self.width / self.duration
    }

    pub fn pixel_to_time(&self, pixel: f64) -> f64 {
        (pixel * self.duration / self.width).clamp(0.0, self.duration)
    }

    /// Same axis rendered at a different width (zoom or resize).
    pub fn with_width(&self, width: f64) -> Result<Self> {
        Self::new(self.duration, width)
    }

    /// Like [`TimeAxis::with_width`], keeping the current width when `width` is unusable.
    pub fn resized(&self, width: f64) -> Self {
        self.with_width(width).unwrap_or(*self)
    }
}

/// Format seconds the way the transport readout shows them (`12.30s`).
pub fn format_seconds(time: f64, precision: usize) -> String {
    format!("{:.*}s", precision, time)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_non_positive_duration() {
        assert!(matches!(
            time_to_pixel(1.0, 0.0, 2000.0),
            Err(TimelineError::InvalidDomain { .. })
        ));
        assert!(matches!(
            pixel_to_time(1.0, -5.0, 2000.0),
            Err(TimelineError::InvalidDomain { .. })
        ));
        assert!(matches!(
            TimeAxis::new(30.0, 0.0),
            Err(TimelineError::InvalidWidth { .. })
        ));
    }

    #[test]
    fn test_time_to_pixel_scales_linearly() {
        assert_eq!(time_to_pixel(15.0, 30.0, 3000.0).unwrap(), 1500.0);
        assert_eq!(time_to_pixel(0.0, 30.0, 3000.0).unwrap(), 0.0);
        assert_eq!(time_to_pixel(30.0, 30.0, 3000.0).unwrap(), 3000.0);
    }

    #[test]
    fn test_pixel_to_time_clamps_to_domain() {
        assert_eq!(pixel_to_time(-40.0, 30.0, 3000.0).unwrap(), 0.0);
        assert_eq!(pixel_to_time(9000.0, 30.0, 3000.0).unwrap(), 30.0);
    }

    #[test]
    fn test_round_trip_exact_on_pixel_grid() {
        // 100 px per second.
        let axis = TimeAxis::new(30.0, 3000.0).unwrap();
        for px in [0.0, 100.0, 250.0, 1500.0, 3000.0] {
            let t = axis.pixel_to_time(px);
            assert_eq!(axis.time_to_pixel(t), px);
        }
    }

    #[test]
    fn test_round_trip_within_one_pixel() {
        let axis = TimeAxis::new(30.0, 2000.0).unwrap();
        // One pixel's worth of seconds.
        let tolerance = 30.0 / 2000.0;
        let mut t = 0.0;
        while t <= 30.0 {
            let back = axis.pixel_to_time(axis.time_to_pixel(t));
            assert!((back - t).abs() <= tolerance, "t={t} back={back}");
            t += 0.37;
        }
    }

    #[test]
    fn test_pixel_to_time_is_monotonic() {
        let axis = TimeAxis::new(30.0, 733.0).unwrap();
        let mut last = f64::NEG_INFINITY;
        for px in -20..760 {
            let t = axis.pixel_to_time(px as f64);
            assert!(t >= last);
            last = t;
        }
    }

    #[test]
    fn test_format_seconds() {
        assert_eq!(format_seconds(12.3, 2), "12.30s");
        assert_eq!(format_seconds(30.0, 1), "30.0s");
    }
}
