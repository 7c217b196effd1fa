use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::core::{Result, TimelineError};

/// How an external "jump to time" request treats the active range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JumpPolicy {
    /// Clamp into `[range_start, range_end]`, exactly like a playhead drag
    #[default]
    ClampToRange,
    /// Clamp only into `[0, duration]`; the playhead may leave the range
    Free,
}

/// Session-level timeline settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineSettings {
    /// Recorded run length in seconds
    #[serde(default = "default_duration_seconds")]
    pub duration_seconds: f64,
    /// Initial zoom (pixels per second)
    #[serde(default = "default_pixels_per_second")]
    pub pixels_per_second: f64,
    /// Smallest allowed range span in seconds
    #[serde(default = "default_min_range_seconds")]
    pub min_range_seconds: f64,
    /// Playback tick interval
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
    /// Seconds advanced per tick
    #[serde(default = "default_step_seconds")]
    pub step_seconds: f64,
    #[serde(default = "default_initial_time")]
    pub initial_time: f64,
    #[serde(default = "default_initial_range")]
    pub initial_range: (f64, f64),
    #[serde(default)]
    pub jump_policy: JumpPolicy,
    /// Keep the playhead visible by scrolling lanes during playback
    #[serde(default = "default_follow_playhead")]
    pub follow_playhead: bool,
}

fn default_duration_seconds() -> f64 {
    30.0
}

fn default_pixels_per_second() -> f64 {
    2000.0 / default_duration_seconds()
}

fn default_min_range_seconds() -> f64 {
    1.0
}

fn default_tick_interval_ms() -> u64 {
    100
}

fn default_step_seconds() -> f64 {
    0.1
}

fn default_initial_time() -> f64 {
    10.0
}

fn default_initial_range() -> (f64, f64) {
    (5.0, 15.0)
}

fn default_follow_playhead() -> bool {
    true
}

impl Default for TimelineSettings {
    fn default() -> Self {
        Self {
            duration_seconds: default_duration_seconds(),
            pixels_per_second: default_pixels_per_second(),
            min_range_seconds: default_min_range_seconds(),
            tick_interval_ms: default_tick_interval_ms(),
            step_seconds: default_step_seconds(),
            initial_time: default_initial_time(),
            initial_range: default_initial_range(),
            jump_policy: JumpPolicy::default(),
            follow_playhead: default_follow_playhead(),
        }
    }
}

impl TimelineSettings {
    /// Load settings from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        let settings: TimelineSettings = serde_json::from_str(&json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings if the file exists, falling back to defaults otherwise
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::load(path) {
            Ok(settings) => {
                tracing::info!(path = %path.display(), "loaded timeline settings");
                settings
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "using default timeline settings");
                Self::default()
            }
        }
    }

    /// Check the values the engine relies on
    pub fn validate(&self) -> Result<()> {
        if !self.duration_seconds.is_finite() || self.duration_seconds <= 0.0 {
            return Err(TimelineError::InvalidDomain { duration: self.duration_seconds });
        }
        if !self.pixels_per_second.is_finite() || self.pixels_per_second <= 0.0 {
            return Err(TimelineError::InvalidWidth { width: self.pixels_per_second });
        }
        if !(self.min_range_seconds > 0.0 && self.min_range_seconds < self.duration_seconds) {
            return Err(TimelineError::InvalidSettings(format!(
                "min_range_seconds {} must be within (0, {})",
                self.min_range_seconds, self.duration_seconds
            )));
        }
        if self.tick_interval_ms == 0 {
            return Err(TimelineError::InvalidSettings("tick_interval_ms must be non-zero".into()));
        }
        if !self.step_seconds.is_finite() || self.step_seconds <= 0.0 {
            return Err(TimelineError::InvalidSettings(format!(
                "step_seconds must be positive, got {}",
                self.step_seconds
            )));
        }
        Ok(())
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_session() {
        let settings = TimelineSettings::default();
        assert_eq!(settings.duration_seconds, 30.0);
        assert!((settings.duration_seconds * settings.pixels_per_second - 2000.0).abs() < 1e-9);
        assert_eq!(settings.tick_interval(), Duration::from_millis(100));
        assert_eq!(settings.initial_range, (5.0, 15.0));
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: TimelineSettings =
            serde_json::from_str(r#"{ "duration_seconds": 60.0, "jump_policy": "free" }"#).unwrap();
        assert_eq!(settings.duration_seconds, 60.0);
        assert_eq!(settings.jump_policy, JumpPolicy::Free);
        assert_eq!(settings.step_seconds, 0.1);
    }

    #[test]
    fn test_validate_rejects_bad_domain() {
        let settings = TimelineSettings { duration_seconds: 0.0, ..Default::default() };
        assert!(matches!(settings.validate(), Err(TimelineError::InvalidDomain { .. })));

        let settings = TimelineSettings { min_range_seconds: 45.0, ..Default::default() };
        assert!(matches!(settings.validate(), Err(TimelineError::InvalidSettings(_))));

        let settings = TimelineSettings { tick_interval_ms: 0, ..Default::default() };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("timeline-{}.json", uuid::Uuid::new_v4()));
        fs::write(&path, r#"{ "duration_seconds": 45.0, "initial_range": [0.0, 45.0] }"#).unwrap();
        let settings = TimelineSettings::load(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(settings.duration_seconds, 45.0);
        assert_eq!(settings.initial_range, (0.0, 45.0));
    }

    #[test]
    fn test_load_or_default_falls_back() {
        let missing = std::env::temp_dir().join(format!("missing-{}.json", uuid::Uuid::new_v4()));
        assert_eq!(TimelineSettings::load_or_default(&missing), TimelineSettings::default());

        let broken = std::env::temp_dir().join(format!("broken-{}.json", uuid::Uuid::new_v4()));
        fs::write(&broken, "{ not json").unwrap();
        let settings = TimelineSettings::load_or_default(&broken);
        fs::remove_file(&broken).unwrap();
        assert_eq!(settings, TimelineSettings::default());
    }
}
