//! Fixed-tick playback clock.
//!
//! Time is derived from the tick count since the last anchor
//! (`anchor + ticks * step`) instead of adding `step` on every tick, so long
//! sessions do not accumulate floating-point drift.

use std::time::Duration;

use super::range::TimeRange;

/// Identifies one run of the ticker. A tick carrying an old token is stale.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickToken(u64);

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TickOutcome {
    /// Stale token or not playing; nothing changed.
    Ignored,
    /// Playhead advanced to the given time.
    Advanced(f64),
    /// Playhead reached the range end and the clock paused.
    Finished(f64),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlaybackStart {
    pub token: TickToken,
    /// Time playback starts from (clamped into the range).
    pub from: f64,
}

#[derive(Clone, Debug)]
pub struct PlaybackClock {
    interval: Duration,
    step: f64,
    playing: bool,
    generation: u64,
    anchor_time: f64,
    ticks: u64,
}

impl PlaybackClock {
    pub fn new(interval: Duration, step: f64) -> Self {
        Self {
            interval,
            step,
            playing: false,
            generation: 0,
            anchor_time: 0.0,
            ticks: 0,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Recorded seconds advanced per wall-clock second.
    pub fn speed(&self) -> f64 {
        self.step / self.interval.as_secs_f64()
    }

    /// `Paused -> Playing`. A silent no-op when already playing or when there
    /// is no room left before the range end.
    pub fn start(&mut self, current_time: f64, range: TimeRange) -> Option<PlaybackStart> {
        if self.playing {
            return None;
        }
        let from = range.clamp_time(current_time);
        if from >= range.end() {
            return None;
        }
        self.generation += 1;
        self.playing = true;
        self.anchor_time = from;
        self.ticks = 0;
        tracing::info!(from, speed = self.speed(), "playback started");
        Some(PlaybackStart { token: TickToken(self.generation), from })
    }

    /// Advance one step. Clamps to the range end and pauses there.
    pub fn tick(&mut self, token: TickToken, range: TimeRange) -> TickOutcome {
        if !self.playing || token.0 != self.generation {
            return TickOutcome::Ignored;
        }
        self.ticks += 1;
        let next = self.anchor_time + self.ticks as f64 * self.step;
        if next >= range.end() {
            self.pause();
            tracing::info!(at = range.end(), "playback reached range end");
            return TickOutcome::Finished(range.end());
        }
        if next < range.start() {
            // Range moved ahead of the playhead mid-run.
            self.rebase(range.start());
            return TickOutcome::Advanced(range.start());
        }
        tracing::trace!(time = next, tick = self.ticks, "tick");
        TickOutcome::Advanced(next)
    }

    /// `Playing -> Paused`, keeping the current time. Returns whether it was playing.
    pub fn stop(&mut self) -> bool {
        let was_playing = self.playing;
        if was_playing {
            self.pause();
            tracing::info!("playback stopped");
        }
        was_playing
    }

    /// Pause unconditionally and return the time to rewind to.
    pub fn reset(&mut self, range: TimeRange) -> f64 {
        self.stop();
        range.start()
    }

    /// Re-anchor after the playhead was moved by something other than a tick.
    pub fn rebase(&mut self, time: f64) {
        self.anchor_time = time;
        self.ticks = 0;
    }

    fn pause(&mut self) {
        self.playing = false;
        // Invalidate whatever tick is still in flight.
        self.generation += 1;
    }
}
