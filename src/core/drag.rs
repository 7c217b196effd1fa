//! Pointer-capture state machine for the playhead and range handles.
//!
//! A drag starts on pointer-down over a handle and ends on pointer-up anywhere
//! in the window. Movement is measured from the pointer-down anchor, converted
//! to a time delta on the handle's axis, then clamped per handle.

use super::range::TimeRange;
use super::time_space::TimeAxis;

/// Which handle a pointer-down landed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DragHandle {
    Playhead,
    RangeStart,
    RangeEnd,
}

impl DragHandle {
    pub fn label(self) -> &'static str {
        match self {
            DragHandle::Playhead => "playhead",
            DragHandle::RangeStart => "range-start",
            DragHandle::RangeEnd => "range-end",
        }
    }
}

/// Where a drag started: pointer X (client space), the handle's time at that
/// moment, and the axis the handle is drawn on.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragAnchor {
    pub pointer_x: f64,
    pub time: f64,
    pub axis: TimeAxis,
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    DraggingPlayhead(DragAnchor),
    DraggingRangeStart(DragAnchor),
    DraggingRangeEnd(DragAnchor),
}

impl DragState {
    pub fn handle(&self) -> Option<DragHandle> {
        match self {
            DragState::Idle => None,
            DragState::DraggingPlayhead(_) => Some(DragHandle::Playhead),
            DragState::DraggingRangeStart(_) => Some(DragHandle::RangeStart),
            DragState::DraggingRangeEnd(_) => Some(DragHandle::RangeEnd),
        }
    }

    fn anchor(&self) -> Option<&DragAnchor> {
        match self {
            DragState::Idle => None,
            DragState::DraggingPlayhead(anchor)
            | DragState::DraggingRangeStart(anchor)
            | DragState::DraggingRangeEnd(anchor) => Some(anchor),
        }
    }
}

/// Value produced by a drag step, handed to the owning session.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragUpdate {
    Time(f64),
    Range(TimeRange),
}

/// Bounds a drag step is clamped against.
#[derive(Clone, Copy, Debug)]
pub struct DragBounds {
    pub range: TimeRange,
    pub duration: f64,
    pub min_separation: f64,
}

#[derive(Clone, Debug, Default)]
pub struct DragController {
    state: DragState,
    last_emitted: Option<DragUpdate>,
}

impl DragController {
    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.state, DragState::Idle)
    }

    /// Capture `handle`. Returns `false` (and changes nothing) if another drag
    /// is already active.
    pub fn begin(
        &mut self,
        handle: DragHandle,
        pointer_x: f64,
        axis: TimeAxis,
        current_time: f64,
        range: TimeRange,
    ) -> bool {
        let time = match handle {
            DragHandle::Playhead => current_time,
            DragHandle::RangeStart => range.start(),
            DragHandle::RangeEnd => range.end(),
        };
        self.begin_at(handle, pointer_x, axis, time)
    }

    /// Capture `handle` anchored on `time` under `pointer_x`. The anchor is
    /// not clamped; only emitted values are.
    pub fn begin_at(&mut self, handle: DragHandle, pointer_x: f64, axis: TimeAxis, time: f64) -> bool {
        if let Some(active) = self.state.handle() {
            tracing::debug!(
                active = active.label(),
                ignored = handle.label(),
                "pointer-down ignored while another drag is active"
            );
            return false;
        }

        let anchor = DragAnchor { pointer_x, time, axis };
        self.state = match handle {
            DragHandle::Playhead => DragState::DraggingPlayhead(anchor),
            DragHandle::RangeStart => DragState::DraggingRangeStart(anchor),
            DragHandle::RangeEnd => DragState::DraggingRangeEnd(anchor),
        };
        self.last_emitted = None;
        tracing::debug!(handle = handle.label(), time, "drag started");
        true
    }

    /// Handle pointer movement. Returns the clamped value to apply, or `None`
    /// when idle or when the clamp produced the same value as last time.
    pub fn update(&mut self, pointer_x: f64, bounds: DragBounds) -> Option<DragUpdate> {
        let anchor = *self.state.anchor()?;
        let pixel = anchor.axis.time_to_pixel(anchor.time) + (pointer_x - anchor.pointer_x);
        let time = anchor.axis.pixel_to_time(pixel);

        let update = match self.state {
            DragState::Idle => return None,
            DragState::DraggingPlayhead(_) => DragUpdate::Time(bounds.range.clamp_time(time)),
            DragState::DraggingRangeStart(_) => {
                DragUpdate::Range(bounds.range.with_start(time, bounds.min_separation))
            }
            DragState::DraggingRangeEnd(_) => DragUpdate::Range(bounds.range.with_end(
                time,
                bounds.duration,
                bounds.min_separation,
            )),
        };

        if self.last_emitted == Some(update) {
            return None;
        }
        self.last_emitted = Some(update);
        Some(update)
    }

    /// Release the pointer. Returns the handle that was being dragged, if any.
    pub fn end(&mut self) -> Option<DragHandle> {
        let handle = self.state.handle();
        self.state = DragState::Idle;
        self.last_emitted = None;
        if let Some(handle) = handle {
            tracing::debug!(handle = handle.label(), "drag ended");
        }
        handle
    }
}
