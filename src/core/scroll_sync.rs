//! One horizontal scroll offset shared by the ruler and every track lane.
//!
//! Last writer wins. Writes arrive one at a time from the UI event loop, so no
//! locking is involved; callers apply the returned region list to the DOM.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use uuid::Uuid;

/// A horizontally scrollable element that must stay aligned with the others.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ScrollRegion {
    Ruler,
    Lane(Uuid),
}

impl fmt::Display for ScrollRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScrollRegion::Ruler => write!(f, "ruler"),
            ScrollRegion::Lane(id) => write!(f, "lane-{id}"),
        }
    }
}

impl FromStr for ScrollRegion {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ruler" => Ok(ScrollRegion::Ruler),
            other => {
                let id = other.strip_prefix("lane-").unwrap_or(other);
                Ok(ScrollRegion::Lane(Uuid::parse_str(id)?))
            }
        }
    }
}

/// Result of a scroll write: the settled offset and who must adopt it.
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollBroadcast {
    pub offset: f64,
    pub targets: Vec<ScrollRegion>,
}

impl ScrollBroadcast {
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

#[derive(Clone, Debug)]
pub struct ScrollSync {
    offset: f64,
    virtual_width: f64,
    viewport_width: f64,
    /// Offset each region was last told to render.
    regions: BTreeMap<ScrollRegion, f64>,
}

impl ScrollSync {
    pub fn new(virtual_width: f64, viewport_width: f64) -> Self {
        Self {
            offset: 0.0,
            virtual_width: virtual_width.max(0.0),
            viewport_width: viewport_width.max(0.0),
            regions: BTreeMap::new(),
        }
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn max_offset(&self) -> f64 {
        (self.virtual_width - self.viewport_width).max(0.0)
    }

    /// Track a region. New regions start at the shared offset.
    pub fn register(&mut self, region: ScrollRegion) {
        self.regions.insert(region, self.offset);
    }

    pub fn unregister(&mut self, region: ScrollRegion) {
        self.regions.remove(&region);
    }

    pub fn regions(&self) -> impl Iterator<Item = ScrollRegion> + '_ {
        self.regions.keys().copied()
    }

    /// The offset `region` renders with, if it is registered.
    pub fn offset_of(&self, region: ScrollRegion) -> Option<f64> {
        self.regions.get(&region).copied()
    }

    fn clamp(&self, offset: f64) -> f64 {
        if offset.is_finite() {
            offset.clamp(0.0, self.max_offset())
        } else {
            self.offset
        }
    }

    /// Record a scroll from `source` and work out who has to follow it.
    ///
    /// The source is left out of the broadcast unless clamping moved it. A
    /// write that leaves the shared offset unchanged broadcasts to nobody
    /// except regions still lagging, which breaks echo loops from
    /// programmatic scrolls.
    ///
    /// Scrolls from regions that are not registered, such as a lane still
    /// unmounting, are ignored.
    pub fn on_scroll(&mut self, source: ScrollRegion, offset: f64) -> ScrollBroadcast {
        if !self.regions.contains_key(&source) {
            tracing::trace!(%source, offset, "scroll from unregistered region ignored");
            return ScrollBroadcast { offset: self.offset, targets: Vec::new() };
        }
        let settled = self.clamp(offset);
        self.offset = settled;

        let mut targets = Vec::new();
        for (region, applied) in self.regions.iter_mut() {
            let reported = if *region == source { offset } else { *applied };
            if reported != settled {
                targets.push(*region);
            }
            *applied = settled;
        }
        tracing::trace!(%source, offset = settled, followers = targets.len(), "scroll");
        ScrollBroadcast { offset: settled, targets }
    }

    /// Update the scrollable extent after a zoom or resize and re-clamp.
    pub fn set_extent(&mut self, virtual_width: f64, viewport_width: f64) -> ScrollBroadcast {
        self.virtual_width = virtual_width.max(0.0);
        self.viewport_width = viewport_width.max(0.0);
        let settled = self.clamp(self.offset);
        self.offset = settled;

        let mut targets = Vec::new();
        for (region, applied) in self.regions.iter_mut() {
            if *applied != settled {
                targets.push(*region);
                *applied = settled;
            }
        }
        ScrollBroadcast { offset: settled, targets }
    }

    /// Scroll so `pixel` sits inside the viewport, leaving `margin` pixels.
    /// Used to follow the playhead during playback.
    pub fn reveal(&mut self, pixel: f64, margin: f64) -> ScrollBroadcast {
        let left = self.offset;
        let right = left + self.viewport_width;
        let wanted = if pixel < left + margin {
            pixel - margin
        } else if pixel > right - margin {
            pixel - self.viewport_width + margin
        } else {
            return ScrollBroadcast { offset: self.offset, targets: Vec::new() };
        };
        let settled = self.clamp(wanted);
        self.offset = settled;

        let mut targets = Vec::new();
        for (region, applied) in self.regions.iter_mut() {
            if *applied != settled {
                targets.push(*region);
                *applied = settled;
            }
        }
        ScrollBroadcast { offset: settled, targets }
    }
}
