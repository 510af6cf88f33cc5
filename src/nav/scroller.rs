//! Viewport scroll source.
//!
//! Owns the scroll offset in distance units and produces the samples the
//! controller consumes. Smooth scrolls are fire-and-forget: a new target
//! replaces the old one (last write wins) and any manual scroll cancels
//! the animation outright, the user always has control.

use super::ScrollSample;

/// Per-tick fraction of the remaining distance to a scroll target.
const EASE: f32 = 0.35;
/// Within this many units of the target, snap and stop.
const SNAP_DISTANCE: f32 = 2.0;

pub struct Scroller {
    offset: f32,
    viewport: f32,
    document: f32,
    target: Option<f32>,
    seq: u64,
}

impl Scroller {
    pub fn new() -> Self {
        Self {
            offset: 0.0,
            viewport: 0.0,
            document: 0.0,
            target: None,
            seq: 0,
        }
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn is_animating(&self) -> bool {
        self.target.is_some()
    }

    /// Sequence number of the most recently issued sample. Recording
    /// this at click time bars every sample issued so far.
    pub fn seq(&self) -> u64 {
        self.seq
    }

    fn max_offset(&self) -> f32 {
        (self.document - self.viewport).max(0.0)
    }

    /// Update viewport/document extents after layout. The offset is
    /// re-clamped so a shrinking document cannot leave us past the end.
    pub fn set_geometry(&mut self, viewport: f32, document: f32) {
        self.viewport = viewport;
        self.document = document;
        self.offset = self.offset.clamp(0.0, self.max_offset());
        if let Some(target) = self.target {
            self.target = Some(target.clamp(0.0, self.max_offset()));
        }
    }

    /// Manual scroll by a signed distance. Cancels any animation.
    pub fn scroll_by(&mut self, delta: f32) {
        self.target = None;
        self.offset = (self.offset + delta).clamp(0.0, self.max_offset());
    }

    /// Manual jump to an absolute offset. Cancels any animation.
    pub fn jump_to(&mut self, offset: f32) {
        self.target = None;
        self.offset = offset.clamp(0.0, self.max_offset());
    }

    pub fn jump_to_end(&mut self) {
        self.jump_to(self.max_offset());
    }

    /// Begin (or redirect) a smooth scroll toward an absolute offset.
    pub fn animate_to(&mut self, offset: f32) {
        self.target = Some(offset.clamp(0.0, self.max_offset()));
    }

    /// Advance the animation one tick. Returns whether the offset moved,
    /// so the caller knows to emit a fresh sample.
    pub fn tick(&mut self) -> bool {
        let Some(target) = self.target else {
            return false;
        };
        let remaining = target - self.offset;
        if remaining.abs() <= SNAP_DISTANCE {
            self.offset = target;
            self.target = None;
        } else {
            self.offset += remaining * EASE;
        }
        true
    }

    /// Issue the next sample for the current position.
    pub fn sample(&mut self) -> ScrollSample {
        self.seq += 1;
        ScrollSample {
            offset_y: self.offset,
            viewport_height: self.viewport,
            document_height: self.document,
            seq: self.seq,
        }
    }
}

impl Default for Scroller {
    fn default() -> Self {
        Self::new()
    }
}
