//! Transient focus cues.
//!
//! A cue biases the camera toward a point of interest for a number of ticks.
//! Only one cue is active at a time: a new request overwrites the target and
//! zoom but can only raise the remaining hold, never shorten it.

use level::Position;

/// Hold used when a caller does not care.
pub const DEFAULT_FOCUS_HOLD: u32 = 60;
/// Zoom used when a caller does not care.
pub const DEFAULT_FOCUS_ZOOM: f32 = 1.06;

/// A request to look at something.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FocusRequest {
    pub target: Position,
    pub hold_frames: u32,
    pub zoom: f32,
}

impl FocusRequest {
    pub fn new(target: Position, hold_frames: u32, zoom: f32) -> Self {
        Self {
            target,
            hold_frames,
            zoom,
        }
    }

    /// Request with the default hold and zoom.
    pub fn at(target: Position) -> Self {
        Self::new(target, DEFAULT_FOCUS_HOLD, DEFAULT_FOCUS_ZOOM)
    }
}

/// The active cue held by the camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FocusCue {
    pub target: Position,
    pub zoom: f32,
    remaining: u32,
}

impl FocusCue {
    pub fn from_request(req: FocusRequest) -> Self {
        Self {
            target: req.target,
            zoom: req.zoom,
            remaining: req.hold_frames,
        }
    }

    /// Ticks left before the cue expires.
    #[inline]
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.remaining > 0
    }

    /// Fold a new request into this cue.
    pub fn merge(&mut self, req: FocusRequest) {
        self.target = req.target;
        self.zoom = req.zoom;
        self.remaining = self.remaining.max(req.hold_frames);
    }

    /// Consume one tick of hold. Returns whether the cue is still active.
    pub fn tick(&mut self) -> bool {
        self.remaining = self.remaining.saturating_sub(1);
        self.is_active()
    }
}
