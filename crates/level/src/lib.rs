//! Shared level crate for calmcam.
//!
//! This crate contains:
//! - JSON level definitions (level packs, platforms, hidden symbols)
//! - Shared simulation types (world bounds, player snapshots, rectangles)
//! - The level error type

mod definition;
mod error;

pub use definition::{
    CameraDef, DiscoverableSpec, LevelDefinition, LevelPack, PlatformDef, StartDef, Theme, WorldDef,
};
pub use error::LevelError;

use glam::Vec2;

/// Represents a 2D position using glam's Vec2.
pub type Position = glam::Vec2;

/// World extents used for camera clamping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelBounds {
    pub w: f32,
    pub h: f32,
}

impl LevelBounds {
    /// Create bounds, rejecting negative or non-finite sizes.
    pub fn new(w: f32, h: f32) -> Result<Self, LevelError> {
        if !w.is_finite() || !h.is_finite() || w < 0.0 || h < 0.0 {
            return Err(LevelError::InvalidWorld { width: w, height: h });
        }
        Ok(Self { w, h })
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.w, self.h)
    }
}

/// Read-only snapshot of the player, produced by the movement step each tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerState {
    /// Center of the player blob in world coordinates.
    pub pos: Position,
    /// Velocity in pixels per tick.
    pub vel: Vec2,
    /// Blob radius.
    pub r: f32,
}

impl PlayerState {
    pub const fn new(pos: Position, vel: Vec2, r: f32) -> Self {
        Self { pos, vel, r }
    }

    /// A player standing still at `pos`.
    pub fn at_rest(pos: Position, r: f32) -> Self {
        Self::new(pos, Vec2::ZERO, r)
    }
}

/// Axis-aligned rectangle given by its top-left corner and size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Overlap test against another rectangle (touching edges do not overlap).
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_reject_negative() {
        assert!(LevelBounds::new(2400.0, 360.0).is_ok());
        assert!(LevelBounds::new(0.0, 0.0).is_ok());
        assert!(matches!(
            LevelBounds::new(-1.0, 360.0),
            Err(LevelError::InvalidWorld { .. })
        ));
        assert!(LevelBounds::new(f32::NAN, 360.0).is_err());
    }

    #[test]
    fn test_rect_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        let c = Rect::new(10.0, 0.0, 10.0, 10.0);

        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&c)); // shared edge only
    }
}
