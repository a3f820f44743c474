//! World → screen mapping for the follow camera.

use crate::render::Canvas;
use glam::{Affine2, Vec2};
use std::ops::{Deref, DerefMut};

/// Affine map from world coordinates to screen pixels.
///
/// Built as translate(viewport / 2) · scale(zoom) · translate(-center), so the
/// camera center lands in the middle of the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    affine: Affine2,
    zoom: f32,
}

impl ViewTransform {
    pub fn new(viewport: Vec2, top_left: Vec2, zoom: f32) -> Self {
        let half = viewport * 0.5;
        let center = top_left + half / zoom;
        let affine = Affine2::from_translation(half)
            * Affine2::from_scale(Vec2::splat(zoom))
            * Affine2::from_translation(-center);
        Self { affine, zoom }
    }

    #[inline]
    pub fn affine(&self) -> Affine2 {
        self.affine
    }

    #[inline]
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    #[inline]
    pub fn world_to_screen(&self, world: Vec2) -> Vec2 {
        self.affine.transform_point2(world)
    }

    #[inline]
    pub fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        self.affine.inverse().transform_point2(screen)
    }
}

/// Scoped view transform on a canvas.
///
/// Saves the canvas state and applies the transform on creation; restores on
/// drop, so everything drawn through the scope is in world space and nothing
/// drawn after it is.
pub struct ViewScope<'a, C: Canvas + ?Sized> {
    canvas: &'a mut C,
}

impl<'a, C: Canvas + ?Sized> ViewScope<'a, C> {
    pub fn enter(canvas: &'a mut C, transform: &ViewTransform) -> Self {
        canvas.save();
        canvas.apply_transform(transform);
        Self { canvas }
    }
}

impl<C: Canvas + ?Sized> Deref for ViewScope<'_, C> {
    type Target = C;

    fn deref(&self) -> &C {
        self.canvas
    }
}

impl<C: Canvas + ?Sized> DerefMut for ViewScope<'_, C> {
    fn deref_mut(&mut self) -> &mut C {
        self.canvas
    }
}

impl<C: Canvas + ?Sized> Drop for ViewScope<'_, C> {
    fn drop(&mut self) {
        self.canvas.restore();
    }
}
