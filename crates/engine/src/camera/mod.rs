//! Follow camera.
//!
//! The camera owns its state exclusively. Other systems reach it through
//! [`CameraView`], which only allows a visibility query and focus requests.

mod controller;
mod focus;
mod noise;
mod transform;

pub use controller::{CameraController, CameraState, ZOOM_FAST, ZOOM_SLOW};
pub use focus::{DEFAULT_FOCUS_HOLD, DEFAULT_FOCUS_ZOOM, FocusCue, FocusRequest};
pub use noise::{NoiseSource, PerlinNoise};
pub use transform::{ViewScope, ViewTransform};

use level::Position;

/// What the rest of the simulation may do with the camera.
pub trait CameraView {
    /// Is `point` inside the current (post-clamp) view, grown by `margin`?
    fn world_point_in_view(&self, point: Position, margin: f32) -> bool;

    /// Ask the camera to look toward a point for a while.
    fn cue_focus(&mut self, request: FocusRequest);
}
