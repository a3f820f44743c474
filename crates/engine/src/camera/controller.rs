//! Spring-damper follow camera.
//!
//! Each tick builds a single "desired center" from the player position,
//! look-ahead, deadzone gate, focus cue and breathing drift, then takes one
//! damped spring step toward it. Zoom follows the same pattern with its own
//! constants. The result is clamped so the view never leaves the world.

use super::focus::{FocusCue, FocusRequest};
use super::noise::{NoiseSource, PerlinNoise};
use super::transform::{ViewScope, ViewTransform};
use super::CameraView;
use crate::config::CameraConfig;
use crate::render::Canvas;
use glam::Vec2;
use level::{LevelBounds, PlayerState, Position};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, warn};

/// Zoom when the player is standing still.
pub const ZOOM_SLOW: f32 = 1.08;
/// Zoom when the player is at or above `SPEED_CAP`.
pub const ZOOM_FAST: f32 = 0.98;
/// Speed proxy at which the zoom bottoms out.
const SPEED_CAP: f32 = 6.0;
/// Weight of vertical speed in the speed proxy.
const VERTICAL_SPEED_WEIGHT: f32 = 0.2;
const ZOOM_SPRING: f32 = 0.10;
const ZOOM_DAMPING: f32 = 0.80;
/// Hard floor keeping zoom positive.
const MIN_ZOOM: f32 = 0.05;
/// Phase offset between the X and Y noise samples.
const DRIFT_Y_PHASE_OFFSET: f64 = 999.0;
const DRIFT_Y_SCALE: f32 = 0.7;
/// Range the initial breathing phase is drawn from.
const INITIAL_PHASE_RANGE: f64 = 1000.0;

/// Positional state of the camera.
///
/// `center == top_left + visible_size / 2` holds after every update and clamp.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraState {
    /// Viewport size in screen pixels.
    pub viewport: Vec2,
    /// Top-left world coordinate of the view.
    pub top_left: Vec2,
    pub center: Vec2,
    /// Center velocity in world pixels per tick.
    pub velocity: Vec2,
    pub zoom: f32,
    pub zoom_velocity: f32,
}

impl CameraState {
    /// World-space size of the visible region at the current zoom.
    #[inline]
    pub fn visible_size(&self) -> Vec2 {
        self.viewport / self.zoom
    }
}

/// Follow camera for one level.
#[derive(Debug, Clone)]
pub struct CameraController<N: NoiseSource = PerlinNoise> {
    state: CameraState,
    tuning: CameraConfig,
    breathe_phase: f64,
    focus: Option<FocusCue>,
    noise: N,
}

impl CameraController<PerlinNoise> {
    /// Create a camera whose breathing noise and phase are derived from `seed`.
    pub fn new(viewport: Vec2, tuning: CameraConfig, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let noise = PerlinNoise::new(rng.random());
        let phase = rng.random_range(0.0..INITIAL_PHASE_RANGE);
        Self::with_noise(viewport, tuning, noise, phase)
    }
}

impl<N: NoiseSource> CameraController<N> {
    /// Create a camera with an explicit noise source and starting phase.
    pub fn with_noise(viewport: Vec2, tuning: CameraConfig, noise: N, breathe_phase: f64) -> Self {
        let viewport = viewport.max(Vec2::ONE);
        Self {
            state: CameraState {
                viewport,
                top_left: Vec2::ZERO,
                center: viewport * 0.5,
                velocity: Vec2::ZERO,
                zoom: 1.0,
                zoom_velocity: 0.0,
            },
            tuning,
            breathe_phase,
            focus: None,
            noise,
        }
    }

    /// Snap the camera center to `point` without smoothing or clamping.
    pub fn look_at(&mut self, point: Position) {
        self.state.center = point;
        self.state.top_left = point - self.state.visible_size() * 0.5;
    }

    /// Ask the camera to notice a point for a while.
    ///
    /// Target and zoom replace any active cue; the hold only ever grows.
    pub fn cue_focus(&mut self, request: FocusRequest) {
        if !request.zoom.is_finite() || request.zoom <= 0.0 {
            warn!("Ignoring focus cue with invalid zoom {}", request.zoom);
            return;
        }
        match self.focus.as_mut() {
            Some(cue) => cue.merge(request),
            None if request.hold_frames > 0 => {
                self.focus = Some(FocusCue::from_request(request));
            }
            None => {}
        }
        debug!(
            "Focus cue at ({:.1}, {:.1}) hold={} zoom={:.2}",
            request.target.x,
            request.target.y,
            self.focus.map_or(0, |c| c.remaining()),
            request.zoom
        );
    }

    /// Advance the camera by one tick.
    pub fn update(&mut self, player: &PlayerState, bounds: &LevelBounds) {
        let t = &self.tuning;
        let center = self.state.center;

        let mut desired = player.pos;
        let max_la = t.look_ahead_limit();
        desired.x += (player.vel.x * t.look_ahead_gain).clamp(-max_la, max_la);

        // Deadzone: only pull once the target leaves the calm region.
        if (desired.x - center.x).abs() < t.deadzone_x {
            desired.x = center.x;
        }
        if (desired.y - center.y).abs() < t.deadzone_y {
            desired.y = center.y;
        }

        let mut expired = false;
        if let Some(cue) = self.focus.as_mut() {
            desired = desired.lerp(cue.target, t.focus_blend);
            expired = !cue.tick();
        }
        if expired {
            self.focus = None;
        }

        self.breathe_phase += t.breathe_speed as f64;
        let drift = Vec2::new(
            (self.noise.sample(self.breathe_phase) - 0.5) * 2.0 * t.breathe_amp,
            (self.noise.sample(self.breathe_phase + DRIFT_Y_PHASE_OFFSET) - 0.5)
                * 2.0
                * t.breathe_amp
                * DRIFT_Y_SCALE,
        );
        desired += drift;

        let accel = (desired - self.state.center) * t.spring;
        self.state.velocity = (self.state.velocity + accel) * t.damping;
        self.state.center += self.state.velocity;

        // Calmer when slow, slightly wider when fast.
        let speed = (player.vel.x.abs() + player.vel.y.abs() * VERTICAL_SPEED_WEIGHT).clamp(0.0, SPEED_CAP);
        let mut desired_zoom = ZOOM_SLOW + (ZOOM_FAST - ZOOM_SLOW) * (speed / SPEED_CAP);
        if let Some(cue) = &self.focus {
            desired_zoom += (cue.zoom - desired_zoom) * t.focus_zoom_blend;
        }
        let zoom_accel = (desired_zoom - self.state.zoom) * ZOOM_SPRING;
        self.state.zoom_velocity = (self.state.zoom_velocity + zoom_accel) * ZOOM_DAMPING;
        self.state.zoom = (self.state.zoom + self.state.zoom_velocity).max(MIN_ZOOM);

        self.state.top_left = self.state.center - self.state.visible_size() * 0.5;
        self.clamp_to_world(bounds.w, bounds.h);
    }

    /// Keep the view inside `[0, world_w] x [0, world_h]` and resync the center.
    pub fn clamp_to_world(&mut self, world_w: f32, world_h: f32) {
        let vis = self.state.visible_size();
        let max = Vec2::new((world_w - vis.x).max(0.0), (world_h - vis.y).max(0.0));
        self.state.top_left = self.state.top_left.clamp(Vec2::ZERO, max);
        self.state.center = self.state.top_left + vis * 0.5;
    }

    /// Is `point` inside the visible region grown by `margin` on every side?
    pub fn world_point_in_view(&self, point: Position, margin: f32) -> bool {
        let min = self.state.top_left - Vec2::splat(margin);
        let max = self.state.top_left + self.state.visible_size() + Vec2::splat(margin);
        point.x >= min.x && point.x <= max.x && point.y >= min.y && point.y <= max.y
    }

    pub fn view_transform(&self) -> ViewTransform {
        ViewTransform::new(self.state.viewport, self.state.top_left, self.state.zoom)
    }

    /// Enter world space on `canvas` until the returned scope is dropped.
    pub fn begin<'a, C: Canvas + ?Sized>(&self, canvas: &'a mut C) -> ViewScope<'a, C> {
        ViewScope::enter(canvas, &self.view_transform())
    }

    #[inline]
    pub fn state(&self) -> &CameraState {
        &self.state
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.state.center
    }

    #[inline]
    pub fn top_left(&self) -> Vec2 {
        self.state.top_left
    }

    #[inline]
    pub fn zoom(&self) -> f32 {
        self.state.zoom
    }

    #[inline]
    pub fn visible_size(&self) -> Vec2 {
        self.state.visible_size()
    }

    /// Active focus cue, if any.
    #[inline]
    pub fn focus(&self) -> Option<&FocusCue> {
        self.focus.as_ref()
    }

    pub fn breathe_phase(&self) -> f64 {
        self.breathe_phase
    }
}

impl<N: NoiseSource> CameraView for CameraController<N> {
    fn world_point_in_view(&self, point: Position, margin: f32) -> bool {
        CameraController::world_point_in_view(self, point, margin)
    }

    fn cue_focus(&mut self, request: FocusRequest) {
        CameraController::cue_focus(self, request)
    }
}
