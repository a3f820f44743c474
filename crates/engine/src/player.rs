//! Blob player movement.

use crate::collision::{VerticalContact, sweep_x, sweep_y};
use crate::config::PlayerConfig;
use crate::input::InputFrame;
use crate::world::Stage;
use glam::Vec2;
use level::{PlayerState, Position};

/// The player blob: a circle with gravity, running and jumping.
#[derive(Debug, Clone)]
pub struct Player {
    pub pos: Position,
    pub vel: Vec2,
    pub r: f32,
    on_ground: bool,
    tuning: PlayerConfig,
}

impl Player {
    /// Place a fresh player at the stage spawn.
    pub fn spawn(stage: &Stage, tuning: PlayerConfig) -> Self {
        Self {
            pos: stage.spawn,
            vel: Vec2::ZERO,
            r: stage.spawn_radius,
            on_ground: false,
            tuning,
        }
    }

    #[inline]
    pub fn on_ground(&self) -> bool {
        self.on_ground
    }

    /// Snapshot handed to the camera and the symbols.
    #[inline]
    pub fn state(&self) -> PlayerState {
        PlayerState::new(self.pos, self.vel, self.r)
    }

    /// Jump if standing on something. Returns whether the jump happened.
    pub fn try_jump(&mut self, stage: &Stage) -> bool {
        if !self.on_ground {
            return false;
        }
        self.vel.y = stage.jump_v;
        self.on_ground = false;
        true
    }

    /// Advance one tick.
    pub fn update(&mut self, stage: &Stage, input: &InputFrame) {
        let t = &self.tuning;

        let dir = input.horizontal();
        if dir != 0.0 {
            self.vel.x += dir * t.accel;
        } else {
            self.vel.x *= if self.on_ground { t.ground_friction } else { t.air_friction };
        }
        let max_run = t.run_limit();
        self.vel.x = self.vel.x.clamp(-max_run, max_run);
        self.vel.y = (self.vel.y + stage.gravity).min(t.max_fall);

        let (x, hit_wall) = sweep_x(self.pos, self.r, self.vel.x, &stage.platforms);
        self.pos.x = x;
        if hit_wall {
            self.vel.x = 0.0;
        }

        let (y, contact) = sweep_y(self.pos, self.r, self.vel.y, &stage.platforms);
        self.pos.y = y;
        self.on_ground = contact == Some(VerticalContact::Floor);
        if contact.is_some() {
            self.vel.y = 0.0;
        }

        // Side walls of the world; falling out the bottom is handled by the death line.
        let max_x = (stage.bounds.w - self.r).max(self.r);
        if self.pos.x < self.r || self.pos.x > max_x {
            self.pos.x = self.pos.x.clamp(self.r, max_x);
            self.vel.x = 0.0;
        }
    }
}
