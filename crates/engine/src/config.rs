//! Simulation configuration.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub sim: SimConfig,
    #[serde(default)]
    pub camera: CameraConfig,
    #[serde(default)]
    pub discovery: DiscoveryConfig,
    #[serde(default)]
    pub player: PlayerConfig,
}

impl Config {
    /// Load configuration from `config.toml` or use defaults.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(Path::new("config.toml"))
    }

    /// Load configuration from `path`, writing the defaults there if it is missing.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            Ok(toml::from_str(&contents)?)
        } else {
            info!("No {} found, creating default config", path.display());
            let default_config = Self::default();
            std::fs::write(path, toml::to_string_pretty(&default_config)?)?;
            Ok(default_config)
        }
    }
}

/// Loop and level selection settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SimConfig {
    /// Viewport width in screen pixels.
    #[serde(default = "default_viewport_w")]
    pub viewport_w: f32,
    /// Viewport height in screen pixels.
    #[serde(default = "default_viewport_h")]
    pub viewport_h: f32,
    /// Tick interval in milliseconds.
    #[serde(default = "default_tick_interval")]
    pub tick_interval_ms: u64,
    /// Path of the JSON level pack.
    #[serde(default = "default_levels_path")]
    pub levels_path: String,
    /// Level to start on.
    #[serde(default)]
    pub level_index: usize,
    /// Stop after this many ticks (runs until interrupted when unset).
    #[serde(default)]
    pub max_ticks: Option<u64>,
    /// Seed for breathing noise and pulse phases (random when unset).
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            viewport_w: default_viewport_w(),
            viewport_h: default_viewport_h(),
            tick_interval_ms: default_tick_interval(),
            levels_path: default_levels_path(),
            level_index: 0,
            max_ticks: None,
            seed: None,
        }
    }
}

fn default_viewport_w() -> f32 {
    800.0
}
fn default_viewport_h() -> f32 {
    480.0
}
fn default_tick_interval() -> u64 {
    16
}
fn default_levels_path() -> String {
    "levels.json".to_string()
}

/// Follow camera tuning.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CameraConfig {
    /// Horizontal half-extent of the calm region around the camera center.
    #[serde(default = "default_deadzone_x")]
    pub deadzone_x: f32,
    /// Vertical half-extent of the calm region.
    #[serde(default = "default_deadzone_y")]
    pub deadzone_y: f32,
    /// Look-ahead pixels per unit of player horizontal velocity.
    #[serde(default = "default_look_ahead_gain")]
    pub look_ahead_gain: f32,
    #[serde(default = "default_max_look_ahead")]
    pub max_look_ahead: f32,
    /// Spring pull strength.
    #[serde(default = "default_spring")]
    pub spring: f32,
    /// Velocity retained per tick.
    #[serde(default = "default_damping")]
    pub damping: f32,
    /// Breathing drift amplitude in pixels.
    #[serde(default = "default_breathe_amp")]
    pub breathe_amp: f32,
    /// Noise phase advance per tick.
    #[serde(default = "default_breathe_speed")]
    pub breathe_speed: f32,
    /// Weight of the focus target in the desired center.
    #[serde(default = "default_focus_blend")]
    pub focus_blend: f32,
    /// Weight of the focus zoom in the desired zoom.
    #[serde(default = "default_focus_zoom_blend")]
    pub focus_zoom_blend: f32,
}

impl CameraConfig {
    /// Look-ahead cap usable as a symmetric clamp bound.
    #[inline]
    pub fn look_ahead_limit(&self) -> f32 {
        clamp_bound(self.max_look_ahead)
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            deadzone_x: default_deadzone_x(),
            deadzone_y: default_deadzone_y(),
            look_ahead_gain: default_look_ahead_gain(),
            max_look_ahead: default_max_look_ahead(),
            spring: default_spring(),
            damping: default_damping(),
            breathe_amp: default_breathe_amp(),
            breathe_speed: default_breathe_speed(),
            focus_blend: default_focus_blend(),
            focus_zoom_blend: default_focus_zoom_blend(),
        }
    }
}

fn default_deadzone_x() -> f32 {
    90.0
}
fn default_deadzone_y() -> f32 {
    70.0
}
fn default_look_ahead_gain() -> f32 {
    28.0
}
fn default_max_look_ahead() -> f32 {
    200.0
}
fn default_spring() -> f32 {
    0.09
}
fn default_damping() -> f32 {
    0.78
}
fn default_breathe_amp() -> f32 {
    6.0
}
fn default_breathe_speed() -> f32 {
    0.008
}
fn default_focus_blend() -> f32 {
    0.55
}
fn default_focus_zoom_blend() -> f32 {
    0.6
}

/// Hidden symbol reveal/collect tuning.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DiscoveryConfig {
    /// Extra margin around the view inside which symbols count as seen.
    #[serde(default = "default_reveal_margin")]
    pub reveal_margin: f32,
    #[serde(default = "default_reveal_hold")]
    pub reveal_hold: u32,
    #[serde(default = "default_reveal_zoom")]
    pub reveal_zoom: f32,
    /// Distance added to both radii when checking collect range.
    #[serde(default = "default_collect_slack")]
    pub collect_slack: f32,
    #[serde(default = "default_collect_hold")]
    pub collect_hold: u32,
    #[serde(default = "default_collect_zoom")]
    pub collect_zoom: f32,
    /// Pulse phase advance per tick.
    #[serde(default = "default_pulse_step")]
    pub pulse_step: f32,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            reveal_margin: default_reveal_margin(),
            reveal_hold: default_reveal_hold(),
            reveal_zoom: default_reveal_zoom(),
            collect_slack: default_collect_slack(),
            collect_hold: default_collect_hold(),
            collect_zoom: default_collect_zoom(),
            pulse_step: default_pulse_step(),
        }
    }
}

fn default_reveal_margin() -> f32 {
    30.0
}
fn default_reveal_hold() -> u32 {
    45
}
fn default_reveal_zoom() -> f32 {
    1.07
}
fn default_collect_slack() -> f32 {
    10.0
}
fn default_collect_hold() -> u32 {
    25
}
fn default_collect_zoom() -> f32 {
    1.09
}
fn default_pulse_step() -> f32 {
    0.02
}

/// Blob player movement.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlayerConfig {
    /// Horizontal acceleration per tick while a direction is held.
    #[serde(default = "default_player_accel")]
    pub accel: f32,
    #[serde(default = "default_player_max_run")]
    pub max_run: f32,
    /// Horizontal velocity retained per tick on the ground.
    #[serde(default = "default_player_ground_friction")]
    pub ground_friction: f32,
    /// Horizontal velocity retained per tick in the air.
    #[serde(default = "default_player_air_friction")]
    pub air_friction: f32,
    #[serde(default = "default_player_max_fall")]
    pub max_fall: f32,
}

impl PlayerConfig {
    /// Run speed cap usable as a symmetric clamp bound.
    #[inline]
    pub fn run_limit(&self) -> f32 {
        clamp_bound(self.max_run)
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            accel: default_player_accel(),
            max_run: default_player_max_run(),
            ground_friction: default_player_ground_friction(),
            air_friction: default_player_air_friction(),
            max_fall: default_player_max_fall(),
        }
    }
}

fn default_player_accel() -> f32 {
    0.55
}
fn default_player_max_run() -> f32 {
    4.0
}
fn default_player_ground_friction() -> f32 {
    0.8
}
fn default_player_air_friction() -> f32 {
    0.95
}
fn default_player_max_fall() -> f32 {
    16.0
}

/// Magnitude of a configured limit; NaN counts as no room at all.
fn clamp_bound(v: f32) -> f32 {
    if v.is_nan() { 0.0 } else { v.abs() }
}
