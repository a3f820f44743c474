//! JSON level definitions.
//!
//! A level pack is a single JSON document `{ "levels": [ ... ] }`. Every field of
//! a level is optional and falls back to the defaults below.

use crate::{LevelBounds, LevelError, Position, Rect};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// An ordered collection of levels.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LevelPack {
    #[serde(default)]
    pub levels: Vec<LevelDefinition>,
}

impl LevelPack {
    /// Parse a level pack from JSON text.
    pub fn from_json(text: &str) -> Result<Self, LevelError> {
        let pack: Self = serde_json::from_str(text)?;
        if pack.levels.is_empty() {
            return Err(LevelError::EmptyPack);
        }
        Ok(pack)
    }

    /// Load a level pack from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LevelError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Single-level pack used when no level file is available.
    pub fn builtin() -> Self {
        Self {
            levels: vec![LevelDefinition {
                name: "Quiet Meadow".to_string(),
                platforms: vec![
                    PlatformDef { x: 0.0, y: 324.0, w: 2400.0, h: 36.0 },
                    PlatformDef { x: 320.0, y: 250.0, w: 160.0, h: 14.0 },
                    PlatformDef { x: 620.0, y: 200.0, w: 140.0, h: 14.0 },
                    PlatformDef { x: 980.0, y: 240.0, w: 180.0, h: 14.0 },
                    PlatformDef { x: 1400.0, y: 190.0, w: 160.0, h: 14.0 },
                    PlatformDef { x: 1850.0, y: 230.0, w: 200.0, h: 14.0 },
                ],
                symbols: vec![
                    DiscoverableSpec { x: 400.0, y: 220.0, r: 10.0 },
                    DiscoverableSpec { x: 690.0, y: 170.0, r: 10.0 },
                    DiscoverableSpec { x: 1480.0, y: 160.0, r: 12.0 },
                    DiscoverableSpec { x: 2200.0, y: 290.0, r: 10.0 },
                ],
                ..LevelDefinition::default()
            }],
        }
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Get a level by index.
    pub fn level(&self, index: usize) -> Result<&LevelDefinition, LevelError> {
        self.levels.get(index).ok_or(LevelError::LevelIndexOutOfRange {
            index,
            len: self.levels.len(),
        })
    }
}

/// A single level.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LevelDefinition {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default)]
    pub theme: Theme,
    #[serde(default = "default_gravity")]
    pub gravity: f32,
    /// Initial vertical velocity of a jump (negative is up).
    #[serde(default = "default_jump_v", rename = "jumpV")]
    pub jump_v: f32,
    #[serde(default)]
    pub camera: CameraDef,
    #[serde(default)]
    pub world: WorldDef,
    #[serde(default)]
    pub start: StartDef,
    #[serde(default)]
    pub platforms: Vec<PlatformDef>,
    #[serde(default)]
    pub symbols: Vec<DiscoverableSpec>,
}

impl Default for LevelDefinition {
    fn default() -> Self {
        Self {
            name: default_name(),
            theme: Theme::default(),
            gravity: default_gravity(),
            jump_v: default_jump_v(),
            camera: CameraDef::default(),
            world: WorldDef::default(),
            start: StartDef::default(),
            platforms: Vec::new(),
            symbols: Vec::new(),
        }
    }
}

impl LevelDefinition {
    /// Validated world extents.
    pub fn bounds(&self) -> Result<LevelBounds, LevelError> {
        LevelBounds::new(self.world.w, self.world.h)
    }

    /// Y coordinate below which the player is considered dead.
    pub fn death_y(&self) -> f32 {
        self.world.death_y.unwrap_or(self.world.h + 200.0)
    }

    pub fn spawn(&self) -> Position {
        Position::new(self.start.x, self.start.y)
    }

    pub fn platform_rects(&self) -> Vec<Rect> {
        self.platforms.iter().map(|p| Rect::new(p.x, p.y, p.w, p.h)).collect()
    }
}

fn default_name() -> String {
    "Level".to_string()
}
fn default_gravity() -> f32 {
    0.65
}
fn default_jump_v() -> f32 {
    -11.0
}

/// Colors used by the renderer.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Theme {
    #[serde(default = "default_bg")]
    pub bg: String,
    #[serde(default = "default_platform")]
    pub platform: String,
    #[serde(default = "default_blob")]
    pub blob: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            bg: default_bg(),
            platform: default_platform(),
            blob: default_blob(),
        }
    }
}

fn default_bg() -> String {
    "#F0F0F0".to_string()
}
fn default_platform() -> String {
    "#C8C8C8".to_string()
}
fn default_blob() -> String {
    "#1478FF".to_string()
}

/// Legacy per-level camera knob. Parsed so older level files round-trip; the
/// spring camera does not read it.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CameraDef {
    #[serde(default = "default_cam_lerp")]
    pub lerp: f32,
}

impl Default for CameraDef {
    fn default() -> Self {
        Self { lerp: default_cam_lerp() }
    }
}

fn default_cam_lerp() -> f32 {
    0.12
}

/// World size and death line.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WorldDef {
    #[serde(default = "default_world_w")]
    pub w: f32,
    #[serde(default = "default_world_h")]
    pub h: f32,
    #[serde(default, rename = "deathY", skip_serializing_if = "Option::is_none")]
    pub death_y: Option<f32>,
}

impl Default for WorldDef {
    fn default() -> Self {
        Self {
            w: default_world_w(),
            h: default_world_h(),
            death_y: None,
        }
    }
}

fn default_world_w() -> f32 {
    2400.0
}
fn default_world_h() -> f32 {
    360.0
}

/// Player spawn.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StartDef {
    #[serde(default = "default_start_x")]
    pub x: f32,
    #[serde(default = "default_start_y")]
    pub y: f32,
    #[serde(default = "default_start_r")]
    pub r: f32,
}

impl Default for StartDef {
    fn default() -> Self {
        Self {
            x: default_start_x(),
            y: default_start_y(),
            r: default_start_r(),
        }
    }
}

fn default_start_x() -> f32 {
    80.0
}
fn default_start_y() -> f32 {
    220.0
}
fn default_start_r() -> f32 {
    26.0
}

/// A solid platform rectangle.
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct PlatformDef {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

/// A hidden symbol the camera can discover.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct DiscoverableSpec {
    pub x: f32,
    pub y: f32,
    #[serde(default = "default_symbol_r")]
    pub r: f32,
}

fn default_symbol_r() -> f32 {
    10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_missing_fields() {
        let pack = LevelPack::from_json(r#"{ "levels": [ {} ] }"#).unwrap();
        let level = pack.level(0).unwrap();

        assert_eq!(level.name, "Level");
        assert_eq!(level.gravity, 0.65);
        assert_eq!(level.jump_v, -11.0);
        assert_eq!(level.world.w, 2400.0);
        assert_eq!(level.world.h, 360.0);
        assert_eq!(level.death_y(), 560.0);
        assert_eq!(level.spawn(), Position::new(80.0, 220.0));
        assert_eq!(level.start.r, 26.0);
        assert_eq!(level.theme.blob, "#1478FF");
    }

    #[test]
    fn test_parse_full_level() {
        let json = r##"{
            "levels": [{
                "name": "Cliffs",
                "theme": { "bg": "#000000" },
                "jumpV": -9.5,
                "world": { "w": 3000, "h": 400, "deathY": 700 },
                "start": { "x": 10, "y": 20 },
                "platforms": [ { "x": 0, "y": 380, "w": 3000, "h": 20 } ],
                "symbols": [ { "x": 100, "y": 200 }, { "x": 300, "y": 150, "r": 14 } ]
            }]
        }"##;
        let pack = LevelPack::from_json(json).unwrap();
        let level = pack.level(0).unwrap();

        assert_eq!(level.name, "Cliffs");
        assert_eq!(level.theme.bg, "#000000");
        assert_eq!(level.theme.platform, "#C8C8C8");
        assert_eq!(level.jump_v, -9.5);
        assert_eq!(level.death_y(), 700.0);
        assert_eq!(level.start.r, 26.0);
        assert_eq!(level.platform_rects()[0], Rect::new(0.0, 380.0, 3000.0, 20.0));
        assert_eq!(level.symbols[0].r, 10.0);
        assert_eq!(level.symbols[1].r, 14.0);
    }

    #[test]
    fn test_empty_pack_rejected() {
        assert!(matches!(
            LevelPack::from_json(r#"{ "levels": [] }"#),
            Err(LevelError::EmptyPack)
        ));
        assert!(matches!(LevelPack::from_json("not json"), Err(LevelError::Json(_))));
    }

    #[test]
    fn test_level_index_out_of_range() {
        let pack = LevelPack::builtin();
        assert!(pack.level(0).is_ok());
        assert!(matches!(
            pack.level(3),
            Err(LevelError::LevelIndexOutOfRange { index: 3, len: 1 })
        ));
    }

    #[test]
    fn test_invalid_world_bounds() {
        let pack = LevelPack::from_json(r#"{ "levels": [ { "world": { "w": -5 } } ] }"#).unwrap();
        assert!(pack.level(0).unwrap().bounds().is_err());
    }
}
