//! Level runtime.
//!
//! A `Stage` is the static part of a loaded level: world bounds, platforms,
//! death line and movement constants.

use level::{DiscoverableSpec, LevelBounds, LevelDefinition, LevelError, PlayerState, Position, Rect, Theme};

#[derive(Debug, Clone)]
pub struct Stage {
    pub name: String,
    pub theme: Theme,
    pub bounds: LevelBounds,
    pub platforms: Vec<Rect>,
    /// Y below which a player's top edge counts as fallen out of the world.
    pub death_y: f32,
    pub gravity: f32,
    pub jump_v: f32,
    pub spawn: Position,
    pub spawn_radius: f32,
    /// Hidden symbols in level-file order.
    pub symbols: Vec<DiscoverableSpec>,
}

impl Stage {
    pub fn from_definition(def: &LevelDefinition) -> Result<Self, LevelError> {
        Ok(Self {
            name: def.name.clone(),
            theme: def.theme.clone(),
            bounds: def.bounds()?,
            platforms: def.platform_rects(),
            death_y: def.death_y(),
            gravity: def.gravity,
            jump_v: def.jump_v,
            spawn: def.spawn(),
            spawn_radius: def.start.r,
            symbols: def.symbols.clone(),
        })
    }

    /// Has the player dropped below the death line?
    #[inline]
    pub fn is_below_death_line(&self, player: &PlayerState) -> bool {
        player.pos.y - player.r > self.death_y
    }
}
