//! Game state and the per-tick update.

use crate::camera::CameraController;
use crate::config::Config;
use crate::discovery::DiscoverableRegistry;
use crate::input::InputFrame;
use crate::player::Player;
use crate::render::Canvas;
use crate::world::Stage;
use glam::Vec2;
use level::{LevelError, LevelPack};
use tracing::{debug, info};

/// What happened during one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Symbols revealed this tick.
    pub found: usize,
    /// Index of the symbol collected this tick.
    pub collected: Option<usize>,
    /// The level was rebuilt (fell out or restart pressed).
    pub reloaded: bool,
}

/// Everything that lives for one running session.
pub struct Game {
    pub config: Config,
    levels: LevelPack,
    level_index: usize,
    seed: u64,
    /// Number of loads so far; mixed into per-level seeds.
    loads: u64,
    pub stage: Stage,
    pub player: Player,
    pub camera: CameraController,
    pub symbols: DiscoverableRegistry,
    pub tick_count: u64,
}

impl Game {
    /// Build a session and load the configured level.
    pub fn new(config: Config, levels: LevelPack, seed: u64) -> Result<Self, LevelError> {
        let level_index = config.sim.level_index;
        let (stage, player, camera, symbols) = Self::build_level(&config, &levels, level_index, seed)?;
        let mut game = Self {
            config,
            levels,
            level_index,
            seed,
            loads: 0,
            stage,
            player,
            camera,
            symbols,
            tick_count: 0,
        };
        game.settle_camera();
        info!(
            "Loaded level {} \"{}\" ({}x{}, {} symbols)",
            level_index,
            game.stage.name,
            game.stage.bounds.w,
            game.stage.bounds.h,
            game.symbols.len()
        );
        Ok(game)
    }

    fn build_level(
        config: &Config,
        levels: &LevelPack,
        index: usize,
        seed: u64,
    ) -> Result<(Stage, Player, CameraController, DiscoverableRegistry), LevelError> {
        let stage = Stage::from_definition(levels.level(index)?)?;
        let player = Player::spawn(&stage, config.player.clone());
        let viewport = Vec2::new(config.sim.viewport_w, config.sim.viewport_h);
        let camera = CameraController::new(viewport, config.camera.clone(), seed);
        let symbols = DiscoverableRegistry::new(&stage.symbols, config.discovery.clone(), seed.rotate_left(17));
        Ok((stage, player, camera, symbols))
    }

    /// Center the new camera on the player and run one update so the first
    /// frame is already clamped.
    fn settle_camera(&mut self) {
        let state = self.player.state();
        self.camera.look_at(state.pos);
        self.camera.update(&state, &self.stage.bounds);
    }

    /// Tear down and rebuild level `index`.
    pub fn load_level(&mut self, index: usize) -> Result<(), LevelError> {
        self.loads += 1;
        let seed = self.seed.wrapping_add(self.loads);
        let (stage, player, camera, symbols) = Self::build_level(&self.config, &self.levels, index, seed)?;
        self.level_index = index;
        self.stage = stage;
        self.player = player;
        self.camera = camera;
        self.symbols = symbols;
        self.settle_camera();
        info!("Loaded level {} \"{}\"", index, self.stage.name);
        Ok(())
    }

    /// Rebuild the current level.
    pub fn reload(&mut self) -> Result<(), LevelError> {
        self.load_level(self.level_index)
    }

    pub fn level_index(&self) -> usize {
        self.level_index
    }

    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    /// Run one simulation tick.
    ///
    /// Order: player, death check, camera, symbols, then input actions. The
    /// symbols always see the camera after it has been clamped.
    pub fn tick(&mut self, input: &InputFrame) -> Result<TickReport, LevelError> {
        self.tick_count += 1;
        let mut report = TickReport::default();

        if input.jump {
            self.player.try_jump(&self.stage);
        }
        self.player.update(&self.stage, input);

        if self.stage.is_below_death_line(&self.player.state()) {
            info!("Player fell out of \"{}\", reloading", self.stage.name);
            self.reload()?;
            report.reloaded = true;
            return Ok(report);
        }

        let player = self.player.state();
        self.camera.update(&player, &self.stage.bounds);

        let found_before = self.symbols.found_count();
        self.symbols.update_all(&mut self.camera, &player);
        report.found = self.symbols.found_count() - found_before;

        if input.interact {
            report.collected = self.symbols.collect_at(&mut self.camera, &player);
            if let Some(index) = report.collected {
                debug!(
                    "Collected symbol {} ({}/{})",
                    index,
                    self.symbols.collected_count(),
                    self.symbols.len()
                );
            }
        }

        if input.restart {
            self.reload()?;
            report.reloaded = true;
        }

        Ok(report)
    }

    /// HUD text lines, top to bottom.
    pub fn hud_lines(&self) -> [String; 3] {
        [
            self.stage.name.clone(),
            "A/D or ←/→ move • Space/W/↑ jump • E collect symbol".to_string(),
            format!(
                "Symbols collected: {}/{}",
                self.symbols.collected_count(),
                self.symbols.len()
            ),
        ]
    }

    /// Draw the current frame.
    pub fn render<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        canvas.clear(&self.stage.theme.bg);
        {
            let mut world = self.camera.begin(canvas);
            for platform in &self.stage.platforms {
                world.fill_rect(*platform, &self.stage.theme.platform);
            }
            for symbol in self.symbols.views().filter(|s| s.found) {
                world.draw_symbol(&symbol);
            }
            world.draw_player(&self.player.state(), &self.stage.theme.blob);
        }

        for (i, line) in self.hud_lines().iter().enumerate() {
            canvas.text(line, Vec2::new(10.0, 18.0 + i as f32 * 18.0));
        }
    }
}
