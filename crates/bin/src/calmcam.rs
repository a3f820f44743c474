//! Calmcam - headless runner
//!
//! Plays the configured level with a scripted pilot and logs what the camera
//! and the symbols did. Set `RUST_LOG=engine=debug` to follow focus cues.

use engine::{Config, Game, InputFrame, InputSource, RecordingCanvas, run_game_loop};
use level::LevelPack;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Length of an unbounded run when `sim.max_ticks` is not set.
const PILOT_TICKS: u64 = 3600;

/// Runs right, hops now and then and tries to collect regularly.
struct Pilot {
    jump_every: u64,
    interact_every: u64,
    last_tick: u64,
}

impl InputSource for Pilot {
    fn next_frame(&mut self, tick: u64) -> Option<InputFrame> {
        if tick >= self.last_tick {
            return None;
        }
        Some(InputFrame {
            right: true,
            jump: tick % self.jump_every == self.jump_every - 1,
            interact: tick % self.interact_every == 0,
            ..Default::default()
        })
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Calmcam v{}", env!("CARGO_PKG_VERSION"));

    let config = Config::load()?;
    info!("Loaded configuration");
    info!("  Viewport: {}x{}", config.sim.viewport_w, config.sim.viewport_h);
    info!("  Tick: {}ms", config.sim.tick_interval_ms);

    let levels = match LevelPack::load(&config.sim.levels_path) {
        Ok(pack) => {
            info!("Loaded {} level(s) from {}", pack.len(), config.sim.levels_path);
            pack
        }
        Err(e) => {
            warn!("Failed to load levels from {}: {}, using built-in level", config.sim.levels_path, e);
            LevelPack::builtin()
        }
    };

    let seed = config.sim.seed.unwrap_or_else(rand::random);
    info!("  Seed: {}", seed);

    let mut pilot = Pilot {
        jump_every: 70,
        interact_every: 8,
        last_tick: config.sim.max_ticks.unwrap_or(PILOT_TICKS),
    };
    let mut game = Game::new(config, levels, seed)?;
    info!("Playing level {} of {}", game.level_index() + 1, game.level_count());
    let mut canvas = RecordingCanvas::default();

    let summary = tokio::select! {
        result = run_game_loop(&mut game, &mut pilot, &mut canvas) => Some(result?),
        _ = tokio::signal::ctrl_c() => {
            info!("Interrupted");
            None
        }
    };

    match summary {
        Some(summary) => info!(
            "Done after {} ticks ({} skipped, {} reloads): found {}, collected {}/{} | avg tick {:.3}ms",
            summary.ticks,
            summary.skipped,
            summary.reloads,
            summary.found,
            summary.collected,
            summary.total_symbols,
            summary.update_time_avg
        ),
        None => info!(
            "Stopped at tick {}: collected {}/{}",
            game.tick_count,
            game.symbols.collected_count(),
            game.symbols.len()
        ),
    }
    let cam = game.camera.state();
    info!(
        "Camera at ({:.1}, {:.1}) zoom {:.3}",
        cam.center.x, cam.center.y, cam.zoom
    );

    Ok(())
}
