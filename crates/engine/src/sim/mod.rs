//! Fixed-rate simulation loop.

mod game;

pub use game::{Game, TickReport};

use crate::input::InputSource;
use crate::render::Canvas;
use futures_util::FutureExt;
use level::LevelError;
use std::time::Duration;
use tokio::time::{Instant, MissedTickBehavior, interval_at};
use tracing::{debug, info, warn};

/// Totals for one run of [`run_game_loop`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunSummary {
    pub ticks: u64,
    /// Interval ticks dropped to catch up after falling behind.
    pub skipped: u64,
    pub reloads: u64,
    pub found: usize,
    pub collected: usize,
    pub total_symbols: usize,
    /// Smoothed tick cost in milliseconds.
    pub update_time_avg: f64,
}

/// Drive `game` at the configured tick rate until the input source runs dry
/// or `sim.max_ticks` is reached. Each tick is rendered onto `canvas`.
pub async fn run_game_loop<I, C>(game: &mut Game, input: &mut I, canvas: &mut C) -> Result<RunSummary, LevelError>
where
    I: InputSource + ?Sized,
    C: Canvas + ?Sized,
{
    let tick_interval_ms = game.config.sim.tick_interval_ms.max(1);
    let max_ticks = game.config.sim.max_ticks;
    let start = Instant::now() + Duration::from_millis(tick_interval_ms);
    let mut ticker = interval_at(start, Duration::from_millis(tick_interval_ms));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let mut summary = RunSummary::default();
    info!(
        "Running \"{}\" at {}ms per tick{}",
        game.stage.name,
        tick_interval_ms,
        max_ticks.map_or(String::new(), |n| format!(" for {} ticks", n))
    );

    loop {
        if max_ticks.is_some_and(|n| summary.ticks >= n) {
            break;
        }
        let Some(frame) = input.next_frame(summary.ticks) else {
            debug!("Input source ended after {} ticks", summary.ticks);
            break;
        };

        let scheduled = ticker.tick().await;

        // Drop queued ticks so the simulation stays on the latest one.
        let mut skipped = 0u64;
        while ticker.tick().now_or_never().is_some() {
            skipped += 1;
        }
        if skipped > 0 {
            debug!(
                "Skipped {} ticks to stay current (lag: {:?})",
                skipped,
                Instant::now().saturating_duration_since(scheduled)
            );
            summary.skipped += skipped;
        }

        let tick_start = std::time::Instant::now();
        let report = game.tick(&frame)?;
        game.render(canvas);
        let tick_ms = tick_start.elapsed().as_secs_f64() * 1000.0;
        summary.update_time_avg = summary.update_time_avg * 0.5 + tick_ms * 0.5;

        let tick_budget = tick_interval_ms as f64 * 0.9;
        if tick_ms > tick_budget {
            warn!(
                "Slow tick #{}: {:.3}ms (budget: {:.1}ms)",
                game.tick_count, tick_ms, tick_budget
            );
        }

        summary.ticks += 1;
        summary.found += report.found;
        if report.collected.is_some() {
            summary.collected += 1;
        }
        if report.reloaded {
            summary.reloads += 1;
        }
    }

    summary.total_symbols = game.symbols.len();
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::input::InputFrame;
    use crate::render::RecordingCanvas;
    use level::LevelPack;

    fn fast_config(max_ticks: Option<u64>) -> Config {
        let mut config = Config::default();
        config.sim.tick_interval_ms = 1;
        config.sim.max_ticks = max_ticks;
        config
    }

    #[tokio::test]
    async fn test_stops_at_max_ticks() {
        let mut game = Game::new(fast_config(Some(20)), LevelPack::builtin(), 1).unwrap();
        let mut input = |_tick: u64| Some(InputFrame::default());
        let mut canvas = RecordingCanvas::default();

        let summary = run_game_loop(&mut game, &mut input, &mut canvas).await.unwrap();

        assert_eq!(summary.ticks, 20);
        assert_eq!(game.tick_count, 20);
        assert_eq!(summary.total_symbols, 4);
        assert!(summary.found >= 1);
        assert_eq!(canvas.depth(), 0);
        assert_eq!(canvas.clears, 20);
    }

    #[tokio::test]
    async fn test_stops_when_input_ends() {
        let mut game = Game::new(fast_config(None), LevelPack::builtin(), 1).unwrap();
        let mut input = |tick: u64| (tick < 5).then(InputFrame::default);
        let mut canvas = RecordingCanvas::default();

        let summary = run_game_loop(&mut game, &mut input, &mut canvas).await.unwrap();
        assert_eq!(summary.ticks, 5);
        assert_eq!(summary.reloads, 0);
    }

    #[tokio::test]
    async fn test_restart_counts_reload() {
        let mut game = Game::new(fast_config(Some(3)), LevelPack::builtin(), 1).unwrap();
        let mut input = |tick: u64| {
            Some(InputFrame {
                restart: tick == 1,
                ..Default::default()
            })
        };
        let mut canvas = RecordingCanvas::default();

        let summary = run_game_loop(&mut game, &mut input, &mut canvas).await.unwrap();
        assert_eq!(summary.ticks, 3);
        assert_eq!(summary.reloads, 1);
    }
}
