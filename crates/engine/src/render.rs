//! Render sink.
//!
//! The simulation never draws directly; it issues calls on a [`Canvas`]. A
//! windowed front end implements this over its 2D context, the headless runner
//! uses [`RecordingCanvas`].

use crate::camera::ViewTransform;
use crate::discovery::DiscoverableView;
use glam::Vec2;
use level::{PlayerState, Rect};
use tracing::trace;

/// 2D drawing surface with a save/restore state stack.
pub trait Canvas {
    /// Push the current drawing state.
    fn save(&mut self);
    /// Pop the drawing state pushed by the matching `save`.
    fn restore(&mut self);
    /// Replace the current state's transform with `transform`.
    fn apply_transform(&mut self, transform: &ViewTransform);

    fn clear(&mut self, color: &str);
    fn fill_rect(&mut self, rect: Rect, color: &str);
    fn draw_symbol(&mut self, symbol: &DiscoverableView);
    fn draw_player(&mut self, player: &PlayerState, color: &str);
    /// Screen-space text.
    fn text(&mut self, text: &str, at: Vec2);
}

/// Canvas that draws nothing and keeps counts of what it was asked to draw.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    stack: Vec<Option<ViewTransform>>,
    current: Option<ViewTransform>,
    max_depth: usize,
    pub clears: usize,
    pub rects: usize,
    pub symbols: usize,
    pub players: usize,
    pub lines: Vec<String>,
}

impl RecordingCanvas {
    /// Current save/restore nesting.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Transform in effect, if any.
    pub fn transform(&self) -> Option<&ViewTransform> {
        self.current.as_ref()
    }
}

impl Canvas for RecordingCanvas {
    fn save(&mut self) {
        self.stack.push(self.current);
        self.max_depth = self.max_depth.max(self.stack.len());
    }

    fn restore(&mut self) {
        // An unbalanced restore is ignored, as on a browser canvas.
        if let Some(prev) = self.stack.pop() {
            self.current = prev;
        }
    }

    fn apply_transform(&mut self, transform: &ViewTransform) {
        self.current = Some(*transform);
    }

    fn clear(&mut self, color: &str) {
        trace!("clear {}", color);
        self.clears += 1;
    }

    fn fill_rect(&mut self, rect: Rect, color: &str) {
        trace!("rect {:?} {}", rect, color);
        self.rects += 1;
    }

    fn draw_symbol(&mut self, symbol: &DiscoverableView) {
        trace!(
            "symbol at ({:.1}, {:.1}) r={:.1} collected={}",
            symbol.position.x,
            symbol.position.y,
            symbol.display_radius(),
            symbol.collected
        );
        self.symbols += 1;
    }

    fn draw_player(&mut self, player: &PlayerState, color: &str) {
        trace!("player at ({:.1}, {:.1}) {}", player.pos.x, player.pos.y, color);
        self.players += 1;
    }

    fn text(&mut self, text: &str, _at: Vec2) {
        trace!("text {:?}", text);
        self.lines.push(text.to_string());
    }
}
