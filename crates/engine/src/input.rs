//! Per-tick player input.

/// Input sampled for one tick.
///
/// `left`/`right` are held states; `jump`, `interact` and `restart` are
/// key-press edges and fire once per press.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputFrame {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    /// Try to collect a nearby found symbol.
    pub interact: bool,
    /// Reload the current level.
    pub restart: bool,
}

impl InputFrame {
    /// -1, 0 or 1 depending on the held direction keys.
    #[inline]
    pub fn horizontal(&self) -> f32 {
        match (self.left, self.right) {
            (true, false) => -1.0,
            (false, true) => 1.0,
            _ => 0.0,
        }
    }
}

/// Source of input frames for the tick loop.
pub trait InputSource {
    /// Input for `tick`. `None` ends the run.
    fn next_frame(&mut self, tick: u64) -> Option<InputFrame>;
}

impl<F> InputSource for F
where
    F: FnMut(u64) -> Option<InputFrame>,
{
    fn next_frame(&mut self, tick: u64) -> Option<InputFrame> {
        self(tick)
    }
}
