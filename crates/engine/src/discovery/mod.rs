//! Hidden symbols.
//!
//! Symbols start hidden, are revealed when the camera sees them and can then
//! be collected by an explicit player action. Both events cue the camera.

mod discoverable;
mod registry;

pub use discoverable::{Discoverable, DiscoverableView, DiscoveryState};
pub use registry::DiscoverableRegistry;
