//! Calmcam engine.
//!
//! A meditative side-scrolling simulation: a blob runs over platforms while
//! a soft follow camera (deadzone, look-ahead, spring, breathing drift and
//! speed-based zoom) tracks it. Hidden symbols are revealed when they enter
//! the view and collected on demand, and both events briefly pull the camera
//! toward them.

pub mod camera;
pub mod collision;
pub mod config;
pub mod discovery;
pub mod input;
pub mod player;
pub mod render;
pub mod sim;
pub mod world;

pub use camera::{CameraController, CameraView, FocusRequest};
pub use config::Config;
pub use discovery::{DiscoverableRegistry, DiscoveryState};
pub use input::{InputFrame, InputSource};
pub use render::{Canvas, RecordingCanvas};
pub use sim::{Game, RunSummary, TickReport, run_game_loop};
