//! A hidden symbol.

use crate::camera::{CameraView, FocusRequest};
use crate::config::DiscoveryConfig;
use level::{PlayerState, Position};
use tracing::debug;

/// Lifecycle of a hidden symbol. Transitions only move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum DiscoveryState {
    /// Not yet seen by the camera.
    #[default]
    Hidden,
    /// Seen; drawn and collectable.
    Found,
    /// Picked up by the player.
    Collected,
}

/// A symbol placed in the level that the camera discovers and the player collects.
#[derive(Debug, Clone)]
pub struct Discoverable {
    pub position: Position,
    pub radius: f32,
    state: DiscoveryState,
    pulse_phase: f32,
}

impl Discoverable {
    pub fn new(position: Position, radius: f32, pulse_phase: f32) -> Self {
        Self {
            position,
            radius,
            state: DiscoveryState::Hidden,
            pulse_phase,
        }
    }

    #[inline]
    pub fn state(&self) -> DiscoveryState {
        self.state
    }

    #[inline]
    pub fn is_found(&self) -> bool {
        self.state >= DiscoveryState::Found
    }

    #[inline]
    pub fn is_collected(&self) -> bool {
        self.state == DiscoveryState::Collected
    }

    #[inline]
    pub fn pulse_phase(&self) -> f32 {
        self.pulse_phase
    }

    /// Per-tick update: reveal when the camera sees the symbol.
    pub fn update<C: CameraView + ?Sized>(&mut self, camera: &mut C, _player: &PlayerState, config: &DiscoveryConfig) {
        if self.state == DiscoveryState::Hidden && camera.world_point_in_view(self.position, config.reveal_margin) {
            self.state = DiscoveryState::Found;
            debug!("Found symbol at ({:.1}, {:.1})", self.position.x, self.position.y);
            camera.cue_focus(FocusRequest::new(self.position, config.reveal_hold, config.reveal_zoom));
        }

        self.pulse_phase += config.pulse_step;
    }

    /// Player-triggered pickup. Returns whether this symbol was collected.
    pub fn try_collect<C: CameraView + ?Sized>(
        &mut self,
        camera: &mut C,
        player: &PlayerState,
        config: &DiscoveryConfig,
    ) -> bool {
        if self.state != DiscoveryState::Found {
            return false;
        }

        let reach = self.radius + player.r + config.collect_slack;
        if player.pos.distance(self.position) >= reach {
            return false;
        }

        self.state = DiscoveryState::Collected;
        debug!("Collected symbol at ({:.1}, {:.1})", self.position.x, self.position.y);
        camera.cue_focus(FocusRequest::new(self.position, config.collect_hold, config.collect_zoom));
        true
    }

    /// Snapshot for the renderer.
    pub fn view(&self) -> DiscoverableView {
        DiscoverableView {
            position: self.position,
            radius: self.radius,
            pulse_phase: self.pulse_phase,
            found: self.is_found(),
            collected: self.is_collected(),
        }
    }
}

/// What the renderer needs to draw a symbol.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiscoverableView {
    pub position: Position,
    pub radius: f32,
    pub pulse_phase: f32,
    pub found: bool,
    pub collected: bool,
}

impl DiscoverableView {
    /// Soft pulse in `[0.2, 1.0]`.
    #[inline]
    pub fn pulse(&self) -> f32 {
        0.6 + 0.4 * self.pulse_phase.sin()
    }

    /// Radius including the pulse swell.
    #[inline]
    pub fn display_radius(&self) -> f32 {
        self.radius + self.pulse() * 2.0
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Camera double: fixed visibility, records cues.
    #[derive(Default)]
    pub(crate) struct StubCamera {
        pub visible: bool,
        pub cues: Vec<FocusRequest>,
    }

    impl CameraView for StubCamera {
        fn world_point_in_view(&self, _point: Position, _margin: f32) -> bool {
            self.visible
        }

        fn cue_focus(&mut self, request: FocusRequest) {
            self.cues.push(request);
        }
    }

    fn player_at(x: f32, y: f32) -> PlayerState {
        PlayerState::at_rest(Position::new(x, y), 26.0)
    }

    #[test]
    fn test_hidden_until_seen() {
        let config = DiscoveryConfig::default();
        let mut cam = StubCamera::default();
        let mut d = Discoverable::new(Position::new(100.0, 100.0), 10.0, 0.0);

        d.update(&mut cam, &player_at(0.0, 0.0), &config);
        assert_eq!(d.state(), DiscoveryState::Hidden);
        assert!(cam.cues.is_empty());

        cam.visible = true;
        d.update(&mut cam, &player_at(0.0, 0.0), &config);
        assert_eq!(d.state(), DiscoveryState::Found);
        assert_eq!(cam.cues, vec![FocusRequest::new(Position::new(100.0, 100.0), 45, 1.07)]);

        // Seen again: no second cue.
        d.update(&mut cam, &player_at(0.0, 0.0), &config);
        assert_eq!(cam.cues.len(), 1);
    }

    #[test]
    fn test_pulse_advances_every_tick() {
        let config = DiscoveryConfig::default();
        let mut cam = StubCamera::default();
        let mut d = Discoverable::new(Position::ZERO, 10.0, 1.0);
        for _ in 0..10 {
            d.update(&mut cam, &player_at(500.0, 0.0), &config);
        }
        assert!((d.pulse_phase() - 1.2).abs() < 1e-5);
    }

    #[test]
    fn test_collect_requires_found() {
        let config = DiscoveryConfig::default();
        let mut cam = StubCamera::default();
        let mut d = Discoverable::new(Position::new(100.0, 100.0), 10.0, 0.0);

        assert!(!d.try_collect(&mut cam, &player_at(100.0, 100.0), &config));
        assert_eq!(d.state(), DiscoveryState::Hidden);
        assert!(cam.cues.is_empty());
    }

    #[test]
    fn test_collect_range() {
        let config = DiscoveryConfig::default();
        let mut cam = StubCamera { visible: true, ..Default::default() };
        let mut d = Discoverable::new(Position::new(100.0, 100.0), 10.0, 0.0);
        d.update(&mut cam, &player_at(0.0, 0.0), &config);

        // reach = 10 + 26 + 10 = 46, strict.
        assert!(!d.try_collect(&mut cam, &player_at(146.0, 100.0), &config));
        assert_eq!(d.state(), DiscoveryState::Found);

        assert!(d.try_collect(&mut cam, &player_at(145.0, 100.0), &config));
        assert_eq!(d.state(), DiscoveryState::Collected);
        assert_eq!(cam.cues.last(), Some(&FocusRequest::new(Position::new(100.0, 100.0), 25, 1.09)));

        // Already collected.
        assert!(!d.try_collect(&mut cam, &player_at(100.0, 100.0), &config));
        assert_eq!(cam.cues.len(), 2);
    }

    #[test]
    fn test_transitions_are_one_way() {
        let config = DiscoveryConfig::default();
        let mut cam = StubCamera::default();
        let mut d = Discoverable::new(Position::new(50.0, 50.0), 10.0, 0.0);
        let mut last = d.state();

        for i in 0..60 {
            cam.visible = i % 3 == 0;
            let p = if i % 2 == 0 { player_at(50.0, 50.0) } else { player_at(900.0, 50.0) };
            if i % 5 == 0 {
                d.try_collect(&mut cam, &p, &config);
            } else {
                d.update(&mut cam, &p, &config);
            }
            assert!(d.state() >= last);
            assert!(!d.is_collected() || d.is_found());
            last = d.state();
        }
        assert_eq!(last, DiscoveryState::Collected);
    }

    #[test]
    fn test_view_snapshot() {
        let d = Discoverable::new(Position::new(3.0, 4.0), 12.0, std::f32::consts::FRAC_PI_2);
        let v = d.view();
        assert!(!v.found && !v.collected);
        assert!((v.pulse() - 1.0).abs() < 1e-6);
        assert!((v.display_radius() - 14.0).abs() < 1e-5);
    }
}
