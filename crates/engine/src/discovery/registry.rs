use super::discoverable::{Discoverable, DiscoverableView};
use crate::camera::CameraView;
use crate::config::DiscoveryConfig;
use level::{DiscoverableSpec, PlayerState, Position};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f32::consts::TAU;

/// The hidden symbols of one level, in level-file order.
#[derive(Debug, Clone)]
pub struct DiscoverableRegistry {
    items: Vec<Discoverable>,
    config: DiscoveryConfig,
}

impl DiscoverableRegistry {
    /// Build from level specs. Pulse phases are staggered from `seed`.
    pub fn new(specs: &[DiscoverableSpec], config: DiscoveryConfig, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let items = specs
            .iter()
            .map(|s| Discoverable::new(Position::new(s.x, s.y), s.r, rng.random_range(0.0..TAU)))
            .collect();
        Self { items, config }
    }

    /// Update every symbol against the post-clamp camera, in order.
    pub fn update_all<C: CameraView + ?Sized>(&mut self, camera: &mut C, player: &PlayerState) {
        for item in &mut self.items {
            item.update(camera, player, &self.config);
        }
    }

    /// Collect at most one symbol: the first in order that accepts.
    pub fn collect_at<C: CameraView + ?Sized>(&mut self, camera: &mut C, player: &PlayerState) -> Option<usize> {
        self.items
            .iter_mut()
            .position(|item| item.try_collect(camera, player, &self.config))
    }

    pub fn collected_count(&self) -> usize {
        self.items.iter().filter(|d| d.is_collected()).count()
    }

    pub fn found_count(&self) -> usize {
        self.items.iter().filter(|d| d.is_found()).count()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Discoverable> {
        self.items.get(index)
    }

    /// Render snapshots, in order.
    pub fn views(&self) -> impl Iterator<Item = DiscoverableView> + '_ {
        self.items.iter().map(Discoverable::view)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::CameraController;
    use crate::config::CameraConfig;
    use crate::discovery::discoverable::tests::StubCamera;
    use crate::discovery::DiscoveryState;
    use glam::Vec2;
    use level::LevelBounds;

    fn spec(x: f32, y: f32) -> DiscoverableSpec {
        DiscoverableSpec { x, y, r: 10.0 }
    }

    #[test]
    fn test_collect_at_most_one_in_order() {
        let specs = [spec(100.0, 100.0), spec(110.0, 100.0), spec(90.0, 105.0)];
        let mut reg = DiscoverableRegistry::new(&specs, DiscoveryConfig::default(), 1);
        let mut cam = StubCamera { visible: true, ..Default::default() };
        let player = PlayerState::at_rest(Position::new(100.0, 100.0), 26.0);

        reg.update_all(&mut cam, &player);
        assert_eq!(reg.found_count(), 3);

        assert_eq!(reg.collect_at(&mut cam, &player), Some(0));
        assert_eq!(reg.collected_count(), 1);
        assert_eq!(reg.get(1).unwrap().state(), DiscoveryState::Found);
        assert_eq!(reg.get(2).unwrap().state(), DiscoveryState::Found);

        assert_eq!(reg.collect_at(&mut cam, &player), Some(1));
        assert_eq!(reg.collect_at(&mut cam, &player), Some(2));
        assert_eq!(reg.collect_at(&mut cam, &player), None);
        assert_eq!(reg.collected_count(), 3);
    }

    #[test]
    fn test_collect_skips_out_of_range() {
        let specs = [spec(800.0, 100.0), spec(100.0, 100.0)];
        let mut reg = DiscoverableRegistry::new(&specs, DiscoveryConfig::default(), 1);
        let mut cam = StubCamera { visible: true, ..Default::default() };
        let player = PlayerState::at_rest(Position::new(100.0, 100.0), 26.0);

        reg.update_all(&mut cam, &player);
        assert_eq!(reg.collect_at(&mut cam, &player), Some(1));
        assert!(!reg.get(0).unwrap().is_collected());
    }

    #[test]
    fn test_update_order_and_cues() {
        let specs = [spec(10.0, 10.0), spec(20.0, 10.0)];
        let mut reg = DiscoverableRegistry::new(&specs, DiscoveryConfig::default(), 5);
        let mut cam = StubCamera { visible: true, ..Default::default() };
        reg.update_all(&mut cam, &PlayerState::at_rest(Position::ZERO, 26.0));

        let targets: Vec<_> = cam.cues.iter().map(|c| c.target).collect();
        assert_eq!(targets, vec![Position::new(10.0, 10.0), Position::new(20.0, 10.0)]);
    }

    #[test]
    fn test_spawn_symbol_found_on_first_frame() {
        let mut cam = CameraController::new(Vec2::new(800.0, 480.0), CameraConfig::default(), 7);
        let world = LevelBounds::new(2400.0, 360.0).unwrap();
        let spawn = Position::new(80.0, 220.0);
        let player = PlayerState::at_rest(spawn, 26.0);

        cam.look_at(spawn);
        cam.update(&player, &world);

        let max_x = 2400.0 - 800.0 / cam.zoom();
        let max_y = (360.0 - 480.0 / cam.zoom()).max(0.0);
        assert!((0.0..=max_x).contains(&cam.top_left().x));
        assert!((0.0..=max_y).contains(&cam.top_left().y));

        let mut reg = DiscoverableRegistry::new(&[spec(80.0, 220.0), spec(2300.0, 100.0)], DiscoveryConfig::default(), 7);
        reg.update_all(&mut cam, &player);

        assert!(reg.get(0).unwrap().is_found());
        assert!(!reg.get(1).unwrap().is_found());
        assert_eq!(cam.focus().map(|c| c.remaining()), Some(45));
    }

    #[test]
    fn test_views_follow_order() {
        let specs = [spec(1.0, 2.0), spec(3.0, 4.0)];
        let reg = DiscoverableRegistry::new(&specs, DiscoveryConfig::default(), 0);
        let positions: Vec<_> = reg.views().map(|v| v.position).collect();
        assert_eq!(positions, vec![Position::new(1.0, 2.0), Position::new(3.0, 4.0)]);
        assert_eq!(reg.len(), 2);
        assert!(reg.views().all(|v| (0.0..TAU).contains(&v.pulse_phase)));
    }
}
