//! Collision helpers for the blob player.
//!
//! The player is treated as its bounding square against axis-aligned platform
//! rectangles. Movement is resolved one axis at a time.

use glam::Vec2;
use level::Rect;

/// Which face of a platform stopped a vertical move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalContact {
    /// Landed on top of a platform.
    Floor,
    /// Bumped the underside of a platform.
    Ceiling,
}

/// Bounding square of a circle.
#[inline]
pub fn circle_bounds(center: Vec2, r: f32) -> Rect {
    Rect::new(center.x - r, center.y - r, r * 2.0, r * 2.0)
}

/// Move horizontally by `dx`, stopping at the first platform in the way.
/// Returns the new x and whether a wall was hit.
pub fn sweep_x(center: Vec2, r: f32, dx: f32, platforms: &[Rect]) -> (f32, bool) {
    let mut x = center.x + dx;
    let mut hit = false;
    for p in platforms {
        if !circle_bounds(Vec2::new(x, center.y), r).overlaps(p) {
            continue;
        }
        if dx > 0.0 {
            x = p.x - r;
            hit = true;
        } else if dx < 0.0 {
            x = p.right() + r;
            hit = true;
        }
    }
    (x, hit)
}

/// Move vertically by `dy`, stopping at the first platform in the way.
/// Returns the new y and the contact, if any.
pub fn sweep_y(center: Vec2, r: f32, dy: f32, platforms: &[Rect]) -> (f32, Option<VerticalContact>) {
    let mut y = center.y + dy;
    let mut contact = None;
    for p in platforms {
        if !circle_bounds(Vec2::new(center.x, y), r).overlaps(p) {
            continue;
        }
        if dy > 0.0 {
            y = p.y - r;
            contact = Some(VerticalContact::Floor);
        } else if dy < 0.0 {
            y = p.bottom() + r;
            contact = Some(VerticalContact::Ceiling);
        }
    }
    (y, contact)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_land_on_floor() {
        let floor = [Rect::new(0.0, 300.0, 1000.0, 20.0)];
        let (y, contact) = sweep_y(Vec2::new(100.0, 270.0), 26.0, 10.0, &floor);

        assert_eq!(contact, Some(VerticalContact::Floor));
        assert_eq!(y, 274.0);
    }

    #[test]
    fn test_free_fall() {
        let floor = [Rect::new(0.0, 300.0, 1000.0, 20.0)];
        let (y, contact) = sweep_y(Vec2::new(100.0, 100.0), 26.0, 10.0, &floor);

        assert_eq!(contact, None);
        assert_eq!(y, 110.0);
    }

    #[test]
    fn test_bump_ceiling() {
        let ceiling = [Rect::new(0.0, 0.0, 1000.0, 50.0)];
        let (y, contact) = sweep_y(Vec2::new(100.0, 80.0), 26.0, -8.0, &ceiling);

        assert_eq!(contact, Some(VerticalContact::Ceiling));
        assert_eq!(y, 76.0);
    }

    #[test]
    fn test_wall_stops_horizontal() {
        let wall = [Rect::new(200.0, 0.0, 20.0, 400.0)];
        let (x, hit) = sweep_x(Vec2::new(170.0, 100.0), 26.0, 6.0, &wall);
        assert!(hit);
        assert_eq!(x, 174.0);

        let (x, hit) = sweep_x(Vec2::new(250.0, 100.0), 26.0, -6.0, &wall);
        assert!(hit);
        assert_eq!(x, 246.0);
    }

    #[test]
    fn test_standing_on_floor_slides_freely() {
        // Resting exactly on top: touching edges do not block horizontal motion.
        let floor = [Rect::new(0.0, 300.0, 1000.0, 20.0)];
        let (x, hit) = sweep_x(Vec2::new(100.0, 274.0), 26.0, 4.0, &floor);
        assert!(!hit);
        assert_eq!(x, 104.0);
    }
}
