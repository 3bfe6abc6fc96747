//! Actor/obstacle proximity detection
//!
//! Axis-aligned: the lateral and depth gaps are compared against combined
//! half extents. Height never participates; obstacles float at varying y
//! but still block the lane.

use super::state::{Actor, Obstacle};

/// A detected overlap
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    pub slot: usize,
    pub lateral_gap: f32,
    pub depth_gap: f32,
}

/// First obstacle overlapping the actor, in slot order.
pub fn first_hit(
    actor: &Actor,
    obstacles: &[Obstacle],
    half_width: f32,
    half_depth: f32,
) -> Option<Hit> {
    obstacles.iter().find_map(|obstacle| {
        let lateral_gap = (actor.position.x - obstacle.position.x).abs();
        let depth_gap = (actor.position.z - obstacle.position.z).abs();
        (lateral_gap < half_width && depth_gap < half_depth).then_some(Hit {
            slot: obstacle.slot,
            lateral_gap,
            depth_gap,
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    const HALF_WIDTH: f32 = 60.0;
    const HALF_DEPTH: f32 = 60.0;

    fn obstacle_at(slot: usize, x: f32, z: f32) -> Obstacle {
        Obstacle {
            slot,
            position: Vec3::new(x, 75.0, z),
        }
    }

    #[test]
    fn test_overlap_on_both_axes_hits() {
        let actor = Actor::new();
        let obstacles = [obstacle_at(0, 30.0, actor.position.z + 30.0)];
        let hit = first_hit(&actor, &obstacles, HALF_WIDTH, HALF_DEPTH).unwrap();
        assert_eq!(hit.slot, 0);
        assert_eq!(hit.lateral_gap, 30.0);
        assert_eq!(hit.depth_gap, 30.0);
    }

    #[test]
    fn test_one_axis_apart_misses() {
        let actor = Actor::new();
        // Close in depth, wide of the actor laterally.
        let wide = [obstacle_at(0, 200.0, actor.position.z)];
        assert!(first_hit(&actor, &wide, HALF_WIDTH, HALF_DEPTH).is_none());
        // In lane, but far ahead.
        let far = [obstacle_at(0, 0.0, actor.position.z - 500.0)];
        assert!(first_hit(&actor, &far, HALF_WIDTH, HALF_DEPTH).is_none());
    }

    #[test]
    fn test_gap_equal_to_half_extent_misses() {
        let actor = Actor::new();
        let touching = [obstacle_at(0, HALF_WIDTH, actor.position.z)];
        assert!(first_hit(&actor, &touching, HALF_WIDTH, HALF_DEPTH).is_none());
    }

    #[test]
    fn test_height_is_ignored() {
        let mut actor = Actor::new();
        actor.position.y = 90.0;
        let low = [obstacle_at(0, 0.0, actor.position.z)];
        assert!(first_hit(&actor, &low, HALF_WIDTH, HALF_DEPTH).is_some());
    }

    #[test]
    fn test_first_slot_wins() {
        let actor = Actor::new();
        let obstacles = [
            obstacle_at(0, 500.0, 0.0),
            obstacle_at(1, 10.0, actor.position.z),
            obstacle_at(2, 0.0, actor.position.z),
        ];
        let hit = first_hit(&actor, &obstacles, HALF_WIDTH, HALF_DEPTH).unwrap();
        assert_eq!(hit.slot, 1);
    }
}
