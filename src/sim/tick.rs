//! Per-frame simulation step
//!
//! The single entry point the frame tick drives: scroll both pools, recycle
//! whatever passed out of view, then test the actor against every live
//! obstacle. The world keeps scrolling after a crash; only detection stops
//! until the timed reset, so one crash yields one transition.

use super::collision;
use super::state::{RunPhase, SimState};

/// Advance the world by one frame.
pub fn step(state: &mut SimState) {
    state.time_ticks += 1;

    let dz = state.tuning.scroll_speed;
    state.obstacles.advance(dz, &mut state.rng);
    state.road.advance(dz, &mut state.rng);

    if state.phase == RunPhase::Running {
        let hit = collision::first_hit(
            &state.actor,
            state.obstacles.slots(),
            state.tuning.collision_half_width,
            state.tuning.collision_half_depth,
        );
        if let Some(hit) = hit {
            log::debug!(
                "obstacle {} struck the actor (lateral gap {:.1}, depth gap {:.1})",
                hit.slot,
                hit.lateral_gap,
                hit.depth_gap
            );
            state.set_phase(RunPhase::Over);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::state::SimEvent;
    use glam::Vec3;

    /// Park every obstacle far outside the collision window.
    fn clear_lane(state: &mut SimState) {
        for i in 0..state.obstacles.len() {
            state.obstacles.slot_mut(i).position = Vec3::new(0.0, 75.0, -10_000.0);
        }
    }

    #[test]
    fn test_step_scrolls_both_pools() {
        let mut state = SimState::new(5);
        clear_lane(&mut state);
        let road_z: Vec<f32> = state.road.slots().iter().map(|s| s.position.z).collect();

        step(&mut state);
        assert_eq!(state.time_ticks, 1);
        assert_eq!(state.obstacles.slots()[0].position.z, -10_000.0 + SCROLL_SPEED);
        for (before, segment) in road_z.iter().zip(state.road.slots()) {
            let expected = before + SCROLL_SPEED;
            let expected = if expected >= ROAD_DESPAWN_Z {
                expected - ROAD_WRAP
            } else {
                expected
            };
            assert_eq!(segment.position.z, expected);
        }
    }

    #[test]
    fn test_pool_sizes_invariant_over_many_frames() {
        let mut state = SimState::new(5);
        for _ in 0..10_000 {
            step(&mut state);
            assert_eq!(state.obstacles.len(), OBSTACLE_POOL_SIZE);
            assert_eq!(state.road.len(), ROAD_POOL_SIZE);
            for obstacle in state.obstacles.slots() {
                // Between recycles z only grows; past the threshold it must
                // already have respawned ahead.
                assert!(obstacle.position.z < OBSTACLE_DESPAWN_Z);
                assert!(obstacle.position.z >= OBSTACLE_SPAWN_Z_MIN);
            }
        }
    }

    #[test]
    fn test_collision_ends_the_run_once() {
        let mut state = SimState::new(5);
        clear_lane(&mut state);
        state.obstacles.slot_mut(3).position = state.actor.position;

        step(&mut state);
        assert_eq!(state.phase, RunPhase::Over);
        assert_eq!(
            state.drain_events(),
            vec![SimEvent::PhaseChanged {
                from: RunPhase::Running,
                to: RunPhase::Over
            }]
        );

        // Still overlapping on later frames, but the episode already ended.
        for _ in 0..5 {
            state.obstacles.slot_mut(3).position = state.actor.position;
            step(&mut state);
        }
        assert!(state.drain_events().is_empty());
        assert_eq!(state.phase, RunPhase::Over);
    }

    #[test]
    fn test_world_keeps_scrolling_while_over() {
        let mut state = SimState::new(5);
        clear_lane(&mut state);
        state.obstacles.slot_mut(0).position = state.actor.position;
        step(&mut state);
        assert_eq!(state.phase, RunPhase::Over);

        let ticks_before = state.time_ticks;
        let z_before = state.obstacles.slots()[1].position.z;
        step(&mut state);
        assert_eq!(state.time_ticks, ticks_before + 1);
        assert_eq!(state.obstacles.slots()[1].position.z, z_before + SCROLL_SPEED);
    }

    #[test]
    fn test_collision_detected_after_reset() {
        let mut state = SimState::new(5);
        clear_lane(&mut state);
        state.obstacles.slot_mut(0).position = state.actor.position;
        step(&mut state);
        state.drain_events();

        state.reset_run();
        state.obstacles.slot_mut(0).position = state.actor.position;
        step(&mut state);
        assert_eq!(state.phase, RunPhase::Over);
        assert_eq!(state.drain_events().len(), 1);
    }
}
