//! Lateral movement of the actor
//!
//! Movement only ever touches x; height and depth belong to the world.

use super::input::Direction;
use super::state::{Actor, RunPhase, SimState};
use crate::consts::LATERAL_BOUND;

/// Step the actor one increment left or right, clamped to the corridor.
pub fn advance(actor: &mut Actor, direction: Direction, step: f32) {
    let dx = match direction {
        Direction::Left => -step,
        Direction::Right => step,
    };
    actor.position.x = (actor.position.x + dx).clamp(-LATERAL_BOUND, LATERAL_BOUND);
}

/// Discrete step from a key press. Ignored while the run is over.
pub fn steer(state: &mut SimState, direction: Direction) {
    if state.phase != RunPhase::Running {
        return;
    }
    advance(&mut state.actor, direction, state.tuning.lateral_step);
}

/// One step per held direction, fired by the continuous-input ticker.
/// Ignored while the run is over; both directions held cancel out.
pub fn pulse_held(state: &mut SimState) {
    if state.phase != RunPhase::Running {
        return;
    }
    let step = state.tuning.lateral_step;
    if state.actor.held.left {
        advance(&mut state.actor, Direction::Left, step);
    }
    if state.actor.held.right {
        advance(&mut state.actor, Direction::Right, step);
    }
}
