//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Stable iteration order (by pool slot)
//! - No rendering, timer or platform dependencies

pub mod collision;
pub mod input;
pub mod player;
pub mod pool;
pub mod state;
pub mod tick;

pub use collision::{Hit, first_hit};
pub use input::{Direction, InputEvent, InputState};
pub use pool::{Pool, Recyclable};
pub use state::{Actor, Obstacle, RoadSegment, RunPhase, SimEvent, SimState};
pub use tick::step;
