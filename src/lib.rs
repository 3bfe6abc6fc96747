//! Corridor Runner - an endless lane-runner simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, pooling, collision, run state)
//! - `scheduler`: Polled timer queue driving the frame/input/reset callbacks
//! - `runner`: The owning `Simulation` handle and its presentation surface
//! - `tuning`: Data-driven game balance
//!
//! Rendering, asset loading and UI live entirely outside this crate: the
//! presentation layer reads entity poses through [`runner::Presenter`] and
//! forwards raw input events through [`runner::Simulation::handle_input`].

pub mod runner;
pub mod scheduler;
pub mod sim;
pub mod tuning;

pub use runner::{Presenter, Simulation};
pub use tuning::Tuning;

/// World geometry constants
pub mod consts {
    use glam::Vec3;

    /// Half-width of the corridor; lateral position is clamped to ±this.
    pub const LATERAL_BOUND: f32 = 400.0;
    /// Lateral distance covered by one movement step.
    pub const LATERAL_STEP: f32 = 5.0;
    /// World scroll per frame along +z (entities move toward the actor).
    pub const SCROLL_SPEED: f32 = 5.0;

    /// Actor spawn pose.
    pub const ACTOR_SPAWN: Vec3 = Vec3::new(0.0, 90.0, 300.0);

    /// Obstacle pool size, fixed for the life of the process.
    pub const OBSTACLE_POOL_SIZE: usize = 20;
    /// Depth at which an obstacle has passed the actor and respawns ahead.
    pub const OBSTACLE_DESPAWN_Z: f32 = 400.0;
    /// Obstacle respawn domain: x and y closed intervals, z half-open.
    pub const OBSTACLE_SPAWN_X_MIN: f32 = -400.0;
    pub const OBSTACLE_SPAWN_X_MAX: f32 = 400.0;
    pub const OBSTACLE_SPAWN_Y_MIN: f32 = 30.0;
    pub const OBSTACLE_SPAWN_Y_MAX: f32 = 120.0;
    pub const OBSTACLE_SPAWN_Z_MIN: f32 = -1500.0;
    pub const OBSTACLE_SPAWN_Z_MAX: f32 = -500.0;

    /// Road pool size, fixed for the life of the process.
    pub const ROAD_POOL_SIZE: usize = 3;
    /// Spacing between consecutive road segments along z.
    pub const ROAD_SPACING: f32 = 1000.0;
    /// Depth at which a segment has scrolled past and wraps back.
    pub const ROAD_DESPAWN_Z: f32 = 1000.0;
    /// A wrapping segment jumps back by two spacings.
    pub const ROAD_WRAP: f32 = 2.0 * ROAD_SPACING;

    /// Frame tick rate default.
    pub const FRAME_HZ: u32 = 60;
    /// Continuous-input ticker period default.
    pub const INPUT_TICK_MS: u64 = 100;
    /// Delay between run-over and the automatic restart.
    pub const RESET_DELAY_MS: u64 = 2000;

    /// Combined actor+obstacle half extents for the proximity test.
    pub const COLLISION_HALF_WIDTH: f32 = 60.0;
    pub const COLLISION_HALF_DEPTH: f32 = 60.0;
}
