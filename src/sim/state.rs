//! Simulation entities and the owned state aggregate
//!
//! Everything needed to reproduce a run lives here; the whole aggregate is
//! serializable, so equal seeds plus equal input timelines replay to equal
//! states.

use glam::Vec3;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::input::InputState;
use super::pool::{Pool, Recyclable};
use crate::consts::*;
use crate::tuning::Tuning;

/// Run lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunPhase {
    /// Active run
    Running,
    /// Collision ended the run; a timed reset brings it back
    Over,
}

/// State transitions observable by the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimEvent {
    PhaseChanged { from: RunPhase, to: RunPhase },
}

/// The player-controlled entity. Never destroyed: frozen while the run is
/// over, repositioned on reset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    pub position: Vec3,
    pub held: InputState,
}

impl Actor {
    pub fn new() -> Self {
        Self {
            position: ACTOR_SPAWN,
            held: InputState::default(),
        }
    }

    /// Back to the spawn pose. Held directions survive a reset; the pointer
    /// may still be down.
    pub fn respawn(&mut self) {
        self.position = ACTOR_SPAWN;
    }
}

impl Default for Actor {
    fn default() -> Self {
        Self::new()
    }
}

/// A recyclable hazard, identified by its pool slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub slot: usize,
    pub position: Vec3,
}

impl Obstacle {
    /// Fresh slot with a randomized pose somewhere ahead of the actor.
    pub fn scattered(slot: usize, rng: &mut Pcg32) -> Self {
        let mut obstacle = Self {
            slot,
            position: Vec3::ZERO,
        };
        obstacle.recycle(rng);
        obstacle
    }
}

/// A recyclable ground tile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadSegment {
    pub slot: usize,
    pub position: Vec3,
}

impl RoadSegment {
    /// Tile laid at its fixed starting offset along the corridor.
    pub fn tiled(slot: usize) -> Self {
        Self {
            slot,
            position: Vec3::new(0.0, 0.0, slot as f32 * ROAD_SPACING),
        }
    }
}

/// Complete simulation state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Generator feeding every obstacle respawn
    pub rng: Pcg32,
    /// Frame counter
    pub time_ticks: u64,
    pub phase: RunPhase,
    pub actor: Actor,
    pub obstacles: Pool<Obstacle>,
    pub road: Pool<RoadSegment>,
    pub tuning: Tuning,
    /// Transitions not yet handed to the presenter
    #[serde(skip)]
    pub events: Vec<SimEvent>,
}

impl SimState {
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let obstacles = Pool::from_slots(
            (0..OBSTACLE_POOL_SIZE)
                .map(|slot| Obstacle::scattered(slot, &mut rng))
                .collect(),
        );
        let road = Pool::from_slots((0..ROAD_POOL_SIZE).map(RoadSegment::tiled).collect());
        Self {
            seed,
            rng,
            time_ticks: 0,
            phase: RunPhase::Running,
            actor: Actor::new(),
            obstacles,
            road,
            tuning,
            events: Vec::new(),
        }
    }

    /// Switch phase and queue the transition for the presenter. Re-entering
    /// the current phase is a no-op.
    pub fn set_phase(&mut self, to: RunPhase) {
        if to == self.phase {
            return;
        }
        let from = self.phase;
        self.phase = to;
        log::info!("phase {from:?} -> {to:?} at tick {}", self.time_ticks);
        self.events.push(SimEvent::PhaseChanged { from, to });
    }

    /// The timed recovery: respawn the actor and resume. Pools keep whatever
    /// layout they scrolled into.
    pub fn reset_run(&mut self) {
        self.actor.respawn();
        self.set_phase(RunPhase::Running);
    }

    pub fn drain_events(&mut self) -> Vec<SimEvent> {
        std::mem::take(&mut self.events)
    }
}
