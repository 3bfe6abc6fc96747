//! Fixed-slot entity pools
//!
//! The infinite corridor is an illusion: a handful of slots scroll toward
//! the actor and teleport back ahead once they pass out of view. Slot count
//! never changes and recycling never allocates. All slot mutation goes
//! through [`Pool::advance`]; nothing else reaches into a slot.

use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::state::{Obstacle, RoadSegment};
use crate::consts::*;

/// A pooled entity that scrolls with the world and respawns past a depth
/// threshold.
pub trait Recyclable {
    /// True once the entity has scrolled past the relevant viewing range.
    fn past_threshold(&self) -> bool;
    /// Reposition the entity so it re-enters the corridor ahead.
    fn recycle(&mut self, rng: &mut Pcg32);
    /// Scroll by `dz` along the depth axis.
    fn advance_depth(&mut self, dz: f32);
}

impl Recyclable for Obstacle {
    fn past_threshold(&self) -> bool {
        self.position.z >= OBSTACLE_DESPAWN_Z
    }

    fn recycle(&mut self, rng: &mut Pcg32) {
        self.position.x = rng.random_range(OBSTACLE_SPAWN_X_MIN..=OBSTACLE_SPAWN_X_MAX);
        self.position.y = rng.random_range(OBSTACLE_SPAWN_Y_MIN..=OBSTACLE_SPAWN_Y_MAX);
        self.position.z = rng.random_range(OBSTACLE_SPAWN_Z_MIN..OBSTACLE_SPAWN_Z_MAX);
        log::trace!("obstacle {} respawned at {:?}", self.slot, self.position);
    }

    fn advance_depth(&mut self, dz: f32) {
        self.position.z += dz;
    }
}

impl Recyclable for RoadSegment {
    fn past_threshold(&self) -> bool {
        self.position.z >= ROAD_DESPAWN_Z
    }

    fn recycle(&mut self, _rng: &mut Pcg32) {
        self.position.z -= ROAD_WRAP;
        log::trace!("road segment {} wrapped to z {}", self.slot, self.position.z);
    }

    fn advance_depth(&mut self, dz: f32) {
        self.position.z += dz;
    }
}

/// Fixed-size slot array advanced once per frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pool<T> {
    slots: Vec<T>,
}

impl<T: Recyclable> Pool<T> {
    pub fn from_slots(slots: Vec<T>) -> Self {
        Self { slots }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn slots(&self) -> &[T] {
        &self.slots
    }

    /// Scroll every slot by `dz`, recycling each one the instant it crosses
    /// its threshold. Per-slot and immediate; no batching.
    pub fn advance(&mut self, dz: f32, rng: &mut Pcg32) {
        for slot in &mut self.slots {
            slot.advance_depth(dz);
            if slot.past_threshold() {
                slot.recycle(rng);
            }
        }
    }

    #[cfg(test)]
    pub fn slot_mut(&mut self, index: usize) -> &mut T {
        &mut self.slots[index]
    }
}
