//! Data-driven game balance
//!
//! Every knob has a gameplay-neutral default; hosts can override a subset
//! from JSON without restating the rest. Pool sizes and the corridor
//! geometry are fixed in [`crate::consts`] and deliberately not tunable.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Balance knobs carried inside the simulation state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// World scroll per frame along +z
    pub scroll_speed: f32,
    /// Lateral distance per movement step
    pub lateral_step: f32,
    /// Combined actor+obstacle half width for the proximity test
    pub collision_half_width: f32,
    /// Combined actor+obstacle half depth for the proximity test
    pub collision_half_depth: f32,
    /// Frame tick rate
    pub frame_hz: u32,
    /// Continuous-input ticker period
    pub input_tick_ms: u64,
    /// Delay before a crashed run restarts
    pub reset_delay_ms: u64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            scroll_speed: SCROLL_SPEED,
            lateral_step: LATERAL_STEP,
            collision_half_width: COLLISION_HALF_WIDTH,
            collision_half_depth: COLLISION_HALF_DEPTH,
            frame_hz: FRAME_HZ,
            input_tick_ms: INPUT_TICK_MS,
            reset_delay_ms: RESET_DELAY_MS,
        }
    }
}

impl Tuning {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs(1) / self.frame_hz.max(1)
    }

    pub fn input_tick(&self) -> Duration {
        Duration::from_millis(self.input_tick_ms)
    }

    pub fn reset_delay(&self) -> Duration {
        Duration::from_millis(self.reset_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_constants() {
        let tuning = Tuning::default();
        assert_eq!(tuning.scroll_speed, SCROLL_SPEED);
        assert_eq!(tuning.input_tick(), Duration::from_millis(100));
        assert_eq!(tuning.reset_delay(), Duration::from_millis(2000));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{"scroll_speed": 7.5}"#).unwrap();
        assert_eq!(tuning.scroll_speed, 7.5);
        assert_eq!(tuning.lateral_step, LATERAL_STEP);
        assert_eq!(tuning.frame_hz, FRAME_HZ);
    }

    #[test]
    fn test_json_round_trip() {
        let tuning = Tuning {
            collision_half_width: 80.0,
            ..Default::default()
        };
        let json = tuning.to_json().unwrap();
        assert_eq!(Tuning::from_json(&json).unwrap(), tuning);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(Tuning::from_json("not json").is_err());
    }

    #[test]
    fn test_frame_interval_survives_zero_rate() {
        let tuning = Tuning {
            frame_hz: 0,
            ..Default::default()
        };
        assert_eq!(tuning.frame_interval(), Duration::from_secs(1));
    }
}
