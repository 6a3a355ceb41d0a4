//! Scene configuration.
//!
//! Every field has a default from `constants`, so a config file only needs
//! to name what it overrides.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::errors::ConfigError;
use crate::types::Size2D;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// RNG seed. Same seed and inputs give the same scene.
    pub seed: u64,
    pub screen: Size2D,
    pub player_size: Size2D,
    pub monster_size: Size2D,
    pub projectile_size: Size2D,
    /// Nominal projectile travel rate (units/s).
    pub projectile_speed: f32,
    pub overshoot_distance: f32,
    pub spawn_interval_secs: f64,
    pub monster_min_duration_secs: f64,
    pub monster_max_duration_secs: f64,
    pub max_frame_delta_secs: f64,
    pub nominal_frame_secs: f64,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            screen: SCREEN_SIZE,
            player_size: PLAYER_SIZE,
            monster_size: MONSTER_SIZE,
            projectile_size: PROJECTILE_SIZE,
            projectile_speed: PROJECTILE_SPEED,
            overshoot_distance: OVERSHOOT_DISTANCE,
            spawn_interval_secs: SPAWN_INTERVAL_SECS,
            monster_min_duration_secs: MONSTER_MIN_DURATION_SECS,
            monster_max_duration_secs: MONSTER_MAX_DURATION_SECS,
            max_frame_delta_secs: MAX_FRAME_DELTA_SECS,
            nominal_frame_secs: NOMINAL_FRAME_SECS,
        }
    }
}

impl SceneConfig {
    /// Parse and validate a JSON config.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: SceneConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, size) in [
            ("screen", self.screen),
            ("player_size", self.player_size),
            ("monster_size", self.monster_size),
            ("projectile_size", self.projectile_size),
        ] {
            if !size.is_positive() {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be positive and finite"
                )));
            }
        }
        if !positive(self.projectile_speed as f64) {
            return Err(ConfigError::Invalid("projectile_speed must be positive and finite".into()));
        }
        if !positive(self.overshoot_distance as f64) {
            return Err(ConfigError::Invalid("overshoot_distance must be positive and finite".into()));
        }
        if !positive(self.spawn_interval_secs) {
            return Err(ConfigError::Invalid("spawn_interval_secs must be positive and finite".into()));
        }
        if !positive(self.monster_min_duration_secs)
            || !positive(self.monster_max_duration_secs)
            || self.monster_min_duration_secs > self.monster_max_duration_secs
        {
            return Err(ConfigError::Invalid(
                "monster durations must satisfy 0 < min <= max".into(),
            ));
        }
        if !positive(self.max_frame_delta_secs)
            || !positive(self.nominal_frame_secs)
        {
            return Err(ConfigError::Invalid("frame durations must be positive and finite".into()));
        }
        Ok(())
    }
}

/// False for zero, negatives, infinities and NaN.
fn positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
