//! Tunable gameplay constants.
//!
//! Defaults reproduce the arcade feel. A RON file can override any subset:
//!
//! ```ron
//! (player_speed: 350.0, meteor_spawn_interval_ms: 800)
//! ```

use std::path::Path;
use std::time::Duration;

use bevy::prelude::*;
use serde::Deserialize;

use crate::common::error::ConfigError;

/// Looked up in the working directory by `game::run`.
pub const TUNABLES_FILE: &str = "space_shooter.ron";

#[derive(Resource, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Tunables {
    pub player_speed: f32,
    pub player_cheat_speed: f32,
    pub laser_cooldown_ms: u64,
    pub laser_speed: f32,
    pub meteor_spawn_interval_ms: u64,
    pub meteor_lifetime_ms: u64,
    pub meteor_speed_min: u32,
    pub meteor_speed_max: u32,
    pub meteor_rotation_min: u32,
    pub meteor_rotation_max: u32,
    /// Half-width of the horizontal drift range of a meteor's direction.
    pub meteor_drift: f32,
    pub meteor_spawn_y_min: i32,
    pub meteor_spawn_y_max: i32,
    pub explosion_fps: f32,
    pub star_count: usize,
    pub font_size: f32,
    pub log_filter: String,
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            player_speed: 300.0,
            player_cheat_speed: 600.0,
            laser_cooldown_ms: 400,
            laser_speed: 400.0,
            meteor_spawn_interval_ms: 1000,
            meteor_lifetime_ms: 3000,
            meteor_speed_min: 400,
            meteor_speed_max: 500,
            meteor_rotation_min: 40,
            meteor_rotation_max: 80,
            meteor_drift: 0.5,
            meteor_spawn_y_min: -200,
            meteor_spawn_y_max: -100,
            explosion_fps: 20.0,
            star_count: 20,
            font_size: 40.0,
            log_filter: "wgpu=error,naga=warn,space_shooter=debug".into(),
        }
    }
}

impl Tunables {
    /// Parse and validate. Parsed values that would break spawning are rejected.
    pub fn from_ron_str(src: &str) -> Result<Self, ConfigError> {
        let tunables: Self = ron::from_str(src)?;
        tunables.validate()?;
        Ok(tunables)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        fn range<T: PartialOrd + std::fmt::Display>(
            field: &'static str,
            min: T,
            max: T,
        ) -> Result<(), ConfigError> {
            if min > max {
                return Err(ConfigError::Invalid { field, reason: format!("min {min} > max {max}") });
            }
            Ok(())
        }
        fn positive(field: &'static str, ok: bool) -> Result<(), ConfigError> {
            if !ok {
                return Err(ConfigError::Invalid { field, reason: "must be greater than zero".into() });
            }
            Ok(())
        }

        range("meteor_speed", self.meteor_speed_min, self.meteor_speed_max)?;
        range("meteor_rotation", self.meteor_rotation_min, self.meteor_rotation_max)?;
        range("meteor_spawn_y", self.meteor_spawn_y_min, self.meteor_spawn_y_max)?;
        // Also rejects NaN.
        if !(self.meteor_drift >= 0.0 && self.meteor_drift.is_finite()) {
            return Err(ConfigError::Invalid {
                field: "meteor_drift",
                reason: format!("{} is not a finite non-negative number", self.meteor_drift),
            });
        }
        positive("meteor_spawn_interval_ms", self.meteor_spawn_interval_ms > 0)?;
        positive("meteor_lifetime_ms", self.meteor_lifetime_ms > 0)?;
        positive("explosion_fps", self.explosion_fps > 0.0)?;
        Ok(())
    }

    /// Read overrides from `path`. A missing file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(src) => Self::from_ron_str(&src),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(ConfigError::Read {
                path: path.display().to_string(),
                source,
            }),
        }
    }

    #[inline]
    pub fn laser_cooldown(&self) -> Duration {
        Duration::from_millis(self.laser_cooldown_ms)
    }

    #[inline]
    pub fn meteor_spawn_interval(&self) -> Duration {
        Duration::from_millis(self.meteor_spawn_interval_ms)
    }

    #[inline]
    pub fn meteor_lifetime(&self) -> Duration {
        Duration::from_millis(self.meteor_lifetime_ms)
    }
}
