//! Tunables loaded from `assets/config/game.ron`. Every section falls back to
//! its defaults, so the file only has to mention what it changes.

use crate::kitchen::progress::{DEFAULT_INCREMENT, DEFAULT_TICK_INTERVAL, ProgressTimer};
use bevy::prelude::*;
use serde::Deserialize;
use std::{fs, path::Path, time::Duration};
use thiserror::Error;

pub const CONFIG_PATH: &str = "assets/config/game.ron";

/// Shortest tick interval accepted from the config file.
const MIN_TICK_INTERVAL_SECS: f32 = 0.01;

pub(super) fn plugin(app: &mut App) {
    let config = match GameConfig::load_from_file(CONFIG_PATH) {
        Ok(config) => {
            info!("loaded {CONFIG_PATH}");
            config
        }
        Err(error) => {
            warn!("{error}, using default config");
            GameConfig::default()
        }
    };
    app.insert_resource(config);
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse RON: {0}")]
    Parse(#[from] ron::error::SpannedError),
}

#[derive(Debug, Deserialize, Resource, Clone, PartialEq, Default)]
#[serde(default)]
pub struct GameConfig {
    pub kitchen: KitchenConfig,
    pub players: PlayersConfig,
    pub map: MapConfig,
    pub display: DisplayConfig,
}

impl GameConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let data = fs::read_to_string(path)?;
        Self::parse(&data)
    }

    pub fn parse(data: &str) -> Result<Self, ConfigError> {
        Ok(ron::from_str(data)?)
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct KitchenConfig {
    /// Progress added per tick, a run completes once it reaches 1.
    pub progress_increment: f32,
    pub tick_interval_secs: f32,
    /// Where the progress bar floats relative to a station.
    pub bar_offset: [f32; 3],
}

impl Default for KitchenConfig {
    fn default() -> Self {
        Self {
            progress_increment: DEFAULT_INCREMENT,
            tick_interval_secs: DEFAULT_TICK_INTERVAL.as_secs_f32(),
            bar_offset: [0.0, 1.0, 0.0],
        }
    }
}

impl KitchenConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs_f32(self.tick_interval_secs.max(MIN_TICK_INTERVAL_SECS))
    }

    pub fn timer(&self) -> ProgressTimer {
        ProgressTimer::new(self.progress_increment, self.tick_interval())
    }

    pub fn bar_offset(&self) -> Vec3 {
        Vec3::from_array(self.bar_offset)
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PlayersConfig {
    pub walk_speed: f32,
    /// How close a player has to be to use a station.
    pub interact_reach: f32,
}

impl Default for PlayersConfig {
    fn default() -> Self {
        Self {
            walk_speed: 4.0,
            interact_reach: 1.5,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct MapConfig {
    /// Stars earned so far on each stage, in map order.
    pub stages: Vec<u32>,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            stages: vec![3, 0, 1, 0],
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct DisplayConfig {
    pub max_fps: f64,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { max_fps: 60.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        assert_eq!(GameConfig::parse("()").unwrap(), GameConfig::default());
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = GameConfig::parse(
            "(kitchen: (tick_interval_secs: 0.3), map: (stages: [1, 2]))",
        )
        .unwrap();
        assert_eq!(config.kitchen.tick_interval(), Duration::from_secs_f32(0.3));
        assert_eq!(config.kitchen.progress_increment, DEFAULT_INCREMENT);
        assert_eq!(config.map.stages, vec![1, 2]);
        assert_eq!(config.players, PlayersConfig::default());
    }

    #[test]
    fn tick_interval_has_a_floor() {
        let config = KitchenConfig {
            tick_interval_secs: 0.0,
            ..default()
        };
        assert_eq!(
            config.tick_interval(),
            Duration::from_secs_f32(MIN_TICK_INTERVAL_SECS)
        );
    }

    #[test]
    fn bad_ron_is_an_error() {
        assert!(matches!(
            GameConfig::parse("(kitchen: oops)"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn shipped_config_parses() {
        let shipped = GameConfig::load_from_file(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/assets/config/game.ron"
        ));
        assert!(shipped.is_ok(), "{shipped:?}");
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(matches!(
            GameConfig::load_from_file("does/not/exist.ron"),
            Err(ConfigError::Io(_))
        ));
    }
}
