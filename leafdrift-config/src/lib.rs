//! Configuration loading for the leaf simulation.
//!
//! Settings come from a JSON file; every field has a sensible default so an
//! empty object `{}` is a valid config.

use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    Validation(String),
}

// --- Configuration Sections ---

#[derive(Deserialize, Debug, Clone)]
pub struct SpawnSettings {
    /// How many leaves the runner spawns.
    #[serde(default = "default_count")]
    pub count: u32,
    /// Spawn height above the ground plane.
    #[serde(default = "default_height")]
    pub height: f64,
    /// Horizontal radius leaves are scattered over.
    #[serde(default = "default_radius")]
    pub radius: f64,
    /// Leaf tint, RGB in 0-1.
    #[serde(default = "default_color")]
    pub color: [f32; 3],
}

fn default_count() -> u32 { 64 }
fn default_height() -> f64 { 30.0 }
fn default_radius() -> f64 { 24.0 }
fn default_color() -> [f32; 3] { [0.35, 0.5, 0.25] }

impl Default for SpawnSettings {
    fn default() -> Self {
        SpawnSettings {
            count: default_count(),
            height: default_height(),
            radius: default_radius(),
            color: default_color(),
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct WindSettings {
    /// Baseline wind strength every gust carries at minimum.
    #[serde(default = "default_base_strength")]
    pub base_strength: f64,
    /// Extra strength a gust may add on top of the baseline.
    #[serde(default = "default_gust_strength")]
    pub gust_strength: f64,
}

fn default_base_strength() -> f64 { 0.05 }
fn default_gust_strength() -> f64 { 0.25 }

impl Default for WindSettings {
    fn default() -> Self {
        WindSettings {
            base_strength: default_base_strength(),
            gust_strength: default_gust_strength(),
        }
    }
}

// --- Top-Level Config Struct ---

#[derive(Deserialize, Debug, Clone)]
pub struct Config {
    /// Leaf lifetime in ticks.
    #[serde(default = "default_leaf_lifespan")]
    pub leaf_lifespan: u32,
    /// Render scale of a leaf; also sizes its collision box.
    #[serde(default = "default_leaf_size")]
    pub leaf_size: f32,
    /// Simulation ticks per second for paced runs.
    #[serde(default = "default_tick_rate")]
    pub tick_rate: u32,
    #[serde(default)]
    pub spawn: SpawnSettings,
    #[serde(default)]
    pub wind: WindSettings,
}

fn default_leaf_lifespan() -> u32 { 200 }
fn default_leaf_size() -> f32 { 0.75 }
fn default_tick_rate() -> u32 { 20 }

impl Default for Config {
    fn default() -> Self {
        Config {
            leaf_lifespan: default_leaf_lifespan(),
            leaf_size: default_leaf_size(),
            tick_rate: default_tick_rate(),
            spawn: SpawnSettings::default(),
            wind: WindSettings::default(),
        }
    }
}

// --- Loading Function ---

pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: Config = serde_json::from_str(&content)?;
    validate(&config)?;
    Ok(config)
}

fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.leaf_lifespan == 0 {
        return Err(ConfigError::Validation(
            "leaf_lifespan must be at least 1 tick".to_string(),
        ));
    }
    if config.leaf_size <= 0.0 {
        return Err(ConfigError::Validation(
            "leaf_size must be positive".to_string(),
        ));
    }
    if config.tick_rate == 0 {
        return Err(ConfigError::Validation(
            "tick_rate cannot be zero".to_string(),
        ));
    }
    if config.spawn.radius < 0.0 || config.spawn.height < 0.0 {
        return Err(ConfigError::Validation(
            "spawn.radius and spawn.height must not be negative".to_string(),
        ));
    }
    if config.wind.base_strength < 0.0 || config.wind.gust_strength < 0.0 {
        return Err(ConfigError::Validation(
            "wind strengths must not be negative".to_string(),
        ));
    }
    Ok(())
}
