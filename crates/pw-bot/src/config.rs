//! Bot tuning, loaded from YAML.

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::startup::DEFAULT_CLUSTER_RADIUS;
use crate::strategy::{
    DEFAULT_DEFENSE_BASE_WEIGHT, DEFAULT_OFFENSE_BASE_WEIGHT, DEFAULT_OVERKILL_MARGIN,
};

/// Weights and limits baked into the behavior tree when it is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BotConfig {
    /// Added to every defense score. Lower than the offense weight puts
    /// defense first.
    #[serde(default = "default_defense_base_weight")]
    pub defense_base_weight: f64,

    /// Added to every offense score.
    #[serde(default = "default_offense_base_weight")]
    pub offense_base_weight: f64,

    /// Extra ships sent against enemy planets.
    #[serde(default = "default_overkill_margin")]
    pub overkill_margin: u32,

    /// Neighbourhood radius (turns) for the clustering distance.
    #[serde(default = "default_cluster_radius")]
    pub cluster_radius: f64,

    /// Wall-clock budget of one turn.
    #[serde(default = "default_turn_budget_seconds")]
    pub turn_budget_seconds: f64,

    /// Remaining-budget fraction bound to `check_time_remaining` leaves.
    #[serde(default = "default_time_check_fraction")]
    pub time_check_fraction: f64,
}

fn default_defense_base_weight() -> f64 {
    DEFAULT_DEFENSE_BASE_WEIGHT
}
fn default_offense_base_weight() -> f64 {
    DEFAULT_OFFENSE_BASE_WEIGHT
}
fn default_overkill_margin() -> u32 {
    DEFAULT_OVERKILL_MARGIN as u32
}
fn default_cluster_radius() -> f64 {
    DEFAULT_CLUSTER_RADIUS
}
fn default_turn_budget_seconds() -> f64 {
    1.0
}
fn default_time_check_fraction() -> f64 {
    0.9
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            defense_base_weight: default_defense_base_weight(),
            offense_base_weight: default_offense_base_weight(),
            overkill_margin: default_overkill_margin(),
            cluster_radius: default_cluster_radius(),
            turn_budget_seconds: default_turn_budget_seconds(),
            time_check_fraction: default_time_check_fraction(),
        }
    }
}

impl BotConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let config: Self = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;
        Ok(config)
    }

    /// Load `path` if given, otherwise fall back to defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Zero for negative or non-finite budgets.
    pub fn turn_budget(&self) -> Duration {
        Duration::try_from_secs_f64(self.turn_budget_seconds).unwrap_or(Duration::ZERO)
    }
}
