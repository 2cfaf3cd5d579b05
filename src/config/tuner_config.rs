//! Built-in tuner configuration

use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, TunerError};
use crate::front::EquivalencePolicy;
use crate::space::{HyperparameterSpace, ObjectiveSpace};
use crate::tuner::{GridTuner, RandomTuner, Tuner};

fn default_ask() -> usize {
    1
}

fn default_points_per_axis() -> usize {
    5
}

/// Search strategy of a built-in tuner
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StrategyConfig {
    /// Uniform sampling
    #[default]
    Random,
    /// Exhaustive grid, continuous axes cut into `points_per_axis` values
    Grid {
        #[serde(default = "default_points_per_axis")]
        points_per_axis: usize,
    },
}

/// Configuration of a built-in tuner
///
/// # Example
///
/// ```
/// use autotune::config::{StrategyConfig, TunerConfig};
///
/// let config = TunerConfig::from_yaml_str(
///     "name: sweep\nstrategy:\n  kind: grid\n  points_per_axis: 4\nseed: 7\n",
/// )?;
/// assert_eq!(config.strategy, StrategyConfig::Grid { points_per_axis: 4 });
/// assert_eq!(config.default_ask, 1);
/// # Ok::<(), autotune::TunerError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TunerConfig {
    pub name: String,
    #[serde(default)]
    pub strategy: StrategyConfig,
    /// Fixed seed for reproducible runs; OS entropy when absent
    #[serde(default)]
    pub seed: Option<u64>,
    /// Configurations produced by `ask(None)`
    #[serde(default = "default_ask")]
    pub default_ask: usize,
    #[serde(default)]
    pub equivalents: EquivalencePolicy,
}

impl TunerConfig {
    /// Random-strategy config with defaults
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            strategy: StrategyConfig::default(),
            seed: None,
            default_ask: default_ask(),
            equivalents: EquivalencePolicy::default(),
        }
    }

    /// Parse and validate a YAML document
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)
            .map_err(|e| TunerError::Config(format!("failed to parse tuner config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Load, parse and validate a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let yaml = fs::read_to_string(path).map_err(|e| TunerError::io(path, e))?;
        debug!(path = %path.display(), "loaded tuner config");
        Self::from_yaml_str(&yaml)
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(TunerError::Config("tuner name must not be empty".to_string()));
        }
        if self.default_ask == 0 {
            return Err(TunerError::Config("default_ask must be at least 1".to_string()));
        }
        if let StrategyConfig::Grid { points_per_axis } = self.strategy {
            if points_per_axis < 2 {
                return Err(TunerError::Config(format!(
                    "points_per_axis must be at least 2, got {points_per_axis}"
                )));
            }
        }
        Ok(())
    }

    /// Build the configured tuner over `space` and `objectives`
    pub fn build(
        &self,
        space: HyperparameterSpace,
        objectives: Arc<dyn ObjectiveSpace>,
    ) -> Result<Box<dyn Tuner>> {
        self.validate()?;
        space.check()?;
        let tuner: Box<dyn Tuner> = match self.strategy {
            StrategyConfig::Random => {
                let mut tuner = RandomTuner::new(&self.name, Arc::new(space), objectives)?
                    .with_equivalence_policy(self.equivalents)
                    .with_default_ask(self.default_ask)?;
                if let Some(seed) = self.seed {
                    tuner = tuner.with_seed(seed);
                }
                Box::new(tuner)
            }
            StrategyConfig::Grid { points_per_axis } => {
                let mut tuner = GridTuner::new(&self.name, space, objectives, points_per_axis)?
                    .with_equivalence_policy(self.equivalents)
                    .with_default_ask(self.default_ask)?;
                if let Some(seed) = self.seed {
                    tuner = tuner.with_seed(seed);
                }
                Box::new(tuner)
            }
        };
        debug!(tuner = %self.name, kind = %tuner.kind(), "built tuner");
        Ok(tuner)
    }
}
