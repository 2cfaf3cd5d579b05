//! A complete tuning problem: spaces plus tuner settings

use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::tuner_config::TunerConfig;
use crate::error::{Result, TunerError};
use crate::space::{HyperparameterSpace, ObjectiveSpace, Objectives};
use crate::tuner::Tuner;

/// Configuration space, objectives and tuner described in one document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TuningProblem {
    pub space: HyperparameterSpace,
    pub objectives: Objectives,
    pub tuner: TunerConfig,
}

impl TuningProblem {
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let problem: Self = serde_yaml::from_str(yaml)
            .map_err(|e| TunerError::Config(format!("failed to parse tuning problem: {e}")))?;
        problem.validate()?;
        Ok(problem)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let yaml = fs::read_to_string(path).map_err(|e| TunerError::io(path, e))?;
        Self::from_yaml_str(&yaml)
    }

    /// Check the tuner settings and every parameter domain.
    ///
    /// Deserialization bypasses the checks [`HyperparameterSpace::add`] runs.
    pub fn validate(&self) -> Result<()> {
        self.tuner.validate()?;
        if self.space.is_empty() {
            return Err(TunerError::Config(format!(
                "configuration space '{}' has no parameters",
                self.space.name()
            )));
        }
        self.space.check().map_err(|e| TunerError::Config(e.to_string()))?;
        for (i, objective) in self.objectives.iter().enumerate() {
            if self.objectives.index_of(&objective.name) != Some(i) {
                return Err(TunerError::Config(format!("duplicate objective '{}'", objective.name)));
            }
        }
        if self.objectives.arity() == 0 {
            return Err(TunerError::Config(format!(
                "objective space '{}' has no objectives",
                ObjectiveSpace::name(&self.objectives)
            )));
        }
        Ok(())
    }

    /// Build the described tuner
    pub fn build(&self) -> Result<Box<dyn Tuner>> {
        self.validate()?;
        self.tuner.build(self.space.clone(), Arc::new(self.objectives.clone()))
    }
}
