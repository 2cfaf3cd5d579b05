//! Evaluation records

use std::sync::{Arc, OnceLock};

use serde::{Serialize, Serializer};

use super::comparison::{compare, compare_directed, Comparison};
use super::outcome::OutcomeStatus;
use crate::error::{Result, TunerError};
use crate::space::{Configuration, ObjectiveSpace, ObjectiveType};

#[derive(Debug)]
struct EvaluationData {
    configuration: Configuration,
    /// Objective arity the evaluation was built against
    arity: usize,
    status: OutcomeStatus,
    /// Deferred outcome, written at most once
    deferred: OnceLock<OutcomeStatus>,
    objective_values: Vec<f64>,
}

/// A configuration's outcome plus its objective values.
///
/// Cloning is cheap and yields a handle to the same record, so a tuner's
/// history and optimum set share evaluations. Everything is immutable except
/// the outcome, which may be recorded once after construction.
#[derive(Debug, Clone)]
pub struct Evaluation {
    data: Arc<EvaluationData>,
}

/// Owned copy of an evaluation's fields, used for serialization
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationSnapshot {
    pub configuration: Configuration,
    pub outcome: OutcomeStatus,
    pub objective_values: Vec<f64>,
}

impl Evaluation {
    /// Successful evaluation carrying one value per objective
    pub fn new(
        objective_space: &dyn ObjectiveSpace,
        configuration: Configuration,
        objective_values: Vec<f64>,
    ) -> Result<Self> {
        Self::with_outcome(objective_space, configuration, OutcomeStatus::Success, objective_values)
    }

    /// Failed evaluation without objective values
    pub fn failed(objective_space: &dyn ObjectiveSpace, configuration: Configuration) -> Self {
        Self::build(objective_space.arity(), configuration, OutcomeStatus::Failed, Vec::new())
    }

    /// Evaluation with an explicit outcome.
    ///
    /// Values must be empty or match the objective arity; a successful outcome
    /// requires them when the space has objectives.
    pub fn with_outcome(
        objective_space: &dyn ObjectiveSpace,
        configuration: Configuration,
        outcome: OutcomeStatus,
        objective_values: Vec<f64>,
    ) -> Result<Self> {
        let arity = objective_space.arity();
        if objective_values.is_empty() {
            if outcome.is_success() && arity > 0 {
                return Err(TunerError::InvalidValue(format!(
                    "successful evaluation needs {arity} objective values, got none"
                )));
            }
        } else if objective_values.len() != arity {
            return Err(TunerError::InvalidValue(format!(
                "objective space '{}' has {arity} objectives, got {} values",
                objective_space.name(),
                objective_values.len()
            )));
        }
        Ok(Self::build(arity, configuration, outcome, objective_values))
    }

    fn build(
        arity: usize,
        configuration: Configuration,
        status: OutcomeStatus,
        objective_values: Vec<f64>,
    ) -> Self {
        let data = EvaluationData {
            configuration,
            arity,
            status,
            deferred: OnceLock::new(),
            objective_values,
        };
        Self { data: Arc::new(data) }
    }

    pub fn configuration(&self) -> &Configuration {
        &self.data.configuration
    }

    /// Current outcome, including a deferred write if one happened
    pub fn outcome(&self) -> OutcomeStatus {
        self.data.deferred.get().copied().unwrap_or(self.data.status)
    }

    pub fn is_success(&self) -> bool {
        self.outcome().is_success()
    }

    /// Record the outcome of a pending evaluation.
    ///
    /// Visible through every handle to this evaluation. Only evaluations built
    /// as [`OutcomeStatus::Pending`] accept a write, and only one; any other
    /// write fails and leaves the outcome as it was.
    pub fn set_outcome(&self, outcome: OutcomeStatus) -> Result<()> {
        if self.data.status != OutcomeStatus::Pending {
            return Err(TunerError::InvalidValue(format!(
                "outcome of a {:?} evaluation is final",
                self.data.status
            )));
        }
        if outcome.is_success() && self.data.objective_values.is_empty() && self.data.arity > 0 {
            return Err(TunerError::InvalidValue(
                "cannot mark an evaluation without objective values as successful".to_string(),
            ));
        }
        self.data.deferred.set(outcome).map_err(|_| {
            TunerError::InvalidValue("evaluation outcome was already recorded".to_string())
        })
    }

    pub fn objective_values(&self) -> &[f64] {
        &self.data.objective_values
    }

    /// Objective value at `index`
    pub fn objective_value(&self, index: usize) -> Result<f64> {
        self.data.objective_values.get(index).copied().ok_or_else(|| {
            TunerError::InvalidValue(format!(
                "objective index {index} out of range for {} values",
                self.data.objective_values.len()
            ))
        })
    }

    /// Check this evaluation against an objective space
    pub fn check(&self, objective_space: &dyn ObjectiveSpace) -> Result<()> {
        let arity = objective_space.arity();
        let count = self.data.objective_values.len();
        if count != arity && !(count == 0 && !self.is_success()) {
            return Err(TunerError::InvalidEvaluation(format!(
                "{count} objective values for objective space '{}' of arity {arity}",
                objective_space.name()
            )));
        }
        Ok(())
    }

    /// Dominance comparison, minimizing every objective
    pub fn compare(&self, other: &Evaluation) -> Result<Comparison> {
        if self.ptr_eq(other) {
            return Ok(Comparison::Equivalent);
        }
        compare(self.objective_values(), other.objective_values())
    }

    /// Dominance comparison with per-objective directions
    pub fn compare_directed(
        &self,
        other: &Evaluation,
        directions: &[ObjectiveType],
    ) -> Result<Comparison> {
        if self.ptr_eq(other) {
            return Ok(Comparison::Equivalent);
        }
        compare_directed(self.objective_values(), other.objective_values(), directions)
    }

    /// True if both handles point at the same record
    pub fn ptr_eq(&self, other: &Evaluation) -> bool {
        Arc::ptr_eq(&self.data, &other.data)
    }

    pub fn snapshot(&self) -> EvaluationSnapshot {
        EvaluationSnapshot {
            configuration: self.data.configuration.clone(),
            outcome: self.outcome(),
            objective_values: self.data.objective_values.clone(),
        }
    }
}

impl Serialize for Evaluation {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.snapshot().serialize(serializer)
    }
}
