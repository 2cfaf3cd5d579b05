//! Feature-aware evaluations

use serde::{Serialize, Serializer};

use super::comparison::Comparison;
use super::outcome::OutcomeStatus;
use super::record::{Evaluation, EvaluationSnapshot};
use crate::error::Result;
use crate::space::{Configuration, Features, ObjectiveSpace, ObjectiveType};

/// An evaluation measured under a particular set of features
#[derive(Debug, Clone)]
pub struct FeaturesEvaluation {
    evaluation: Evaluation,
    features: Features,
}

#[derive(Serialize)]
struct FeaturesEvaluationSnapshot<'a> {
    #[serde(flatten)]
    evaluation: EvaluationSnapshot,
    features: &'a Features,
}

impl FeaturesEvaluation {
    /// Successful evaluation under `features`
    pub fn new(
        objective_space: &dyn ObjectiveSpace,
        configuration: Configuration,
        features: Features,
        objective_values: Vec<f64>,
    ) -> Result<Self> {
        let evaluation = Evaluation::new(objective_space, configuration, objective_values)?;
        Ok(Self { evaluation, features })
    }

    /// Failed evaluation under `features`
    pub fn failed(
        objective_space: &dyn ObjectiveSpace,
        configuration: Configuration,
        features: Features,
    ) -> Self {
        Self { evaluation: Evaluation::failed(objective_space, configuration), features }
    }

    /// Attach features to an existing evaluation
    pub fn from_evaluation(evaluation: Evaluation, features: Features) -> Self {
        Self { evaluation, features }
    }

    pub fn evaluation(&self) -> &Evaluation {
        &self.evaluation
    }

    pub fn features(&self) -> &Features {
        &self.features
    }

    pub fn configuration(&self) -> &Configuration {
        self.evaluation.configuration()
    }

    pub fn outcome(&self) -> OutcomeStatus {
        self.evaluation.outcome()
    }

    pub fn objective_values(&self) -> &[f64] {
        self.evaluation.objective_values()
    }

    /// Dominance comparison; evaluations under different features never compare
    pub fn compare_directed(
        &self,
        other: &FeaturesEvaluation,
        directions: &[ObjectiveType],
    ) -> Result<Comparison> {
        if self.features != other.features {
            return Ok(Comparison::NotComparable);
        }
        self.evaluation.compare_directed(&other.evaluation, directions)
    }

    /// Dominance comparison, minimizing every objective
    pub fn compare(&self, other: &FeaturesEvaluation) -> Result<Comparison> {
        self.compare_directed(other, &[])
    }
}

impl Serialize for FeaturesEvaluation {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let snapshot = FeaturesEvaluationSnapshot {
            evaluation: self.evaluation.snapshot(),
            features: &self.features,
        };
        snapshot.serialize(serializer)
    }
}
