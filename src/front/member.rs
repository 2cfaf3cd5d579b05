//! Items a Pareto front can hold

use crate::error::Result;
use crate::evaluation::{Comparison, Evaluation, FeaturesEvaluation};
use crate::space::ObjectiveType;

/// An evaluation-like record that can be ranked by dominance
pub trait FrontMember: Clone {
    /// Underlying evaluation record
    fn evaluation(&self) -> &Evaluation;

    /// Dominance of `self` over `other` under the given directions
    fn dominance(&self, other: &Self, directions: &[ObjectiveType]) -> Result<Comparison>;

    /// True if both are the same record, which the front never holds twice
    fn same_record(&self, other: &Self) -> bool {
        self.evaluation().ptr_eq(other.evaluation())
    }
}

impl FrontMember for Evaluation {
    fn evaluation(&self) -> &Evaluation {
        self
    }

    fn dominance(&self, other: &Self, directions: &[ObjectiveType]) -> Result<Comparison> {
        self.compare_directed(other, directions)
    }
}

impl FrontMember for FeaturesEvaluation {
    fn evaluation(&self) -> &Evaluation {
        FeaturesEvaluation::evaluation(self)
    }

    fn dominance(&self, other: &Self, directions: &[ObjectiveType]) -> Result<Comparison> {
        self.compare_directed(other, directions)
    }

    fn same_record(&self, other: &Self) -> bool {
        self.evaluation().ptr_eq(other.evaluation()) && self.features() == other.features()
    }
}
