//! Evaluations and dominance comparison

mod comparison;
mod features;
mod outcome;
mod record;


pub use comparison::{compare, compare_directed, Comparison};
pub use features::FeaturesEvaluation;
pub use outcome::OutcomeStatus;
pub use record::{Evaluation, EvaluationSnapshot};
