//! Tuner protocol and strategies
//!
//! Every strategy speaks the same five-operation protocol:
//!
//! - `ask` proposes configurations to evaluate
//! - `tell` reports evaluations back
//! - `history` returns every evaluation told so far
//! - `optimums` returns the current non-dominated set
//! - `suggest` returns one currently-best configuration
//!
//! [`RandomTuner`] and [`GridTuner`] maintain a [`ParetoFront`](crate::front::ParetoFront)
//! themselves. [`UserDefinedTuner`] delegates every operation to caller
//! closures.

mod features;
mod grid;
mod random;
mod state;
mod user_defined;


use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::evaluation::Evaluation;
use crate::space::{Configuration, ConfigurationSpace, ObjectiveSpace};

pub use features::{FeaturesTuner, RandomFeaturesTuner};
pub use grid::GridTuner;
pub use random::RandomTuner;
pub use user_defined::{
    AskFn, HistoryFn, OptimumsFn, SuggestFn, TellFn, UserDefinedTuner, UserDefinedTunerBuilder,
};

/// Strategy family of a tuner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TunerKind {
    Random,
    Grid,
    UserDefined,
}

impl fmt::Display for TunerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TunerKind::Random => write!(f, "random"),
            TunerKind::Grid => write!(f, "grid"),
            TunerKind::UserDefined => write!(f, "user_defined"),
        }
    }
}

/// Name and spaces a tuner is bound to.
///
/// Handed to user-defined strategy closures on every call.
#[derive(Debug, Clone)]
pub struct TunerContext {
    name: String,
    configuration_space: Arc<dyn ConfigurationSpace>,
    objective_space: Arc<dyn ObjectiveSpace>,
}

impl TunerContext {
    pub fn new(
        name: &str,
        configuration_space: Arc<dyn ConfigurationSpace>,
        objective_space: Arc<dyn ObjectiveSpace>,
    ) -> Self {
        Self { name: name.to_string(), configuration_space, objective_space }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn configuration_space(&self) -> &Arc<dyn ConfigurationSpace> {
        &self.configuration_space
    }

    pub fn objective_space(&self) -> &Arc<dyn ObjectiveSpace> {
        &self.objective_space
    }
}

/// Configurations returned by `ask`
#[derive(Debug, Clone, PartialEq)]
pub struct Asked {
    pub configurations: Vec<Configuration>,
    /// Count the caller asked for (or the strategy default)
    pub requested: usize,
}

impl Asked {
    /// Number of configurations actually produced
    pub fn produced(&self) -> usize {
        self.configurations.len()
    }

    /// True when a finite space could not fill the request
    pub fn is_exhausted(&self) -> bool {
        self.produced() < self.requested
    }
}

/// The tuning protocol.
///
/// `tell` either records every evaluation or none of them. `history` and
/// `optimums` return snapshots that later calls never modify.
pub trait Tuner: Send {
    /// Name and bound spaces
    fn context(&self) -> &TunerContext;

    fn kind(&self) -> TunerKind;

    fn name(&self) -> &str {
        self.context().name()
    }

    fn configuration_space(&self) -> &Arc<dyn ConfigurationSpace> {
        self.context().configuration_space()
    }

    fn objective_space(&self) -> &Arc<dyn ObjectiveSpace> {
        self.context().objective_space()
    }

    /// Propose up to `count` configurations, or the strategy default with `None`
    fn ask(&mut self, count: Option<usize>) -> Result<Asked>;

    /// Report evaluated configurations
    fn tell(&mut self, evaluations: &[Evaluation]) -> Result<()>;

    /// Every evaluation told so far, in order
    fn history(&self) -> Result<Vec<Evaluation>>;

    /// Current non-dominated evaluations
    fn optimums(&self) -> Result<Vec<Evaluation>>;

    /// One currently-best configuration
    fn suggest(&mut self) -> Result<Configuration>;
}

impl fmt::Debug for dyn Tuner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tuner").field("name", &self.name()).field("kind", &self.kind()).finish()
    }
}
