//! Configuration, objective and features spaces
//!
//! The tuning engine treats these as collaborators: it samples configurations
//! through [`ConfigurationSpace`] and reads objective arity and directions
//! through [`ObjectiveSpace`]. [`HyperparameterSpace`] and [`Objectives`] are
//! the concrete spaces shipped with the crate.

mod configuration;
mod features;
mod grid;
mod hyperparameter;
mod objective;
mod parameter;
mod traits;

#[cfg(test)]
mod tests;

pub use configuration::Configuration;
pub use features::Features;
pub use grid::GridSearch;
pub use hyperparameter::HyperparameterSpace;
pub use objective::{Objective, ObjectiveType, Objectives};
pub use parameter::{ParameterDomain, ParameterValue};
pub use traits::{ConfigurationSpace, ObjectiveSpace};
