//! Multi-objective auto-tuning engine
//!
//! Drives black-box optimization over a configuration space: a tuner proposes
//! configurations (`ask`), the caller evaluates them and reports the results
//! (`tell`), and the tuner keeps the set of non-dominated evaluations seen so
//! far (`optimums`).
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use autotune::space::{HyperparameterSpace, Objectives, ParameterDomain};
//! use autotune::tuner::{RandomTuner, Tuner};
//! use autotune::Evaluation;
//!
//! let mut space = HyperparameterSpace::new("cspace");
//! for name in ["x", "y", "z"] {
//!     space.add(name, ParameterDomain::continuous(-5.0, 5.0))?;
//! }
//! let objectives = Arc::new(Objectives::new("ospace").minimize("v1")?.minimize("v2")?);
//! let mut tuner = RandomTuner::new("problem", Arc::new(space), objectives.clone())?.with_seed(1);
//!
//! for _ in 0..10 {
//!     let asked = tuner.ask(Some(10))?;
//!     let mut evaluations = Vec::new();
//!     for config in asked.configurations {
//!         let v = config.as_floats().unwrap_or_default();
//!         let values = vec![(v[0] - 2.0).powi(2), (v[2] + v[1]).sin()];
//!         evaluations.push(Evaluation::new(objectives.as_ref(), config, values)?);
//!     }
//!     tuner.tell(&evaluations)?;
//! }
//!
//! assert_eq!(tuner.history()?.len(), 100);
//! let best = tuner.suggest()?;
//! assert!(tuner.optimums()?.iter().any(|e| e.configuration() == &best));
//! # Ok::<(), autotune::TunerError>(())
//! ```
//!
//! # Modules
//!
//! - [`space`]: configuration, objective and features spaces
//! - [`evaluation`]: evaluation records and dominance comparison
//! - [`front`]: incremental Pareto front
//! - [`tuner`]: the tuning protocol and its strategies
//! - [`config`]: YAML tuner configuration

pub mod config;
pub mod error;
pub mod evaluation;
pub mod front;
pub mod space;
pub mod tuner;

pub use error::{Operation, Result, StrategyError, StrategyResult, TunerError};
pub use evaluation::{
    compare, compare_directed, Comparison, Evaluation, FeaturesEvaluation, OutcomeStatus,
};
pub use front::{EquivalencePolicy, ParetoFront};
pub use space::{Configuration, ConfigurationSpace, Features, ObjectiveSpace, ObjectiveType};
pub use tuner::{Asked, FeaturesTuner, Tuner, TunerKind};
