//! Declarative tuner configuration
//!
//! Tuners and whole tuning problems can be described in YAML, validated, and
//! turned into ready-to-use [`Tuner`](crate::tuner::Tuner) instances.

mod problem;
mod tuner_config;


pub use problem::TuningProblem;
pub use tuner_config::{StrategyConfig, TunerConfig};
