//! Capabilities the tuning engine needs from its collaborators

use std::fmt::Debug;

use rand::RngCore;

use super::configuration::Configuration;
use super::objective::ObjectiveType;
use crate::error::Result;

/// A space tuners draw candidate configurations from.
///
/// The engine only ever asks for samples; how values are distributed is up to
/// the implementation.
pub trait ConfigurationSpace: Debug + Send + Sync {
    /// Space name, stamped on every configuration it produces
    fn name(&self) -> &str;

    /// Draw `count` configurations.
    ///
    /// Finite spaces may return fewer than `count`.
    fn samples(&self, rng: &mut dyn RngCore, count: usize) -> Result<Vec<Configuration>>;
}

/// The objective side of a tuning problem.
///
/// Fixes how many objective values every successful evaluation carries, and in
/// which direction each one is optimized.
pub trait ObjectiveSpace: Debug + Send + Sync {
    /// Space name
    fn name(&self) -> &str;

    /// Number of objectives
    fn arity(&self) -> usize;

    /// Optimization direction per objective
    fn objective_types(&self) -> Vec<ObjectiveType> {
        vec![ObjectiveType::Minimize; self.arity()]
    }
}
