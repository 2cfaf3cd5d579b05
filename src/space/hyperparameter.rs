//! Hyperparameter configuration space

use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};

use super::configuration::Configuration;
use super::parameter::{ParameterDomain, ParameterValue};
use super::traits::ConfigurationSpace;
use crate::error::{Result, TunerError};

/// Ordered set of named parameter domains, sampled uniformly
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HyperparameterSpace {
    name: String,
    /// Parameter name -> domain, in declaration order
    params: Vec<(String, ParameterDomain)>,
}

impl HyperparameterSpace {
    /// Create an empty space
    pub fn new(name: &str) -> Self {
        Self { name: name.to_string(), params: Vec::new() }
    }

    /// Space name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Add a parameter, replacing any existing domain with the same name
    pub fn add(&mut self, name: &str, domain: ParameterDomain) -> Result<()> {
        domain.check(name)?;
        match self.params.iter_mut().find(|(n, _)| n == name) {
            Some((_, existing)) => *existing = domain,
            None => self.params.push((name.to_string(), domain)),
        }
        Ok(())
    }

    /// Get a parameter domain
    pub fn get(&self, name: &str) -> Option<&ParameterDomain> {
        self.params.iter().find(|(n, _)| n == name).map(|(_, d)| d)
    }

    /// Check if space is empty
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Get number of parameters
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Iterate over parameters in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &ParameterDomain)> {
        self.params.iter().map(|(n, d)| (n, d))
    }

    /// Check every domain; a deserialized space has skipped [`Self::add`]
    pub fn check(&self) -> Result<()> {
        self.params.iter().try_for_each(|(name, domain)| domain.check(name))
    }

    /// Sample one random configuration
    pub fn sample_random<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Configuration> {
        if self.params.is_empty() {
            return Err(TunerError::EmptySpace);
        }
        self.check()?;
        let values =
            self.params.iter().map(|(name, domain)| (name.clone(), domain.sample(rng))).collect();
        Ok(Configuration::new(self.name.clone(), values))
    }

    /// Build a configuration from explicit values, in declaration order
    pub fn configuration(&self, values: Vec<ParameterValue>) -> Result<Configuration> {
        if values.len() != self.params.len() {
            return Err(TunerError::InvalidValue(format!(
                "space '{}' has {} parameters, got {} values",
                self.name,
                self.params.len(),
                values.len()
            )));
        }
        let values = self.params.iter().map(|(n, _)| n.clone()).zip(values).collect();
        let config = Configuration::new(self.name.clone(), values);
        self.validate(&config)?;
        Ok(config)
    }

    /// Validate a configuration against this space
    pub fn validate(&self, config: &Configuration) -> Result<()> {
        if config.space_name() != self.name {
            return Err(TunerError::InvalidValue(format!(
                "configuration from space '{}' used with space '{}'",
                config.space_name(),
                self.name
            )));
        }
        for (name, domain) in &self.params {
            match config.get(name) {
                Some(value) if domain.is_valid(value) => {}
                Some(value) => {
                    return Err(TunerError::InvalidValue(format!("{name} = {value:?}")))
                }
                None => return Err(TunerError::ParameterNotFound(name.clone())),
            }
        }
        Ok(())
    }
}

impl ConfigurationSpace for HyperparameterSpace {
    fn name(&self) -> &str {
        HyperparameterSpace::name(self)
    }

    fn samples(&self, rng: &mut dyn RngCore, count: usize) -> Result<Vec<Configuration>> {
        (0..count).map(|_| self.sample_random(&mut *rng)).collect()
    }
}
