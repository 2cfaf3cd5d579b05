//! Configurations: value assignments produced by a configuration space

use serde::{Deserialize, Serialize};

use super::parameter::ParameterValue;

/// An assignment of values to a configuration space's parameters.
///
/// Values keep the parameter order of the space that produced them. Two
/// configurations are equal when they come from the same space and carry the
/// same values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    space: String,
    values: Vec<(String, ParameterValue)>,
}

impl Configuration {
    /// Create a configuration tagged with the producing space's name
    pub fn new(space: impl Into<String>, values: Vec<(String, ParameterValue)>) -> Self {
        Self { space: space.into(), values }
    }

    /// Name of the space this configuration was drawn from
    pub fn space_name(&self) -> &str {
        &self.space
    }

    /// Value of a named parameter
    pub fn get(&self, name: &str) -> Option<&ParameterValue> {
        self.values.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    /// Number of parameters
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over `(name, value)` pairs in space order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParameterValue)> {
        self.values.iter().map(|(n, v)| (n.as_str(), v))
    }

    /// Values in space order
    pub fn values(&self) -> impl Iterator<Item = &ParameterValue> {
        self.values.iter().map(|(_, v)| v)
    }

    /// All values as floats, or `None` if any parameter is categorical
    pub fn as_floats(&self) -> Option<Vec<f64>> {
        self.values().map(ParameterValue::as_float).collect()
    }
}
