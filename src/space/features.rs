//! Features: the context an evaluation was measured under

use serde::{Deserialize, Serialize};

use super::parameter::ParameterValue;

/// Context values (input size, hardware flag, ...) attached to feature-aware evaluations.
///
/// Evaluations measured under different features never dominate each other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Features {
    space: String,
    values: Vec<ParameterValue>,
}

impl Features {
    pub fn new(space: impl Into<String>, values: Vec<ParameterValue>) -> Self {
        Self { space: space.into(), values }
    }

    /// Name of the features space these values belong to
    pub fn space_name(&self) -> &str {
        &self.space
    }

    pub fn values(&self) -> &[ParameterValue] {
        &self.values
    }
}
