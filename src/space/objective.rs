//! Objective space: named objectives and their optimization direction

use serde::{Deserialize, Serialize};

use super::traits::ObjectiveSpace;
use crate::error::{Result, TunerError};

/// Optimization direction of one objective
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectiveType {
    #[default]
    Minimize,
    Maximize,
}

/// A named objective
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Objective {
    pub name: String,
    #[serde(default)]
    pub kind: ObjectiveType,
}

/// Ordered list of objectives
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Objectives {
    name: String,
    objectives: Vec<Objective>,
}

impl Objectives {
    /// Create an objective space with no objectives
    pub fn new(name: &str) -> Self {
        Self { name: name.to_string(), objectives: Vec::new() }
    }

    /// Append an objective; names must be unique
    pub fn add(&mut self, name: &str, kind: ObjectiveType) -> Result<()> {
        if self.index_of(name).is_some() {
            return Err(TunerError::InvalidValue(format!("duplicate objective '{name}'")));
        }
        self.objectives.push(Objective { name: name.to_string(), kind });
        Ok(())
    }

    /// Builder form of [`Objectives::add`] for minimized objectives
    pub fn minimize(mut self, name: &str) -> Result<Self> {
        self.add(name, ObjectiveType::Minimize)?;
        Ok(self)
    }

    /// Builder form of [`Objectives::add`] for maximized objectives
    pub fn maximize(mut self, name: &str) -> Result<Self> {
        self.add(name, ObjectiveType::Maximize)?;
        Ok(self)
    }

    /// Position of a named objective
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.objectives.iter().position(|o| o.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Objective> {
        self.objectives.iter()
    }
}

impl ObjectiveSpace for Objectives {
    fn name(&self) -> &str {
        &self.name
    }

    fn arity(&self) -> usize {
        self.objectives.len()
    }

    fn objective_types(&self) -> Vec<ObjectiveType> {
        self.objectives.iter().map(|o| o.kind).collect()
    }
}
