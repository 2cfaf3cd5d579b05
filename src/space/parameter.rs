//! Parameter domains and sampled values

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TunerError};

/// Parameter value (sampled from a domain)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ParameterValue {
    Float(f64),
    Int(i64),
    Categorical(String),
}

impl ParameterValue {
    /// Get as float (converts int to float if needed)
    pub fn as_float(&self) -> Option<f64> {
        match self {
            ParameterValue::Float(v) => Some(*v),
            ParameterValue::Int(v) => Some(*v as f64),
            ParameterValue::Categorical(_) => None,
        }
    }

    /// Get as int
    pub fn as_int(&self) -> Option<i64> {
        match self {
            ParameterValue::Int(v) => Some(*v),
            ParameterValue::Float(v) => Some(*v as i64),
            ParameterValue::Categorical(_) => None,
        }
    }

    /// Get as string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ParameterValue::Categorical(s) => Some(s),
            _ => None,
        }
    }
}

/// Parameter domain
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ParameterDomain {
    /// Continuous range [low, high], optionally log-scaled
    Continuous {
        low: f64,
        high: f64,
        #[serde(default)]
        log_scale: bool,
    },
    /// Discrete integer range [low, high]
    Discrete { low: i64, high: i64 },
    /// Categorical choices
    Categorical { choices: Vec<String> },
}

impl ParameterDomain {
    /// Uniform continuous range
    pub fn continuous(low: f64, high: f64) -> Self {
        ParameterDomain::Continuous { low, high, log_scale: false }
    }

    /// Check that the domain can be sampled
    pub fn check(&self, name: &str) -> Result<()> {
        let problem = match self {
            ParameterDomain::Continuous { low, high, log_scale } => {
                if !low.is_finite() || !high.is_finite() {
                    Some(format!("bounds of '{name}' must be finite"))
                } else if low > high {
                    Some(format!("'{name}' has low {low} above high {high}"))
                } else if *log_scale && *low <= 0.0 {
                    Some(format!("log-scaled '{name}' needs a positive lower bound"))
                } else {
                    None
                }
            }
            ParameterDomain::Discrete { low, high } if low > high => {
                Some(format!("'{name}' has low {low} above high {high}"))
            }
            ParameterDomain::Discrete { .. } => None,
            ParameterDomain::Categorical { choices } if choices.is_empty() => {
                Some(format!("categorical '{name}' has no choices"))
            }
            ParameterDomain::Categorical { .. } => None,
        };
        match problem {
            Some(msg) => Err(TunerError::InvalidValue(msg)),
            None => Ok(()),
        }
    }

    /// Sample a random value from this domain
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> ParameterValue {
        match self {
            ParameterDomain::Continuous { low, high, log_scale } => {
                let value = if *log_scale {
                    let log_low = low.ln();
                    let log_high = high.ln();
                    let log_val = log_low + rng.random::<f64>() * (log_high - log_low);
                    log_val.exp().clamp(*low, *high)
                } else {
                    low + rng.random::<f64>() * (high - low)
                };
                ParameterValue::Float(value)
            }
            ParameterDomain::Discrete { low, high } => {
                ParameterValue::Int(rng.random_range(*low..=*high))
            }
            ParameterDomain::Categorical { choices } => {
                let idx = rng.random_range(0..choices.len());
                ParameterValue::Categorical(choices[idx].clone())
            }
        }
    }

    /// Check if a value is valid for this domain
    pub fn is_valid(&self, value: &ParameterValue) -> bool {
        match (self, value) {
            (ParameterDomain::Continuous { low, high, .. }, ParameterValue::Float(v)) => {
                *v >= *low && *v <= *high
            }
            (ParameterDomain::Discrete { low, high }, ParameterValue::Int(v)) => {
                *v >= *low && *v <= *high
            }
            (ParameterDomain::Categorical { choices }, ParameterValue::Categorical(s)) => {
                choices.contains(s)
            }
            _ => false,
        }
    }
}
