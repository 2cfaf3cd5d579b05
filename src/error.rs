//! Tuning engine error types

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Error raised by a user-supplied strategy callable.
pub type StrategyError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result type for user-supplied strategy callables.
pub type StrategyResult<T> = std::result::Result<T, StrategyError>;

/// Result type for tuning operations
pub type Result<T> = std::result::Result<T, TunerError>;

/// Tuner protocol operation, attached to strategy failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Ask,
    Tell,
    History,
    Optimums,
    Suggest,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Ask => "ask",
            Operation::Tell => "tell",
            Operation::History => "history",
            Operation::Optimums => "optimums",
            Operation::Suggest => "suggest",
        };
        f.write_str(name)
    }
}

/// Tuning engine errors
#[derive(Debug, Error)]
pub enum TunerError {
    /// Structurally invalid argument (constructor input, repeated outcome write, ...)
    #[error("Invalid value: {0}")]
    InvalidValue(String),

    /// Objective vectors of unequal length
    #[error("Objective dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Evaluation failed a structural check
    #[error("Invalid evaluation: {0}")]
    InvalidEvaluation(String),

    /// A user-supplied strategy callable failed
    #[error("Strategy failed during {operation}: {source}")]
    StrategyFailure {
        operation: Operation,
        #[source]
        source: StrategyError,
    },

    /// Configuration space has no parameters to sample
    #[error("Empty configuration space")]
    EmptySpace,

    /// Finite configuration space has handed out every configuration
    #[error("Configuration space exhausted after {0} configurations")]
    SpaceExhausted(usize),

    /// Parameter missing from a configuration
    #[error("Parameter not found: {0}")]
    ParameterNotFound(String),

    /// Tuner configuration file or value is invalid
    #[error("Invalid tuner configuration: {0}")]
    Config(String),

    /// IO error with context
    #[error("IO error reading {path}\n  Cause: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl TunerError {
    /// Wrap a strategy callable failure, keeping the original error as source.
    pub fn strategy(operation: Operation, source: StrategyError) -> Self {
        Self::StrategyFailure { operation, source }
    }

    /// Create an IO error for `path`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }

    /// Operation that failed, for strategy failures.
    pub fn operation(&self) -> Option<Operation> {
        match self {
            Self::StrategyFailure { operation, .. } => Some(*operation),
            _ => None,
        }
    }

    /// Check if this error was caused by caller input rather than the engine or a strategy.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidValue(_)
                | Self::DimensionMismatch { .. }
                | Self::InvalidEvaluation(_)
                | Self::ParameterNotFound(_)
                | Self::Config(_)
        )
    }

    /// Stable error code for structured output.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidValue(_) => "E001",
            Self::DimensionMismatch { .. } => "E002",
            Self::InvalidEvaluation(_) => "E003",
            Self::StrategyFailure { .. } => "E010",
            Self::EmptySpace => "E020",
            Self::SpaceExhausted(_) => "E021",
            Self::ParameterNotFound(_) => "E022",
            Self::Config(_) => "E030",
            Self::Io { .. } => "E050",
        }
    }
}
