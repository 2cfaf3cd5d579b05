//! Evaluation outcome status

use serde::{Deserialize, Serialize};

/// Whether evaluating a configuration succeeded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeStatus {
    /// Result not known yet (asynchronous evaluation still running)
    Pending,
    /// Objective values were measured
    Success,
    /// Evaluation failed; objective values are meaningless
    Failed,
}

impl OutcomeStatus {
    pub fn is_success(self) -> bool {
        self == OutcomeStatus::Success
    }
}
