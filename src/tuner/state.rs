//! History and front bookkeeping shared by the built-in strategies

use rand::Rng;

use crate::error::{Result, TunerError};
use crate::front::{EquivalencePolicy, FrontMember, ParetoFront};
use crate::space::{Configuration, ObjectiveSpace};

#[derive(Debug, Clone)]
pub(crate) struct BuiltinState<E> {
    history: Vec<E>,
    front: ParetoFront<E>,
}

impl<E: FrontMember> BuiltinState<E> {
    pub(crate) fn new(objective_space: &dyn ObjectiveSpace) -> Result<Self> {
        let directions = objective_space.objective_types();
        if directions.len() != objective_space.arity() {
            return Err(TunerError::InvalidValue(format!(
                "objective space '{}' reports {} directions for {} objectives",
                objective_space.name(),
                directions.len(),
                objective_space.arity()
            )));
        }
        Ok(Self { history: Vec::new(), front: ParetoFront::with_objective_types(directions) })
    }

    pub(crate) fn set_policy(&mut self, policy: EquivalencePolicy) {
        self.front = self.front.clone().with_policy(policy);
    }

    /// Record evaluations; nothing changes unless all of them are accepted.
    ///
    /// Returns how many joined the front.
    pub(crate) fn tell(
        &mut self,
        objective_space: &dyn ObjectiveSpace,
        evaluations: &[E],
    ) -> Result<usize> {
        for e in evaluations {
            e.evaluation().check(objective_space)?;
        }

        let mut front = self.front.clone();
        let mut joined = 0;
        for e in evaluations.iter().filter(|e| e.evaluation().is_success()) {
            if front.insert(e.clone())?.is_inserted() {
                joined += 1;
            }
        }

        self.front = front;
        self.history.extend_from_slice(evaluations);
        Ok(joined)
    }

    pub(crate) fn history(&self) -> &[E] {
        &self.history
    }

    pub(crate) fn front(&self) -> &ParetoFront<E> {
        &self.front
    }

    /// Configuration of a uniformly chosen front member matching `accept`
    pub(crate) fn pick<R, F>(&self, rng: &mut R, accept: F) -> Option<Configuration>
    where
        R: Rng + ?Sized,
        F: Fn(&E) -> bool,
    {
        let candidates: Vec<&E> = self.front.iter().filter(|e| accept(e)).collect();
        if candidates.is_empty() {
            return None;
        }
        let chosen = candidates[rng.random_range(0..candidates.len())];
        Some(chosen.evaluation().configuration().clone())
    }
}

/// Resolve the count for an `ask` call
pub(crate) fn requested_count(count: Option<usize>, default: usize) -> Result<usize> {
    match count.unwrap_or(default) {
        0 => Err(TunerError::InvalidValue("ask count must be at least 1".to_string())),
        n => Ok(n),
    }
}
