//! Incremental Pareto front

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::trace;

use super::member::FrontMember;
use crate::error::{Result, TunerError};
use crate::evaluation::{Comparison, Evaluation};
use crate::space::ObjectiveType;

/// What to do with a candidate equivalent to a current member
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquivalencePolicy {
    /// Keep the member already on the front, discard the candidate
    #[default]
    KeepExisting,
    /// Keep both
    KeepAll,
}

/// Result of offering an evaluation to the front
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insertion {
    /// Candidate joined the front, replacing `displaced` dominated members
    Inserted { displaced: usize },
    /// Candidate was discarded; the comparison against the member that blocked it
    Rejected(Comparison),
}

impl Insertion {
    pub fn is_inserted(&self) -> bool {
        matches!(self, Insertion::Inserted { .. })
    }
}

/// Set of mutually non-dominated evaluations.
///
/// Each insertion costs one comparison per current member. Member order is
/// insertion order.
#[derive(Debug, Clone)]
pub struct ParetoFront<E = Evaluation> {
    members: Vec<E>,
    directions: Vec<ObjectiveType>,
    policy: EquivalencePolicy,
}

impl<E> Default for ParetoFront<E> {
    fn default() -> Self {
        Self { members: Vec::new(), directions: Vec::new(), policy: EquivalencePolicy::default() }
    }
}

impl<E: FrontMember> ParetoFront<E> {
    /// Empty front minimizing every objective
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty front with a direction per objective
    pub fn with_objective_types(directions: Vec<ObjectiveType>) -> Self {
        Self { directions, ..Self::default() }
    }

    pub fn with_policy(mut self, policy: EquivalencePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> EquivalencePolicy {
        self.policy
    }

    pub fn objective_types(&self) -> &[ObjectiveType] {
        &self.directions
    }

    /// Offer a successful evaluation to the front.
    ///
    /// Discarded if any member dominates it or (under
    /// [`EquivalencePolicy::KeepExisting`]) matches it. Otherwise every member
    /// it dominates is removed and it is appended. Comparison errors leave the
    /// front untouched.
    pub fn insert(&mut self, candidate: E) -> Result<Insertion> {
        if !candidate.evaluation().is_success() {
            return Err(TunerError::InvalidEvaluation(format!(
                "only successful evaluations can join the front, got {:?}",
                candidate.evaluation().outcome()
            )));
        }

        let mut dominated = vec![false; self.members.len()];
        for (i, member) in self.members.iter().enumerate() {
            if member.same_record(&candidate) {
                trace!(size = self.members.len(), "evaluation already on front");
                return Ok(Insertion::Rejected(Comparison::Equivalent));
            }
            match candidate.dominance(member, &self.directions)? {
                Comparison::Worse => {
                    trace!(size = self.members.len(), "dominated evaluation discarded");
                    return Ok(Insertion::Rejected(Comparison::Worse));
                }
                Comparison::Equivalent if self.policy == EquivalencePolicy::KeepExisting => {
                    trace!(size = self.members.len(), "equivalent evaluation discarded");
                    return Ok(Insertion::Rejected(Comparison::Equivalent));
                }
                Comparison::Better => dominated[i] = true,
                Comparison::Equivalent | Comparison::NotComparable => {}
            }
        }

        let mut flags = dominated.iter();
        self.members.retain(|_| !flags.next().copied().unwrap_or(false));
        let displaced = dominated.iter().filter(|d| **d).count();
        self.members.push(candidate);
        trace!(displaced, size = self.members.len(), "evaluation joined front");
        Ok(Insertion::Inserted { displaced })
    }

    /// Current members, in insertion order
    pub fn members(&self) -> &[E] {
        &self.members
    }

    /// Owned copy of the current members
    pub fn snapshot(&self) -> Vec<E> {
        self.members.clone()
    }

    pub fn iter(&self) -> impl Iterator<Item = &E> {
        self.members.iter()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Uniformly chosen member, `None` if the front is empty
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&E> {
        if self.members.is_empty() {
            return None;
        }
        self.members.get(rng.random_range(0..self.members.len()))
    }
}
