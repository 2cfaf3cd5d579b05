//! Non-dominated front maintenance
//!
//! [`ParetoFront`] holds the evaluations no other observed evaluation
//! dominates. It is generic over [`FrontMember`] so plain evaluations and
//! feature-aware evaluations share one insertion algorithm.

mod member;
mod tracker;

#[cfg(test)]
mod tests;

pub use member::FrontMember;
pub use tracker::{EquivalencePolicy, Insertion, ParetoFront};
