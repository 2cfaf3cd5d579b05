//! Multi-objective dominance comparison

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TunerError};
use crate::space::ObjectiveType;

/// Outcome of comparing two objective vectors under dominance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Comparison {
    /// First is no worse everywhere and strictly better somewhere
    Better,
    /// Equal on every objective
    Equivalent,
    /// First is no better anywhere and strictly worse somewhere
    Worse,
    /// Each side wins on at least one objective
    NotComparable,
}

impl Comparison {
    /// Result of the comparison with the operands swapped
    pub fn reverse(self) -> Self {
        match self {
            Comparison::Better => Comparison::Worse,
            Comparison::Worse => Comparison::Better,
            other => other,
        }
    }

    /// True if the first operand dominates the second
    pub fn dominates(self) -> bool {
        self == Comparison::Better
    }
}

fn check_dimensions(a: &[f64], b: &[f64]) -> Result<()> {
    if a.is_empty() != b.is_empty() {
        return Err(TunerError::InvalidEvaluation(
            "cannot compare against an evaluation without objective values".to_string(),
        ));
    }
    if a.len() != b.len() {
        return Err(TunerError::DimensionMismatch { expected: a.len(), actual: b.len() });
    }
    Ok(())
}

/// Compare two objective vectors, minimizing every objective.
///
/// ```
/// use autotune::{compare, Comparison};
///
/// assert_eq!(compare(&[1.0, 2.0], &[1.0, 3.0]).unwrap(), Comparison::Better);
/// assert_eq!(compare(&[1.0, 4.0], &[2.0, 3.0]).unwrap(), Comparison::NotComparable);
/// ```
pub fn compare(a: &[f64], b: &[f64]) -> Result<Comparison> {
    compare_directed(a, b, &[])
}

/// Compare two objective vectors with a direction per objective.
///
/// An empty `directions` slice minimizes everything. A NaN at any position
/// leaves the pair unordered.
pub fn compare_directed(a: &[f64], b: &[f64], directions: &[ObjectiveType]) -> Result<Comparison> {
    check_dimensions(a, b)?;
    if !directions.is_empty() && directions.len() != a.len() {
        return Err(TunerError::DimensionMismatch { expected: directions.len(), actual: a.len() });
    }

    let mut result = Comparison::Equivalent;
    for (i, (x, y)) in a.iter().zip(b).enumerate() {
        let Some(ordering) = x.partial_cmp(y) else {
            return Ok(Comparison::NotComparable);
        };
        let ordering = match directions.get(i) {
            Some(ObjectiveType::Maximize) => ordering.reverse(),
            _ => ordering,
        };
        let step = match ordering {
            Ordering::Less => Comparison::Better,
            Ordering::Greater => Comparison::Worse,
            Ordering::Equal => continue,
        };
        if result == Comparison::Equivalent {
            result = step;
        } else if result != step {
            return Ok(Comparison::NotComparable);
        }
    }
    Ok(result)
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::collection::vec;
    use proptest::prelude::*;

    fn vector_pair() -> impl Strategy<Value = (Vec<f64>, Vec<f64>)> {
        (1usize..5).prop_flat_map(|n| (vec(-3i32..3, n), vec(-3i32..3, n))).prop_map(|(a, b)| {
            (a.into_iter().map(f64::from).collect(), b.into_iter().map(f64::from).collect())
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn prop_compare_antisymmetric((a, b) in vector_pair()) {
            let forward = compare(&a, &b).unwrap();
            let backward = compare(&b, &a).unwrap();
            prop_assert_eq!(forward, backward.reverse());
        }

        #[test]
        fn prop_compare_reflexive(a in vec(-100.0f64..100.0, 1..6)) {
            prop_assert_eq!(compare(&a, &a).unwrap(), Comparison::Equivalent);
        }

        #[test]
        fn prop_maximize_mirrors_negation((a, b) in vector_pair()) {
            let directions = vec![ObjectiveType::Maximize; a.len()];
            let negated_a: Vec<f64> = a.iter().map(|v| -v).collect();
            let negated_b: Vec<f64> = b.iter().map(|v| -v).collect();
            prop_assert_eq!(
                compare_directed(&a, &b, &directions).unwrap(),
                compare(&negated_a, &negated_b).unwrap()
            );
        }
    }
}
