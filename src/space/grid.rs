//! Grid enumeration of a hyperparameter space

use super::configuration::Configuration;
use super::hyperparameter::HyperparameterSpace;
use super::parameter::{ParameterDomain, ParameterValue};
use crate::error::{Result, TunerError};

/// Grid generator over a hyperparameter space
#[derive(Debug, Clone)]
pub struct GridSearch {
    space: HyperparameterSpace,
    /// Grid points per continuous parameter
    pub(crate) n_points: usize,
}

/// Generate grid values for a single parameter domain.
fn domain_grid_values(domain: &ParameterDomain, n_points: usize) -> Vec<ParameterValue> {
    match domain {
        ParameterDomain::Continuous { low, high, log_scale } => {
            let divisor = (n_points - 1) as f64;
            if *log_scale {
                let log_low = low.ln();
                let log_high = high.ln();
                (0..n_points)
                    .map(|i| {
                        let t = i as f64 / divisor;
                        let v = (log_low + t * (log_high - log_low)).exp();
                        ParameterValue::Float(v.clamp(*low, *high))
                    })
                    .collect()
            } else {
                (0..n_points)
                    .map(|i| {
                        let t = i as f64 / divisor;
                        ParameterValue::Float(low + t * (high - low))
                    })
                    .collect()
            }
        }
        ParameterDomain::Discrete { low, high } => {
            (*low..=*high).map(ParameterValue::Int).collect()
        }
        ParameterDomain::Categorical { choices } => {
            choices.iter().map(|c| ParameterValue::Categorical(c.clone())).collect()
        }
    }
}

impl GridSearch {
    /// Largest grid that will be materialized
    pub const MAX_POINTS: usize = 1_000_000;

    /// Create new grid search
    pub fn new(space: HyperparameterSpace, n_points: usize) -> Self {
        Self { space, n_points: n_points.max(2) }
    }

    /// Number of grid points, without materializing them.
    ///
    /// Fails on an unsampleable domain or a grid above [`Self::MAX_POINTS`].
    pub fn size(&self) -> Result<usize> {
        self.space.check()?;
        let too_large = || {
            TunerError::InvalidValue(format!(
                "grid over '{}' exceeds {} points",
                self.space.name(),
                Self::MAX_POINTS
            ))
        };
        self.space.iter().try_fold(1usize, |size, (_, domain)| {
            let axis = match domain {
                ParameterDomain::Continuous { .. } => Some(self.n_points),
                ParameterDomain::Discrete { low, high } => high
                    .checked_sub(*low)
                    .and_then(|span| span.checked_add(1))
                    .and_then(|n| usize::try_from(n).ok()),
                ParameterDomain::Categorical { choices } => Some(choices.len()),
            };
            axis.and_then(|n| size.checked_mul(n))
                .filter(|n| *n <= Self::MAX_POINTS)
                .ok_or_else(too_large)
        })
    }

    /// Generate all grid configurations, first parameter varying slowest
    pub fn configurations(&self) -> Result<Vec<Configuration>> {
        if self.space.is_empty() {
            return Err(TunerError::EmptySpace);
        }
        self.size()?;

        let axes: Vec<(String, Vec<ParameterValue>)> = self
            .space
            .iter()
            .map(|(name, domain)| (name.clone(), domain_grid_values(domain, self.n_points)))
            .collect();

        let space_name = self.space.name().to_string();
        let points = Self::cartesian_product(&axes);
        Ok(points
            .into_iter()
            .map(|values| Configuration::new(space_name.clone(), values))
            .collect())
    }

    fn cartesian_product(
        axes: &[(String, Vec<ParameterValue>)],
    ) -> Vec<Vec<(String, ParameterValue)>> {
        let Some(((name, values), rest)) = axes.split_first() else {
            return vec![Vec::new()];
        };
        let rest_points = Self::cartesian_product(rest);

        values
            .iter()
            .flat_map(|v| {
                rest_points.iter().map(move |tail| {
                    let mut point = Vec::with_capacity(tail.len() + 1);
                    point.push((name.clone(), v.clone()));
                    point.extend(tail.iter().cloned());
                    point
                })
            })
            .collect()
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn prop_grid_search_size(n_points in 2usize..10, high in 0i64..6) {
            let mut space = HyperparameterSpace::new("grid");
            space.add("x", ParameterDomain::continuous(0.0, 1.0)).unwrap();
            space.add("k", ParameterDomain::Discrete { low: 0, high }).unwrap();

            let grid = GridSearch::new(space, n_points);
            let configs = grid.configurations().unwrap();
            prop_assert_eq!(configs.len(), n_points * (high as usize + 1));
            prop_assert_eq!(configs.len(), grid.size().unwrap());
        }
    }
}
