use rand::rngs::StdRng;
use rand::SeedableRng;

use super::*;
use crate::error::TunerError;
use crate::evaluation::{Comparison, Evaluation, FeaturesEvaluation, OutcomeStatus};
use crate::space::{Configuration, Features, ObjectiveType, Objectives, ParameterValue};

fn objectives(arity: usize) -> Objectives {
    (0..arity).fold(Objectives::new("ospace"), |o, i| o.minimize(&format!("f{i}")).unwrap())
}

fn eval(values: &[f64]) -> Evaluation {
    let config =
        Configuration::new("cspace", vec![("x".to_string(), ParameterValue::Float(values[0]))]);
    Evaluation::new(&objectives(values.len()), config, values.to_vec()).unwrap()
}

fn front_values(front: &ParetoFront) -> Vec<Vec<f64>> {
    front.iter().map(|e| e.objective_values().to_vec()).collect()
}

#[test]
fn test_first_insert_joins() {
    let mut front = ParetoFront::new();
    assert!(front.is_empty());
    assert_eq!(front.insert(eval(&[1.0, 1.0])).unwrap(), Insertion::Inserted { displaced: 0 });
    assert_eq!(front.len(), 1);
}

#[test]
fn test_dominated_candidate_rejected() {
    let mut front = ParetoFront::new();
    front.insert(eval(&[1.0, 1.0])).unwrap();
    assert_eq!(front.insert(eval(&[2.0, 1.0])).unwrap(), Insertion::Rejected(Comparison::Worse));
    assert_eq!(front_values(&front), vec![vec![1.0, 1.0]]);
}

#[test]
fn test_dominating_candidate_displaces() {
    let mut front = ParetoFront::new();
    front.insert(eval(&[3.0, 1.0])).unwrap();
    front.insert(eval(&[1.0, 3.0])).unwrap();
    front.insert(eval(&[2.0, 2.0])).unwrap();
    assert_eq!(front.len(), 3);

    let outcome = front.insert(eval(&[0.5, 0.5])).unwrap();
    assert_eq!(outcome, Insertion::Inserted { displaced: 3 });
    assert_eq!(front_values(&front), vec![vec![0.5, 0.5]]);
}

#[test]
fn test_partial_displacement_keeps_order() {
    let mut front = ParetoFront::new();
    front.insert(eval(&[1.0, 5.0])).unwrap();
    front.insert(eval(&[3.0, 3.0])).unwrap();
    front.insert(eval(&[5.0, 1.0])).unwrap();

    assert!(front.insert(eval(&[2.0, 2.0])).unwrap().is_inserted());
    assert_eq!(front_values(&front), vec![vec![1.0, 5.0], vec![5.0, 1.0], vec![2.0, 2.0]]);
}

#[test]
fn test_equivalent_keeps_existing_by_default() {
    let mut front = ParetoFront::new();
    let first = eval(&[1.0, 2.0]);
    front.insert(first.clone()).unwrap();
    let second = eval(&[1.0, 2.0]);
    assert_eq!(front.insert(second).unwrap(), Insertion::Rejected(Comparison::Equivalent));
    assert_eq!(front.len(), 1);
    assert!(front.members()[0].ptr_eq(&first));
}

#[test]
fn test_equivalent_kept_under_keep_all() {
    let mut front = ParetoFront::new().with_policy(EquivalencePolicy::KeepAll);
    front.insert(eval(&[1.0, 2.0])).unwrap();
    front.insert(eval(&[1.0, 2.0])).unwrap();
    assert_eq!(front.len(), 2);
}

#[test]
fn test_same_record_never_inserted_twice() {
    let mut front = ParetoFront::new().with_policy(EquivalencePolicy::KeepAll);
    let e = eval(&[1.0, 2.0]);
    front.insert(e.clone()).unwrap();
    assert!(!front.insert(e).unwrap().is_inserted());
    assert_eq!(front.len(), 1);
}

#[test]
fn test_unsuccessful_evaluation_refused() {
    let mut front = ParetoFront::new();
    let config = Configuration::new("cspace", vec![]);
    let failed = Evaluation::failed(&objectives(2), config.clone());
    assert!(matches!(front.insert(failed), Err(TunerError::InvalidEvaluation(_))));

    let pending =
        Evaluation::with_outcome(&objectives(2), config, OutcomeStatus::Pending, vec![0.0, 0.0])
            .unwrap();
    assert!(front.insert(pending).is_err());
    assert!(front.is_empty());
}

#[test]
fn test_dimension_error_leaves_front_untouched() {
    let mut front = ParetoFront::new();
    front.insert(eval(&[1.0, 2.0])).unwrap();
    let err = front.insert(eval(&[0.0, 0.0, 0.0])).unwrap_err();
    assert!(matches!(err, TunerError::DimensionMismatch { .. }));
    assert_eq!(front_values(&front), vec![vec![1.0, 2.0]]);
}

#[test]
fn test_maximize_direction() {
    let mut front = ParetoFront::with_objective_types(vec![ObjectiveType::Maximize]);
    front.insert(eval(&[1.0])).unwrap();
    assert!(front.insert(eval(&[2.0])).unwrap().is_inserted());
    assert!(!front.insert(eval(&[0.5])).unwrap().is_inserted());
    assert_eq!(front_values(&front), vec![vec![2.0]]);
}

#[test]
fn test_features_partition_front() {
    let os = objectives(1);
    let small = Features::new("fspace", vec![ParameterValue::Int(1)]);
    let large = Features::new("fspace", vec![ParameterValue::Int(1000)]);
    let config = || Configuration::new("cspace", vec![]);

    let mut front: ParetoFront<FeaturesEvaluation> = ParetoFront::new();
    let first = FeaturesEvaluation::new(&os, config(), small.clone(), vec![1.0]).unwrap();
    front.insert(first).unwrap();
    let second = FeaturesEvaluation::new(&os, config(), large.clone(), vec![50.0]).unwrap();
    front.insert(second).unwrap();
    assert_eq!(front.len(), 2);

    front.insert(FeaturesEvaluation::new(&os, config(), large, vec![40.0]).unwrap()).unwrap();
    assert_eq!(front.len(), 2);
    let small_member = front.iter().find(|e| e.features() == &small).unwrap();
    assert_eq!(small_member.objective_values(), &[1.0]);
}

#[test]
fn test_shared_record_under_other_features_joins() {
    let os = objectives(1);
    let e = Evaluation::new(&os, Configuration::new("cspace", vec![]), vec![1.0]).unwrap();
    let a = FeaturesEvaluation::from_evaluation(
        e.clone(),
        Features::new("fspace", vec![ParameterValue::Int(1)]),
    );
    let b = FeaturesEvaluation::from_evaluation(
        e,
        Features::new("fspace", vec![ParameterValue::Int(2)]),
    );
    assert_eq!(a.compare(&b).unwrap(), Comparison::NotComparable);

    let mut front: ParetoFront<FeaturesEvaluation> = ParetoFront::new();
    front.insert(a.clone()).unwrap();
    assert!(front.insert(b).unwrap().is_inserted());
    assert_eq!(front.len(), 2);
    assert_eq!(front.insert(a).unwrap(), Insertion::Rejected(Comparison::Equivalent));
    assert_eq!(front.len(), 2);
}

#[test]
fn test_choose() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut front = ParetoFront::new();
    assert!(front.choose(&mut rng).is_none());

    front.insert(eval(&[1.0, 3.0])).unwrap();
    front.insert(eval(&[3.0, 1.0])).unwrap();
    for _ in 0..20 {
        let chosen = front.choose(&mut rng).unwrap();
        assert!(front.iter().any(|m| m.ptr_eq(chosen)));
    }
}

#[test]
fn test_snapshot_is_independent() {
    let mut front = ParetoFront::new();
    front.insert(eval(&[1.0, 3.0])).unwrap();
    let snapshot = front.snapshot();
    front.insert(eval(&[0.0, 0.0])).unwrap();
    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot[0].objective_values(), &[1.0, 3.0]);
}

mod property_tests {
    use super::*;
    use proptest::collection::vec;
    use proptest::prelude::*;

    fn stream() -> impl Strategy<Value = Vec<Vec<f64>>> {
        (1usize..4).prop_flat_map(|n| {
            vec(vec((0i32..10).prop_map(f64::from), n), 1..60)
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn prop_members_mutually_non_dominated(values in stream()) {
            let mut front = ParetoFront::new();
            for v in &values {
                front.insert(eval(v)).unwrap();
            }
            for a in front.iter() {
                for b in front.iter() {
                    prop_assert_ne!(a.compare(b).unwrap(), Comparison::Better);
                }
            }
        }

        #[test]
        fn prop_every_discarded_value_is_covered(values in stream()) {
            let mut front = ParetoFront::new();
            for v in &values {
                front.insert(eval(v)).unwrap();
            }
            // each offered vector is dominated by or equal to some member
            for v in &values {
                let covered = front.iter().any(|m| {
                    matches!(
                        crate::evaluation::compare(m.objective_values(), v).unwrap(),
                        Comparison::Better | Comparison::Equivalent
                    )
                });
                prop_assert!(covered);
            }
        }

        #[test]
        fn prop_reinsertion_is_idempotent(values in stream()) {
            let records: Vec<Evaluation> = values.iter().map(|v| eval(v)).collect();
            let mut front = ParetoFront::new();
            for e in &records {
                front.insert(e.clone()).unwrap();
            }
            let size = front.len();
            for e in &records {
                front.insert(e.clone()).unwrap();
            }
            prop_assert_eq!(front.len(), size);
        }
    }
}
