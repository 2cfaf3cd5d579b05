//! Tests for configuration and objective spaces

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::*;
use crate::error::TunerError;

fn xyz_space() -> HyperparameterSpace {
    let mut space = HyperparameterSpace::new("cspace");
    for name in ["x", "y", "z"] {
        space.add(name, ParameterDomain::continuous(-5.0, 5.0)).unwrap();
    }
    space
}

// -------------------------------------------------------------------------
// ParameterValue Tests
// -------------------------------------------------------------------------

#[test]
fn test_parameter_value_float() {
    let v = ParameterValue::Float(0.5);
    assert_eq!(v.as_float(), Some(0.5));
    assert_eq!(v.as_int(), Some(0));
    assert_eq!(v.as_str(), None);
}

#[test]
fn test_parameter_value_categorical() {
    let v = ParameterValue::Categorical("relu".to_string());
    assert_eq!(v.as_float(), None);
    assert_eq!(v.as_str(), Some("relu"));
}

// -------------------------------------------------------------------------
// ParameterDomain Tests
// -------------------------------------------------------------------------

#[test]
fn test_domain_samples_are_valid() {
    let domains = [
        ParameterDomain::continuous(0.0, 1.0),
        ParameterDomain::Continuous { low: 1e-5, high: 1e-1, log_scale: true },
        ParameterDomain::Discrete { low: 8, high: 128 },
        ParameterDomain::Categorical {
            choices: vec!["relu".to_string(), "gelu".to_string(), "swish".to_string()],
        },
    ];
    let mut rng = StdRng::seed_from_u64(7);
    for domain in &domains {
        for _ in 0..100 {
            let value = domain.sample(&mut rng);
            assert!(domain.is_valid(&value), "{value:?} outside {domain:?}");
        }
    }
}

#[test]
fn test_domain_is_valid_type_mismatch() {
    let domain = ParameterDomain::Discrete { low: 0, high: 10 };
    assert!(!domain.is_valid(&ParameterValue::Float(5.0)));

    let domain = ParameterDomain::Categorical { choices: vec!["a".to_string()] };
    assert!(!domain.is_valid(&ParameterValue::Int(0)));
}

#[test]
fn test_domain_check_rejects_unsampleable() {
    assert!(ParameterDomain::continuous(1.0, 0.0).check("lr").is_err());
    assert!(ParameterDomain::continuous(0.0, f64::INFINITY).check("lr").is_err());
    assert!(ParameterDomain::Continuous { low: 0.0, high: 1.0, log_scale: true }
        .check("lr")
        .is_err());
    assert!(ParameterDomain::Discrete { low: 3, high: 2 }.check("bs").is_err());
    assert!(ParameterDomain::Categorical { choices: vec![] }.check("act").is_err());
    assert!(ParameterDomain::Discrete { low: 2, high: 2 }.check("bs").is_ok());
}

// -------------------------------------------------------------------------
// HyperparameterSpace Tests
// -------------------------------------------------------------------------

#[test]
fn test_space_add_keeps_declaration_order() {
    let space = xyz_space();
    let names: Vec<&str> = space.iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(names, vec!["x", "y", "z"]);
    assert_eq!(space.len(), 3);
    assert!(space.get("y").is_some());
    assert!(space.get("w").is_none());
}

#[test]
fn test_space_add_replaces_existing() {
    let mut space = xyz_space();
    space.add("y", ParameterDomain::Discrete { low: 0, high: 3 }).unwrap();
    assert_eq!(space.len(), 3);
    assert_eq!(space.get("y"), Some(&ParameterDomain::Discrete { low: 0, high: 3 }));
}

#[test]
fn test_space_add_invalid_domain() {
    let mut space = HyperparameterSpace::new("s");
    let err = space.add("act", ParameterDomain::Categorical { choices: vec![] }).unwrap_err();
    assert!(matches!(err, TunerError::InvalidValue(_)));
    assert!(space.is_empty());
}

#[test]
fn test_space_samples() {
    let space = xyz_space();
    let mut rng = StdRng::seed_from_u64(42);
    let configs = space.samples(&mut rng, 10).unwrap();

    assert_eq!(configs.len(), 10);
    for config in &configs {
        assert_eq!(config.space_name(), "cspace");
        assert_eq!(config.as_floats().map(|v| v.len()), Some(3));
        assert!(space.validate(config).is_ok());
    }
}

#[test]
fn test_space_samples_are_seeded() {
    let space = xyz_space();
    let a = space.samples(&mut StdRng::seed_from_u64(3), 5).unwrap();
    let b = space.samples(&mut StdRng::seed_from_u64(3), 5).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_empty_space_cannot_sample() {
    let space = HyperparameterSpace::new("empty");
    let mut rng = StdRng::seed_from_u64(0);
    assert!(matches!(space.samples(&mut rng, 1), Err(TunerError::EmptySpace)));
}

#[test]
fn test_space_configuration_from_values() {
    let space = xyz_space();
    let config = space
        .configuration(vec![
            ParameterValue::Float(2.0),
            ParameterValue::Float(0.0),
            ParameterValue::Float(-1.0),
        ])
        .unwrap();
    assert_eq!(config.get("z"), Some(&ParameterValue::Float(-1.0)));

    assert!(space.configuration(vec![ParameterValue::Float(0.0)]).is_err());
    assert!(space
        .configuration(vec![
            ParameterValue::Float(9.0),
            ParameterValue::Float(0.0),
            ParameterValue::Float(0.0),
        ])
        .is_err());
}

#[test]
fn test_space_validate() {
    let space = xyz_space();

    let foreign = Configuration::new("other", vec![("x".to_string(), ParameterValue::Float(0.0))]);
    assert!(matches!(space.validate(&foreign), Err(TunerError::InvalidValue(_))));

    let missing = Configuration::new("cspace", vec![("x".to_string(), ParameterValue::Float(0.0))]);
    assert!(matches!(
        space.validate(&missing),
        Err(TunerError::ParameterNotFound(name)) if name == "y"
    ));
}

// -------------------------------------------------------------------------
// Objectives Tests
// -------------------------------------------------------------------------

#[test]
fn test_objectives_arity_and_types() {
    let objectives = Objectives::new("ospace").minimize("error").unwrap().maximize("qps").unwrap();

    assert_eq!(objectives.arity(), 2);
    assert_eq!(objectives.name(), "ospace");
    assert_eq!(
        objectives.objective_types(),
        vec![ObjectiveType::Minimize, ObjectiveType::Maximize]
    );
    assert_eq!(objectives.index_of("qps"), Some(1));
}

#[test]
fn test_objectives_reject_duplicate_names() {
    let objectives = Objectives::new("ospace").minimize("error").unwrap();
    assert!(objectives.minimize("error").is_err());
}

// -------------------------------------------------------------------------
// Serde Tests
// -------------------------------------------------------------------------

#[test]
fn test_space_yaml_description() {
    let yaml = r#"
name: cspace
params:
  - - lr
    - type: continuous
      low: 0.00001
      high: 0.1
      log_scale: true
  - - act
    - type: categorical
      choices: [relu, gelu]
"#;
    let space: HyperparameterSpace = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(space.len(), 2);
    assert!(matches!(space.get("lr"), Some(ParameterDomain::Continuous { log_scale: true, .. })));
}

#[test]
fn test_deserialized_space_checked_before_sampling() {
    let mut rng = StdRng::seed_from_u64(0);
    let empty: HyperparameterSpace =
        serde_yaml::from_str("name: s\nparams: [[k, {type: categorical, choices: []}]]").unwrap();
    assert!(matches!(empty.check(), Err(TunerError::InvalidValue(_))));
    assert!(matches!(empty.samples(&mut rng, 1), Err(TunerError::InvalidValue(_))));

    let inverted: HyperparameterSpace =
        serde_yaml::from_str("name: s\nparams: [[n, {type: discrete, low: 5, high: 1}]]").unwrap();
    assert!(matches!(inverted.sample_random(&mut rng), Err(TunerError::InvalidValue(_))));
    assert!(GridSearch::new(inverted, 2).configurations().is_err());
}

#[test]
fn test_objectives_serde() {
    let objectives = Objectives::new("ospace").minimize("a").unwrap().maximize("b").unwrap();
    let json = serde_json::to_string(&objectives).unwrap();
    let parsed: Objectives = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, objectives);
}

#[test]
fn test_features_equality() {
    let on = Features::new("fspace", vec![ParameterValue::Categorical("on".to_string())]);
    let off = Features::new("fspace", vec![ParameterValue::Categorical("off".to_string())]);
    assert_ne!(on, off);
    assert_eq!(on, on.clone());
    assert_eq!(on.space_name(), "fspace");
}
