use mmg_registry::prelude::*;
use std::io::Write;

#[test]
fn defaults_reject_overrides_and_keep_sole_fallback() {
    let cfg = RegistryConfig::default();
    assert!(!cfg.allow_definition_overriding);
    assert!(cfg.sole_candidate_fallback);
    assert_eq!(RegistryConfig::from_json_str("{}").unwrap(), cfg);
}

#[test]
fn partial_json_fills_defaults() {
    let cfg = RegistryConfig::from_json_str(r#"{ "allow_definition_overriding": true }"#).unwrap();
    assert!(cfg.allow_definition_overriding);
    assert!(cfg.sole_candidate_fallback);
}

#[test]
fn unknown_fields_are_config_errors() {
    let err = RegistryConfig::from_json_str(r#"{ "allow_bean_overriding": true }"#)
        .expect_err("typo must be rejected");
    assert!(matches!(err, RegistryError::Config(_)));
    assert!(err.to_string().starts_with("invalid registry config"));
}

#[test]
fn loads_from_file() {
    let mut f = tempfile::NamedTempFile::new().expect("tempfile");
    write!(f, r#"{{ "sole_candidate_fallback": false }}"#).unwrap();
    let cfg = RegistryConfig::from_path(f.path()).expect("load");
    assert!(!cfg.sole_candidate_fallback);

    let mut b = RegistryBuilder::new(cfg);
    b.register(ComponentDefinition::new("lonely", || 7u8)).unwrap();
    let reg = b.build().unwrap();
    assert!(reg.resolve::<u8>().is_err());
}

#[test]
fn missing_file_is_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("registry.json");
    assert!(matches!(
        RegistryConfig::from_path(&missing),
        Err(RegistryError::Config(msg)) if msg.contains("registry.json")
    ));
}

#[test]
fn config_round_trips_through_serde() {
    let cfg = RegistryConfig {
        allow_definition_overriding: true,
        sole_candidate_fallback: false,
    };
    let json = serde_json::to_string(&cfg).unwrap();
    assert_eq!(RegistryConfig::from_json_str(&json).unwrap(), cfg);
}
