use creatorcortex::config::Config;
use creatorcortex::core::cortex::RiskEngine;
use tempfile::TempDir;

#[test]
fn partial_config_deserializes_with_defaults() {
    let toml = r#"
[defaults]
topic = "Tech"

[generation]
backend = "http"
endpoint = "http://models.local/generate"
"#;

    let parsed: Config = toml::from_str(toml).expect("partial config should deserialize");

    assert_eq!(parsed.defaults.topic, "Tech");
    assert_eq!(parsed.defaults.tone, "Neutral");
    assert!((parsed.defaults.risk_tolerance - 0.5).abs() < f64::EPSILON);
    assert_eq!(parsed.generation.timeout_secs, 30);
    assert_eq!(parsed.audit.backend, "sqlite");
    assert_eq!(parsed.profiles.timeout_ms, 2_000);
    assert_eq!(parsed.intent.min_query_length, 15);
    assert_eq!(parsed.risk.keywords.len(), 8);
    assert!(parsed.validate().is_ok());
}

#[test]
fn custom_keyword_table_replaces_defaults() {
    let toml = r#"
[[risk.keywords]]
keyword = "Miracle Cure"
weight = 0.85
"#;

    let parsed: Config = toml::from_str(toml).unwrap();
    let engine = RiskEngine::new(&parsed.risk);
    let verdict = engine.assess_risk("This miracle cure works", 0.5);

    assert!(!verdict.is_safe);
    assert!((verdict.score - 0.85).abs() < f64::EPSILON);
    assert!(engine.assess_risk("a scam", 0.5).is_safe);
}

#[test]
fn out_of_range_weight_fails_validation() {
    let toml = r#"
[[risk.keywords]]
keyword = "scam"
weight = 1.5
"#;
    let parsed: Config = toml::from_str(toml).unwrap();
    assert!(parsed.validate().is_err());
}

#[test]
fn first_run_writes_config_that_reloads() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().join(".creatorcortex");

    let first = Config::load_or_init_in(&root).unwrap();
    assert!(first.config_path.exists());
    assert!(first.workspace_dir.exists());

    let second = Config::load_or_init_in(&root).unwrap();
    assert_eq!(second.defaults.topic, first.defaults.topic);
    assert_eq!(second.risk.keywords, first.risk.keywords);
}
