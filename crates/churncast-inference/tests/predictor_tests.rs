//! Predictor integration tests
//!
//! Exercises the full transform-and-score path against the artifacts
//! shipped in `vault/`, plus artifact round-trips through temp files.

use churncast_core::{CustomerRecord, FieldKind, FormSchema, FIELDS};
use churncast_inference::{ArtifactBundle, ArtifactConfig, ChurnLabel, ChurnPredictor, DECISION_THRESHOLD};
use proptest::prelude::*;
use std::path::PathBuf;

fn vault_config() -> ArtifactConfig {
    let vault = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../vault");
    ArtifactConfig {
        preprocessor: vault.join("churn_preprocessor.json"),
        model: vault.join("churn_model.json"),
    }
}

fn vault_predictor() -> ChurnPredictor {
    ChurnPredictor::load(&vault_config()).expect("vault artifacts should load")
}

/// The worked example from the product notes: age 30, tenure 24, other
/// numerics at their form defaults, Male / Basic / Monthly / 25-35 /
/// 1-2 Years.
fn example_record() -> CustomerRecord {
    CustomerRecord {
        tenure_group: "1-2 Years".to_string(),
        ..FormSchema::default_record()
    }
}

#[test]
fn test_vault_artifacts_load() {
    let predictor = vault_predictor();
    assert_eq!(predictor.feature_width(), 18);
    assert!(predictor.tree_count() > 0);
}

#[test]
fn test_example_record_prediction() {
    let predictor = vault_predictor();
    let prediction = predictor.predict(&example_record()).unwrap();

    assert!((0.0..=1.0).contains(&prediction.probability));
    let expected = if prediction.probability >= DECISION_THRESHOLD {
        ChurnLabel::Churn
    } else {
        ChurnLabel::Retain
    };
    assert_eq!(prediction.label, expected);
}

#[test]
fn test_prediction_is_deterministic() {
    let predictor = vault_predictor();
    let record = example_record();

    let first = predictor.predict(&record).unwrap();
    for _ in 0..10 {
        let again = predictor.predict(&record).unwrap();
        assert_eq!(first.label, again.label);
        assert_eq!(first.probability.to_bits(), again.probability.to_bits());
        assert_eq!(first.margin.to_bits(), again.margin.to_bits());
    }
}

#[test]
fn test_boundary_records_do_not_fault() {
    let predictor = vault_predictor();

    let mut low = FormSchema::default_record();
    let mut high = FormSchema::default_record();
    for field in FIELDS {
        if let FieldKind::Numeric { min, max, .. } = &field.kind {
            set_numeric(&mut low, field.name, *min);
            set_numeric(&mut high, field.name, *max);
        }
    }

    for record in [low, high] {
        let prediction = predictor.predict(&record).unwrap();
        assert!((0.0..=1.0).contains(&prediction.probability));
    }
}

#[test]
fn test_every_fitted_category_is_scorable() {
    let predictor = vault_predictor();

    for field in FIELDS {
        if let FieldKind::Categorical { options, .. } = &field.kind {
            for option in options.iter() {
                let mut record = FormSchema::default_record();
                set_categorical(&mut record, field.name, option);
                let prediction = predictor.predict(&record).unwrap();
                assert!(
                    (0.0..=1.0).contains(&prediction.probability),
                    "{} = {}",
                    field.name,
                    option
                );
            }
        }
    }
}

#[test]
fn test_unknown_category_propagates() {
    let predictor = vault_predictor();
    let mut record = FormSchema::default_record();
    record.subscription_type = "Platinum".to_string();

    let err = predictor.predict(&record).unwrap_err();
    assert!(matches!(err, churncast_core::Error::UnknownCategory { .. }));
}

#[test]
fn test_artifact_round_trip_through_files() {
    let bundle = ArtifactBundle::load(&vault_config()).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let config = ArtifactConfig {
        preprocessor: dir.path().join("preprocessor.json"),
        model: dir.path().join("model.json"),
    };
    std::fs::write(
        &config.preprocessor,
        serde_json::to_string_pretty(&bundle.preprocessor).unwrap(),
    )
    .unwrap();
    std::fs::write(
        &config.model,
        serde_json::to_string_pretty(&bundle.model).unwrap(),
    )
    .unwrap();

    let reloaded = ChurnPredictor::load(&config).unwrap();
    let record = example_record();
    let a = vault_predictor().predict(&record).unwrap();
    let b = reloaded.predict(&record).unwrap();
    assert_eq!(a.probability.to_bits(), b.probability.to_bits());
}

#[test]
fn test_feature_width_mismatch_rejected_at_load() {
    let bundle = ArtifactBundle::load(&vault_config()).unwrap();

    let mut model = bundle.model.clone();
    model.n_features = 7;

    let dir = tempfile::tempdir().unwrap();
    let config = ArtifactConfig {
        preprocessor: dir.path().join("preprocessor.json"),
        model: dir.path().join("model.json"),
    };
    std::fs::write(
        &config.preprocessor,
        serde_json::to_string(&bundle.preprocessor).unwrap(),
    )
    .unwrap();
    std::fs::write(&config.model, serde_json::to_string(&model).unwrap()).unwrap();

    let err = ChurnPredictor::load(&config).unwrap_err();
    assert!(matches!(err, churncast_core::Error::SchemaMismatch(_)));
}

fn set_numeric(record: &mut CustomerRecord, name: &str, value: f64) {
    match name {
        "age" => record.age = value,
        "tenure" => record.tenure = value,
        "usage_frequency" => record.usage_frequency = value,
        "support_calls" => record.support_calls = value,
        "payment_delay" => record.payment_delay = value,
        "total_spend" => record.total_spend = value,
        "last_interaction" => record.last_interaction = value,
        "lifetime_value" => record.lifetime_value = value,
        "monthly_spend" => record.monthly_spend = value,
        "usage_intensity" => record.usage_intensity = value,
        "support_call_rate" => record.support_call_rate = value,
        "interaction_ratio" => record.interaction_ratio = value,
        "delay_ratio" => record.delay_ratio = value,
        other => panic!("unknown numeric field {}", other),
    }
}

fn set_categorical(record: &mut CustomerRecord, name: &str, value: &str) {
    match name {
        "gender" => record.gender = value.to_string(),
        "subscription_type" => record.subscription_type = value.to_string(),
        "contract_length" => record.contract_length = value.to_string(),
        "age_group" => record.age_group = value.to_string(),
        "tenure_group" => record.tenure_group = value.to_string(),
        other => panic!("unknown categorical field {}", other),
    }
}

fn arb_record() -> impl Strategy<Value = CustomerRecord> {
    let measures = (
        18.0..=100.0f64,
        0.0..=120.0f64,
        0.0..=100.0f64,
        0.0..=50.0f64,
        0.0..=30.0f64,
        0.0..=10000.0f64,
        0.0..=365.0f64,
    );
    let derived = (
        0.0..=50000.0f64,
        0.0..=5000.0f64,
        0.0..=1.0f64,
        0.0..=1.0f64,
        0.0..=1.0f64,
        0.0..=2.0f64,
    );
    let categories = (
        prop::sample::select(vec!["Male", "Female"]),
        prop::sample::select(vec!["Basic", "Standard", "Premium"]),
        prop::sample::select(vec!["Monthly", "Quarterly", "Annual"]),
        prop::sample::select(vec!["Under 25", "25-35", "36-50", "51-65", "65+"]),
        prop::sample::select(vec!["< 1 Year", "1-2 Years", "2-3 Years", "3+ Years"]),
    );

    (measures, derived, categories).prop_map(
        |(
            (age, tenure, usage_frequency, support_calls, payment_delay, total_spend, last_interaction),
            (lifetime_value, monthly_spend, usage_intensity, support_call_rate, interaction_ratio, delay_ratio),
            (gender, subscription_type, contract_length, age_group, tenure_group),
        )| CustomerRecord {
            age,
            tenure,
            usage_frequency,
            support_calls,
            payment_delay,
            total_spend,
            last_interaction,
            lifetime_value,
            monthly_spend,
            usage_intensity,
            support_call_rate,
            interaction_ratio,
            delay_ratio,
            gender: gender.to_string(),
            subscription_type: subscription_type.to_string(),
            contract_length: contract_length.to_string(),
            age_group: age_group.to_string(),
            tenure_group: tenure_group.to_string(),
        },
    )
}

proptest! {
    #[test]
    fn prop_valid_records_score_in_unit_interval(record in arb_record()) {
        let schema = FormSchema::new();
        prop_assert!(schema.validate(&record).is_ok());

        let predictor = vault_predictor();
        let prediction = predictor.predict(&record).unwrap();
        prop_assert!((0.0..=1.0).contains(&prediction.probability));

        let expected = if prediction.probability >= DECISION_THRESHOLD {
            ChurnLabel::Churn
        } else {
            ChurnLabel::Retain
        };
        prop_assert_eq!(prediction.label, expected);
    }
}
