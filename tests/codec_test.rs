use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use base64::Engine;

use hog_cost_calc_rs::calculator::{calculate, CalcConfig};
use hog_cost_calc_rs::models::{CalculationMode, FarmState};
use hog_cost_calc_rs::state::{decode, encode, DecodeError, FarmStateManager};

fn token_for(json: &str) -> String {
    URL_SAFE_NO_PAD.encode(json)
}

#[test]
fn test_legacy_stage_synthesizes_single_feed() {
    let json = r#"{
        "startWeight": 7, "targetWeight": 100,
        "geneticPrice": 1200000, "medicineCost": 50000, "managementCost": 50000,
        "forecastedHogPrice": 55000,
        "stages": [
            {"name": "Piglet", "startWeight": 7, "endWeight": 25,
             "productCode": "W-Standard", "pricePerBag": 625000, "fcr": 1.6, "bagsConsumed": 2},
            {"name": "Grower", "startWeight": 25, "endWeight": 60,
             "productCode": "G-Standard", "pricePerBag": 550000, "fcr": 2.2}
        ]
    }"#;

    let state = decode(&token_for(json)).unwrap();
    assert_eq!(state.stages.len(), 2);

    let piglet = &state.stages[0].feeds;
    assert_eq!(piglet.len(), 1);
    assert_eq!(piglet[0].product_code, "W-Standard");
    assert_eq!(piglet[0].price_per_bag, 625000.0);
    assert_eq!(piglet[0].fcr, 1.6);
    assert_eq!(piglet[0].bags_consumed, 2.0);
    assert!(!piglet[0].id.is_empty());

    let grower = &state.stages[1].feeds;
    assert_eq!(grower[0].bags_consumed, 0.0);
    assert_ne!(grower[0].id, piglet[0].id);
}

#[test]
fn test_empty_feeds_list_treated_as_legacy() {
    let json = r#"{"stages":[{"name":"Finisher","startWeight":60,"endWeight":100,
        "feeds":[],"productCode":"F","pricePerBag":500000,"fcr":2.8}]}"#;

    let state = decode(&token_for(json)).unwrap();
    assert_eq!(state.stages[0].feeds.len(), 1);
    assert_eq!(state.stages[0].feeds[0].product_code, "F");
}

#[test]
fn test_legacy_stage_without_feed_fields() {
    let state = decode(&token_for(r#"{"stages":[{"name":"Bare"}]}"#)).unwrap();
    let stage = &state.stages[0];

    assert_eq!(stage.start_weight, 0.0);
    assert_eq!(stage.feeds.len(), 1);
    assert_eq!(stage.feeds[0].price_per_bag, 0.0);
    assert_eq!(stage.feeds[0].fcr, 0.0);
    assert_eq!(stage.feeds[0].product_code, "");
}

#[test]
fn test_browser_style_token() {
    // Older links used the standard alphabet with padding.
    let json = r#"{"startWeight":8,"stages":[{"name":"Piglet","startWeight":7,"endWeight":25,
        "feeds":[{"id":"1","productCode":"W?>","pricePerBag":625000,"fcr":1.6,"bagsConsumed":0}]}]}"#;
    let token = STANDARD.encode(json);

    let state = decode(&format!("https://farm.example/#{}", token)).unwrap();
    assert_eq!(state.inputs.start_weight, 8.0);
    assert_eq!(state.inputs.target_weight, 100.0);
    assert_eq!(state.stages[0].feeds[0].id, "1");
    assert_eq!(state.stages[0].feeds[0].product_code, "W?>");
}

#[test]
fn test_shared_state_calculates_identically() {
    let mut state = FarmState::default();
    state.stages[2].feeds[0].bags_consumed = 12.0;

    let decoded = decode(&encode(&state)).unwrap();
    let original = calculate(&state.inputs, &state.stages);
    let restored = calculate(&decoded.inputs, &decoded.stages);

    assert_eq!(restored.calculation_mode, CalculationMode::Projection);
    assert_eq!(original, restored);
}

#[test]
fn test_malformed_tokens_never_alter_state() {
    let mut state = FarmState::default();
    state.inputs.target_weight = 115.0;
    let mut manager = FarmStateManager::new(state.clone());

    let bad_tokens = [
        String::new(),
        "not a token at all".to_string(),
        "####".to_string(),
        token_for("42"),
        token_for(r#"{"stages": "oops"}"#),
        token_for(r#"{"startWeight": 7, "stages": [{"feeds": [{"fcr": "high"}]}]}"#),
    ];

    for token in &bad_tokens {
        assert!(!manager.load_shared(token), "token should be rejected: {:?}", token);
        assert_eq!(manager.state(), &state);
    }

    let before = manager.calculate(&CalcConfig::default());
    assert!(manager.apply_token("@@@").is_err());
    assert_eq!(manager.calculate(&CalcConfig::default()), before);
}

#[test]
fn test_decode_error_kinds() {
    assert!(matches!(decode("   "), Err(DecodeError::Empty)));
    assert!(matches!(decode("a b c"), Err(DecodeError::Base64(_))));
    assert!(matches!(decode(&token_for("{")), Err(DecodeError::Json(_))));
}
