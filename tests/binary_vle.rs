use approx::assert_relative_eq;
use mccabe_thiele::api::{handle_calculate, handle_preflight, CORS_HEADERS};
use mccabe_thiele::{
    relative_volatility, ComponentDb, OperatingCondition, RaoultModel, SolverOptions,
    SyntheticModel, Verbosity, VleCalculator, VleOutput,
};
use mccabe_thiele::equilibrium::EquilibriumModel;
use serde_json::Value;
use std::sync::Arc;

#[test]
fn water_ethanol_isothermal() {
    let output = VleCalculator::new().calculate("water", "ethanol", Some(350.0), None);
    let VleOutput::Success(c) = output else {
        panic!("expected a successful calculation");
    };
    assert_eq!(c.temperature, Some(350.0));
    assert_eq!(c.pressure, None);
    assert_eq!(c.x_values.len(), c.y_values.len());
    assert!(c.x_values.len() >= 2);
    assert!(c.x_values.iter().all(|&x| (0.0..=1.0).contains(&x)));
    assert!(c.y_values.iter().all(|&y| (0.0..=1.0).contains(&y)));
    assert_eq!(c.poly_coeffs.len(), 21);
    assert_eq!(c.volatility.more_volatile.as_deref(), Some("ethanol"));
    assert_eq!(c.volatility.bp1, Some(373.15));
    assert_eq!(c.volatility.bp2, Some(351.4));
}

#[test]
fn water_ethanol_isobaric_at_one_atmosphere() {
    let output = VleCalculator::new().calculate("water", "ethanol", None, Some(101325.0));
    let VleOutput::Success(c) = output else {
        panic!("expected a successful calculation");
    };
    assert_eq!(c.temperature, None);
    assert_relative_eq!(c.pressure.unwrap(), 1.01325);
    // water as first component boils higher, so its vapor is depleted
    let mid = c.x_values.len() / 2;
    assert!(c.y_values[mid] < c.x_values[mid]);
}

#[test]
fn relative_volatility_of_a_real_curve_exceeds_one() {
    let db = Arc::new(ComponentDb::with_common_solvents());
    let model = RaoultModel::new(db).options(
        SolverOptions::new()
            .max_iter(500)
            .tol(1e-12)
            .verbosity(Verbosity::None),
    );
    let curve = model
        .equilibrium("ethanol", "water", OperatingCondition::Pressure(1.01325))
        .unwrap();
    let alpha = relative_volatility(&curve).unwrap();
    assert!(alpha > 1.0, "ethanol should be enriched in the vapor, alpha = {alpha}");
}

#[test]
fn degraded_deployment_serves_flagged_synthetic_curves() {
    let db = Arc::new(ComponentDb::with_common_solvents());
    let calculator = VleCalculator::with_model(db, Box::new(SyntheticModel));
    let body = r#"{"comp1": "water", "comp2": "ethanol"}"#;
    let response = handle_calculate(&calculator, body);
    assert_eq!(response.status, 200);
    let json: Value = serde_json::from_str(&response.body).unwrap();
    assert!(json["warning"].is_string());
    assert_relative_eq!(json["y_values"][99].as_f64().unwrap(), 1.0);
}

#[test]
fn http_contract_end_to_end() {
    let calculator = VleCalculator::new();

    // validation happens before the calculator runs
    let response = handle_calculate(&calculator, r#"{"comp1": "", "comp2": "ethanol"}"#);
    assert_eq!(response.status, 400);
    assert_eq!(response.body, r#"{"error":"Component names are required"}"#);

    // success shape
    let response = handle_calculate(
        &calculator,
        r#"{"comp1": "methanol", "comp2": "dmso", "temperature": 350}"#,
    );
    assert_eq!(response.status, 200);
    let json: Value = serde_json::from_str(&response.body).unwrap();
    assert_eq!(json["comp1"], "methanol");
    assert_eq!(json["comp2"], "dmso");
    assert_eq!(json["volatility"]["more_volatile"], "methanol");
    assert_eq!(
        json["volatility"]["message"],
        "methanol is more volatile (lower boiling point)"
    );

    // error envelope shape
    let response = handle_calculate(
        &calculator,
        r#"{"comp1": "water", "comp2": "unobtainium"}"#,
    );
    assert_eq!(response.status, 500);
    let json: Value = serde_json::from_str(&response.body).unwrap();
    assert!(json["error"].is_string());
    assert_eq!(json["x_values"].as_array().unwrap().len(), 0);
    assert_eq!(json["y_values"].as_array().unwrap().len(), 0);
    assert_eq!(json["poly_coeffs"].as_array().unwrap().len(), 0);

    // preflight
    let response = handle_preflight();
    assert_eq!(response.status, 200);
    assert!(response.body.is_empty());
    assert_eq!(CORS_HEADERS.len(), 3);
}
