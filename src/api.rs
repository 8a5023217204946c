//! Transport-free request handling for the HTTP surface.
//!
//! The crate does not bind a socket; this module is the complete
//! collaborator an HTTP adapter wraps: it validates the JSON request
//! body, invokes the calculator, and maps the outcome to a status code
//! and a JSON body. Every response is expected to be sent with the
//! [CORS_HEADERS] attached.

use crate::calculation::{VleCalculator, VleOutput};
use serde::Deserialize;
use serde_json::json;

/// CORS headers attached to every response, including preflight.
pub const CORS_HEADERS: [(&str, &str); 3] = [
    ("Access-Control-Allow-Origin", "*"),
    ("Access-Control-Allow-Methods", "POST, OPTIONS"),
    ("Access-Control-Allow-Headers", "Content-Type"),
];

/// Status code and JSON body of a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    fn error(status: u16, message: &str) -> Self {
        Self {
            status,
            body: json!({ "error": message }).to_string(),
        }
    }
}

#[derive(Deserialize)]
struct CalculateRequest {
    comp1: Option<String>,
    comp2: Option<String>,
    temperature: Option<f64>,
    pressure: Option<f64>,
}

/// Handle a `POST /calculate` request body.
///
/// Missing or empty component names are rejected with status 400 before
/// the calculator is invoked. A successful calculation is returned with
/// status 200; a calculation that ended in the error envelope is
/// returned with status 500 and that envelope as the body.
pub fn handle_calculate(calculator: &VleCalculator, body: &str) -> ApiResponse {
    let request: CalculateRequest = match serde_json::from_str(body) {
        Ok(request) => request,
        Err(e) => return ApiResponse::error(400, &format!("Failed to parse JSON: {e}")),
    };
    let (Some(comp1), Some(comp2)) = (request.comp1, request.comp2) else {
        return ApiResponse::error(400, "Component names are required");
    };
    if comp1.is_empty() || comp2.is_empty() {
        return ApiResponse::error(400, "Component names are required");
    }

    let output = calculator.calculate(&comp1, &comp2, request.temperature, request.pressure);
    let status = if output.is_error() { 500 } else { 200 };
    match serde_json::to_string(&output) {
        Ok(body) => ApiResponse { status, body },
        Err(e) => ApiResponse::error(500, &format!("Failed to serialize result: {e}")),
    }
}

/// Handle a `GET /health` request.
pub fn handle_health() -> ApiResponse {
    ApiResponse {
        status: 200,
        body: json!({ "status": "OK" }).to_string(),
    }
}

/// Handle a CORS preflight (`OPTIONS`) request.
pub fn handle_preflight() -> ApiResponse {
    ApiResponse {
        status: 200,
        body: String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn missing_component_names_are_rejected() {
        let calculator = VleCalculator::new();
        for body in [
            r#"{}"#,
            r#"{"comp1": "water"}"#,
            r#"{"comp2": "ethanol"}"#,
            r#"{"comp1": "", "comp2": "ethanol"}"#,
        ] {
            let response = handle_calculate(&calculator, body);
            assert_eq!(response.status, 400);
            assert_eq!(response.body, r#"{"error":"Component names are required"}"#);
        }
    }

    #[test]
    fn malformed_body_is_rejected() {
        let response = handle_calculate(&VleCalculator::new(), "not json");
        assert_eq!(response.status, 400);
        let json: Value = serde_json::from_str(&response.body).unwrap();
        assert!(json["error"].as_str().unwrap().starts_with("Failed to parse JSON"));
    }

    #[test]
    fn successful_calculation() {
        let body = r#"{"comp1": "water", "comp2": "ethanol", "temperature": 350}"#;
        let response = handle_calculate(&VleCalculator::new(), body);
        assert_eq!(response.status, 200);
        let json: Value = serde_json::from_str(&response.body).unwrap();
        assert_eq!(json["temperature"], 350.0);
        assert_eq!(json["x_values"].as_array().unwrap().len(), 100);
        assert_eq!(json["poly_coeffs"].as_array().unwrap().len(), 21);
        assert_eq!(json["volatility"]["more_volatile"], "ethanol");
    }

    #[test]
    fn calculation_failures_are_a_500_with_the_envelope() {
        let body = r#"{"comp1": "water", "comp2": "unobtainium"}"#;
        let response = handle_calculate(&VleCalculator::new(), body);
        assert_eq!(response.status, 500);
        let json: Value = serde_json::from_str(&response.body).unwrap();
        assert!(json["error"].is_string());
        assert_eq!(json["x_values"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn health() {
        let response = handle_health();
        assert_eq!(response.status, 200);
        assert_eq!(response.body, r#"{"status":"OK"}"#);
    }

    #[test]
    fn preflight_has_no_body() {
        let response = handle_preflight();
        assert_eq!(response.status, 200);
        assert!(response.body.is_empty());
    }

    #[test]
    fn cors_headers_are_permissive() {
        assert!(CORS_HEADERS
            .iter()
            .any(|&(k, v)| k == "Access-Control-Allow-Origin" && v == "*"));
    }
}
