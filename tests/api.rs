//! End-to-end tests over a real TCP listener.

use calculator_sdk::CalculatorClient;
use calculator_service::config::ServiceConfig;
use serde_json::{json, Value};

mod common;

#[tokio::test]
async fn test_documented_scenarios() {
    let server = common::start_server(ServiceConfig::default()).await;
    let client = CalculatorClient::with_client(common::http_client(), &server.url());

    let res = client.calculate(2.0, 3.0, "add").await.unwrap();
    assert!(res.is_success());
    assert_eq!(res.result, 5.0);
    assert_eq!(res.message, "");

    let res = client.calculate(10.0, 0.0, "/").await.unwrap();
    assert_eq!(res.status, "Error");
    assert_eq!(res.result, 0.0);
    assert_eq!(res.message, "Division by zero is not allowed");

    let res = client.calculate(7.0, 2.0, "multiply").await.unwrap();
    assert_eq!(res.result, 14.0);

    let res = client.calculate(1.0, 3.0, "divide").await.unwrap();
    assert_eq!(res.result, 0.333333);

    let res = client.calculate(5.0, 5.0, "modulo").await.unwrap();
    assert_eq!(res.status, "Error");
    assert_eq!(res.message, "Unsupported operation: modulo");
}

#[tokio::test]
async fn test_case_insensitive_operations() {
    let server = common::start_server(ServiceConfig::default()).await;
    let client = CalculatorClient::with_client(common::http_client(), &server.url());

    for token in ["ADD", "Add", "add", "+"] {
        let res = client.calculate(1.5, 2.25, token).await.unwrap();
        assert!(res.is_success(), "{token} should be accepted");
        assert_eq!(res.result, 3.75);
    }
}

#[tokio::test]
async fn test_status_codes_and_body_shape() {
    let server = common::start_server(ServiceConfig::default()).await;
    let http = common::http_client();
    let url = format!("{}/api/calculator/calculate", server.url());

    let res = http
        .post(&url)
        .json(&json!({"operand1": 9, "operand2": 3, "operation": "-"}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
    assert!(res.headers().contains_key("x-request-id"));
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!({"result": 6.0, "status": "Success", "message": ""}));

    let res = http
        .post(&url)
        .json(&json!({"operand1": 9, "operand2": 0, "operation": "divide"}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 400);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["status"], "Error");
}

#[tokio::test]
async fn test_operations_catalog_is_stable() {
    let server = common::start_server(ServiceConfig::default()).await;
    let client = CalculatorClient::with_client(common::http_client(), &server.url());

    let before = client.operations().await.unwrap();
    client.calculate(1.0, 0.0, "/").await.unwrap();
    client.calculate(1.0, 1.0, "nope").await.unwrap();
    let after = client.operations().await.unwrap();

    assert_eq!(before, after);
    let names: Vec<_> = after
        .supported_operations
        .iter()
        .map(|op| op.name.as_str())
        .collect();
    assert_eq!(names, ["Add", "Subtract", "Multiply", "Divide"]);
    assert_eq!(after.supported_operations[1].symbols, ["subtract", "-"]);
}

#[tokio::test]
async fn test_forwarded_headers_do_not_alter_payload() {
    let server = common::start_server(ServiceConfig::default()).await;
    let http = common::http_client();

    let res = http
        .post(format!("{}/api/calculator/calculate", server.url()))
        .header("X-Forwarded-For", "203.0.113.7, 10.0.0.1")
        .header("X-Real-IP", "198.51.100.2")
        .json(&json!({"operand1": 2, "operand2": 3, "operation": "*"}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["result"], 6.0);
}

#[tokio::test]
async fn test_health() {
    let server = common::start_server(ServiceConfig::default()).await;
    let res = common::http_client()
        .get(format!("{}/health", server.url()))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["status"], "ok");
}
