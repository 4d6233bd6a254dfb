//! End-to-end tests: a real server on an ephemeral port, with httpmock
//! standing in for the acquirer simulator.

use httpmock::prelude::*;
use payment_gateway::application::gateway::PaymentGateway;
use payment_gateway::domain::ports::{AuthorizerBox, PaymentStoreBox};
use payment_gateway::infrastructure::in_memory::InMemoryPaymentStore;
use payment_gateway::infrastructure::simulator::SimulatorClient;
use payment_gateway::interfaces::http::create_router;
use serde_json::{Value, json};
use std::sync::Arc;

/// Serves the full application against the given simulator endpoint and
/// returns its base URL.
async fn serve(simulator_url: String) -> String {
    let store: PaymentStoreBox = Box::new(InMemoryPaymentStore::new());
    let authorizer: AuthorizerBox = Box::new(SimulatorClient::new(simulator_url));
    let gateway = Arc::new(PaymentGateway::new(store, authorizer));
    let app = create_router(gateway);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}")
}

fn simulator_replying(authorized: bool) -> MockServer {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/payments");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({ "authorized": authorized }));
    });
    server
}

fn valid_request() -> Value {
    json!({
        "cardNumber": "4242424242424242",
        "expiryMonth": 12,
        "expiryYear": 2099,
        "currency": "USD",
        "amount": 1050,
        "cvv": "123"
    })
}

#[tokio::test]
async fn test_submit_then_lookup_round_trips() {
    let simulator = simulator_replying(true);
    let base = serve(simulator.url("/payments")).await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{base}/api/payments"))
        .json(&valid_request())
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 200);

    let submitted: Value = response.json().await.unwrap();
    assert_eq!(submitted["status"], "authorized");
    assert_eq!(submitted["cardNumberLastFour"], 4242);
    assert_eq!(submitted["currency"], "USD");
    assert_eq!(submitted["amount"], 1050);

    let id = submitted["id"].as_str().unwrap();
    let lookup = client
        .get(format!("{base}/api/payments/{id}"))
        .send()
        .await
        .unwrap();
    assert_eq!(lookup.status().as_u16(), 200);

    let fetched: Value = lookup.json().await.unwrap();
    assert_eq!(fetched, submitted);
}

#[tokio::test]
async fn test_lookup_is_idempotent() {
    let simulator = simulator_replying(true);
    let base = serve(simulator.url("/payments")).await;
    let client = reqwest::Client::new();

    let submitted: Value = client
        .post(format!("{base}/api/payments"))
        .json(&valid_request())
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let id = submitted["id"].as_str().unwrap();

    let first: Value = client
        .get(format!("{base}/api/payments/{id}"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let second: Value = client
        .get(format!("{base}/api/payments/{id}"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_declined_payment_returns_ok_with_declined_status() {
    let simulator = simulator_replying(false);
    let base = serve(simulator.url("/payments")).await;

    let response = reqwest::Client::new()
        .post(format!("{base}/api/payments"))
        .json(&valid_request())
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 200);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], "declined");
}

#[tokio::test]
async fn test_simulator_bad_request_becomes_a_stored_rejection() {
    let simulator = MockServer::start();
    simulator.mock(|when, then| {
        when.method(POST).path("/payments");
        then.status(400);
    });
    let base = serve(simulator.url("/payments")).await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{base}/api/payments"))
        .json(&valid_request())
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 200);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], "rejected");

    // The rejection is persisted like any other outcome.
    let id = body["id"].as_str().unwrap();
    let lookup = client
        .get(format!("{base}/api/payments/{id}"))
        .send()
        .await
        .unwrap();
    assert_eq!(lookup.status().as_u16(), 200);
}

#[tokio::test]
async fn test_simulator_failure_returns_500_and_stores_nothing() {
    let simulator = MockServer::start();
    simulator.mock(|when, then| {
        when.method(POST).path("/payments");
        then.status(500);
    });
    let base = serve(simulator.url("/payments")).await;

    let response = reqwest::Client::new()
        .post(format!("{base}/api/payments"))
        .json(&valid_request())
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 500);
    let body = response.text().await.unwrap();
    assert!(body.starts_with("Simulator error:"), "body was: {body}");
}

#[tokio::test]
async fn test_invalid_request_returns_400_with_all_reasons() {
    let simulator = simulator_replying(true);
    let base = serve(simulator.url("/payments")).await;

    let mut request = valid_request();
    request["cardNumber"] = json!("123");
    request["currency"] = json!("AAA");
    request["amount"] = json!(0);

    let response = reqwest::Client::new()
        .post(format!("{base}/api/payments"))
        .json(&request)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 400);

    let body = response.text().await.unwrap();
    assert!(body.starts_with("Please provide all required fields for the payment request.\n"));
    assert!(body.contains("Card number must be between 14 and 19 digits long."));
    assert!(body.contains("Currency must be a valid ISO code."));
    assert!(body.contains("Amount is required."));
}

#[tokio::test]
async fn test_lookup_of_unknown_id_returns_404() {
    let simulator = simulator_replying(true);
    let base = serve(simulator.url("/payments")).await;
    let id = uuid::Uuid::new_v4();

    let response = reqwest::Client::new()
        .get(format!("{base}/api/payments/{id}"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 404);
    let body = response.text().await.unwrap();
    assert_eq!(body, format!("Payment with ID '{id}' was not found."));
}
