//! Integration tests for sl-client against a mock evaluation service.

use std::time::Duration;

use sl_client::{EvalError, SimClient};
use sl_protocol::{SimulationRequest, SystemStatus, build_blueprint};
use sl_topology::default_topology;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn lab_request(traffic_rps: f64) -> SimulationRequest {
    let store = default_topology();
    SimulationRequest::new(traffic_rps, build_blueprint(&store))
}

fn stable_response() -> serde_json::Value {
    serde_json::json!({
        "total_latency": 42.5,
        "db_traffic": 3500.0,
        "system_status": "Stable",
        "nodes": [
            { "id": "app1", "latency": 42.5, "status": "Nominal" },
            { "id": "db1", "latency": 5.0, "status": "Nominal" },
        ],
    })
}

#[tokio::test]
async fn successful_exchange_returns_result() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/simulate"))
        .and(body_partial_json(serde_json::json!({
            "traffic_rps": 8000.0,
            "read_ratio": 0.95,
            "cache_hit_ratio": 0.8,
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(stable_response()))
        .mount(&mock_server)
        .await;

    let client = SimClient::new(mock_server.uri());
    let result = client.evaluate(&lab_request(8000.0)).await.unwrap();

    assert_eq!(result.total_latency, 42.5);
    assert_eq!(result.db_traffic, 3500.0);
    assert_eq!(result.system_status, SystemStatus::Stable);
    assert_eq!(result.nodes.len(), 2);
    assert!(!client.is_in_flight());
}

#[tokio::test]
async fn blueprint_entries_use_wire_field_names() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/simulate"))
        .and(body_partial_json(serde_json::json!({
            "blueprint": { "nodes": [
                { "id": "lb1", "type": "load_balancer", "capacity": 10_000 },
            ] },
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(stable_response()))
        .mount(&mock_server)
        .await;

    let client = SimClient::new(mock_server.uri());
    client.evaluate(&lab_request(8000.0)).await.unwrap();
}

#[tokio::test]
async fn non_success_status_is_a_failure_and_clears_the_gate() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/simulate"))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/simulate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(stable_response()))
        .mount(&mock_server)
        .await;

    let client = SimClient::new(mock_server.uri());
    let err = client.evaluate(&lab_request(8000.0)).await.unwrap_err();
    assert!(matches!(err, EvalError::Status { status } if status.as_u16() == 500));
    assert!(!client.is_in_flight());

    // Gate released: the next trigger proceeds.
    client.evaluate(&lab_request(8000.0)).await.unwrap();
}

#[tokio::test]
async fn malformed_body_is_a_decode_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/simulate"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let client = SimClient::new(mock_server.uri());
    let err = client.evaluate(&lab_request(8000.0)).await.unwrap_err();
    assert!(matches!(err, EvalError::Decode(_)));
    assert!(!client.is_in_flight());
}

#[tokio::test]
async fn overlapping_run_is_refused() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/simulate"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(stable_response())
                .set_delay(Duration::from_millis(200)),
        )
        .mount(&mock_server)
        .await;

    let client = SimClient::new(mock_server.uri());
    let clone = client.clone();
    let request = lab_request(8000.0);

    let first = client.evaluate(&request);
    let second = async {
        tokio::time::sleep(Duration::from_millis(50)).await;
        clone.evaluate(&request).await
    };

    let (first_result, second_result) = tokio::join!(first, second);
    first_result.unwrap();
    assert!(matches!(second_result, Err(EvalError::InFlight)));

    // Once the first run completes, a new trigger is accepted.
    client.evaluate(&request).await.unwrap();
}

#[tokio::test]
async fn connection_failure_is_a_transport_error() {
    // Nothing is listening here.
    let client = SimClient::new("http://127.0.0.1:1");
    let err = client.evaluate(&lab_request(8000.0)).await.unwrap_err();
    assert!(matches!(err, EvalError::Transport(_)));
    assert!(!client.is_in_flight());
}
