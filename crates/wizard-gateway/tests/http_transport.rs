use std::time::Duration;

use indexmap::IndexMap;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use wizard_config::WizardConfig;
use wizard_core::{Payload, StepId, SubmissionFailure, SubmissionResult};
use wizard_gateway::{
    GatewayError, GatewayOptions, HttpTransport, SubmissionGateway, TransportError, ValuesService,
};

fn registration_payload() -> Payload {
    let identity: IndexMap<String, String> = [("name".to_string(), "Ann".to_string())]
        .into_iter()
        .collect();
    let questions: IndexMap<String, String> = [("food".to_string(), "Pasta".to_string())]
        .into_iter()
        .collect();
    [
        (StepId::new("identity"), identity),
        (StepId::new("questions"), questions),
    ]
    .into_iter()
    .collect()
}

fn transport_for(server: &MockServer) -> anyhow::Result<HttpTransport> {
    let config = WizardConfig::default().with_api_url(format!("{}/api/", server.uri()))?;
    Ok(HttpTransport::from_config(config.api())?)
}

#[tokio::test]
async fn posts_payload_as_json_and_returns_response() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/values"))
        .and(body_json(json!({
            "identity": {"name": "Ann"},
            "questions": {"food": "Pasta"}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"registered": true})))
        .expect(1)
        .mount(&server)
        .await;

    let gateway = SubmissionGateway::new(transport_for(&server)?, GatewayOptions::new());
    let result = gateway.submit(&registration_payload()).await?;

    assert_eq!(result, SubmissionResult::Accepted(json!({"registered": true})));
    Ok(())
}

#[tokio::test]
async fn server_error_is_a_failed_result_not_an_error() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/values"))
        .respond_with(ResponseTemplate::new(500).set_body_string("database unavailable"))
        .mount(&server)
        .await;

    let gateway = SubmissionGateway::new(transport_for(&server)?, GatewayOptions::new());
    let result = gateway.submit(&registration_payload()).await?;

    assert_eq!(
        result,
        SubmissionResult::Failed(SubmissionFailure::Rejected {
            status: 500,
            body: "database unavailable".to_string(),
        })
    );
    Ok(())
}

#[tokio::test]
async fn unreachable_backend_is_a_network_failure() -> anyhow::Result<()> {
    let transport = HttpTransport::new(
        "http://127.0.0.1:9/api/values",
        "http://127.0.0.1:9/api/values",
    );
    let gateway = SubmissionGateway::new(transport, GatewayOptions::new());

    let result = gateway.submit(&registration_payload()).await?;

    assert!(matches!(
        result.failure(),
        Some(SubmissionFailure::Network(_))
    ));
    Ok(())
}

#[tokio::test]
async fn slow_backend_rejects_concurrent_second_submit() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/values"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!("ok"))
                .set_delay(Duration::from_millis(100)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let gateway = SubmissionGateway::new(transport_for(&server)?, GatewayOptions::new());
    let payload = registration_payload();

    let (first, second) = tokio::join!(gateway.submit(&payload), gateway.submit(&payload));

    assert!(first?.is_accepted());
    assert!(matches!(second, Err(GatewayError::SubmissionInProgress)));
    Ok(())
}

#[tokio::test]
async fn slow_backend_times_out_with_configured_limit() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(500)))
        .mount(&server)
        .await;

    let options = GatewayOptions::new().with_timeout(Duration::from_millis(50));
    let gateway = SubmissionGateway::new(transport_for(&server)?, options);
    let result = gateway.submit(&registration_payload()).await?;

    assert_eq!(
        result,
        SubmissionResult::Failed(SubmissionFailure::TimedOut(Duration::from_millis(50)))
    );
    Ok(())
}

#[tokio::test]
async fn values_service_reads_string_list() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/values"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["value1", "value2"])))
        .mount(&server)
        .await;

    let service = ValuesService::new(transport_for(&server)?);
    let values = service.fetch_values().await?;

    assert_eq!(values, vec!["value1".to_string(), "value2".to_string()]);
    Ok(())
}

#[tokio::test]
async fn values_service_reports_status_errors() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/values"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let service = ValuesService::new(transport_for(&server)?);
    let result = service.fetch_values().await;

    assert!(matches!(
        result,
        Err(GatewayError::Values(TransportError::Status { status: 404, .. }))
    ));
    Ok(())
}

#[tokio::test]
async fn values_service_rejects_non_list_body() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/values"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"values": []})))
        .mount(&server)
        .await;

    let service = ValuesService::new(transport_for(&server)?);
    let result = service.fetch_values().await;

    assert!(matches!(
        result,
        Err(GatewayError::Values(TransportError::Request(_)))
    ));
    Ok(())
}
