use std::sync::Arc;

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use wizard_config::WizardConfig;
use wizard_gateway::{GatewayOptions, HttpTransport, SubmissionGateway};
use wizard_operations::WizardEvent;
use wizard_operations::WizardSession;
use wizard_operations::registration::{
    FOOD_FIELD, IDENTITY_STEP, NAME_FIELD, QUESTIONS_STEP, registration_wizard,
};

fn answer(step: &str, field: &str, value: &str) -> WizardEvent {
    WizardEvent::FieldChanged {
        step: step.to_string(),
        field: field.to_string(),
        value: value.to_string(),
    }
}

#[tokio::test]
async fn registration_posts_form_groups_to_values_endpoint() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/values"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "identityFormGroup": {"name": "Ann"},
            "questionsFormGroup": {"food": "Pasta"}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!("registered")))
        .expect(1)
        .mount(&server)
        .await;

    let config = WizardConfig::default().with_api_url(format!("{}/api", server.uri()))?;
    let transport = HttpTransport::from_config(config.api())?;
    let gateway = Arc::new(SubmissionGateway::new(transport, GatewayOptions::new()));
    let mut session = WizardSession::new(registration_wizard()?, gateway);

    session.handle(answer(IDENTITY_STEP, NAME_FIELD, "Ann"))?;
    session.handle(WizardEvent::Next)?;
    session.handle(answer(QUESTIONS_STEP, FOOD_FIELD, "Pasta"))?;
    let result = session.submit().await?;

    assert!(result.is_accepted());
    assert_eq!(result.response(), Some(&json!("registered")));
    Ok(())
}
