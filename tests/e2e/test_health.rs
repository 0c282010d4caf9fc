use crate::e2e::helpers;

use helpers::fake_azure::UpstreamReply;
use helpers::{sample_audio, TestContext};
use hyper::StatusCode;
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_report_liveness(ctx: &mut TestContext) {
    let response = ctx.client.get("/health").await.unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(response.body_bytes, b"OK");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_be_ready_with_credential(ctx: &mut TestContext) {
    let response = ctx.client.get("/health/ready").await.unwrap();

    response.assert_status(StatusCode::OK);
    let body = response.body.as_ref().unwrap();
    assert_eq!(body["status"], "ready");
    assert_eq!(body["region"], "eastus");
    assert!(ctx.upstream.requests().is_empty());
}

#[tokio::test]
async fn it_should_not_be_ready_without_credential() {
    let ctx = TestContext::start(None, UpstreamReply::Audio(sample_audio())).await;

    let response = ctx.client.get("/health/ready").await.unwrap();

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(response.body.as_ref().unwrap()["tts"], "missing_credential");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_generate_request_id(ctx: &mut TestContext) {
    let response = ctx.client.get("/health").await.unwrap();

    let request_id = response.header("x-request-id").expect("missing x-request-id");
    assert_eq!(request_id.len(), 36);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_echo_client_request_id(ctx: &mut TestContext) {
    let response = ctx
        .client
        .get_with_headers("/health", &[("x-request-id", "playground-123")])
        .await
        .unwrap();

    response.assert_header("x-request-id", "playground-123");
}
