use clinance::prelude::*;
use mockito::{Matcher, Server};
use reqwest::StatusCode;

use crate::common::{public_client, signed_client};

const TIME_BODY: &str = r#"{"serverTime":1499827319559}"#;

#[tokio::test]
async fn test_rate_limited_request_is_retried() {
    let mut server = Server::new_async().await;
    let limited = server
        .mock("GET", "/api/v3/time")
        .with_status(429)
        .with_header("Retry-After", "0")
        .expect(1)
        .create_async()
        .await;
    let ok = server
        .mock("GET", "/api/v3/time")
        .with_status(200)
        .with_body(TIME_BODY)
        .expect(1)
        .create_async()
        .await;

    let client = public_client(&server.url());
    assert_eq!(client.server_time().await.unwrap(), 1499827319559);

    limited.assert_async().await;
    ok.assert_async().await;
}

#[tokio::test]
async fn test_rate_limit_exceeded_after_retries() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v3/time")
        .with_status(418)
        .expect(2)
        .create_async()
        .await;

    let client = public_client(&server.url());
    let err = client.server_time().await.unwrap_err();

    mock.assert_async().await;
    assert!(matches!(err, AppError::RateLimitExceeded));
}

#[tokio::test]
async fn test_retries_disabled() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v3/time")
        .with_status(429)
        .expect(1)
        .create_async()
        .await;

    let mut config = Config::for_base_url(server.url());
    config.retry = RetryConfig::disabled();
    let client = Client::new(config).unwrap();
    let err = client.server_time().await.unwrap_err();

    mock.assert_async().await;
    assert!(matches!(err, AppError::RateLimitExceeded));
}

#[tokio::test]
async fn test_api_error_body_is_mapped() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/v3/depth")
        .match_query(Matcher::Any)
        .with_status(400)
        .with_body(r#"{"code":-1100,"msg":"Illegal characters found in parameter 'limit'."}"#)
        .create_async()
        .await;

    let client = public_client(&server.url());
    let err = client
        .depth(&Symbol::new("ETH", "BTC"), 5)
        .await
        .unwrap_err();
    match err {
        AppError::Api {
            status,
            code,
            message,
        } => {
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(code, -1100);
            assert!(message.contains("limit"));
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[tokio::test]
async fn test_unauthorized_and_server_errors() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/v3/account")
        .match_query(Matcher::Any)
        .with_status(401)
        .with_body(r#"{"code":-2015,"msg":"Invalid API-key, IP, or permissions for action."}"#)
        .create_async()
        .await;
    server
        .mock("GET", "/api/v3/time")
        .with_status(503)
        .with_body("Service Unavailable")
        .create_async()
        .await;

    let client = signed_client(&server.url());
    assert!(matches!(
        client.account().await.unwrap_err(),
        AppError::Unauthorized
    ));
    assert!(matches!(
        client.server_time().await.unwrap_err(),
        AppError::Unexpected(StatusCode::SERVICE_UNAVAILABLE)
    ));
}

#[tokio::test]
async fn test_undecodable_answer() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/api/v3/time")
        .with_status(200)
        .with_body("not json")
        .create_async()
        .await;

    let client = public_client(&server.url());
    assert!(matches!(
        client.server_time().await.unwrap_err(),
        AppError::Deserialization(_)
    ));
}

#[tokio::test]
async fn test_timestamp_rejection_resyncs_clock_once() {
    let mut server = Server::new_async().await;
    let rejected = server
        .mock("GET", "/api/v3/account")
        .match_query(Matcher::Any)
        .with_status(400)
        .with_body(r#"{"code":-1021,"msg":"Timestamp for this request is outside of the recvWindow."}"#)
        .expect(1)
        .create_async()
        .await;
    let time = server
        .mock("GET", "/api/v3/time")
        .with_status(200)
        .with_body(TIME_BODY)
        .expect(1)
        .create_async()
        .await;
    let accepted = server
        .mock("GET", "/api/v3/account")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"canTrade":true,"balances":[]}"#)
        .expect(1)
        .create_async()
        .await;

    let client = signed_client(&server.url());
    let account = client.account().await.unwrap();

    rejected.assert_async().await;
    time.assert_async().await;
    accepted.assert_async().await;
    assert!(account.balances.is_empty());
    assert!(client.http_client().auth().time_offset().await < 0);
}

#[tokio::test]
async fn test_timestamp_rejection_after_resync_is_returned() {
    let mut server = Server::new_async().await;
    let rejected = server
        .mock("GET", "/api/v3/account")
        .match_query(Matcher::Any)
        .with_status(400)
        .with_body(r#"{"code":-1021,"msg":"Timestamp for this request is ahead of the server's time."}"#)
        .expect(2)
        .create_async()
        .await;
    server
        .mock("GET", "/api/v3/time")
        .with_status(200)
        .with_body(TIME_BODY)
        .create_async()
        .await;

    let client = signed_client(&server.url());
    let err = client.account().await.unwrap_err();

    rejected.assert_async().await;
    assert!(matches!(err, AppError::TimestampOutOfSync));
}
