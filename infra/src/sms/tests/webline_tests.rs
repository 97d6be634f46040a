//! Tests for the Webline client against a local HTTP server

use std::net::TcpListener;
use std::time::{Duration, Instant};

use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

use wl_core::{ProviderClient, ProviderCredentials, TransportErrorKind};

use crate::sms::{WeblineConfig, WeblineSmsClient};

const SEND_PATH: &str = "/api/v3/sms/send";

fn client_for(server: &MockServer) -> WeblineSmsClient {
    WeblineSmsClient::new(WeblineConfig {
        endpoint: format!("{}{}", server.uri(), SEND_PATH),
        ..Default::default()
    })
    .unwrap()
}

fn credentials() -> ProviderCredentials {
    ProviderCredentials::new("WEBLINE", "secret-key")
}

#[tokio::test]
async fn test_query_parameters_and_bearer_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(SEND_PATH))
        .and(query_param("recipient", "255712345678"))
        .and(query_param("sender_id", "WEBLINE"))
        .and(query_param("message", "Invoice #12 & receipt"))
        .and(header("authorization", "Bearer secret-key"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"status":"success"}"#))
        .expect(1)
        .mount(&server)
        .await;

    let response = client_for(&server)
        .deliver("255712345678", &credentials(), "Invoice #12 & receipt")
        .await
        .unwrap();

    assert_eq!(response.status, 200);
    assert_eq!(response.body, r#"{"status":"success"}"#);
}

#[tokio::test]
async fn test_server_error_is_still_a_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(SEND_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&server)
        .await;

    let response = client_for(&server)
        .deliver("255712345678", &credentials(), "Hello")
        .await
        .unwrap();

    assert_eq!(response.status, 500);
    assert_eq!(response.body, "Internal Server Error");
}

#[tokio::test]
async fn test_redirect_followed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(SEND_PATH))
        .respond_with(
            ResponseTemplate::new(307).insert_header("location", format!("{}/v4/send", server.uri())),
        )
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v4/send"))
        .respond_with(ResponseTemplate::new(200).set_body_string("moved ok"))
        .mount(&server)
        .await;

    let response = client_for(&server)
        .deliver("255712345678", &credentials(), "Hello")
        .await
        .unwrap();

    assert_eq!(response.body, "moved ok");
}

#[tokio::test]
async fn test_found_redirect_keeps_post() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(SEND_PATH))
        .respond_with(
            ResponseTemplate::new(302).insert_header("location", format!("{}/v4/send", server.uri())),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v4/send"))
        .and(header("authorization", "Bearer secret-key"))
        .respond_with(ResponseTemplate::new(200).set_body_string("posted"))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v4/send"))
        .respond_with(ResponseTemplate::new(200).set_body_string("downgraded to GET"))
        .expect(0)
        .mount(&server)
        .await;

    let response = client_for(&server)
        .deliver("255712345678", &credentials(), "Hello")
        .await
        .unwrap();

    assert_eq!(response.status, 200);
    assert_eq!(response.body, "posted");
}

#[tokio::test]
async fn test_moved_permanently_relative_location_keeps_post() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(SEND_PATH))
        .respond_with(ResponseTemplate::new(301).insert_header("location", "/v4/send"))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v4/send"))
        .respond_with(ResponseTemplate::new(202).set_body_string("queued"))
        .expect(1)
        .mount(&server)
        .await;

    let response = client_for(&server)
        .deliver("255712345678", &credentials(), "Hello")
        .await
        .unwrap();

    assert_eq!(response.status, 202);
    assert_eq!(response.body, "queued");
}

#[tokio::test]
async fn test_cross_origin_redirect_drops_bearer_token() {
    let gateway = MockServer::start().await;
    let mirror = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(SEND_PATH))
        .respond_with(
            ResponseTemplate::new(302).insert_header("location", format!("{}/send", mirror.uri())),
        )
        .mount(&gateway)
        .await;
    Mock::given(method("POST"))
        .and(path("/send"))
        .and(|req: &Request| !req.headers.contains_key("authorization"))
        .respond_with(ResponseTemplate::new(200).set_body_string("mirror"))
        .expect(1)
        .mount(&mirror)
        .await;

    let response = client_for(&gateway)
        .deliver("255712345678", &credentials(), "Hello")
        .await
        .unwrap();

    assert_eq!(response.body, "mirror");
}

#[tokio::test]
async fn test_redirect_without_location_is_returned() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(SEND_PATH))
        .respond_with(ResponseTemplate::new(302).set_body_string("nowhere"))
        .mount(&server)
        .await;

    let response = client_for(&server)
        .deliver("255712345678", &credentials(), "Hello")
        .await
        .unwrap();

    assert_eq!(response.status, 302);
    assert_eq!(response.body, "nowhere");
}

#[tokio::test]
async fn test_redirect_loop_is_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(SEND_PATH))
        .respond_with(
            ResponseTemplate::new(307)
                .insert_header("location", format!("{}{}", server.uri(), SEND_PATH)),
        )
        .mount(&server)
        .await;

    let error = client_for(&server)
        .deliver("255712345678", &credentials(), "Hello")
        .await
        .unwrap_err();

    assert_eq!(error.kind, TransportErrorKind::Redirect);
}

#[tokio::test]
async fn test_connection_refused_is_connect_error() {
    let client = WeblineSmsClient::new(WeblineConfig {
        endpoint: format!("http://127.0.0.1:1{}", SEND_PATH),
        max_retries: 2,
        retry_delay_ms: 1,
    })
    .unwrap();

    let error = client
        .deliver("255712345678", &credentials(), "Hello")
        .await
        .unwrap_err();

    assert_eq!(error.kind, TransportErrorKind::Connect);
    assert!(!error.detail.is_empty());
}

/// Reserve a local port with nothing listening on it yet
fn free_port() -> std::net::SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap()
}

/// Start a gateway on `addr` once `delay` has passed
fn gateway_after(addr: std::net::SocketAddr, delay: Duration) -> tokio::task::JoinHandle<MockServer> {
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        let server = MockServer::builder()
            .listener(TcpListener::bind(addr).unwrap())
            .start()
            .await;
        Mock::given(method("POST"))
            .and(path(SEND_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_string("accepted"))
            .mount(&server)
            .await;
        server
    })
}

#[tokio::test]
async fn test_connect_failure_then_success_is_retried() {
    let addr = free_port();
    let gateway = gateway_after(addr, Duration::from_millis(100));

    let client = WeblineSmsClient::new(WeblineConfig {
        endpoint: format!("http://{}{}", addr, SEND_PATH),
        max_retries: 3,
        retry_delay_ms: 400,
    })
    .unwrap();

    let started = Instant::now();
    let response = client
        .deliver("255712345678", &credentials(), "Hello")
        .await
        .unwrap();

    assert_eq!(response.body, "accepted");
    // first attempt was refused, the second one after the backoff landed
    assert!(started.elapsed() >= Duration::from_millis(400));
    let server = gateway.await.unwrap();
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_connect_failure_without_retries_fails_once() {
    let addr = free_port();
    let gateway = gateway_after(addr, Duration::from_millis(100));

    let client = WeblineSmsClient::new(WeblineConfig {
        endpoint: format!("http://{}{}", addr, SEND_PATH),
        max_retries: 0,
        retry_delay_ms: 400,
    })
    .unwrap();

    let error = client
        .deliver("255712345678", &credentials(), "Hello")
        .await
        .unwrap_err();

    assert_eq!(error.kind, TransportErrorKind::Connect);
    let server = gateway.await.unwrap();
    assert!(server.received_requests().await.unwrap().is_empty());
}
