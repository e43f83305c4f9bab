//! Failure semantics: preconditions raise, per-request failures report.

use std::time::Duration;

use invoicexpress_api::{
    ClientConfig, Credentials, ErrorKind, Failure, InvoiceXpressClient, Value,
};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::common::stubbed_client;

#[test]
fn empty_credentials_are_rejected_before_any_request_exists() {
    for (account, api_key) in [("", "token"), ("yoursite", ""), ("", "")] {
        let err = Credentials::new(account, api_key).unwrap_err();
        assert!(
            matches!(err.kind, ErrorKind::Config(_)),
            "expected configuration error for ({account:?}, {api_key:?})"
        );
    }
}

#[tokio::test]
async fn unsupported_method_raises_without_touching_the_network() {
    let server = MockServer::start().await;
    // no mocks mounted: any request would 404 and trip `expect` checks

    let client = stubbed_client(&server);
    let err = client.request("clients.destroy").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnsupportedMethod { .. }));

    let err = client.request("receipts.create").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnsupportedMethod { .. }));
}

#[tokio::test]
async fn missing_id_raises_before_dispatch() {
    let server = MockServer::start().await;
    let client = stubbed_client(&server);

    let mut request = client.request("clients.get").unwrap();
    let err = request.send(None, None).await.unwrap_err();
    assert!(matches!(err.kind, ErrorKind::MissingResourceId { .. }));

    let mut request = client.request("clients.find-by-name").unwrap();
    let err = request.send(None, None).await.unwrap_err();
    assert!(matches!(err.kind, ErrorKind::MissingLookupParam { .. }));
}

#[tokio::test]
async fn api_error_body_sets_message_and_clears_success() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/clients.xml"))
        .respond_with(ResponseTemplate::new(422).set_body_string("<error>Invalid client</error>"))
        .mount(&server)
        .await;

    let client = stubbed_client(&server);
    let mut request = client.request("clients.create").unwrap();
    request.set_payload(Value::map([("client", Value::map([("name", Value::from(""))]))]));
    request.send(None, None).await.unwrap();

    assert!(!request.success());
    assert_eq!(request.error_message(), "Invalid client");
}

#[tokio::test]
async fn timeout_reports_a_transport_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/clients.xml"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
        .mount(&server)
        .await;

    let credentials = Credentials::new("yoursite", "token123").unwrap();
    let client = InvoiceXpressClient::with_config(
        credentials,
        ClientConfig::builder()
            .with_timeout(Duration::from_millis(100))
            .build(),
    )
    .unwrap()
    .with_endpoint(server.uri());

    let mut request = client.request("clients.create").unwrap();
    request.send(None, None).await.unwrap();

    assert!(!request.success());
    assert!(matches!(request.failure(), Some(Failure::Transport(_))));
    assert!(request.error_message().contains("transport error"));
    assert!(request.response().is_empty());
}

#[tokio::test]
async fn undecodable_body_reports_a_decode_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/clients/9.xml"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"client\":{\"id\":9}}"))
        .mount(&server)
        .await;

    let client = stubbed_client(&server);
    let mut request = client.request("clients.get").unwrap();
    request.send(Some(9), None).await.unwrap();

    assert!(!request.success());
    assert!(matches!(request.failure(), Some(Failure::Decode(_))));
    assert!(request.response().is_empty());
}

#[tokio::test]
async fn status_success_is_integer_based() {
    let server = MockServer::start().await;
    for (status, expect_success) in [(200u16, true), (201, true), (202, false), (404, false)] {
        let server_path = format!("/clients/{status}.xml");
        Mock::given(method("GET"))
            .and(path(server_path.as_str()))
            .respond_with(
                ResponseTemplate::new(status).set_body_string("<client><id>1</id></client>"),
            )
            .mount(&server)
            .await;

        let client = stubbed_client(&server);
        let mut request = client.request("clients.get").unwrap();
        request.send(Some(status as u64), None).await.unwrap();
        assert_eq!(
            request.success(),
            expect_success,
            "status {status} should map to success={expect_success}"
        );
    }
}
