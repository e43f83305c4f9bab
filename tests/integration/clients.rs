//! Client resource scenarios through the public crate surface.

use invoicexpress_api::Value;
use wiremock::matchers::{body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::common::{authorization_header, stubbed_client};

#[tokio::test]
async fn create_client_posts_xml_payload() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/clients.xml"))
        .and(query_param("api_key", "token123"))
        .and(header("Authorization", authorization_header().as_str()))
        .and(header("Content-Type", "application/xml; charset=utf-8"))
        .and(body_string_contains(
            "<client><name>Jane Doe</name><email>jane@example.com</email></client>",
        ))
        .respond_with(ResponseTemplate::new(201).set_body_string(
            "<client><id>13</id><name>Jane Doe</name></client>",
        ))
        .expect(1)
        .mount(&server)
        .await;

    let client = stubbed_client(&server);
    let mut request = client.request("clients.create").unwrap();
    request.set_payload(Value::map([(
        "client",
        Value::map([
            ("name", Value::from("Jane Doe")),
            ("email", Value::from("jane@example.com")),
        ]),
    )]));
    request.send(None, None).await.unwrap();

    assert!(request.success());
    assert_eq!(
        request
            .response()
            .get("client")
            .and_then(|c| c.get("id"))
            .and_then(Value::as_text),
        Some("13")
    );
}

#[tokio::test]
async fn get_client_uses_get_without_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/clients/9.xml"))
        .and(query_param("api_key", "token123"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            "<client><id>9</id><name>Jane Doe</name><balance>120.50</balance></client>",
        ))
        .expect(1)
        .mount(&server)
        .await;

    let client = stubbed_client(&server);
    let mut request = client.request("clients.get").unwrap();
    request.send(Some(9), None).await.unwrap();

    assert!(request.success());
    let decoded = request.response().get("client").unwrap();
    assert_eq!(decoded.get("balance").and_then(Value::as_text), Some("120.50"));
}

#[tokio::test]
async fn find_by_name_sends_lookup_before_api_key() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/clients/find-by-name.xml"))
        .and(query_param("client_name", "Jane Doe"))
        .and(query_param("api_key", "token123"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            "<client><id>9</id><name>Jane Doe</name></client>",
        ))
        .expect(1)
        .mount(&server)
        .await;

    let client = stubbed_client(&server);
    let mut request = client.request("clients.find-by-name").unwrap();
    request.send(None, Some("Jane Doe")).await.unwrap();

    assert!(request.success());
    assert_eq!(
        request
            .response()
            .get("client")
            .and_then(|c| c.get("id"))
            .and_then(Value::as_text),
        Some("9")
    );
}

#[tokio::test]
async fn find_by_code_sends_client_code() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/clients/find-by-code.xml"))
        .and(query_param("client_code", "C-100"))
        .and(query_param("api_key", "token123"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string("<client><id>4</id></client>"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = stubbed_client(&server);
    let mut request = client.request("clients.find-by-code").unwrap();
    request.send(None, Some("C-100")).await.unwrap();

    assert!(request.success());
}

#[tokio::test]
async fn client_invoices_listing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/clients/9/invoices.xml"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            "<invoices><invoice><id>1</id></invoice><invoice><id>2</id></invoice></invoices>",
        ))
        .expect(1)
        .mount(&server)
        .await;

    let client = stubbed_client(&server);
    let mut request = client.request("clients.invoices").unwrap();
    request.send(Some(9), None).await.unwrap();

    assert!(request.success());
    let invoices = request
        .response()
        .get("invoices")
        .and_then(|v| v.get("invoice"))
        .and_then(Value::as_list)
        .unwrap();
    assert_eq!(invoices.len(), 2);
}

#[tokio::test]
async fn create_credit_note_splits_action_into_path_segments() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/clients/42/create/credit-note.xml"))
        .and(query_param("api_key", "token123"))
        .respond_with(
            ResponseTemplate::new(201).set_body_string("<credit_note><id>77</id></credit_note>"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = stubbed_client(&server);
    let mut request = client.request("clients.create-credit-note").unwrap();
    request.set_payload(Value::map([(
        "credit_note",
        Value::map([("observations", Value::from("returned goods"))]),
    )]));
    request.send(Some(42), None).await.unwrap();

    assert!(request.success());
    assert_eq!(
        request
            .response()
            .get("credit_note")
            .and_then(|c| c.get("id"))
            .and_then(Value::as_text),
        Some("77")
    );
}
