//! Invoice resource scenarios, including the simplified variant.

use invoicexpress_api::Value;
use wiremock::matchers::{body_string_contains, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::common::stubbed_client;

fn invoice_payload() -> Value {
    Value::map([(
        "invoice",
        Value::map([
            ("date", Value::from("05/08/2026")),
            ("due_date", Value::from("04/09/2026")),
            ("client", Value::map([("name", Value::from("Jane Doe"))])),
            (
                "items",
                Value::map([(
                    "item",
                    Value::list([
                        Value::map([
                            ("name", Value::from("Consulting")),
                            ("unit_price", Value::from("75.00")),
                            ("quantity", Value::from(8)),
                        ]),
                        Value::map([
                            ("name", Value::from("Hosting")),
                            ("unit_price", Value::from("12.50")),
                            ("quantity", Value::from(1)),
                        ]),
                    ]),
                )]),
            ),
        ]),
    )])
}

#[tokio::test]
async fn create_invoice_repeats_item_elements() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/invoices.xml"))
        .and(body_string_contains("<item><name>Consulting</name>"))
        .and(body_string_contains("<item><name>Hosting</name>"))
        .respond_with(
            ResponseTemplate::new(201).set_body_string("<invoice><id>5</id></invoice>"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = stubbed_client(&server);
    let mut request = client.request("invoices.create").unwrap();
    request.set_payload(invoice_payload());
    request.send(None, None).await.unwrap();

    assert!(request.success());
    assert_eq!(
        request
            .response()
            .get("invoice")
            .and_then(|i| i.get("id"))
            .and_then(Value::as_text),
        Some("5")
    );
}

#[tokio::test]
async fn change_state_puts_to_nested_path() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/invoices/5/change-state.xml"))
        .and(query_param("api_key", "token123"))
        .and(body_string_contains("<state>finalized</state>"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            "<invoice><id>5</id><state>settled</state></invoice>",
        ))
        .expect(1)
        .mount(&server)
        .await;

    let client = stubbed_client(&server);
    let mut request = client.request("invoices.change-state").unwrap();
    request.set_payload(Value::map([(
        "invoice",
        Value::map([("state", Value::from("finalized"))]),
    )]));
    request.send(Some(5), None).await.unwrap();

    assert!(request.success());
}

#[tokio::test]
async fn email_invoice_puts_message_payload() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/invoices/5/email-invoice.xml"))
        .and(body_string_contains("<to>jane@example.com</to>"))
        .respond_with(ResponseTemplate::new(200).set_body_string(" "))
        .expect(1)
        .mount(&server)
        .await;

    let client = stubbed_client(&server);
    let mut request = client.request("invoices.email-invoice").unwrap();
    request.set_payload(Value::map([(
        "message",
        Value::map([
            ("to", Value::from("jane@example.com")),
            ("subject", Value::from("Your invoice")),
        ]),
    )]));
    request.send(Some(5), None).await.unwrap();

    assert!(request.success());
    assert!(request.response().is_empty());
}

#[tokio::test]
async fn update_invoice_puts_to_resource_path() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/invoices/17.xml"))
        .respond_with(ResponseTemplate::new(200).set_body_string(" "))
        .expect(1)
        .mount(&server)
        .await;

    let client = stubbed_client(&server);
    let mut request = client.request("invoices.update").unwrap();
    request.set_payload(invoice_payload());
    request.send(Some(17), None).await.unwrap();

    assert!(request.success());
}

#[tokio::test]
async fn simplified_invoices_route_to_their_own_resource() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/simplified_invoices.xml"))
        .respond_with(ResponseTemplate::new(201).set_body_string(
            "<simplified_invoice><id>31</id></simplified_invoice>",
        ))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/simplified_invoices/31.xml"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            "<simplified_invoice><id>31</id><status>final</status></simplified_invoice>",
        ))
        .expect(1)
        .mount(&server)
        .await;

    let client = stubbed_client(&server);

    let mut create = client.request("simplified_invoices.create").unwrap();
    create.set_payload(Value::map([(
        "simplified_invoice",
        Value::map([("date", Value::from("05/08/2026"))]),
    )]));
    create.send(None, None).await.unwrap();
    assert!(create.success());

    let mut get = client.request("simplified_invoices.get").unwrap();
    get.send(Some(31), None).await.unwrap();
    assert!(get.success());
    assert_eq!(
        get.response()
            .get("simplified_invoice")
            .and_then(|i| i.get("status"))
            .and_then(Value::as_text),
        Some("final")
    );
}
