//! Create a client record in your InvoiceXpress account.
//!
//! Required environment variables:
//! - IX_ACCOUNT - your account subdomain (the `yoursite` in
//!   yoursite.invoicexpress.net)
//! - IX_API_KEY - the token from your account settings area
//!
//! Run with: cargo run --example create_client

use invoicexpress_api::{Credentials, InvoiceXpressClient, Value};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    let account = std::env::var("IX_ACCOUNT")?;
    let api_key = std::env::var("IX_API_KEY")?;

    let client = InvoiceXpressClient::new(Credentials::new(account, api_key)?)?;

    let mut request = client.request("clients.create")?;
    request.set_payload(Value::map([(
        "client",
        Value::map([
            ("name", Value::from("Jane Doe")),
            ("code", Value::from("C-100")),
            ("email", Value::from("jane@example.com")),
            ("country", Value::from("Portugal")),
        ]),
    )]));

    // Inspect the document before it goes over the wire
    println!("payload:\n{}", request.payload_xml()?);

    request.send(None, None).await?;

    if request.success() {
        let id = request
            .response()
            .get("client")
            .and_then(|c| c.get("id"))
            .and_then(Value::as_text)
            .unwrap_or("?");
        println!("✓ created client {id}");
    } else {
        eprintln!("✗ create failed: {}", request.error_message());
    }

    Ok(())
}
