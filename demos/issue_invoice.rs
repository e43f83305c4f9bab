//! Create an invoice, finalize it, and email it to the client.
//!
//! Required environment variables:
//! - IX_ACCOUNT - your account subdomain
//! - IX_API_KEY - the token from your account settings area
//!
//! Run with: cargo run --example issue_invoice

use invoicexpress_api::{Credentials, InvoiceXpressClient, Value};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let account = std::env::var("IX_ACCOUNT")?;
    let api_key = std::env::var("IX_API_KEY")?;

    let client = InvoiceXpressClient::new(Credentials::new(account, api_key)?)?;

    // 1. Create a draft invoice
    let mut create = client.request("invoices.create")?;
    create.set_payload(Value::map([(
        "invoice",
        Value::map([
            ("date", Value::from("05/08/2026")),
            ("due_date", Value::from("04/09/2026")),
            ("client", Value::map([("name", Value::from("Jane Doe"))])),
            (
                "items",
                Value::map([(
                    "item",
                    Value::list([Value::map([
                        ("name", Value::from("Consulting")),
                        ("description", Value::from("August retainer")),
                        ("unit_price", Value::from("75.00")),
                        ("quantity", Value::from(8)),
                    ])]),
                )]),
            ),
        ]),
    )]));
    create.send(None, None).await?;

    if !create.success() {
        eprintln!("✗ create failed: {}", create.error_message());
        return Ok(());
    }

    let id: u64 = create
        .response()
        .get("invoice")
        .and_then(|i| i.get("id"))
        .and_then(Value::as_text)
        .and_then(|s| s.parse().ok())
        .ok_or("invoice id missing from response")?;
    println!("✓ created draft invoice {id}");

    // 2. Finalize it
    let mut finalize = client.request("invoices.change-state")?;
    finalize.set_payload(Value::map([(
        "invoice",
        Value::map([("state", Value::from("finalized"))]),
    )]));
    finalize.send(Some(id), None).await?;

    if !finalize.success() {
        eprintln!("✗ finalize failed: {}", finalize.error_message());
        return Ok(());
    }
    println!("✓ finalized invoice {id}");

    // 3. Email it
    let mut email = client.request("invoices.email-invoice")?;
    email.set_payload(Value::map([(
        "message",
        Value::map([
            ("to", Value::from("jane@example.com")),
            ("subject", Value::from("Your invoice")),
            ("body", Value::from("Please find your invoice attached.")),
        ]),
    )]));
    email.send(Some(id), None).await?;

    if email.success() {
        println!("✓ emailed invoice {id}");
    } else {
        eprintln!("✗ email failed: {}", email.error_message());
    }

    Ok(())
}
