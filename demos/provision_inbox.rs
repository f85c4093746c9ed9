//! Provision a disposable inbox and poll it once.
//!
//! Run with: `cargo run --example provision_inbox`

use integrations_tempmail::{create_client_from_env, CreateAccountRequest, TempMailClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = create_client_from_env()?;

    let session = client.create_account(CreateAccountRequest::random()).await?;
    println!("inbox ready: {}", session.email_address);
    if let Some(expires_at) = session.expires_at {
        println!("expires at: {}", expires_at);
    }

    let messages = client.list_messages(&session).await;
    println!("{} message(s) waiting", messages.len());

    for summary in &messages {
        println!("- [{}] {} <{}>", summary.id, summary.subject, summary.sender_address);
        if let Some(detail) = client.message_detail(&session, &summary.id).await {
            let report = client
                .analyze_message(&detail.summary.subject, &detail.body)
                .await;
            println!(
                "  safety {}/100, phishing: {}",
                report.safety_score, report.is_phishing
            );
        }
    }

    Ok(())
}
