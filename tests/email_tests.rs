use std::time::{Duration, Instant};

use portfolio_cms::{
    config::EmailConfig,
    models::EmailError,
    services::{EmailMessage, EmailService},
};
use tokio::net::TcpListener;

fn message() -> EmailMessage {
    EmailMessage {
        subject: "Subject".to_string(),
        text: "Body".to_string(),
        html: "<p>Body</p>".to_string(),
    }
}

fn configured(api_base: &str) -> EmailConfig {
    EmailConfig {
        api_key: Some("test-key".to_string()),
        api_base: api_base.to_string(),
        sender: "site@example.com".to_string(),
        recipient: "owner@example.com".to_string(),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_send_without_api_key_is_not_configured() {
    let service = EmailService::new(EmailConfig::default()).unwrap();
    assert!(!service.is_configured());

    let result = service.send(&message()).await;
    assert!(matches!(result, Err(EmailError::NotConfigured)));
}

#[tokio::test]
async fn test_dry_run_skips_delivery() {
    // Unroutable, so a real request would fail
    let service = EmailService::new(EmailConfig {
        dry_run: true,
        ..configured("http://127.0.0.1:9")
    })
    .unwrap();
    assert!(service.is_configured());

    service.send(&message()).await.unwrap();
}

#[tokio::test]
async fn test_failed_delivery_is_reported() {
    let service = EmailService::new(configured("http://127.0.0.1:9")).unwrap();

    let result = service.send(&message()).await;
    assert!(matches!(result, Err(EmailError::Request(_))));
}

#[tokio::test]
async fn test_stalled_provider_times_out() {
    // Accepts connections but never answers
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            held.push(socket);
        }
    });

    let service = EmailService::new(EmailConfig {
        timeout: Duration::from_millis(300),
        ..configured(&format!("http://{}", addr))
    })
    .unwrap();

    let started = Instant::now();
    let result = tokio::time::timeout(Duration::from_secs(10), service.send(&message()))
        .await
        .expect("send should give up on its own");

    assert!(matches!(result, Err(EmailError::Request(ref e)) if e.is_timeout()));
    assert!(started.elapsed() < Duration::from_secs(5));

    server.abort();
}
