use crate::config::EmailConfig;
use crate::models::{CaseStudy, ContactMessage, EmailError};
use reqwest::Client;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct Address<'a> {
    email: &'a str,
}

#[derive(Debug, Serialize)]
struct Personalization<'a> {
    to: Vec<Address<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    #[serde(rename = "type")]
    content_type: &'a str,
    value: &'a str,
}

/// The JSON payload for the SendGrid v3 `mail/send` endpoint.
#[derive(Debug, Serialize)]
struct SendMailPayload<'a> {
    personalizations: Vec<Personalization<'a>>,
    from: Address<'a>,
    subject: &'a str,
    content: Vec<Content<'a>>,
}

#[derive(Debug, Clone)]
pub struct EmailMessage {
    pub subject: String,
    pub text: String,
    pub html: String,
}

/// Best-effort notification mail. Failures are logged and reported as
/// `false`; they never fail the request that triggered them.
#[derive(Clone)]
pub struct EmailService {
    client: Client,
    config: EmailConfig,
}

impl EmailService {
    pub fn new(config: EmailConfig) -> Result<Self, EmailError> {
        if config.api_key.is_none() {
            tracing::warn!("SENDGRID_API_KEY not set. Email notifications are disabled.");
        }

        // A stalled provider must not hold up the request that is waiting on it
        let client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.timeout)
            .build()?;

        Ok(Self { client, config })
    }

    pub fn is_configured(&self) -> bool {
        self.config.api_key.is_some()
    }

    /// Sends `message` to the configured recipient.
    pub async fn send(&self, message: &EmailMessage) -> Result<(), EmailError> {
        let api_key = self.config.api_key.as_deref().ok_or(EmailError::NotConfigured)?;

        if self.config.dry_run {
            tracing::info!(
                to = %self.config.recipient,
                from = %self.config.sender,
                subject = %message.subject,
                body = %message.text,
                "Email not sent (development mode)"
            );
            return Ok(());
        }

        let payload = SendMailPayload {
            personalizations: vec![Personalization {
                to: vec![Address {
                    email: &self.config.recipient,
                }],
            }],
            from: Address {
                email: &self.config.sender,
            },
            subject: &message.subject,
            content: vec![
                Content {
                    content_type: "text/plain",
                    value: &message.text,
                },
                Content {
                    content_type: "text/html",
                    value: &message.html,
                },
            ],
        };

        let url = format!("{}/v3/mail/send", self.config.api_base.trim_end_matches('/'));
        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to decode error response".to_string());
            return Err(EmailError::ApiError(error_text));
        }

        tracing::info!(to = %self.config.recipient, "Email sent");
        Ok(())
    }

    async fn deliver(&self, message: EmailMessage) -> bool {
        match self.send(&message).await {
            Ok(()) => true,
            Err(EmailError::NotConfigured) => {
                tracing::warn!(subject = %message.subject, "Cannot send email: SENDGRID_API_KEY not set");
                false
            }
            Err(e) => {
                tracing::error!(error = %e, subject = %message.subject, "Failed to send email");
                false
            }
        }
    }

    pub async fn send_contact_notification(&self, contact: &ContactMessage) -> bool {
        self.deliver(contact_email(contact)).await
    }

    pub async fn send_case_study_notification(&self, case_study: &CaseStudy) -> bool {
        self.deliver(case_study_email(case_study)).await
    }
}

pub fn contact_email(contact: &ContactMessage) -> EmailMessage {
    EmailMessage {
        subject: format!("New Contact Form Submission: {}", contact.subject),
        text: format!(
            "Name: {}\nEmail: {}\nSubject: {}\n\nMessage:\n{}\n",
            contact.name, contact.email, contact.subject, contact.message
        ),
        html: format!(
            "<h2>New Contact Form Submission</h2>\
             <p><strong>Name:</strong> {}</p>\
             <p><strong>Email:</strong> {}</p>\
             <p><strong>Subject:</strong> {}</p>\
             <h3>Message:</h3>\
             <p>{}</p>",
            escape_html(&contact.name),
            escape_html(&contact.email),
            escape_html(&contact.subject),
            escape_html(&contact.message).replace('\n', "<br>")
        ),
    }
}

pub fn case_study_email(case_study: &CaseStudy) -> EmailMessage {
    let client = case_study.client_name.as_deref().unwrap_or("N/A");
    let path = format!("/case-studies/{}", case_study.slug);

    EmailMessage {
        subject: format!("New Case Study Added: {}", case_study.title),
        text: format!(
            "A new case study has been added to your portfolio:\n\nTitle: {}\nClient: {}\nURL: {}\n",
            case_study.title, client, path
        ),
        html: format!(
            "<h2>New Case Study Added</h2>\
             <p>A new case study has been added to your portfolio:</p>\
             <p><strong>Title:</strong> {}</p>\
             <p><strong>Client:</strong> {}</p>\
             <p><strong>URL:</strong> <a href=\"{}\">{}</a></p>",
            escape_html(&case_study.title),
            escape_html(client),
            escape_html(&path),
            escape_html(&path)
        ),
    }
}

/// Escape text placed inside an HTML email body.
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
