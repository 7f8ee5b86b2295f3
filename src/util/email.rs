use crate::config::{ConfigError, EmailConfig};
use crate::model::contact::ContactRecord;
use crate::model::quote::QuoteRecord;
use crate::service::pricing;
use async_trait::async_trait;
use lettre::{
    message::{header::ContentType, Mailbox},
    transport::smtp::{
        authentication::Credentials,
        client::{Tls, TlsParameters},
    },
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use tracing::{error, info, instrument};

/// Email service errors
#[derive(Debug, thiserror::Error)]
pub enum EmailError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("SMTP error: {0}")]
    SmtpError(String),

    #[error("Message building error: {0}")]
    MessageError(String),

    #[error("Address error: {0}")]
    AddressError(String),
}

impl From<ConfigError> for EmailError {
    fn from(err: ConfigError) -> Self {
        EmailError::ConfigError(err.to_string())
    }
}

/// Outbound notifications for accepted submissions. Injected into the
/// services so tests can substitute a recording double and a real email
/// provider can be swapped in without touching the submission pipeline.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn quote_received(&self, record: &QuoteRecord) -> Result<(), EmailError>;
    async fn contact_received(&self, record: &ContactRecord) -> Result<(), EmailError>;
}

/// Email message builder
#[derive(Debug, Clone)]
pub struct EmailMessage {
    pub to: String,
    pub subject: String,
    pub text_body: Option<String>,
    pub html_body: Option<String>,
}

impl EmailMessage {
    pub fn new(to: String, subject: String) -> Self {
        Self {
            to,
            subject,
            text_body: None,
            html_body: None,
        }
    }

    pub fn with_text_body(mut self, body: String) -> Self {
        self.text_body = Some(body);
        self
    }

    pub fn with_html_body(mut self, body: String) -> Self {
        self.html_body = Some(body);
        self
    }
}

/// SMTP-backed notifier
pub struct SmtpNotifier {
    pub config: EmailConfig,
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpNotifier {
    /// Create a new SMTP notifier
    #[instrument(skip(config), fields(host = %config.smtp_host, port = config.smtp_port))]
    pub fn new(config: EmailConfig) -> Result<Self, EmailError> {
        info!("Initializing SMTP notifier");

        config.validate().map_err(EmailError::from)?;

        let mut transport_builder =
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.smtp_host)
                .port(config.smtp_port)
                .timeout(Some(std::time::Duration::from_secs(
                    config.connection_timeout_secs,
                )));

        if config.use_tls {
            let tls_parameters = TlsParameters::new(config.smtp_host.clone())
                .map_err(|e| EmailError::ConfigError(format!("TLS configuration error: {}", e)))?;

            if config.use_starttls {
                transport_builder = transport_builder.tls(Tls::Required(tls_parameters));
            } else {
                transport_builder = transport_builder.tls(Tls::Wrapper(tls_parameters));
            }
        } else {
            transport_builder = transport_builder.tls(Tls::None);
        }

        if !config.smtp_username.is_empty() && !config.smtp_password.is_empty() {
            let credentials = Credentials::new(
                config.smtp_username.clone(),
                config.smtp_password.clone(),
            );
            transport_builder = transport_builder.credentials(credentials);
        }

        let transport = transport_builder.build();

        info!("SMTP notifier initialized successfully");
        Ok(Self { config, transport })
    }

    /// Send an email message
    #[instrument(skip(self, message), fields(to = %message.to, subject = %message.subject))]
    async fn send_email(&self, message: EmailMessage) -> Result<(), EmailError> {
        info!("Sending email to: {}", message.to);

        let email_message = self.build_message(message)?;

        self.transport.send(email_message).await.map_err(|e| {
            error!("Failed to send email: {}", e);
            EmailError::SmtpError(format!("Failed to send email: {}", e))
        })?;

        info!("Email sent successfully");
        Ok(())
    }

    /// Build a lettre Message from EmailMessage
    fn build_message(&self, email_message: EmailMessage) -> Result<Message, EmailError> {
        let from_mailbox: Mailbox =
            format!("{} <{}>", self.config.from_name, self.config.from_email)
                .parse()
                .map_err(|e| EmailError::AddressError(format!("Invalid from address: {}", e)))?;

        let to_mailbox: Mailbox = email_message
            .to
            .parse()
            .map_err(|e| EmailError::AddressError(format!("Invalid to address: {}", e)))?;

        let message_builder = Message::builder()
            .from(from_mailbox)
            .to(to_mailbox)
            .subject(&email_message.subject);

        match (email_message.text_body, email_message.html_body) {
            (Some(text), Some(html)) => message_builder
                .multipart(
                    lettre::message::MultiPart::alternative()
                        .singlepart(
                            lettre::message::SinglePart::builder()
                                .header(ContentType::TEXT_PLAIN)
                                .body(text),
                        )
                        .singlepart(
                            lettre::message::SinglePart::builder()
                                .header(ContentType::TEXT_HTML)
                                .body(html),
                        ),
                )
                .map_err(|e| {
                    EmailError::MessageError(format!("Failed to build multipart message: {}", e))
                }),
            (Some(text), None) => message_builder
                .body(text)
                .map_err(|e| EmailError::MessageError(format!("Failed to build text message: {}", e))),
            (None, Some(html)) => message_builder
                .singlepart(
                    lettre::message::SinglePart::builder()
                        .header(ContentType::TEXT_HTML)
                        .body(html),
                )
                .map_err(|e| EmailError::MessageError(format!("Failed to build HTML message: {}", e))),
            (None, None) => Err(EmailError::MessageError(
                "No message body provided".to_string(),
            )),
        }
    }

    fn quote_confirmation_text(&self, record: &QuoteRecord) -> String {
        let range = pricing::estimate_range(record.estimated_cost);
        format!(
            r#"Dear {name},

Thank you for requesting a quote from {company}!

Quote ID: {quote_id}
Estimated Cost Range: ${low} - ${high}

Our team will contact you within 24 hours to schedule an in-home estimate.

Best regards,
The {company} Team

---
This is an automated message. Please do not reply to this email."#,
            name = record.request.customer_name(),
            company = self.config.from_name,
            quote_id = record.id,
            low = range.low,
            high = range.high,
        )
    }

    fn quote_confirmation_html(&self, record: &QuoteRecord) -> String {
        let range = pricing::estimate_range(record.estimated_cost);
        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<body style="font-family: Arial, sans-serif; color: #333; max-width: 600px; margin: 0 auto; padding: 20px;">
    <h1>{company}</h1>
    <p>Dear {name},</p>
    <p>Thank you for requesting a quote from {company}!</p>
    <p><strong>Quote ID:</strong> {quote_id}<br>
       <strong>Estimated Cost Range:</strong> ${low} - ${high}</p>
    <p>Our team will contact you within 24 hours to schedule an in-home estimate.</p>
    <p>Best regards,<br>The {company} Team</p>
    <p style="font-size: 12px; color: #6c757d;">This is an automated message. Please do not reply to this email.</p>
</body>
</html>"#,
            company = html_escape::encode_text(&self.config.from_name),
            name = html_escape::encode_text(&record.request.customer_name()),
            quote_id = html_escape::encode_text(&record.id),
            low = range.low,
            high = range.high,
        )
    }

    fn quote_internal_text(&self, record: &QuoteRecord) -> String {
        let request = &record.request;
        format!(
            r#"New Quote Request Received

Quote ID: {quote_id}
Customer: {name}
Email: {email}
Phone: {phone}
Move Type: {move_type}
Move Date: {move_date}
From: {from_address}, {from_city}, {from_state} {from_zip}
To: {to_address}, {to_city}, {to_state} {to_zip}
Property Size: {home_size}
Estimated Cost: ${estimate}

Additional Services:
- Packing: {packing}
- Storage: {storage}

Special Items: {special_items}
Additional Notes: {notes}"#,
            quote_id = record.id,
            name = request.customer_name(),
            email = request.email,
            phone = request.phone,
            move_type = request.move_type.as_str(),
            move_date = request.move_date,
            from_address = request.from_address,
            from_city = request.from_city,
            from_state = request.from_state,
            from_zip = request.from_zip,
            to_address = request.to_address,
            to_city = request.to_city,
            to_state = request.to_state,
            to_zip = request.to_zip,
            home_size = request.home_size.as_str(),
            estimate = record.estimated_cost,
            packing = if request.packing_service { "Yes" } else { "No" },
            storage = if request.storage_service { "Yes" } else { "No" },
            special_items = request.special_items.as_deref().unwrap_or("None"),
            notes = request.additional_notes.as_deref().unwrap_or("None"),
        )
    }

    fn contact_confirmation_text(&self, record: &ContactRecord) -> String {
        format!(
            r#"Dear {name},

Thank you for contacting {company}!

Contact ID: {contact_id}
Subject: {subject}

We have received your message and will respond within 24 hours.

Best regards,
The {company} Team"#,
            name = record.message.name,
            company = self.config.from_name,
            contact_id = record.id,
            subject = record.message.subject,
        )
    }

    fn contact_internal_text(&self, record: &ContactRecord) -> String {
        format!(
            r#"New Contact Form Submission

Contact ID: {contact_id}
Name: {name}
Email: {email}
Phone: {phone}
Subject: {subject}

Message:
{message}

Submitted: {submitted}"#,
            contact_id = record.id,
            name = record.message.name,
            email = record.message.email,
            phone = record.message.phone,
            subject = record.message.subject,
            message = record.message.message,
            submitted = record.created_at,
        )
    }
}

#[async_trait]
impl Notifier for SmtpNotifier {
    #[instrument(skip(self, record), fields(id = %record.id, to = %record.request.email))]
    async fn quote_received(&self, record: &QuoteRecord) -> Result<(), EmailError> {
        let confirmation = EmailMessage::new(
            record.request.email.clone(),
            format!("Your moving quote request {}", record.id),
        )
        .with_text_body(self.quote_confirmation_text(record))
        .with_html_body(self.quote_confirmation_html(record));
        self.send_email(confirmation).await?;

        let internal = EmailMessage::new(
            self.config.internal_email.clone(),
            format!("New quote request {}", record.id),
        )
        .with_text_body(self.quote_internal_text(record));
        self.send_email(internal).await
    }

    #[instrument(skip(self, record), fields(id = %record.id, to = %record.message.email))]
    async fn contact_received(&self, record: &ContactRecord) -> Result<(), EmailError> {
        let confirmation = EmailMessage::new(
            record.message.email.clone(),
            format!("We received your message ({})", record.id),
        )
        .with_text_body(self.contact_confirmation_text(record));
        self.send_email(confirmation).await?;

        let internal = EmailMessage::new(
            self.config.internal_email.clone(),
            format!("New contact form submission {}", record.id),
        )
        .with_text_body(self.contact_internal_text(record));
        self.send_email(internal).await
    }
}

/// Structured-log notifier used when SMTP is not configured. Stands in for
/// real delivery the same way the submission log stands in for a datastore.
#[derive(Default)]
pub struct LogNotifier;

impl LogNotifier {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Notifier for LogNotifier {
    async fn quote_received(&self, record: &QuoteRecord) -> Result<(), EmailError> {
        let range = pricing::estimate_range(record.estimated_cost);
        info!(
            quote_id = %record.id,
            to = %record.request.email,
            customer = %record.request.customer_name(),
            estimate_low = range.low,
            estimate_high = range.high,
            "Quote notification (no SMTP configured)"
        );
        Ok(())
    }

    async fn contact_received(&self, record: &ContactRecord) -> Result<(), EmailError> {
        info!(
            contact_id = %record.id,
            to = %record.message.email,
            subject = %record.message.subject,
            "Contact notification (no SMTP configured)"
        );
        Ok(())
    }
}
