use std::time::Duration as StdDuration;

use async_trait::async_trait;
use chrono::Duration;
use lettre::message::Mailbox;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use secrecy::ExposeSecret;
use tracing::{debug, instrument};

use super::{SUBJECT, body};
use crate::config::SmtpConfig;
use crate::domain::error::DomainError;
use crate::domain::ports::CodeMailer;

const SEND_TIMEOUT: StdDuration = StdDuration::from_secs(20);

/// Submission port that speaks TLS from the first byte.
const IMPLICIT_TLS_PORT: u16 = 465;

/// SMTP relay: implicit TLS on 465, STARTTLS on any other port.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    code_ttl: Duration,
}

impl SmtpMailer {
    pub fn new(cfg: &SmtpConfig, code_ttl: Duration) -> Result<Self, DomainError> {
        let (Some(host), Some(user), Some(password)) = (&cfg.host, &cfg.user, &cfg.password)
        else {
            return Err(DomainError::internal("SMTP host and credentials are required"));
        };

        let from = cfg
            .from
            .as_deref()
            .unwrap_or(user.as_str())
            .parse::<Mailbox>()
            .map_err(|e| DomainError::internal(format!("invalid SMTP sender: {e}")))?;

        let builder = if cfg.port == IMPLICIT_TLS_PORT {
            AsyncSmtpTransport::<Tokio1Executor>::relay(host)
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(host)
        };
        let transport = builder
            .map_err(|e| DomainError::internal(format!("invalid SMTP relay {host}: {e}")))?
            .port(cfg.port)
            .credentials(Credentials::new(
                user.clone(),
                password.expose_secret().to_owned(),
            ))
            .timeout(Some(SEND_TIMEOUT))
            .build();

        Ok(Self {
            transport,
            from,
            code_ttl,
        })
    }
}

#[async_trait]
impl CodeMailer for SmtpMailer {
    #[instrument(skip(self, code))]
    async fn send_code(&self, to: &str, code: &str) -> Result<(), DomainError> {
        let to = to
            .parse::<Mailbox>()
            .map_err(|e| DomainError::Mail(format!("invalid recipient: {e}")))?;

        let message = Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(SUBJECT)
            .header(ContentType::TEXT_PLAIN)
            .body(body(code, self.code_ttl))
            .map_err(|e| DomainError::Mail(e.to_string()))?;

        self.transport
            .send(message)
            .await
            .map_err(|e| DomainError::Mail(e.to_string()))?;
        debug!("Verification mail accepted by relay");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use secrecy::SecretString;

    use super::*;

    fn cfg() -> SmtpConfig {
        SmtpConfig {
            host: Some("smtp.example.org".to_owned()),
            user: Some("mailer@example.org".to_owned()),
            password: Some(SecretString::from("secret".to_owned())),
            ..SmtpConfig::default()
        }
    }

    #[tokio::test]
    async fn sender_defaults_to_the_smtp_user() {
        let mailer = SmtpMailer::new(&cfg(), Duration::minutes(10)).unwrap();
        assert_eq!(mailer.from.email.to_string(), "mailer@example.org");
    }

    #[tokio::test]
    async fn implicit_tls_port_builds_a_transport() {
        let cfg = SmtpConfig {
            port: IMPLICIT_TLS_PORT,
            ..cfg()
        };
        assert!(SmtpMailer::new(&cfg, Duration::minutes(10)).is_ok());
        assert!(SmtpMailer::new(&SmtpConfig { port: 587, ..cfg }, Duration::minutes(10)).is_ok());
    }

    #[tokio::test]
    async fn invalid_sender_is_rejected() {
        let cfg = SmtpConfig {
            from: Some("not an address".to_owned()),
            ..cfg()
        };
        assert!(SmtpMailer::new(&cfg, Duration::minutes(10)).is_err());
    }

    #[test]
    fn body_states_the_code_and_validity() {
        let text = body("004211", Duration::minutes(10));
        assert!(text.contains("004211"));
        assert!(text.contains("10분"));
    }
}
