//! Transactional email submitter backed by the Resend HTTP API

use super::traits::{SubmissionOutcome, Submitter};
use crate::state::FormSnapshot;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::time::Duration;
use thiserror::Error;
use uuid::Uuid;

/// Default API base URL
pub const DEFAULT_ENDPOINT: &str = "https://api.resend.com";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("missing configuration: {0}")]
    Config(&'static str),
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("email service answered {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
}

/// Payload of `POST /emails`
#[derive(Debug, Serialize)]
struct EmailRequest<'a> {
    from: &'a str,
    to: Vec<&'a str>,
    reply_to: &'a str,
    subject: String,
    text: String,
}

pub struct ResendSubmitter {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    from: String,
    to: String,
}

impl ResendSubmitter {
    pub fn new(
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        from: impl Into<String>,
        to: impl Into<String>,
    ) -> Result<Self, SubmissionError> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(SubmissionError::Config("resend api key"));
        }
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            api_key,
            from: from.into(),
            to: to.into(),
        })
    }

    async fn send(&self, snapshot: &FormSnapshot) -> Result<(), SubmissionError> {
        let request = build_request(snapshot, &self.from, &self.to, Utc::now());
        let idempotency_key = Uuid::new_v4();
        tracing::debug!(%idempotency_key, "Sending contact request email");

        let response = self
            .client
            .post(format!("{}/emails", self.endpoint))
            .bearer_auth(&self.api_key)
            .header("Idempotency-Key", idempotency_key.to_string())
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(SubmissionError::Status {
            status,
            body: body.chars().take(200).collect(),
        })
    }
}

#[async_trait]
impl Submitter for ResendSubmitter {
    async fn submit(&self, snapshot: FormSnapshot) -> SubmissionOutcome {
        match self.send(&snapshot).await {
            Ok(()) => {
                tracing::info!(email = snapshot.email(), "Contact request delivered");
                SubmissionOutcome::Success
            }
            Err(err) => SubmissionOutcome::Failure(err.to_string()),
        }
    }
}

fn build_request<'a>(
    snapshot: &'a FormSnapshot,
    from: &'a str,
    to: &'a str,
    received: DateTime<Utc>,
) -> EmailRequest<'a> {
    EmailRequest {
        from,
        to: vec![to],
        reply_to: snapshot.email(),
        subject: format!("Ny førespurnad frå {}", snapshot.name()),
        text: email_body(snapshot, received),
    }
}

fn email_body(snapshot: &FormSnapshot, received: DateTime<Utc>) -> String {
    let project_type = snapshot
        .project_type()
        .map(|kind| kind.label())
        .unwrap_or("Ikkje valt");
    let site_visit = if snapshot.want_site_visit() { "Ja" } else { "Nei" };
    let address = if snapshot.address().is_empty() {
        "-"
    } else {
        snapshot.address()
    };

    format!(
        "Namn: {}\nE-post: {}\nTelefon: {}\nAdresse: {}\nType oppdrag: {}\nSynfaring: {}\nMotteke: {}\n\n{}\n",
        snapshot.name(),
        snapshot.email(),
        snapshot.phone(),
        address,
        project_type,
        site_visit,
        received.format("%Y-%m-%d %H:%M UTC"),
        snapshot.description(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ProjectType;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn snapshot() -> FormSnapshot {
        FormSnapshot::new(
            "Kari",
            "kari@example.no",
            "912 34 567",
            "",
            Some(ProjectType::Bad),
            "Nytt bad i kjellaren",
            true,
        )
    }

    #[test]
    fn test_empty_api_key_is_rejected() {
        let result = ResendSubmitter::new(DEFAULT_ENDPOINT, "", "a@b.no", "c@d.no");
        assert!(matches!(result, Err(SubmissionError::Config(_))));
    }

    #[test]
    fn test_endpoint_trailing_slash_is_trimmed() {
        let submitter =
            ResendSubmitter::new("https://api.example/", "key", "a@b.no", "c@d.no").unwrap();
        assert_eq!(submitter.endpoint, "https://api.example");
    }

    #[test]
    fn test_email_body_lists_every_field() {
        let received = Utc.with_ymd_and_hms(2026, 10, 19, 8, 30, 0).unwrap();
        let body = email_body(&snapshot(), received);
        assert_eq!(
            body,
            "Namn: Kari\nE-post: kari@example.no\nTelefon: 912 34 567\nAdresse: -\n\
             Type oppdrag: Bad\nSynfaring: Ja\nMotteke: 2026-10-19 08:30 UTC\n\n\
             Nytt bad i kjellaren\n"
        );
    }

    #[test]
    fn test_request_replies_to_customer() {
        let snapshot = snapshot();
        let received = Utc.with_ymd_and_hms(2026, 10, 19, 8, 30, 0).unwrap();
        let request = build_request(&snapshot, "skjema@nes.no", "post@nes.no", received);
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["reply_to"], "kari@example.no");
        assert_eq!(json["to"][0], "post@nes.no");
        assert_eq!(json["subject"], "Ny førespurnad frå Kari");
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_maps_to_failure() {
        let submitter =
            ResendSubmitter::new("http://127.0.0.1:1", "key", "a@b.no", "c@d.no").unwrap();
        let outcome = submitter.submit(snapshot()).await;
        assert!(matches!(outcome, SubmissionOutcome::Failure(_)));
    }
}
