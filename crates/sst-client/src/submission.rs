//! Diagnosis submission payload and client.
//!
//! | Method | Path | Body |
//! |--------|------|------|
//! | POST   | `/api/diagnostico` | [`DiagnosisSubmission`] |
//!
//! Any 2xx status is success. The client sends once; retrying is the
//! caller's decision.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use sst_core::{AnswerSet, CompanyCategory, CompanyContact, CompanyProfile};

use crate::config::ClientConfig;
use crate::error::SubmissionError;

const ENDPOINT: &str = "POST /api/diagnostico";

/// Email domains rejected as non-corporate.
pub const PUBLIC_EMAIL_DOMAINS: &[&str] = &[
    "gmail.com",
    "outlook.com",
    "hotmail.com",
    "yahoo.com",
    "live.com",
    "icloud.com",
    "aol.com",
    "protonmail.com",
    "zoho.com",
];

/// The JSON body the report backend expects.
///
/// Field names are the backend's.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosisSubmission {
    #[serde(rename = "nombre")]
    pub name: String,
    pub email: String,
    #[serde(rename = "telefono")]
    pub phone: String,
    #[serde(rename = "empresa")]
    pub company: String,
    #[serde(rename = "cargo")]
    pub role: String,
    #[serde(rename = "numero_trabajadores")]
    pub workers: i64,
    #[serde(rename = "tipo_empresa")]
    pub category: CompanyCategory,
    #[serde(rename = "respuestas")]
    pub answers: AnswerSet,
}

impl DiagnosisSubmission {
    pub fn new(contact: CompanyContact, profile: CompanyProfile, answers: AnswerSet) -> Self {
        Self {
            name: contact.name,
            email: contact.email,
            phone: contact.phone,
            company: contact.company,
            role: contact.role,
            workers: profile.workers,
            category: profile.category,
            answers,
        }
    }

    /// Check the contact fields before sending.
    ///
    /// Text fields must be non-blank, the email must look like an address
    /// on a corporate domain, and the worker count must be positive.
    pub fn validate(&self) -> Result<(), SubmissionError> {
        let invalid = |field, reason| Err(SubmissionError::Invalid { field, reason });

        for (field, value) in [
            ("nombre", &self.name),
            ("email", &self.email),
            ("telefono", &self.phone),
            ("empresa", &self.company),
            ("cargo", &self.role),
        ] {
            if value.trim().is_empty() {
                return invalid(field, "is required");
            }
        }

        match email_domain(&self.email) {
            None => return invalid("email", "is not a valid address"),
            Some(domain) if PUBLIC_EMAIL_DOMAINS.contains(&domain.as_str()) => {
                return invalid("email", "must be a corporate address");
            }
            Some(_) => {}
        }

        if self.workers <= 0 {
            return invalid("numero_trabajadores", "must be a positive number");
        }
        Ok(())
    }
}

/// Lowercased domain of a plausible email address.
fn email_domain(email: &str) -> Option<String> {
    let email = email.trim();
    if email.chars().any(|c| c.is_whitespace() || c == '\'') {
        return None;
    }
    let (local, domain) = email.split_once('@')?;
    if local.is_empty() || domain.contains('@') {
        return None;
    }
    let (host, tld) = domain.rsplit_once('.')?;
    if host.is_empty() || tld.is_empty() {
        return None;
    }
    Some(domain.to_lowercase())
}

/// Outcome of an accepted submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionReceipt {
    pub status: u16,
    /// Response body, if the backend returned one.
    pub body: String,
}

/// Client for the diagnosis report backend.
#[derive(Debug, Clone)]
pub struct DiagnosisClient {
    http: reqwest::Client,
    url: String,
}

impl DiagnosisClient {
    /// Build a client with the configured request timeout.
    pub fn new(config: ClientConfig) -> Result<Self, SubmissionError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| SubmissionError::Http {
                endpoint: "client_init".into(),
                source: e,
            })?;
        Ok(Self {
            http,
            url: config.submission_url(),
        })
    }

    /// The endpoint submissions are posted to.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Validate and POST `submission` once.
    pub async fn submit(
        &self,
        submission: &DiagnosisSubmission,
    ) -> Result<SubmissionReceipt, SubmissionError> {
        submission.validate()?;

        tracing::info!(
            url = %self.url,
            company = %submission.company,
            category = %submission.category,
            answers = submission.answers.len(),
            "submitting diagnosis"
        );

        let resp = self
            .http
            .post(&self.url)
            .json(submission)
            .send()
            .await
            .map_err(|e| SubmissionError::Http {
                endpoint: ENDPOINT.into(),
                source: e,
            })?;

        let status = resp.status().as_u16();
        let body = resp.text().await.unwrap_or_default();
        if !(200..300).contains(&status) {
            tracing::warn!(status, "report backend rejected the diagnosis");
            return Err(SubmissionError::Rejected {
                endpoint: ENDPOINT.into(),
                status,
                body,
            });
        }

        tracing::info!(status, "diagnosis accepted");
        Ok(SubmissionReceipt { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sst_core::{Answer, QuestionId};

    fn submission() -> DiagnosisSubmission {
        let contact = CompanyContact {
            name: "Ana Quispe".into(),
            email: "ana@constructora.pe".into(),
            phone: "+51 999 888 777".into(),
            company: "Constructora Andina SAC".into(),
            role: "Jefa de SST".into(),
        };
        let answers = [
            (QuestionId::numbered(1), Answer::Yes),
            (QuestionId::numbered(2), Answer::No),
        ]
        .into_iter()
        .collect();
        DiagnosisSubmission::new(
            contact,
            CompanyProfile::new(CompanyCategory::Small, 25),
            answers,
        )
    }

    #[test]
    fn payload_uses_backend_field_names() {
        let json = serde_json::to_value(submission()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "nombre": "Ana Quispe",
                "email": "ana@constructora.pe",
                "telefono": "+51 999 888 777",
                "empresa": "Constructora Andina SAC",
                "cargo": "Jefa de SST",
                "numero_trabajadores": 25,
                "tipo_empresa": "pequena",
                "respuestas": {"q1": "si", "q2": "no"}
            })
        );
    }

    #[test]
    fn valid_submission_passes() {
        assert!(submission().validate().is_ok());
    }

    #[test]
    fn blank_field_rejected() {
        let mut s = submission();
        s.role = "  ".into();
        assert!(matches!(
            s.validate(),
            Err(SubmissionError::Invalid { field: "cargo", .. })
        ));
    }

    #[test]
    fn public_email_rejected() {
        let mut s = submission();
        s.email = "ana@Gmail.com".into();
        assert!(matches!(
            s.validate(),
            Err(SubmissionError::Invalid {
                field: "email",
                reason: "must be a corporate address"
            })
        ));
    }

    #[test]
    fn malformed_email_rejected() {
        for email in ["ana", "ana@", "@empresa.pe", "ana@empresa", "ana o@empresa.pe"] {
            let mut s = submission();
            s.email = email.into();
            assert!(s.validate().is_err(), "{email} should be rejected");
        }
    }

    #[test]
    fn non_positive_workers_rejected() {
        let mut s = submission();
        s.workers = 0;
        assert!(matches!(
            s.validate(),
            Err(SubmissionError::Invalid {
                field: "numero_trabajadores",
                ..
            })
        ));
    }
}
