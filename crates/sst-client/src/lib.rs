//! # sst-client -- Typed client for the diagnosis report backend
//!
//! A finished self-assessment is posted, together with the respondent's
//! contact details, to `{api_url}/api/diagnostico`. The backend produces the
//! downloadable report; this crate only delivers the payload.
//!
//! ## Failure model
//!
//! Every delivery failure (transport error, non-2xx status, missing
//! configuration) surfaces to the respondent as one retry message, see
//! [`SubmissionError::user_message`]. Payloads that fail pre-flight
//! validation are never sent.

pub mod config;
pub mod error;
pub mod submission;

pub use config::{ClientConfig, ConfigError, DEFAULT_TIMEOUT_SECS};
pub use error::{SubmissionError, RETRY_MESSAGE};
pub use submission::{
    DiagnosisClient, DiagnosisSubmission, SubmissionReceipt, PUBLIC_EMAIL_DOMAINS,
};
