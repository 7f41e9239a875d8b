use thiserror::Error;

/// Message shown to the respondent whenever a submission fails.
pub const RETRY_MESSAGE: &str =
    "Ocurrió un error al procesar el diagnóstico. Por favor, inténtalo de nuevo más tarde.";

/// Errors from submitting a diagnosis.
#[derive(Error, Debug)]
pub enum SubmissionError {
    /// HTTP transport error (connection, timeout, TLS).
    #[error("HTTP error calling {endpoint}: {source}")]
    Http {
        endpoint: String,
        source: reqwest::Error,
    },
    /// The backend returned a non-2xx status.
    #[error("report backend {endpoint} returned {status}: {body}")]
    Rejected {
        endpoint: String,
        status: u16,
        body: String,
    },
    /// The payload failed pre-flight validation and was not sent.
    #[error("invalid submission field {field}: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
}

impl SubmissionError {
    /// The text to show the respondent.
    ///
    /// Delivery failures all map to the same retry message; validation
    /// failures name the field.
    pub fn user_message(&self) -> String {
        match self {
            Self::Invalid { field, reason } => format!("{field}: {reason}"),
            _ => RETRY_MESSAGE.to_string(),
        }
    }

    /// Whether sending the same payload again could succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Http { .. } => true,
            Self::Rejected { status, .. } => *status >= 500 || *status == 408 || *status == 429,
            Self::Invalid { .. } | Self::Config(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_maps_to_retry_message() {
        let err = SubmissionError::Rejected {
            endpoint: "POST /api/diagnostico".into(),
            status: 503,
            body: "down".into(),
        };
        assert_eq!(err.user_message(), RETRY_MESSAGE);
        assert!(err.is_retryable());
        assert!(err.to_string().contains("503"));
    }

    #[test]
    fn client_errors_are_not_retryable() {
        let err = SubmissionError::Rejected {
            endpoint: "POST /api/diagnostico".into(),
            status: 422,
            body: String::new(),
        };
        assert!(!err.is_retryable());
        assert_eq!(err.user_message(), RETRY_MESSAGE);
    }

    #[test]
    fn invalid_names_the_field() {
        let err = SubmissionError::Invalid {
            field: "email",
            reason: "must be a corporate address",
        };
        assert_eq!(err.user_message(), "email: must be a corporate address");
    }
}
