/// Error types surfaced by the dashboard panels
use thiserror::Error;

/// Failure of a remote operation against the weather backend.
///
/// The `Display` output is the message shown to the user. The `reason`
/// fields carry the underlying cause for the log only.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    /// Non-2xx response; `detail` is the backend's detail or a per-operation fallback
    #[error("{detail}")]
    Backend { status: u16, detail: String },

    /// The request never produced a response
    #[error("Network error connecting to backend.")]
    Network { reason: String },

    /// Body could not be decoded into the expected payload, even after a second pass
    #[error("Data corruption error: content could not be parsed into valid JSON.")]
    Corrupt { reason: String },

    /// The query form could not be turned into a request
    #[error(transparent)]
    InvalidInput(#[from] FormError),
}

impl FetchError {
    pub fn network(reason: impl ToString) -> Self {
        FetchError::Network {
            reason: reason.to_string(),
        }
    }

    pub fn corrupt(reason: impl ToString) -> Self {
        FetchError::Corrupt {
            reason: reason.to_string(),
        }
    }

    /// HTTP status for backend-reported errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Backend { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Cause suitable for logging; falls back to the user message.
    pub fn reason(&self) -> String {
        match self {
            FetchError::Network { reason } | FetchError::Corrupt { reason } => reason.clone(),
            other => other.to_string(),
        }
    }
}

/// A query form field that does not hold a usable value.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormError {
    #[error("{field} must be a number (got {value:?})")]
    InvalidNumber { field: &'static str, value: String },

    #[error("{field} must be a date in YYYY-MM-DD format (got {value:?})")]
    InvalidDate { field: &'static str, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_keep_categories_apart() {
        let backend = FetchError::Backend {
            status: 404,
            detail: "not found".to_string(),
        };
        let network = FetchError::network("connection refused");
        let corrupt = FetchError::corrupt("expected value at line 1 column 1");

        assert_eq!(backend.to_string(), "not found");
        assert_eq!(network.to_string(), "Network error connecting to backend.");
        assert!(corrupt.to_string().starts_with("Data corruption error"));
        assert_ne!(network.to_string(), corrupt.to_string());
    }

    #[test]
    fn test_reason_and_status() {
        let network = FetchError::network("connection refused");
        assert_eq!(network.reason(), "connection refused");
        assert_eq!(network.status(), None);

        let backend = FetchError::Backend {
            status: 500,
            detail: "boom".to_string(),
        };
        assert_eq!(backend.status(), Some(500));
        assert_eq!(backend.reason(), "boom");
    }

    #[test]
    fn test_form_error_is_transparent() {
        let err: FetchError = FormError::InvalidNumber {
            field: "Latitude",
            value: "north".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "Latitude must be a number (got \"north\")");
    }
}
