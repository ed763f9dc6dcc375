use std::fmt;

/// Custom error type for inventory operations
#[derive(Debug)]
pub enum PpError {
    /// HTTP request failed
    Http(reqwest::Error),
    /// API returned an error response
    Api { status: u16, message: String },
    /// Sign-in against Azure AD failed
    Auth { status: u16, message: String },
    /// JSON parsing error
    Json(String),
    /// Configuration error
    Config(String),
    /// Report file could not be written
    Report(String),
}

impl fmt::Display for PpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PpError::Http(e) => write!(f, "HTTP request failed: {}", e),
            PpError::Api { status, message } => {
                write!(f, "API error (status {}): {}", status, message)
            }
            PpError::Auth { status, message } => {
                write!(f, "Sign-in failed (status {}): {}", status, message)
            }
            PpError::Json(msg) => write!(f, "JSON error: {}", msg),
            PpError::Config(msg) => write!(f, "Configuration error: {}", msg),
            PpError::Report(msg) => write!(f, "Report error: {}", msg),
        }
    }
}

impl std::error::Error for PpError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PpError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for PpError {
    fn from(err: reqwest::Error) -> Self {
        PpError::Http(err)
    }
}

impl From<serde_json::Error> for PpError {
    fn from(err: serde_json::Error) -> Self {
        PpError::Json(err.to_string())
    }
}

impl From<rust_xlsxwriter::XlsxError> for PpError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        PpError::Report(err.to_string())
    }
}

impl From<dialoguer::Error> for PpError {
    fn from(err: dialoguer::Error) -> Self {
        PpError::Config(err.to_string())
    }
}

/// Result type alias for inventory operations
pub type Result<T> = std::result::Result<T, PpError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = PpError::Api {
            status: 404,
            message: "Not found".to_string(),
        };
        assert!(err.to_string().contains("404"));
        assert!(err.to_string().contains("Not found"));
    }

    #[test]
    fn test_auth_error_display() {
        let err = PpError::Auth {
            status: 400,
            message: "AADSTS50126: invalid credentials".to_string(),
        };
        assert!(err.to_string().contains("Sign-in failed"));
        assert!(err.to_string().contains("AADSTS50126"));
    }

    #[test]
    fn test_report_error_display() {
        let err = PpError::Report("worksheet name too long".to_string());
        assert!(err.to_string().contains("Report error"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        // Verify PpError is Send + Sync for async usage
        assert_send_sync::<PpError>();
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: PpError = json_err.into();
        match err {
            PpError::Json(msg) => assert!(!msg.is_empty()),
            _ => panic!("Expected PpError::Json"),
        }
    }

    #[test]
    fn test_error_source_non_http() {
        use std::error::Error;
        let err = PpError::Config("missing value".to_string());
        assert!(err.source().is_none());
    }
}
