use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("API returned {status} for {url}")]
    HttpStatusError {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, CheckError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Data,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl CheckError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CheckError::ApiError(_) | CheckError::HttpStatusError { .. } => ErrorCategory::Network,
            CheckError::SerializationError(_) => ErrorCategory::Data,
            CheckError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // Transport failures and 5xx are retryable on a later run.
            CheckError::ApiError(_) => ErrorSeverity::Medium,
            CheckError::HttpStatusError { status, .. } if status.is_server_error() => {
                ErrorSeverity::Medium
            }
            CheckError::HttpStatusError { .. } => ErrorSeverity::High,
            CheckError::SerializationError(_) => ErrorSeverity::High,
            CheckError::InvalidConfigValueError { .. } => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            CheckError::ApiError(_) => {
                "Check network connectivity and that the API base URL is reachable".to_string()
            }
            CheckError::HttpStatusError { status, .. } if status.as_u16() == 401 => {
                "Verify LUNCH_MONEY_API_KEY is set to a valid API token".to_string()
            }
            CheckError::HttpStatusError { status, .. } if status.is_server_error() => {
                "The API is having trouble; run the check again later".to_string()
            }
            CheckError::HttpStatusError { url, .. } => format!(
                "Verify the account and category identifiers referenced by {} exist",
                url
            ),
            CheckError::SerializationError(_) => {
                "The API response did not match the expected shape; check for API changes"
                    .to_string()
            }
            CheckError::InvalidConfigValueError { .. } => {
                "Fix the configuration value and run again".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CheckError::ApiError(e) => format!("Could not reach the budget API: {}", e),
            CheckError::HttpStatusError { url, status } => {
                format!("The budget API rejected the request ({} on {})", status, url)
            }
            CheckError::SerializationError(e) => {
                format!("Could not read the API response: {}", e)
            }
            CheckError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration value '{}' is invalid: {}", field, reason)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_status_severity_split() {
        let server_side = CheckError::HttpStatusError {
            url: "http://localhost/summary".to_string(),
            status: reqwest::StatusCode::BAD_GATEWAY,
        };
        assert_eq!(server_side.severity(), ErrorSeverity::Medium);

        let client_side = CheckError::HttpStatusError {
            url: "http://localhost/plaid_accounts/1".to_string(),
            status: reqwest::StatusCode::NOT_FOUND,
        };
        assert_eq!(client_side.severity(), ErrorSeverity::High);
        assert_eq!(client_side.category(), ErrorCategory::Network);
    }

    #[test]
    fn test_config_errors_are_critical() {
        let error = CheckError::InvalidConfigValueError {
            field: "base_url".to_string(),
            value: "ftp://example".to_string(),
            reason: "Unsupported URL scheme: ftp".to_string(),
        };
        assert_eq!(error.severity(), ErrorSeverity::Critical);
        assert_eq!(error.category(), ErrorCategory::Configuration);
        assert!(error.user_friendly_message().contains("base_url"));
    }
}
