use crate::utils::error::{CheckError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(CheckError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(CheckError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(CheckError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_account_id(field_name: &str, account_id: u64) -> Result<()> {
    if account_id == 0 {
        return Err(CheckError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: account_id.to_string(),
            reason: "Account identifier must be non-zero".to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_negative_amount(field_name: &str, amount: f64) -> Result<()> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(CheckError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: amount.to_string(),
            reason: "Amount must be a non-negative number".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url_accepts_http_and_https() {
        assert!(validate_url("base_url", "https://api.lunchmoney.dev/v2").is_ok());
        assert!(validate_url("base_url", "http://127.0.0.1:8080").is_ok());
    }

    #[test]
    fn test_validate_url_rejects_bad_values() {
        assert!(validate_url("base_url", "").is_err());
        assert!(validate_url("base_url", "not a url").is_err());
        assert!(validate_url("base_url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_account_id() {
        assert!(validate_account_id("savings_account_id", 238120).is_ok());
        assert!(validate_account_id("savings_account_id", 0).is_err());
    }

    #[test]
    fn test_validate_non_negative_amount() {
        assert!(validate_non_negative_amount("threshold", 0.0).is_ok());
        assert!(validate_non_negative_amount("threshold", 15000.0).is_ok());
        assert!(validate_non_negative_amount("threshold", -1.0).is_err());
        assert!(validate_non_negative_amount("threshold", f64::NAN).is_err());
    }
}
