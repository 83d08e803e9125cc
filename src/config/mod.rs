pub mod budget;

#[cfg(feature = "cli")]
use crate::domain::ports::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::validation::{
    validate_account_id, validate_non_negative_amount, validate_url, Validate,
};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "fund-check")]
#[command(about = "Checks whether discretionary savings exceed the notification threshold")]
pub struct CliConfig {
    #[arg(long, default_value = budget::DEFAULT_BASE_URL)]
    pub base_url: String,

    #[arg(long, default_value_t = budget::SAVINGS_ACCOUNT_ID)]
    pub savings_account_id: u64,

    #[arg(long, default_value_t = budget::CHECKING_ACCOUNT_ID)]
    pub checking_account_id: u64,

    #[arg(long, default_value_t = budget::EMERGENCY_FUND)]
    pub emergency_fund: f64,

    #[arg(long, default_value_t = budget::NOTIFY_THRESHOLD)]
    pub threshold: f64,

    #[arg(long, help = "Print the full report as JSON instead of the bare decision")]
    pub json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log resource usage after the check")]
    pub monitor: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn savings_account_id(&self) -> u64 {
        self.savings_account_id
    }

    fn checking_account_id(&self) -> u64 {
        self.checking_account_id
    }

    fn emergency_fund(&self) -> f64 {
        self.emergency_fund
    }

    fn threshold(&self) -> f64 {
        self.threshold
    }

    fn sinking_categories(&self) -> &[i64] {
        budget::SINKING_CATEGORY_IDS
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> crate::utils::error::Result<()> {
        validate_url("base_url", &self.base_url)?;
        validate_account_id("savings_account_id", self.savings_account_id)?;
        validate_account_id("checking_account_id", self.checking_account_id)?;
        validate_non_negative_amount("emergency_fund", self.emergency_fund)?;
        validate_non_negative_amount("threshold", self.threshold)?;
        Ok(())
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    fn base_config() -> CliConfig {
        CliConfig {
            base_url: budget::DEFAULT_BASE_URL.to_string(),
            savings_account_id: budget::SAVINGS_ACCOUNT_ID,
            checking_account_id: budget::CHECKING_ACCOUNT_ID,
            emergency_fund: budget::EMERGENCY_FUND,
            threshold: budget::NOTIFY_THRESHOLD,
            json: false,
            verbose: false,
            monitor: false,
        }
    }

    #[test]
    fn test_defaults_validate() {
        assert!(base_config().validate().is_ok());
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let mut config = base_config();
        config.base_url = "ftp://api.lunchmoney.dev".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_negative_threshold_is_rejected() {
        let mut config = base_config();
        config.threshold = -5.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_parse_with_defaults() {
        let config = CliConfig::parse_from(["fund-check"]);
        assert_eq!(config.base_url, budget::DEFAULT_BASE_URL);
        assert_eq!(config.savings_account_id, budget::SAVINGS_ACCOUNT_ID);
        assert_eq!(config.checking_account_id, budget::CHECKING_ACCOUNT_ID);
        assert!(!config.json);
    }

    #[test]
    fn test_parse_with_overrides() {
        let config = CliConfig::parse_from([
            "fund-check",
            "--base-url",
            "http://localhost:8080",
            "--threshold",
            "20000",
            "--json",
        ]);
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.threshold, 20000.0);
        assert!(config.json);
    }
}
