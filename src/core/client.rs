use crate::domain::model::{amount_or_zero, AccountBalance, BudgetSummary, MonthRange};
use crate::domain::ports::BudgetApi;
use crate::utils::error::{CheckError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

/// Thin reqwest wrapper over the Lunch Money REST API. One instance per run;
/// every request carries the bearer token, even an empty one.
pub struct LunchMoneyClient {
    client: Client,
    base_url: String,
    token: String,
}

impl LunchMoneyClient {
    pub fn new(base_url: String, token: String) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        }
    }

    async fn get_json<T>(&self, url: String, query: &[(&str, String)]) -> Result<T>
    where
        T: DeserializeOwned,
    {
        tracing::debug!("GET {}", url);
        let response = self
            .client
            .get(&url)
            .query(query)
            .bearer_auth(&self.token)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            return Err(CheckError::HttpStatusError { url, status });
        }

        Ok(response.json().await?)
    }

    /// Detailed summary used by the `list-sinking` helper: per-category
    /// properties instead of the plain occurrence totals.
    pub async fn category_settings(&self, range: &MonthRange) -> Result<BudgetSummary> {
        let query = [
            ("start_date", range.start_str()),
            ("end_date", range.end_str()),
            ("include_totals", "true".to_string()),
            ("strict_dates", "true".to_string()),
        ];
        self.get_json(format!("{}/summary", self.base_url), &query)
            .await
    }
}

#[async_trait]
impl BudgetApi for LunchMoneyClient {
    async fn account_balance(&self, account_id: u64) -> Result<f64> {
        let url = format!("{}/plaid_accounts/{}", self.base_url, account_id);
        let payload: AccountBalance = self.get_json(url, &[]).await?;
        Ok(amount_or_zero(payload.balance))
    }

    async fn budget_summary(&self, range: &MonthRange) -> Result<BudgetSummary> {
        let query = [
            ("start_date", range.start_str()),
            ("end_date", range.end_str()),
            ("include_totals", "false".to_string()),
            ("include_occurrences", "true".to_string()),
        ];
        self.get_json(format!("{}/summary", self.base_url), &query)
            .await
    }
}
