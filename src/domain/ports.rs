use crate::domain::model::{BudgetSummary, MonthRange};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Read-only view of the upstream budget API.
#[async_trait]
pub trait BudgetApi: Send + Sync {
    /// Balance of a single plaid account, 0 when the field is absent.
    async fn account_balance(&self, account_id: u64) -> Result<f64>;

    /// Per-category budget summary for a date range.
    async fn budget_summary(&self, range: &MonthRange) -> Result<BudgetSummary>;
}

pub trait ConfigProvider: Send + Sync {
    fn savings_account_id(&self) -> u64;
    fn checking_account_id(&self) -> u64;
    fn emergency_fund(&self) -> f64;
    fn threshold(&self) -> f64;
    fn sinking_categories(&self) -> &[i64];
}
