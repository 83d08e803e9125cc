use crate::core::{decision, month, sinking};
use crate::domain::model::FundsReport;
use crate::domain::ports::{BudgetApi, ConfigProvider};
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::monitor::SystemMonitor;
use chrono::{Local, NaiveDate};
use std::collections::HashSet;

/// Runs one available-funds check: two balance reads, one summary read, then
/// pure arithmetic. Strictly sequential; the first failed request aborts.
pub struct CheckEngine<A: BudgetApi, C: ConfigProvider> {
    api: A,
    config: C,
    monitor_enabled: bool,
}

impl<A: BudgetApi, C: ConfigProvider> CheckEngine<A, C> {
    pub fn new(api: A, config: C) -> Self {
        Self {
            api,
            config,
            monitor_enabled: false,
        }
    }

    pub fn new_with_monitoring(api: A, config: C, monitor_enabled: bool) -> Self {
        Self {
            api,
            config,
            monitor_enabled,
        }
    }

    pub async fn run(&self) -> Result<FundsReport> {
        self.run_for_date(Local::now().date_naive()).await
    }

    pub async fn run_for_date(&self, today: NaiveDate) -> Result<FundsReport> {
        #[cfg(feature = "cli")]
        let monitor = SystemMonitor::new(self.monitor_enabled);
        #[cfg(not(feature = "cli"))]
        let _ = self.monitor_enabled;

        tracing::info!(
            "Fetching savings balance (account {})",
            self.config.savings_account_id()
        );
        let savings_balance = self
            .api
            .account_balance(self.config.savings_account_id())
            .await?;

        tracing::info!(
            "Fetching checking balance (account {})",
            self.config.checking_account_id()
        );
        let checking_balance = self
            .api
            .account_balance(self.config.checking_account_id())
            .await?;

        let range = month::current_month(today);
        tracing::info!(
            "Fetching budget summary for {} to {}",
            range.start_str(),
            range.end_str()
        );
        let summary = self.api.budget_summary(&range).await?;
        tracing::debug!("Budget summary returned {} categories", summary.categories.len());

        let allow_list: HashSet<i64> = self.config.sinking_categories().iter().copied().collect();
        let sinking_total = sinking::sinking_total(&summary.categories, &allow_list);
        tracing::info!("Sinking funds reserve: {:.2}", sinking_total);

        let report = decision::evaluate(
            savings_balance,
            checking_balance,
            sinking_total,
            self.config.emergency_fund(),
            self.config.threshold(),
        );

        tracing::info!(
            "Available funds: {:.2} (threshold {:.2}, notify: {})",
            report.available,
            report.threshold,
            report.should_notify
        );

        #[cfg(feature = "cli")]
        monitor.log_summary();

        Ok(report)
    }
}
