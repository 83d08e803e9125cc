use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// Turns an optional amount into a concrete one. Absent and null JSON fields
/// both land here as `None` and count as zero everywhere.
pub fn amount_or_zero(value: Option<f64>) -> f64 {
    value.unwrap_or(0.0)
}

// The API serves monetary amounts either as JSON numbers or as numeric
// strings depending on the endpoint, so amounts accept both.
fn de_amount<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    match value {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::Number(n)) => Ok(n.as_f64()),
        Some(serde_json::Value::String(s)) => s
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(serde::de::Error::custom),
        Some(other) => Err(serde::de::Error::custom(format!(
            "expected a numeric amount, got {}",
            other
        ))),
    }
}

/// Payload of `GET /plaid_accounts/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct AccountBalance {
    #[serde(default, deserialize_with = "de_amount")]
    pub balance: Option<f64>,
}

/// Payload of `GET /summary`.
#[derive(Debug, Clone, Deserialize)]
pub struct BudgetSummary {
    #[serde(default)]
    pub categories: Vec<BudgetCategory>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BudgetCategory {
    #[serde(default)]
    pub category_id: Option<i64>,

    #[serde(default)]
    pub totals: Option<CategoryTotals>,

    // Only present on detailed summaries (include_totals=true).
    #[serde(default)]
    pub properties: Option<CategoryProperties>,
}

impl BudgetCategory {
    /// Amount set aside for this category this month: the larger of what is
    /// still available and what was budgeted, missing values counting as 0.
    pub fn reserved_amount(&self) -> f64 {
        let totals = self.totals.as_ref();
        let available = amount_or_zero(totals.and_then(|t| t.available));
        let budgeted = amount_or_zero(totals.and_then(|t| t.budgeted));
        available.max(budgeted)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CategoryTotals {
    #[serde(default, deserialize_with = "de_amount")]
    pub available: Option<f64>,

    #[serde(default, deserialize_with = "de_amount")]
    pub budgeted: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CategoryProperties {
    #[serde(default)]
    pub category: Option<CategoryInfo>,

    #[serde(default)]
    pub budget_settings: Option<BudgetSettings>,
}

impl CategoryProperties {
    pub fn rollover_enabled(&self) -> bool {
        self.budget_settings
            .as_ref()
            .map(BudgetSettings::rollover_enabled)
            .unwrap_or(false)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CategoryInfo {
    pub id: i64,

    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BudgetSettings {
    #[serde(default)]
    pub rollover_option: Option<serde_json::Value>,
}

impl BudgetSettings {
    // The API reports the rollover option in several shapes (string, bool,
    // null); anything non-empty and non-false means rollover is configured.
    pub fn rollover_enabled(&self) -> bool {
        match &self.rollover_option {
            None | Some(serde_json::Value::Null) => false,
            Some(serde_json::Value::Bool(b)) => *b,
            Some(serde_json::Value::String(s)) => !s.is_empty(),
            Some(serde_json::Value::Number(n)) => n.as_f64() != Some(0.0),
            Some(_) => true,
        }
    }
}

/// First and last calendar day of a month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl MonthRange {
    pub fn start_str(&self) -> String {
        self.start.format("%Y-%m-%d").to_string()
    }

    pub fn end_str(&self) -> String {
        self.end.format("%Y-%m-%d").to_string()
    }
}

/// Outcome of one check: every input to the arithmetic plus the decision.
#[derive(Debug, Clone, Serialize)]
pub struct FundsReport {
    pub savings_balance: f64,
    pub checking_balance: f64,
    pub sinking_total: f64,
    pub emergency_fund: f64,
    pub threshold: f64,
    pub available: f64,
    pub should_notify: bool,
}
