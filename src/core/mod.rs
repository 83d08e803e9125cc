pub mod client;
pub mod decision;
pub mod engine;
pub mod month;
pub mod sinking;

pub use crate::domain::model::{BudgetCategory, BudgetSummary, FundsReport, MonthRange};
pub use crate::domain::ports::{BudgetApi, ConfigProvider};
pub use crate::utils::error::Result;
