pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use crate::core::{client::LunchMoneyClient, engine::CheckEngine};
pub use crate::domain::model::{BudgetSummary, FundsReport, MonthRange};
pub use crate::utils::error::{CheckError, Result};
