use crate::domain::model::BudgetCategory;
use std::collections::HashSet;

/// Total money reserved in sinking-fund categories: for every category on
/// the allow-list, the larger of its available and budgeted totals. Entries
/// outside the list contribute nothing no matter what their totals say.
pub fn sinking_total(categories: &[BudgetCategory], allow_list: &HashSet<i64>) -> f64 {
    categories
        .iter()
        .filter(|cat| cat.category_id.is_some_and(|id| allow_list.contains(&id)))
        .map(BudgetCategory::reserved_amount)
        .sum()
}
