use crate::domain::model::FundsReport;

/// Discretionary funds left after committed money is carved out, and whether
/// they strictly exceed the notification threshold. Exactly hitting the
/// threshold does not notify.
pub fn evaluate(
    savings_balance: f64,
    checking_balance: f64,
    sinking_total: f64,
    emergency_fund: f64,
    threshold: f64,
) -> FundsReport {
    let available = savings_balance - checking_balance - sinking_total - emergency_fund;

    FundsReport {
        savings_balance,
        checking_balance,
        sinking_total,
        emergency_fund,
        threshold,
        available,
        should_notify: available > threshold,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_below_threshold() {
        let report = evaluate(50_000.0, 5_000.0, 12_000.0, 30_000.0, 15_000.0);
        assert_eq!(report.available, 3_000.0);
        assert!(!report.should_notify);
    }

    #[test]
    fn test_above_threshold() {
        let report = evaluate(80_000.0, 3_000.0, 10_000.0, 30_000.0, 15_000.0);
        assert_eq!(report.available, 37_000.0);
        assert!(report.should_notify);
    }

    #[test]
    fn test_exactly_at_threshold_does_not_notify() {
        let report = evaluate(60_000.0, 5_000.0, 10_000.0, 30_000.0, 15_000.0);
        assert_eq!(report.available, 15_000.0);
        assert!(!report.should_notify);
    }

    #[test]
    fn test_just_over_threshold_notifies() {
        let report = evaluate(60_000.01, 5_000.0, 10_000.0, 30_000.0, 15_000.0);
        assert!(report.available > 15_000.0);
        assert!(report.should_notify);
    }

    #[test]
    fn test_available_can_go_negative() {
        let report = evaluate(20_000.0, 5_000.0, 10_000.0, 30_000.0, 15_000.0);
        assert_eq!(report.available, -25_000.0);
        assert!(!report.should_notify);
    }
}
