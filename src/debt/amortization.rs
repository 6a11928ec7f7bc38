//! Month-by-month amortization of a single debt under a fixed payment

use super::data::Debt;
use serde::{Deserialize, Serialize};

/// Months simulated when the payment never covers the interest
pub const NEGATIVE_AMORTIZATION_MONTHS: u32 = 360;

/// Hard stop for schedules that would otherwise run past 50 years
pub const MAX_AMORTIZATION_MONTHS: u32 = 600;

/// Balance at or below which the debt counts as paid off
pub const PAYOFF_THRESHOLD: f64 = 0.01;

/// One month of the schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmortizationRow {
    /// 1-indexed month
    pub month: u32,
    pub interest_payment: f64,
    /// Negative when the payment does not cover the interest
    pub principal_payment: f64,
    pub remaining_balance: f64,
}

/// How a schedule terminated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AmortizationOutcome {
    /// Balance reached zero
    PaidOff,
    /// Still owing after `MAX_AMORTIZATION_MONTHS`
    Capped,
    /// Payment never covered interest; simulated for `NEGATIVE_AMORTIZATION_MONTHS`
    NeverPaidOff,
}

/// Complete amortization run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmortizationSchedule {
    pub schedule: Vec<AmortizationRow>,

    /// Number of months simulated
    pub months: u32,

    pub outcome: AmortizationOutcome,
}

impl AmortizationSchedule {
    fn new(outcome: AmortizationOutcome) -> Self {
        Self {
            schedule: Vec::new(),
            months: 0,
            outcome,
        }
    }

    fn add_row(&mut self, row: AmortizationRow) {
        self.months = row.month;
        self.schedule.push(row);
    }

    pub fn is_paid_off(&self) -> bool {
        self.outcome == AmortizationOutcome::PaidOff
    }

    pub fn final_balance(&self) -> f64 {
        self.schedule.last().map(|r| r.remaining_balance).unwrap_or(0.0)
    }

    /// Sum of interest charged over the schedule
    pub fn total_interest(&self) -> f64 {
        self.schedule.iter().map(|r| r.interest_payment).sum()
    }

    /// Interest plus principal actually paid down
    pub fn total_paid(&self) -> f64 {
        self.schedule
            .iter()
            .map(|r| r.interest_payment + r.principal_payment)
            .sum()
    }

    /// Balance at a 1-indexed month, zero once the schedule has ended
    pub fn balance_at(&self, month: u32) -> f64 {
        if month == 0 {
            return 0.0;
        }
        self.schedule
            .get((month - 1) as usize)
            .map(|r| r.remaining_balance)
            .unwrap_or(0.0)
    }
}

/// Amortize `debt` paying its monthly-equivalent minimum plus `additional_monthly_payment`.
///
/// The additional payment is already a monthly figure and is not frequency-converted.
pub fn amortize(debt: &Debt, additional_monthly_payment: f64) -> AmortizationSchedule {
    let monthly_rate = debt.monthly_rate();
    let total_payment = debt.monthly_minimum_payment() + additional_monthly_payment;

    if total_payment <= debt.balance * monthly_rate {
        log::warn!(
            "Payment {:.2} does not cover monthly interest on {:.2}; simulating {} months",
            total_payment,
            debt.balance,
            NEGATIVE_AMORTIZATION_MONTHS
        );
        return amortize_negative(debt.balance, monthly_rate, total_payment);
    }

    let mut result = AmortizationSchedule::new(AmortizationOutcome::PaidOff);
    let mut balance = debt.balance;
    let mut month = 0;

    while balance > PAYOFF_THRESHOLD {
        if month == MAX_AMORTIZATION_MONTHS {
            log::warn!(
                "Debt not paid off after {} months, {:.2} still owing",
                MAX_AMORTIZATION_MONTHS,
                balance
            );
            result.outcome = AmortizationOutcome::Capped;
            break;
        }
        month += 1;

        let interest_payment = balance * monthly_rate;
        let principal_payment = total_payment - interest_payment;
        balance -= principal_payment;

        if balance <= PAYOFF_THRESHOLD {
            balance = 0.0;
        }

        result.add_row(AmortizationRow {
            month,
            interest_payment,
            principal_payment,
            remaining_balance: balance,
        });
    }

    log::debug!(
        "Amortized {:.2} at {}% paying {:.2}/month: {} months ({:?})",
        debt.balance,
        debt.interest_rate,
        total_payment,
        result.months,
        result.outcome
    );

    result
}

/// Payment at or below the interest due: the balance grows, so the run is capped
fn amortize_negative(start_balance: f64, monthly_rate: f64, total_payment: f64) -> AmortizationSchedule {
    let mut result = AmortizationSchedule::new(AmortizationOutcome::NeverPaidOff);
    let mut balance = start_balance;

    for month in 1..=NEGATIVE_AMORTIZATION_MONTHS {
        let interest_payment = balance * monthly_rate;
        let principal_payment = total_payment - interest_payment;

        if principal_payment <= 0.0 {
            balance += principal_payment.abs();
        } else {
            balance -= principal_payment;
            if balance <= 0.0 {
                result.add_row(AmortizationRow {
                    month,
                    interest_payment,
                    principal_payment,
                    remaining_balance: 0.0,
                });
                result.outcome = AmortizationOutcome::PaidOff;
                break;
            }
        }

        result.add_row(AmortizationRow {
            month,
            interest_payment,
            principal_payment,
            remaining_balance: balance.max(0.0),
        });
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::debt::PaymentFrequency;
    use approx::assert_relative_eq;

    fn mortgage(payment: f64) -> Debt {
        Debt::new(100_000.0, 5.0, payment, PaymentFrequency::Monthly)
    }

    #[test]
    fn test_first_month_split() {
        let result = amortize(&mortgage(536.82), 0.0);
        let first = &result.schedule[0];

        assert_eq!(first.month, 1);
        assert_relative_eq!(first.interest_payment, 100_000.0 * 0.05 / 12.0, epsilon = 1e-9);
        assert_relative_eq!(first.principal_payment, 536.82 - 100_000.0 * 0.05 / 12.0, epsilon = 1e-9);
        assert_relative_eq!(first.remaining_balance, 100_000.0 - first.principal_payment, epsilon = 1e-9);
    }

    #[test]
    fn test_paid_off_ends_at_exact_zero() {
        let result = amortize(&mortgage(536.82), 250.0);

        assert!(result.is_paid_off());
        assert_eq!(result.final_balance(), 0.0);
        assert_eq!(result.months as usize, result.schedule.len());
        assert!(result.months <= MAX_AMORTIZATION_MONTHS);
        assert_eq!(result.schedule.last().unwrap().month, result.months);
    }

    #[test]
    fn test_rounded_payment_leaves_residual_month() {
        // 536.82 is a fraction of a cent under the exact 30-year payment
        let result = amortize(&mortgage(536.82), 0.0);
        assert_eq!(result.months, 361);
        assert!(result.schedule[359].remaining_balance > PAYOFF_THRESHOLD);
    }

    #[test]
    fn test_rows_are_sequential() {
        let result = amortize(&mortgage(1_000.0), 0.0);
        for (i, row) in result.schedule.iter().enumerate() {
            assert_eq!(row.month, i as u32 + 1);
        }
    }

    #[test]
    fn test_payment_below_interest_grows_for_360_months() {
        // Interest is 416.67/month
        let result = amortize(&mortgage(300.0), 0.0);

        assert_eq!(result.outcome, AmortizationOutcome::NeverPaidOff);
        assert_eq!(result.months, NEGATIVE_AMORTIZATION_MONTHS);
        assert_eq!(result.schedule.len(), 360);
        for pair in result.schedule.windows(2) {
            assert!(pair[1].remaining_balance >= pair[0].remaining_balance);
        }
        assert!(result.final_balance() > 100_000.0);
    }

    #[test]
    fn test_negative_branch_stops_when_balance_crosses_zero() {
        // -300% a month makes the balance swing until it overshoots zero in month 6
        let debt = Debt::new(1_000.0, -3_600.0, 0.0, PaymentFrequency::Monthly);
        let result = amortize(&debt, -3_100.0);

        assert_eq!(result.outcome, AmortizationOutcome::PaidOff);
        assert_eq!(result.months, 6);
        let balances: Vec<f64> = result.schedule.iter().map(|r| r.remaining_balance).collect();
        assert_eq!(balances, vec![1_100.0, 900.0, 1_300.0, 500.0, 2_100.0, 0.0]);
        assert_eq!(result.schedule[5].principal_payment, 3_200.0);
    }

    #[test]
    fn test_payment_equal_to_interest_is_flat() {
        let debt = mortgage(0.0);
        let interest = debt.balance * debt.monthly_rate();
        let result = amortize(&mortgage(interest), 0.0);

        assert_eq!(result.months, 360);
        assert_relative_eq!(result.final_balance(), 100_000.0, epsilon = 1e-6);
    }

    #[test]
    fn test_long_schedule_is_capped_at_600() {
        // Covers interest by $1, so it would take centuries
        let debt = mortgage(0.0);
        let interest = debt.balance * debt.monthly_rate();
        let result = amortize(&mortgage(interest + 1.0), 0.0);

        assert_eq!(result.outcome, AmortizationOutcome::Capped);
        assert_eq!(result.months, MAX_AMORTIZATION_MONTHS);
        assert_eq!(result.schedule.len(), 600);
        assert!(result.final_balance() > 0.0);
    }

    #[test]
    fn test_zero_rate_debt() {
        let debt = Debt::new(1_200.0, 0.0, 100.0, PaymentFrequency::Monthly);
        let result = amortize(&debt, 0.0);

        assert_eq!(result.months, 12);
        assert_eq!(result.total_interest(), 0.0);
        assert_relative_eq!(result.total_paid(), 1_200.0, epsilon = 1e-9);
    }

    #[test]
    fn test_zero_balance_has_empty_schedule() {
        let debt = Debt::new(0.0, 5.0, 100.0, PaymentFrequency::Monthly);
        let result = amortize(&debt, 0.0);

        assert_eq!(result.months, 0);
        assert!(result.schedule.is_empty());
        assert!(result.is_paid_off());
    }

    #[test]
    fn test_extra_payment_is_not_frequency_converted() {
        let weekly = Debt::new(10_000.0, 6.0, 50.0, PaymentFrequency::Weekly);
        let result = amortize(&weekly, 100.0);

        let expected_payment = 50.0 * 52.0 / 12.0 + 100.0;
        let first = &result.schedule[0];
        assert_relative_eq!(first.interest_payment + first.principal_payment, expected_payment, epsilon = 1e-9);
    }

    #[test]
    fn test_extra_payment_shortens_schedule() {
        let debt = mortgage(536.82);
        let base = amortize(&debt, 0.0);
        for extra in [1.0, 50.0, 250.0, 1_000.0] {
            assert!(amortize(&debt, extra).months <= base.months);
        }
        assert!(amortize(&debt, 250.0).total_interest() < base.total_interest());
    }

    #[test]
    fn test_balance_at() {
        let result = amortize(&mortgage(10_000.0), 0.0);
        assert_eq!(result.balance_at(0), 0.0);
        assert_eq!(result.balance_at(1), result.schedule[0].remaining_balance);
        assert_eq!(result.balance_at(result.months + 5), 0.0);
    }
}
