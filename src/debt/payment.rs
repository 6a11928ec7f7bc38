//! Payment conversions and the auto-calculated minimum payment
//!
//! The auto payment is what a standard 30-year fully-amortizing loan would require.
//! `DebtForm` tracks whether the minimum payment came from that calculation or was
//! typed in by the user, so edits to the other fields only overwrite auto values.

use super::data::{Debt, PaymentFrequency};
use serde::{Deserialize, Serialize};

/// Term used for the auto-calculated payment
pub const AUTO_PAYMENT_TERM_MONTHS: i32 = 360;

/// Convert a periodic payment to its monthly equivalent
pub fn monthly_equivalent(payment: f64, frequency: PaymentFrequency) -> f64 {
    match frequency {
        PaymentFrequency::Weekly => payment * 52.0 / 12.0,
        PaymentFrequency::BiWeekly => payment * 26.0 / 12.0,
        PaymentFrequency::Monthly => payment,
        PaymentFrequency::Quarterly => payment / 3.0,
        PaymentFrequency::Annually => payment / 12.0,
    }
}

/// Convert a monthly payment back to a periodic one
pub fn from_monthly(monthly_payment: f64, frequency: PaymentFrequency) -> f64 {
    match frequency {
        PaymentFrequency::Weekly => monthly_payment * 12.0 / 52.0,
        PaymentFrequency::BiWeekly => monthly_payment * 12.0 / 26.0,
        PaymentFrequency::Monthly => monthly_payment,
        PaymentFrequency::Quarterly => monthly_payment * 3.0,
        PaymentFrequency::Annually => monthly_payment * 12.0,
    }
}

pub fn round_to_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Payment per `frequency` period that retires `principal` in 30 years.
///
/// Returns 0 when there is nothing to amortize (non-positive principal or rate).
pub fn thirty_year_payment(principal: f64, annual_rate: f64, frequency: PaymentFrequency) -> f64 {
    if principal <= 0.0 || annual_rate <= 0.0 {
        return 0.0;
    }

    let monthly_rate = annual_rate / 100.0 / 12.0;
    let growth = (1.0 + monthly_rate).powi(AUTO_PAYMENT_TERM_MONTHS);
    let monthly_payment = principal * (monthly_rate * growth) / (growth - 1.0);

    round_to_cents(from_monthly(monthly_payment, frequency))
}

/// Where the current minimum payment value came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PaymentSource {
    #[default]
    Auto,
    UserSet,
}

/// Debt inputs with per-field edit tracking for the minimum payment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebtForm {
    debt: Debt,
    payment_source: PaymentSource,
}

impl DebtForm {
    /// Start from a balance/rate/frequency with an auto-calculated payment
    pub fn new(balance: f64, interest_rate: f64, frequency: PaymentFrequency) -> Self {
        let mut form = Self {
            debt: Debt::new(balance, interest_rate, 0.0, frequency),
            payment_source: PaymentSource::Auto,
        };
        form.recalculate();
        form
    }

    /// Wrap an existing debt whose payment was supplied by the user
    pub fn from_debt(debt: Debt) -> Self {
        Self {
            debt,
            payment_source: PaymentSource::UserSet,
        }
    }

    pub fn debt(&self) -> &Debt {
        &self.debt
    }

    pub fn into_debt(self) -> Debt {
        self.debt
    }

    pub fn payment_source(&self) -> PaymentSource {
        self.payment_source
    }

    pub fn set_balance(&mut self, balance: f64) {
        self.debt.balance = balance;
        self.payment_source = PaymentSource::Auto;
        self.recalculate();
    }

    pub fn set_interest_rate(&mut self, interest_rate: f64) {
        self.debt.interest_rate = interest_rate;
        self.payment_source = PaymentSource::Auto;
        self.recalculate();
    }

    pub fn set_payment_frequency(&mut self, frequency: PaymentFrequency) {
        self.debt.payment_frequency = frequency;
        self.payment_source = PaymentSource::Auto;
        self.recalculate();
    }

    /// A user-typed payment always sticks until another field changes
    pub fn set_minimum_payment(&mut self, payment: f64) {
        self.debt.minimum_payment = payment;
        self.payment_source = PaymentSource::UserSet;
    }

    // Keeps the previous payment when there is nothing to amortize
    fn recalculate(&mut self) {
        if self.payment_source != PaymentSource::Auto {
            return;
        }
        if self.debt.balance > 0.0 && self.debt.interest_rate > 0.0 {
            self.debt.minimum_payment = thirty_year_payment(
                self.debt.balance,
                self.debt.interest_rate,
                self.debt.payment_frequency,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_monthly_equivalent_table() {
        assert_relative_eq!(monthly_equivalent(120.0, PaymentFrequency::Weekly), 520.0);
        assert_relative_eq!(monthly_equivalent(120.0, PaymentFrequency::BiWeekly), 260.0);
        assert_eq!(monthly_equivalent(120.0, PaymentFrequency::Monthly), 120.0);
        assert_relative_eq!(monthly_equivalent(120.0, PaymentFrequency::Quarterly), 40.0);
        assert_relative_eq!(monthly_equivalent(120.0, PaymentFrequency::Annually), 10.0);
    }

    #[test]
    fn test_thirty_year_payment_reference_loan() {
        // $100k at 5% over 30 years
        assert_eq!(thirty_year_payment(100_000.0, 5.0, PaymentFrequency::Monthly), 536.82);
    }

    #[test]
    fn test_thirty_year_payment_by_frequency() {
        let annual = thirty_year_payment(100_000.0, 5.0, PaymentFrequency::Annually);
        let quarterly = thirty_year_payment(100_000.0, 5.0, PaymentFrequency::Quarterly);
        assert_relative_eq!(annual, 6441.86, epsilon = 0.01);
        assert_relative_eq!(quarterly, 1610.46, epsilon = 0.01);
    }

    #[test]
    fn test_thirty_year_payment_nothing_to_amortize() {
        assert_eq!(thirty_year_payment(0.0, 5.0, PaymentFrequency::Monthly), 0.0);
        assert_eq!(thirty_year_payment(100_000.0, 0.0, PaymentFrequency::Monthly), 0.0);
        assert_eq!(thirty_year_payment(-5.0, 5.0, PaymentFrequency::Monthly), 0.0);
    }

    #[test]
    fn test_form_user_payment_survives_until_other_field_changes() {
        let mut form = DebtForm::new(100_000.0, 5.0, PaymentFrequency::Monthly);
        assert_eq!(form.payment_source(), PaymentSource::Auto);
        assert_eq!(form.debt().minimum_payment, 536.82);

        form.set_minimum_payment(800.0);
        assert_eq!(form.payment_source(), PaymentSource::UserSet);
        assert_eq!(form.debt().minimum_payment, 800.0);

        form.set_interest_rate(6.0);
        assert_eq!(form.payment_source(), PaymentSource::Auto);
        assert_eq!(
            form.debt().minimum_payment,
            thirty_year_payment(100_000.0, 6.0, PaymentFrequency::Monthly)
        );
    }

    #[test]
    fn test_form_keeps_payment_when_balance_cleared() {
        let mut form = DebtForm::new(10_000.0, 7.0, PaymentFrequency::Monthly);
        let before = form.debt().minimum_payment;
        form.set_balance(0.0);
        assert_eq!(form.debt().minimum_payment, before);
    }

    #[test]
    fn test_form_frequency_change_recomputes() {
        let mut form = DebtForm::new(100_000.0, 5.0, PaymentFrequency::Monthly);
        form.set_payment_frequency(PaymentFrequency::Weekly);
        assert_relative_eq!(form.debt().minimum_payment, 123.88, epsilon = 0.01);
    }
}
