//! Runs both strategies and lines them up on a shared month axis

use crate::debt::{amortize, Debt};
use crate::investment::{grow_investment, Investment};
use super::series::{ComparisonPoint, ComparisonResult, ComparisonRun};

/// Minimum lengths of the projection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonConfig {
    /// Investment growth always runs at least this many years
    pub min_projection_years: u32,

    /// Aligned series always covers at least this many months
    pub min_comparison_months: u32,
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        Self {
            min_projection_years: 10,
            min_comparison_months: 120,
        }
    }
}

/// Comparison engine
#[derive(Debug, Clone, Default)]
pub struct ComparisonEngine {
    config: ComparisonConfig,
}

impl ComparisonEngine {
    pub fn new(config: ComparisonConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ComparisonConfig {
        &self.config
    }

    pub fn compare(&self, debt: &Debt, investment: &Investment, additional_payment: f64) -> ComparisonResult {
        self.compare_detailed(debt, investment, additional_payment).result
    }

    /// Compare paying the minimum while investing `additional_payment` against
    /// putting `additional_payment` on the debt, keeping the underlying schedules
    pub fn compare_detailed(&self, debt: &Debt, investment: &Investment, additional_payment: f64) -> ComparisonRun {
        let debt_minimum_only = amortize(debt, 0.0);
        let debt_only_payoff_months = debt_minimum_only.months;

        let years = debt_only_payoff_months
            .div_ceil(12)
            .max(self.config.min_projection_years);
        let investment_schedule = grow_investment(investment, additional_payment, years);

        // Reference only; the aligned series follows the minimum-only debt
        let debt_with_extra = amortize(debt, additional_payment);
        let debt_payoff_months = debt_with_extra.months;

        let comparison_months = debt_only_payoff_months.max(self.config.min_comparison_months);
        let monthly_debt_payment = debt.monthly_minimum_payment();
        let last_value = investment_schedule
            .schedule
            .last()
            .map(|r| r.value)
            .unwrap_or(0.0);

        let mut data = Vec::with_capacity(comparison_months as usize);
        let mut crossover_point = None;
        let mut coverage_point = None;

        for i in 0..comparison_months as usize {
            let month = i as u32 + 1;
            let debt_balance = debt_minimum_only
                .schedule
                .get(i)
                .map(|r| r.remaining_balance)
                .unwrap_or(0.0);
            let investment_balance = investment_schedule
                .schedule
                .get(i)
                .map(|r| r.value)
                .unwrap_or(last_value);

            data.push(ComparisonPoint {
                month,
                debt_balance,
                investment_balance,
            });

            if crossover_point.is_none() && investment_balance > debt_balance && debt_balance > 0.0 {
                crossover_point = Some(month);
            }

            if coverage_point.is_none()
                && investment_balance > 0.0
                && investment.monthly_return_on(investment_balance) >= monthly_debt_payment
            {
                coverage_point = Some(month);
            }
        }

        log::debug!(
            "Compared over {} months: payoff {} (minimum) vs {} (extra), crossover {:?}, coverage {:?}",
            comparison_months,
            debt_only_payoff_months,
            debt_payoff_months,
            crossover_point,
            coverage_point
        );

        ComparisonRun {
            result: ComparisonResult {
                data,
                crossover_point,
                coverage_point,
                total_months: comparison_months,
                debt_payoff_months,
                debt_only_payoff_months,
            },
            debt_minimum_only,
            debt_with_extra,
            investment: investment_schedule,
        }
    }
}

/// Compare with the default projection lengths
pub fn compare(debt: &Debt, investment: &Investment, additional_payment: f64) -> ComparisonResult {
    ComparisonEngine::default().compare(debt, investment, additional_payment)
}
