//! Month-by-month growth of an investment under a fixed contribution

use super::data::Investment;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentRow {
    /// 1-indexed month
    pub month: u32,
    /// Balance at the end of the month
    pub value: f64,
}

/// Complete growth run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentSchedule {
    pub schedule: Vec<InvestmentRow>,

    /// Balance after the last month (the starting balance when no months ran)
    pub future_value: f64,

    /// Balance before the first month
    initial_value: f64,

    monthly_contribution: f64,
}

impl InvestmentSchedule {
    pub fn months(&self) -> u32 {
        self.schedule.len() as u32
    }

    /// Starting balance plus every contribution made
    pub fn total_contributions(&self) -> f64 {
        self.initial_value + self.monthly_contribution * self.schedule.len() as f64
    }

    /// Value gained from returns alone
    pub fn total_growth(&self) -> f64 {
        self.future_value - self.total_contributions()
    }

    /// Value at a 1-indexed month; past the horizon the last value is held
    pub fn value_at(&self, month: u32) -> f64 {
        if month == 0 {
            return self.initial_value;
        }
        match self.schedule.get((month - 1) as usize) {
            Some(row) => row.value,
            None => self.schedule.last().map(|r| r.value).unwrap_or(0.0),
        }
    }
}

/// Grow `investment` for `years` whole years.
///
/// Each month the contribution is added first and then the whole balance earns a
/// month of return, so a contribution grows in the month it is made.
pub fn grow_investment(investment: &Investment, monthly_contribution: f64, years: u32) -> InvestmentSchedule {
    let monthly_rate = investment.monthly_rate();
    let total_months = years.saturating_mul(12);

    let mut value = investment.initial_investment;
    let mut schedule = Vec::with_capacity(total_months as usize);

    for month in 1..=total_months {
        value += monthly_contribution;
        value *= 1.0 + monthly_rate;
        schedule.push(InvestmentRow { month, value });
    }

    log::debug!(
        "Grew {:.2} at {}% with {:.2}/month over {} years: {:.2}",
        investment.initial_investment,
        investment.return_rate,
        monthly_contribution,
        years,
        value
    );

    InvestmentSchedule {
        schedule,
        future_value: value,
        initial_value: investment.initial_investment,
        monthly_contribution,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_entry_count_matches_years() {
        let investment = Investment::new(7.5, 0.0);
        for years in [0, 1, 10, 31] {
            let result = grow_investment(&investment, 100.0, years);
            assert_eq!(result.schedule.len() as u32, years * 12);
        }
    }

    #[test]
    fn test_future_value_is_last_entry() {
        let result = grow_investment(&Investment::new(7.5, 5_000.0), 250.0, 10);
        assert_eq!(result.future_value, result.schedule.last().unwrap().value);
    }

    #[test]
    fn test_contribution_earns_in_its_own_month() {
        let result = grow_investment(&Investment::new(12.0, 0.0), 100.0, 1);
        // 100 deposited, then 1% for the month
        assert_relative_eq!(result.schedule[0].value, 101.0, epsilon = 1e-9);
        assert_relative_eq!(result.schedule[1].value, (101.0 + 100.0) * 1.01, epsilon = 1e-9);
    }

    #[test]
    fn test_initial_investment_only() {
        let result = grow_investment(&Investment::new(7.5, 10_000.0), 0.0, 1);
        assert_relative_eq!(result.schedule[0].value, 10_062.5, epsilon = 1e-9);
        assert_relative_eq!(
            result.future_value,
            10_000.0 * (1.0 + 0.075 / 12.0_f64).powi(12),
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_nothing_invested_stays_zero() {
        let result = grow_investment(&Investment::new(7.5, 0.0), 0.0, 10);
        assert!(result.schedule.iter().all(|r| r.value == 0.0));
        assert_eq!(result.future_value, 0.0);
    }

    #[test]
    fn test_zero_years_keeps_starting_value() {
        let result = grow_investment(&Investment::new(7.5, 1_000.0), 100.0, 0);
        assert!(result.schedule.is_empty());
        assert_eq!(result.future_value, 1_000.0);
    }

    #[test]
    fn test_contribution_and_growth_totals() {
        let result = grow_investment(&Investment::new(6.0, 1_000.0), 200.0, 5);
        assert_relative_eq!(result.total_contributions(), 1_000.0 + 200.0 * 60.0);
        assert!(result.total_growth() > 0.0);
    }

    #[test]
    fn test_json_keeps_contribution_inputs() {
        let result = grow_investment(&Investment::new(6.0, 1_000.0), 200.0, 5);
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"initialValue\":1000"));
        assert!(json.contains("\"monthlyContribution\":200"));

        let back: InvestmentSchedule = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
        assert_eq!(back.total_contributions(), 13_000.0);
        assert_eq!(back.value_at(0), 1_000.0);
    }

    #[test]
    fn test_value_at_holds_past_horizon() {
        let result = grow_investment(&Investment::new(5.0, 0.0), 100.0, 1);
        assert_eq!(result.value_at(12), result.future_value);
        assert_eq!(result.value_at(500), result.future_value);
        assert_eq!(result.value_at(0), 0.0);
    }
}
