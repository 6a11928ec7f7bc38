//! Aligned debt/investment series and the milestones derived from it

use crate::debt::AmortizationSchedule;
use crate::investment::InvestmentSchedule;
use serde::{Deserialize, Serialize};

/// One month of the aligned series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonPoint {
    pub month: u32,
    /// Balance when paying the minimum only; zero once paid off
    pub debt_balance: f64,
    /// Investment fed by the extra payment; held flat past its horizon
    pub investment_balance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    pub data: Vec<ComparisonPoint>,

    /// First month the investment is worth more than the still-positive debt
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crossover_point: Option<u32>,

    /// First month the investment's monthly return covers the minimum payment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coverage_point: Option<u32>,

    pub total_months: u32,

    /// Payoff time when the extra payment goes to the debt
    pub debt_payoff_months: u32,

    /// Payoff time on minimum payments only
    pub debt_only_payoff_months: u32,
}

impl ComparisonResult {
    pub fn point(&self, month: u32) -> Option<&ComparisonPoint> {
        if month == 0 {
            return None;
        }
        self.data.get((month - 1) as usize)
    }

    pub fn final_investment_balance(&self) -> f64 {
        self.data.last().map(|p| p.investment_balance).unwrap_or(0.0)
    }
}

/// A comparison together with the three runs it was built from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonRun {
    pub result: ComparisonResult,
    pub debt_minimum_only: AmortizationSchedule,
    pub debt_with_extra: AmortizationSchedule,
    pub investment: InvestmentSchedule,
}

impl ComparisonRun {
    pub fn summary(&self) -> ComparisonSummary {
        let interest_minimum_only = self.debt_minimum_only.total_interest();
        let interest_with_extra = self.debt_with_extra.total_interest();

        ComparisonSummary {
            debt_only_payoff_months: self.result.debt_only_payoff_months,
            debt_payoff_months: self.result.debt_payoff_months,
            months_saved: self
                .result
                .debt_only_payoff_months
                .saturating_sub(self.result.debt_payoff_months),
            interest_minimum_only,
            interest_with_extra,
            interest_saved: interest_minimum_only - interest_with_extra,
            final_investment_balance: self.result.final_investment_balance(),
            investment_contributions: self.investment.total_contributions(),
            crossover_point: self.result.crossover_point,
            coverage_point: self.result.coverage_point,
        }
    }
}

/// Headline figures for the two strategies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonSummary {
    pub debt_only_payoff_months: u32,
    pub debt_payoff_months: u32,
    pub months_saved: u32,
    pub interest_minimum_only: f64,
    pub interest_with_extra: f64,
    pub interest_saved: f64,
    pub final_investment_balance: f64,
    pub investment_contributions: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crossover_point: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coverage_point: Option<u32>,
}
