//! Scenario runner for single, batch and sweep comparisons
//!
//! A scenario bundles one debt, one investment and the extra cash to allocate.
//! Batches and sweeps run in parallel; results come back in input order.

use crate::comparison::{ComparisonConfig, ComparisonEngine, ComparisonRun, ComparisonSummary};
use crate::debt::Debt;
use crate::decision::{decide, Decision};
use crate::error::InputError;
use crate::investment::Investment;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// How often the extra cash becomes available, as entered by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExtraPaymentFrequency {
    LumpSum,
    Weekly,
    BiWeekly,
    #[default]
    Monthly,
    Quarterly,
    Annually,
}

/// Surplus cash to allocate between the two strategies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtraPayment {
    #[serde(default)]
    pub frequency: ExtraPaymentFrequency,
    pub amount: f64,
}

impl ExtraPayment {
    pub fn monthly(amount: f64) -> Self {
        Self {
            frequency: ExtraPaymentFrequency::Monthly,
            amount,
        }
    }

    /// Amount handed to the engines. Used as a monthly figure regardless of the
    /// entered frequency.
    pub fn engine_amount(&self) -> f64 {
        if self.frequency != ExtraPaymentFrequency::Monthly {
            log::warn!(
                "Extra payment frequency {:?} is not converted; {:.2} is used as a monthly amount",
                self.frequency,
                self.amount
            );
        }
        self.amount
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    /// Optional label carried into reports
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub debt: Debt,
    pub investment: Investment,
    pub extra_payment: ExtraPayment,
}

impl Scenario {
    pub fn new(debt: Debt, investment: Investment, extra_payment: ExtraPayment) -> Self {
        Self {
            name: None,
            debt,
            investment,
            extra_payment,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Reject inputs for which a comparison is meaningless.
    ///
    /// The engines accept anything; this is the gate applied before running them.
    pub fn validate(&self) -> Result<(), InputError> {
        let checks = [
            ("debt.balance", self.debt.balance, "must be greater than zero", self.debt.balance > 0.0),
            ("debt.interestRate", self.debt.interest_rate, "must be greater than zero", self.debt.interest_rate > 0.0),
            ("debt.minimumPayment", self.debt.minimum_payment, "must not be negative", self.debt.minimum_payment >= 0.0),
            ("investment.returnRate", self.investment.return_rate, "must be greater than zero", self.investment.return_rate > 0.0),
            ("extraPayment.amount", self.extra_payment.amount, "must be greater than zero", self.extra_payment.amount > 0.0),
        ];

        for (field, value, reason, ok) in checks {
            if !ok || !value.is_finite() {
                return Err(InputError::invalid(field, format!("{} (got {})", reason, value)));
            }
        }
        Ok(())
    }
}

/// Everything computed for one scenario
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub decision: Decision,
    pub summary: ComparisonSummary,
    #[serde(skip)]
    pub run: ComparisonRun,
}

/// Runs scenarios against a shared comparison configuration
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    engine: ComparisonEngine,
}

impl ScenarioRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ComparisonConfig) -> Self {
        Self {
            engine: ComparisonEngine::new(config),
        }
    }

    pub fn engine(&self) -> &ComparisonEngine {
        &self.engine
    }

    /// Run a single scenario
    pub fn run(&self, scenario: &Scenario) -> ScenarioReport {
        let run = self.engine.compare_detailed(
            &scenario.debt,
            &scenario.investment,
            scenario.extra_payment.engine_amount(),
        );

        ScenarioReport {
            name: scenario.name.clone(),
            decision: decide(&scenario.debt, &scenario.investment),
            summary: run.summary(),
            run,
        }
    }

    /// Run many scenarios in parallel
    pub fn run_batch(&self, scenarios: &[Scenario]) -> Vec<ScenarioReport> {
        log::info!("Running {} scenarios", scenarios.len());
        scenarios.par_iter().map(|s| self.run(s)).collect()
    }

    /// Run one scenario for each extra payment amount
    pub fn run_sweep(&self, scenario: &Scenario, amounts: &[f64]) -> Vec<ScenarioReport> {
        log::info!("Sweeping {} extra payment amounts", amounts.len());
        amounts
            .par_iter()
            .map(|&amount| {
                let mut variant = scenario.clone();
                variant.extra_payment.amount = amount;
                self.run(&variant)
            })
            .collect()
    }
}

/// Evenly spaced amounts from `start` to `end` inclusive
pub fn sweep_amounts(start: f64, end: f64, step: f64) -> Vec<f64> {
    if step <= 0.0 || end < start {
        return vec![start];
    }
    // Tolerate division landing just under a whole step count
    let count = ((end - start) / step + 1e-9).floor() as usize;
    (0..=count).map(|i| (start + step * i as f64).min(end)).collect()
}
