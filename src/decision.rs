//! Rate-only recommendation between investing and paying down debt
//!
//! Only the two annual rates matter here; balances, payments and horizon do not.

use crate::debt::Debt;
use crate::investment::Investment;
use serde::{Deserialize, Serialize};

/// Rate gap (percentage points) up to which confidence stays low
pub const LOW_CONFIDENCE_MAX_GAP: f64 = 2.0;

/// Rate gap (percentage points) up to which confidence stays medium
pub const MEDIUM_CONFIDENCE_MAX_GAP: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recommendation {
    #[serde(rename = "invest")]
    Invest,
    #[serde(rename = "pay off debt")]
    PayOffDebt,
}

impl Recommendation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Recommendation::Invest => "invest",
            Recommendation::PayOffDebt => "pay off debt",
        }
    }
}

impl std::fmt::Display for Recommendation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl Confidence {
    /// Tier for an absolute rate gap; each threshold is inclusive of the lower tier
    pub fn from_rate_difference(difference: f64) -> Self {
        if difference > MEDIUM_CONFIDENCE_MAX_GAP {
            Confidence::High
        } else if difference > LOW_CONFIDENCE_MAX_GAP {
            Confidence::Medium
        } else {
            Confidence::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::Low => "low",
            Confidence::Medium => "medium",
            Confidence::High => "high",
        }
    }
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Decision {
    pub decision: Recommendation,
    pub confidence: Confidence,
    pub debt_interest_rate: f64,
    pub investment_return_rate: f64,
    /// Absolute gap between the two rates, percentage points
    pub rate_difference: f64,
}

/// Invest only when the return strictly beats the debt rate; ties go to the debt
pub fn decide(debt: &Debt, investment: &Investment) -> Decision {
    let decision = if investment.return_rate > debt.interest_rate {
        Recommendation::Invest
    } else {
        Recommendation::PayOffDebt
    };
    let rate_difference = (investment.return_rate - debt.interest_rate).abs();

    Decision {
        decision,
        confidence: Confidence::from_rate_difference(rate_difference),
        debt_interest_rate: debt.interest_rate,
        investment_return_rate: investment.return_rate,
        rate_difference,
    }
}
