use serde::{Deserialize, Serialize};

/// A single investment account.
///
/// `return_rate` is a nominal annual percentage (7.5 = 7.5%).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Investment {
    pub return_rate: f64,

    #[serde(default)]
    pub initial_investment: f64,
}

impl Investment {
    pub fn new(return_rate: f64, initial_investment: f64) -> Self {
        Self {
            return_rate,
            initial_investment,
        }
    }

    pub fn monthly_rate(&self) -> f64 {
        self.return_rate / 100.0 / 12.0
    }

    /// Return a balance would earn in one month at the nominal annual rate
    pub fn monthly_return_on(&self, balance: f64) -> f64 {
        balance * (self.return_rate / 100.0) / 12.0
    }
}
