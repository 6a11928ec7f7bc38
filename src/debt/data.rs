//! Debt record and payment frequency table

use serde::{Deserialize, Serialize};

/// How often the minimum payment is made
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PaymentFrequency {
    Weekly,
    BiWeekly,
    Monthly,
    Quarterly,
    Annually,
}

impl PaymentFrequency {
    pub const ALL: [PaymentFrequency; 5] = [
        PaymentFrequency::Weekly,
        PaymentFrequency::BiWeekly,
        PaymentFrequency::Monthly,
        PaymentFrequency::Quarterly,
        PaymentFrequency::Annually,
    ];

    /// Factor turning one periodic payment into its monthly equivalent
    pub fn monthly_multiplier(&self) -> f64 {
        match self {
            PaymentFrequency::Weekly => 52.0 / 12.0,
            PaymentFrequency::BiWeekly => 26.0 / 12.0,
            PaymentFrequency::Monthly => 1.0,
            PaymentFrequency::Quarterly => 1.0 / 3.0,
            PaymentFrequency::Annually => 1.0 / 12.0,
        }
    }

    /// Wire name used in input files
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentFrequency::Weekly => "weekly",
            PaymentFrequency::BiWeekly => "bi-weekly",
            PaymentFrequency::Monthly => "monthly",
            PaymentFrequency::Quarterly => "quarterly",
            PaymentFrequency::Annually => "annually",
        }
    }

    /// Strict parse; `None` for anything outside the five known names
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "weekly" => Some(PaymentFrequency::Weekly),
            "bi-weekly" | "biweekly" => Some(PaymentFrequency::BiWeekly),
            "monthly" => Some(PaymentFrequency::Monthly),
            "quarterly" => Some(PaymentFrequency::Quarterly),
            "annually" => Some(PaymentFrequency::Annually),
            _ => None,
        }
    }

    /// Lenient parse: unknown names are treated as already-monthly
    pub fn parse_or_monthly(s: &str) -> Self {
        Self::parse(s).unwrap_or_else(|| {
            log::warn!("Unrecognized payment frequency {:?}, treating as monthly", s);
            PaymentFrequency::Monthly
        })
    }
}

impl Default for PaymentFrequency {
    fn default() -> Self {
        PaymentFrequency::Monthly
    }
}

impl From<String> for PaymentFrequency {
    fn from(s: String) -> Self {
        Self::parse_or_monthly(&s)
    }
}

impl From<PaymentFrequency> for String {
    fn from(f: PaymentFrequency) -> Self {
        f.as_str().to_string()
    }
}

impl std::fmt::Display for PaymentFrequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single debt as entered by the user.
///
/// `interest_rate` is a nominal annual percentage (5.0 = 5%).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Debt {
    /// Amount owed
    pub balance: f64,

    /// Nominal annual rate, percent
    pub interest_rate: f64,

    /// Minimum payment per `payment_frequency` period
    pub minimum_payment: f64,

    #[serde(default)]
    pub payment_frequency: PaymentFrequency,
}

impl Debt {
    pub fn new(
        balance: f64,
        interest_rate: f64,
        minimum_payment: f64,
        payment_frequency: PaymentFrequency,
    ) -> Self {
        Self {
            balance,
            interest_rate,
            minimum_payment,
            payment_frequency,
        }
    }

    /// Simple nominal monthly rate as a decimal
    pub fn monthly_rate(&self) -> f64 {
        self.interest_rate / 100.0 / 12.0
    }

    /// Minimum payment normalized to a monthly figure
    pub fn monthly_minimum_payment(&self) -> f64 {
        super::payment::monthly_equivalent(self.minimum_payment, self.payment_frequency)
    }
}
