//! Debt inputs, payment conversions and the amortization engine

mod data;
mod payment;
mod amortization;

pub use data::{Debt, PaymentFrequency};
pub use payment::{
    monthly_equivalent, from_monthly, round_to_cents, thirty_year_payment, DebtForm, PaymentSource,
    AUTO_PAYMENT_TERM_MONTHS,
};
pub use amortization::{
    amortize, AmortizationOutcome, AmortizationRow, AmortizationSchedule,
    MAX_AMORTIZATION_MONTHS, NEGATIVE_AMORTIZATION_MONTHS, PAYOFF_THRESHOLD,
};
