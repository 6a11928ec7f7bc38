//! Debt vs. Invest - projection engine for allocating surplus cash
//!
//! This library provides:
//! - Month-by-month debt amortization under a fixed payment
//! - Investment growth under a fixed monthly contribution
//! - A side-by-side comparison with crossover and coverage milestones
//! - A rate-based recommendation with a confidence tier
//! - Scenario loading, batch/sweep runners and CSV export

pub mod error;
pub mod debt;
pub mod investment;
pub mod comparison;
pub mod decision;
pub mod scenario;
pub mod loader;
pub mod report;

// Re-export commonly used types
pub use error::InputError;
pub use debt::{amortize, AmortizationSchedule, Debt, PaymentFrequency};
pub use investment::{grow_investment, Investment, InvestmentSchedule};
pub use comparison::{compare, ComparisonConfig, ComparisonEngine, ComparisonResult};
pub use decision::{decide, Confidence, Decision, Recommendation};
pub use scenario::{ExtraPayment, Scenario, ScenarioReport, ScenarioRunner};
