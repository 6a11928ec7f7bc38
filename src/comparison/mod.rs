//! Side-by-side projection of the invest and pay-down strategies

mod engine;
mod series;

pub use engine::{compare, ComparisonConfig, ComparisonEngine};
pub use series::{ComparisonPoint, ComparisonResult, ComparisonRun, ComparisonSummary};
