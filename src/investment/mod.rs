//! Investment inputs and the growth engine

mod data;
mod growth;

pub use data::Investment;
pub use growth::{grow_investment, InvestmentRow, InvestmentSchedule};
