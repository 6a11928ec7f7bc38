//! CSV export and human-readable month labels

use crate::comparison::ComparisonResult;
use crate::debt::AmortizationSchedule;
use crate::error::InputError;
use crate::investment::InvestmentSchedule;
use crate::scenario::ScenarioReport;
use chrono::{Months, NaiveDate};
use serde::Serialize;
use std::io::Write;

fn plural(n: u32, unit: &str) -> String {
    if n == 1 {
        format!("{} {}", n, unit)
    } else {
        format!("{} {}s", n, unit)
    }
}

/// "7 months", "2 years", "2 years, 1 month"
pub fn format_timeframe(months: u32) -> String {
    let years = months / 12;
    let remaining = months % 12;

    if years == 0 {
        plural(months, "month")
    } else if remaining == 0 {
        plural(years, "year")
    } else {
        format!("{}, {}", plural(years, "year"), plural(remaining, "month"))
    }
}

/// "Month 7", "Year 2", "Year 2, Month 1"
pub fn month_label(month: u32) -> String {
    let years = month / 12;
    let remaining = month % 12;

    if years == 0 {
        format!("Month {}", month)
    } else if remaining == 0 {
        format!("Year {}", years)
    } else {
        format!("Year {}, Month {}", years, remaining)
    }
}

/// Calendar date of a 1-indexed projection month, month 1 being `start`
pub fn month_date(start: NaiveDate, month: u32) -> Option<NaiveDate> {
    start.checked_add_months(Months::new(month.saturating_sub(1)))
}

#[derive(Serialize)]
struct SeriesRecord {
    #[serde(rename = "Month")]
    month: u32,
    #[serde(rename = "Date")]
    date: Option<NaiveDate>,
    #[serde(rename = "DebtBalance")]
    debt_balance: f64,
    #[serde(rename = "InvestmentBalance")]
    investment_balance: f64,
}

/// Write the aligned series; the date column is empty without a start date
pub fn write_comparison_csv<W: Write>(
    writer: W,
    result: &ComparisonResult,
    start: Option<NaiveDate>,
) -> Result<(), InputError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for point in &result.data {
        csv_writer.serialize(SeriesRecord {
            month: point.month,
            date: start.and_then(|s| month_date(s, point.month)),
            debt_balance: point.debt_balance,
            investment_balance: point.investment_balance,
        })?;
    }
    csv_writer.flush()?;
    Ok(())
}

#[derive(Serialize)]
struct AmortizationRecord {
    #[serde(rename = "Month")]
    month: u32,
    #[serde(rename = "Interest")]
    interest: f64,
    #[serde(rename = "Principal")]
    principal: f64,
    #[serde(rename = "Balance")]
    balance: f64,
}

pub fn write_amortization_csv<W: Write>(writer: W, schedule: &AmortizationSchedule) -> Result<(), InputError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in &schedule.schedule {
        csv_writer.serialize(AmortizationRecord {
            month: row.month,
            interest: row.interest_payment,
            principal: row.principal_payment,
            balance: row.remaining_balance,
        })?;
    }
    csv_writer.flush()?;
    Ok(())
}

#[derive(Serialize)]
struct InvestmentRecord {
    #[serde(rename = "Month")]
    month: u32,
    #[serde(rename = "Value")]
    value: f64,
}

pub fn write_investment_csv<W: Write>(writer: W, schedule: &InvestmentSchedule) -> Result<(), InputError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in &schedule.schedule {
        csv_writer.serialize(InvestmentRecord {
            month: row.month,
            value: row.value,
        })?;
    }
    csv_writer.flush()?;
    Ok(())
}

#[derive(Serialize)]
struct SummaryRecord<'a> {
    #[serde(rename = "Name")]
    name: &'a str,
    #[serde(rename = "Decision")]
    decision: &'static str,
    #[serde(rename = "Confidence")]
    confidence: &'static str,
    #[serde(rename = "RateDifference")]
    rate_difference: f64,
    #[serde(rename = "DebtOnlyPayoffMonths")]
    debt_only_payoff_months: u32,
    #[serde(rename = "DebtPayoffMonths")]
    debt_payoff_months: u32,
    #[serde(rename = "InterestSaved")]
    interest_saved: f64,
    #[serde(rename = "FinalInvestment")]
    final_investment: f64,
    #[serde(rename = "CrossoverMonth")]
    crossover_month: Option<u32>,
    #[serde(rename = "CoverageMonth")]
    coverage_month: Option<u32>,
}

/// One summary line per scenario report
pub fn write_summary_csv<W: Write>(writer: W, reports: &[ScenarioReport]) -> Result<(), InputError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for report in reports {
        csv_writer.serialize(SummaryRecord {
            name: report.name.as_deref().unwrap_or(""),
            decision: report.decision.decision.as_str(),
            confidence: report.decision.confidence.as_str(),
            rate_difference: report.decision.rate_difference,
            debt_only_payoff_months: report.summary.debt_only_payoff_months,
            debt_payoff_months: report.summary.debt_payoff_months,
            interest_saved: report.summary.interest_saved,
            final_investment: report.summary.final_investment_balance,
            crossover_month: report.summary.crossover_point,
            coverage_month: report.summary.coverage_point,
        })?;
    }
    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparison::compare;
    use crate::debt::{Debt, PaymentFrequency};
    use crate::investment::Investment;

    #[test]
    fn test_format_timeframe() {
        assert_eq!(format_timeframe(1), "1 month");
        assert_eq!(format_timeframe(7), "7 months");
        assert_eq!(format_timeframe(12), "1 year");
        assert_eq!(format_timeframe(24), "2 years");
        assert_eq!(format_timeframe(13), "1 year, 1 month");
        assert_eq!(format_timeframe(182), "15 years, 2 months");
    }

    #[test]
    fn test_month_label() {
        assert_eq!(month_label(5), "Month 5");
        assert_eq!(month_label(36), "Year 3");
        assert_eq!(month_label(14), "Year 1, Month 2");
    }

    #[test]
    fn test_month_date() {
        let start = NaiveDate::from_ymd_opt(2026, 11, 1).unwrap();
        assert_eq!(month_date(start, 1), Some(start));
        assert_eq!(month_date(start, 3), NaiveDate::from_ymd_opt(2027, 1, 1));
    }

    #[test]
    fn test_comparison_csv() {
        let debt = Debt::new(1_000.0, 5.0, 100.0, PaymentFrequency::Monthly);
        let result = compare(&debt, &Investment::new(6.0, 0.0), 50.0);

        let mut buf = Vec::new();
        write_comparison_csv(&mut buf, &result, NaiveDate::from_ymd_opt(2026, 1, 1)).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let mut lines = text.lines();

        assert_eq!(lines.next(), Some("Month,Date,DebtBalance,InvestmentBalance"));
        assert!(lines.next().unwrap().starts_with("1,2026-01-01,"));
        assert_eq!(text.lines().count(), 1 + result.data.len());
    }
}
