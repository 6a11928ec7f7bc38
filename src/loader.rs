//! Load scenarios from JSON files and CSV batch files

use crate::debt::{Debt, PaymentFrequency};
use crate::error::InputError;
use crate::investment::Investment;
use crate::scenario::{ExtraPayment, ExtraPaymentFrequency, Scenario};
use csv::Reader;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

/// Raw CSV row of a batch file
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "Name", default)]
    name: Option<String>,
    #[serde(rename = "Balance")]
    balance: f64,
    #[serde(rename = "InterestRate")]
    interest_rate: f64,
    #[serde(rename = "MinimumPayment")]
    minimum_payment: f64,
    #[serde(rename = "PaymentFrequency", default)]
    payment_frequency: Option<String>,
    #[serde(rename = "ReturnRate")]
    return_rate: f64,
    #[serde(rename = "InitialInvestment", default)]
    initial_investment: Option<f64>,
    #[serde(rename = "ExtraPayment")]
    extra_payment: f64,
    #[serde(rename = "ExtraFrequency", default)]
    extra_frequency: Option<String>,
}

impl CsvRow {
    fn into_scenario(self) -> Result<Scenario, InputError> {
        let payment_frequency = self
            .payment_frequency
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .map(PaymentFrequency::parse_or_monthly)
            .unwrap_or_default();

        let extra_frequency = match self.extra_frequency.as_deref().map(str::trim) {
            None | Some("") => ExtraPaymentFrequency::Monthly,
            Some(other) => serde_json::from_value(serde_json::Value::String(other.to_ascii_lowercase()))
                .map_err(|_| InputError::invalid("ExtraFrequency", format!("unknown frequency {:?}", other)))?,
        };

        Ok(Scenario {
            name: self.name.filter(|n| !n.trim().is_empty()),
            debt: Debt::new(
                self.balance,
                self.interest_rate,
                self.minimum_payment,
                payment_frequency,
            ),
            investment: Investment::new(self.return_rate, self.initial_investment.unwrap_or(0.0)),
            extra_payment: ExtraPayment {
                frequency: extra_frequency,
                amount: self.extra_payment,
            },
        })
    }
}

/// Load scenarios from a CSV batch file
pub fn load_scenarios_csv<P: AsRef<Path>>(path: P) -> Result<Vec<Scenario>, InputError> {
    let path = path.as_ref();
    let file = fs::File::open(path)?;
    let scenarios = load_scenarios_from_reader(file)?;
    if scenarios.is_empty() {
        return Err(InputError::EmptyBatch(path.display().to_string()));
    }
    log::info!("Loaded {} scenarios from {}", scenarios.len(), path.display());
    Ok(scenarios)
}

/// Load scenarios from any CSV reader
pub fn load_scenarios_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<Scenario>, InputError> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut scenarios = Vec::new();

    for result in csv_reader.deserialize() {
        let row: CsvRow = result?;
        scenarios.push(row.into_scenario()?);
    }

    Ok(scenarios)
}

/// Read a JSON file into any input type
pub fn read_json<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<T, InputError> {
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

/// Load a single scenario from a JSON file
pub fn load_scenario_json<P: AsRef<Path>>(path: P) -> Result<Scenario, InputError> {
    read_json(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BATCH: &str = "\
Name,Balance,InterestRate,MinimumPayment,PaymentFrequency,ReturnRate,InitialInvestment,ExtraPayment,ExtraFrequency
mortgage,100000,5.0,536.82,monthly,7.5,0,250,monthly
card,8000,22.9,60,bi-weekly,7.0,1000,100,
student,30000,4.5,320,,6.0,,150,lump-sum
";

    #[test]
    fn test_load_batch() {
        let scenarios = load_scenarios_from_reader(BATCH.as_bytes()).unwrap();
        assert_eq!(scenarios.len(), 3);

        assert_eq!(scenarios[0].name.as_deref(), Some("mortgage"));
        assert_eq!(scenarios[0].debt.minimum_payment, 536.82);

        assert_eq!(scenarios[1].debt.payment_frequency, PaymentFrequency::BiWeekly);
        assert_eq!(scenarios[1].investment.initial_investment, 1000.0);
        assert_eq!(scenarios[1].extra_payment.frequency, ExtraPaymentFrequency::Monthly);

        assert_eq!(scenarios[2].debt.payment_frequency, PaymentFrequency::Monthly);
        assert_eq!(scenarios[2].investment.initial_investment, 0.0);
        assert_eq!(scenarios[2].extra_payment.frequency, ExtraPaymentFrequency::LumpSum);
    }

    #[test]
    fn test_unknown_extra_frequency_is_rejected() {
        let csv = "\
Name,Balance,InterestRate,MinimumPayment,PaymentFrequency,ReturnRate,InitialInvestment,ExtraPayment,ExtraFrequency
x,1000,5,50,monthly,7,0,10,hourly
";
        let err = load_scenarios_from_reader(csv.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("ExtraFrequency"));
    }

    #[test]
    fn test_bad_number_is_csv_error() {
        let csv = "\
Name,Balance,InterestRate,MinimumPayment,PaymentFrequency,ReturnRate,InitialInvestment,ExtraPayment,ExtraFrequency
x,lots,5,50,monthly,7,0,10,monthly
";
        assert!(matches!(
            load_scenarios_from_reader(csv.as_bytes()),
            Err(InputError::Csv(_))
        ));
    }

    #[test]
    fn test_scenario_json_shape() {
        let json = r#"{
            "name": "reference",
            "debt": {"balance": 100000, "interestRate": 5.0, "minimumPayment": 536.82, "paymentFrequency": "monthly"},
            "investment": {"returnRate": 7.5, "initialInvestment": 0},
            "extraPayment": {"frequency": "monthly", "amount": 250}
        }"#;
        let scenario: Scenario = serde_json::from_str(json).unwrap();
        assert_eq!(scenario.extra_payment.amount, 250.0);
        assert_eq!(scenario.investment.return_rate, 7.5);
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            load_scenario_json("does/not/exist.json"),
            Err(InputError::Io(_))
        ));
    }
}
