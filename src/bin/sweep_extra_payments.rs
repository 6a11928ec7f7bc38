//! Sweep the extra payment amount for one scenario and write the outcomes
//!
//! Usage: sweep_extra_payments <scenario.json> [output.csv]
//! Sweep range via environment variables:
//!   SWEEP_START (default 0), SWEEP_END (default 1000), SWEEP_STEP (default 50)

use anyhow::{Context, Result};
use debt_vs_invest::loader::load_scenario_json;
use debt_vs_invest::report::write_summary_csv;
use debt_vs_invest::scenario::{sweep_amounts, ScenarioRunner};
use std::env;
use std::fs::File;
use std::io::BufWriter;
use std::time::Instant;

fn env_f64(name: &str, default: f64) -> Result<f64> {
    match env::var(name) {
        Ok(v) => v.parse().with_context(|| format!("{} must be a number, got {:?}", name, v)),
        Err(_) => Ok(default),
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let mut args = env::args().skip(1);
    let input = args
        .next()
        .context("usage: sweep_extra_payments <scenario.json> [output.csv]")?;
    let output = args.next().unwrap_or_else(|| "extra_payment_sweep.csv".to_string());

    let scenario = load_scenario_json(&input).with_context(|| format!("Failed to load {}", input))?;
    let amounts = sweep_amounts(
        env_f64("SWEEP_START", 0.0)?,
        env_f64("SWEEP_END", 1000.0)?,
        env_f64("SWEEP_STEP", 50.0)?,
    );

    let start = Instant::now();
    let mut reports = ScenarioRunner::new().run_sweep(&scenario, &amounts);
    for (report, amount) in reports.iter_mut().zip(&amounts) {
        report.name = Some(format!("extra {:.2}", amount));
    }
    println!("Ran {} amounts in {:?}", reports.len(), start.elapsed());

    let file = File::create(&output).with_context(|| format!("Unable to create {}", output))?;
    write_summary_csv(BufWriter::new(file), &reports)?;
    println!("Written to {}", output);

    Ok(())
}
