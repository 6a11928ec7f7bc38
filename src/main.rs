//! Debt vs. Invest CLI
//!
//! Command-line interface for comparing extra debt payments against investing

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use debt_vs_invest::debt::{amortize, DebtForm, PaymentFrequency};
use debt_vs_invest::investment::{grow_investment, Investment};
use debt_vs_invest::report::{self, format_timeframe};
use debt_vs_invest::scenario::{ExtraPayment, Scenario, ScenarioReport, ScenarioRunner};
use debt_vs_invest::{decide, loader, ComparisonConfig};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// Longest investment horizon accepted on the command line
const MAX_YEARS: i64 = 1_000;

#[derive(Parser)]
#[command(
    name = "debt-vs-invest",
    version,
    about = "Compare paying down debt with investing the same extra cash"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Print results as JSON instead of text
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Project both strategies month by month
    Compare(CompareArgs),
    /// Amortization schedule for the debt
    Amortize(AmortizeArgs),
    /// Investment growth schedule
    Grow(GrowArgs),
    /// Rate-only recommendation
    Decide(ScenarioArgs),
    /// Run every scenario in a CSV batch file
    Batch(BatchArgs),
}

/// Scenario from a JSON file or from individual flags
#[derive(Args, Clone)]
struct ScenarioArgs {
    /// Path to a JSON scenario file (overrides the flags below)
    #[arg(long)]
    input: Option<PathBuf>,

    /// Amount owed
    #[arg(long, default_value_t = 100_000.0)]
    balance: f64,

    /// Annual interest rate, percent
    #[arg(long, default_value_t = 5.0)]
    rate: f64,

    /// Minimum payment per period; auto-calculated for a 30-year term when omitted
    #[arg(long)]
    payment: Option<f64>,

    /// weekly, bi-weekly, monthly, quarterly or annually
    #[arg(long, default_value = "monthly")]
    frequency: String,

    /// Expected annual investment return, percent
    #[arg(long, default_value_t = 7.5)]
    return_rate: f64,

    /// Starting investment balance
    #[arg(long, default_value_t = 0.0)]
    initial: f64,

    /// Extra cash available each month
    #[arg(long, default_value_t = 250.0)]
    extra: f64,
}

impl ScenarioArgs {
    fn scenario(&self) -> Result<Scenario> {
        if let Some(path) = &self.input {
            return loader::load_scenario_json(path)
                .with_context(|| format!("Failed to load scenario from {}", path.display()));
        }

        let frequency = PaymentFrequency::parse_or_monthly(&self.frequency);
        let mut form = DebtForm::new(self.balance, self.rate, frequency);
        if let Some(payment) = self.payment {
            form.set_minimum_payment(payment);
        }

        Ok(Scenario::new(
            form.into_debt(),
            Investment::new(self.return_rate, self.initial),
            ExtraPayment::monthly(self.extra),
        ))
    }
}

#[derive(Args)]
struct CompareArgs {
    #[command(flatten)]
    scenario: ScenarioArgs,

    /// Write the aligned monthly series to this CSV file
    #[arg(long)]
    output: Option<PathBuf>,

    /// Label months with calendar dates starting here (YYYY-MM-DD)
    #[arg(long)]
    start_date: Option<NaiveDate>,

    /// Minimum years of investment growth
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(0..=MAX_YEARS))]
    min_years: u32,

    /// Minimum months in the aligned series
    #[arg(long, default_value_t = 120)]
    min_months: u32,
}

#[derive(Args)]
struct AmortizeArgs {
    #[command(flatten)]
    scenario: ScenarioArgs,

    /// Apply the extra payment to the debt
    #[arg(long)]
    with_extra: bool,

    /// Write the schedule to this CSV file
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Args)]
struct GrowArgs {
    /// Expected annual return, percent
    #[arg(long, default_value_t = 7.5)]
    return_rate: f64,

    /// Starting balance
    #[arg(long, default_value_t = 0.0)]
    initial: f64,

    /// Monthly contribution
    #[arg(long, default_value_t = 250.0)]
    contribution: f64,

    /// Whole years to project
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(0..=MAX_YEARS))]
    years: u32,

    /// Write the schedule to this CSV file
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Args)]
struct BatchArgs {
    /// CSV batch file, one scenario per row
    #[arg(long)]
    input: PathBuf,

    /// Write one summary row per scenario to this CSV file
    #[arg(long)]
    output: Option<PathBuf>,

    /// Skip rows that fail validation instead of aborting
    #[arg(long)]
    skip_invalid: bool,
}

fn create_output(path: &Path) -> Result<BufWriter<File>> {
    let file = File::create(path).with_context(|| format!("Unable to create {}", path.display()))?;
    Ok(BufWriter::new(file))
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn milestone(month: Option<u32>) -> String {
    match month {
        Some(m) => format!("month {} ({})", m, format_timeframe(m)),
        None => "not reached".to_string(),
    }
}

fn print_report(report: &ScenarioReport) {
    let summary = &report.summary;
    let decision = &report.decision;

    if let Some(name) = &report.name {
        println!("Scenario: {}", name);
    }
    println!(
        "Recommendation: {} (confidence {}, rates differ by {:.1} points)",
        decision.decision, decision.confidence, decision.rate_difference
    );
    println!(
        "  Minimum payments only: paid off in {}",
        format_timeframe(summary.debt_only_payoff_months)
    );
    println!(
        "  With extra on debt:    paid off in {} ({} sooner, ${:.2} interest saved)",
        format_timeframe(summary.debt_payoff_months),
        format_timeframe(summary.months_saved),
        summary.interest_saved
    );
    println!(
        "  Investing the extra:   ${:.2} after {} (${:.2} contributed)",
        summary.final_investment_balance,
        format_timeframe(report.run.result.total_months),
        summary.investment_contributions
    );
    println!("  Crossover: {}", milestone(summary.crossover_point));
    println!("  Coverage:  {}", milestone(summary.coverage_point));
}

fn run_compare(args: CompareArgs, json: bool) -> Result<()> {
    let scenario = args.scenario.scenario()?;
    scenario.validate()?;

    let runner = ScenarioRunner::with_config(ComparisonConfig {
        min_projection_years: args.min_years,
        min_comparison_months: args.min_months,
    });
    let outcome = runner.run(&scenario);

    if json {
        print_json(&outcome.run.result)?;
    } else {
        print_report(&outcome);
    }

    if let Some(path) = &args.output {
        report::write_comparison_csv(create_output(path)?, &outcome.run.result, args.start_date)?;
        log::info!("Series written to {}", path.display());
    }
    Ok(())
}

fn run_amortize(args: AmortizeArgs, json: bool) -> Result<()> {
    let scenario = args.scenario.scenario()?;
    let extra = if args.with_extra { scenario.extra_payment.engine_amount() } else { 0.0 };
    let schedule = amortize(&scenario.debt, extra);

    if json {
        print_json(&schedule)?;
    } else {
        println!(
            "{} months ({:?}), total interest ${:.2}, final balance ${:.2}",
            schedule.months,
            schedule.outcome,
            schedule.total_interest(),
            schedule.final_balance()
        );
    }

    if let Some(path) = &args.output {
        report::write_amortization_csv(create_output(path)?, &schedule)?;
    }
    Ok(())
}

fn run_grow(args: GrowArgs, json: bool) -> Result<()> {
    let investment = Investment::new(args.return_rate, args.initial);
    let schedule = grow_investment(&investment, args.contribution, args.years);

    if json {
        print_json(&schedule)?;
    } else {
        println!(
            "Value after {}: ${:.2} (${:.2} contributed, ${:.2} growth)",
            format_timeframe(schedule.months()),
            schedule.future_value,
            schedule.total_contributions(),
            schedule.total_growth()
        );
    }

    if let Some(path) = &args.output {
        report::write_investment_csv(create_output(path)?, &schedule)?;
    }
    Ok(())
}

fn run_decide(args: ScenarioArgs, json: bool) -> Result<()> {
    let scenario = args.scenario()?;
    let decision = decide(&scenario.debt, &scenario.investment);

    if json {
        print_json(&decision)?;
    } else {
        println!(
            "{} (confidence {}): debt {}% vs return {}%",
            decision.decision, decision.confidence, decision.debt_interest_rate, decision.investment_return_rate
        );
    }
    Ok(())
}

fn run_batch(args: BatchArgs, json: bool) -> Result<()> {
    let scenarios = loader::load_scenarios_csv(&args.input)
        .with_context(|| format!("Failed to load batch from {}", args.input.display()))?;

    let mut valid = Vec::with_capacity(scenarios.len());
    for (i, scenario) in scenarios.into_iter().enumerate() {
        match scenario.validate() {
            Ok(()) => valid.push(scenario),
            Err(e) if args.skip_invalid => log::warn!("Skipping row {}: {}", i + 1, e),
            Err(e) => bail!("Row {}: {}", i + 1, e),
        }
    }

    let reports = ScenarioRunner::new().run_batch(&valid);

    if json {
        print_json(&reports)?;
    } else {
        for report in &reports {
            print_report(report);
            println!();
        }
    }

    if let Some(path) = &args.output {
        report::write_summary_csv(create_output(path)?, &reports)?;
        println!("Summary written to {}", path.display());
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Compare(args) => run_compare(args, cli.json),
        Commands::Amortize(args) => run_amortize(args, cli.json),
        Commands::Grow(args) => run_grow(args, cli.json),
        Commands::Decide(args) => run_decide(args, cli.json),
        Commands::Batch(args) => run_batch(args, cli.json),
    }
}
