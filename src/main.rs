//! Finance Formulas CLI
//!
//! Evaluates a single formula from the command line.
//! Supports JSON output via the --json flag and CSV schedules via --csv.
//! Accepts config via environment variables:
//!   FINANCE_PRECISION (decimal places, default 2)
//!   IRR_TOLERANCE, IRR_MAX_ITERATIONS, IRR_INITIAL_GUESS

use std::env;
use std::io;
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use finance_formulas::{
    budgeting, depreciation, tvm, DepreciationMethod, DepreciationSchedule, FinanceResult,
    IrrConfig,
};
use log::info;
use serde::Serialize;

#[derive(Parser)]
#[command(
    name = "finance",
    version,
    about = "Time value of money, depreciation and capital budgeting formulas"
)]
struct Cli {
    /// Print the result as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Future value of a present sum: pv * (1 + rate)^periods
    #[command(allow_negative_numbers = true)]
    Fv { pv: f64, rate: f64, periods: f64 },

    /// Future value under continuous compounding: pv * e^(rate * time)
    #[command(allow_negative_numbers = true)]
    Fvcc { pv: f64, rate: f64, time: f64 },

    /// Present value of a future sum: fv / (1 + rate)^periods
    #[command(allow_negative_numbers = true)]
    Pv { fv: f64, rate: f64, periods: f64 },

    /// Present value of a level annuity
    #[command(allow_negative_numbers = true)]
    Pva { payment: f64, rate: f64, periods: f64 },

    /// Future value of a level annuity
    #[command(allow_negative_numbers = true)]
    Fva { payment: f64, rate: f64, periods: f64 },

    /// Future value of a growing annuity
    #[command(allow_negative_numbers = true)]
    Fvga { payment: f64, rate: f64, growth: f64, periods: f64 },

    /// Straight-line depreciation per period
    #[command(allow_negative_numbers = true)]
    Sl {
        cost: f64,
        salvage: f64,
        life: u32,
        /// Print the full schedule as CSV
        #[arg(long)]
        csv: bool,
    },

    /// Sum-of-the-years'-digits depreciation schedule
    #[command(allow_negative_numbers = true)]
    Syd {
        cost: f64,
        salvage: f64,
        life: u32,
        /// Print the schedule as CSV
        #[arg(long)]
        csv: bool,
    },

    /// Declining-balance depreciation schedule (rate 2 = double declining)
    #[command(allow_negative_numbers = true)]
    Dbal {
        cost: f64,
        salvage: f64,
        rate: f64,
        life: u32,
        /// Print the schedule as CSV
        #[arg(long)]
        csv: bool,
    },

    /// Single-period rate of return
    #[command(allow_negative_numbers = true)]
    Ror { end_value: f64, initial_value: f64 },

    /// Net present value of a level cash inflow
    #[command(allow_negative_numbers = true)]
    Npv {
        initial_outlay: f64,
        net_cash_inflow: f64,
        rate: f64,
        periods: u32,
    },

    /// Internal rate of return of an outlay followed by end-of-period inflows
    #[command(allow_negative_numbers = true)]
    Irr {
        initial_outlay: f64,
        #[arg(required = true, num_args = 1..)]
        cashflows: Vec<f64>,
    },
}

impl Command {
    fn name(&self) -> &'static str {
        match self {
            Command::Fv { .. } => "future_value",
            Command::Fvcc { .. } => "future_value_continuous",
            Command::Pv { .. } => "present_value",
            Command::Pva { .. } => "present_value_annuity",
            Command::Fva { .. } => "future_value_annuity",
            Command::Fvga { .. } => "future_value_growing_annuity",
            Command::Sl { .. } => "straight_line",
            Command::Syd { .. } => "sum_of_years_digits",
            Command::Dbal { .. } => "declining_balance",
            Command::Ror { .. } => "rate_of_return",
            Command::Npv { .. } => "net_present_value",
            Command::Irr { .. } => "internal_rate_of_return",
        }
    }

    fn wants_csv(&self) -> bool {
        matches!(
            self,
            Command::Sl { csv: true, .. }
                | Command::Syd { csv: true, .. }
                | Command::Dbal { csv: true, .. }
        )
    }
}

/// Result of evaluating one command
enum Outcome {
    Value(f64),
    Schedule(DepreciationSchedule),
}

#[derive(Serialize)]
struct ValueResponse<'a> {
    formula: &'a str,
    value: f64,
}

fn env_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key).ok().and_then(|s| s.parse().ok()).unwrap_or(default)
}

fn irr_config_from_env() -> IrrConfig {
    let defaults = IrrConfig::default();
    IrrConfig::default()
        .with_tolerance(env_or("IRR_TOLERANCE", defaults.tolerance))
        .with_max_iterations(env_or("IRR_MAX_ITERATIONS", defaults.max_iterations))
        .with_initial_guess(env_or("IRR_INITIAL_GUESS", defaults.initial_guess))
}

fn evaluate(command: &Command, irr_config: &IrrConfig) -> FinanceResult<Outcome> {
    let outcome = match *command {
        Command::Fv { pv, rate, periods } => Outcome::Value(tvm::future_value(pv, rate, periods)?),
        Command::Fvcc { pv, rate, time } => {
            Outcome::Value(tvm::future_value_continuous(pv, rate, time)?)
        }
        Command::Pv { fv, rate, periods } => Outcome::Value(tvm::present_value(fv, rate, periods)?),
        Command::Pva { payment, rate, periods } => {
            Outcome::Value(tvm::present_value_annuity(payment, rate, periods)?)
        }
        Command::Fva { payment, rate, periods } => {
            Outcome::Value(tvm::future_value_annuity(payment, rate, periods)?)
        }
        Command::Fvga { payment, rate, growth, periods } => {
            Outcome::Value(tvm::future_value_growing_annuity(payment, rate, growth, periods)?)
        }
        Command::Sl { cost, salvage, life, csv } => {
            if csv {
                Outcome::Schedule(DepreciationSchedule::build(
                    cost,
                    salvage,
                    life,
                    DepreciationMethod::StraightLine,
                )?)
            } else {
                Outcome::Value(depreciation::straight_line(cost, salvage, life)?)
            }
        }
        Command::Syd { cost, salvage, life, .. } => Outcome::Schedule(DepreciationSchedule::build(
            cost,
            salvage,
            life,
            DepreciationMethod::SumOfYearsDigits,
        )?),
        Command::Dbal { cost, salvage, rate, life, .. } => {
            let method = DepreciationMethod::DecliningBalance { rate };
            Outcome::Schedule(DepreciationSchedule::build(cost, salvage, life, method)?)
        }
        Command::Ror { end_value, initial_value } => {
            Outcome::Value(budgeting::rate_of_return(end_value, initial_value)?)
        }
        Command::Npv { initial_outlay, net_cash_inflow, rate, periods } => Outcome::Value(
            budgeting::net_present_value(initial_outlay, net_cash_inflow, rate, periods)?,
        ),
        Command::Irr { initial_outlay, ref cashflows } => Outcome::Value(
            budgeting::internal_rate_of_return(initial_outlay, cashflows, irr_config)?,
        ),
    };
    Ok(outcome)
}

fn print_schedule(schedule: &DepreciationSchedule, precision: usize) {
    println!(
        "{} depreciation, cost {:.p$}, salvage {:.p$}, life {}",
        schedule.method,
        schedule.cost,
        schedule.salvage,
        schedule.life,
        p = precision
    );
    println!("{:>6} {:>14} {:>14} {:>14}", "Period", "Expense", "Accumulated", "BookValue");
    println!("{}", "-".repeat(51));
    for row in &schedule.rows {
        println!(
            "{:>6} {:>14.p$} {:>14.p$} {:>14.p$}",
            row.period,
            row.expense,
            row.accumulated,
            row.book_value,
            p = precision
        );
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let precision: usize = env_or("FINANCE_PRECISION", 2);
    let irr_config = irr_config_from_env();
    let name = cli.command.name();

    info!("Evaluating {name}");
    let outcome = evaluate(&cli.command, &irr_config)
        .with_context(|| format!("failed to evaluate {name}"))?;

    match outcome {
        Outcome::Value(value) if cli.json => {
            let response = ValueResponse { formula: name, value };
            println!("{}", serde_json::to_string(&response)?);
        }
        Outcome::Value(value) => println!("{:.p$}", value, p = precision),
        Outcome::Schedule(schedule) if cli.command.wants_csv() => {
            schedule
                .write_csv(io::stdout().lock())
                .context("failed to write schedule as CSV")?;
        }
        Outcome::Schedule(schedule) if cli.json => {
            println!("{}", serde_json::to_string(&schedule)?);
        }
        Outcome::Schedule(schedule) => print_schedule(&schedule, precision),
    }

    Ok(())
}
