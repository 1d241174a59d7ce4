//! Rent vs Buy CLI
//!
//! Command-line interface for projecting and comparing the cost of renting
//! against buying a home

use anyhow::{Context, Result};
use clap::{Args, Parser};
use log::info;
use rent_vs_buy::assumptions::{load_assumptions, parse_start_month};
use rent_vs_buy::report;
use rent_vs_buy::{Assumptions, CostProjectionEngine, ScenarioRunner};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "rent_vs_buy",
    version,
    about = "Compare the cost of renting against buying a home"
)]
struct Cli {
    /// JSON file with assumptions; missing fields use the reference scenario
    #[arg(long)]
    config: Option<PathBuf>,

    /// CSV grid of named scenarios to compare instead of a single report
    #[arg(long)]
    scenarios: Option<PathBuf>,

    /// Write the monthly housing breakdown to this CSV file
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Print the summary as JSON instead of the text report
    #[arg(long)]
    json: bool,

    #[command(flatten)]
    overrides: Overrides,
}

/// Per-parameter overrides, applied after the config file
#[derive(Args, Debug, Default)]
struct Overrides {
    /// Occupancy horizon in months
    #[arg(long)]
    living_months: Option<u32>,

    /// Annual inflation rate (0.025 = 2.5%)
    #[arg(long)]
    inflation_rate: Option<f64>,

    /// Rent in the first month
    #[arg(long)]
    initial_rent: Option<f64>,

    #[arg(long)]
    house_price: Option<f64>,

    /// Annual mortgage rate
    #[arg(long)]
    interest_rate: Option<f64>,

    /// Loan term in months
    #[arg(long)]
    mortgage_term: Option<u32>,

    /// Downpayment share of the price, in [0, 1)
    #[arg(long)]
    downpayment_pct: Option<f64>,

    /// Monthly HOA dues
    #[arg(long)]
    hoa: Option<f64>,

    /// Monthly insurance premium
    #[arg(long)]
    insurance: Option<f64>,

    /// Annual property tax rate
    #[arg(long)]
    property_tax_rate: Option<f64>,

    /// Annual cap on assessed-value growth
    #[arg(long)]
    assessment_cap: Option<f64>,

    /// First month of the horizon (YYYY-MM), used to label rows
    #[arg(long)]
    start_month: Option<String>,
}

impl Overrides {
    fn apply(self, a: &mut Assumptions) -> Result<()> {
        if let Some(v) = self.living_months {
            a.living_months = v;
        }
        if let Some(v) = self.inflation_rate {
            a.inflation_rate = v;
        }
        if let Some(v) = self.initial_rent {
            a.initial_monthly_rent = v;
        }
        if let Some(v) = self.house_price {
            a.total_house_price = v;
        }
        if let Some(v) = self.interest_rate {
            a.annual_interest_rate = v;
        }
        if let Some(v) = self.mortgage_term {
            a.mortgage_term_months = v;
        }
        if let Some(v) = self.downpayment_pct {
            a.downpayment_pct = v;
        }
        if let Some(v) = self.hoa {
            a.monthly_hoa = v;
        }
        if let Some(v) = self.insurance {
            a.monthly_insurance = v;
        }
        if let Some(v) = self.property_tax_rate {
            a.annual_property_tax_rate = v;
        }
        if let Some(v) = self.assessment_cap {
            a.assessment_cap_rate = v;
        }
        if let Some(text) = self.start_month {
            a.start_month = Some(parse_start_month(&text)?);
        }
        Ok(())
    }
}

fn resolve_assumptions(config: Option<&PathBuf>, overrides: Overrides) -> Result<Assumptions> {
    let mut assumptions = match config {
        Some(path) => load_assumptions(path)
            .with_context(|| format!("loading assumptions from {}", path.display()))?,
        None => Assumptions::default_scenario(),
    };
    overrides.apply(&mut assumptions)?;
    Ok(assumptions)
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let assumptions = resolve_assumptions(cli.config.as_ref(), cli.overrides)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if let Some(path) = &cli.scenarios {
        let runner = ScenarioRunner::with_assumptions(assumptions);
        let scenarios = runner
            .load_scenarios(path)
            .with_context(|| format!("loading scenarios from {}", path.display()))?;
        info!("Running {} scenarios", scenarios.len());

        let outcomes = runner.run_scenarios(&scenarios)?;
        if cli.json {
            writeln!(out, "{}", serde_json::to_string_pretty(&outcomes)?)?;
        } else {
            report::write_comparison(&mut out, &outcomes)?;
        }
        out.flush()?;
        return Ok(());
    }

    let engine = CostProjectionEngine::new(assumptions).context("invalid assumptions")?;
    let result = engine.project();

    if let Some(path) = &cli.csv {
        let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
        report::write_housing_csv(BufWriter::new(file), &result.housing)?;
        info!("Housing breakdown written to {}", path.display());
    }

    if cli.json {
        writeln!(out, "{}", report::summary_json(&result.summary())?)?;
    } else {
        report::write_report(&mut out, &result)?;
    }
    out.flush()?;
    Ok(())
}
