//! Text, CSV and JSON renderings of a projection

use crate::projection::{HousingRow, ProjectionResult, ProjectionSummary, RentalRow};
use crate::scenario::{ScenarioOutcome, Tenure};
use std::io::{self, Write};

const RENTAL_RULE: usize = 28;
const HOUSING_RULE: usize = 84;

fn month_cell(month: u32, label: Option<&str>) -> String {
    match label {
        Some(label) => format!("{:>5} {:>7}", month, label),
        None => format!("{:>5}", month),
    }
}

/// Monthly rent table
pub fn write_rental_table<W: Write>(out: &mut W, rows: &[RentalRow]) -> io::Result<()> {
    let rule = "#".repeat(RENTAL_RULE);
    writeln!(out, "{}", rule)?;
    writeln!(out, "MONTHLY PAYMENT FOR RENTAL")?;
    writeln!(out, "{}", rule)?;
    writeln!(out, "Month | Cost")?;
    writeln!(out, "{}", rule)?;
    for row in rows {
        writeln!(out, "{} | {:>6}", month_cell(row.month, row.label.as_deref()), row.rent)?;
    }
    Ok(())
}

/// Monthly ownership table
pub fn write_housing_table<W: Write>(out: &mut W, rows: &[HousingRow]) -> io::Result<()> {
    let rule = "#".repeat(HOUSING_RULE);
    writeln!(out, "{}", rule)?;
    writeln!(out, "MONTHLY PAYMENT BREAKDOWN FOR BUYING A HOUSE")?;
    writeln!(out, "{}", rule)?;
    writeln!(
        out,
        "Month | Interest | Principal | Property Tax |   HOA | Insurance | Total"
    )?;
    writeln!(out, "{}", rule)?;
    for row in rows {
        writeln!(
            out,
            "{} | {:>8} | {:>9} | {:>12} | {:>5} | {:>9} | {:>5}",
            month_cell(row.month, row.label.as_deref()),
            row.interest,
            row.principal,
            row.property_tax,
            row.hoa,
            row.insurance,
            row.total,
        )?;
    }
    Ok(())
}

/// The three headline totals plus supporting figures
pub fn write_summary<W: Write>(out: &mut W, summary: &ProjectionSummary) -> io::Result<()> {
    writeln!(out, "To live {} months", summary.living_months)?;
    writeln!(out, "Total cost of rental {}", summary.total_rental_cost)?;
    writeln!(
        out,
        "Total cost of buying a house {} (including downpayment of {:.0})",
        summary.total_buying_cost, summary.downpayment
    )?;
    writeln!(
        out,
        "Pure cost of buying a house {} (excluding principal and downpayment)",
        summary.pure_buying_cost
    )?;
    writeln!(out, "Monthly mortgage payment {:.2}", summary.monthly_payment)?;
    writeln!(
        out,
        "Equity built {} (mortgage balance left {:.2})",
        summary.equity_built, summary.remaining_balance
    )?;
    Ok(())
}

/// Full report: rental table, housing table, summary
pub fn write_report<W: Write>(out: &mut W, result: &ProjectionResult) -> io::Result<()> {
    write_rental_table(out, &result.rental)?;
    writeln!(out)?;
    write_housing_table(out, &result.housing)?;
    writeln!(out)?;
    write_summary(out, &result.summary())
}

/// Housing table as CSV, one row per month
pub fn write_housing_csv<W: Write>(out: W, rows: &[HousingRow]) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_writer(out);
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Summary as pretty-printed JSON
pub fn summary_json(summary: &ProjectionSummary) -> serde_json::Result<String> {
    serde_json::to_string_pretty(summary)
}

/// One line per scenario: totals and the cheaper option
pub fn write_comparison<W: Write>(out: &mut W, outcomes: &[ScenarioOutcome]) -> io::Result<()> {
    writeln!(
        out,
        "{:<20} {:>6} {:>12} {:>12} {:>12} {:>12}  {}",
        "Scenario", "Months", "Rent", "Buy", "Pure buy", "Difference", "Cheaper"
    )?;
    writeln!(out, "{}", "-".repeat(90))?;
    for outcome in outcomes {
        let s = &outcome.summary;
        let cheaper = match outcome.cheaper_option() {
            Tenure::Rent => "rent",
            Tenure::Buy => "buy",
            Tenure::Even => "even",
        };
        writeln!(
            out,
            "{:<20} {:>6} {:>12} {:>12} {:>12} {:>12}  {}",
            outcome.name,
            s.living_months,
            s.total_rental_cost,
            s.total_buying_cost,
            s.pure_buying_cost,
            s.rent_minus_pure_cost,
            cheaper,
        )?;
    }
    Ok(())
}
