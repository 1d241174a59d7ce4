//! File-based assumption loader
//!
//! Reads a single assumption set from JSON, or a grid of named scenarios
//! from CSV. Missing JSON fields and empty CSV cells fall back to a base set.

use super::Assumptions;
use crate::error::LoadError;
use crate::scenario::Scenario;
use chrono::NaiveDate;
use log::debug;
use std::fs;
use std::path::Path;

/// Load assumptions from a JSON document; absent fields keep their defaults
pub fn load_assumptions<P: AsRef<Path>>(path: P) -> Result<Assumptions, LoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let assumptions: Assumptions = serde_json::from_str(&text)?;
    debug!("Loaded assumptions from {}", path.display());
    Ok(assumptions)
}

/// Raw CSV row of a scenario grid; every column except `name` is optional
#[derive(Debug, serde::Deserialize)]
struct ScenarioRow {
    name: String,
    living_months: Option<u32>,
    inflation_rate: Option<f64>,
    initial_monthly_rent: Option<f64>,
    total_house_price: Option<f64>,
    annual_interest_rate: Option<f64>,
    mortgage_term_months: Option<u32>,
    downpayment_pct: Option<f64>,
    monthly_hoa: Option<f64>,
    monthly_insurance: Option<f64>,
    annual_property_tax_rate: Option<f64>,
    assessment_cap_rate: Option<f64>,
    start_month: Option<String>,
}

impl ScenarioRow {
    fn to_scenario(self, base: &Assumptions) -> Result<Scenario, LoadError> {
        let start_month = match self.start_month.as_deref() {
            Some(text) => Some(parse_start_month(text)?),
            None => base.start_month,
        };

        let assumptions = Assumptions {
            living_months: self.living_months.unwrap_or(base.living_months),
            inflation_rate: self.inflation_rate.unwrap_or(base.inflation_rate),
            initial_monthly_rent: self
                .initial_monthly_rent
                .unwrap_or(base.initial_monthly_rent),
            total_house_price: self.total_house_price.unwrap_or(base.total_house_price),
            annual_interest_rate: self
                .annual_interest_rate
                .unwrap_or(base.annual_interest_rate),
            mortgage_term_months: self
                .mortgage_term_months
                .unwrap_or(base.mortgage_term_months),
            downpayment_pct: self.downpayment_pct.unwrap_or(base.downpayment_pct),
            monthly_hoa: self.monthly_hoa.unwrap_or(base.monthly_hoa),
            monthly_insurance: self.monthly_insurance.unwrap_or(base.monthly_insurance),
            annual_property_tax_rate: self
                .annual_property_tax_rate
                .unwrap_or(base.annual_property_tax_rate),
            assessment_cap_rate: self
                .assessment_cap_rate
                .unwrap_or(base.assessment_cap_rate),
            start_month,
        };

        Ok(Scenario::new(self.name, assumptions))
    }
}

/// Load a scenario grid from CSV, filling empty cells from `base`
pub fn load_scenarios<P: AsRef<Path>>(
    path: P,
    base: &Assumptions,
) -> Result<Vec<Scenario>, LoadError> {
    let path = path.as_ref();
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)?;

    let mut scenarios = Vec::new();
    for result in reader.deserialize() {
        let row: ScenarioRow = result?;
        scenarios.push(row.to_scenario(base)?);
    }

    if scenarios.is_empty() {
        return Err(LoadError::EmptyGrid(path.to_path_buf()));
    }

    debug!("Loaded {} scenarios from {}", scenarios.len(), path.display());
    Ok(scenarios)
}

/// Parse a `YYYY-MM` calendar month into the first day of that month
pub fn parse_start_month(text: &str) -> Result<NaiveDate, LoadError> {
    NaiveDate::parse_from_str(&format!("{}-01", text.trim()), "%Y-%m-%d")
        .map_err(|_| LoadError::StartMonth(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::path::PathBuf;

    fn fixture(name: &str, contents: &str) -> PathBuf {
        let dir = std::env::temp_dir().join("rent_vs_buy_loader_tests");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load_partial_json() {
        let path = fixture(
            "partial.json",
            r#"{ "living_months": 84, "annual_interest_rate": 0.06 }"#,
        );
        let assumptions = load_assumptions(&path).unwrap();

        assert_eq!(assumptions.living_months, 84);
        assert_relative_eq!(assumptions.annual_interest_rate, 0.06);
        // Untouched fields keep the reference values
        assert_relative_eq!(assumptions.total_house_price, 900_000.0);
        assert_eq!(assumptions.mortgage_term_months, 360);
    }

    #[test]
    fn test_load_json_with_start_month() {
        let path = fixture("dated.json", r#"{ "start_month": "2025-03-01" }"#);
        let assumptions = load_assumptions(&path).unwrap();
        assert_eq!(assumptions.month_label(0).as_deref(), Some("2025-03"));
    }

    #[test]
    fn test_load_malformed_json() {
        let path = fixture("broken.json", r#"{ "living_months": "sixty" }"#);
        assert!(matches!(load_assumptions(&path), Err(LoadError::Json(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_assumptions("/nonexistent/rent_vs_buy.json").unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[test]
    fn test_load_scenario_grid() {
        let path = fixture(
            "grid.csv",
            "name,living_months,annual_interest_rate,initial_monthly_rent,start_month\n\
             baseline,,,,\n\
             high_rate,,0.07,,2026-01\n\
             long_stay,120,,2800,\n",
        );
        let base = Assumptions::default();
        let scenarios = load_scenarios(&path, &base).unwrap();

        assert_eq!(scenarios.len(), 3);
        assert_eq!(scenarios[0].name, "baseline");
        assert_eq!(scenarios[0].assumptions, base);

        assert_relative_eq!(scenarios[1].assumptions.annual_interest_rate, 0.07);
        assert_eq!(scenarios[1].assumptions.month_label(0).as_deref(), Some("2026-01"));

        assert_eq!(scenarios[2].assumptions.living_months, 120);
        assert_relative_eq!(scenarios[2].assumptions.initial_monthly_rent, 2800.0);
        assert_relative_eq!(scenarios[2].assumptions.annual_interest_rate, 0.035);
    }

    #[test]
    fn test_empty_scenario_grid() {
        let path = fixture("empty.csv", "name,living_months\n");
        let err = load_scenarios(&path, &Assumptions::default()).unwrap_err();
        assert!(matches!(err, LoadError::EmptyGrid(_)));
    }

    #[test]
    fn test_parse_start_month() {
        let date = parse_start_month("2024-07").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 7, 1).unwrap());
        assert!(matches!(
            parse_start_month("July 2024"),
            Err(LoadError::StartMonth(_))
        ));
    }
}
