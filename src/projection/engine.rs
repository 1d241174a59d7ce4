//! Cost projection engine for renting versus buying

use super::cashflows::{HousingRow, ProjectionResult, RentalRow};
use super::mortgage::AmortizationSeries;
use super::series::{
    build_property_tax_series, build_rental_series, inflated_monthly_cost, truncate, MonthlySeries,
};
use crate::assumptions::Assumptions;
use crate::error::AssumptionError;
use log::info;

/// Owns the series of one projection run.
///
/// All series are built once by [`CostProjectionEngine::new`], in order:
/// rent, amortization, property tax. HOA and insurance are derived on demand.
/// A fresh engine per run means nothing carries over between runs.
#[derive(Debug, Clone)]
pub struct CostProjectionEngine {
    assumptions: Assumptions,
    rental: MonthlySeries,
    amortization: AmortizationSeries,
    property_tax: MonthlySeries,
}

impl CostProjectionEngine {
    /// Validate the assumptions and build every series
    pub fn new(assumptions: Assumptions) -> Result<Self, AssumptionError> {
        assumptions.validate()?;

        let months = assumptions.living_months;

        let rental = build_rental_series(
            months,
            assumptions.inflation_rate,
            assumptions.initial_monthly_rent,
        );

        let amortization = AmortizationSeries::build(
            months,
            assumptions.total_house_price,
            assumptions.downpayment_pct,
            assumptions.mortgage_term_months,
            assumptions.annual_interest_rate,
        );

        let property_tax = build_property_tax_series(
            months,
            assumptions.total_house_price,
            assumptions.annual_property_tax_rate,
            assumptions.inflation_rate,
            assumptions.assessment_cap_rate,
        );

        Ok(Self {
            assumptions,
            rental,
            amortization,
            property_tax,
        })
    }

    pub fn assumptions(&self) -> &Assumptions {
        &self.assumptions
    }

    pub fn rental_series(&self) -> &MonthlySeries {
        &self.rental
    }

    pub fn amortization(&self) -> &AmortizationSeries {
        &self.amortization
    }

    pub fn property_tax_series(&self) -> &MonthlySeries {
        &self.property_tax
    }

    /// HOA dues for a month, grown by inflation
    pub fn hoa_for_month(&self, month: u32) -> f64 {
        inflated_monthly_cost(
            self.assumptions.monthly_hoa,
            self.assumptions.inflation_rate,
            month,
        )
    }

    /// Insurance premium for a month, grown by inflation
    pub fn insurance_for_month(&self, month: u32) -> f64 {
        inflated_monthly_cost(
            self.assumptions.monthly_insurance,
            self.assumptions.inflation_rate,
            month,
        )
    }

    /// Rent row for every month of the horizon
    pub fn rental_rows(&self) -> Vec<RentalRow> {
        self.rental
            .iter()
            .zip(0u32..)
            .map(|(rent, month)| RentalRow {
                month,
                label: self.assumptions.month_label(month),
                rent,
            })
            .collect()
    }

    /// Ownership row for every month; HOA and insurance are truncated per month
    pub fn housing_rows(&self) -> Vec<HousingRow> {
        (0..self.assumptions.living_months)
            .map(|month| self.housing_row(month))
            .collect()
    }

    fn housing_row(&self, month: u32) -> HousingRow {
        let idx = month as usize;
        let mut row = HousingRow::new(
            month,
            self.amortization.interest().get(idx).unwrap_or(0),
            self.amortization.principal().get(idx).unwrap_or(0),
            self.property_tax.get(idx).unwrap_or(0),
            truncate(self.hoa_for_month(month)),
            truncate(self.insurance_for_month(month)),
        );
        row.label = self.assumptions.month_label(month);
        row
    }

    /// Sum of rent over the horizon
    pub fn total_rental_cost(&self) -> i64 {
        self.rental.total()
    }

    /// Total and pure (principal excluded) housing cost over the horizon
    pub fn total_housing_cost(&self) -> (i64, i64) {
        self.housing_rows()
            .iter()
            .fold((0, 0), |(total, pure), row| (total + row.total, pure + row.pure_cost()))
    }

    /// Assemble the monthly rows and totals of this run
    pub fn project(&self) -> ProjectionResult {
        let mut result = ProjectionResult::new(
            self.assumptions.living_months,
            self.amortization.monthly_payment(),
            self.assumptions.downpayment(),
            self.amortization.remaining_balance(),
        );
        result.rental = self.rental_rows();
        result.housing = self.housing_rows();

        info!(
            "Projected {} months: rent {}, housing {}",
            result.living_months,
            result.total_rental_cost(),
            result.total_housing_cost()
        );
        result
    }
}

/// Validate, build and project in one call
pub fn project(assumptions: Assumptions) -> Result<ProjectionResult, AssumptionError> {
    Ok(CostProjectionEngine::new(assumptions)?.project())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_reference_totals() {
        let engine = CostProjectionEngine::new(Assumptions::default()).unwrap();

        assert_eq!(engine.total_rental_cost(), 210_643);
        assert_eq!(engine.total_housing_cost(), (264_122, 189_969));

        let summary = engine.project().summary();
        assert_eq!(summary.total_rental_cost, 210_643);
        assert_eq!(summary.total_housing_cost, 264_122);
        assert_eq!(summary.total_buying_cost, 444_122);
        assert_eq!(summary.pure_buying_cost, 189_969);
        assert_eq!(summary.equity_built, 74_153);
        assert_eq!(summary.rent_minus_pure_cost, 20_674);
        assert_abs_diff_eq!(summary.monthly_payment, 3233.12, epsilon = 0.01);
    }

    #[test]
    fn test_reference_rows() {
        let result = project(Assumptions::default()).unwrap();

        assert_eq!(result.rental.len(), 60);
        assert_eq!(result.housing.len(), 60);
        assert_eq!(result.rental[0].rent, 3300);

        assert_eq!(result.housing[0], HousingRow::new(0, 2100, 1133, 547, 500, 60));
        assert_eq!(result.housing[1], HousingRow::new(1, 2096, 1136, 548, 501, 60));
        assert_eq!(result.housing[59], HousingRow::new(59, 1887, 1345, 604, 565, 67));
        assert_eq!(result.housing[0].total, 4340);
    }

    #[test]
    fn test_every_series_spans_horizon() {
        for months in [1, 13, 60, 361] {
            let assumptions = Assumptions {
                living_months: months,
                ..Default::default()
            };
            let engine = CostProjectionEngine::new(assumptions).unwrap();
            let n = months as usize;

            assert_eq!(engine.rental_series().len(), n);
            assert_eq!(engine.amortization().interest().len(), n);
            assert_eq!(engine.amortization().principal().len(), n);
            assert_eq!(engine.property_tax_series().len(), n);
            assert_eq!(engine.housing_rows().len(), n);
        }
    }

    #[test]
    fn test_zero_interest_projection() {
        let assumptions = Assumptions {
            annual_interest_rate: 0.0,
            ..Default::default()
        };
        let engine = CostProjectionEngine::new(assumptions).unwrap();

        assert_abs_diff_eq!(engine.amortization().monthly_payment(), 2000.0, epsilon = 1e-9);
        assert!(engine.amortization().interest().iter().all(|i| i == 0));
        assert!(engine.amortization().principal().iter().all(|p| p == 2000));
    }

    #[test]
    fn test_invalid_assumptions_fail_fast() {
        let assumptions = Assumptions {
            downpayment_pct: 1.5,
            ..Default::default()
        };
        let err = CostProjectionEngine::new(assumptions).unwrap_err();
        assert_eq!(err.field(), "downpayment_pct");
    }

    #[test]
    fn test_oversized_price_rejected_before_building() {
        let assumptions = Assumptions {
            total_house_price: 1e20,
            ..Default::default()
        };
        let err = CostProjectionEngine::new(assumptions).unwrap_err();
        assert_eq!(err.field(), "total_house_price");
    }

    #[test]
    fn test_largest_accepted_projection_totals_fit() {
        let assumptions = Assumptions {
            living_months: 1200,
            mortgage_term_months: 1200,
            total_house_price: 1e9,
            initial_monthly_rent: 1e7,
            ..Default::default()
        };
        let ceiling = assumptions.cost_ceiling();
        let engine = CostProjectionEngine::new(assumptions).unwrap();

        let (total, pure) = engine.total_housing_cost();
        assert!(total > 0 && (total as f64) <= ceiling);
        assert!(pure <= total);
        assert!((engine.total_rental_cost() as f64) <= ceiling);
        assert!((engine.project().summary().total_buying_cost as f64) <= ceiling);
    }

    #[test]
    fn test_runs_are_idempotent() {
        let first = project(Assumptions::default()).unwrap();
        let second = project(Assumptions::default()).unwrap();
        assert_eq!(first, second);

        let engine = CostProjectionEngine::new(Assumptions::default()).unwrap();
        assert_eq!(engine.project(), engine.project());
        assert_eq!(engine.rental_series().len(), 60);
    }

    #[test]
    fn test_labels_follow_start_month() {
        let assumptions = Assumptions {
            living_months: 3,
            start_month: chrono::NaiveDate::from_ymd_opt(2024, 12, 1),
            ..Default::default()
        };
        let result = project(assumptions).unwrap();

        assert_eq!(result.rental[0].label.as_deref(), Some("2024-12"));
        assert_eq!(result.housing[1].label.as_deref(), Some("2025-01"));
        assert_eq!(result.housing[2].label.as_deref(), Some("2025-02"));
    }

    #[test]
    fn test_derived_costs_untruncated() {
        let engine = CostProjectionEngine::new(Assumptions::default()).unwrap();
        let hoa = engine.hoa_for_month(1);
        assert!(hoa > 501.0 && hoa < 502.0);
        assert_abs_diff_eq!(engine.insurance_for_month(0), 60.0);
    }
}
