//! Financial assumptions for a rent-versus-buy projection

pub mod loader;

pub use loader::{load_assumptions, load_scenarios, parse_start_month};

use crate::error::AssumptionError;
use crate::projection::{assessed_growth_rate, inflated_monthly_cost, monthly_payment};
use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// Annual cap on assessed-value growth (California Proposition 13)
pub const DEFAULT_ASSESSMENT_CAP_RATE: f64 = 0.02;

/// Longest horizon or loan term accepted (100 years)
pub const MAX_MONTHS: u32 = 1200;

/// Largest price or monthly amount accepted
pub const MAX_AMOUNT: f64 = 1e12;

/// Largest total a projection may reach; well inside i64
pub const MAX_PROJECTED_COST: f64 = 1e15;

/// Every input parameter of a projection run
///
/// Rates are annual fractions (0.035 for 3.5%); amounts are monthly unless
/// the name says otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Assumptions {
    /// Occupancy horizon in months
    pub living_months: u32,

    /// Annual inflation, applied monthly to rent, HOA and insurance
    pub inflation_rate: f64,

    /// Rent due in the first month
    pub initial_monthly_rent: f64,

    /// Purchase price of the house
    pub total_house_price: f64,

    /// Mortgage rate
    pub annual_interest_rate: f64,

    /// Full loan term (360 for a 30 year mortgage)
    pub mortgage_term_months: u32,

    /// Share of the price paid upfront, in [0, 1)
    pub downpayment_pct: f64,

    pub monthly_hoa: f64,

    pub monthly_insurance: f64,

    pub annual_property_tax_rate: f64,

    /// Statutory cap on annual assessed-value growth
    pub assessment_cap_rate: f64,

    /// First calendar month of the horizon, used only to label rows
    pub start_month: Option<NaiveDate>,
}

impl Assumptions {
    /// Reference scenario: a $900k home against $3,300 rent over five years
    pub fn default_scenario() -> Self {
        Self {
            living_months: 60,
            inflation_rate: 0.025,
            initial_monthly_rent: 3300.0,
            total_house_price: 900_000.0,
            annual_interest_rate: 0.035,
            mortgage_term_months: 360, // 30 years
            downpayment_pct: 0.2,
            monthly_hoa: 500.0,
            monthly_insurance: 60.0,
            annual_property_tax_rate: 0.0073,
            assessment_cap_rate: DEFAULT_ASSESSMENT_CAP_RATE,
            start_month: None,
        }
    }

    /// Check every parameter, reporting the first one out of bounds
    pub fn validate(&self) -> Result<(), AssumptionError> {
        let terms = [
            ("living_months", self.living_months),
            ("mortgage_term_months", self.mortgage_term_months),
        ];
        for (field, months) in terms {
            if months == 0 {
                return Err(AssumptionError::NonPositive { field, value: 0.0 });
            }
            if months > MAX_MONTHS {
                return Err(AssumptionError::TooLarge {
                    field,
                    value: months as f64,
                    max: MAX_MONTHS as f64,
                });
            }
        }

        let rates = [
            ("inflation_rate", self.inflation_rate),
            ("annual_interest_rate", self.annual_interest_rate),
            ("annual_property_tax_rate", self.annual_property_tax_rate),
            ("assessment_cap_rate", self.assessment_cap_rate),
            ("downpayment_pct", self.downpayment_pct),
        ];
        for (field, value) in rates {
            check_non_negative(field, value)?;
            if value >= 1.0 {
                return Err(AssumptionError::OutOfRange {
                    field,
                    value,
                    min: 0.0,
                    max: 1.0,
                });
            }
        }

        let amounts = [
            ("initial_monthly_rent", self.initial_monthly_rent),
            ("monthly_hoa", self.monthly_hoa),
            ("monthly_insurance", self.monthly_insurance),
            ("total_house_price", self.total_house_price),
        ];
        for (field, value) in amounts {
            check_non_negative(field, value)?;
            if value > MAX_AMOUNT {
                return Err(AssumptionError::TooLarge {
                    field,
                    value,
                    max: MAX_AMOUNT,
                });
            }
        }
        if self.total_house_price == 0.0 {
            return Err(AssumptionError::NonPositive {
                field: "total_house_price",
                value: 0.0,
            });
        }

        // Rates compound over the horizon; every total must still fit in i64
        let ceiling = self.cost_ceiling();
        if !(ceiling <= MAX_PROJECTED_COST) {
            return Err(AssumptionError::CostsTooLarge {
                ceiling,
                max: MAX_PROJECTED_COST,
            });
        }

        Ok(())
    }

    /// Upper bound on any total the projection can produce.
    ///
    /// Rent, tax, HOA and insurance never decrease, and interest plus
    /// principal never exceeds the fixed payment, so the last month's costs
    /// times the horizon bound every sum.
    pub fn cost_ceiling(&self) -> f64 {
        let last = self.living_months.saturating_sub(1);
        let rent = inflated_monthly_cost(self.initial_monthly_rent, self.inflation_rate, last);
        let carrying = inflated_monthly_cost(
            self.monthly_hoa + self.monthly_insurance,
            self.inflation_rate,
            last,
        );
        let tax = inflated_monthly_cost(self.total_house_price, self.assessed_growth_rate(), last)
            * self.annual_property_tax_rate
            / 12.0;
        let payment = monthly_payment(
            self.total_house_price,
            self.downpayment_pct,
            self.mortgage_term_months,
            self.annual_interest_rate,
        );

        (rent + carrying + tax + payment) * self.living_months as f64 + self.downpayment()
    }

    /// Upfront cash paid at purchase
    pub fn downpayment(&self) -> f64 {
        self.total_house_price * self.downpayment_pct
    }

    /// Annual growth rate of the assessed value: the lesser of the cap and inflation
    pub fn assessed_growth_rate(&self) -> f64 {
        assessed_growth_rate(self.inflation_rate, self.assessment_cap_rate)
    }

    /// Calendar label (`YYYY-MM`) for a 0-based month, if a start month is set
    pub fn month_label(&self, month: u32) -> Option<String> {
        self.start_month
            .and_then(|start| start.checked_add_months(Months::new(month)))
            .map(|date| date.format("%Y-%m").to_string())
    }
}

impl Default for Assumptions {
    fn default() -> Self {
        Self::default_scenario()
    }
}

fn check_non_negative(field: &'static str, value: f64) -> Result<(), AssumptionError> {
    if !value.is_finite() {
        return Err(AssumptionError::NotFinite { field });
    }
    if value < 0.0 {
        return Err(AssumptionError::Negative { field, value });
    }
    Ok(())
}
