//! Month-indexed cost series and the inflation-accrual builders

use log::debug;
use serde::Serialize;

/// Drop fractional currency units (toward zero)
pub fn truncate(amount: f64) -> i64 {
    amount.trunc() as i64
}

/// Monthly compounding factor for an annual rate
pub fn monthly_growth_factor(annual_rate: f64) -> f64 {
    1.0 + annual_rate / 12.0
}

/// Assessed-value growth: inflation, held to the statutory cap
pub fn assessed_growth_rate(inflation_rate: f64, assessment_cap_rate: f64) -> f64 {
    assessment_cap_rate.min(inflation_rate)
}

/// A monthly series of whole-currency amounts, month 0 first
///
/// Entries are truncated as they are recorded and cannot be changed once
/// the builder that owns the series returns it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MonthlySeries {
    values: Vec<i64>,
}

impl MonthlySeries {
    pub(crate) fn with_capacity(months: u32) -> Self {
        Self {
            values: Vec::with_capacity(months as usize),
        }
    }

    /// Append the next month, truncating `amount`
    pub(crate) fn record(&mut self, amount: f64) {
        self.values.push(truncate(amount));
    }

    pub fn get(&self, month: usize) -> Option<i64> {
        self.values.get(month).copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_slice(&self) -> &[i64] {
        &self.values
    }

    pub fn iter(&self) -> impl Iterator<Item = i64> + '_ {
        self.values.iter().copied()
    }

    /// Sum of the truncated entries
    pub fn total(&self) -> i64 {
        self.values.iter().sum()
    }
}

/// Build the rent due each month.
///
/// Rent compounds monthly with inflation. The untruncated rent is carried
/// forward, so truncation error never compounds.
pub fn build_rental_series(
    term_months: u32,
    inflation_rate: f64,
    initial_rent: f64,
) -> MonthlySeries {
    let mut series = MonthlySeries::with_capacity(term_months);
    let growth = monthly_growth_factor(inflation_rate);

    let mut rent = initial_rent;
    for _ in 0..term_months {
        series.record(rent);
        rent *= growth;
    }

    debug!(
        "Rental series: {} months, first {:?}, last {:?}",
        series.len(),
        series.get(0),
        series.as_slice().last()
    );
    series
}

/// Build the property tax due each month.
///
/// Tax is levied on an assessed value starting at the purchase price. The
/// assessed value grows monthly at the lesser of the statutory cap and
/// inflation.
pub fn build_property_tax_series(
    term_months: u32,
    total_price: f64,
    property_tax_rate: f64,
    inflation_rate: f64,
    assessment_cap_rate: f64,
) -> MonthlySeries {
    let mut series = MonthlySeries::with_capacity(term_months);
    let growth = monthly_growth_factor(assessed_growth_rate(inflation_rate, assessment_cap_rate));

    let mut assessed_value = total_price;
    for _ in 0..term_months {
        series.record(assessed_value * property_tax_rate / 12.0);
        assessed_value *= growth;
    }

    debug!(
        "Property tax series: {} months, first {:?}, last {:?}",
        series.len(),
        series.get(0),
        series.as_slice().last()
    );
    series
}

/// A recurring cost (HOA dues, insurance) grown by inflation to `month`.
///
/// Closed form, not truncated: `base * (1 + inflation/12)^month`.
pub fn inflated_monthly_cost(base_monthly: f64, inflation_rate: f64, month: u32) -> f64 {
    base_monthly * monthly_growth_factor(inflation_rate).powf(month as f64)
}
