//! Monthly cost rows and projection results

use serde::{Deserialize, Serialize};

/// Rent due in one month
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentalRow {
    /// 0-based month of the horizon
    pub month: u32,
    /// Calendar month (`YYYY-MM`), when the projection has a start month
    pub label: Option<String>,
    pub rent: i64,
}

/// Every cost of owning for one month, in whole currency units
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HousingRow {
    pub month: u32,
    pub label: Option<String>,
    pub interest: i64,
    pub principal: i64,
    pub property_tax: i64,
    pub hoa: i64,
    pub insurance: i64,
    pub total: i64,
}

impl HousingRow {
    pub fn new(
        month: u32,
        interest: i64,
        principal: i64,
        property_tax: i64,
        hoa: i64,
        insurance: i64,
    ) -> Self {
        Self {
            month,
            label: None,
            interest,
            principal,
            property_tax,
            hoa,
            insurance,
            total: interest + principal + property_tax + hoa + insurance,
        }
    }

    /// Spend excluding principal, which is kept as equity
    pub fn pure_cost(&self) -> i64 {
        self.total - self.principal
    }
}

/// Complete projection result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    pub living_months: u32,

    /// Monthly rent rows
    pub rental: Vec<RentalRow>,

    /// Monthly ownership rows
    pub housing: Vec<HousingRow>,

    /// Fixed mortgage payment (principal plus interest), untruncated
    pub monthly_payment: f64,

    /// Upfront cash paid at purchase
    pub downpayment: f64,

    /// Mortgage balance left at the end of the horizon
    pub remaining_balance: f64,
}

impl ProjectionResult {
    pub fn new(
        living_months: u32,
        monthly_payment: f64,
        downpayment: f64,
        remaining_balance: f64,
    ) -> Self {
        Self {
            living_months,
            rental: Vec::with_capacity(living_months as usize),
            housing: Vec::with_capacity(living_months as usize),
            monthly_payment,
            downpayment,
            remaining_balance,
        }
    }

    pub fn total_rental_cost(&self) -> i64 {
        self.rental.iter().map(|r| r.rent).sum()
    }

    /// Every dollar spent on the house each month, downpayment excluded
    pub fn total_housing_cost(&self) -> i64 {
        self.housing.iter().map(|r| r.total).sum()
    }

    /// Housing spend net of principal paydown
    pub fn pure_housing_cost(&self) -> i64 {
        self.housing.iter().map(HousingRow::pure_cost).sum()
    }

    /// Get summary statistics
    pub fn summary(&self) -> ProjectionSummary {
        let total_rental_cost = self.total_rental_cost();
        let total_housing_cost = self.total_housing_cost();
        let pure_buying_cost = self.pure_housing_cost();
        let equity_built: i64 = self.housing.iter().map(|r| r.principal).sum();

        ProjectionSummary {
            living_months: self.living_months,
            monthly_payment: self.monthly_payment,
            downpayment: self.downpayment,
            total_rental_cost,
            total_housing_cost,
            total_buying_cost: (total_housing_cost as f64 + self.downpayment).trunc() as i64,
            pure_buying_cost,
            equity_built,
            remaining_balance: self.remaining_balance,
            rent_minus_pure_cost: total_rental_cost - pure_buying_cost,
        }
    }
}

/// Summary totals for one projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub living_months: u32,
    pub monthly_payment: f64,
    pub downpayment: f64,
    /// Sum of the rent series
    pub total_rental_cost: i64,
    /// Sum of monthly ownership costs, principal included
    pub total_housing_cost: i64,
    /// Housing cost plus the downpayment
    pub total_buying_cost: i64,
    /// Housing cost without principal or downpayment
    pub pure_buying_cost: i64,
    /// Principal paid down over the horizon
    pub equity_built: i64,
    pub remaining_balance: f64,
    /// Positive when owning costs less than renting, ignoring equity
    pub rent_minus_pure_cost: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_result() -> ProjectionResult {
        let mut result = ProjectionResult::new(2, 1500.0, 50_000.5, 199_000.0);
        result.rental.push(RentalRow { month: 0, label: None, rent: 2000 });
        result.rental.push(RentalRow { month: 1, label: None, rent: 2004 });
        result.housing.push(HousingRow::new(0, 1000, 500, 300, 100, 50));
        result.housing.push(HousingRow::new(1, 998, 502, 300, 100, 50));
        result
    }

    #[test]
    fn test_housing_row_totals() {
        let row = HousingRow::new(0, 2100, 1133, 547, 500, 60);
        assert_eq!(row.total, 4340);
        assert_eq!(row.pure_cost(), 3207);
    }

    #[test]
    fn test_summary() {
        let summary = sample_result().summary();

        assert_eq!(summary.total_rental_cost, 4004);
        assert_eq!(summary.total_housing_cost, 3900);
        assert_eq!(summary.pure_buying_cost, 2898);
        assert_eq!(summary.equity_built, 1002);
        // 3900 + 50000.5, fraction dropped
        assert_eq!(summary.total_buying_cost, 53_900);
        assert_eq!(summary.rent_minus_pure_cost, 1106);
    }

    #[test]
    fn test_empty_result() {
        let summary = ProjectionResult::new(0, 0.0, 0.0, 0.0).summary();
        assert_eq!(summary.total_rental_cost, 0);
        assert_eq!(summary.total_buying_cost, 0);
    }
}
